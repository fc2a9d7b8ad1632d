use super::*;
use pretty_assertions::assert_eq;
use scripter_ir::{BinaryOp, ExprId, ExprKind, StmtId, StmtKind, UnaryOp, UpdateOp, VarStorage};

fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = scripter_lexer::lex(source, interner)
        .unwrap_or_else(|e| panic!("lex failed for {source:?}: {e}"));
    parse(&tokens, interner)
}

fn parse_ok(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    match parse_source(source, &interner) {
        Ok(output) => (output, interner),
        Err(e) => panic!("parse failed for {source:?}: {e}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse_source(source, &interner) {
        Ok(output) => panic!("expected parse error for {source:?}, got {output:?}"),
        Err(e) => e,
    }
}

fn body(output: &ParseOutput) -> Vec<StmtId> {
    output.arena.get_stmt_list(output.program.body).to_vec()
}

/// Expression of the single expression statement in `source`.
fn single_expr(output: &ParseOutput) -> ExprId {
    let stmts = body(output);
    assert_eq!(stmts.len(), 1);
    match output.arena.get_stmt(stmts[0]).kind {
        StmtKind::Expr(id) | StmtKind::Return(Some(id)) => id,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Render an expression as a fully parenthesized string.
fn render(output: &ParseOutput, interner: &StringInterner, id: ExprId) -> String {
    let arena = &output.arena;
    match arena.get_expr(id).kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::String(name) => format!("{:?}", interner.lookup(name)),
        ExprKind::Undefined => "undefined".to_string(),
        ExprKind::Ident(name) => interner.lookup(name).to_string(),
        ExprKind::Binary { op, left, right } => format!(
            "({} {} {})",
            render(output, interner, left),
            op.as_symbol(),
            render(output, interner, right)
        ),
        ExprKind::Unary { op, operand } => {
            format!("({}{})", op.as_symbol(), render(output, interner, operand))
        }
        ExprKind::Update { op, prefix, target } => {
            let target = render(output, interner, target);
            if prefix {
                format!("({}{target})", op.as_symbol())
            } else {
                format!("({target}{})", op.as_symbol())
            }
        }
        ExprKind::Assign { op, target, value } => format!(
            "({} {}= {})",
            render(output, interner, target),
            op.map_or("", |op| op.as_symbol()),
            render(output, interner, value)
        ),
        ExprKind::Call { func, args } => {
            let args: Vec<String> = arena
                .get_expr_list(args)
                .iter()
                .map(|&a| render(output, interner, a))
                .collect();
            format!("{}({})", render(output, interner, func), args.join(", "))
        }
        ExprKind::Field { receiver, field } => {
            format!("{}.{}", render(output, interner, receiver), interner.lookup(field))
        }
        ExprKind::Index { receiver, index } => format!(
            "{}[{}]",
            render(output, interner, receiver),
            render(output, interner, index)
        ),
        ExprKind::Array(items) => {
            let items: Vec<String> = arena
                .get_expr_list(items)
                .iter()
                .map(|&a| render(output, interner, a))
                .collect();
            format!("[{}]", items.join(", "))
        }
        ExprKind::Function(_) => "function".to_string(),
    }
}

fn render_source(source: &str) -> String {
    let (output, interner) = parse_ok(source);
    let id = single_expr(&output);
    render(&output, &interner, id)
}

// ===== Expressions =====

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(render_source("1 + 1 * 2 != 3;"), "((1 + (1 * 2)) != 3)");
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        render_source("!(false || true && true);"),
        "(!(false || (true && true)))"
    );
}

#[test]
fn test_full_precedence_ladder() {
    assert_eq!(
        render_source("a = b || c && d == e < f + g * -h;"),
        "(a = (b || (c && (d == (e < (f + (g * (-h))))))))"
    );
}

#[test]
fn test_binary_is_left_associative() {
    assert_eq!(render_source("1 - 2 - 3;"), "((1 - 2) - 3)");
    assert_eq!(render_source("\"a\" + 2 + true;"), "((\"a\" + 2) + true)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(render_source("a = b += 1;"), "(a = (b += 1))");
}

#[test]
fn test_compound_assignment_ops() {
    let (output, _) = parse_ok("x %= 2;");
    let id = single_expr(&output);
    assert!(matches!(
        output.arena.get_expr(id).kind,
        ExprKind::Assign {
            op: Some(BinaryOp::Mod),
            ..
        }
    ));
}

#[test]
fn test_prefix_and_postfix_updates() {
    assert_eq!(render_source("++x + y--;"), "((++x) + (y--))");
    let (output, _) = parse_ok("x++;");
    let id = single_expr(&output);
    assert!(matches!(
        output.arena.get_expr(id).kind,
        ExprKind::Update {
            op: UpdateOp::Increment,
            prefix: false,
            ..
        }
    ));
}

#[test]
fn test_postfix_chain() {
    assert_eq!(
        render_source("a.b(1, 2)[0].c;"),
        "a.b(1, 2)[0].c"
    );
}

#[test]
fn test_array_literal_with_trailing_comma() {
    assert_eq!(render_source("[1, \"two\", [],];"), "[1, \"two\", []]");
}

#[test]
fn test_call_with_trailing_comma() {
    assert_eq!(render_source("f(a, b,);"), "f(a, b)");
}

#[test]
fn test_unary_not_and_neg() {
    let (output, _) = parse_ok("!-x;");
    let id = single_expr(&output);
    let ExprKind::Unary { op, operand } = output.arena.get_expr(id).kind else {
        panic!("expected unary");
    };
    assert_eq!(op, UnaryOp::Not);
    assert!(matches!(
        output.arena.get_expr(operand).kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_function_expression() {
    let (output, interner) = parse_ok("register(function (a, b) { return a; });");
    let id = single_expr(&output);
    let ExprKind::Call { args, .. } = output.arena.get_expr(id).kind else {
        panic!("expected call");
    };
    let arg = output.arena.get_expr_list(args)[0];
    let ExprKind::Function(func) = output.arena.get_expr(arg).kind else {
        panic!("expected function expression");
    };
    let def = output.arena.get_function(func);
    assert_eq!(def.name, None);
    let params: Vec<&str> = output
        .arena
        .get_names(def.params)
        .iter()
        .map(|&n| interner.lookup(n))
        .collect();
    assert_eq!(params, vec!["a", "b"]);
    assert_eq!(output.arena.get_stmt_list(def.body).len(), 1);
}

#[test]
fn test_expression_spans() {
    let (output, _) = parse_ok("foo(1) + 22;");
    let id = single_expr(&output);
    assert_eq!(output.arena.get_expr(id).span, Span::new(0, 11));
}

// ===== Statements =====

#[test]
fn test_var_declarations() {
    let (output, interner) = parse_ok("var x = 1; var y;");
    let stmts = body(&output);
    assert_eq!(stmts.len(), 2);
    let StmtKind::Var { name, init, storage } = output.arena.get_stmt(stmts[1]).kind else {
        panic!("expected var");
    };
    assert_eq!(interner.lookup(name), "y");
    assert_eq!(init, None);
    assert_eq!(storage, VarStorage::Local);
    assert_eq!(output.program.static_count, 0);
}

#[test]
fn test_static_slots_are_numbered() {
    let (output, _) = parse_ok(
        "static var a = 1;
         function f() { static var b; return b; }
         static var c;",
    );
    assert_eq!(output.program.static_count, 3);
    let stmts = body(&output);
    assert!(matches!(
        output.arena.get_stmt(stmts[2]).kind,
        StmtKind::Var {
            storage: VarStorage::Static(slot),
            ..
        } if slot.index() == 2
    ));
}

#[test]
fn test_else_if_chain() {
    let (output, _) = parse_ok("if (a) { x = 1; } else if (b) { x = 2; } else x = 3;");
    let stmts = body(&output);
    let StmtKind::If { else_branch: Some(else_branch), .. } = output.arena.get_stmt(stmts[0]).kind
    else {
        panic!("expected if/else");
    };
    assert!(matches!(
        output.arena.get_stmt(else_branch).kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn test_for_header_parts_are_optional() {
    let (output, _) = parse_ok("for (;;) { break; }");
    let stmts = body(&output);
    assert!(matches!(
        output.arena.get_stmt(stmts[0]).kind,
        StmtKind::For {
            init: None,
            cond: None,
            step: None,
            ..
        }
    ));

    let (output, _) = parse_ok("for (var i = 0; i < 5; i++) x++;");
    let stmts = body(&output);
    let StmtKind::For { init: Some(init), cond: Some(_), step: Some(_), .. } =
        output.arena.get_stmt(stmts[0]).kind
    else {
        panic!("expected full for header");
    };
    assert!(matches!(output.arena.get_stmt(init).kind, StmtKind::Var { .. }));
}

#[test]
fn test_return_and_empty_statements() {
    let (output, _) = parse_ok("return x++;\n;");
    let kinds: Vec<StmtKind> = body(&output)
        .iter()
        .map(|&s| output.arena.get_stmt(s).kind)
        .collect();
    assert!(matches!(kinds[0], StmtKind::Return(Some(_))));
    assert_eq!(kinds[1], StmtKind::Empty);
}

#[test]
fn test_nested_block_return() {
    let (output, _) = parse_ok("{ return \"ok\"; } throw \"Did not return!\";");
    let stmts = body(&output);
    assert!(matches!(output.arena.get_stmt(stmts[0]).kind, StmtKind::Block(_)));
    assert!(matches!(output.arena.get_stmt(stmts[1]).kind, StmtKind::Throw(_)));
}

#[test]
fn test_function_declaration() {
    let (output, interner) = parse_ok("function run() { var x = 1; x += 1; }");
    let stmts = body(&output);
    let StmtKind::Function(func) = output.arena.get_stmt(stmts[0]).kind else {
        panic!("expected function declaration");
    };
    let def = output.arena.get_function(func);
    assert_eq!(def.name.map(|n| interner.lookup(n)), Some("run"));
    assert!(def.params.is_empty());
}

// ===== Modules =====

#[test]
fn test_import() {
    let (output, interner) = parse_ok("import { a, b } from \"lib\";");
    let stmts = body(&output);
    let StmtKind::Import { names, module } = output.arena.get_stmt(stmts[0]).kind else {
        panic!("expected import");
    };
    let names: Vec<&str> = output
        .arena
        .get_names(names)
        .iter()
        .map(|&n| interner.lookup(n))
        .collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(interner.lookup(module), "lib");
}

#[test]
fn test_exports_are_recorded_in_order() {
    let (output, interner) = parse_ok(
        "export var a = 1;
         export static var b = 2;
         export function c() { return a; }
         var hidden = 3;",
    );
    let exports: Vec<&str> = output
        .program
        .exports
        .iter()
        .map(|&n| interner.lookup(n))
        .collect();
    assert_eq!(exports, vec!["a", "b", "c"]);
    assert_eq!(output.program.static_count, 1);
}

// ===== Errors =====

#[test]
fn test_static_in_nested_block_is_rejected() {
    let err = parse_err("if (true) { static var x = 1; }");
    assert_eq!(err.code, ErrorCode::E1006);
    assert_eq!(err.category(), ErrorCategory::Syntax);

    let err = parse_err("while (x) { static var y; }");
    assert_eq!(err.code, ErrorCode::E1006);

    let err = parse_err("function f() { { static var z; } }");
    assert_eq!(err.code, ErrorCode::E1006);
}

#[test]
fn test_export_outside_top_level_is_rejected() {
    let err = parse_err("function f() { export var x = 1; }");
    assert_eq!(err.code, ErrorCode::E1007);
    let err = parse_err("export x;");
    assert_eq!(err.code, ErrorCode::E1001);
}

#[test]
fn test_break_outside_loop_is_rejected() {
    let err = parse_err("break;");
    assert_eq!(err.code, ErrorCode::E1008);
    assert_eq!(err.message, "`break` outside of a loop");

    let err = parse_err("while (true) { function f() { continue; } }");
    assert_eq!(err.code, ErrorCode::E1008);
}

#[test]
fn test_invalid_assignment_targets() {
    for source in ["undefined = 1;", "1 = 2;", "f() = 3;", "++1;", "(a + b)++;", "x++ = 1;"] {
        let err = parse_err(source);
        assert_eq!(err.code, ErrorCode::E1005, "{source}");
        assert_eq!(err.message, "invalid assignment target");
    }
}

#[test]
fn test_missing_semicolon() {
    let err = parse_err("var x = 1 var y = 2;");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `;`, found `var`");
    assert_eq!(err.span, Span::new(10, 13));
}

#[test]
fn test_unclosed_block() {
    let err = parse_err("function f() { return 1;");
    assert_eq!(err.code, ErrorCode::E1003);
}

#[test]
fn test_expected_expression() {
    let err = parse_err("var x = ;");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "expected expression, found `;`");
}

#[test]
fn test_import_requires_string_module() {
    let err = parse_err("import { a } from lib;");
    assert_eq!(err.code, ErrorCode::E1009);
}

#[test]
fn test_error_to_diagnostic() {
    let err = parse_err("var = 1;");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
}

#[test]
fn test_deeply_nested_parens() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let (output, _) = parse_ok(&source);
    assert_eq!(body(&output).len(), 1);
}
