use pretty_assertions::assert_eq;
use scripterc::{ErrorCategory, EvalErrorKind, RuntimeDomain, Value};

use crate::common::{compile, global, run, run_err};

#[test]
fn reevaluation_starts_from_fresh_locals() {
    let global = global();
    let program = compile(&global, "var x = 1; return x;");
    let mut domain = RuntimeDomain::default();
    for _ in 0..3 {
        assert_eq!(program.evaluate(&mut domain).unwrap(), Value::Int(1));
    }
}

#[test]
fn statics_survive_reevaluation() {
    let global = global();
    let program = compile(&global, "static var x = 1 + 1; x++; return x;");
    assert_eq!(program.run().unwrap(), Value::Int(3));
    assert_eq!(program.run().unwrap(), Value::Int(4));
}

#[test]
fn separately_compiled_programs_have_separate_statics() {
    let global = global();
    let source = "static var n = 0; n += 1; return n;";
    let first = compile(&global, source);
    let second = compile(&global, source);
    assert_eq!(first.run().unwrap(), Value::Int(1));
    assert_eq!(first.run().unwrap(), Value::Int(2));
    assert_eq!(second.run().unwrap(), Value::Int(1));
}

#[test]
fn operator_precedence() {
    assert_eq!(run("return (1 + 1 * 2) != 3;"), Value::Bool(false));
    assert_eq!(run("return !(false || true && true);"), Value::Bool(false));
    assert_eq!(run("return 2 + 3 * 4 - 10 / 2;"), Value::Int(9));
}

#[test]
fn string_concatenation_is_left_to_right() {
    assert_eq!(run("return \"a\" + 2 + true;"), Value::from("a2true"));
    assert_eq!(run("return 1 + 2 + \"x\";"), Value::from("3x"));
}

#[test]
fn return_inside_block_ends_program() {
    assert_eq!(
        run("{ return \"ok\"; } throw \"Did not return!\";"),
        Value::from("ok")
    );
}

#[test]
fn undefined_equals_undefined() {
    assert_eq!(run("return undefined == undefined;"), Value::Bool(true));
    assert_eq!(run("var x; return x == undefined;"), Value::Bool(true));
}

#[test]
fn else_if_chains_pick_first_match() {
    let source = |n: i64| {
        format!(
            "var n = {n}; if (n < 0) {{ return \"neg\"; }} else if (n == 0) {{ return \"zero\"; }} else if (n < 10) {{ return \"small\"; }} else {{ return \"big\"; }}"
        )
    };
    assert_eq!(run(&source(-4)), Value::from("neg"));
    assert_eq!(run(&source(0)), Value::from("zero"));
    assert_eq!(run(&source(7)), Value::from("small"));
    assert_eq!(run(&source(99)), Value::from("big"));
}

#[test]
fn update_and_compound_assignment_sequence() {
    assert_eq!(
        run("var x = 1; var y = ++x; x = (x + y) * 2; x += 1; return x++;"),
        Value::Int(9)
    );
}

#[test]
fn loops_sum_to_ten() {
    assert_eq!(
        run("var i = 0; var sum = 0; while (i < 5) { sum += i; i++; } return sum;"),
        Value::Int(10)
    );
    assert_eq!(
        run("var sum = 0; for (var i = 0; i < 5; i++) { sum += i; } return sum;"),
        Value::Int(10)
    );
}

#[test]
fn function_locals_are_per_call() {
    let source = "
        var counter = 0;
        function bump() {
            var local = 0;
            local = local + 1;
            counter = counter + local;
        }
        bump();
        bump();
        return counter;
    ";
    assert_eq!(run(source), Value::Int(2));
}

#[test]
fn closures_share_captured_variables() {
    let source = "
        function makeCounter() {
            var n = 0;
            return function () { n++; return n; };
        }
        var a = makeCounter();
        var b = makeCounter();
        a();
        a();
        return a() * 10 + b();
    ";
    assert_eq!(run(source), Value::Int(31));
}

#[test]
fn natives_see_evaluated_arguments_and_caller_variables() {
    let global = global();
    global.register_function("describe", |ctx, args| {
        let scale = ctx.get_variable("scale").unwrap_or_default();
        Ok(Value::string(format!("{} x{scale}", args.len())))
    });
    let program = compile(&global, "var scale = 3; return describe(1 + 1, \"b\");");
    assert_eq!(program.run().unwrap(), Value::from("2 x3"));
}

#[test]
fn throw_is_a_script_runtime_error() {
    let err = run_err("throw \"Error!\";");
    assert_eq!(err.category(), ErrorCategory::Runtime);
    let eval = err.as_eval().unwrap();
    assert_eq!(eval.message, "Error!");
    assert_eq!(eval.thrown_value(), Some(&Value::from("Error!")));
}

#[test]
fn undeclared_variables_are_reference_errors() {
    let err = run_err("return nope;");
    assert_eq!(err.category(), ErrorCategory::Reference);
    assert_eq!(err.to_string(), "ReferenceError: 'nope' is not defined");

    let err = run_err("nope = 1;");
    assert_eq!(err.category(), ErrorCategory::Reference);
}

#[test]
fn global_context_refuses_assignment() {
    let global = global();
    global.register_value("limit", Value::Int(5));
    let err = compile(&global, "limit = 6;").run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Reference);
    assert_eq!(
        err.to_string(),
        "ReferenceError: Cannot set variable value in the global context"
    );
    assert_eq!(global.get_value("limit"), Some(Value::Int(5)));
}

#[test]
fn runtime_errors_carry_backtraces() {
    let global = global();
    let source = "
        function inner() { return missing; }
        function outer() { return inner(); }
        outer();
    ";
    let err = compile(&global, source).run().unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedVariable { .. }));
    assert!(err.span.is_some());
    let names: Vec<_> = err
        .backtrace
        .as_ref()
        .unwrap()
        .frames()
        .iter()
        .map(|frame| frame.name.clone())
        .collect();
    assert_eq!(names, vec!["inner".to_string(), "outer".to_string()]);
}

#[test]
fn print_writes_to_the_context_handler() {
    let global = global();
    compile(&global, "print(\"sum\", 2 + 3, [1, \"x\"]);")
        .run()
        .unwrap();
    assert_eq!(global.print_output(), "sum 5 [1, \"x\"]\n");
}
