use super::*;
use pretty_assertions::assert_eq;

fn global() -> GlobalContext {
    GlobalContext::builder().print_handler(buffer_handler()).build()
}

#[test]
fn parse_then_run() {
    let global = global();
    let program = parse("var x = 40; return x + 2;", &global).unwrap();
    assert_eq!(program.run().unwrap(), Value::Int(42));
}

#[test]
fn lex_errors_are_syntax_errors() {
    let err = parse("var s = \"open;", &global()).unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(err.to_string(), "SyntaxError: unterminated string literal");
    assert_eq!(err.span().map(|s| s.start), Some(8));
}

#[test]
fn parse_errors_are_syntax_errors() {
    let err = parse("var = 1;", &global()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert!(err.as_eval().is_none());
    assert!(err.to_diagnostic().message.starts_with("SyntaxError: "));
}

#[test]
fn eval_errors_keep_their_display() {
    let global = global();
    let err: Error = parse("return missing;", &global)
        .unwrap()
        .run()
        .unwrap_err()
        .into();
    assert_eq!(err.category(), ErrorCategory::Reference);
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.to_string(), err.as_eval().unwrap().to_string());
    assert!(err.to_string().starts_with("ReferenceError: "));
}

#[test]
fn declared_modules_are_importable() {
    let global = global();
    declare_module(&global, "lib", "export var answer = 42;").unwrap();
    assert_eq!(global.module_status("lib"), ModuleStatus::Declared);

    let program = parse("import { answer } from \"lib\"; return answer;", &global).unwrap();
    assert_eq!(program.run().unwrap(), Value::Int(42));
}

#[test]
fn declare_module_reports_syntax_errors() {
    let global = global();
    let err = declare_module(&global, "lib", "export var;").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(global.module_status("lib"), ModuleStatus::Undeclared);
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
