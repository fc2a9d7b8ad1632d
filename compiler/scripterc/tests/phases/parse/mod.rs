//! Programs that fail to parse never run.

use pretty_assertions::assert_eq;
use scripterc::{ErrorCategory, ErrorCode};

use crate::common::{global, run_err};

#[test]
fn static_in_nested_block_is_a_syntax_error() {
    let err = run_err("if (true) { static var x = 1; }");
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(err.code(), ErrorCode::E1006);

    let err = run_err("function f() { while (true) { static var x = 1; } }");
    assert_eq!(err.code(), ErrorCode::E1006);
}

#[test]
fn static_at_function_top_level_is_allowed() {
    let global = global();
    assert!(scripterc::parse("function f() { static var calls = 0; calls++; return calls; }", &global).is_ok());
}

#[test]
fn export_outside_program_body_is_rejected() {
    assert_eq!(run_err("{ export var x = 1; }").code(), ErrorCode::E1007);
}

#[test]
fn break_outside_loop_is_rejected() {
    assert_eq!(run_err("break;").code(), ErrorCode::E1008);
    assert_eq!(
        run_err("while (true) { function f() { continue; } }").code(),
        ErrorCode::E1008
    );
}

#[test]
fn syntax_error_prevents_evaluation() {
    let global = global();
    let err = scripterc::parse("print(\"before\"); var = 2;", &global).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(global.print_output(), "");
}

#[test]
fn lex_errors_surface_as_syntax_errors() {
    let err = run_err("var x = 1 @ 2;");
    assert_eq!(err.category(), ErrorCategory::Syntax);
    assert_eq!(err.to_string(), "SyntaxError: unexpected character `@`");
}
