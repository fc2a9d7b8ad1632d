use super::*;
use pretty_assertions::assert_eq;

#[test]
fn factories_set_message_from_kind() {
    let err = undefined_variable("x");
    assert_eq!(err.message, "'x' is not defined");
    assert_eq!(err.category(), ErrorCategory::Reference);
    assert_eq!(err.code(), ErrorCode::E2001);

    let err = missing_export("lib", "foo");
    assert_eq!(err.message, "Module 'lib' does not export 'foo'");
    assert_eq!(err.category(), ErrorCategory::Module);

    let err = undeclared_module("lib");
    assert_eq!(err.message, "Module 'lib' was not declared");
}

#[test]
fn global_assignment_message() {
    let err = global_assignment("print");
    assert_eq!(err.message, "Cannot set variable value in the global context");
    assert_eq!(err.category(), ErrorCategory::Reference);
}

#[test]
fn categories_cover_every_family() {
    assert_eq!(unknown_property("list", "foo").category(), ErrorCategory::Property);
    assert_eq!(index_out_of_range(5, 2).category(), ErrorCategory::Property);
    assert_eq!(not_callable("number").category(), ErrorCategory::Type);
    assert_eq!(arity_mismatch("f", 1, 2).category(), ErrorCategory::Type);
    assert_eq!(
        invalid_binary_op(BinaryOp::Sub, "string", "number").category(),
        ErrorCategory::Type
    );
    assert_eq!(division_by_zero().category(), ErrorCategory::Runtime);
    assert_eq!(call_depth_exceeded(10).category(), ErrorCategory::Runtime);
    assert_eq!(EvalError::new("boom").category(), ErrorCategory::Runtime);
}

#[test]
fn thrown_error_uses_value_display() {
    let err = thrown(Value::string("Error!"));
    assert_eq!(err.message, "Error!");
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert_eq!(err.thrown_value(), Some(&Value::string("Error!")));
    assert_eq!(err.to_string(), "ScriptRuntimeError: Error!");

    let err = thrown(Value::Int(42));
    assert_eq!(err.message, "42");
}

#[test]
fn arity_message_pluralizes() {
    assert_eq!(arity_mismatch("f", 1, 0).message, "f expects 1 argument, got 0");
    assert_eq!(arity_mismatch("g", 2, 3).message, "g expects 2 arguments, got 3");
}

#[test]
fn or_span_keeps_inner_span() {
    let inner = Span::new(4, 5);
    let outer = Span::new(0, 10);
    let err = division_by_zero().with_span(inner).or_span(outer);
    assert_eq!(err.span, Some(inner));

    let err = division_by_zero().or_span(outer);
    assert_eq!(err.span, Some(outer));
}

#[test]
fn diagnostic_includes_backtrace_frames() {
    let backtrace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".to_string(),
            span: Some(Span::new(20, 27)),
        },
        BacktraceFrame {
            name: "outer".to_string(),
            span: None,
        },
    ]);
    let diag = thrown(Value::string("bad"))
        .with_span(Span::new(3, 14))
        .with_backtrace(backtrace)
        .to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E2005);
    assert_eq!(diag.message, "ScriptRuntimeError: bad");
    assert_eq!(diag.primary_span(), Some(Span::new(3, 14)));
    assert_eq!(
        diag.notes,
        vec!["in inner called at 20..27".to_string(), "in outer".to_string()]
    );
}

#[test]
fn backtrace_display_lists_frames() {
    let backtrace = EvalBacktrace::new(vec![BacktraceFrame {
        name: "f".to_string(),
        span: Some(Span::new(1, 4)),
    }]);
    assert_eq!(backtrace.to_string(), "stack backtrace:\n  0: f at 1..4\n");
    assert_eq!(EvalBacktrace::default().to_string(), "");
}

#[test]
fn control_action_from_error() {
    let action = ControlAction::from(division_by_zero());
    assert!(matches!(action, ControlAction::Error(e) if e.kind == EvalErrorKind::DivisionByZero));
}
