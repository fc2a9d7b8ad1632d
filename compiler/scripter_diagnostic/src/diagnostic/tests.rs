use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token")
        .with_label(Span::new(4, 5), "expected `;`")
        .with_secondary_label(Span::new(0, 3), "statement starts here")
        .with_note("statements end with `;`");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.category(), ErrorCategory::Syntax);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("Variable 'x' is not declared")
        .with_label(Span::new(7, 8), "not found")
        .with_note("at main");

    assert_eq!(
        diag.to_string(),
        "error [E2001]: Variable 'x' is not declared\n  --> 7..8: not found\n  = note: at main"
    );
}

#[test]
fn test_no_primary_span() {
    let diag = Diagnostic::warning(ErrorCode::E1001).with_secondary_label(Span::DUMMY, "context");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
}
