//! Render diagnostics as annotated source snippets with `ariadne`.

use std::io::IsTerminal;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use scripter_diagnostic::{Diagnostic, Severity};

/// Render `diag` against `source` as it would appear on a terminal.
///
/// Labels whose span falls outside `source` (a runtime error raised inside
/// another module's code, for instance) are dropped; their text is kept as
/// a note.
pub fn render(diag: &Diagnostic, source: &str, path: &str, color: bool) -> String {
    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
    };
    let offset = diag
        .primary_span()
        .filter(|span| span.fits(source.len()))
        .map_or(0, |span| span.start as usize);

    let mut report = Report::build(kind, path, offset)
        .with_code(diag.code.as_str())
        .with_message(&diag.message)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        );

    for label in &diag.labels {
        if !label.span.fits(source.len()) {
            report = report.with_note(format!("{} at {}", label.message, label.span));
            continue;
        }
        let label_color = if label.is_primary {
            Color::Red
        } else {
            Color::Blue
        };
        report = report.with_label(
            Label::new((path, label.span.to_range()))
                .with_message(&label.message)
                .with_color(label_color),
        );
    }
    for note in &diag.notes {
        report = report.with_note(note);
    }

    let mut out = Vec::new();
    if report
        .finish()
        .write((path, Source::from(source.to_string())), &mut out)
        .is_err()
    {
        return diag.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Print `diag` to stderr, colored when stderr is a terminal.
pub fn emit(diag: &Diagnostic, source: &str, path: &str) {
    let color = std::io::stderr().is_terminal();
    eprint!("{}", render(diag, source, path, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripter_diagnostic::ErrorCode;
    use scripter_ir::Span;

    #[test]
    fn renders_code_message_and_label() {
        let source = "var x = y;\n";
        let diag = Diagnostic::error(ErrorCode::E2001)
            .with_message("ReferenceError: y is not defined")
            .with_label(Span::new(8, 9), "here");
        let out = render(&diag, source, "main.js", false);

        assert!(out.contains("E2001"), "{out}");
        assert!(out.contains("ReferenceError: y is not defined"), "{out}");
        assert!(out.contains("main.js"), "{out}");
        assert!(out.contains("var x = y;"), "{out}");
        assert!(out.contains("here"), "{out}");
    }

    #[test]
    fn out_of_bounds_labels_become_notes() {
        let diag = Diagnostic::error(ErrorCode::E2005)
            .with_message("ScriptRuntimeError: boom")
            .with_label(Span::new(40, 44), "thrown here");
        let out = render(&diag, "return 1;", "main.js", false);

        assert!(out.contains("thrown here at 40..44"), "{out}");
    }
}
