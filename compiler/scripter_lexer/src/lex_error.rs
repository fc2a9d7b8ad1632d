//! Lexer error type.

use std::fmt;

use scripter_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use scripter_ir::Span;

/// A lexer error: what went wrong, and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character no token starts with.
    InvalidCharacter(char),
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `*/`.
    UnterminatedComment,
    /// Unknown escape such as `\q`.
    InvalidEscape(char),
    /// Integer literal does not fit in a signed 64-bit integer.
    IntegerOutOfRange,
    /// Source longer than `u32::MAX` bytes.
    SourceTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::IntegerOutOfRange => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
            LexErrorKind::SourceTooLarge => ErrorCode::E0006,
        }
    }

    /// Always `Syntax`.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Syntax
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::UnterminatedComment => "comment starts here",
            _ => "here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are \\\" \\\\ \\n \\t \\r \\0")
            }
            LexErrorKind::IntegerOutOfRange => {
                diag.with_note(format!("integers range from {} to {}", i64::MIN, i64::MAX))
            }
            _ => diag,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::InvalidCharacter(c) => write!(f, "unexpected character `{}`", c.escape_debug()),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::InvalidEscape(c) => write!(f, "invalid escape sequence `\\{}`", c.escape_debug()),
            LexErrorKind::IntegerOutOfRange => write!(f, "integer literal is too large"),
            LexErrorKind::SourceTooLarge => write!(f, "source exceeds {} bytes", u32::MAX),
        }
    }
}

impl std::error::Error for LexError {}
