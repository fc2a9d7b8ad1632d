//! Failures surfaced by the embedding API.
//!
//! Each phase keeps its own structured error; `Error` only routes them so a
//! caller can use `?` across parse and evaluate.

use scripter_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use scripter_eval::EvalError;
use scripter_ir::Span;
use scripter_lexer::LexError;
use scripter_parse::ParseError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("SyntaxError: {0}")]
    Lex(#[from] LexError),
    #[error("SyntaxError: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Lex(err) => err.category(),
            Error::Parse(err) => err.category(),
            Error::Eval(err) => err.category(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(err) => err.code(),
            Error::Parse(err) => err.code,
            Error::Eval(err) => err.code(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span),
            Error::Parse(err) => Some(err.span),
            Error::Eval(err) => err.span,
        }
    }

    /// The runtime error, if evaluation failed.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            Error::Eval(err) => Some(err),
            Error::Lex(_) | Error::Parse(_) => None,
        }
    }

    /// Diagnostic whose message starts with the category, as `Display` does.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => prefix_category(err.to_diagnostic(), err.category()),
            Error::Parse(err) => prefix_category(err.to_diagnostic(), err.category()),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }
}

fn prefix_category(mut diag: Diagnostic, category: ErrorCategory) -> Diagnostic {
    diag.message = format!("{category}: {}", diag.message);
    diag
}
