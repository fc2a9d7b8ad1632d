//! Runtime error types and their constructors.
//!
//! `EvalErrorKind` carries the structured data for each failure; factory
//! functions (`undefined_variable()`, `division_by_zero()`, ...) build an
//! `EvalError` with both `kind` and `message` filled in. Every kind maps to
//! one `ErrorCategory`, which is what embedders match on.

use std::fmt;

use scripter_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use scripter_ir::{BinaryOp, Span, UnaryOp};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Structured runtime failure.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Reference
    UndefinedVariable {
        name: String,
    },
    GlobalAssignment {
        name: String,
    },

    // Module
    UndeclaredModule {
        module: String,
    },
    MissingExport {
        module: String,
        name: String,
    },
    ImportCycle {
        module: String,
    },

    // Property
    UnknownProperty {
        type_name: String,
        property: String,
    },
    IndexOutOfRange {
        index: i64,
        len: usize,
    },

    // Type
    NotCallable {
        type_name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    InvalidBinaryOp {
        op: BinaryOp,
        left: String,
        right: String,
    },
    InvalidUnaryOp {
        op: UnaryOp,
        operand: String,
    },
    TypeMismatch {
        expected: String,
        got: String,
    },
    NoProperties {
        type_name: String,
        property: String,
    },
    NotIndexable {
        type_name: String,
    },

    // Runtime
    Thrown {
        value: Value,
    },
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },
    StackOverflow {
        depth: usize,
    },
    StepLimitExceeded {
        limit: u64,
    },
    ProgramDropped {
        function: String,
    },
    ScopeReleased,

    /// Errors raised by host code through `EvalError::new`.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedVariable { .. } | Self::GlobalAssignment { .. } => {
                ErrorCategory::Reference
            }
            Self::UndeclaredModule { .. } | Self::MissingExport { .. } | Self::ImportCycle { .. } => {
                ErrorCategory::Module
            }
            Self::UnknownProperty { .. } | Self::IndexOutOfRange { .. } => ErrorCategory::Property,
            Self::NotCallable { .. }
            | Self::ArityMismatch { .. }
            | Self::InvalidBinaryOp { .. }
            | Self::InvalidUnaryOp { .. }
            | Self::TypeMismatch { .. }
            | Self::NoProperties { .. }
            | Self::NotIndexable { .. } => ErrorCategory::Type,
            Self::Thrown { .. }
            | Self::DivisionByZero
            | Self::ModuloByZero
            | Self::IntegerOverflow { .. }
            | Self::StackOverflow { .. }
            | Self::StepLimitExceeded { .. }
            | Self::ProgramDropped { .. }
            | Self::ScopeReleased
            | Self::Custom { .. } => ErrorCategory::Runtime,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "'{name}' is not defined"),
            Self::GlobalAssignment { .. } => {
                write!(f, "Cannot set variable value in the global context")
            }

            Self::UndeclaredModule { module } => write!(f, "Module '{module}' was not declared"),
            Self::MissingExport { module, name } => {
                write!(f, "Module '{module}' does not export '{name}'")
            }
            Self::ImportCycle { module } => {
                write!(f, "Module '{module}' is already being imported (import cycle)")
            }

            Self::UnknownProperty {
                type_name,
                property,
            } => write!(f, "{type_name} has no property '{property}'"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }

            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::InvalidBinaryOp { op, left, right } => write!(
                f,
                "operator `{}` cannot be applied to {left} and {right}",
                op.as_symbol()
            ),
            Self::InvalidUnaryOp { op, operand } => write!(
                f,
                "operator `{}` cannot be applied to {operand}",
                op.as_symbol()
            ),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NoProperties {
                type_name,
                property,
            } => write!(f, "cannot read property '{property}' of {type_name}"),
            Self::NotIndexable { type_name } => write!(f, "cannot index into {type_name}"),

            Self::Thrown { value } => write!(f, "{value}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "step limit exceeded (limit: {limit})")
            }
            Self::ProgramDropped { function } => {
                write!(f, "cannot call {function}: its program has been dropped")
            }
            Self::ScopeReleased => {
                write!(f, "the scope this function was declared in is no longer available")
            }

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// One call in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name, `<anonymous>` for function expressions.
    pub name: String,
    /// Where the call was made.
    pub span: Option<Span>,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        EvalBacktrace { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Runtime error.
///
/// Aborts the current `evaluate`. `message` always equals `kind.to_string()`;
/// for a script `throw` it is the thrown value's string form.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    /// Innermost expression or statement being evaluated.
    pub span: Option<Span>,
    /// Script call stack at the error site.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Create a runtime error with a free-form message.
    ///
    /// Intended for native functions; the category is `ScriptRuntimeError`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn code(&self) -> ErrorCode {
        match self.category() {
            ErrorCategory::Reference => ErrorCode::E2001,
            ErrorCategory::Module => ErrorCode::E2002,
            ErrorCategory::Property => ErrorCode::E2003,
            ErrorCategory::Type => ErrorCode::E2004,
            ErrorCategory::Runtime | ErrorCategory::Syntax => ErrorCode::E2005,
        }
    }

    /// The value passed to `throw`, if this error came from one.
    pub fn thrown_value(&self) -> Option<&Value> {
        match &self.kind {
            EvalErrorKind::Thrown { value } => Some(value),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(format!("{}: {}", self.category(), self.message));
        if let Some(span) = self.span {
            let label = if self.thrown_value().is_some() {
                "thrown here"
            } else {
                "here"
            };
            diag = diag.with_label(span, label);
        }
        if let Some(backtrace) = &self.backtrace {
            for frame in backtrace.frames() {
                let note = match frame.span {
                    Some(span) => format!("in {} called at {span}", frame.name),
                    None => format!("in {}", frame.name),
                };
                diag = diag.with_note(note);
            }
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message)
    }
}

impl std::error::Error for EvalError {}

/// Non-local exit from a statement.
///
/// `Return`, `Break` and `Continue` are caught by the nearest function call
/// or loop. `Error` travels to the top of the execution.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Return(Value),
    Break,
    Continue,
    Error(Box<EvalError>),
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

// Reference Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// The name resolved to the global context, which is read-only for scripts.
#[cold]
pub fn global_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::GlobalAssignment {
        name: name.to_string(),
    })
}

// Module Errors

#[cold]
pub fn undeclared_module(module: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndeclaredModule {
        module: module.to_string(),
    })
}

#[cold]
pub fn missing_export(module: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingExport {
        module: module.to_string(),
        name: name.to_string(),
    })
}

#[cold]
pub fn import_cycle(module: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImportCycle {
        module: module.to_string(),
    })
}

// Property Errors

#[cold]
pub fn unknown_property(type_name: &str, property: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownProperty {
        type_name: type_name.to_string(),
        property: property.to_string(),
    })
}

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

// Type Errors

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        op,
        operand: operand.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Property access on a primitive value.
#[cold]
pub fn no_properties(type_name: &str, property: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoProperties {
        type_name: type_name.to_string(),
        property: property.to_string(),
    })
}

#[cold]
pub fn not_indexable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable {
        type_name: type_name.to_string(),
    })
}

// Runtime Errors

/// Error raised by a script `throw`.
#[cold]
pub fn thrown(value: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Thrown { value })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn call_depth_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn step_limit_exceeded(limit: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StepLimitExceeded { limit })
}

#[cold]
pub fn program_dropped(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ProgramDropped {
        function: function.to_string(),
    })
}

#[cold]
pub fn scope_released() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ScopeReleased)
}

#[cfg(test)]
mod tests;
