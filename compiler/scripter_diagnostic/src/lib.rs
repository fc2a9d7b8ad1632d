//! Diagnostic system for error reporting.
//!
//! Every failure the toolchain can produce maps to:
//! - an `ErrorCode` for searchability
//! - an `ErrorCategory` visible to embedding hosts
//! - a `Diagnostic` with a message, labeled spans and notes
//!
//! Rendering lives in the driver; this crate only carries data.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
