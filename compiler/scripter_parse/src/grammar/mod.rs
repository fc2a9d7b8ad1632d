//! Grammar rules, split by construct.
//!
//! - `expr`: expressions, from assignment down to primaries
//! - `stmt`: statements, function definitions and module syntax

mod expr;
mod stmt;
