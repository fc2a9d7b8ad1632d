//! AST node types.
//!
//! - `expr`: expression nodes
//! - `stmt`: statements, function definitions, program root
//! - `operators`: binary, unary and update operators

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp, UpdateOp};
pub use stmt::{FunctionDef, Program, Stmt, StmtKind, VarStorage};

#[cfg(test)]
mod tests;
