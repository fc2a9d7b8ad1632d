//! Scripter IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by every phase:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (Expr, Stmt, `FunctionDef`, Program)
//! - Arena allocation for expressions and statements
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//! - **Copy nodes**: every node is `Copy`, so evaluators can read a node
//!   out of the arena and keep going without holding a borrow

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use ast::{
    BinaryOp, Expr, ExprKind, FunctionDef, Program, Stmt, StmtKind, UnaryOp, UpdateOp, VarStorage,
};
pub use expr_id::{ExprId, ExprRange, FunctionId, NameRange, StaticSlot, StmtId, StmtRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
