//! Expression Types
//!
//! All children are indices into the `ExprArena`, never boxes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp, UpdateOp};
use crate::{ExprId, ExprRange, FunctionId, Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),

    /// String literal (interned).
    String(Name),

    /// `true` / `false`
    Bool(bool),

    /// `undefined`
    Undefined,

    /// Array literal: `[a, b, c]`
    Array(ExprRange),

    /// Variable reference.
    Ident(Name),

    /// Binary operation. `&&` and `||` short-circuit.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: `!x`, `-x`
    Unary { op: UnaryOp, operand: ExprId },

    /// `++x`, `x++`, `--x`, `x--`
    Update {
        op: UpdateOp,
        prefix: bool,
        target: ExprId,
    },

    /// Assignment. `op` is `Some` for compound forms like `+=`.
    Assign {
        op: Option<BinaryOp>,
        target: ExprId,
        value: ExprId,
    },

    /// Call: `func(args)`
    Call { func: ExprId, args: ExprRange },

    /// Property access: `receiver.field`
    Field { receiver: ExprId, field: Name },

    /// Index access: `receiver[index]`
    Index { receiver: ExprId, index: ExprId },

    /// Function expression: `function (a) { ... }`
    Function(FunctionId),
}

impl ExprKind {
    /// Whether this expression may appear on the left of `=` or under `++`/`--`.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            ExprKind::Ident(_) | ExprKind::Field { .. } | ExprKind::Index { .. }
        )
    }
}
