//! Statement types, function definitions and the program root.

use std::fmt;

use crate::{ExprId, FunctionId, Name, NameRange, Span, StaticSlot, StmtId, StmtRange};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Where a `var` declaration keeps its value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarStorage {
    /// Ordinary binding, fresh per execution (and per call/block).
    Local,
    /// `static var`: a slot owned by the compiled program, initialized once.
    Static(StaticSlot),
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement: `f();`
    Expr(ExprId),

    /// `var name = init;` / `static var name = init;`
    Var {
        name: Name,
        init: Option<ExprId>,
        storage: VarStorage,
    },

    /// `function name(params) { body }`
    Function(FunctionId),

    /// `if (cond) then_branch else else_branch`
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },

    /// `while (cond) body`
    While { cond: ExprId, body: StmtId },

    /// `for (init; cond; step) body`
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtId,
    },

    /// `{ ... }`
    Block(StmtRange),

    /// `return;` / `return value;`
    Return(Option<ExprId>),

    /// `throw value;`
    Throw(ExprId),

    /// `break;`
    Break,

    /// `continue;`
    Continue,

    /// `import { names } from "module";`
    Import { names: NameRange, module: Name },

    /// `;`
    Empty,
}

/// Function definition, shared by declarations and function expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    /// `None` for anonymous function expressions.
    pub name: Option<Name>,
    pub params: NameRange,
    pub body: StmtRange,
    pub span: Span,
}

/// Root of a parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    /// Top-level statements.
    pub body: StmtRange,
    /// Number of `static var` slots the program needs.
    pub static_count: u32,
    /// Names marked with `export`, in declaration order.
    pub exports: Vec<Name>,
}
