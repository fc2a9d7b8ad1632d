//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions and statements
//! - Child references use index types
//! - Lists (arguments, block bodies, parameters) use ranges into flat storage

use super::ast::{Expr, FunctionDef, Stmt};
use super::{ExprId, ExprRange, FunctionId, Name, NameRange, StmtId, StmtRange};
use std::fmt;
use std::sync::Arc;

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

/// Contiguous storage for all nodes of one parsed source file.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (call args, array elements).
    expr_lists: Vec<ExprId>,

    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,

    /// Flattened statement lists (block bodies).
    stmt_lists: Vec<StmtId>,

    /// Flattened name lists (parameters, imported names).
    names: Vec<Name>,

    /// Function definitions (indexed by `FunctionId`).
    functions: Vec<FunctionDef>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated_exprs),
            expr_lists: Vec::with_capacity(estimated_exprs / 4),
            stmts: Vec::with_capacity(estimated_exprs / 3),
            stmt_lists: Vec::with_capacity(estimated_exprs / 3),
            names: Vec::with_capacity(estimated_exprs / 8),
            functions: Vec::with_capacity(estimated_exprs / 32),
        }
    }

    // ===== Expression allocation =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate expression list, return range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, to_u32(self.expr_lists.len()) - start)
    }

    /// Get expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    // ===== Statement allocation =====

    /// Allocate statement, return ID.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get number of statements.
    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Allocate statement list, return range.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_u32(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, to_u32(self.stmt_lists.len()) - start)
    }

    /// Get statement list by range.
    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.bounds()]
    }

    // ===== Name list allocation =====

    /// Allocate name list, return range.
    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = to_u32(self.names.len());
        self.names.extend(names);
        NameRange::new(start, to_u32(self.names.len()) - start)
    }

    /// Get names by range.
    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        &self.names[range.bounds()]
    }

    // ===== Function allocation =====

    /// Allocate function definition, return ID.
    pub fn alloc_function(&mut self, def: FunctionDef) -> FunctionId {
        let id = FunctionId::new(to_u32(self.functions.len()));
        self.functions.push(def);
        id
    }

    /// Get function definition by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_function(&self, id: FunctionId) -> &FunctionDef {
        &self.functions[id.index()]
    }

    /// Get number of function definitions.
    #[inline]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("stmts", &self.stmts.len())
            .field("functions", &self.functions.len())
            .finish_non_exhaustive()
    }
}

/// Shared, immutable arena handle.
///
/// A compiled program and every function value created from it read the
/// same arena; cloning the handle never copies nodes.
#[derive(Clone)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    /// Create a new shared arena from an `ExprArena`.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedArena({:?})", &*self.0)
    }
}
