//! Statement execution.

use scripter_ir::{ExprId, StmtId, StmtKind, VarStorage};
use scripter_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::Binding;
use crate::errors::{thrown, ControlAction};
use crate::Value;

impl Interpreter<'_> {
    /// Execute one statement.
    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> Result<(), ControlAction> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> Result<(), ControlAction> {
        let stmt = *self.unit.arena.get_stmt(id);
        self.domain
            .tick()
            .map_err(|e| ControlAction::from(e.with_span(stmt.span)))?;

        match stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(())
            }
            StmtKind::Var {
                name,
                init,
                storage: VarStorage::Local,
            } => {
                let value = self.eval_optional(init)?;
                self.declare(name, value);
                Ok(())
            }
            StmtKind::Var {
                name,
                init,
                storage: VarStorage::Static(slot),
            } => {
                if !self.unit.static_initialized(slot) {
                    let value = self.eval_optional(init)?;
                    self.note_escape(&value);
                    self.unit.write_static(slot, value);
                }
                self.unit
                    .scopes
                    .borrow_mut()
                    .declare(self.scope, name, Binding::Static(slot));
                Ok(())
            }
            StmtKind::Function(func) => {
                let value = self.make_function(func);
                if let Some(name) = self.unit.arena.get_function(func).name {
                    self.declare(name, value);
                }
                Ok(())
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_expr(cond)?.is_truthy() {
                    match self.exec_stmt(body) {
                        Ok(()) | Err(ControlAction::Continue) => {}
                        Err(ControlAction::Break) => break,
                        Err(other) => return Err(other),
                    }
                }
                Ok(())
            }
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => self.with_block_scope(|this| this.exec_for(init, cond, step, body)),
            StmtKind::Block(stmts) => self.with_block_scope(|this| this.exec_stmts(stmts)),
            StmtKind::Return(value) => {
                let value = self.eval_optional(value)?;
                self.note_escape(&value);
                Err(ControlAction::Return(value))
            }
            StmtKind::Throw(expr) => {
                let value = self.eval_expr(expr)?;
                self.note_escape(&value);
                Err(thrown(value).with_span(stmt.span).into())
            }
            StmtKind::Break => Err(ControlAction::Break),
            StmtKind::Continue => Err(ControlAction::Continue),
            StmtKind::Import { names, module } => self
                .exec_import(names, module)
                .map_err(|e| ControlAction::from(e.or_span(stmt.span))),
            StmtKind::Empty => Ok(()),
        }
    }

    fn exec_for(
        &mut self,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtId,
    ) -> Result<(), ControlAction> {
        if let Some(init) = init {
            self.exec_stmt(init)?;
        }
        loop {
            if let Some(cond) = cond {
                if !self.eval_expr(cond)?.is_truthy() {
                    break;
                }
            }
            match self.exec_stmt(body) {
                Ok(()) | Err(ControlAction::Continue) => {}
                Err(ControlAction::Break) => break,
                Err(other) => return Err(other),
            }
            if let Some(step) = step {
                self.eval_expr(step)?;
            }
        }
        Ok(())
    }

    fn eval_optional(&mut self, expr: Option<ExprId>) -> Result<Value, ControlAction> {
        match expr {
            Some(expr) => Ok(self.eval_expr(expr)?),
            None => Ok(Value::Undefined),
        }
    }
}

