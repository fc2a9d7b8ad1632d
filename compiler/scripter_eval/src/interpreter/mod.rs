//! Tree-walking interpreter.
//!
//! One `Interpreter` evaluates statements of one program (`Unit`) against a
//! current scope. Calling a script function builds a fresh interpreter for
//! the callee's program and declaration scope, sharing the caller's
//! `RuntimeDomain`, so call depth and step limits span module boundaries.
//!
//! # Module Structure
//!
//! - `stmt.rs`: statement execution and control flow
//! - `expr.rs`: expression evaluation, assignment targets, updates
//! - `call.rs`: script and native calls, `NativeContext`
//! - `modules.rs`: `import` and module body execution

mod call;
mod expr;
mod modules;
mod stmt;

pub use call::NativeContext;

use std::rc::Rc;

use scripter_ir::{FunctionId, Name, StmtRange};

use crate::environment::{Binding, ScopeId, ScopeKind};
use crate::errors::{global_assignment, undefined_variable, ControlAction, EvalError, EvalResult};
use crate::object::ScriptFunction;
use crate::program::Unit;
use crate::{GlobalContext, RuntimeDomain, Value};

/// Evaluator state for one program and one current scope.
pub(crate) struct Interpreter<'d> {
    pub(crate) unit: Rc<Unit>,
    pub(crate) global: GlobalContext,
    pub(crate) domain: &'d mut RuntimeDomain,
    /// Innermost scope; new bindings go here.
    pub(crate) scope: ScopeId,
}

impl<'d> Interpreter<'d> {
    pub(crate) fn new(
        unit: Rc<Unit>,
        global: GlobalContext,
        domain: &'d mut RuntimeDomain,
        scope: ScopeId,
    ) -> Self {
        Interpreter {
            unit,
            global,
            domain,
            scope,
        }
    }

    /// Execute the program body in the current (module root) scope.
    pub(crate) fn run_body(&mut self) -> EvalResult {
        let body = self.unit.program.body;
        body_result(self.exec_stmts(body))
    }

    /// Execute a statement list, stopping at the first non-local exit.
    pub(crate) fn exec_stmts(&mut self, range: StmtRange) -> Result<(), ControlAction> {
        let unit = Rc::clone(&self.unit);
        for &stmt in unit.arena.get_stmt_list(range) {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Run `f` in a new block scope, releasing it afterwards.
    pub(crate) fn with_block_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let mark = self.unit.scope_mark(&self.global);
        let outer = self.scope;
        let block = self
            .unit
            .scopes
            .borrow_mut()
            .push(ScopeKind::Block, Some(outer));
        self.scope = block;

        let result = f(self);

        self.scope = outer;
        self.unit.reclaim(mark, &self.global);
        result
    }

    // Bindings

    pub(crate) fn declare(&self, name: Name, value: Value) {
        self.unit
            .scopes
            .borrow_mut()
            .declare(self.scope, name, Binding::Value(value));
    }

    /// Read a variable: scope chain first, then the global context.
    pub(crate) fn lookup_var(&self, name: Name) -> EvalResult {
        let binding = self.unit.scopes.borrow().lookup(self.scope, name);
        match binding {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Static(slot)) => Ok(self.unit.read_static(slot)),
            None => self
                .global
                .lookup(name)
                .ok_or_else(|| undefined_variable(self.global.interner().lookup(name))),
        }
    }

    /// Write an existing variable in its declaring scope.
    pub(crate) fn assign_var(&self, name: Name, value: Value) -> Result<(), EvalError> {
        let slot = {
            let mut scopes = self.unit.scopes.borrow_mut();
            match scopes.binding_mut(self.scope, name) {
                Some(Binding::Value(current)) => {
                    *current = value;
                    return Ok(());
                }
                Some(Binding::Static(slot)) => *slot,
                None => {
                    let text = self.global.interner().lookup(name);
                    return Err(if self.global.contains(name) {
                        global_assignment(text)
                    } else {
                        undefined_variable(text)
                    });
                }
            }
        };
        self.unit.write_static(slot, value);
        Ok(())
    }

    /// Create a function value closing over the current scope.
    pub(crate) fn make_function(&self, func: FunctionId) -> Value {
        let def = self.unit.arena.get_function(func);
        let env = self.unit.scopes.borrow().handle(self.scope);
        self.unit.note_closure();
        Value::object(ScriptFunction {
            unit: Rc::downgrade(&self.unit),
            func,
            env,
            name: def.name.map(|n| self.global.interner().lookup(n)),
        })
    }

    #[inline]
    pub(crate) fn note_escape(&self, value: &Value) {
        self.global.note_escape(value);
    }
}

/// Result of a program, module or function body: the returned value, or
/// `undefined` when the body runs off its end.
pub(crate) fn body_result(outcome: Result<(), ControlAction>) -> EvalResult {
    match outcome {
        Ok(()) | Err(ControlAction::Break | ControlAction::Continue) => Ok(Value::Undefined),
        Err(ControlAction::Return(value)) => Ok(value),
        Err(ControlAction::Error(err)) => Err(*err),
    }
}
