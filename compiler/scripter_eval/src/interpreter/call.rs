//! Function call evaluation.

use std::rc::Rc;

use scripter_ir::{Span, StringInterner};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::environment::{Binding, ScopeKind};
use crate::errors::{not_callable, program_dropped, scope_released, EvalResult};
use crate::object::{Callable, NativeFunction, ScriptFunction};
use crate::{GlobalContext, Value};

impl Interpreter<'_> {
    /// Call any callable value. Anything else is a TypeError.
    pub(crate) fn call_value(&mut self, func: &Value, args: &[Value], call_span: Span) -> EvalResult {
        match func.as_object().and_then(|obj| obj.callable()) {
            Some(Callable::Script(f)) => self.call_script(f, args, call_span),
            Some(Callable::Native(native)) => self.call_native(native, args, call_span),
            None => Err(not_callable(func.type_name())),
        }
    }

    /// Run a script function in a fresh Function scope whose parent is the
    /// declaration scope. Missing arguments are `undefined`, extra ones are
    /// ignored.
    #[tracing::instrument(level = "debug", skip_all, fields(function = f.display_name()))]
    fn call_script(&mut self, f: &ScriptFunction, args: &[Value], call_span: Span) -> EvalResult {
        let unit = f
            .unit
            .upgrade()
            .ok_or_else(|| program_dropped(f.display_name()))?;
        let def = *unit.arena.get_function(f.func);
        let env = unit.scopes.borrow().resolve(f.env).ok_or_else(scope_released)?;

        self.domain.call_stack.push(CallFrame {
            name: def.name,
            call_span,
        })?;

        let mark = unit.scope_mark(&self.global);
        let scope = unit
            .scopes
            .borrow_mut()
            .push(ScopeKind::Function, Some(env));
        {
            let mut scopes = unit.scopes.borrow_mut();
            for (i, &param) in unit.arena.get_names(def.params).iter().enumerate() {
                let arg = args.get(i).cloned().unwrap_or_default();
                scopes.declare(scope, param, Binding::Value(arg));
            }
        }

        let result = {
            let mut callee =
                Interpreter::new(Rc::clone(&unit), self.global.clone(), &mut *self.domain, scope);
            let outcome = callee.exec_stmts(def.body);
            super::body_result(outcome)
        };
        let result = result.map_err(|e| {
            self.domain
                .call_stack
                .attach_backtrace(e, self.global.interner())
        });
        if let Ok(value) = &result {
            self.note_escape(value);
        }

        unit.reclaim(mark, &self.global);
        self.domain.call_stack.pop();
        result
    }

    fn call_native(
        &mut self,
        native: &NativeFunction,
        args: &[Value],
        call_span: Span,
    ) -> EvalResult {
        for arg in args {
            self.note_escape(arg);
        }
        let mut ctx = NativeContext {
            interp: self,
            call_span,
        };
        native.invoke(&mut ctx, args)
    }
}

/// What a native function sees of its caller.
///
/// Gives read access to the caller's variables, lets the native call script
/// functions back, and exposes the global context.
pub struct NativeContext<'i, 'd> {
    interp: &'i mut Interpreter<'d>,
    call_span: Span,
}

impl NativeContext<'_, '_> {
    /// Read a variable visible at the call site, falling back to globals.
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        let name = self.interp.global.interner().get(name)?;
        let value = self.interp.lookup_var(name).ok()?;
        self.interp.note_escape(&value);
        Some(value)
    }

    /// Call a script or native function with the caller's runtime domain.
    pub fn call(&mut self, func: &Value, args: &[Value]) -> EvalResult {
        self.interp.call_value(func, args, self.call_span)
    }

    pub fn global(&self) -> &GlobalContext {
        &self.interp.global
    }

    pub fn interner(&self) -> &StringInterner {
        self.interp.global.interner()
    }

    /// Span of the call expression that invoked the native.
    pub fn call_span(&self) -> Span {
        self.call_span
    }

    /// Number of script calls currently on the stack.
    pub fn call_depth(&self) -> usize {
        self.interp.domain.call_depth()
    }
}
