//! Function objects: script closures and host-provided natives.

use std::fmt;
use std::rc::{Rc, Weak};

use scripter_ir::FunctionId;

use super::{Callable, ScriptObject};
use crate::environment::ScopeHandle;
use crate::errors::{arity_mismatch, EvalResult};
use crate::interpreter::NativeContext;
use crate::program::Unit;
use crate::Value;

/// A function declared in script.
///
/// Holds its program weakly: once the `CompiledProgram` is dropped, calling
/// the function fails instead of keeping the whole program alive.
pub struct ScriptFunction {
    pub(crate) unit: Weak<Unit>,
    pub(crate) func: FunctionId,
    /// Declaration-site scope, parent of each call's function scope.
    pub(crate) env: ScopeHandle,
    pub(crate) name: Option<&'static str>,
}

impl ScriptFunction {
    /// Declared name, `None` for anonymous function expressions.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub(crate) fn display_name(&self) -> &'static str {
        self.name.unwrap_or("<anonymous>")
    }
}

impl ScriptObject for ScriptFunction {
    fn type_name(&self) -> &'static str {
        "function"
    }

    fn callable(&self) -> Option<Callable<'_>> {
        Some(Callable::Script(self))
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}", self.display_name())
    }
}

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&mut NativeContext<'_, '_>, &[Value]) -> EvalResult;

/// A callable provided by the host.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    /// Exact argument count, or `None` to accept any.
    arity: Option<usize>,
    f: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<Rc<str>>,
        f: impl Fn(&mut NativeContext<'_, '_>, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            arity: None,
            f: Rc::new(f),
        }
    }

    /// Reject calls with any other argument count.
    #[must_use]
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub(crate) fn invoke(&self, ctx: &mut NativeContext<'_, '_>, args: &[Value]) -> EvalResult {
        if let Some(expected) = self.arity {
            if args.len() != expected {
                return Err(arity_mismatch(&self.name, expected, args.len()));
            }
        }
        (self.f)(ctx, args)
    }
}

impl ScriptObject for NativeFunction {
    fn type_name(&self) -> &'static str {
        "native function"
    }

    fn callable(&self) -> Option<Callable<'_>> {
        Some(Callable::Native(self))
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native function {}", self.name)
    }
}
