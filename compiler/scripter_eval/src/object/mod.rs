//! Object references.
//!
//! Every non-primitive value is an `ObjectRef`: a reference-counted handle
//! to something implementing [`ScriptObject`]. Scripts reach an object only
//! through property names, indexes and calls; the trait's default methods
//! reject all three so an implementor overrides just what it supports.
//!
//! Built-in implementors:
//! - [`ScriptList`]: array literals
//! - [`ScriptFunction`]: function declarations and expressions
//! - [`NativeFunction`]: host-provided callables
//! - `host::BoolParam` / `host::StringParam`: host parameter wrappers

mod function;
mod list;

pub use function::{NativeFn, NativeFunction, ScriptFunction};
pub use list::ScriptList;

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::{not_indexable, unknown_property, EvalError, EvalResult};
use crate::Value;

/// What a call expression can invoke.
pub enum Callable<'a> {
    Script(&'a ScriptFunction),
    Native(&'a NativeFunction),
}

/// Behavior of a value reachable from script through an object reference.
pub trait ScriptObject {
    /// Short name for messages and `Value::type_name`.
    fn type_name(&self) -> &'static str;

    /// `obj.name`
    fn get_property(&self, name: &str) -> EvalResult {
        Err(unknown_property(self.type_name(), name))
    }

    /// `obj.name = value`
    fn set_property(&self, name: &str, value: Value) -> Result<(), EvalError> {
        let _ = value;
        Err(unknown_property(self.type_name(), name))
    }

    /// `obj[index]`
    fn get_index(&self, index: &Value) -> EvalResult {
        let _ = index;
        Err(not_indexable(self.type_name()))
    }

    /// `obj[index] = value`
    fn set_index(&self, index: &Value, value: Value) -> Result<(), EvalError> {
        let _ = (index, value);
        Err(not_indexable(self.type_name()))
    }

    /// `Some` when the object can be called.
    fn callable(&self) -> Option<Callable<'_>> {
        None
    }

    /// String form, used by `+` concatenation and `print`.
    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.type_name())
    }
}

/// Shared handle to a script object. Equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn ScriptObject>);

impl ObjectRef {
    pub fn new(obj: impl ScriptObject + 'static) -> Self {
        ObjectRef(Rc::new(obj))
    }

    /// Whether both handles point at the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Deref for ObjectRef {
    type Target = dyn ScriptObject;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({})", self.0.type_name())
    }
}
