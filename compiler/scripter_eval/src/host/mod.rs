//! Reference host objects.
//!
//! Parameter wrappers an embedder registers as globals so scripts can read,
//! write and observe host state:
//!
//! - `BoolParam`: `val`, `onChange(fn)`
//! - `StringParam`: `val`, `valNoCallback`, `onChange(fn)`
//!
//! The script's `onChange` callback fires only for host-side updates
//! (`set_from_host`). Script-side writes to `StringParam.val` notify the host
//! listener instead.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::errors::{not_callable, type_mismatch, unknown_property, EvalError, EvalResult};
use crate::object::{NativeFunction, ScriptObject};
use crate::{GlobalContext, Value};

/// Slot holding a script callback registered through `onChange`.
type CallbackSlot = RefCell<Option<Value>>;

/// Build the `onChange(fn)` method bound to `slot`.
fn on_change_method<S: 'static>(state: &Rc<S>, slot: fn(&S) -> &CallbackSlot) -> Value {
    let state = Rc::clone(state);
    let method = NativeFunction::new("onChange", move |_, args| {
        let callback = args.first().cloned().unwrap_or_default();
        if callback.as_object().and_then(|obj| obj.callable()).is_none() {
            return Err(not_callable(callback.type_name()));
        }
        *slot(&state).borrow_mut() = Some(callback);
        Ok(Value::Undefined)
    });
    Value::object(method.with_arity(1))
}

fn notify(slot: &CallbackSlot, global: &GlobalContext, value: Value) -> Result<(), EvalError> {
    let callback = slot.borrow().clone();
    if let Some(callback) = callback {
        global.call_function(&callback, &[value])?;
    }
    Ok(())
}

struct BoolState {
    value: Cell<bool>,
    callback: CallbackSlot,
}

/// A boolean exposed to scripts.
#[derive(Clone)]
pub struct BoolParam(Rc<BoolState>);

impl BoolParam {
    pub fn new(value: bool) -> Self {
        BoolParam(Rc::new(BoolState {
            value: Cell::new(value),
            callback: RefCell::new(None),
        }))
    }

    pub fn into_value(self) -> Value {
        Value::object(self)
    }

    pub fn value(&self) -> bool {
        self.0.value.get()
    }

    /// Update from the host and invoke the script's `onChange` callback.
    pub fn set_from_host(&self, value: bool, global: &GlobalContext) -> Result<(), EvalError> {
        self.0.value.set(value);
        notify(&self.0.callback, global, Value::Bool(value))
    }
}

impl ScriptObject for BoolParam {
    fn type_name(&self) -> &'static str {
        "BoolParam"
    }

    fn get_property(&self, name: &str) -> EvalResult {
        match name {
            "val" => Ok(Value::Bool(self.value())),
            "onChange" => Ok(on_change_method(&self.0, |s| &s.callback)),
            _ => Err(unknown_property(self.type_name(), name)),
        }
    }

    fn set_property(&self, name: &str, value: Value) -> Result<(), EvalError> {
        match (name, value) {
            ("val", Value::Bool(b)) => {
                self.0.value.set(b);
                Ok(())
            }
            ("val", other) => Err(type_mismatch("boolean", other.type_name())),
            _ => Err(unknown_property(self.type_name(), name)),
        }
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolParam({})", self.value())
    }
}

/// Host-side observer of script writes to `StringParam.val`.
type Listener = Box<dyn Fn(&str)>;

struct StringState {
    value: RefCell<String>,
    callback: CallbackSlot,
    listener: RefCell<Option<Listener>>,
}

/// A string exposed to scripts.
#[derive(Clone)]
pub struct StringParam(Rc<StringState>);

impl StringParam {
    pub fn new(value: impl Into<String>) -> Self {
        StringParam(Rc::new(StringState {
            value: RefCell::new(value.into()),
            callback: RefCell::new(None),
            listener: RefCell::new(None),
        }))
    }

    pub fn into_value(self) -> Value {
        Value::object(self)
    }

    pub fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    /// Observe writes the script makes through `val`.
    pub fn on_host_change(&self, listener: impl Fn(&str) + 'static) {
        *self.0.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Update from the host and invoke the script's `onChange` callback.
    pub fn set_from_host(&self, value: &str, global: &GlobalContext) -> Result<(), EvalError> {
        value.clone_into(&mut self.0.value.borrow_mut());
        notify(&self.0.callback, global, Value::string(value))
    }

    fn set_from_script(&self, value: &str, notify_host: bool) {
        value.clone_into(&mut self.0.value.borrow_mut());
        if notify_host {
            if let Some(listener) = self.0.listener.borrow().as_ref() {
                listener(value);
            }
        }
    }
}

impl ScriptObject for StringParam {
    fn type_name(&self) -> &'static str {
        "StringParam"
    }

    fn get_property(&self, name: &str) -> EvalResult {
        match name {
            "val" | "valNoCallback" => Ok(Value::string(self.value())),
            "onChange" => Ok(on_change_method(&self.0, |s| &s.callback)),
            _ => Err(unknown_property(self.type_name(), name)),
        }
    }

    fn set_property(&self, name: &str, value: Value) -> Result<(), EvalError> {
        let notify_host = match name {
            "val" => true,
            "valNoCallback" => false,
            _ => return Err(unknown_property(self.type_name(), name)),
        };
        match value.as_str() {
            Some(s) => {
                self.set_from_script(s, notify_host);
                Ok(())
            }
            None => Err(type_mismatch("string", value.type_name())),
        }
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringParam({:?})", self.0.value.borrow())
    }
}
