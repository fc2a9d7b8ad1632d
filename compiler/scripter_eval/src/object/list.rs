//! Built-in list object created by array literals.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{NativeFunction, ObjectRef, ScriptObject};
use crate::errors::{index_out_of_range, type_mismatch, unknown_property, EvalError, EvalResult};
use crate::Value;

struct ListState {
    items: RefCell<Vec<Value>>,
    /// Set while the list is being displayed, so cycles print as `[...]`.
    displaying: Cell<bool>,
}

/// Growable list of values.
///
/// `ScriptList` is a handle; clones share the same items. Methods exposed to
/// scripts: `length`, `add(v)`, `indexOf(v)`, `contains(v)`, `removeAt(i)`,
/// `clear()`.
#[derive(Clone)]
pub struct ScriptList(Rc<ListState>);

impl ScriptList {
    pub fn new(items: Vec<Value>) -> Self {
        ScriptList(Rc::new(ListState {
            items: RefCell::new(items),
            displaying: Cell::new(false),
        }))
    }

    /// Wrap this list in an object reference.
    pub fn into_value(self) -> Value {
        Value::Object(ObjectRef::new(self))
    }

    pub fn len(&self) -> usize {
        self.0.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.items.borrow().get(index).cloned()
    }

    pub fn push(&self, value: Value) {
        self.0.items.borrow_mut().push(value);
    }

    /// Copy of the current items.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.items.borrow().clone()
    }

    fn index_of(&self, needle: &Value) -> i64 {
        self.0
            .items
            .borrow()
            .iter()
            .position(|item| item.strict_eq(needle))
            .and_then(|i| i64::try_from(i).ok())
            .unwrap_or(-1)
    }

    fn remove_at(&self, index: &Value) -> EvalResult {
        let len = self.len();
        let slot = list_index(index)?;
        match usize::try_from(slot) {
            Ok(i) if i < len => Ok(self.0.items.borrow_mut().remove(i)),
            _ => Err(index_out_of_range(slot, len)),
        }
    }

    fn method(&self, name: &'static str, arity: usize, f: fn(&ScriptList, &[Value]) -> EvalResult) -> Value {
        let list = self.clone();
        Value::object(NativeFunction::new(name, move |_, args| f(&list, args)).with_arity(arity))
    }
}

fn list_index(index: &Value) -> Result<i64, EvalError> {
    index
        .as_int()
        .ok_or_else(|| type_mismatch("number index", index.type_name()))
}

fn first(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or_default()
}

impl ScriptObject for ScriptList {
    fn type_name(&self) -> &'static str {
        "list"
    }

    fn get_property(&self, name: &str) -> EvalResult {
        match name {
            "length" => Ok(Value::Int(i64::try_from(self.len()).unwrap_or(i64::MAX))),
            "add" => Ok(self.method("add", 1, |list, args| {
                list.push(first(args));
                Ok(Value::Undefined)
            })),
            "indexOf" => Ok(self.method("indexOf", 1, |list, args| {
                Ok(Value::Int(list.index_of(&first(args))))
            })),
            "contains" => Ok(self.method("contains", 1, |list, args| {
                Ok(Value::Bool(list.index_of(&first(args)) >= 0))
            })),
            "removeAt" => Ok(self.method("removeAt", 1, |list, args| {
                list.remove_at(&first(args))
            })),
            "clear" => Ok(self.method("clear", 0, |list, _| {
                list.0.items.borrow_mut().clear();
                Ok(Value::Undefined)
            })),
            _ => Err(unknown_property(self.type_name(), name)),
        }
    }

    /// Out-of-range reads yield `undefined`.
    fn get_index(&self, index: &Value) -> EvalResult {
        let slot = list_index(index)?;
        Ok(usize::try_from(slot)
            .ok()
            .and_then(|i| self.get(i))
            .unwrap_or_default())
    }

    /// Writing at `length` appends; anything past it is an error.
    fn set_index(&self, index: &Value, value: Value) -> Result<(), EvalError> {
        let slot = list_index(index)?;
        let mut items = self.0.items.borrow_mut();
        let len = items.len();
        match usize::try_from(slot) {
            Ok(i) if i < len => {
                items[i] = value;
                Ok(())
            }
            Ok(i) if i == len => {
                items.push(value);
                Ok(())
            }
            _ => Err(index_out_of_range(slot, len)),
        }
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.displaying.replace(true) {
            return f.write_str("[...]");
        }
        let items = self.0.items.borrow();
        let result = (|| {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", item.nested())?;
            }
            f.write_str("]")
        })();
        self.0.displaying.set(false);
        result
    }
}
