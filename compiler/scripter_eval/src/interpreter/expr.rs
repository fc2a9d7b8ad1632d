//! Expression evaluation.

use std::rc::Rc;

use scripter_ir::{BinaryOp, ExprId, ExprKind, Name, UpdateOp};
use scripter_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{no_properties, not_indexable, type_mismatch, EvalError, EvalResult};
use crate::object::ScriptList;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

/// A resolved assignment target. Receivers and indices are evaluated once.
enum Place {
    Var(Name),
    Field { receiver: Value, name: &'static str },
    Index { receiver: Value, index: Value },
}

impl Interpreter<'_> {
    /// Evaluate an expression.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.unit.arena.get_expr(id);
        let result = match expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Undefined => Ok(Value::Undefined),
            ExprKind::String(name) => Ok(Value::string(self.global.interner().lookup(name))),
            ExprKind::Array(range) => {
                let unit = Rc::clone(&self.unit);
                let mut items = Vec::with_capacity(range.len());
                for &item in unit.arena.get_expr_list(range) {
                    let value = self.eval_expr(item)?;
                    self.note_escape(&value);
                    items.push(value);
                }
                Ok(ScriptList::new(items).into_value())
            }
            ExprKind::Ident(name) => self.lookup_var(name),
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(value, op)
            }
            ExprKind::Update { op, prefix, target } => self.eval_update(op, prefix, target),
            ExprKind::Assign { op, target, value } => self.eval_assign(op, target, value),
            ExprKind::Call { func, args } => {
                let callee = self.eval_expr(func)?;
                let unit = Rc::clone(&self.unit);
                let args = unit
                    .arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call_value(&callee, &args, expr.span)
            }
            ExprKind::Field { receiver, field } => {
                let receiver = self.eval_expr(receiver)?;
                read_field(&receiver, self.global.interner().lookup(field))
            }
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver)?;
                let index = self.eval_expr(index)?;
                read_index(&receiver, &index)
            }
            ExprKind::Function(func) => Ok(self.make_function(func)),
        };
        result.map_err(|e| e.or_span(expr.span))
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let left = self.eval_expr(left)?;
        match op {
            BinaryOp::And if !left.is_truthy() => Ok(Value::Bool(false)),
            BinaryOp::Or if left.is_truthy() => Ok(Value::Bool(true)),
            BinaryOp::And | BinaryOp::Or => Ok(Value::Bool(self.eval_expr(right)?.is_truthy())),
            _ => {
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, op)
            }
        }
    }

    /// `target = value` and compound forms; yields the assigned value.
    fn eval_assign(&mut self, op: Option<BinaryOp>, target: ExprId, value: ExprId) -> EvalResult {
        let place = self.resolve_place(target)?;
        let value = match op {
            None => self.eval_expr(value)?,
            Some(op) => {
                let current = self.read_place(&place)?;
                let rhs = self.eval_expr(value)?;
                evaluate_binary(current, rhs, op)?
            }
        };
        self.note_escape(&value);
        self.write_place(place, value.clone())?;
        Ok(value)
    }

    /// `++x`, `x++`, `--x`, `x--` on a number.
    fn eval_update(&mut self, op: UpdateOp, prefix: bool, target: ExprId) -> EvalResult {
        let place = self.resolve_place(target)?;
        let old = self.read_place(&place)?;
        if !matches!(old, Value::Int(_)) {
            return Err(type_mismatch("number", old.type_name()));
        }
        let new = evaluate_binary(old.clone(), Value::Int(1), op.as_binary())?;
        self.write_place(place, new.clone())?;
        Ok(if prefix { new } else { old })
    }

    fn resolve_place(&mut self, target: ExprId) -> Result<Place, EvalError> {
        let expr = *self.unit.arena.get_expr(target);
        match expr.kind {
            ExprKind::Ident(name) => Ok(Place::Var(name)),
            ExprKind::Field { receiver, field } => Ok(Place::Field {
                receiver: self.eval_expr(receiver)?,
                name: self.global.interner().lookup(field),
            }),
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver)?;
                let index = self.eval_expr(index)?;
                Ok(Place::Index { receiver, index })
            }
            _ => Err(EvalError::new("invalid assignment target").with_span(expr.span)),
        }
    }

    fn read_place(&self, place: &Place) -> EvalResult {
        match place {
            Place::Var(name) => self.lookup_var(*name),
            Place::Field { receiver, name } => read_field(receiver, name),
            Place::Index { receiver, index } => read_index(receiver, index),
        }
    }

    fn write_place(&self, place: Place, value: Value) -> Result<(), EvalError> {
        match place {
            Place::Var(name) => self.assign_var(name, value),
            Place::Field { receiver, name } => match receiver.as_object() {
                Some(obj) => obj.set_property(name, value),
                None => Err(no_properties(receiver.type_name(), name)),
            },
            Place::Index { receiver, index } => match receiver.as_object() {
                Some(obj) => obj.set_index(&index, value),
                None => Err(not_indexable(receiver.type_name())),
            },
        }
    }
}

/// `receiver.name`. Strings expose `length`; other primitives have no
/// properties.
fn read_field(receiver: &Value, name: &str) -> EvalResult {
    match receiver {
        Value::Object(obj) => obj.get_property(name),
        Value::Str(s) if name == "length" => {
            Ok(Value::Int(i64::try_from(s.chars().count()).unwrap_or(i64::MAX)))
        }
        _ => Err(no_properties(receiver.type_name(), name)),
    }
}

fn read_index(receiver: &Value, index: &Value) -> EvalResult {
    match receiver {
        Value::Object(obj) => obj.get_index(index),
        _ => Err(not_indexable(receiver.type_name())),
    }
}
