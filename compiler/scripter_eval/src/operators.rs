//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch on the operand shapes. `&&` and `||` are
//! short-circuited by the interpreter before reaching this module; given two
//! already evaluated operands they combine truthiness.

use scripter_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero, EvalResult,
};
use crate::Value;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two values.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left.strict_eq(&right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!left.strict_eq(&right))),
        BinaryOp::And => return Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => return Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        _ => {}
    }

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) if op != BinaryOp::Add => eval_string_compare(a, b, op),
        (Value::Str(_), _) | (_, Value::Str(_)) if op == BinaryOp::Add => {
            Ok(concat(&left, &right))
        }
        _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    }
}

/// Binary operations on integers. All arithmetic is checked.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Mod if b == 0 => Err(modulo_by_zero()),
        BinaryOp::Mod => checked_arith(a.checked_rem(b), "remainder"),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::And | BinaryOp::Or => {
            Err(invalid_binary_op(op, "number", "number"))
        }
    }
}

/// Lexicographic comparison of strings.
fn eval_string_compare(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_op(op, "string", "string")),
    }
}

/// `+` with a string on either side: both sides in display form.
fn concat(left: &Value, right: &Value) -> Value {
    Value::string(format!("{left}{right}"))
}
