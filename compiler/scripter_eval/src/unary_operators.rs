//! Unary operator implementations for the evaluator.

use scripter_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalResult};
use crate::Value;

/// Evaluate a unary operation.
///
/// `!` accepts any value and negates its truthiness; `-` accepts numbers only.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over a freshly evaluated operand"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (_, UnaryOp::Neg) => Err(invalid_unary_op(op, value.type_name())),
    }
}
