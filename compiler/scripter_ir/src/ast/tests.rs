use super::*;
use crate::{ExprId, Span};

#[test]
fn test_binary_precedence_order() {
    assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() > BinaryOp::Lt.precedence());
    assert!(BinaryOp::Lt.precedence() > BinaryOp::Eq.precedence());
    assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
    assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
}

#[test]
fn test_short_circuit_ops() {
    assert!(BinaryOp::And.is_short_circuit());
    assert!(BinaryOp::Or.is_short_circuit());
    assert!(!BinaryOp::Add.is_short_circuit());
}

#[test]
fn test_update_as_binary() {
    assert_eq!(UpdateOp::Increment.as_binary(), BinaryOp::Add);
    assert_eq!(UpdateOp::Decrement.as_binary(), BinaryOp::Sub);
    assert_eq!(UpdateOp::Decrement.as_symbol(), "--");
}

#[test]
fn test_assignable_kinds() {
    let id = ExprId::new(0);
    assert!(ExprKind::Ident(crate::Name::EMPTY).is_assignable());
    assert!(ExprKind::Index {
        receiver: id,
        index: id
    }
    .is_assignable());
    assert!(!ExprKind::Undefined.is_assignable());
    assert!(!ExprKind::Int(1).is_assignable());
}

#[test]
fn test_expr_debug_includes_span() {
    let expr = Expr::new(ExprKind::Bool(true), Span::new(1, 5));
    assert_eq!(format!("{expr:?}"), "Bool(true) @ 1..5");
}
