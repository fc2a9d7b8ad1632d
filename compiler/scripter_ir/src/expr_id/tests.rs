use super::*;

#[test]
fn test_expr_id_index() {
    let id = ExprId::new(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.raw(), 7);
    assert_eq!(format!("{id:?}"), "ExprId(7)");
}

#[test]
fn test_range_bounds() {
    let range = StmtRange::new(3, 4);
    assert_eq!(range.len(), 4);
    assert!(!range.is_empty());
    assert_eq!(range.bounds(), 3..7);
    assert_eq!(format!("{range:?}"), "StmtRange(3..7)");
}

#[test]
fn test_empty_range() {
    assert!(NameRange::EMPTY.is_empty());
    assert_eq!(ExprRange::default(), ExprRange::EMPTY);
}
