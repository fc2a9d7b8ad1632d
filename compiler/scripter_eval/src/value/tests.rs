use super::*;
use crate::object::ScriptList;
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Int(0).is_truthy());
    assert!(Value::Int(-3).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("a").is_truthy());
    assert!(ScriptList::new(Vec::new()).into_value().is_truthy());
}

#[test]
fn display_forms() {
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-12).to_string(), "-12");
    assert_eq!(Value::string("hi").to_string(), "hi");
}

#[test]
fn nested_display_quotes_strings() {
    assert_eq!(Value::string("a\"b").nested().to_string(), r#""a\"b""#);
    assert_eq!(Value::Int(1).nested().to_string(), "1");
}

#[test]
fn equality_is_shape_strict() {
    assert_eq!(Value::Undefined, Value::Undefined);
    assert_eq!(Value::Int(2), Value::Int(2));
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::string("1"), Value::Int(1));
    assert_ne!(Value::Undefined, Value::Bool(false));
    assert_eq!(Value::string("ab"), Value::from("ab"));
}

#[test]
fn objects_compare_by_identity() {
    let a = ScriptList::new(vec![Value::Int(1)]).into_value();
    let b = ScriptList::new(vec![Value::Int(1)]).into_value();
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn type_names() {
    assert_eq!(Value::Undefined.type_name(), "undefined");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Int(0).type_name(), "number");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(ScriptList::new(Vec::new()).into_value().type_name(), "list");
}

#[test]
fn accessors() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Bool(true).as_int(), None);
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::string("x").as_str(), Some("x"));
    assert!(Value::default().is_undefined());
    assert!(Value::Int(0).as_object().is_none());
}
