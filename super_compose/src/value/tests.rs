//! Unit tests for value classification, truthiness and JSON conversion.

use rstest::rstest;
use serde_json::json;

use super::{Callable, Mapping, Shape, Value};
use crate::ComposeError;

#[rstest]
#[case(json!({"a": 1}), Shape::Mapping)]
#[case(json!({}), Shape::Mapping)]
#[case(json!([1, 2]), Shape::Sequence)]
#[case(json!("text"), Shape::Scalar)]
#[case(json!(3), Shape::Scalar)]
#[case(json!(true), Shape::Scalar)]
#[case(json!(null), Shape::Scalar)]
fn classifies_json_values(#[case] json: serde_json::Value, #[case] expected: Shape) {
    assert_eq!(Value::from(json).shape(), expected);
}

#[test]
fn classifies_callables_and_undefined() {
    assert_eq!(Value::from(Callable::new(|_| Value::Null)).shape(), Shape::Callable);
    assert_eq!(Value::Undefined.shape(), Shape::Scalar);
}

#[rstest]
#[case::undefined(Value::Undefined)]
#[case::null(Value::Null)]
#[case::false_flag(Value::from(false))]
#[case::zero(Value::from(0))]
#[case::float_zero(Value::from(json!(0.0)))]
#[case::negative_zero(Value::from(json!(-0.0)))]
#[case::empty_string(Value::from(""))]
fn falsy_values(#[case] value: Value) {
    assert!(!value.is_truthy(), "{value:?} should be falsy");
}

#[rstest]
#[case::true_flag(Value::from(true))]
#[case::number(Value::from(-1))]
#[case::fraction(Value::from(json!(0.5)))]
#[case::string(Value::from("0"))]
#[case::empty_sequence(Value::Sequence(Vec::new()))]
#[case::empty_mapping(Value::Mapping(Mapping::new()))]
#[case::callable(Value::from(Callable::new(|_| Value::Undefined)))]
fn truthy_values(#[case] value: Value) {
    assert!(value.is_truthy(), "{value:?} should be truthy");
}

#[test]
fn json_objects_keep_definition_order() {
    let value = Value::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
    let keys: Vec<&str> = value
        .as_mapping()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn to_json_renders_nested_data() {
    let json = json!({"list": [1, "two", null], "nested": {"flag": true}});
    let rendered = Value::from(json.clone())
        .to_json()
        .unwrap_or_else(|err| panic!("plain data must render: {err}"));
    assert_eq!(rendered, json);
}

#[test]
fn to_json_maps_undefined_to_null() {
    let rendered = Value::Undefined
        .to_json()
        .unwrap_or_else(|err| panic!("undefined must render: {err}"));
    assert_eq!(rendered, serde_json::Value::Null);
}

#[test]
fn to_json_rejects_nested_callables() {
    let mut map = Mapping::new();
    map.insert(
        "mounted".to_owned(),
        Value::from(Callable::named("mounted", |_| Value::Null)),
    );
    let err = Value::Sequence(vec![Value::Mapping(map)])
        .to_json()
        .err()
        .unwrap_or_else(|| panic!("callable must not render as JSON"));
    assert!(matches!(&*err, ComposeError::Callable { name } if name == "mounted"));
}

#[test]
fn serialize_rejects_callables() {
    let value = Value::from(Callable::named("render", |_| Value::Null));
    let err = serde_json::to_string(&value)
        .err()
        .unwrap_or_else(|| panic!("callable must not serialise"));
    assert!(err.to_string().contains("render"));
}

#[test]
fn deserialize_round_trips_through_serde() {
    let value: Value = serde_json::from_str(r#"{"b": [1, 2], "a": "x"}"#)
        .unwrap_or_else(|err| panic!("valid JSON must deserialise: {err}"));
    let text =
        serde_json::to_string(&value).unwrap_or_else(|err| panic!("data must serialise: {err}"));
    assert_eq!(text, r#"{"b":[1,2],"a":"x"}"#);
}

#[test]
fn callables_compare_by_identity() {
    let first = Callable::new(|_| Value::Null);
    let same = first.clone();
    let other = Callable::new(|_| Value::Null);
    assert_eq!(first, same);
    assert_ne!(first, other);
}

#[test]
fn accessors_ignore_arguments() {
    let accessor = Callable::accessor("answer", || Value::from(42));
    assert_eq!(accessor.call(&[Value::from("ignored")]), Value::from(42));
    assert_eq!(accessor.invoke(), Value::from(42));
    assert_eq!(accessor.name(), Some("answer"));
}
