//! Tests for PropertyValue construction, kind queries and ownership

use std::sync::Arc;

use pretty_assertions::assert_eq;
use propval::*;

#[test]
fn test_each_constructor_sets_its_kind() {
    let cases = [
        (PropertyValue::from(true), Kind::Bool),
        (PropertyValue::from(3), Kind::Int),
        (PropertyValue::from(3.0), Kind::Double),
        (PropertyValue::from(vec![PropertyValue::from(1)]), Kind::List),
        (PropertyValue::from(Arc::new(EngineObject::new())), Kind::Object),
    ];

    for (value, kind) in cases {
        assert_eq!(value.kind(), kind);
    }
}

#[test]
fn test_exactly_one_predicate_holds() {
    let values = [
        PropertyValue::Bool(false),
        PropertyValue::Int(0),
        PropertyValue::Double(0.0),
        PropertyValue::List(vec![]),
        PropertyValue::new_object(),
    ];

    for value in &values {
        let flags = [
            value.is_bool(),
            value.is_int(),
            value.is_double(),
            value.is_list(),
            value.is_object(),
        ];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", value);
    }
}

#[test]
fn test_clone_deep_copies_lists() {
    let original = PropertyValue::list([PropertyValue::Int(1), PropertyValue::Int(2)]);
    let mut copy = original.clone();

    if let PropertyValue::List(items) = &mut copy {
        items.push(PropertyValue::Int(3));
    }

    assert_eq!(original.as_list().unwrap().len(), 2);
    assert_eq!(copy.as_list().unwrap().len(), 3);
}

#[test]
fn test_clone_shares_objects() {
    let object = Arc::new(EngineObject::with_id(11));
    let value = PropertyValue::object(Arc::clone(&object));
    let copy = value.clone();

    assert_eq!(Arc::strong_count(&object), 3);
    assert!(Arc::ptr_eq(&value.as_object().unwrap(), &copy.as_object().unwrap()));

    drop(value);
    drop(copy);
    assert_eq!(Arc::strong_count(&object), 1);
}

#[test]
fn test_move_keeps_reference_count() {
    let object = Arc::new(EngineObject::with_id(4));
    let value = PropertyValue::object(Arc::clone(&object));
    let moved = value;

    assert_eq!(Arc::strong_count(&object), 2);
    assert_eq!(moved.as_object().unwrap().id(), 4);
}

#[test]
fn test_dropping_list_releases_nested_objects() {
    let object = Arc::new(EngineObject::with_id(8));
    let nested = PropertyValue::list([PropertyValue::list([PropertyValue::object(
        Arc::clone(&object),
    )])]);

    assert_eq!(Arc::strong_count(&object), 2);
    drop(nested);
    assert_eq!(Arc::strong_count(&object), 1);
}

#[test]
fn test_reassignment_changes_kind() {
    let mut value = PropertyValue::Int(1);
    assert!(value.is_int());
    value = PropertyValue::Double(2.0);
    assert!(value.is_double());
}

#[test]
fn test_as_int_returns_original_scalar() {
    for n in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(PropertyValue::Int(n).as_int(), Ok(n));
    }
}

#[test]
fn test_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PropertyValue>();
    assert_send_sync::<EngineObject>();
}
