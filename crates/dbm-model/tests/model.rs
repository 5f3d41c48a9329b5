//! Tests for dbm-model descriptors and naming.

use dbm_model::catalog::{PRIMARY_KEY_CLAUSE, SqlType, sql_type};
use dbm_model::naming::{FIELD_PREFIX, upper_snake};
use dbm_model::{ClassSnapshot, ClassSpec, FieldSpec, ModelError, TypeName, field_identifier};
use proptest::prelude::*;

#[test]
fn class_spec_round_trips_through_json() {
    let class = ClassSpec::new("Account")
        .with_field(FieldSpec::primitive("id", "long"))
        .with_field(FieldSpec::object("tags", "java.util.List<java.lang.String>"))
        .with_existing_constructor(true);

    let json = serde_json::to_string(&class).expect("serialize class");
    assert!(json.contains("\"type\":\"long\""));
    let back: ClassSpec = serde_json::from_str(&json).expect("deserialize class");
    assert_eq!(back, class);
}

#[test]
fn field_type_errors_name_the_field() {
    let field = FieldSpec::object("broken", "java.util.Map<String");
    match field.type_name() {
        Err(ModelError::InvalidFieldType {
            field, type_name, ..
        }) => {
            assert_eq!(field, "broken");
            assert_eq!(type_name, "java.util.Map<String");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn byte_arrays_are_blobs_but_other_arrays_are_text() {
    let blob = TypeName::parse("byte[]").unwrap();
    let ints = TypeName::parse("int[]").unwrap();
    assert_eq!(sql_type(&blob), SqlType::Blob);
    assert_eq!(sql_type(&ints), SqlType::Text);
    assert_eq!(PRIMARY_KEY_CLAUSE, "INTEGER PRIMARY KEY AUTOINCREMENT");
}

#[test]
fn empty_snapshot_deserializes_from_empty_object() {
    let snapshot: ClassSnapshot = serde_json::from_str("{}").expect("deserialize snapshot");
    assert!(snapshot.members.is_empty());
    assert!(snapshot.interfaces.is_empty());
}

proptest! {
    #[test]
    fn identifiers_are_prefixed_upper_snake(name in "[a-z][a-zA-Z0-9]{0,16}") {
        let identifier = field_identifier(&name);
        prop_assert!(identifier.starts_with(FIELD_PREFIX));
        let tail = &identifier[FIELD_PREFIX.len()..];
        prop_assert_eq!(tail, upper_snake(&name));
        prop_assert!(!tail.chars().any(|c| c.is_ascii_lowercase()));
        // Removing the separators gives back the uppercased name.
        prop_assert_eq!(tail.replace('_', ""), name.to_ascii_uppercase());
    }

    #[test]
    fn each_capital_adds_one_separator(name in "[a-z][a-zA-Z]{0,16}") {
        let capitals = name.chars().filter(char::is_ascii_uppercase).count();
        let separators = upper_snake(&name).chars().filter(|c| *c == '_').count();
        prop_assert_eq!(capitals, separators);
    }
}
