//! End-to-end generation for a small data class.

use dbm_generate::{Generator, ParcelableArtifacts, SchemaArtifacts};
use dbm_model::{ClassSpec, FieldSpec};
use proptest::prelude::*;

fn person() -> ClassSpec {
    ClassSpec::new("Person")
        .with_field(FieldSpec::primitive("age", "int"))
        .with_field(FieldSpec::object("name", "String"))
        .with_field(FieldSpec::object("birthday", "Date"))
}

fn render_schema(schema: &SchemaArtifacts) -> String {
    let mut out: String = schema
        .constants
        .iter()
        .map(dbm_model::GeneratedConstant::declaration)
        .collect();
    for member in schema.members() {
        out.push('\n');
        out.push_str(&member.text);
    }
    out
}

fn render_parcelable(parcelable: &ParcelableArtifacts) -> String {
    parcelable
        .members()
        .iter()
        .map(|member| member.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn person_schema_snapshot() {
    let schema = Generator::default()
        .schema_artifacts(&person())
        .expect("schema generation failed");
    insta::assert_snapshot!("person_schema", render_schema(&schema));
}

#[test]
fn person_parcelable_snapshot() {
    let parcelable = Generator::default()
        .parcelable_artifacts(&person())
        .expect("parcelable generation failed");
    insta::assert_snapshot!("person_parcelable", render_parcelable(&parcelable));
}

#[test]
fn person_constants_use_raw_names() {
    let schema = Generator::default().schema_artifacts(&person()).unwrap();
    let pairs: Vec<(&str, &str)> = schema
        .constants
        .iter()
        .map(|c| (c.identifier.as_str(), c.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("TABLE", "Person"),
            ("FIELD_AGE", "age"),
            ("FIELD_NAME", "name"),
            ("FIELD_BIRTHDAY", "birthday"),
        ]
    );
    assert_eq!(schema.constants[0].comment.as_deref(), Some("TODO: verify"));
}

#[test]
fn person_content_values_guard_objects() {
    let schema = Generator::default().schema_artifacts(&person()).unwrap();
    let text = &schema.content_values;
    assert!(text.contains("\n    args.put(FIELD_AGE, age);\n"));
    assert!(text.contains("    if (this.name != null)\n        args.put(FIELD_NAME, name);\n"));
    assert!(text.contains(
        "    if (this.birthday != null)\n        args.put(FIELD_BIRTHDAY, birthday.getTime());\n"
    ));
}

#[test]
fn regeneration_is_byte_identical() {
    let generator = Generator::default();
    let first = generator.generate(&person()).unwrap();
    let second = generator.generate(&person()).unwrap();
    assert_eq!(first, second);
}

fn field_pool() -> Vec<FieldSpec> {
    vec![
        FieldSpec::primitive("id", "long"),
        FieldSpec::primitive("age", "int"),
        FieldSpec::object("name", "String"),
        FieldSpec::object("birthday", "Date"),
        FieldSpec::object("photo", "byte[]"),
        FieldSpec::primitive("active", "boolean"),
        FieldSpec::object("homePage", "java.lang.String"),
    ]
}

proptest! {
    #[test]
    fn column_order_follows_field_order(fields in Just(field_pool()).prop_shuffle()) {
        let class = fields
            .iter()
            .cloned()
            .fold(ClassSpec::new("Shuffled"), ClassSpec::with_field);
        let schema = Generator::default().schema_artifacts(&class).unwrap();
        let identifiers = class.identifiers();

        let projection_line = schema.full_projection.lines().nth(1).unwrap_or_default();
        prop_assert_eq!(projection_line, identifiers.join(","));

        let create_columns: Vec<&str> = schema
            .create_table
            .lines()
            .skip(3)
            .filter_map(|line| line.strip_prefix("+ FIELD_"))
            .map(|rest| rest.split_whitespace().next().unwrap_or_default())
            .collect();
        let expected: Vec<&str> = identifiers
            .iter()
            .map(|id| id.trim_start_matches("FIELD_"))
            .collect();
        prop_assert_eq!(create_columns, expected);

        let cursor_order: Vec<usize> = identifiers
            .iter()
            .filter_map(|id| schema.cursor_deserializer.find(&format!("({id}.equals")))
            .collect();
        prop_assert_eq!(cursor_order.len(), identifiers.len());
        prop_assert!(cursor_order.windows(2).all(|w| w[0] < w[1]));
    }
}
