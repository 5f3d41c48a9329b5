//! Integration tests for the pipeline module.

use std::path::PathBuf;

use dbm_cli::pipeline::{
    ArtifactKind, Toolchain, generate, plan, read_class, read_snapshot, render_artifacts,
    render_plan, write_snapshot,
};
use dbm_config::Config;
use dbm_model::{ClassSnapshot, MemberKey};

const PERSON_JSON: &str = r#"{
  "name": "Person",
  "fields": [
    { "name": "age", "type": "int" },
    { "name": "name", "type": "String" },
    { "name": "birthday", "type": "Date" }
  ]
}"#;

const POINT_JSON: &str = r#"{ "name": "Point", "fields": [{ "name": "x", "type": "int" }] }"#;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn class_descriptor_infers_primitives() {
    let dir = tempfile::tempdir().unwrap();
    let class = read_class(&write_file(&dir, "person.json", PERSON_JSON)).unwrap();
    assert_eq!(class.name, "Person");
    let primitive: Vec<bool> = class.fields.iter().map(|f| f.is_primitive).collect();
    assert_eq!(primitive, vec![true, false, false]);
}

#[test]
fn malformed_descriptor_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.json", "{ \"name\": ");
    let err = read_class(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn missing_snapshot_path_means_empty_class() {
    let snapshot = read_snapshot(None).unwrap();
    assert_eq!(snapshot, ClassSnapshot::new());
}

#[test]
fn first_plan_for_point_schema() {
    let dir = tempfile::tempdir().unwrap();
    let class = read_class(&write_file(&dir, "point.json", POINT_JSON)).unwrap();
    let outcome = plan(
        &Toolchain::default(),
        &class,
        &ClassSnapshot::new(),
        ArtifactKind::Schema,
    )
    .unwrap();
    insta::assert_snapshot!("point_schema_plan", render_plan(&outcome.plan));
}

#[test]
fn written_snapshot_makes_the_next_plan_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let toolchain = Toolchain::default();
    let class = read_class(&write_file(&dir, "person.json", PERSON_JSON)).unwrap();

    let first = plan(&toolchain, &class, &ClassSnapshot::new(), ArtifactKind::Schema).unwrap();
    assert!(!first.plan.is_noop());

    let snapshot_path = dir.path().join("person.snapshot.json");
    write_snapshot(&snapshot_path, &first.merged).unwrap();
    let reloaded = read_snapshot(Some(&snapshot_path)).unwrap();
    assert_eq!(reloaded, first.merged);

    let second = plan(&toolchain, &class, &reloaded, ArtifactKind::Schema).unwrap();
    assert_eq!(render_plan(&second.plan), "no changes\n");
}

#[test]
fn full_replan_does_not_duplicate_the_default_constructor() {
    let dir = tempfile::tempdir().unwrap();
    let toolchain = Toolchain::default();
    let class = read_class(&write_file(&dir, "person.json", PERSON_JSON)).unwrap();

    let first = plan(&toolchain, &class, &ClassSnapshot::new(), ArtifactKind::All).unwrap();
    let second = plan(&toolchain, &class, &first.merged, ArtifactKind::All).unwrap();

    let default_constructor = MemberKey::method("Person", Vec::<String>::new());
    let count = second
        .merged
        .members
        .iter()
        .filter(|member| member.key() == default_constructor)
        .count();
    assert_eq!(count, 1);
    assert_eq!(second.merged.members.len(), first.merged.members.len());
    assert!(!render_plan(&second.plan).contains("insert Person() "));
}

#[test]
fn full_plan_declares_the_interface_last() {
    let dir = tempfile::tempdir().unwrap();
    let class = read_class(&write_file(&dir, "person.json", PERSON_JSON)).unwrap();
    let outcome = plan(&Toolchain::default(), &class, &ClassSnapshot::new(), ArtifactKind::All)
        .unwrap();
    let rendered = render_plan(&outcome.plan);
    assert_eq!(
        rendered.lines().last(),
        Some("implement android.os.Parcelable")
    );
    assert!(rendered.contains("insert CREATOR (end of class)\n"));
    assert!(outcome.merged.implements("android.os.Parcelable"));
}

#[test]
fn config_registry_reaches_the_generator() {
    let dir = tempfile::tempdir().unwrap();
    let class = read_class(&write_file(
        &dir,
        "order.json",
        r#"{ "name": "Order", "fields": [{ "name": "status", "type": "com.example.Status" }] }"#,
    ))
    .unwrap();

    assert!(generate(&Toolchain::default().generator, &class, ArtifactKind::Parcelable).is_err());

    let config_path = write_file(
        &dir,
        "dbm.toml",
        "[generator]\nlog_tag = \"TAG\"\n\n[types]\nenums = [\"com.example.Status\"]\n",
    );
    let toolchain = Toolchain::from_config(&Config::load(&config_path).unwrap());
    let generated = generate(&toolchain.generator, &class, ArtifactKind::All).unwrap();
    let text = render_artifacts(&generated);
    assert!(text.contains("dest.writeInt(this.status == null ? -1 : this.status.ordinal());"));
    assert!(text.contains("android.util.Log.w(TAG, "));
}

#[test]
fn schema_only_generation_skips_parcelable() {
    let dir = tempfile::tempdir().unwrap();
    let class = read_class(&write_file(&dir, "point.json", POINT_JSON)).unwrap();
    let generated = generate(&Toolchain::default().generator, &class, ArtifactKind::Schema).unwrap();
    assert!(generated.parcelable.is_none());
    let json = serde_json::to_value(&generated).unwrap();
    assert!(json.get("parcelable").is_none());
    assert_eq!(json["schema"]["constants"][1]["identifier"], "FIELD_X");
}
