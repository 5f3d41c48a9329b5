//! Loading `dbm.toml` from disk.

use std::io::Write;

use dbm_codec::{Resolver, Strategy};
use dbm_config::{Config, ConfigError, load_config};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn full_config_feeds_the_resolver() {
    let file = write_config(
        r#"
[generator]
log_tag = "TAG"
conflict_note = "REVIEW"

[types]
enums = ["com.example.Kind"]
structured = ["com.example.Item"]
serializable = ["com.example.Payload"]
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let options = config.generation_options();
    assert_eq!(options.log_tag, "TAG");
    assert_eq!(options.conflict_note, "REVIEW");

    let resolver = Resolver::new(config.registry());
    assert_eq!(resolver.resolve("com.example.Kind").unwrap(), Strategy::Enumeration);
    assert_eq!(
        resolver.resolve("com.example.Item").unwrap(),
        Strategy::StructuredObject
    );
    assert_eq!(
        resolver.resolve("java.util.List<com.example.Item>").unwrap(),
        Strategy::TypedListOfStructured
    );
    assert_eq!(
        resolver.resolve("com.example.Payload").unwrap(),
        Strategy::GenericFallback
    );
    assert!(resolver.resolve("com.example.Unknown").is_err());
}

#[test]
fn partial_sections_keep_defaults() {
    let file = write_config("[types]\nenums = [\"com.example.Kind\"]\n");
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.generator.log_tag, "THIS_FILE");
    assert_eq!(config.generator.conflict_note, "TODO: verify");
    assert_eq!(config.registry().len(), 1);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config("[generator]\nlogtag = \"TAG\"\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }), "{err}");
}

#[test]
fn generic_type_entries_are_rejected() {
    let file = write_config("[types]\nenums = [\"java.util.List<String>\"]\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidTypeName { list: "enums", .. }),
        "{err}"
    );
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_config(Some(&path)).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other}"),
    }
}
