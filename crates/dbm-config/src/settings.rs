//! The `dbm.toml` schema.
//!
//! ```toml
//! [generator]
//! log_tag = "TAG"
//! conflict_note = "TODO: verify"
//!
//! [types]
//! enums = ["com.example.Kind"]
//! structured = ["com.example.Item"]
//! serializable = ["com.example.Payload"]
//! ```

use std::path::Path;

use dbm_codec::TypeRegistry;
use dbm_model::options::{DEFAULT_CONFLICT_NOTE, DEFAULT_LOG_TAG};
use dbm_model::{GenerationOptions, TypeName};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorSection,
    pub types: TypesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Tag used by the generated unknown-column warning.
    pub log_tag: String,
    /// Comment attached to conflict-annotated declarations.
    pub conflict_note: String,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            log_tag: DEFAULT_LOG_TAG.to_string(),
            conflict_note: DEFAULT_CONFLICT_NOTE.to_string(),
        }
    }
}

/// Canonical type names the serializer registry needs to know about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypesSection {
    pub enums: Vec<String>,
    pub structured: Vec<String>,
    pub serializable: Vec<String>,
}

impl Config {
    /// Parse and validate TOML text. `path` is only used in error messages.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&contents, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.log_tag.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                key: "log_tag",
                message: "must not be empty".to_string(),
            });
        }
        if self.generator.conflict_note.contains('\n') {
            return Err(ConfigError::InvalidOption {
                key: "conflict_note",
                message: "must be a single line".to_string(),
            });
        }
        for (list, entries) in self.types.lists() {
            for entry in entries {
                validate_type_entry(list, entry)?;
            }
        }
        Ok(())
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new()
            .with_log_tag(self.generator.log_tag.clone())
            .with_conflict_note(self.generator.conflict_note.clone())
    }

    pub fn registry(&self) -> TypeRegistry {
        let registry = self
            .types
            .enums
            .iter()
            .fold(TypeRegistry::new(), |registry, name| registry.with_enum(name));
        let registry = self
            .types
            .structured
            .iter()
            .fold(registry, |registry, name| registry.with_structured(name));
        self.types
            .serializable
            .iter()
            .fold(registry, |registry, name| registry.with_serializable(name))
    }
}

impl TypesSection {
    fn lists(&self) -> [(&'static str, &[String]); 3] {
        [
            ("enums", &self.enums),
            ("structured", &self.structured),
            ("serializable", &self.serializable),
        ]
    }
}

/// Registry entries are plain class names: no type arguments, no arrays.
fn validate_type_entry(list: &'static str, entry: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidTypeName {
        list,
        entry: entry.to_string(),
        message,
    };
    let ty = TypeName::parse(entry).map_err(|err| invalid(err.to_string()))?;
    if ty.is_array() || !ty.arguments().is_empty() {
        return Err(invalid(
            "expected a class name without type arguments or array suffix".to_string(),
        ));
    }
    Ok(())
}
