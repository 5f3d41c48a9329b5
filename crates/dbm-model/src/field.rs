//! Class and field descriptors supplied by the host.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{ModelError, Result};
use crate::naming::field_identifier;
use crate::types::TypeName;

/// One data member of a class.
///
/// Two specs describe the same field when their names match, whatever the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFieldSpec")]
pub struct FieldSpec {
    pub name: String,
    /// Canonical type text, e.g. `java.util.List<com.example.Item>`.
    #[serde(rename = "type")]
    pub declared_type: String,
    pub is_primitive: bool,
}

#[derive(Deserialize)]
struct RawFieldSpec {
    name: String,
    #[serde(rename = "type")]
    declared_type: String,
    #[serde(default)]
    is_primitive: Option<bool>,
}

impl From<RawFieldSpec> for FieldSpec {
    fn from(raw: RawFieldSpec) -> Self {
        let is_primitive = raw
            .is_primitive
            .unwrap_or_else(|| catalog::is_primitive(raw.declared_type.trim()));
        Self {
            name: raw.name,
            declared_type: raw.declared_type,
            is_primitive,
        }
    }
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, is_primitive: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_primitive,
        }
    }

    pub fn primitive(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::new(name, declared_type, true)
    }

    pub fn object(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::new(name, declared_type, false)
    }

    /// Primitiveness looked up in the type catalog.
    pub fn inferred(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        let is_primitive = catalog::is_primitive(declared_type.trim());
        Self::new(name, declared_type, is_primitive)
    }

    pub fn type_name(&self) -> Result<TypeName> {
        TypeName::parse(&self.declared_type).map_err(|err| match err {
            ModelError::InvalidTypeName { type_name, message } => ModelError::InvalidFieldType {
                field: self.name.clone(),
                type_name,
                message,
            },
            other => other,
        })
    }

    /// Generated constant name, e.g. `FIELD_BIRTH_DATE`.
    pub fn identifier(&self) -> String {
        field_identifier(&self.name)
    }
}

/// A data class: its name and fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub has_existing_constructor: bool,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            has_existing_constructor: false,
        }
    }

    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_existing_constructor(mut self, existing: bool) -> Self {
        self.has_existing_constructor = existing;
        self
    }

    /// Generated identifiers in field order.
    pub fn identifiers(&self) -> Vec<String> {
        self.fields.iter().map(FieldSpec::identifier).collect()
    }

    pub fn validate(&self) -> Result<()> {
        crate::validate::validate_class(self)
    }
}
