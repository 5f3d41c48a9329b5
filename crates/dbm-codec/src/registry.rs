//! Types the host knows more about than their names tell.
//!
//! Enumerations, Parcelable classes and Serializable classes cannot be told
//! apart from a canonical name alone, so the host declares them up front.

use std::collections::BTreeSet;

use dbm_model::TypeName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRegistry {
    pub enums: BTreeSet<String>,
    pub structured: BTreeSet<String>,
    pub serializable: BTreeSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enum(mut self, name: &str) -> Self {
        self.enums.insert(canonical(name));
        self
    }

    pub fn with_structured(mut self, name: &str) -> Self {
        self.structured.insert(canonical(name));
        self
    }

    pub fn with_serializable(mut self, name: &str) -> Self {
        self.serializable.insert(canonical(name));
        self
    }

    pub fn is_enum(&self, ty: &TypeName) -> bool {
        !ty.is_array() && self.enums.contains(ty.base())
    }

    /// Registered Parcelable types, plus `android.os.Parcelable` itself.
    pub fn is_structured(&self, ty: &TypeName) -> bool {
        !ty.is_array() && (ty.base() == PARCELABLE || self.structured.contains(ty.base()))
    }

    pub fn is_serializable(&self, ty: &TypeName) -> bool {
        !ty.is_array() && self.serializable.contains(ty.base())
    }

    pub fn len(&self) -> usize {
        self.enums.len() + self.structured.len() + self.serializable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub const PARCELABLE: &str = "android.os.Parcelable";

fn canonical(name: &str) -> String {
    TypeName::simple(name.trim()).base().to_string()
}
