//! Descriptor validation.
//!
//! Generation assumes field names are legal, unique, and map to distinct
//! generated identifiers. Checks run in field order and stop at the first
//! failure.

use std::collections::BTreeMap;

use crate::error::{ModelError, Result};
use crate::field::ClassSpec;
use crate::naming::is_java_identifier;

pub fn validate_class(class: &ClassSpec) -> Result<()> {
    if class.name.trim().is_empty() {
        return Err(ModelError::EmptyClassName);
    }
    if !is_java_identifier(&class.name) {
        return Err(ModelError::InvalidIdentifier {
            name: class.name.clone(),
        });
    }

    let mut seen_identifiers: BTreeMap<String, &str> = BTreeMap::new();
    for (idx, field) in class.fields.iter().enumerate() {
        if !is_java_identifier(&field.name) {
            return Err(ModelError::InvalidIdentifier {
                name: field.name.clone(),
            });
        }
        if class.fields[..idx].iter().any(|f| f.name == field.name) {
            return Err(ModelError::DuplicateField {
                name: field.name.clone(),
            });
        }
        let identifier = field.identifier();
        if let Some(first) = seen_identifiers.get(&identifier) {
            return Err(ModelError::IdentifierCollision {
                identifier,
                first: (*first).to_string(),
                second: field.name.clone(),
            });
        }
        field.type_name()?;
        seen_identifiers.insert(identifier, &field.name);
    }
    Ok(())
}
