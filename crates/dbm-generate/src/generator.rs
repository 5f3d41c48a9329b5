//! Artifact generation for one class.
//!
//! The schema path and the Parcelable path fail independently: schema
//! artifacts use only the type catalog, while Parcelable artifacts need every
//! field to resolve to a serializer strategy.

use dbm_codec::{Resolved, Resolver, Strategy, UnsupportedType};
use dbm_model::{ClassSpec, FieldSpec, GenerationOptions};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::artifacts::{Artifacts, ParcelableArtifacts, SchemaArtifacts};
use crate::error::GenerateError;
use crate::{parcel, schema};

/// Resolution outcome for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResolution {
    pub field: String,
    pub type_name: String,
    pub strategy: Option<Strategy>,
}

impl FieldResolution {
    pub fn is_supported(&self) -> bool {
        self.strategy.is_some()
    }
}

/// Generates schema and Parcelable artifacts.
///
/// A generator holds only read-only configuration and can be shared between
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    resolver: Resolver,
    options: GenerationOptions,
}

impl Generator {
    pub fn new(resolver: Resolver, options: GenerationOptions) -> Self {
        Self { resolver, options }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Constants, projection, `CREATE TABLE`, cursor reader and content values.
    pub fn schema_artifacts(&self, class: &ClassSpec) -> Result<SchemaArtifacts, GenerateError> {
        class.validate()?;
        let artifacts = SchemaArtifacts {
            constants: schema::constants(class),
            full_projection: schema::full_projection(class),
            create_table: schema::create_table(class)?,
            cursor_deserializer: schema::cursor_deserializer(class, &self.options)?,
            content_values: schema::content_values(class)?,
        };
        debug!(
            class = %class.name,
            constants = artifacts.constants.len(),
            "generated schema artifacts"
        );
        Ok(artifacts)
    }

    /// `describeContents`, `writeToParcel`, constructors and `CREATOR`.
    ///
    /// Fails with every field whose type no strategy claims.
    pub fn parcelable_artifacts(
        &self,
        class: &ClassSpec,
    ) -> Result<ParcelableArtifacts, GenerateError> {
        class.validate()?;
        let fields = self.resolve_all(class)?;

        let default_constructor = if class.has_existing_constructor {
            None
        } else {
            Some(parcel::default_constructor(&class.name))
        };

        let artifacts = ParcelableArtifacts {
            class_name: class.name.clone(),
            describe_contents: parcel::describe_contents(),
            write_to_parcel: parcel::write_to_parcel(&fields),
            default_constructor,
            parcel_constructor: parcel::parcel_constructor(&class.name, &fields),
            creator: parcel::creator(&class.name),
        };
        debug!(class = %class.name, fields = fields.len(), "generated parcelable artifacts");
        Ok(artifacts)
    }

    /// Both artifact sets.
    pub fn generate(&self, class: &ClassSpec) -> Result<Artifacts, GenerateError> {
        let schema = self.schema_artifacts(class)?;
        let parcelable = self.parcelable_artifacts(class)?;
        info!(
            class = %class.name,
            fields = class.fields.len(),
            "generated artifacts"
        );
        Ok(Artifacts { schema, parcelable })
    }

    /// Per-field resolution report. Never fails; unsupported fields have no strategy.
    pub fn resolutions(&self, class: &ClassSpec) -> Vec<FieldResolution> {
        class
            .fields
            .iter()
            .map(|field| FieldResolution {
                field: field.name.clone(),
                type_name: field.declared_type.clone(),
                strategy: self
                    .resolver
                    .resolve_field(field)
                    .ok()
                    .map(|resolved| resolved.strategy),
            })
            .collect()
    }

    fn resolve_all<'a>(
        &self,
        class: &'a ClassSpec,
    ) -> Result<Vec<(&'a FieldSpec, Resolved)>, GenerateError> {
        let mut resolved = Vec::with_capacity(class.fields.len());
        let mut failures: Vec<UnsupportedType> = Vec::new();
        for field in &class.fields {
            match self.resolver.resolve_field(field) {
                Ok(found) => resolved.push((field, found)),
                Err(err) => failures.push(err),
            }
        }
        if failures.is_empty() {
            Ok(resolved)
        } else {
            warn!(
                class = %class.name,
                unsupported = failures.len(),
                "parcelable generation aborted"
            );
            Err(GenerateError::UnsupportedTypes { failures })
        }
    }
}
