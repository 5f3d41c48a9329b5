//! Artifact generation for data classes.
//!
//! This crate turns a [`dbm_model::ClassSpec`] into insertable text:
//!
//! - **schema**: field constants, `FULL_PROJECTION`, `CREATE_TABLE`, cursor
//!   deserializer and content-values serializer
//! - **parcel**: `describeContents`, `writeToParcel`, constructors and `CREATOR`
//! - **column**: cursor column readers and content-value conversions
//! - **generator**: orchestration over both paths
//!
//! Schema artifacts never consult the serializer resolver, so a class with an
//! unsupported field type still gets its schema.

pub mod artifacts;
pub mod column;
pub mod error;
pub mod generator;
pub mod parcel;
pub mod schema;

pub use artifacts::{Artifacts, MemberArtifact, ParcelableArtifacts, SchemaArtifacts};
pub use column::{ColumnReader, ValueConversion};
pub use error::GenerateError;
pub use generator::{FieldResolution, Generator};
