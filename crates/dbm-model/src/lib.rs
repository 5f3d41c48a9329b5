//! Data model for the data-class code generator.
//!
//! - **field**: class and field descriptors supplied by the host
//! - **types**: canonical Java type names with generics and array suffixes
//! - **catalog**: primitive/boxed type tables and SQL column affinities
//! - **naming**: field-identifier naming convention (`FIELD_` + UPPER_SNAKE)
//! - **declaration**: generated constants and read-only snapshots of a class body
//! - **validate**: descriptor validation (identifiers, collisions, type names)

pub mod catalog;
pub mod declaration;
pub mod error;
pub mod field;
pub mod naming;
pub mod options;
pub mod types;
pub mod validate;

pub use catalog::SqlType;
pub use declaration::{
    ClassSnapshot, ExistingDeclaration, ExistingMethod, GeneratedConstant, Member, MemberKey,
};
pub use error::{ModelError, Result};
pub use field::{ClassSpec, FieldSpec};
pub use naming::field_identifier;
pub use options::GenerationOptions;
pub use types::TypeName;
