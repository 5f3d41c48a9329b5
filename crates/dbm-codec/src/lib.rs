//! Parcel serialization strategies.
//!
//! - **strategy**: the closed set of serializer strategies and their emitted read/write statements
//! - **registry**: host-declared enum, structured and serializable types
//! - **resolver**: first-match resolution of a declared type to a strategy

pub mod error;
pub mod registry;
pub mod resolver;
pub mod strategy;

pub use error::UnsupportedType;
pub use registry::TypeRegistry;
pub use resolver::{Resolved, Resolver};
pub use strategy::Strategy;
