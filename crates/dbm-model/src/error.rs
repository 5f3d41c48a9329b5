use thiserror::Error;

/// Errors raised while interpreting a class descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("class name must not be empty")]
    EmptyClassName,

    #[error("'{name}' is not a valid Java identifier")]
    InvalidIdentifier { name: String },

    #[error("invalid type name '{type_name}': {message}")]
    InvalidTypeName { type_name: String, message: String },

    #[error("field '{field}' has an invalid type '{type_name}': {message}")]
    InvalidFieldType {
        field: String,
        type_name: String,
        message: String,
    },

    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },

    #[error("fields '{first}' and '{second}' both map to identifier {identifier}")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
