use dbm_codec::UnsupportedType;
use dbm_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Every field whose type no strategy claims, in field order.
    #[error("unsupported field types: {}", describe(failures))]
    UnsupportedTypes { failures: Vec<UnsupportedType> },
}

impl GenerateError {
    pub fn unsupported_fields(&self) -> Vec<&str> {
        match self {
            Self::UnsupportedTypes { failures } => failures
                .iter()
                .filter_map(|failure| failure.field.as_deref())
                .collect(),
            Self::Model(_) => Vec::new(),
        }
    }
}

fn describe(failures: &[UnsupportedType]) -> String {
    failures
        .iter()
        .map(|failure| match &failure.field {
            Some(field) => format!("{field}: {}", failure.type_name),
            None => failure.type_name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
