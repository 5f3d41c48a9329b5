use thiserror::Error;

/// No strategy claims a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no serializer strategy claims type '{type_name}'{}", field_suffix(.field.as_deref()))]
pub struct UnsupportedType {
    pub type_name: String,
    /// Field that declared the type, when resolution was per field.
    pub field: Option<String>,
}

impl UnsupportedType {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: None,
        }
    }

    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

fn field_suffix(field: Option<&str>) -> String {
    field.map(|f| format!(" (field '{f}')")).unwrap_or_default()
}
