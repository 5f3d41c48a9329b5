//! First-match resolution of declared types to strategies.

use dbm_model::{FieldSpec, TypeName};
use tracing::{debug, warn};

use crate::error::UnsupportedType;
use crate::registry::TypeRegistry;
use crate::strategy::Strategy;

/// Tries strategies in priority order and returns the first that claims a type.
///
/// A resolver holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    order: Vec<Strategy>,
    registry: TypeRegistry,
}

/// A field's parsed type together with the strategy that claimed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub strategy: Strategy,
    pub type_name: TypeName,
}

impl Resolved {
    pub fn write(&self, field: &FieldSpec) -> String {
        self.strategy.emit_write(field, &self.type_name)
    }

    pub fn read(&self, field: &FieldSpec) -> String {
        self.strategy.emit_read(field, &self.type_name)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(TypeRegistry::default())
    }
}

impl Resolver {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            order: Strategy::DEFAULT_ORDER.to_vec(),
            registry,
        }
    }

    /// Replace the priority order. Strategies left out are never consulted.
    pub fn with_order(mut self, order: impl IntoIterator<Item = Strategy>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    pub fn order(&self) -> &[Strategy] {
        &self.order
    }

    /// Strategy for a parsed type, if any claims it.
    pub fn resolve_type(&self, ty: &TypeName) -> Option<Strategy> {
        self.order
            .iter()
            .copied()
            .find(|strategy| strategy.claims(ty, &self.registry))
    }

    /// Strategy for canonical type text.
    pub fn resolve(&self, type_name: &str) -> Result<Strategy, UnsupportedType> {
        let ty = TypeName::parse(type_name).map_err(|err| {
            debug!(type_name, error = %err, "type name does not parse");
            UnsupportedType::new(type_name)
        })?;
        match self.resolve_type(&ty) {
            Some(strategy) => {
                debug!(type_name = %ty, strategy = strategy.display_name(), "resolved type");
                Ok(strategy)
            }
            None => {
                warn!(type_name = %ty, "no serializer strategy claims type");
                Err(UnsupportedType::new(type_name))
            }
        }
    }

    pub fn resolve_field(&self, field: &FieldSpec) -> Result<Resolved, UnsupportedType> {
        let unsupported = || UnsupportedType::new(field.declared_type.clone()).for_field(&field.name);
        let ty = field.type_name().map_err(|err| {
            debug!(field = %field.name, error = %err, "field type does not parse");
            unsupported()
        })?;
        match self.resolve_type(&ty) {
            Some(strategy) => {
                debug!(
                    field = %field.name,
                    type_name = %ty,
                    strategy = strategy.display_name(),
                    "resolved field"
                );
                Ok(Resolved {
                    strategy,
                    type_name: ty,
                })
            }
            None => {
                warn!(field = %field.name, type_name = %ty, "no serializer strategy claims field type");
                Err(unsupported())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        // A registered structured type that is also registered as serializable
        // resolves to the earlier strategy.
        let registry = TypeRegistry::new()
            .with_structured("com.example.Item")
            .with_serializable("com.example.Item");
        let resolver = Resolver::new(registry);
        assert_eq!(
            resolver.resolve("com.example.Item"),
            Ok(Strategy::StructuredObject)
        );
    }

    #[test]
    fn custom_order_changes_the_winner() {
        let resolver = Resolver::default()
            .with_order([Strategy::GenericList, Strategy::TypedListOfStructured]);
        assert_eq!(
            resolver.resolve("java.util.List<java.lang.String>"),
            Ok(Strategy::GenericList)
        );
        assert!(resolver.resolve("int").is_err());
    }

    #[test]
    fn unparsable_types_are_unsupported() {
        let resolver = Resolver::default();
        let err = resolver.resolve("java.util.List<").unwrap_err();
        assert_eq!(err.type_name, "java.util.List<");
        assert_eq!(err.field, None);
    }

    #[test]
    fn field_resolution_names_the_field() {
        let resolver = Resolver::default();
        let err = resolver
            .resolve_field(&FieldSpec::object("widget", "com.example.Widget"))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("widget"));

        let resolved = resolver
            .resolve_field(&FieldSpec::primitive("age", "int"))
            .unwrap();
        assert_eq!(resolved.strategy, Strategy::Primitive);
        assert_eq!(
            resolved.write(&FieldSpec::primitive("age", "int")),
            "dest.writeInt(this.age);"
        );
    }
}
