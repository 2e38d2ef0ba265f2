//! # Local-Type Delegation
//!
//! When a property's type has its own factory in the current generation
//! batch, the emitted expression calls that factory instead of synthesizing
//! a placeholder, so nested objects are structurally valid instances.
//!
//! [`resolve_property_expression`] is the single entry point the factory
//! emitter uses per property. It never fails and never returns an empty
//! expression.

use std::collections::HashSet;

use crate::classify::types::{extract_element_type, is_array_type};
use crate::generate::expression::{type_expression, EMPTY_OBJECT};
use crate::generate::mode::Mode;
use crate::interface::InterfaceDecl;

/// Suffix appended to a type name to form its factory's name.
pub const DEFAULT_FACTORY_SUFFIX: &str = "Factory";

/// Type names that have a generated factory in the current batch.
///
/// Built once per batch and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LocalTypeRegistry {
    names: HashSet<String>,
    factory_suffix: String,
}

impl Default for LocalTypeRegistry {
    fn default() -> Self {
        Self {
            names: HashSet::new(),
            factory_suffix: DEFAULT_FACTORY_SUFFIX.to_string(),
        }
    }
}

impl LocalTypeRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Registry of every interface in the batch.
    pub fn from_interfaces(interfaces: &[InterfaceDecl]) -> Self {
        Self::new(interfaces.iter().map(|i| i.name.clone()))
    }

    pub fn with_factory_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.factory_suffix = suffix.into();
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.names.contains(type_name.trim())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the factory object generated for `type_name`.
    pub fn factory_name(&self, type_name: &str) -> String {
        format!("{}{}", type_name.trim(), self.factory_suffix)
    }

    /// Expression invoking the factory generated for `type_name`.
    pub fn factory_call(&self, type_name: &str) -> String {
        format!("{}.create()", self.factory_name(type_name))
    }
}

/// Resolve one property's `(name, type)` pair to an embeddable expression.
pub fn resolve_property_expression(
    field_name: &str,
    type_name: &str,
    registry: &LocalTypeRegistry,
    mode: Mode,
) -> String {
    if is_array_type(type_name) {
        let element = extract_element_type(type_name);
        if registry.contains(element) {
            return format!("[{}]", registry.factory_call(element));
        }
    } else if registry.contains(type_name) {
        return registry.factory_call(type_name);
    }

    let expression = type_expression(field_name, type_name, mode);
    if expression == EMPTY_OBJECT {
        return format!("{} as {}", EMPTY_OBJECT, normalize_type_name(type_name));
    }
    expression
}

/// Map the generic names `array` and `object` to their TypeScript spellings.
/// A blank descriptor asserts to `unknown`.
fn normalize_type_name(type_name: &str) -> &str {
    match type_name.trim() {
        "array" => "unknown[]",
        "object" => "Record<string, unknown>",
        "" => "unknown",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocalTypeRegistry {
        LocalTypeRegistry::new(["User", "Order"])
    }

    #[test]
    fn test_local_type_delegates_to_factory() {
        let reg = registry();
        for mode in [Mode::Deterministic, Mode::Realistic] {
            assert_eq!(
                resolve_property_expression("user", "User", &reg, mode),
                "UserFactory.create()"
            );
        }
    }

    #[test]
    fn test_local_array_wraps_factory_call() {
        let reg = registry();
        assert_eq!(
            resolve_property_expression("users", "User[]", &reg, Mode::Realistic),
            "[UserFactory.create()]"
        );
        assert_eq!(
            resolve_property_expression("orders", "Array<Order>", &reg, Mode::Deterministic),
            "[OrderFactory.create()]"
        );
    }

    #[test]
    fn test_non_local_falls_through_to_walker() {
        let reg = registry();
        assert_eq!(
            resolve_property_expression("email", "string", &reg, Mode::Realistic),
            "faker.internet.email()"
        );
        assert_eq!(
            resolve_property_expression("tags", "string[]", &reg, Mode::Deterministic),
            "['example_tags']"
        );
    }

    #[test]
    fn test_unknown_type_is_type_asserted() {
        let reg = registry();
        assert_eq!(
            resolve_property_expression("meta", "Metadata", &reg, Mode::Realistic),
            "{} as Metadata"
        );
        assert_eq!(
            resolve_property_expression("extra", "object", &reg, Mode::Realistic),
            "{} as Record<string, unknown>"
        );
        assert_eq!(
            resolve_property_expression("list", "array", &reg, Mode::Deterministic),
            "{} as unknown[]"
        );
    }

    #[test]
    fn test_custom_factory_suffix() {
        let reg = registry().with_factory_suffix("Mock");
        assert_eq!(
            resolve_property_expression("user", "User", &reg, Mode::Realistic),
            "UserMock.create()"
        );
    }

    #[test]
    fn test_deterministic_resolution_is_idempotent() {
        let reg = registry();
        let a = resolve_property_expression("name", "string", &reg, Mode::Deterministic);
        let b = resolve_property_expression("name", "string", &reg, Mode::Deterministic);
        assert_eq!(a, b);
    }

    #[test]
    fn test_never_empty() {
        let reg = LocalTypeRegistry::default();
        for t in ["", "   ", "Foo", "Foo[]", "Date", "array"] {
            assert!(!resolve_property_expression("x", t, &reg, Mode::Realistic).is_empty());
        }
    }
}
