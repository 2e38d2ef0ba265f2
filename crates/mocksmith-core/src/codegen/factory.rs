use crate::error::{MockSmithError, Result};
use crate::generate::delegate::{
    resolve_property_expression, LocalTypeRegistry, DEFAULT_FACTORY_SUFFIX,
};
use crate::generate::expression::{is_identifier, is_identifier_tail, string_literal};
use crate::generate::mode::Mode;
use crate::interface::InterfaceDecl;

/// Settings for emitting a factory module.
#[derive(Debug, Clone)]
pub struct FactoryOptions {
    pub mode: Mode,
    pub factory_suffix: String,
    /// Module the interface types are imported from.
    pub types_module: String,
    /// Module `faker` is imported from.
    pub faker_module: String,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Realistic,
            factory_suffix: DEFAULT_FACTORY_SUFFIX.to_string(),
            types_module: "./types".to_string(),
            faker_module: "@faker-js/faker".to_string(),
        }
    }
}

impl FactoryOptions {
    /// Reject settings that would emit invalid TypeScript.
    ///
    /// The suffix is pasted after interface names, so it must be a run of
    /// identifier characters; module paths must not be blank.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier_tail(&self.factory_suffix) {
            return Err(MockSmithError::Config {
                message: format!(
                    "factory_suffix '{}' must be a non-empty run of letters, digits, '_' or '$'",
                    self.factory_suffix
                ),
            });
        }

        for (key, value) in [
            ("types_module", &self.types_module),
            ("faker_module", &self.faker_module),
        ] {
            if value.trim().is_empty() {
                return Err(MockSmithError::Config {
                    message: format!("{} must not be empty", key),
                });
            }
        }

        Ok(())
    }
}

/// Render the factory object for one interface.
pub fn render_factory(interface: &InterfaceDecl, registry: &LocalTypeRegistry, mode: Mode) -> String {
    let name = &interface.name;
    let mut out = format!("export const {} = {{\n", registry.factory_name(name));
    out.push_str(&format!(
        "  create(overrides: Partial<{}> = {{}}): {} {{\n",
        name, name
    ));
    out.push_str("    return {\n");
    for field in &interface.properties {
        let expression =
            resolve_property_expression(&field.name, &field.type_name, registry, mode);
        out.push_str(&format!("      {}: {},\n", property_key(&field.name), expression));
    }
    out.push_str("      ...overrides,\n    };\n  },\n};\n");
    out
}

/// Render a module with imports and one factory per interface.
///
/// The local-type registry is built once from the whole batch, so factories
/// call each other for properties typed with another interface.
pub fn render_module(interfaces: &[InterfaceDecl], options: &FactoryOptions) -> String {
    let registry = LocalTypeRegistry::from_interfaces(interfaces)
        .with_factory_suffix(options.factory_suffix.clone());

    let mut out = String::new();
    if options.mode.is_realistic() {
        out.push_str(&format!(
            "import {{ faker }} from {};\n",
            string_literal(&options.faker_module)
        ));
    }
    if !interfaces.is_empty() {
        let names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
        out.push_str(&format!(
            "import type {{ {} }} from {};\n",
            names.join(", "),
            string_literal(&options.types_module)
        ));
    }

    for interface in interfaces {
        out.push('\n');
        out.push_str(&render_factory(interface, &registry, options.mode));
    }

    tracing::debug!(
        "Rendered {} factories ({} local types)",
        interfaces.len(),
        registry.len()
    );
    out
}

/// Property keys that are not plain identifiers get quoted.
fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}
