//! Parsed interface declarations.
//!
//! MockSmith does not parse TypeScript. Interfaces arrive already parsed, as
//! JSON:
//!
//! ```json
//! [
//!   {
//!     "name": "User",
//!     "properties": [
//!       { "name": "id", "type": "string" },
//!       { "name": "orders", "type": "Order[]", "optional": true }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MockSmithError, Result};
use crate::generate::expression::is_identifier;

/// A single property of an interface.
///
/// `optional` does not change synthesis; every property gets a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A named interface and its properties, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Field>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>, properties: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// Parse a JSON array of interfaces, rejecting duplicate or non-identifier
/// names.
pub fn parse_interfaces(json: &str) -> Result<Vec<InterfaceDecl>> {
    let interfaces: Vec<InterfaceDecl> =
        serde_json::from_str(json).map_err(|e| MockSmithError::InterfaceLoad {
            message: format!("invalid interface JSON: {}", e),
        })?;

    let mut seen = HashSet::new();
    for interface in &interfaces {
        if interface.name.trim().is_empty() {
            return Err(MockSmithError::InterfaceLoad {
                message: "interface with an empty name".to_string(),
            });
        }
        if !is_identifier(&interface.name) {
            return Err(MockSmithError::InterfaceLoad {
                message: format!(
                    "interface name '{}' is not a valid TypeScript identifier",
                    interface.name
                ),
            });
        }
        if !seen.insert(interface.name.as_str()) {
            return Err(MockSmithError::InterfaceLoad {
                message: format!("interface '{}' is declared more than once", interface.name),
            });
        }
    }

    Ok(interfaces)
}

/// Read and parse an interface file.
pub fn load_interfaces(path: &Path) -> Result<Vec<InterfaceDecl>> {
    let content = std::fs::read_to_string(path).map_err(|e| MockSmithError::InterfaceLoad {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_interfaces(&content).map_err(|e| match e {
        MockSmithError::InterfaceLoad { message } => MockSmithError::InterfaceLoad {
            message: format!("{}: {}", path.display(), message),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interfaces_defaults_optional() {
        let json = r#"[{"name": "User", "properties": [
            {"name": "id", "type": "string"},
            {"name": "nickname", "type": "string", "optional": true}
        ]}]"#;
        let interfaces = parse_interfaces(json).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].properties[0], Field::new("id", "string"));
        assert_eq!(
            interfaces[0].properties[1],
            Field::new("nickname", "string").optional()
        );
    }

    #[test]
    fn test_parse_interfaces_rejects_duplicates() {
        let json = r#"[{"name": "User"}, {"name": "User"}]"#;
        let err = parse_interfaces(json).unwrap_err();
        assert!(err.to_string().contains("User"), "{}", err);
    }

    #[test]
    fn test_parse_interfaces_rejects_non_identifier_names() {
        for name in ["Line Item", "2Fast", "User<T>", "Order-v2"] {
            let json = format!(r#"[{{"name": "{}"}}]"#, name);
            let err = parse_interfaces(&json).unwrap_err();
            assert!(err.to_string().contains("not a valid TypeScript identifier"), "{}", err);
        }
        assert!(parse_interfaces(r#"[{"name": "$Line_Item2"}]"#).is_ok());
    }

    #[test]
    fn test_parse_interfaces_rejects_bad_json() {
        let err = parse_interfaces("{").unwrap_err();
        assert!(matches!(err, MockSmithError::InterfaceLoad { .. }));
    }

    #[test]
    fn test_load_interfaces_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interfaces.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_interfaces(&path).unwrap_err();
        assert!(err.to_string().contains("interfaces.json"), "{}", err);
    }

    #[test]
    fn test_load_interfaces_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_interfaces(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{}", err);
    }
}
