use std::sync::LazyLock;

use regex::Regex;

/// `Array<Elem>` wrapper, compiled once on first access.
static ARRAY_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Array<\s*(.+?)\s*>$").unwrap());

/// True if the descriptor ends with `[]` or is an `Array<...>` wrapper.
pub fn is_array_type(type_name: &str) -> bool {
    let t = type_name.trim();
    t.ends_with("[]") || ARRAY_WRAPPER.is_match(t)
}

/// True for `Date` and anything containing it (`ISODate`, `DateString`, ...).
pub fn is_date_type(type_name: &str) -> bool {
    type_name.contains("Date")
}

/// Strip one level of array notation. Non-array descriptors come back unchanged.
pub fn extract_element_type(type_name: &str) -> &str {
    let t = type_name.trim();
    if let Some(inner) = t.strip_suffix("[]") {
        return inner.trim_end();
    }
    if let Some(caps) = ARRAY_WRAPPER.captures(t) {
        if let Some(inner) = caps.get(1) {
            return inner.as_str();
        }
    }
    type_name
}

/// Coarse shape of a type descriptor, as used when emitting source expressions.
///
/// Primitive detection is a substring test, so `stringish` classifies as
/// `String`. Checks run in the order array, date, string, number, boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    Array(&'a str),
    Date,
    String,
    Number,
    Boolean,
    Other,
}

impl<'a> TypeShape<'a> {
    pub fn of(type_name: &'a str) -> Self {
        if is_array_type(type_name) {
            TypeShape::Array(extract_element_type(type_name))
        } else if is_date_type(type_name) {
            TypeShape::Date
        } else if type_name.contains("string") {
            TypeShape::String
        } else if type_name.contains("number") {
            TypeShape::Number
        } else if type_name.contains("boolean") {
            TypeShape::Boolean
        } else {
            TypeShape::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_array_type() {
        assert!(is_array_type("string[]"));
        assert!(is_array_type("User[]"));
        assert!(is_array_type("Array<number>"));
        assert!(is_array_type(" Array<User> "));
        assert!(!is_array_type("string"));
        assert!(!is_array_type("ArrayBuffer"));
        assert!(!is_array_type("Array"));
    }

    #[test]
    fn test_is_date_type_is_loose() {
        assert!(is_date_type("Date"));
        assert!(is_date_type("ISODate"));
        assert!(!is_date_type("date"));
        assert!(!is_date_type("string"));
    }

    #[test]
    fn test_extract_element_type() {
        assert_eq!(extract_element_type("string[]"), "string");
        assert_eq!(extract_element_type("Array<User>"), "User");
        assert_eq!(extract_element_type("Array< number >"), "number");
        assert_eq!(extract_element_type("User"), "User");
        // Only one level is stripped.
        assert_eq!(extract_element_type("string[][]"), "string[]");
    }

    #[test]
    fn test_shape_substring_matching() {
        assert_eq!(TypeShape::of("stringish"), TypeShape::String);
        assert_eq!(TypeShape::of("number"), TypeShape::Number);
        assert_eq!(TypeShape::of("boolean"), TypeShape::Boolean);
        assert_eq!(TypeShape::of("Date"), TypeShape::Date);
        assert_eq!(TypeShape::of("User[]"), TypeShape::Array("User"));
        assert_eq!(TypeShape::of("Address"), TypeShape::Other);
    }
}
