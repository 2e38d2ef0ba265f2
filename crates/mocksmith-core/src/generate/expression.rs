//! # Source Expression Backend
//!
//! Produces TypeScript expression text that, evaluated inside a generated
//! factory, yields a value for a field. Realistic expressions call
//! `@faker-js/faker`; deterministic expressions are literals.
//!
//! This is the code-generation twin of `generate::providers`. Both read the
//! same semantic table, so `contactEmail` is an email in data and in code.

use crate::classify::semantic::{match_field_name, SemanticCategory};
use crate::classify::types::TypeShape;
use crate::generate::mode::Mode;

/// Expression emitted when a type has no better synthesis.
pub const EMPTY_OBJECT: &str = "{}";

/// Faker expression for a semantic category.
pub fn render_semantic_expression(category: SemanticCategory) -> &'static str {
    match category {
        SemanticCategory::Email => "faker.internet.email()",
        SemanticCategory::FullName => "faker.person.fullName()",
        SemanticCategory::Url => "faker.internet.url()",
        SemanticCategory::Id => "faker.string.uuid()",
        SemanticCategory::Phone => "faker.phone.number()",
        SemanticCategory::Address => "faker.location.streetAddress()",
        SemanticCategory::City => "faker.location.city()",
        SemanticCategory::Country => "faker.location.country()",
        SemanticCategory::Amount => "parseFloat(faker.commerce.price())",
    }
}

/// Expression for a primitive shape. Non-primitive shapes yield `{}`.
pub fn primitive_expression(shape: TypeShape<'_>, field_name: &str, mode: Mode) -> String {
    match (shape, mode) {
        (TypeShape::String, Mode::Deterministic) => {
            string_literal(&format!("example_{}", field_name))
        }
        (TypeShape::String, Mode::Realistic) => match match_field_name(field_name) {
            Some(category) => render_semantic_expression(category).to_string(),
            None => "faker.lorem.word()".to_string(),
        },
        (TypeShape::Number, Mode::Deterministic) => "0".to_string(),
        (TypeShape::Number, Mode::Realistic) => {
            "faker.number.int({ min: 1, max: 1000 })".to_string()
        }
        (TypeShape::Boolean, Mode::Deterministic) => "true".to_string(),
        (TypeShape::Boolean, Mode::Realistic) => "faker.datatype.boolean()".to_string(),
        (TypeShape::Date, Mode::Deterministic) => "new Date()".to_string(),
        (TypeShape::Date, Mode::Realistic) => "faker.date.recent()".to_string(),
        (TypeShape::Array(_) | TypeShape::Other, _) => EMPTY_OBJECT.to_string(),
    }
}

/// Walk a type descriptor and return an expression for it.
///
/// Arrays recurse on their element and become a one-element array literal.
/// Types this walker cannot express come back as `{}`; local-type delegation
/// and typed coercion happen one level up, in `generate::delegate`.
pub fn type_expression(field_name: &str, type_name: &str, mode: Mode) -> String {
    match TypeShape::of(type_name) {
        TypeShape::Array(element) => {
            format!("[{}]", type_expression(field_name, element, mode))
        }
        shape => primitive_expression(shape, field_name, mode),
    }
}

/// `true` for a plain TypeScript identifier (ASCII letters, digits, `_`, `$`;
/// no leading digit).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}

/// `true` for a non-empty run of identifier characters, e.g. a name suffix.
pub fn is_identifier_tail(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_identifier_char)
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Quote `s` as a single-quoted TypeScript string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
