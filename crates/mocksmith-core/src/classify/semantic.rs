//! # Semantic Key Matching
//!
//! Infers a value category from substrings in a field name so that a field
//! called `contactEmail` looks like an email and `unitPrice` looks like money.
//!
//! The trigger table is defined once here. The runtime-value renderer
//! (`generate::providers`) and the source-expression renderer
//! (`generate::expression`) both consume `match_field_name`, so data
//! generated in one mode and factory code generated in the other agree on
//! every field name.

use std::fmt;

/// A value category inferred from a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticCategory {
    Email,
    FullName,
    Url,
    Id,
    Phone,
    Address,
    City,
    Country,
    Amount,
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SemanticCategory::Email => "email",
            SemanticCategory::FullName => "full_name",
            SemanticCategory::Url => "url",
            SemanticCategory::Id => "id",
            SemanticCategory::Phone => "phone",
            SemanticCategory::Address => "address",
            SemanticCategory::City => "city",
            SemanticCategory::Country => "country",
            SemanticCategory::Amount => "amount",
        };
        f.write_str(s)
    }
}

/// A trigger rule: any of `needles` contained in the lowercased name selects `category`.
struct KeyRule {
    needles: &'static [&'static str],
    category: SemanticCategory,
}

// Order matters: the first matching rule wins ("email" must beat "name",
// so `emailName` is an email).
static KEY_RULES: &[KeyRule] = &[
    KeyRule {
        needles: &["email"],
        category: SemanticCategory::Email,
    },
    KeyRule {
        needles: &["name"],
        category: SemanticCategory::FullName,
    },
    KeyRule {
        needles: &["url"],
        category: SemanticCategory::Url,
    },
    KeyRule {
        needles: &["id"],
        category: SemanticCategory::Id,
    },
    KeyRule {
        needles: &["phone"],
        category: SemanticCategory::Phone,
    },
    KeyRule {
        needles: &["address"],
        category: SemanticCategory::Address,
    },
    KeyRule {
        needles: &["city"],
        category: SemanticCategory::City,
    },
    KeyRule {
        needles: &["country"],
        category: SemanticCategory::Country,
    },
    KeyRule {
        needles: &["amount", "price"],
        category: SemanticCategory::Amount,
    },
];

/// Match a field name against the trigger table, returning the first hit.
pub fn match_field_name(field_name: &str) -> Option<SemanticCategory> {
    let lowered = field_name.to_lowercase();
    KEY_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|n| lowered.contains(n)))
        .map(|rule| rule.category)
}
