use std::borrow::Cow;

use chrono::{Duration as ChronoDuration, NaiveDateTime};
use fake::faker::address::en::*;
use fake::faker::internet::en::*;
use fake::faker::lorem::en::*;
use fake::faker::name::en::*;
use fake::faker::phone_number::en::*;
use fake::Fake;
use rand::Rng;

use crate::classify::semantic::{match_field_name, SemanticCategory};
use crate::classify::types::is_date_type;
use crate::generate::mode::Mode;
use crate::generate::value::Value;

/// Field name used for string placeholders when no field is known.
const ANONYMOUS_FIELD: &str = "value";

/// Realistic dates fall within this many days before `base_time`.
const RECENT_DAYS: i64 = 30;

#[inline]
fn owned(s: String) -> Value {
    Value::String(Cow::Owned(s))
}

/// Render a realistic runtime value for a semantic category.
pub fn render_semantic_value(category: SemanticCategory, rng: &mut impl Rng) -> Value {
    match category {
        SemanticCategory::Email => owned(SafeEmail().fake_with_rng(rng)),
        SemanticCategory::FullName => owned(Name().fake_with_rng(rng)),
        SemanticCategory::Url => {
            let word: String = Word().fake_with_rng(rng);
            let suffix: String = DomainSuffix().fake_with_rng(rng);
            owned(format!("https://{}.{}", word.to_lowercase(), suffix))
        }
        SemanticCategory::Id => {
            let bytes: [u8; 16] = rng.random();
            Value::Uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
        }
        SemanticCategory::Phone => owned(PhoneNumber().fake_with_rng(rng)),
        SemanticCategory::Address => {
            let number: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            owned(format!("{} {}", number, street))
        }
        SemanticCategory::City => owned(CityName().fake_with_rng(rng)),
        SemanticCategory::Country => owned(CountryName().fake_with_rng(rng)),
        SemanticCategory::Amount => {
            let val: f64 = rng.random_range(1.0_f64..=1000.0_f64);
            Value::Float((val * 100.0_f64).round() / 100.0_f64)
        }
    }
}

/// Synthesize a single value for a bare type name, with no field context.
///
/// Deterministic strings use the `example_value` placeholder.
pub fn synthesize_primitive(
    type_name: &str,
    mode: Mode,
    rng: &mut impl Rng,
    base_time: NaiveDateTime,
) -> Value {
    primitive_for_field(ANONYMOUS_FIELD, type_name, mode, rng, base_time)
}

/// Synthesize a value for a bare type name on behalf of `field_name`.
///
/// Only realistic strings consult the semantic matcher here; see
/// [`synthesize_field`] for the variant that lets the field name win for
/// any type.
pub fn primitive_for_field(
    field_name: &str,
    type_name: &str,
    mode: Mode,
    rng: &mut impl Rng,
    base_time: NaiveDateTime,
) -> Value {
    let t = type_name.trim();
    match (t, mode) {
        ("string", Mode::Deterministic) => owned(format!("example_{}", field_name)),
        ("string", Mode::Realistic) => match match_field_name(field_name) {
            Some(category) => render_semantic_value(category, rng),
            None => owned(Word().fake_with_rng(rng)),
        },
        ("number", Mode::Deterministic) => Value::Int(0),
        ("number", Mode::Realistic) => Value::Int(rng.random_range(0..=100)),
        ("boolean", Mode::Deterministic) => Value::Bool(true),
        ("boolean", Mode::Realistic) => Value::Bool(rng.random_bool(0.5)),
        ("object" | "any" | "unknown", _) => Value::Json(serde_json::json!({})),
        (t, mode) if is_date_type(t) => match mode {
            Mode::Deterministic => Value::Timestamp(base_time),
            Mode::Realistic => {
                let seconds_ago = rng.random_range(0..RECENT_DAYS * 24 * 60 * 60);
                let recent = base_time
                    .checked_sub_signed(ChronoDuration::seconds(seconds_ago))
                    .unwrap_or(base_time);
                Value::Timestamp(recent)
            }
        },
        (t, _) => unhandled(t),
    }
}

/// Synthesize a scalar field: the semantic matcher wins in realistic mode,
/// otherwise the bare type decides.
pub fn synthesize_field(
    field_name: &str,
    type_name: &str,
    mode: Mode,
    rng: &mut impl Rng,
    base_time: NaiveDateTime,
) -> Value {
    if mode.is_realistic() {
        if let Some(category) = match_field_name(field_name) {
            return render_semantic_value(category, rng);
        }
    }
    primitive_for_field(field_name, type_name, mode, rng, base_time)
}

/// Tagged placeholder for a type or shape nothing knows how to synthesize.
pub fn unhandled(description: &str) -> Value {
    tracing::warn!(
        "No synthesizer for '{}'. Emitting UnhandledType placeholder.",
        description
    );
    owned(format!("UnhandledType<{}>", description))
}
