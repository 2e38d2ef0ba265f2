//! # Schema-Driven Record Synthesis
//!
//! Turns a loosely typed JSON schema into synthesized records:
//!
//! ```json
//! {
//!   "id": "string",
//!   "tags": "string[]",
//!   "scores": ["number", "number"],
//!   "owner": { "email": "string", "joined": "Date" },
//!   "items": [{ "sku": "string", "price": "number" }]
//! }
//! ```
//!
//! The raw JSON is parsed once into [`SchemaNode`]; the walker then recurses
//! over that tree. Shapes nothing understands become `UnhandledType<...>`
//! placeholders; only malformed JSON is an error.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classify::types::{extract_element_type, is_array_type};
use crate::error::{MockSmithError, Result};
use crate::generate::mode::Mode;
use crate::generate::providers::{primitive_for_field, synthesize_field, unhandled};

/// One node of a parsed schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A type-descriptor string such as `"string"` or `"Date[]"`.
    Hint(String),
    /// A nested object, walked once.
    Object(IndexMap<String, SchemaNode>),
    /// `[{...}]`: a template object repeated `array_length` times.
    ObjectArray(IndexMap<String, SchemaNode>),
    /// `["string", "number"]`: one value per hint, in order.
    HintTuple(Vec<SchemaNode>),
    /// Anything else, kept verbatim for the diagnostic placeholder.
    Unknown(serde_json::Value),
}

impl SchemaNode {
    /// Classify a raw JSON value.
    ///
    /// An array whose first entry is an object is a template array; this is
    /// checked before the first-entry-is-a-string case.
    pub fn parse(raw: &serde_json::Value) -> Self {
        use serde_json::Value as J;
        match raw {
            J::String(hint) => SchemaNode::Hint(hint.clone()),
            J::Object(map) => SchemaNode::Object(parse_fields(map)),
            J::Array(items) => match items.first() {
                Some(J::Object(template)) => SchemaNode::ObjectArray(parse_fields(template)),
                Some(J::String(_)) => SchemaNode::HintTuple(
                    items
                        .iter()
                        .map(|item| match item {
                            J::String(hint) => SchemaNode::Hint(hint.clone()),
                            other => SchemaNode::Unknown(other.clone()),
                        })
                        .collect(),
                ),
                _ => SchemaNode::Unknown(raw.clone()),
            },
            other => SchemaNode::Unknown(other.clone()),
        }
    }
}

fn parse_fields(map: &serde_json::Map<String, serde_json::Value>) -> IndexMap<String, SchemaNode> {
    map.iter()
        .map(|(k, v)| (k.clone(), SchemaNode::parse(v)))
        .collect()
}

/// A parsed top-level schema: an ordered set of named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub fields: IndexMap<String, SchemaNode>,
}

impl RecordSchema {
    /// Parse schema JSON text. Fails fast on malformed JSON or a non-object root.
    pub fn from_json_str(schema_json: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(schema_json)
            .map_err(|source| MockSmithError::SchemaParse { source })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &serde_json::Value) -> Result<Self> {
        match raw {
            serde_json::Value::Object(map) => Ok(Self {
                fields: parse_fields(map),
            }),
            other => Err(MockSmithError::SchemaNotObject {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Knobs for one records-synthesis call.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Length of every array the walker produces (hint tuples excepted).
    pub array_length: usize,
    pub mode: Mode,
    /// Fixed seed for reproducible realistic output.
    pub seed: Option<u64>,
    /// Anchor for date values. Captured from the wall clock when absent.
    pub base_time: Option<NaiveDateTime>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            array_length: 1,
            mode: Mode::Realistic,
            seed: None,
            base_time: None,
        }
    }
}

/// Recursive walker over a parsed schema.
///
/// `base_time` is pinned for the whole batch so every date in one call is
/// derived from the same anchor.
pub struct SchemaWalker<'r, R: Rng> {
    rng: &'r mut R,
    mode: Mode,
    array_length: usize,
    base_time: NaiveDateTime,
}

impl<'r, R: Rng> SchemaWalker<'r, R> {
    pub fn new(rng: &'r mut R, mode: Mode, array_length: usize, base_time: NaiveDateTime) -> Self {
        Self {
            rng,
            mode,
            array_length,
            base_time,
        }
    }

    /// Synthesize one record from a field map.
    pub fn walk_object(
        &mut self,
        fields: &IndexMap<String, SchemaNode>,
    ) -> serde_json::Map<String, serde_json::Value> {
        fields
            .iter()
            .map(|(key, node)| (key.clone(), self.walk_field(key, node)))
            .collect()
    }

    /// Synthesize the value of a single field.
    pub fn walk_field(&mut self, key: &str, node: &SchemaNode) -> serde_json::Value {
        match node {
            SchemaNode::Hint(hint) if is_array_type(hint) => {
                let element = extract_element_type(hint);
                let items = (0..self.array_length)
                    .map(|_| {
                        primitive_for_field(key, element, self.mode, &mut *self.rng, self.base_time)
                            .to_json()
                    })
                    .collect();
                serde_json::Value::Array(items)
            }
            SchemaNode::Hint(hint) => {
                synthesize_field(key, hint, self.mode, &mut *self.rng, self.base_time).to_json()
            }
            SchemaNode::Object(fields) => serde_json::Value::Object(self.walk_object(fields)),
            SchemaNode::ObjectArray(template) => {
                let items = (0..self.array_length)
                    .map(|_| serde_json::Value::Object(self.walk_object(template)))
                    .collect();
                serde_json::Value::Array(items)
            }
            SchemaNode::HintTuple(hints) => {
                let items = hints.iter().map(|h| self.walk_tuple_entry(key, h)).collect();
                serde_json::Value::Array(items)
            }
            SchemaNode::Unknown(raw) => unhandled(&raw.to_string()).to_json(),
        }
    }

    fn walk_tuple_entry(&mut self, key: &str, node: &SchemaNode) -> serde_json::Value {
        match node {
            SchemaNode::Hint(hint) if !is_array_type(hint) => {
                primitive_for_field(key, hint, self.mode, &mut *self.rng, self.base_time).to_json()
            }
            other => self.walk_field(key, other),
        }
    }
}

/// Synthesize `count` independent records from schema JSON text.
///
/// Seeded options produce identical output across runs; unseeded options
/// draw fresh entropy from the OS.
pub fn synthesize_records(
    count: usize,
    schema_json: &str,
    options: &SynthesisOptions,
) -> Result<Vec<serde_json::Value>> {
    let schema = RecordSchema::from_json_str(schema_json)?;
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(synthesize_records_with_rng(count, &schema, options, &mut rng))
}

/// Synthesize records from an already parsed schema with a caller-owned RNG.
pub fn synthesize_records_with_rng(
    count: usize,
    schema: &RecordSchema,
    options: &SynthesisOptions,
    rng: &mut impl Rng,
) -> Vec<serde_json::Value> {
    let base_time = options
        .base_time
        .unwrap_or_else(|| chrono::Utc::now().naive_utc());
    let mut walker = SchemaWalker::new(rng, options.mode, options.array_length, base_time);

    let records: Vec<serde_json::Value> = (0..count)
        .map(|_| serde_json::Value::Object(walker.walk_object(&schema.fields)))
        .collect();

    tracing::debug!(
        "Synthesized {} records ({} top-level fields, mode {:?})",
        records.len(),
        schema.fields.len(),
        options.mode
    );
    records
}
