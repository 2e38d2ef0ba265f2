use std::borrow::Cow;

use chrono::NaiveDateTime;
use uuid::Uuid;

/// A synthesized leaf value.
///
/// The `String` variant uses `Cow<'static, str>` so that fixed placeholders
/// and values drawn from static tables are held as `&'static str` borrows,
/// while generated text (emails, names, `example_<field>`) is owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Timestamp(NaiveDateTime),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Convert to the JSON form used in synthesized records.
    ///
    /// Timestamps use ISO 8601 with milliseconds and a trailing 'Z'.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::json!(*i),
            Value::Float(f) => serde_json::json!(*f),
            Value::String(s) => serde_json::Value::String(s.to_string()),
            Value::Timestamp(ts) => {
                serde_json::Value::String(format!("{}Z", ts.format("%Y-%m-%dT%H:%M:%S%.3f")))
            }
            Value::Uuid(u) => serde_json::Value::String(u.to_string()),
            Value::Json(j) => j.clone(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}
