//! # Error Types
//!
//! Defines `MockSmithError`, the unified error enum for the few failure modes
//! MockSmith has. Synthesis itself never fails: unrecognized types and shapes
//! become tagged `UnhandledType<...>` placeholders. Errors are reserved for
//! inputs that have no valid partial interpretation (malformed schema JSON,
//! unreadable interface files, bad configuration).

use thiserror::Error;

/// All errors that can occur in MockSmith operations.
#[derive(Error, Debug)]
pub enum MockSmithError {
    #[error("Schema is not valid JSON: {source}\n  Expected an object such as {{\"id\": \"string\", \"tags\": \"string[]\"}}")]
    SchemaParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema must be a JSON object at the top level, found {found}")]
    SchemaNotObject { found: String },

    #[error("Failed to load interfaces: {message}")]
    InterfaceLoad { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, MockSmithError>;
