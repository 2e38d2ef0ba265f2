//! # Value Synthesis
//!
//! Two backends over one algorithm: `providers` + `schema` produce runtime
//! values from a loosely typed schema; `expression` + `delegate` produce
//! TypeScript expressions for generated factories. `mode` selects between
//! deterministic placeholders and realistic values in both.

pub mod delegate;
pub mod expression;
pub mod mode;
pub mod providers;
pub mod schema;
pub mod value;
