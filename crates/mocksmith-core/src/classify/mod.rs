//! # Classification
//!
//! Pure predicates over type descriptors (`types`) and the field-name
//! trigger table (`semantic`).

pub mod semantic;
pub mod types;
