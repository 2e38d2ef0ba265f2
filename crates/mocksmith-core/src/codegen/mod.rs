//! # Factory Code Generation
//!
//! Emits TypeScript factory objects whose property values come from
//! `generate::delegate::resolve_property_expression`.

pub mod factory;
