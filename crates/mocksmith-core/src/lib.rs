pub mod classify;
pub mod codegen;
pub mod config;
pub mod error;
pub mod generate;
pub mod interface;

// Re-export key types for convenience
pub use error::{MockSmithError, Result};
pub use generate::delegate::{resolve_property_expression, LocalTypeRegistry};
pub use generate::mode::Mode;
pub use generate::providers::synthesize_primitive;
pub use generate::schema::{synthesize_records, SynthesisOptions};
