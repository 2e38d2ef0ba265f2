use anyhow::{Context, Result};

use mocksmith_core::codegen::factory::FactoryOptions;
use mocksmith_core::config::MockSmithConfig;
use mocksmith_core::{resolve_property_expression, LocalTypeRegistry};

use super::{load_config, resolve_mode};
use crate::args::ExprArgs;

pub fn run(args: &ExprArgs) -> Result<()> {
    let config = load_config()?;
    let factory = factory_options(&config, args)?;

    let registry = LocalTypeRegistry::new(args.local.iter().map(|s| s.trim().to_string()))
        .with_factory_suffix(factory.factory_suffix);

    println!(
        "{}",
        resolve_property_expression(&args.field, &args.type_name, &registry, factory.mode)
    );
    Ok(())
}

/// Config defaults with the command-line flags layered on top, validated.
fn factory_options(config: &MockSmithConfig, args: &ExprArgs) -> Result<FactoryOptions> {
    let mut options = config.factory_options();
    options.mode = resolve_mode(args.deterministic, options.mode);
    if let Some(suffix) = &args.factory_suffix {
        options.factory_suffix = suffix.clone();
    }
    options.validate().context("Invalid --factory-suffix")?;
    Ok(options)
}
