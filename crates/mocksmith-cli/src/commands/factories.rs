use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use mocksmith_core::codegen::factory::{render_module, FactoryOptions};
use mocksmith_core::config::MockSmithConfig;
use mocksmith_core::interface::load_interfaces;

use super::{load_config, resolve_mode};
use crate::args::FactoriesArgs;

pub fn run(args: &FactoriesArgs) -> Result<()> {
    let config = load_config()?;
    let options = factory_options(&config, args)?;

    let interfaces = load_interfaces(&args.interfaces)?;
    if interfaces.is_empty() {
        tracing::warn!(
            "{} declares no interfaces; emitting an empty module",
            args.interfaces.display()
        );
    }

    let module = render_module(&interfaces, &options);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(module.as_bytes())?;
            writer.flush()?;
            eprintln!(
                "Wrote {} factories to {} ✓",
                interfaces.len(),
                path.display()
            );
        }
        None => print!("{}", module),
    }

    Ok(())
}

/// Config defaults with the command-line flags layered on top, validated.
fn factory_options(config: &MockSmithConfig, args: &FactoriesArgs) -> Result<FactoryOptions> {
    let mut options = config.factory_options();
    options.mode = resolve_mode(args.deterministic, options.mode);
    if let Some(suffix) = &args.factory_suffix {
        options.factory_suffix = suffix.clone();
    }
    if let Some(module) = &args.types_module {
        options.types_module = module.clone();
    }
    if let Some(module) = &args.faker_module {
        options.faker_module = module.clone();
    }
    options.validate().context("Invalid factory options")?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Command};
    use clap::Parser;
    use mocksmith_core::config::CodegenConfig;
    use mocksmith_core::Mode;

    fn factories_args(extra: &[&str]) -> FactoriesArgs {
        let mut argv = vec!["mocksmith", "factories", "--interfaces", "i.json"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Command::Factories(args) => args,
            other => panic!("Expected factories, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_layer_over_config() {
        let config = MockSmithConfig {
            codegen: CodegenConfig {
                factory_suffix: Some("Mock".to_string()),
                ..CodegenConfig::default()
            },
            ..MockSmithConfig::default()
        };
        let options = factory_options(
            &config,
            &factories_args(&["--deterministic", "--types-module", "../models"]),
        )
        .unwrap();
        assert_eq!(options.factory_suffix, "Mock");
        assert_eq!(options.types_module, "../models");
        assert_eq!(options.mode, Mode::Deterministic);
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let config = MockSmithConfig::default();
        for extra in [
            ["--factory-suffix", "Fac tory()"],
            ["--types-module", " "],
            ["--faker-module", ""],
        ] {
            assert!(
                factory_options(&config, &factories_args(&extra)).is_err(),
                "{:?} should be rejected",
                extra
            );
        }
    }
}
