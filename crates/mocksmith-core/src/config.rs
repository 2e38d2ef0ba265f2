//! # Configuration File Parser
//!
//! Reads and parses `mocksmith.toml`, the optional configuration file that
//! sets defaults for the CLI without repeating flags. Supports:
//!
//! - `[generate]` — record count, array length, mode and seed
//! - `[codegen]` — factory naming and import paths for emitted factories
//!
//! Example `mocksmith.toml`:
//!
//! ```toml
//! [generate]
//! count = 25
//! array_length = 3
//! realistic = true
//! seed = 42
//!
//! [codegen]
//! factory_suffix = "Factory"
//! types_module = "./types"
//! faker_module = "@faker-js/faker"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::codegen::factory::FactoryOptions;
use crate::error::{MockSmithError, Result};
use crate::generate::mode::Mode;
use crate::generate::schema::SynthesisOptions;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "mocksmith.toml";

/// Top-level mocksmith.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MockSmithConfig {
    /// Record synthesis defaults.
    pub generate: GenerateConfig,
    /// Factory emission defaults.
    pub codegen: CodegenConfig,
}

/// Record synthesis defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of records to synthesize.
    pub count: Option<usize>,
    /// Length of synthesized arrays.
    pub array_length: Option<usize>,
    /// Prefer realistic values over deterministic placeholders.
    pub realistic: Option<bool>,
    /// Fixed random seed for reproducible output.
    pub seed: Option<u64>,
}

/// Factory emission defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Appended to interface names to form factory names.
    pub factory_suffix: Option<String>,
    /// Module the interface types are imported from.
    pub types_module: Option<String>,
    /// Module `faker` is imported from.
    pub faker_module: Option<String>,
}

/// Read and parse a mocksmith.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed or validated.
pub fn read_config(dir: &Path) -> Result<Option<MockSmithConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| MockSmithError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: MockSmithConfig =
        toml::from_str(&content).map_err(|e| MockSmithError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;

    config.validate()?;

    Ok(Some(config))
}

impl MockSmithConfig {
    /// Validate constraints that serde cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.generate.array_length == Some(0) {
            return Err(MockSmithError::Config {
                message: "generate.array_length must be at least 1".to_string(),
            });
        }

        self.factory_options().validate()
    }

    /// Synthesis options with config values layered over the built-in defaults.
    pub fn synthesis_options(&self) -> SynthesisOptions {
        let defaults = SynthesisOptions::default();
        SynthesisOptions {
            array_length: self.generate.array_length.unwrap_or(defaults.array_length),
            mode: self
                .generate
                .realistic
                .map(Mode::from_realistic)
                .unwrap_or(defaults.mode),
            seed: self.generate.seed.or(defaults.seed),
            base_time: defaults.base_time,
        }
    }

    /// Factory options with config values layered over the built-in defaults.
    pub fn factory_options(&self) -> FactoryOptions {
        let defaults = FactoryOptions::default();
        FactoryOptions {
            mode: self
                .generate
                .realistic
                .map(Mode::from_realistic)
                .unwrap_or(defaults.mode),
            factory_suffix: self
                .codegen
                .factory_suffix
                .clone()
                .unwrap_or(defaults.factory_suffix),
            types_module: self
                .codegen
                .types_module
                .clone()
                .unwrap_or(defaults.types_module),
            faker_module: self
                .codegen
                .faker_module
                .clone()
                .unwrap_or(defaults.faker_module),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[generate]
count = 25
array_length = 3
realistic = false
seed = 42

[codegen]
factory_suffix = "Mock"
types_module = "../models"
"#;
        let config: MockSmithConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.generate.count, Some(25));

        let opts = config.synthesis_options();
        assert_eq!(opts.array_length, 3);
        assert_eq!(opts.mode, Mode::Deterministic);
        assert_eq!(opts.seed, Some(42));

        let factory = config.factory_options();
        assert_eq!(factory.factory_suffix, "Mock");
        assert_eq!(factory.types_module, "../models");
        assert_eq!(factory.faker_module, "@faker-js/faker");
        assert_eq!(factory.mode, Mode::Deterministic);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: MockSmithConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        let opts = config.synthesis_options();
        assert_eq!(opts.array_length, 1);
        assert_eq!(opts.mode, Mode::Realistic);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn test_validate_zero_array_length_fails() {
        let config: MockSmithConfig = toml::from_str("[generate]\narray_length = 0\n").unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("array_length"), "{}", msg);
    }

    #[test]
    fn test_validate_bad_suffix_fails() {
        for suffix in ["", "Fac tory", "Factory()"] {
            let toml = format!("[codegen]\nfactory_suffix = \"{}\"\n", suffix);
            let config: MockSmithConfig = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err(), "suffix {:?} should fail", suffix);
        }
    }

    #[test]
    fn test_validate_empty_module_fails() {
        let config: MockSmithConfig =
            toml::from_str("[codegen]\nfaker_module = \"  \"\n").unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("faker_module"), "{}", msg);
    }

    #[test]
    fn test_read_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_read_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[generate]\ncount = 3\n").unwrap();

        let config = read_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.generate.count, Some(3));
    }

    #[test]
    fn test_read_config_validates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[generate]\narray_length = 0\n",
        )
        .unwrap();
        assert!(read_config(dir.path()).is_err());
    }

    #[test]
    fn test_read_config_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[generate\n").unwrap();
        let msg = read_config(dir.path()).unwrap_err().to_string();
        assert!(msg.contains(CONFIG_FILE_NAME), "{}", msg);
    }
}
