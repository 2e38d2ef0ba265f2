pub mod expr;
pub mod factories;
pub mod preview;
pub mod records;

use std::path::Path;

use anyhow::{Context, Result};

use mocksmith_core::config::{read_config, MockSmithConfig};
use mocksmith_core::Mode;

/// Load `mocksmith.toml` from the working directory, or defaults when absent.
pub fn load_config() -> Result<MockSmithConfig> {
    let config = read_config(Path::new("."))?.unwrap_or_default();
    Ok(config)
}

/// `--deterministic` wins; otherwise the configured mode stands.
pub fn resolve_mode(deterministic: bool, configured: Mode) -> Mode {
    if deterministic {
        Mode::Deterministic
    } else {
        configured
    }
}

/// Read a schema file into a string.
pub fn read_schema(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_flag_overrides_config() {
        assert_eq!(resolve_mode(true, Mode::Realistic), Mode::Deterministic);
        assert_eq!(resolve_mode(false, Mode::Realistic), Mode::Realistic);
        assert_eq!(resolve_mode(false, Mode::Deterministic), Mode::Deterministic);
    }
}
