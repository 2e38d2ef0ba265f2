use serde::{Deserialize, Serialize};

/// Which backend a synthesis call uses.
///
/// Passed explicitly to every call; nothing reads it from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fixed, reproducible placeholders (`example_<field>`, `0`, `true`).
    Deterministic,
    /// Randomized values biased by semantic cues in the field name.
    #[default]
    Realistic,
}

impl Mode {
    pub fn from_realistic(realistic: bool) -> Self {
        if realistic {
            Mode::Realistic
        } else {
            Mode::Deterministic
        }
    }

    pub fn is_realistic(self) -> bool {
        matches!(self, Mode::Realistic)
    }
}

impl From<bool> for Mode {
    fn from(realistic: bool) -> Self {
        Mode::from_realistic(realistic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Mode::from(true), Mode::Realistic);
        assert_eq!(Mode::from(false), Mode::Deterministic);
        assert!(Mode::default().is_realistic());
    }
}
