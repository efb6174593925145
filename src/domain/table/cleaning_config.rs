// ============================================================
// CLEANING CONFIGURATION
// ============================================================
// Tunable values for the record cleaning pipeline

use serde::{Deserialize, Serialize};

/// Configuration for record cleaning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Minimum digit count for a phone value to survive validation
    /// (default: 10)
    pub min_phone_digits: usize,

    /// Label substituted for a missing department (default: "Unknown")
    pub missing_dept_label: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            min_phone_digits: 10,
            missing_dept_label: "Unknown".to_string(),
        }
    }
}

impl CleaningConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum phone digit count
    pub fn with_min_phone_digits(mut self, min_phone_digits: usize) -> Self {
        self.min_phone_digits = min_phone_digits;
        self
    }

    /// Set the missing-department label
    pub fn with_missing_dept_label(mut self, label: impl Into<String>) -> Self {
        self.missing_dept_label = label.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.min_phone_digits == 0 {
            return Err("min_phone_digits must be > 0".to_string());
        }
        if self.missing_dept_label.is_empty() {
            return Err("missing_dept_label must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CleaningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_phone_digits, 10);
        assert_eq!(config.missing_dept_label, "Unknown");
    }

    #[test]
    fn test_rejects_zero_digit_threshold() {
        let config = CleaningConfig::new().with_min_phone_digits(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_dept_label() {
        let config = CleaningConfig::new().with_missing_dept_label("");
        assert!(config.validate().is_err());
    }
}
