use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Age-based pricing used by both quotation workflows.
///
/// Every field has a default, so a TOML file only needs the keys it wants to
/// override:
///
/// ```toml
/// age_threshold = 25
/// young_premium = 650
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingRule {
    /// Drivers strictly younger than this pay `young_premium`.
    pub age_threshold: u32,
    pub young_premium: u32,
    pub standard_premium: u32,
}

impl Default for PricingRule {
    fn default() -> Self {
        PricingRule {
            age_threshold: 30,
            young_premium: 500,
            standard_premium: 300,
        }
    }
}

impl PricingRule {
    /// Premium for a driver of the given age.
    pub fn premium_for(&self, age: u32) -> u32 {
        if age < self.age_threshold {
            self.young_premium
        } else {
            self.standard_premium
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rule: PricingRule = toml::from_str(content)?;
        rule.validate()?;
        Ok(rule)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rule = Self::from_toml_str(&content)?;
        info!(path = %path.display(), ?rule, "loaded pricing rules");
        Ok(rule)
    }

    /// Load the file named by `var`, or the defaults when `var` is unset.
    ///
    /// A set but unreadable or malformed file is still an error.
    pub fn from_env_or_default(var: &str) -> Result<Self, ConfigError> {
        match std::env::var_os(var) {
            Some(path) => Self::from_file(path),
            None => {
                debug!(var, "pricing variable unset, using default rules");
                Ok(Self::default())
            }
        }
    }

    // Zero is the "no quotation" answer, so a real premium can't be zero.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.young_premium == 0 {
            return Err(ConfigError::invalid(
                "young_premium",
                "must be greater than zero",
            ));
        }
        if self.standard_premium == 0 {
            return Err(ConfigError::invalid(
                "standard_premium",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_rule() {
        let rule = PricingRule::default();
        assert_eq!(rule.premium_for(20), 500);
        assert_eq!(rule.premium_for(29), 500);
        assert_eq!(rule.premium_for(30), 300);
        assert_eq!(rule.premium_for(35), 300);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rule = PricingRule::from_toml_str("young_premium = 650\n").unwrap();
        assert_eq!(rule.young_premium, 650);
        assert_eq!(rule.standard_premium, 300);
        assert_eq!(rule.age_threshold, 30);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PricingRule::from_toml_str("").unwrap(), PricingRule::default());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let result = PricingRule::from_toml_str("youngest_premium = 1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_premium_is_invalid() {
        let result = PricingRule::from_toml_str("standard_premium = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "standard_premium",
                ..
            })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "age_threshold = 25").unwrap();
        writeln!(file, "young_premium = 700").unwrap();

        let rule = PricingRule::from_file(file.path()).unwrap();
        assert_eq!(rule.premium_for(24), 700);
        assert_eq!(rule.premium_for(25), 300);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = PricingRule::from_file("/nonexistent/pricing.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_unset_env_var_uses_default() {
        let rule = PricingRule::from_env_or_default("ERRORS_AS_VALUES_TEST_UNSET_PRICING").unwrap();
        assert_eq!(rule, PricingRule::default());
    }

    #[test]
    fn test_env_var_to_missing_file_is_read_error() {
        let var = "ERRORS_AS_VALUES_TEST_MISSING_PRICING";
        std::env::set_var(var, "/nonexistent/pricing.toml");
        let result = PricingRule::from_env_or_default(var);
        std::env::remove_var(var);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_env_var_to_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "young_premium = \"lots\"").unwrap();

        let var = "ERRORS_AS_VALUES_TEST_MALFORMED_PRICING";
        std::env::set_var(var, file.path());
        let result = PricingRule::from_env_or_default(var);
        std::env::remove_var(var);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_var_to_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "standard_premium = 320").unwrap();

        let var = "ERRORS_AS_VALUES_TEST_VALID_PRICING";
        std::env::set_var(var, file.path());
        let result = PricingRule::from_env_or_default(var);
        std::env::remove_var(var);
        assert_eq!(result.unwrap().standard_premium, 320);
    }
}
