//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the bonus
//! policy from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::BonusPolicy;

/// Name of the policy file inside the configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the bonus policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Mileage rate, pool percentage, damage multiplier, tardy cutoff
/// ```
///
/// # Example
///
/// ```no_run
/// use bonus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Mileage rate: ${}", loader.policy().mileage_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: BonusPolicy,
}

impl ConfigLoader {
    /// Loads the policy from `policy.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The policy file is missing
    /// - The file contains invalid YAML
    /// - A policy value is out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bonus_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), bonus_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let policy = Self::load_yaml::<BonusPolicy>(&policy_path)?;
        Self::from_policy(policy)
    }

    /// Wraps an in-memory policy after validating it.
    pub fn from_policy(policy: BonusPolicy) -> EngineResult<Self> {
        Self::validate(&policy)?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(policy: &BonusPolicy) -> EngineResult<()> {
        if policy.mileage_rate < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "mileage_rate".to_string(),
                message: format!("must not be negative, got {}", policy.mileage_rate),
            });
        }

        let pct = policy.default_pool_percentage;
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPolicy {
                field: "default_pool_percentage".to_string(),
                message: format!("must be between 0 and 100, got {}", pct),
            });
        }

        if policy.unreported_damage_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                field: "unreported_damage_multiplier".to_string(),
                message: format!(
                    "must be at least 1, got {}",
                    policy.unreported_damage_multiplier
                ),
            });
        }

        Ok(())
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &BonusPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().mileage_rate, dec("0.60"));
        assert_eq!(loader.policy().default_pool_percentage, dec("4.5"));
        assert_eq!(loader.policy().unreported_damage_multiplier, dec("2"));
        assert_eq!(
            loader.policy().tardy_cutoff,
            NaiveTime::from_hms_opt(7, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("bonus-policy-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(POLICY_FILE), "mileage_rate: [not, a, number]\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_mileage_rate_rejected() {
        let policy = BonusPolicy {
            mileage_rate: dec("-0.10"),
            ..BonusPolicy::default()
        };

        match ConfigLoader::from_policy(policy) {
            Err(EngineError::InvalidPolicy { field, .. }) => assert_eq!(field, "mileage_rate"),
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_pool_percentage_over_100_rejected() {
        let policy = BonusPolicy {
            default_pool_percentage: dec("100.5"),
            ..BonusPolicy::default()
        };

        match ConfigLoader::from_policy(policy) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "default_pool_percentage")
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        let policy = BonusPolicy {
            unreported_damage_multiplier: dec("0.5"),
            ..BonusPolicy::default()
        };

        match ConfigLoader::from_policy(policy) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "unreported_damage_multiplier")
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_from_policy_accepts_defaults() {
        let loader = ConfigLoader::from_policy(BonusPolicy::default()).unwrap();
        assert_eq!(loader.policy(), &BonusPolicy::default());
    }
}
