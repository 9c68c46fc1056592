//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Loads and provides access to payroll policy configuration.
///
/// The `ConfigLoader` reads the YAML policy file from a directory and
/// provides accessors for the values handlers need.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// └── policy.yaml   # Organisation identity and pro-ration policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Working days per period: {}", loader.total_working_days());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The policy file is missing
    /// - The policy file contains invalid YAML
    /// - `total_working_days` is zero
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;

        if policy.total_working_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "total_working_days must be greater than zero".to_string(),
            });
        }

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

    /// Returns the loaded payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the organisation the payslips are issued for.
    pub fn organisation(&self) -> &str {
        &self.policy.organisation
    }

    /// Returns the working-day denominator used for attendance pro-ration.
    pub fn total_working_days(&self) -> u32 {
        self.policy.total_working_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.organisation(), "Acme HR & Payroll");
        assert_eq!(loader.total_working_days(), 22);
    }

    #[test]
    fn test_policy_accessor_exposes_raw_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy().total_working_days, 22);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_zero_working_days_rejected() {
        let dir = std::env::temp_dir().join("payslip_engine_zero_twd_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("policy.yaml"),
            "organisation: \"Test Org\"\ntotal_working_days: 0\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("total_working_days"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let dir = std::env::temp_dir().join("payslip_engine_bad_yaml_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("policy.yaml"), "organisation: [unclosed\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
