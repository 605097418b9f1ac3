//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading shift rules
//! and work regimes from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{LegalReferences, ShiftRules, WorkRegime};

use super::types::{EngineConfig, JurisdictionMetadata, RegimesConfig, RulesConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the simulation rules and work regimes.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── rules.yaml    # Night window, night factor, break threshold, references
/// └── regimes.yaml  # Weekly work regimes
/// ```
///
/// # Example
///
/// ```no_run
/// use clt_shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// let regime = loader.get_regime("five_day").unwrap();
/// println!("{}: {} minutes per day", regime.name, regime.daily_net_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any value is out of range (e.g. a night hour above 23)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_shift_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), clt_shift_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules_config = Self::load_yaml::<RulesConfig>(&path.join("rules.yaml"))?;
        let regimes_config = Self::load_yaml::<RegimesConfig>(&path.join("regimes.yaml"))?;

        let rules = rules_config.shift_rules()?;
        let regimes = regimes_config.into_regimes()?;

        let config = EngineConfig::new(
            rules_config.jurisdiction,
            rules,
            rules_config.references,
            regimes,
        );

        Ok(Self { config })
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the simulation rules.
    pub fn rules(&self) -> &ShiftRules {
        self.config.rules()
    }

    /// Returns the legal reference figures.
    pub fn references(&self) -> &LegalReferences {
        self.config.references()
    }

    /// Gets a work regime by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_shift_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// let regime = loader.get_regime("six_day")?;
    /// assert_eq!(regime.days_per_week(), 6);
    /// # Ok::<(), clt_shift_engine::error::EngineError>(())
    /// ```
    pub fn get_regime(&self, code: &str) -> EngineResult<&WorkRegime> {
        self.config
            .regimes()
            .get(code)
            .ok_or_else(|| EngineError::RegimeNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the codes of all configured regimes, sorted.
    pub fn regime_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.config.regimes().keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
