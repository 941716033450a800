//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading site and
//! staffing-rule configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::StaffingRule;

use super::types::{RosterConfig, RulesFile, SiteConfig};

/// Loads and provides access to roster configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the site metadata and the authored staffing
/// rules.
///
/// # Directory Structure
///
/// ```text
/// config/qsr_default/
/// ├── site.yaml   # Location name/code, drive-thru layout, positions
/// └── rules.yaml  # Authored staffing rules
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/qsr_default").unwrap();
/// println!("Site: {}", loader.site().name);
/// println!("{} rules configured", loader.rules().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either required file is missing or contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let site = Self::load_yaml::<SiteConfig>(&path.join("site.yaml"))?;
        let rules_file = Self::load_yaml::<RulesFile>(&path.join("rules.yaml"))?;

        Ok(Self {
            config: RosterConfig::new(site, rules_file.rules),
        })
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

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the site metadata.
    pub fn site(&self) -> &SiteConfig {
        self.config.site()
    }

    /// Returns all configured rules in declaration order.
    pub fn rules(&self) -> &[StaffingRule] {
        self.config.rules()
    }

    /// Gets a configured rule by name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RuleNotFound`] when no rule has that name.
    pub fn get_rule(&self, name: &str) -> EngineResult<&StaffingRule> {
        self.config
            .rules()
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| EngineError::RuleNotFound {
                name: name.to_string(),
            })
    }
}
