//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{DriveThruType, StaffingRule};

/// Site metadata from `site.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// The location name (e.g. "Riverside").
    pub name: String,
    /// The numeric location code as printed on schedule exports.
    pub code: String,
    /// The site's drive-thru layout.
    pub dt_type: DriveThruType,
    /// Position names known at this site.
    pub positions: Vec<String>,
}

/// Rules file structure from `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// The authored staffing rules, in declaration order.
    pub rules: Vec<StaffingRule>,
}

/// The complete roster configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Site metadata.
    site: SiteConfig,
    /// Staffing rules in declaration order.
    rules: Vec<StaffingRule>,
}

impl RosterConfig {
    /// Creates a new RosterConfig from its component parts.
    pub fn new(site: SiteConfig, rules: Vec<StaffingRule>) -> Self {
        Self { site, rules }
    }

    /// Returns the site metadata.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Returns all configured rules in declaration order.
    pub fn rules(&self) -> &[StaffingRule] {
        &self.rules
    }
}
