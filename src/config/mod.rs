//! Configuration for the roster engine.
//!
//! Site metadata and authored staffing rules are loaded from YAML files;
//! see [`ConfigLoader`] for the expected directory layout.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RosterConfig, RulesFile, SiteConfig};
