//! Configuration loading and management for the CLT Shift Engine.
//!
//! This module provides functionality to load simulation rules and work
//! regimes from YAML files, so that the night window, night factor, break
//! threshold and weekly regimes are data rather than constants.
//!
//! # Example
//!
//! ```no_run
//! use clt_shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded rules: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakConfig, EngineConfig, JurisdictionMetadata, NightWorkConfig, RegimeConfig, RegimesConfig,
    RulesConfig, SimulationConfig,
};
