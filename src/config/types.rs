//! Configuration types for shift simulation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`EngineConfig`] built from them.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{LegalReferences, NightFactor, NightWindow, ShiftRules, WorkRegime};

/// Metadata about the jurisdiction the rules implement.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the legislation.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

/// Night work section of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NightWorkConfig {
    /// First night hour (inclusive).
    pub start_hour: u32,
    /// Hour at which night work ends (exclusive).
    pub end_hour: u32,
    /// Length of a legal hour in minutes.
    pub legal_hour_minutes: Decimal,
    /// Length of the reduced night hour in real minutes.
    pub reduced_hour_minutes: Decimal,
}

/// Break section of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BreakConfig {
    /// Work accrued before the break is inserted.
    pub threshold_minutes: u32,
}

/// Simulation section of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on real minutes walked by the forward simulator.
    pub safety_cap_minutes: u32,
}

/// Rules configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Night window and reduced night hour.
    pub night_work: NightWorkConfig,
    /// Break insertion rule.
    #[serde(rename = "break")]
    pub break_rule: BreakConfig,
    /// Simulation limits.
    pub simulation: SimulationConfig,
    /// Weekly and monthly reference figures.
    pub references: LegalReferences,
}

impl RulesConfig {
    /// Builds the validated rule set used by the simulators.
    pub fn shift_rules(&self) -> EngineResult<ShiftRules> {
        Ok(ShiftRules {
            night_window: NightWindow::new(self.night_work.start_hour, self.night_work.end_hour)?,
            night_factor: NightFactor::from_reduced_hour(
                self.night_work.legal_hour_minutes,
                self.night_work.reduced_hour_minutes,
            )?,
            break_threshold_minutes: self.break_rule.threshold_minutes,
            safety_cap_minutes: self.simulation.safety_cap_minutes,
        })
    }
}

/// A regime entry in `regimes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeConfig {
    /// The human-readable name of the regime.
    pub name: String,
    /// Worked weekdays (e.g., `[Mon, Tue, Wed, Thu, Fri]`).
    pub working_days: Vec<Weekday>,
    /// Net daily target in minutes.
    pub daily_net_minutes: u32,
    /// Average working days in a month.
    pub working_days_per_month: u32,
}

/// Regimes configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimesConfig {
    /// Map of regime code to regime details.
    pub regimes: HashMap<String, RegimeConfig>,
}

impl RegimesConfig {
    /// Converts every entry into a validated [`WorkRegime`] keyed by code.
    pub fn into_regimes(self) -> EngineResult<HashMap<String, WorkRegime>> {
        let mut regimes = HashMap::with_capacity(self.regimes.len());
        for (code, entry) in self.regimes {
            let regime = WorkRegime {
                code: code.clone(),
                name: entry.name,
                working_days: entry.working_days,
                daily_net_minutes: entry.daily_net_minutes,
                working_days_per_month: entry.working_days_per_month,
            };
            regime.validate()?;
            regimes.insert(code, regime);
        }
        Ok(regimes)
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Rule set for both simulators.
    rules: ShiftRules,
    /// Weekly and monthly reference figures.
    references: LegalReferences,
    /// Work regimes by code.
    regimes: HashMap<String, WorkRegime>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        rules: ShiftRules,
        references: LegalReferences,
        regimes: HashMap<String, WorkRegime>,
    ) -> Self {
        Self {
            metadata,
            rules,
            references,
            regimes,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the simulation rules.
    pub fn rules(&self) -> &ShiftRules {
        &self.rules
    }

    /// Returns the legal reference figures.
    pub fn references(&self) -> &LegalReferences {
        &self.references
    }

    /// Returns all regimes.
    pub fn regimes(&self) -> &HashMap<String, WorkRegime> {
        &self.regimes
    }
}
