//! Configuration System
//!
//! Initialization input for a simulation run, loadable from a TOML file.
//! Validation runs before any agent is constructed and fails fast with a
//! descriptive error.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Which company-taxation variant the engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxPolicy {
    /// Every 10th turn, tax each company's accumulated profit at
    /// `tax_rate + 0.05`, then reset its revenue/expense counters.
    #[default]
    Profit,
    /// Tax each company's balance at `tax_rate` every turn, like citizens.
    /// Part of the reduced legacy variant.
    Flat,
}

/// Complete configuration for one simulation run.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of citizens to create.
    pub citizens: u32,
    /// Number of companies to create.
    pub companies: u32,
    /// Per-turn citizen tax rate, in [0, 1].
    pub tax_rate: f64,
    /// Number of banks (0 or more; the first is the primary lender).
    pub banks: u32,
    /// Number of governments (0 or more; the first collects taxes).
    pub governments: u32,
    /// Number of utility providers (0 or more; the first bills fees).
    pub utility_providers: u32,
    /// Probability of each (company, citizen) hiring draw, in [0, 1].
    pub hire_probability: f64,
    /// Company taxation variant.
    pub tax_policy: TaxPolicy,
    /// RNG seed; identical seed + config reproduces a run exactly.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            citizens: 10,
            companies: 3,
            tax_rate: 0.1,
            banks: 1,
            governments: 1,
            utility_providers: 1,
            hire_probability: 0.1,
            tax_policy: TaxPolicy::Profit,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// The reduced legacy variant: flat company taxation, no utility
    /// provider.
    pub fn legacy() -> Self {
        Self {
            tax_policy: TaxPolicy::Flat,
            utility_providers: 0,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration; every constructor of an engine calls this
    /// before building any agent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.citizens == 0 {
            return Err(ConfigError::NoCitizens);
        }
        if self.companies == 0 {
            return Err(ConfigError::NoCompanies);
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ConfigError::TaxRateOutOfRange(self.tax_rate));
        }
        if !(0.0..=1.0).contains(&self.hire_probability) {
            return Err(ConfigError::HireProbabilityOutOfRange(
                self.hire_probability,
            ));
        }
        Ok(())
    }
}

/// Errors reported while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("simulation requires at least one citizen")]
    NoCitizens,
    #[error("simulation requires at least one company")]
    NoCompanies,
    #[error("tax rate must be within [0, 1], got {0}")]
    TaxRateOutOfRange(f64),
    #[error("hire probability must be within [0, 1], got {0}")]
    HireProbabilityOutOfRange(f64),
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
