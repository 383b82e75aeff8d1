//! Closed-Economy Simulation Engine
//!
//! A small closed economy of citizens, companies, a bank, a government and
//! a utility provider, advanced in discrete turns. Each turn runs a fixed
//! pipeline of phases (hiring, production, salaries, consumption, interest,
//! taxation, benefits, utility billing) over registry resources owned by an
//! [`engine::EconomyEngine`].

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub mod agents;
pub mod config;
pub mod engine;
pub mod events;
pub mod output;
pub mod params;
pub mod setup;
pub mod systems;

pub use agents::{
    Account, Bank, BankRegistry, Citizen, CitizenId, CitizenRegistry, Company, CompanyId,
    CompanyRegistry, Government, GovernmentRegistry, Loan, UtilityProvider, UtilityRegistry,
};
pub use config::{ConfigError, SimulationConfig, TaxPolicy};
pub use engine::EconomyEngine;

/// Seeded random number generator resource.
///
/// All stochastic phases (hiring draws, consumption company choice) go
/// through this resource, so a run is fully determined by config + seed.
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// One independent draw with the given success probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.0.gen::<f64>() < probability
    }

    /// Uniform index into a non-empty collection of `len` items.
    pub fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Current turn counter resource.
///
/// Holds the number of completed turns; phases read it pre-increment, and
/// the finalize phase bumps it after all economic phases have run.
#[derive(Resource, Debug, Default)]
pub struct TurnClock {
    pub turn: u64,
}
