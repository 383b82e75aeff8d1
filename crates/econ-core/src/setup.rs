//! World Setup
//!
//! Builds the engine world from a validated configuration: all agent
//! registries at their initial balances, the seeded RNG, the turn clock,
//! and empty event/history buffers. Reset rebuilds everything here
//! atomically, so no reference from a previous population can survive.

use bevy_ecs::prelude::*;

use crate::agents::{
    BankRegistry, CitizenRegistry, CompanyRegistry, GovernmentRegistry, UtilityRegistry,
};
use crate::config::SimulationConfig;
use crate::engine::History;
use crate::events::TurnEvents;
use crate::{SimRng, TurnClock};

/// Construct a fresh world for the given configuration. The caller is
/// responsible for having validated the config first.
pub fn build_world(config: &SimulationConfig) -> World {
    let mut world = World::new();

    world.insert_resource(config.clone());
    world.insert_resource(SimRng::seeded(config.seed));
    world.insert_resource(TurnClock::default());

    world.insert_resource(CitizenRegistry::with_population(config.citizens));
    world.insert_resource(CompanyRegistry::with_population(config.companies));
    world.insert_resource(BankRegistry::with_population(config.banks));
    world.insert_resource(GovernmentRegistry::with_population(config.governments));
    world.insert_resource(UtilityRegistry::with_population(config.utility_providers));

    world.insert_resource(TurnEvents::new());
    world.insert_resource(History::default());

    world
}
