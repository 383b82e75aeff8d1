//! Economy Engine
//!
//! Owns the world of agent registries and the chained phase schedule, and
//! exposes the turn lifecycle: `init -> (advance_turn)* -> reset`. The
//! engine is an explicitly owned context object; any number of independent
//! engines can run side by side.

use bevy_ecs::prelude::*;

use econ_events::{EconomyEvent, EconomySnapshot, TurnTotals};

use crate::config::{ConfigError, SimulationConfig};
use crate::events::TurnEvents;
use crate::output;
use crate::setup;
use crate::systems;
use crate::TurnClock;

/// Resource: per-turn aggregate money totals, one entry per completed
/// turn. Empty at init and after reset.
#[derive(Resource, Debug, Default)]
pub struct History {
    totals: Vec<TurnTotals>,
}

impl History {
    pub fn push(&mut self, totals: TurnTotals) {
        self.totals.push(totals);
    }

    pub fn totals(&self) -> &[TurnTotals] {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Build the turn schedule. The chain is the whole concurrency story:
/// phases run strictly in this order, once per `advance_turn`.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            systems::hiring_and_lending,
            systems::production,
            systems::pay_salaries,
            systems::consumption,
            systems::collect_interest,
            systems::taxation,
            systems::unemployment_benefits,
            systems::utility_billing,
            systems::finalize_turn,
        )
            .chain(),
    );
    schedule
}

/// The simulation engine: a world of registries plus the phase schedule.
pub struct EconomyEngine {
    world: World,
    schedule: Schedule,
    config: SimulationConfig,
}

impl EconomyEngine {
    /// Validate the configuration and build the initial population.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = setup::build_world(&config);
        Ok(Self {
            world,
            schedule: build_schedule(),
            config,
        })
    }

    /// Run one full turn and return the resulting snapshot.
    pub fn advance_turn(&mut self) -> EconomySnapshot {
        self.schedule.run(&mut self.world);
        self.snapshot()
    }

    /// Owned snapshot of the current state; never aliases engine state.
    pub fn snapshot(&self) -> EconomySnapshot {
        output::build_snapshot(&self.world)
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u64 {
        self.world.resource::<TurnClock>().turn
    }

    /// Aggregate totals of every completed turn, oldest first.
    pub fn history(&self) -> &[TurnTotals] {
        self.world.resource::<History>().totals()
    }

    /// Take the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<EconomyEvent> {
        self.world.resource_mut::<TurnEvents>().drain()
    }

    /// Throw away the entire population and rebuild it from the original
    /// configuration: turn 0, empty history, reseeded RNG. Safe to call at
    /// any point between turns. The schedule is rebuilt as well because
    /// initialized systems are bound to the world they first ran against.
    pub fn reset(&mut self) {
        self.world = setup::build_world(&self.config);
        self.schedule = build_schedule();
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_starts_at_turn_zero() {
        let engine = EconomyEngine::new(SimulationConfig::default()).unwrap();
        assert_eq!(engine.turn(), 0);
        assert!(engine.history().is_empty());

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.turn, 0);
        assert_eq!(snapshot.citizens.len(), 10);
    }

    #[test]
    fn test_invalid_config_fails_before_construction() {
        let config = SimulationConfig {
            tax_rate: 2.0,
            ..SimulationConfig::default()
        };
        assert!(EconomyEngine::new(config).is_err());
    }

    #[test]
    fn test_advance_turn_increments_and_records() {
        let mut engine = EconomyEngine::new(SimulationConfig::default()).unwrap();

        let snapshot = engine.advance_turn();
        assert_eq!(snapshot.turn, 1);
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.history().len(), 1);

        engine.advance_turn();
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = EconomyEngine::new(SimulationConfig::default()).unwrap();
        let initial = engine.snapshot();

        for _ in 0..5 {
            engine.advance_turn();
        }
        engine.reset();

        assert_eq!(engine.turn(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.snapshot(), initial);
    }
}
