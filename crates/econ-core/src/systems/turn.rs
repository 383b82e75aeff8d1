//! Turn Finalization
//!
//! Bumps the turn counter once all economic phases have run, then appends
//! the turn's aggregate money totals to the engine history.

use bevy_ecs::prelude::*;

use crate::agents::{
    BankRegistry, CitizenRegistry, CompanyRegistry, GovernmentRegistry, UtilityRegistry,
};
use crate::engine::History;
use crate::output;
use crate::TurnClock;

pub fn finalize_turn(
    mut clock: ResMut<TurnClock>,
    citizens: Res<CitizenRegistry>,
    companies: Res<CompanyRegistry>,
    banks: Res<BankRegistry>,
    governments: Res<GovernmentRegistry>,
    utilities: Res<UtilityRegistry>,
    mut history: ResMut<History>,
) {
    clock.turn += 1;
    history.push(output::turn_totals(
        clock.turn,
        &citizens,
        &companies,
        &banks,
        &governments,
        &utilities,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::setup;

    #[test]
    fn test_finalize_increments_and_records() {
        let config = SimulationConfig::default();
        let mut world = setup::build_world(&config);

        let mut schedule = Schedule::default();
        schedule.add_systems(finalize_turn);
        schedule.run(&mut world);
        schedule.run(&mut world);

        assert_eq!(world.resource::<TurnClock>().turn, 2);

        let history = world.resource::<History>();
        assert_eq!(history.len(), 2);
        assert_eq!(history.totals()[0].turn, 1);
        assert_eq!(history.totals()[1].turn, 2);
    }
}
