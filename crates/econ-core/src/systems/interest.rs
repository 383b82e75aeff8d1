//! Interest Collection Phase
//!
//! The primary bank services every outstanding loan; borrowers that cannot
//! cover their interest this turn are skipped without penalty.

use bevy_ecs::prelude::*;
use econ_events::{EconomyEvent, EventKind};
use tracing::debug;

use crate::agents::{BankRegistry, CompanyRegistry};
use crate::events::TurnEvents;
use crate::TurnClock;

pub fn collect_interest(
    clock: Res<TurnClock>,
    mut banks: ResMut<BankRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    if let Some(bank) = banks.primary_mut() {
        for (company_id, amount) in bank.collect_interest(&mut companies) {
            debug!(company = company_id.0, amount, "interest collected");
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::InterestCollected {
                    bank: bank.id,
                    company: company_id.0,
                    amount,
                },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::CompanyId;
    use crate::config::SimulationConfig;
    use crate::params;
    use crate::setup;

    #[test]
    fn test_interest_collected_across_schedule_run() {
        let config = SimulationConfig {
            citizens: 1,
            companies: 1,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);

        // Take the bank registry out to avoid borrow conflicts
        let mut banks = world.remove_resource::<BankRegistry>().unwrap();
        {
            let mut companies = world.resource_mut::<CompanyRegistry>();
            let company = companies.get_mut(CompanyId(0)).unwrap();
            banks.primary_mut().unwrap().lend(company, params::LOAN_AMOUNT);
        }
        world.insert_resource(banks);

        let mut schedule = Schedule::default();
        schedule.add_systems(collect_interest);
        schedule.run(&mut world);

        let companies = world.resource::<CompanyRegistry>();
        assert_eq!(
            companies.get(CompanyId(0)).unwrap().money,
            params::INITIAL_COMPANY_MONEY + params::LOAN_AMOUNT - 250.0
        );
        let banks = world.resource::<BankRegistry>();
        assert_eq!(
            banks.primary().unwrap().money,
            params::INITIAL_BANK_MONEY - params::LOAN_AMOUNT + 250.0
        );
    }
}
