//! Salary Payment Phase
//!
//! Every company pays the employees it can afford; the rest wait for a
//! better turn.

use bevy_ecs::prelude::*;
use econ_events::{EconomyEvent, EventKind};

use crate::agents::{CitizenRegistry, CompanyRegistry};
use crate::events::TurnEvents;
use crate::TurnClock;

pub fn pay_salaries(
    clock: Res<TurnClock>,
    mut citizens: ResMut<CitizenRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    for company in companies.iter_mut() {
        for (citizen_id, amount) in company.pay_salaries(&mut citizens) {
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::SalaryPaid {
                    company: company.id.0,
                    citizen: citizen_id.0,
                    amount,
                },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{CitizenId, CompanyId};
    use crate::config::SimulationConfig;
    use crate::events::TurnEvents;
    use crate::params;
    use crate::setup;

    #[test]
    fn test_salaries_flow_and_are_logged() {
        let config = SimulationConfig {
            citizens: 2,
            companies: 1,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);

        {
            let mut companies = world.resource_mut::<CompanyRegistry>();
            let company = companies.get_mut(CompanyId(0)).unwrap();
            company.employees = vec![CitizenId(0), CitizenId(1)];
        }
        {
            let mut citizens = world.resource_mut::<CitizenRegistry>();
            for id in [CitizenId(0), CitizenId(1)] {
                let citizen = citizens.get_mut(id).unwrap();
                citizen.employer = Some(CompanyId(0));
                citizen.salary = params::STARTING_WAGE;
            }
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(pay_salaries);
        schedule.run(&mut world);

        let companies = world.resource::<CompanyRegistry>();
        assert_eq!(
            companies.get(CompanyId(0)).unwrap().money,
            params::INITIAL_COMPANY_MONEY - 2.0 * params::STARTING_WAGE
        );

        let events = world.resource::<TurnEvents>();
        assert_eq!(events.len(), 2);
    }
}
