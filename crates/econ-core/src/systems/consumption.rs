//! Consumption Phase
//!
//! Every citizen picks one company uniformly at random (independent draw
//! per citizen, with replacement) and tries to buy one unit at that
//! company's price.

use bevy_ecs::prelude::*;
use econ_events::{EconomyEvent, EventKind};

use crate::agents::{CitizenRegistry, CompanyId, CompanyRegistry};
use crate::events::TurnEvents;
use crate::{SimRng, TurnClock};

pub fn consumption(
    clock: Res<TurnClock>,
    mut rng: ResMut<SimRng>,
    mut citizens: ResMut<CitizenRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    if companies.is_empty() {
        return;
    }
    let company_count = companies.len();

    for citizen in citizens.iter_mut() {
        let choice = CompanyId(rng.pick(company_count) as u32);
        if let Some(company) = companies.get_mut(choice) {
            // Check the shelf before the citizen spends, so a sold-out
            // company cannot swallow the payment.
            if company.inventory > 0.0 {
                let spent = citizen.consume(company.price);
                if spent > 0.0 {
                    company.sell(spent);
                    events.push(EconomyEvent::new(
                        clock.turn,
                        EventKind::GoodsSold {
                            company: company.id.0,
                            citizen: citizen.id.0,
                            amount: spent,
                        },
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::CitizenId;
    use crate::config::SimulationConfig;
    use crate::params;
    use crate::setup;

    fn world_with(config: &SimulationConfig) -> (World, Schedule) {
        let world = setup::build_world(config);
        let mut schedule = Schedule::default();
        schedule.add_systems(consumption);
        (world, schedule)
    }

    #[test]
    fn test_purchase_moves_price_and_one_unit() {
        let config = SimulationConfig {
            citizens: 1,
            companies: 1,
            ..SimulationConfig::default()
        };
        let (mut world, mut schedule) = world_with(&config);
        world
            .resource_mut::<CompanyRegistry>()
            .get_mut(CompanyId(0))
            .unwrap()
            .inventory = 5.0;

        schedule.run(&mut world);

        let citizens = world.resource::<CitizenRegistry>();
        let companies = world.resource::<CompanyRegistry>();
        assert_eq!(
            citizens.get(CitizenId(0)).unwrap().money,
            params::INITIAL_CITIZEN_MONEY - params::UNIT_PRICE
        );
        let company = companies.get(CompanyId(0)).unwrap();
        assert_eq!(company.inventory, 4.0);
        assert_eq!(
            company.money,
            params::INITIAL_COMPANY_MONEY + params::UNIT_PRICE
        );
    }

    #[test]
    fn test_empty_inventory_moves_no_money() {
        let config = SimulationConfig {
            citizens: 3,
            companies: 1,
            ..SimulationConfig::default()
        };
        let (mut world, mut schedule) = world_with(&config);

        schedule.run(&mut world);

        let citizens = world.resource::<CitizenRegistry>();
        let companies = world.resource::<CompanyRegistry>();
        assert!(citizens
            .iter()
            .all(|c| c.money == params::INITIAL_CITIZEN_MONEY));
        assert_eq!(
            companies.get(CompanyId(0)).unwrap().money,
            params::INITIAL_COMPANY_MONEY
        );
    }
}
