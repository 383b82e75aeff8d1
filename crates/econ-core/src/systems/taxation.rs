//! Taxation Phase
//!
//! The primary government taxes every citizen's balance each turn. Under
//! the default profit policy, every 10th turn it additionally taxes each
//! company's accumulated profit at `tax_rate + 0.05` and resets the
//! profit window; under the flat legacy policy, company balances are
//! taxed every turn like citizens'.

use bevy_ecs::prelude::*;
use econ_events::{ActorRef, EconomyEvent, EventKind};
use tracing::info;

use crate::agents::{CitizenRegistry, CompanyRegistry, GovernmentRegistry};
use crate::config::{SimulationConfig, TaxPolicy};
use crate::events::TurnEvents;
use crate::params;
use crate::TurnClock;

pub fn taxation(
    config: Res<SimulationConfig>,
    clock: Res<TurnClock>,
    mut governments: ResMut<GovernmentRegistry>,
    mut citizens: ResMut<CitizenRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    let government = match governments.primary_mut() {
        Some(government) => government,
        None => return,
    };

    for citizen in citizens.iter_mut() {
        if let Some(amount) = government.tax(citizen, config.tax_rate) {
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::BalanceTaxed {
                    government: government.id,
                    payer: ActorRef::Citizen(citizen.id.0),
                    amount,
                },
            ));
        }
    }

    match config.tax_policy {
        TaxPolicy::Profit => {
            // Pre-increment counter: the periodic levy first fires on the
            // 11th call to advance_turn, matching the turn the phases see.
            if clock.turn > 0 && clock.turn % params::PROFIT_TAX_INTERVAL == 0 {
                let rate = config.tax_rate + params::PROFIT_TAX_SURCHARGE;
                for company in companies.iter_mut() {
                    if let Some(amount) = government.tax_company(company, rate) {
                        info!(company = company.id.0, amount, "profit tax collected");
                        events.push(EconomyEvent::new(
                            clock.turn,
                            EventKind::ProfitTaxed {
                                government: government.id,
                                company: company.id.0,
                                amount,
                            },
                        ));
                    }
                    // The window restarts even when nothing was collected
                    company.reset_profit_window();
                }
            }
        }
        TaxPolicy::Flat => {
            for company in companies.iter_mut() {
                if let Some(amount) = government.tax(company, config.tax_rate) {
                    events.push(EconomyEvent::new(
                        clock.turn,
                        EventKind::BalanceTaxed {
                            government: government.id,
                            payer: ActorRef::Company(company.id.0),
                            amount,
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
    use crate::agents::{CitizenId, CompanyId};
    use crate::setup;

    fn run_taxation(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(taxation);
        schedule.run(world);
    }

    #[test]
    fn test_citizens_taxed_each_turn() {
        let config = SimulationConfig {
            citizens: 2,
            companies: 1,
            tax_rate: 0.1,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);
        run_taxation(&mut world);

        let citizens = world.resource::<CitizenRegistry>();
        assert!(citizens.iter().all(|c| c.money == 900.0));

        let governments = world.resource::<GovernmentRegistry>();
        assert_eq!(
            governments.primary().unwrap().money,
            params::INITIAL_GOVERNMENT_MONEY + 200.0
        );
    }

    #[test]
    fn test_profit_tax_waits_for_tenth_turn() {
        let config = SimulationConfig {
            citizens: 1,
            companies: 1,
            tax_rate: 0.0,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);
        {
            let mut companies = world.resource_mut::<CompanyRegistry>();
            let company = companies.get_mut(CompanyId(0)).unwrap();
            company.money_in = 1000.0;
            company.money_out = 400.0;
        }

        // Turn counter still 0: no profit tax, counters untouched
        run_taxation(&mut world);
        {
            let companies = world.resource::<CompanyRegistry>();
            assert_eq!(companies.get(CompanyId(0)).unwrap().profit(), 600.0);
        }

        // Tenth turn: profit taxed at rate + surcharge, window reset
        world.resource_mut::<TurnClock>().turn = params::PROFIT_TAX_INTERVAL;
        run_taxation(&mut world);

        let companies = world.resource::<CompanyRegistry>();
        let company = companies.get(CompanyId(0)).unwrap();
        assert_eq!(
            company.money,
            params::INITIAL_COMPANY_MONEY - 600.0 * params::PROFIT_TAX_SURCHARGE
        );
        assert_eq!(company.money_in, 0.0);
        assert_eq!(company.money_out, 0.0);
    }

    #[test]
    fn test_flat_policy_taxes_company_balances() {
        let config = SimulationConfig {
            tax_rate: 0.1,
            ..SimulationConfig::legacy()
        };
        let mut world = setup::build_world(&config);
        run_taxation(&mut world);

        let companies = world.resource::<CompanyRegistry>();
        assert!(companies
            .iter()
            .all(|c| c.money == params::INITIAL_COMPANY_MONEY * 0.9));
    }

    #[test]
    fn test_small_balance_citizen_exempt() {
        let config = SimulationConfig {
            citizens: 1,
            companies: 1,
            tax_rate: 0.1,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);
        world
            .resource_mut::<CitizenRegistry>()
            .get_mut(CitizenId(0))
            .unwrap()
            .money = 1.0;

        run_taxation(&mut world);

        let citizens = world.resource::<CitizenRegistry>();
        assert_eq!(citizens.get(CitizenId(0)).unwrap().money, 1.0);
    }
}
