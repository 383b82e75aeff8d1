//! Hiring & Lending Phase
//!
//! Every company rolls an independent hiring draw against every still
//! unemployed citizen, company-major / citizen-minor: a citizen taken by
//! an earlier company is no longer unemployed when later companies
//! iterate. Afterwards, a company whose balance fell below the low-funds
//! threshold asks the primary bank for the standard loan.

use bevy_ecs::prelude::*;
use econ_events::{EconomyEvent, EventKind};
use tracing::{debug, info};

use crate::agents::{BankRegistry, CitizenRegistry, CompanyRegistry};
use crate::config::SimulationConfig;
use crate::events::TurnEvents;
use crate::params;
use crate::{SimRng, TurnClock};

pub fn hiring_and_lending(
    config: Res<SimulationConfig>,
    clock: Res<TurnClock>,
    mut rng: ResMut<SimRng>,
    mut citizens: ResMut<CitizenRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut banks: ResMut<BankRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    for company in companies.iter_mut() {
        for citizen in citizens.iter_mut() {
            if citizen.employer.is_none() && rng.chance(config.hire_probability) {
                company.hire(citizen);
                debug!(
                    company = company.id.0,
                    citizen = citizen.id.0,
                    "citizen hired"
                );
                events.push(EconomyEvent::new(
                    clock.turn,
                    EventKind::Hired {
                        company: company.id.0,
                        citizen: citizen.id.0,
                        wage: citizen.salary,
                    },
                ));
            }
        }

        if company.money < params::LOW_FUNDS_THRESHOLD {
            if let Some(bank) = banks.primary_mut() {
                if bank.lend(company, params::LOAN_AMOUNT) {
                    info!(
                        company = company.id.0,
                        principal = params::LOAN_AMOUNT,
                        "loan issued"
                    );
                    events.push(EconomyEvent::new(
                        clock.turn,
                        EventKind::LoanIssued {
                            bank: bank.id,
                            company: company.id.0,
                            principal: params::LOAN_AMOUNT,
                            interest_rate: params::LOAN_INTEREST_RATE,
                        },
                    ));
                } else {
                    events.push(EconomyEvent::new(
                        clock.turn,
                        EventKind::LoanRefused {
                            bank: bank.id,
                            company: company.id.0,
                            principal: params::LOAN_AMOUNT,
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
    use crate::setup;

    fn run_once(config: SimulationConfig) -> World {
        let mut world = setup::build_world(&config);
        let mut schedule = Schedule::default();
        schedule.add_systems(hiring_and_lending);
        schedule.run(&mut world);
        world
    }

    #[test]
    fn test_certain_hiring_employs_everyone_at_first_company() {
        let config = SimulationConfig {
            citizens: 5,
            companies: 2,
            hire_probability: 1.0,
            banks: 0,
            governments: 0,
            utility_providers: 0,
            ..SimulationConfig::default()
        };
        let world = run_once(config);

        let citizens = world.resource::<CitizenRegistry>();
        assert!(citizens.iter().all(|c| c.is_employed()));

        // Company-major iteration: the first company wins every draw
        let companies = world.resource::<CompanyRegistry>();
        let counts: Vec<usize> = companies.iter().map(|c| c.employees.len()).collect();
        assert_eq!(counts, vec![5, 0]);
    }

    #[test]
    fn test_zero_probability_hires_nobody() {
        let config = SimulationConfig {
            citizens: 5,
            companies: 2,
            hire_probability: 0.0,
            ..SimulationConfig::default()
        };
        let world = run_once(config);

        let citizens = world.resource::<CitizenRegistry>();
        assert!(citizens.iter().all(|c| !c.is_employed()));
    }

    #[test]
    fn test_low_funds_company_takes_loan() {
        let config = SimulationConfig {
            citizens: 1,
            companies: 1,
            hire_probability: 0.0,
            ..SimulationConfig::default()
        };
        let mut world = setup::build_world(&config);
        world
            .resource_mut::<CompanyRegistry>()
            .get_mut(crate::CompanyId(0))
            .unwrap()
            .money = 500.0;

        let mut schedule = Schedule::default();
        schedule.add_systems(hiring_and_lending);
        schedule.run(&mut world);

        let companies = world.resource::<CompanyRegistry>();
        assert_eq!(companies.get(crate::CompanyId(0)).unwrap().money, 5500.0);

        let banks = world.resource::<BankRegistry>();
        let bank = banks.primary().unwrap();
        assert_eq!(bank.money, params::INITIAL_BANK_MONEY - params::LOAN_AMOUNT);
        assert_eq!(bank.loans.len(), 1);
    }
}
