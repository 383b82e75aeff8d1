//! Snapshot Generation
//!
//! Builds owned [`EconomySnapshot`] values from the engine world and
//! writes them to an output directory. Snapshots copy agent state; a
//! consumer can never reach back into the engine's mutable registries
//! through one.

use bevy_ecs::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use econ_events::{
    BankSnapshot, CategorySummary, CitizenSnapshot, CompanySnapshot, EconomySnapshot,
    GovernmentSnapshot, LoanSnapshot, TurnTotals, UtilitySnapshot,
};

use crate::agents::{
    BankRegistry, CitizenRegistry, CompanyRegistry, GovernmentRegistry, UtilityRegistry,
};
use crate::TurnClock;

/// Aggregate counts and money totals for one turn.
pub fn turn_totals(
    turn: u64,
    citizens: &CitizenRegistry,
    companies: &CompanyRegistry,
    banks: &BankRegistry,
    governments: &GovernmentRegistry,
    utilities: &UtilityRegistry,
) -> TurnTotals {
    TurnTotals {
        turn,
        citizens: CategorySummary {
            count: citizens.len(),
            total_money: citizens.total_money(),
        },
        companies: CategorySummary {
            count: companies.len(),
            total_money: companies.total_money(),
        },
        banks: CategorySummary {
            count: banks.len(),
            total_money: banks.total_money(),
        },
        governments: CategorySummary {
            count: governments.len(),
            total_money: governments.total_money(),
        },
        utility_providers: CategorySummary {
            count: utilities.len(),
            total_money: utilities.total_money(),
        },
    }
}

/// Generate a complete snapshot of the current economy state.
pub fn build_snapshot(world: &World) -> EconomySnapshot {
    let turn = world.resource::<TurnClock>().turn;
    let citizens = world.resource::<CitizenRegistry>();
    let companies = world.resource::<CompanyRegistry>();
    let banks = world.resource::<BankRegistry>();
    let governments = world.resource::<GovernmentRegistry>();
    let utilities = world.resource::<UtilityRegistry>();

    EconomySnapshot {
        turn,
        summary: turn_totals(turn, citizens, companies, banks, governments, utilities),
        citizens: citizens
            .iter()
            .map(|c| CitizenSnapshot {
                id: c.id.0,
                money: c.money,
                employer: c.employer.map(|id| id.0),
                salary: c.salary,
            })
            .collect(),
        companies: companies
            .iter()
            .map(|c| CompanySnapshot {
                id: c.id.0,
                money: c.money,
                employee_count: c.employees.len(),
                inventory: c.inventory,
                price: c.price,
                money_in: c.money_in,
                money_out: c.money_out,
            })
            .collect(),
        banks: banks
            .iter()
            .map(|b| BankSnapshot {
                id: b.id,
                money: b.money,
                loans: b
                    .loans
                    .iter()
                    .map(|l| LoanSnapshot {
                        borrower: l.borrower.0,
                        principal: l.principal,
                        interest_rate: l.interest_rate,
                    })
                    .collect(),
            })
            .collect(),
        governments: governments
            .iter()
            .map(|g| GovernmentSnapshot {
                id: g.id,
                money: g.money,
            })
            .collect(),
        utility_providers: utilities
            .iter()
            .map(|u| UtilitySnapshot {
                id: u.id,
                money: u.money,
            })
            .collect(),
    }
}

/// Write a snapshot into `<dir>/snapshots/turn_NNNNNN.json`, returning the
/// path written.
pub fn write_snapshot_to_dir(snapshot: &EconomySnapshot, dir: &Path) -> io::Result<PathBuf> {
    let snapshots_dir = dir.join("snapshots");
    fs::create_dir_all(&snapshots_dir)?;

    let path = snapshots_dir.join(format!("turn_{:06}.json", snapshot.turn));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Refresh `<dir>/current_state.json` with the latest snapshot.
pub fn write_current_state(snapshot: &EconomySnapshot, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join("current_state.json"), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::params;
    use crate::setup;

    #[test]
    fn test_build_snapshot_reflects_initial_state() {
        let config = SimulationConfig {
            citizens: 2,
            companies: 1,
            ..SimulationConfig::default()
        };
        let world = setup::build_world(&config);
        let snapshot = build_snapshot(&world);

        assert_eq!(snapshot.turn, 0);
        assert_eq!(snapshot.citizens.len(), 2);
        assert_eq!(snapshot.companies.len(), 1);
        assert_eq!(snapshot.summary.citizens.count, 2);
        assert_eq!(
            snapshot.summary.citizens.total_money,
            2.0 * params::INITIAL_CITIZEN_MONEY
        );
        assert!(snapshot.citizens.iter().all(|c| c.employer.is_none()));
    }

    #[test]
    fn test_write_snapshot_files() {
        let config = SimulationConfig::default();
        let world = setup::build_world(&config);
        let snapshot = build_snapshot(&world);

        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot_to_dir(&snapshot, dir.path()).unwrap();
        assert!(path.ends_with("snapshots/turn_000000.json"));

        write_current_state(&snapshot, dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("current_state.json")).unwrap();
        let parsed: EconomySnapshot = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
