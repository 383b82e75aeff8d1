//! Snapshot Types
//!
//! Serialization structs describing the full economy at a point in time.
//!
//! Snapshots are owned copies of agent state: a consumer may hold them as
//! long as it likes without aliasing the engine's mutable collections.

use serde::{Deserialize, Serialize};

/// Count and aggregate money for one agent category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub count: usize,
    pub total_money: f64,
}

/// Per-turn aggregate history entry: one of these is appended to the
/// engine's history after every completed turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnTotals {
    pub turn: u64,
    pub citizens: CategorySummary,
    pub companies: CategorySummary,
    pub banks: CategorySummary,
    pub governments: CategorySummary,
    pub utility_providers: CategorySummary,
}

impl TurnTotals {
    /// Money held across every category; constant over a run when all
    /// transfers conserve.
    pub fn total_money(&self) -> f64 {
        self.citizens.total_money
            + self.companies.total_money
            + self.banks.total_money
            + self.governments.total_money
            + self.utility_providers.total_money
    }
}

/// Citizen detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenSnapshot {
    pub id: u32,
    pub money: f64,
    /// Employing company id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<u32>,
    pub salary: f64,
}

/// Company detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub id: u32,
    pub money: f64,
    pub employee_count: usize,
    pub inventory: f64,
    pub price: f64,
    /// Cumulative revenue since the last profit-tax reset.
    pub money_in: f64,
    /// Cumulative salary expense since the last profit-tax reset.
    pub money_out: f64,
}

/// One outstanding loan on a bank's books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSnapshot {
    pub borrower: u32,
    pub principal: f64,
    pub interest_rate: f64,
}

/// Bank detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSnapshot {
    pub id: u32,
    pub money: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loans: Vec<LoanSnapshot>,
}

/// Government detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentSnapshot {
    pub id: u32,
    pub money: f64,
}

/// Utility provider detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilitySnapshot {
    pub id: u32,
    pub money: f64,
}

/// Complete economy state after a turn (or at initialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySnapshot {
    pub turn: u64,
    pub summary: TurnTotals,
    pub citizens: Vec<CitizenSnapshot>,
    pub companies: Vec<CompanySnapshot>,
    pub banks: Vec<BankSnapshot>,
    pub governments: Vec<GovernmentSnapshot>,
    pub utility_providers: Vec<UtilitySnapshot>,
}

impl EconomySnapshot {
    /// Money held across every agent in the snapshot.
    pub fn total_money(&self) -> f64 {
        self.summary.total_money()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> EconomySnapshot {
        EconomySnapshot {
            turn: 1,
            summary: TurnTotals {
                turn: 1,
                citizens: CategorySummary {
                    count: 1,
                    total_money: 1038.0,
                },
                companies: CategorySummary {
                    count: 1,
                    total_money: 9962.0,
                },
                banks: CategorySummary::default(),
                governments: CategorySummary::default(),
                utility_providers: CategorySummary::default(),
            },
            citizens: vec![CitizenSnapshot {
                id: 0,
                money: 1038.0,
                employer: Some(0),
                salary: 50.0,
            }],
            companies: vec![CompanySnapshot {
                id: 0,
                money: 9962.0,
                employee_count: 1,
                inventory: 9.0,
                price: 12.0,
                money_in: 12.0,
                money_out: 50.0,
            }],
            banks: vec![],
            governments: vec![],
            utility_providers: vec![],
        }
    }

    #[test]
    fn test_total_money() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.total_money(), 11000.0);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let parsed: EconomySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_unemployed_citizen_omits_employer() {
        let citizen = CitizenSnapshot {
            id: 4,
            money: 1000.0,
            employer: None,
            salary: 0.0,
        };
        let json = serde_json::to_string(&citizen).unwrap();
        assert!(!json.contains("employer"));
    }
}
