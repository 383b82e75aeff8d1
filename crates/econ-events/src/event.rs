//! Event Types
//!
//! One record per economic interaction the engine performed during a turn.
//! Events are drained from the engine after each turn and appended to a
//! JSONL log by the caller.

use serde::{Deserialize, Serialize};

/// Reference to the paying side of a transfer that can originate from
/// either population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ActorRef {
    Citizen(u32),
    Company(u32),
}

/// What happened, with the parties and the amount that moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A company added an unemployed citizen to its payroll.
    Hired { company: u32, citizen: u32, wage: f64 },
    /// The bank issued a loan to a low-funds company.
    LoanIssued {
        bank: u32,
        company: u32,
        principal: f64,
        interest_rate: f64,
    },
    /// The bank lacked the funds to issue a requested loan.
    LoanRefused { bank: u32, company: u32, principal: f64 },
    /// A company paid one employee's salary.
    SalaryPaid { company: u32, citizen: u32, amount: f64 },
    /// A citizen bought one unit of goods from a company.
    GoodsSold { company: u32, citizen: u32, amount: f64 },
    /// The bank collected interest on one outstanding loan.
    InterestCollected { bank: u32, company: u32, amount: f64 },
    /// The government taxed an actor's balance.
    BalanceTaxed {
        government: u32,
        payer: ActorRef,
        amount: f64,
    },
    /// The government taxed a company's accumulated profit.
    ProfitTaxed {
        government: u32,
        company: u32,
        amount: f64,
    },
    /// The government paid an unemployment benefit.
    BenefitPaid {
        government: u32,
        citizen: u32,
        amount: f64,
    },
    /// The utility provider charged a recurring fee.
    UtilityCharged {
        provider: u32,
        payer: ActorRef,
        amount: f64,
    },
}

impl EventKind {
    /// Stable label matching the serialized `type` tag; used for
    /// aggregation in run statistics.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Hired { .. } => "hired",
            EventKind::LoanIssued { .. } => "loan_issued",
            EventKind::LoanRefused { .. } => "loan_refused",
            EventKind::SalaryPaid { .. } => "salary_paid",
            EventKind::GoodsSold { .. } => "goods_sold",
            EventKind::InterestCollected { .. } => "interest_collected",
            EventKind::BalanceTaxed { .. } => "balance_taxed",
            EventKind::ProfitTaxed { .. } => "profit_taxed",
            EventKind::BenefitPaid { .. } => "benefit_paid",
            EventKind::UtilityCharged { .. } => "utility_charged",
        }
    }
}

/// A single logged economic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyEvent {
    /// Turn during which the event occurred (pre-increment counter).
    pub turn: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl EconomyEvent {
    pub fn new(turn: u64, kind: EventKind) -> Self {
        Self { turn, kind }
    }
}
