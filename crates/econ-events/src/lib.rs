//! Shared data types for the closed-economy simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod snapshot;

// Re-export event types
pub use event::{ActorRef, EconomyEvent, EventKind};

// Re-export snapshot types
pub use snapshot::{
    BankSnapshot, CategorySummary, CitizenSnapshot, CompanySnapshot, EconomySnapshot,
    GovernmentSnapshot, LoanSnapshot, TurnTotals, UtilitySnapshot,
};
