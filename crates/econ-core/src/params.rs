//! Fixed economic parameters of the model.
//!
//! These are model constants, not tuning knobs: the configurable values
//! (population sizes, tax rate, hire probability, seed) live in
//! [`crate::config::SimulationConfig`].

/// Starting balance of a citizen.
pub const INITIAL_CITIZEN_MONEY: f64 = 1000.0;
/// Starting balance of a company.
pub const INITIAL_COMPANY_MONEY: f64 = 10_000.0;
/// Starting balance of a bank.
pub const INITIAL_BANK_MONEY: f64 = 100_000.0;
/// Starting balance of a government.
pub const INITIAL_GOVERNMENT_MONEY: f64 = 500_000.0;
/// Starting balance of a utility provider.
pub const INITIAL_UTILITY_MONEY: f64 = 20_000.0;

/// Units of inventory an employed citizen produces per turn.
pub const WORK_OUTPUT: f64 = 10.0;
/// Per-unit sale price of goods.
pub const UNIT_PRICE: f64 = 12.0;
/// Wage set when a citizen is hired.
pub const STARTING_WAGE: f64 = 50.0;

/// Company balance below which it requests a loan.
pub const LOW_FUNDS_THRESHOLD: f64 = 1000.0;
/// Principal of every requested loan.
pub const LOAN_AMOUNT: f64 = 5000.0;
/// Interest rate attached to every loan.
pub const LOAN_INTEREST_RATE: f64 = 0.05;

/// Profit tax runs every this many turns.
pub const PROFIT_TAX_INTERVAL: u64 = 10;
/// Added on top of the configured tax rate for the profit tax.
pub const PROFIT_TAX_SURCHARGE: f64 = 0.05;

/// Unemployed citizens receive this fraction of the average salary.
pub const BENEFIT_RATIO: f64 = 0.8;

/// Flat recurring utility fee for a citizen.
pub const CITIZEN_UTILITY_FEE: f64 = 20.0;
/// Flat recurring utility fee for a company.
pub const COMPANY_UTILITY_FEE: f64 = 100.0;
