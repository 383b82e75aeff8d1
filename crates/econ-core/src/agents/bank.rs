//! Banks
//!
//! Lend to companies at a fixed rate and service interest each turn.
//! Principal is never repaid in this model: loan records stay on the books
//! forever and only the interest is collected.

use bevy_ecs::prelude::*;

use super::company::{Company, CompanyId, CompanyRegistry};
use crate::params;

/// One outstanding loan.
#[derive(Debug, Clone)]
pub struct Loan {
    pub borrower: CompanyId,
    pub principal: f64,
    pub interest_rate: f64,
}

/// A single bank.
#[derive(Debug, Clone)]
pub struct Bank {
    pub id: u32,
    pub money: f64,
    /// Append-only; never settled or removed.
    pub loans: Vec<Loan>,
}

impl Bank {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            money: params::INITIAL_BANK_MONEY,
            loans: Vec::new(),
        }
    }

    /// Issue a loan if the bank can cover it. Returns whether the loan was
    /// made; on refusal nothing changes.
    pub fn lend(&mut self, borrower: &mut Company, principal: f64) -> bool {
        if self.money >= principal {
            self.money -= principal;
            borrower.money += principal;
            self.loans.push(Loan {
                borrower: borrower.id,
                principal,
                interest_rate: params::LOAN_INTEREST_RATE,
            });
            true
        } else {
            false
        }
    }

    /// Collect `principal * rate` on every loan whose borrower can afford
    /// it this turn; unaffordable loans are skipped without penalty.
    /// Returns the collections made.
    pub fn collect_interest(&mut self, companies: &mut CompanyRegistry) -> Vec<(CompanyId, f64)> {
        let mut collected = Vec::new();
        for loan in &self.loans {
            let interest = loan.principal * loan.interest_rate;
            if let Some(borrower) = companies.get_mut(loan.borrower) {
                if borrower.money >= interest {
                    borrower.money -= interest;
                    self.money += interest;
                    collected.push((loan.borrower, interest));
                }
            }
        }
        collected
    }
}

/// Resource: all banks; the first is the primary lender.
#[derive(Resource, Debug, Default)]
pub struct BankRegistry {
    banks: Vec<Bank>,
}

impl BankRegistry {
    pub fn with_population(count: u32) -> Self {
        Self {
            banks: (0..count).map(Bank::new).collect(),
        }
    }

    pub fn primary(&self) -> Option<&Bank> {
        self.banks.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut Bank> {
        self.banks.first_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bank> {
        self.banks.iter()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    pub fn total_money(&self) -> f64 {
        self.banks.iter().map(|b| b.money).sum()
    }
}
