//! Governments
//!
//! Collect balance and profit taxes. Benefit distribution is orchestrated
//! by the engine's benefits phase, not a method here, because it needs the
//! whole citizen population to compute the average salary.

use bevy_ecs::prelude::*;

use super::company::Company;
use super::Account;
use crate::params;

/// A single government.
#[derive(Debug, Clone)]
pub struct Government {
    pub id: u32,
    pub money: f64,
}

impl Government {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            money: params::INITIAL_GOVERNMENT_MONEY,
        }
    }

    /// Tax an actor's balance at `rate`. Actors below their exemption
    /// floor are skipped entirely; the solvency guard protects against
    /// rates above 1. Returns the amount collected, if any.
    pub fn tax<A: Account>(&mut self, actor: &mut A, rate: f64) -> Option<f64> {
        if actor.balance() < A::TAX_EXEMPTION_FLOOR {
            return None;
        }
        let amount = actor.balance() * rate;
        if actor.balance() >= amount {
            actor.debit(amount);
            self.money += amount;
            Some(amount)
        } else {
            None
        }
    }

    /// Tax a company's accumulated profit at `rate`. The levy comes out of
    /// the company's balance (not the profit counters); non-positive
    /// profit collects nothing. The caller resets the profit window
    /// afterwards.
    pub fn tax_company(&mut self, company: &mut Company, rate: f64) -> Option<f64> {
        let profit = company.profit();
        if profit <= 0.0 {
            return None;
        }
        let amount = profit * rate;
        if company.money >= amount {
            company.money -= amount;
            self.money += amount;
            Some(amount)
        } else {
            None
        }
    }
}

/// Resource: all governments; the first collects taxes and pays benefits.
#[derive(Resource, Debug, Default)]
pub struct GovernmentRegistry {
    governments: Vec<Government>,
}

impl GovernmentRegistry {
    pub fn with_population(count: u32) -> Self {
        Self {
            governments: (0..count).map(Government::new).collect(),
        }
    }

    pub fn primary(&self) -> Option<&Government> {
        self.governments.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut Government> {
        self.governments.first_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Government> {
        self.governments.iter()
    }

    pub fn len(&self) -> usize {
        self.governments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.governments.is_empty()
    }

    pub fn total_money(&self) -> f64 {
        self.governments.iter().map(|g| g.money).sum()
    }
}
