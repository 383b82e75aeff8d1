//! Citizens
//!
//! Individual economic actors: earn a salary while employed, spend on
//! consumption.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use super::Account;
use crate::params;

/// Unique identifier for a citizen; also its index in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitizenId(pub u32);

/// A single citizen.
#[derive(Debug, Clone)]
pub struct Citizen {
    pub id: CitizenId,
    pub money: f64,
    /// Employing company, if any. Set and cleared only by the company
    /// registry's owner; at most one company ever holds this citizen.
    pub employer: Option<CompanyId>,
    /// Current salary; 0 while unemployed.
    pub salary: f64,
}

impl Citizen {
    pub fn new(id: CitizenId) -> Self {
        Self {
            id,
            money: params::INITIAL_CITIZEN_MONEY,
            employer: None,
            salary: 0.0,
        }
    }

    pub fn is_employed(&self) -> bool {
        self.employer.is_some()
    }

    /// Productivity contributed to the employer this turn. No side effects.
    pub fn work(&self) -> f64 {
        if self.is_employed() {
            params::WORK_OUTPUT
        } else {
            0.0
        }
    }

    /// Attempt to spend `price`; returns the amount actually spent.
    pub fn consume(&mut self, price: f64) -> f64 {
        if self.money >= price {
            self.money -= price;
            price
        } else {
            0.0
        }
    }
}

impl Account for Citizen {
    /// Fixed absolute small-balance exemption; deliberately not scaled to
    /// the tax rate.
    const TAX_EXEMPTION_FLOOR: f64 = 1.25;

    fn balance(&self) -> f64 {
        self.money
    }

    fn credit(&mut self, amount: f64) {
        self.money += amount;
    }

    fn debit(&mut self, amount: f64) {
        self.money -= amount;
    }
}

/// Resource: all citizens, in id order.
#[derive(Resource, Debug, Default)]
pub struct CitizenRegistry {
    citizens: Vec<Citizen>,
}

impl CitizenRegistry {
    /// Build a fresh population of `count` citizens with initial balances.
    pub fn with_population(count: u32) -> Self {
        Self {
            citizens: (0..count).map(|i| Citizen::new(CitizenId(i))).collect(),
        }
    }

    pub fn get(&self, id: CitizenId) -> Option<&Citizen> {
        self.citizens.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CitizenId) -> Option<&mut Citizen> {
        self.citizens.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Citizen> {
        self.citizens.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Citizen> {
        self.citizens.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.citizens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }

    pub fn total_money(&self) -> f64 {
        self.citizens.iter().map(|c| c.money).sum()
    }
}
