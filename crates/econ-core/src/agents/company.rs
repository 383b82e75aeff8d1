//! Companies
//!
//! Employers and producers: hire citizens, pay salaries, turn employee
//! output into inventory, sell goods one unit at a time.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use super::citizen::{Citizen, CitizenId, CitizenRegistry};
use super::Account;
use crate::params;

/// Unique identifier for a company; also its index in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub u32);

/// A single company.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub money: f64,
    /// Citizens on the payroll; each has `employer == Some(self.id)`.
    pub employees: Vec<CitizenId>,
    /// Units produced but unsold.
    pub inventory: f64,
    /// Per-unit sale price.
    pub price: f64,
    /// Cumulative revenue since the last profit-tax reset.
    pub money_in: f64,
    /// Cumulative salary expense since the last profit-tax reset.
    pub money_out: f64,
}

impl Company {
    pub fn new(id: CompanyId) -> Self {
        Self {
            id,
            money: params::INITIAL_COMPANY_MONEY,
            employees: Vec::new(),
            inventory: 0.0,
            price: params::UNIT_PRICE,
            money_in: 0.0,
            money_out: 0.0,
        }
    }

    /// Add a citizen to the payroll at the starting wage. Idempotent: a
    /// citizen already employed here is left untouched. Solvency is not
    /// checked.
    pub fn hire(&mut self, citizen: &mut Citizen) {
        if self.employees.contains(&citizen.id) {
            return;
        }
        self.employees.push(citizen.id);
        citizen.employer = Some(self.id);
        citizen.salary = params::STARTING_WAGE;
    }

    /// Aggregate employee output into inventory. No monetary effect.
    pub fn produce(&mut self, citizens: &CitizenRegistry) {
        let mut total = 0.0;
        for id in &self.employees {
            if let Some(employee) = citizens.get(*id) {
                total += employee.work();
            }
        }
        self.inventory += total;
    }

    /// Pay every employee the company can afford; the rest are skipped
    /// silently (no partial payment, no debt). Returns the payments made.
    pub fn pay_salaries(&mut self, citizens: &mut CitizenRegistry) -> Vec<(CitizenId, f64)> {
        let mut paid = Vec::new();
        for id in &self.employees {
            if let Some(employee) = citizens.get_mut(*id) {
                if self.money >= employee.salary {
                    self.money -= employee.salary;
                    employee.money += employee.salary;
                    self.money_out += employee.salary;
                    paid.push((*id, employee.salary));
                }
            }
        }
        paid
    }

    /// Record a sale: one unit leaves inventory, `amount` is credited to
    /// balance and revenue. Returns the amount taken, 0 if the shelf is
    /// empty.
    pub fn sell(&mut self, amount: f64) -> f64 {
        if self.inventory > 0.0 {
            self.inventory -= 1.0;
            self.money += amount;
            self.money_in += amount;
            amount
        } else {
            0.0
        }
    }

    /// Revenue minus expense since the last reset.
    pub fn profit(&self) -> f64 {
        self.money_in - self.money_out
    }

    /// Zero the revenue/expense counters after a profit tax.
    pub fn reset_profit_window(&mut self) {
        self.money_in = 0.0;
        self.money_out = 0.0;
    }
}

impl Account for Company {
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

/// Resource: all companies, in id order.
#[derive(Resource, Debug, Default)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    /// Build `count` fresh companies with initial balances.
    pub fn with_population(count: u32) -> Self {
        Self {
            companies: (0..count).map(|i| Company::new(CompanyId(i))).collect(),
        }
    }

    pub fn get(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CompanyId) -> Option<&mut Company> {
        self.companies.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Company> {
        self.companies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn total_money(&self) -> f64 {
        self.companies.iter().map(|c| c.money).sum()
    }
}
