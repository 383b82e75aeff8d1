//! Utility Providers
//!
//! Charge flat recurring fees; the engine's billing phase passes the
//! citizen and company rates.

use bevy_ecs::prelude::*;

use super::Account;
use crate::params;

/// A single utility provider.
#[derive(Debug, Clone)]
pub struct UtilityProvider {
    pub id: u32,
    pub money: f64,
}

impl UtilityProvider {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            money: params::INITIAL_UTILITY_MONEY,
        }
    }

    /// Charge a fee if the actor can afford it; otherwise no-op. Returns
    /// whether the charge went through.
    pub fn charge<A: Account>(&mut self, actor: &mut A, amount: f64) -> bool {
        if actor.balance() >= amount {
            actor.debit(amount);
            self.money += amount;
            true
        } else {
            false
        }
    }
}

/// Resource: all utility providers; the first bills the population.
#[derive(Resource, Debug, Default)]
pub struct UtilityRegistry {
    providers: Vec<UtilityProvider>,
}

impl UtilityRegistry {
    pub fn with_population(count: u32) -> Self {
        Self {
            providers: (0..count).map(UtilityProvider::new).collect(),
        }
    }

    pub fn primary(&self) -> Option<&UtilityProvider> {
        self.providers.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut UtilityProvider> {
        self.providers.first_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UtilityProvider> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn total_money(&self) -> f64 {
        self.providers.iter().map(|p| p.money).sum()
    }
}
