//! Utility Billing Phase
//!
//! The primary utility provider charges its flat recurring fees: one rate
//! for citizens, a higher one for companies. Actors that cannot pay are
//! skipped.

use bevy_ecs::prelude::*;
use econ_events::{ActorRef, EconomyEvent, EventKind};

use crate::agents::{CitizenRegistry, CompanyRegistry, UtilityRegistry};
use crate::events::TurnEvents;
use crate::params;
use crate::TurnClock;

pub fn utility_billing(
    clock: Res<TurnClock>,
    mut utilities: ResMut<UtilityRegistry>,
    mut citizens: ResMut<CitizenRegistry>,
    mut companies: ResMut<CompanyRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    let provider = match utilities.primary_mut() {
        Some(provider) => provider,
        None => return,
    };

    for citizen in citizens.iter_mut() {
        if provider.charge(citizen, params::CITIZEN_UTILITY_FEE) {
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::UtilityCharged {
                    provider: provider.id,
                    payer: ActorRef::Citizen(citizen.id.0),
                    amount: params::CITIZEN_UTILITY_FEE,
                },
            ));
        }
    }

    for company in companies.iter_mut() {
        if provider.charge(company, params::COMPANY_UTILITY_FEE) {
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::UtilityCharged {
                    provider: provider.id,
                    payer: ActorRef::Company(company.id.0),
                    amount: params::COMPANY_UTILITY_FEE,
                },
            ));
        }
    }
}
