//! Unemployment Benefits Phase
//!
//! The government pays each unemployed citizen 80% of the average salary
//! among the currently employed, as long as the treasury covers it. With
//! nobody employed the average is zero and nothing is paid.

use bevy_ecs::prelude::*;
use econ_events::{EconomyEvent, EventKind};

use crate::agents::{Account, CitizenRegistry, GovernmentRegistry};
use crate::events::TurnEvents;
use crate::params;
use crate::TurnClock;

pub fn unemployment_benefits(
    clock: Res<TurnClock>,
    mut governments: ResMut<GovernmentRegistry>,
    mut citizens: ResMut<CitizenRegistry>,
    mut events: ResMut<TurnEvents>,
) {
    let government = match governments.primary_mut() {
        Some(government) => government,
        None => return,
    };

    let mut employed = 0usize;
    let mut total_salary = 0.0;
    for citizen in citizens.iter().filter(|c| c.is_employed()) {
        employed += 1;
        total_salary += citizen.salary;
    }
    let average_salary = if employed > 0 {
        total_salary / employed as f64
    } else {
        0.0
    };

    let benefit = params::BENEFIT_RATIO * average_salary;
    if benefit <= 0.0 {
        return;
    }

    for citizen in citizens.iter_mut().filter(|c| !c.is_employed()) {
        if government.money >= benefit {
            government.money -= benefit;
            citizen.credit(benefit);
            events.push(EconomyEvent::new(
                clock.turn,
                EventKind::BenefitPaid {
                    government: government.id,
                    citizen: citizen.id.0,
                    amount: benefit,
                },
            ));
        }
    }
}
