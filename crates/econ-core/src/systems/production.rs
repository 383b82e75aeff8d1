//! Production Phase
//!
//! Every company aggregates its employees' output into inventory. Pure
//! aggregation; no money moves.

use bevy_ecs::prelude::*;

use crate::agents::{CitizenRegistry, CompanyRegistry};

pub fn production(citizens: Res<CitizenRegistry>, mut companies: ResMut<CompanyRegistry>) {
    for company in companies.iter_mut() {
        company.produce(&citizens);
    }
}
