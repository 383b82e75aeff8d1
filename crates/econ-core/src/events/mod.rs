//! Event Collection
//!
//! Economic events generated while the schedule runs, plus the JSONL
//! logger callers use to persist them.

pub mod logger;

pub use logger::EventLogger;

use bevy_ecs::prelude::*;
use econ_events::EconomyEvent;

/// Resource: events generated by the phases of recent turns, drained by
/// the engine's caller.
#[derive(Resource, Debug, Default)]
pub struct TurnEvents {
    events: Vec<EconomyEvent>,
}

impl TurnEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EconomyEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<EconomyEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EconomyEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
