//! HTTP Gateway
//!
//! Thin JSON facade over a single economy engine: fetch the current
//! snapshot, advance one turn, reset. Pass-through only; all semantics
//! live in econ-core.

use std::sync::Mutex;

use rocket::serde::json::Json;
use rocket::{get, post, routes, Build, Rocket, State};

use econ_core::EconomyEngine;
use econ_events::EconomySnapshot;

/// The engine behind a mutex: turns are atomic units of work, so requests
/// serialize on it.
pub struct SharedEngine(Mutex<EconomyEngine>);

#[get("/state")]
fn state(engine: &State<SharedEngine>) -> Json<EconomySnapshot> {
    let engine = engine.0.lock().expect("engine mutex poisoned");
    Json(engine.snapshot())
}

#[post("/advance-turn")]
fn advance_turn(engine: &State<SharedEngine>) -> Json<EconomySnapshot> {
    let mut engine = engine.0.lock().expect("engine mutex poisoned");
    Json(engine.advance_turn())
}

#[post("/reset")]
fn reset(engine: &State<SharedEngine>) -> Json<EconomySnapshot> {
    let mut engine = engine.0.lock().expect("engine mutex poisoned");
    engine.reset();
    Json(engine.snapshot())
}

/// Build the rocket with all routes mounted under `/api`.
pub fn build_rocket(engine: EconomyEngine) -> Rocket<Build> {
    rocket::build()
        .manage(SharedEngine(Mutex::new(engine)))
        .mount("/api", routes![state, advance_turn, reset])
}
