//! Life Game Core - turn engine for a dice-driven life simulation
//!
//! Each turn a die advances the calendar by that many days, and one event
//! eligible at the resulting age may change the player's money, job, items
//! and companions. The session ends once the player reaches the maximum age.
//!
//! The engine itself ([`simulator::resolve_turn`]) is a pure function of the
//! current state, the die value and an event pick. [`simulator::LifeGame`]
//! layers randomness and roll gating on top, and [`simulator::RollDriver`]
//! adds the pre-roll pause used by interactive front ends. Python bindings
//! are available with the `python` feature.

pub mod config;
pub mod error;
pub mod event;
pub mod property;
pub mod simulator;

#[cfg(feature = "python")]
mod bindings;

pub use crate::config::{EventRecord, GameRules};
pub use crate::error::{LifeGameError, Result};
pub use crate::event::Catalog;
pub use crate::property::SimulationState;
pub use crate::simulator::{LifeGame, LogEntry, RollDriver, TurnEngine, TurnLog};
