//! Simulation state module

mod state;


pub use state::*;
