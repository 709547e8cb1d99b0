//! Headless driver for the enemy AI runtime.
//!
//! Loads content, populates the level's rooms and runs turns without any
//! rendering or input. The binary in `main.rs` is a thin shell over
//! [`Simulation`].

pub mod config;
pub mod logging;
pub mod sim;

pub use config::SimConfig;
pub use sim::Simulation;
