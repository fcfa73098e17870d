//! Runtime driver for the seek-and-capture simulation.
//!
//! This crate wraps a [`sim_core::Board`] in a [`Simulation`] that populates
//! it, paces it with a [`Clock`] and forwards each frame to a renderer.
//!
//! Modules are organized by responsibility:
//! - [`config`] holds population and pacing settings
//! - [`clock`] provides wall-clock and manual frame sources
//! - [`simulation`] hosts the tick-then-draw loop
pub mod clock;
pub mod config;
pub mod error;
pub mod simulation;

pub use clock::{Clock, IntervalClock, ManualClock};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use simulation::{RunSummary, Simulation, StepReport};
