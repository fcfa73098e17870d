//! Lightweight behavior tree library for frame-driven simulations.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! where every node is ticked at most once per simulation frame.
//!
//! - **Tri-state status**: nodes answer `Success`, `Running` or `Failure`
//! - **Stateful composites**: a [`Sequence`] remembers which child it is on
//!   between ticks, so a tree instance belongs to a single owner
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Running or Failure
//! - Composite nodes: [`Sequence`]
//! - Decorator nodes: [`UntilFail`], [`Once`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::Sequence;
pub use decorator::{Once, UntilFail};
pub use status::Status;
