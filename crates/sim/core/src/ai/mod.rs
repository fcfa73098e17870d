//! Behavior-tree AI for board actors.
//!
//! # Core Components
//!
//! - [`nodes`]: leaf actions bound to a single actor
//! - [`presets`]: ready-made trees assembled from those leaves

pub mod nodes;
pub mod presets;

pub use presets::seek_and_capture;
