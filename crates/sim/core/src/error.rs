//! Error infrastructure for sim-core.
//!
//! Expected outcomes (no targets left, path exhausted) are never errors; they
//! are `Status::Failure` results consumed by the behavior tree. [`SimError`]
//! is reserved for broken internal invariants, which abort the current tick.

use crate::board::ItemId;
use crate::geometry::Point;

/// Invariant violation detected while ticking the board.
#[derive(Clone, Debug, thiserror::Error)]
pub enum SimError {
    /// An actor tried to walk a leg while not facing a cardinal direction.
    #[error("actor {actor} at {location} cannot move along non-cardinal heading {heading:.4} rad")]
    NonCardinalHeading {
        actor: ItemId,
        location: Point,
        heading: f64,
    },

    /// A turn or move action ran before any leg was popped.
    #[error("actor {actor} has no active path leg")]
    MissingStep { actor: ItemId },
}

impl SimError {
    /// Returns the actor that triggered the error.
    pub fn actor(&self) -> ItemId {
        match self {
            Self::NonCardinalHeading { actor, .. } | Self::MissingStep { actor } => *actor,
        }
    }
}
