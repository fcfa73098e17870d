//! Behavior-tree driven hunter.
//!
//! An [`Actor`] carries its own movement state plus a [`Scratch`] blackboard
//! that the seek-and-capture leaves read and write across ticks. The tree
//! itself is created lazily and dropped as soon as it finishes, so every
//! completion (capture or "nothing left") leads to a fresh target search on
//! the next tick.

use std::collections::VecDeque;
use std::fmt;

use behavior_tree::{Behavior, Status};

use crate::ai::presets;
use crate::board::{Board, ItemId};
use crate::geometry::{Cardinal, Point, normalize_angle};

/// A behavior tree evaluated against the whole board.
pub type Brain = Box<dyn Behavior<Board>>;

/// One axis-aligned segment of a path.
#[derive(Clone, Copy, Debug)]
pub struct Leg {
    /// Where the leg ends.
    pub target: Point,
    /// Direction of travel along the leg.
    pub heading: Cardinal,
}

impl Leg {
    pub fn new(target: Point, heading: Cardinal) -> Self {
        Self { target, heading }
    }
}

/// Working memory of the seek-and-capture tree.
#[derive(Clone, Debug, Default)]
pub struct Scratch {
    /// Chosen target. A handle only: the target may vanish at any time.
    pub target: Option<ItemId>,
    /// Legs still to walk, front first.
    pub path: VecDeque<Leg>,
    /// Leg currently being walked.
    pub step: Option<Leg>,
}

impl Scratch {
    pub fn clear(&mut self) {
        self.target = None;
        self.path.clear();
        self.step = None;
    }
}

pub struct Actor {
    pub location: Point,
    /// Radians in `[0, 2π)`.
    pub heading: f64,
    /// Distance covered per tick while walking a leg.
    pub speed: f64,
    pub scratch: Scratch,
    brain: Option<Brain>,
}

impl Actor {
    pub fn new(location: Point, heading: f64, speed: f64) -> Self {
        Self {
            location,
            heading: normalize_angle(heading),
            speed,
            scratch: Scratch::default(),
            brain: None,
        }
    }

    /// Returns true while a behavior tree instance is alive.
    pub fn has_brain(&self) -> bool {
        self.brain.is_some()
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("location", &self.location)
            .field("heading", &self.heading)
            .field("speed", &self.speed)
            .field("scratch", &self.scratch)
            .field("has_brain", &self.brain.is_some())
            .finish()
    }
}

/// Runs one tick of the actor's behavior tree.
///
/// The tree is taken out of the actor for the duration of the tick so it can
/// borrow the whole board, and is only put back while it is still running.
/// A tree whose tick raised a fault for this actor is dropped together with
/// the actor's scratch, whatever status it reported.
pub(crate) fn tick(board: &mut Board, id: ItemId) {
    let Some(actor) = board.actor_mut(id) else {
        return;
    };

    let mut brain = match actor.brain.take() {
        Some(brain) => brain,
        None => {
            tracing::debug!(actor = %id, "building seek-and-capture tree");
            presets::seek_and_capture(id)
        }
    };

    let status = brain.tick(board);

    let faulted = board
        .pending_fault()
        .is_some_and(|error| error.actor() == id);
    if faulted {
        // Faulted trees never resume.
        if let Some(actor) = board.actor_mut(id) {
            actor.scratch.clear();
        }
        tracing::warn!(actor = %id, "behavior tree aborted by fault, discarding");
        return;
    }

    match status {
        Status::Running => {
            if let Some(actor) = board.actor_mut(id) {
                actor.brain = Some(brain);
            }
        }
        Status::Success | Status::Failure => {
            tracing::debug!(actor = %id, ?status, "behavior tree finished, discarding");
        }
    }
}
