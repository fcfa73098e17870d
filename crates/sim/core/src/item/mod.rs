//! Everything that can live on a [`crate::Board`].

mod actor;
mod target;
mod wanderer;

pub use actor::{Actor, Brain, Leg, Scratch};
pub use target::Target;
pub use wanderer::Wanderer;

pub(crate) use actor::tick as tick_actor;

use crate::geometry::Point;
use crate::render::ShapeKind;

/// A board item.
#[derive(Debug)]
pub enum Item {
    Actor(Actor),
    Target(Target),
    Wanderer(Wanderer),
}

impl Item {
    pub fn location(&self) -> Point {
        match self {
            Item::Actor(actor) => actor.location,
            Item::Target(target) => target.location(),
            Item::Wanderer(wanderer) => wanderer.location,
        }
    }

    /// Rotation used when drawing. Targets are never rotated.
    pub fn heading(&self) -> f64 {
        match self {
            Item::Actor(actor) => actor.heading,
            Item::Target(_) => 0.0,
            Item::Wanderer(wanderer) => wanderer.heading,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        match self {
            Item::Actor(_) => ShapeKind::Actor,
            Item::Target(_) => ShapeKind::Target,
            Item::Wanderer(_) => ShapeKind::Wanderer,
        }
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match self {
            Item::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_target(&self) -> Option<&Target> {
        match self {
            Item::Target(target) => Some(target),
            _ => None,
        }
    }
}

impl From<Actor> for Item {
    fn from(actor: Actor) -> Self {
        Item::Actor(actor)
    }
}

impl From<Target> for Item {
    fn from(target: Target) -> Self {
        Item::Target(target)
    }
}

impl From<Wanderer> for Item {
    fn from(wanderer: Wanderer) -> Self {
        Item::Wanderer(wanderer)
    }
}
