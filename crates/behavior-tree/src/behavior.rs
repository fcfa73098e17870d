//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read and mutate simulation state.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
///
/// Nodes take `&mut self` because composites keep a progress cursor between
/// ticks. A tree instance therefore belongs to exactly one owner; build a
/// fresh tree per entity instead of sharing one.
pub trait Behavior<C>: Send {
    /// Evaluate this behavior node against the given context for one tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   world state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior finished successfully
    /// - `Status::Running` if it needs to be ticked again
    /// - `Status::Failure` if the behavior failed
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Rewinds any progress the node keeps between ticks.
    ///
    /// Stateless leaves keep the default no-op.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
