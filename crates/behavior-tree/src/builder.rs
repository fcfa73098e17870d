//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Behavior, Once, Sequence, UntilFail};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates an until-fail loop node.
///
/// Shorthand for `Box::new(UntilFail::new(child))`.
#[inline]
pub fn until_fail<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(UntilFail::new(child))
}

/// Creates a run-once latch node.
///
/// Shorthand for `Box::new(Once::new(child))`.
#[inline]
pub fn once<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Once::new(child))
}

/// Boxes a leaf node.
///
/// Shorthand for `Box::new(node) as Box<dyn Behavior<C>>`, which keeps
/// `vec![...]` literals of mixed leaf types readable.
#[inline]
pub fn leaf<C, B>(node: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(node)
}
