//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! [`Sequence`] is the only composite the simulation needs: it walks its
//! children one tick at a time and doubles as a loop body when wrapped in
//! [`crate::UntilFail`].

use crate::{Behavior, Status};

/// Executes child behaviors in order, one child per tick.
///
/// # Semantics
///
/// A `Sequence` keeps a cursor pointing at the child to tick next:
/// - An empty sequence returns `Success` immediately
/// - If the current child returns `Running`, the sequence returns `Running`
///   and stays on that child
/// - If a non-final child returns `Success`, the cursor advances and the
///   sequence returns `Running`; the next child runs on the following tick
/// - If the final child returns `Success`, the cursor rewinds to 0 and the
///   sequence returns `Success`, so the same instance can run again
/// - If a child returns `Failure`, the sequence returns `Failure` and is
///   spent: further ticks keep answering `Failure` without touching the
///   children until [`Behavior::reset`] is called
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: usize,
    failed: bool,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// An empty `children` list is allowed and trivially succeeds.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            children,
            cursor: 0,
            failed: false,
        }
    }

    /// Index of the child that will be ticked next.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once a child has failed and the sequence is spent.
    pub fn is_spent(&self) -> bool {
        self.failed
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.failed {
            return Status::Failure;
        }

        let Some(child) = self.children.get_mut(self.cursor) else {
            return Status::Success;
        };

        match child.tick(ctx) {
            Status::Running => Status::Running,
            Status::Failure => {
                self.failed = true;
                Status::Failure
            }
            Status::Success => {
                self.cursor += 1;
                if self.cursor < self.children.len() {
                    Status::Running
                } else {
                    self.cursor = 0;
                    Status::Success
                }
            }
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.failed = false;
        for child in &mut self.children {
            child.reset();
        }
    }
}
