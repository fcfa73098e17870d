//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`UntilFail`], which turns a child into a loop whose
//! exit condition is the child's failure, and [`Once`], which runs a child to
//! its first terminal status and then keeps reporting it.

use crate::{Behavior, Status};

/// Re-runs its child every tick until the child fails.
///
/// # Semantics
///
/// - If the child returns `Success` or `Running`, returns `Running`
/// - If the child returns `Failure`, returns **`Success`** and resets the
///   child so the loop can be entered again
///
/// `UntilFail` never returns `Failure` itself. It is typically wrapped around
/// a [`crate::Sequence`] whose first child fails when there is no more work
/// (e.g., an empty queue), turning that failure into the loop's normal exit.
pub struct UntilFail<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> UntilFail<C> {
    /// Creates a new loop around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for UntilFail<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Failure => {
                self.child.reset();
                Status::Success
            }
            Status::Success | Status::Running => Status::Running,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Runs its child to completion exactly once.
///
/// # Semantics
///
/// - While the child returns `Running`, returns `Running`
/// - The first `Success` or `Failure` is latched: later ticks return it
///   without ticking the child again
/// - `reset()` clears the latch and resets the child
///
/// Used as the root of trees whose composites rewind after success, so a
/// finished tree that is ticked again stays finished.
pub struct Once<C> {
    child: Box<dyn Behavior<C>>,
    outcome: Option<Status>,
}

impl<C> Once<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            outcome: None,
        }
    }

    /// The latched terminal status, if the child has finished.
    pub fn outcome(&self) -> Option<Status> {
        self.outcome
    }
}

impl<C> Behavior<C> for Once<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let status = self.child.tick(ctx);
        if status.is_terminal() {
            self.outcome = Some(status);
        }
        status
    }

    fn reset(&mut self) {
        self.outcome = None;
        self.child.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;

    struct TestContext {
        queue: Vec<i32>,
        popped: Vec<i32>,
    }

    struct Pop;
    impl Behavior<TestContext> for Pop {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            match ctx.queue.pop() {
                Some(value) => {
                    ctx.popped.push(value);
                    Status::Success
                }
                None => Status::Failure,
            }
        }
    }

    struct Succeed;
    impl Behavior<TestContext> for Succeed {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Success
        }
    }

    fn context(queue: Vec<i32>) -> TestContext {
        TestContext {
            queue,
            popped: Vec::new(),
        }
    }

    #[test]
    fn child_success_keeps_the_loop_running() {
        let mut until = UntilFail::new(Box::new(Succeed));
        let mut ctx = context(Vec::new());

        for _ in 0..5 {
            assert_eq!(until.tick(&mut ctx), Status::Running);
        }
    }

    #[test]
    fn child_failure_ends_the_loop_successfully() {
        let mut until = UntilFail::new(Box::new(Pop));
        let mut ctx = context(vec![1, 2]);

        assert_eq!(until.tick(&mut ctx), Status::Running);
        assert_eq!(until.tick(&mut ctx), Status::Running);
        assert_eq!(until.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.popped, vec![2, 1]);
    }

    #[test]
    fn looping_sequence_is_rewound_after_exit() {
        let body = Sequence::new(vec![Box::new(Pop), Box::new(Succeed)]);
        let mut until = UntilFail::new(Box::new(body));
        let mut ctx = context(vec![7]);

        // Pop succeeds, Succeed finishes the body, then Pop fails.
        assert_eq!(until.tick(&mut ctx), Status::Running);
        assert_eq!(until.tick(&mut ctx), Status::Running);
        assert_eq!(until.tick(&mut ctx), Status::Success);

        // The body was reset, so new work is picked up on re-entry.
        ctx.queue.push(8);
        assert_eq!(until.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.popped, vec![7, 8]);
    }

    #[test]
    fn once_latches_success_without_reticking() {
        let body = Sequence::new(vec![Box::new(Pop), Box::new(Succeed)]);
        let mut once = Once::new(Box::new(body));
        let mut ctx = context(vec![1, 2, 3]);

        assert_eq!(once.tick(&mut ctx), Status::Running);
        assert_eq!(once.tick(&mut ctx), Status::Success);

        // The inner sequence rewound, but work is still queued: the latch
        // must keep it from being picked up.
        for _ in 0..4 {
            assert_eq!(once.tick(&mut ctx), Status::Success);
        }
        assert_eq!(ctx.popped, vec![3]);
        assert_eq!(once.outcome(), Some(Status::Success));
    }

    #[test]
    fn once_latches_failure_and_reset_rearms() {
        let mut once = Once::new(Box::new(Pop));
        let mut ctx = context(Vec::new());

        assert_eq!(once.tick(&mut ctx), Status::Failure);
        ctx.queue.push(5);
        assert_eq!(once.tick(&mut ctx), Status::Failure);
        assert!(ctx.popped.is_empty());

        once.reset();
        assert_eq!(once.outcome(), None);
        assert_eq!(once.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.popped, vec![5]);
    }
}
