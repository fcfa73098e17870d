//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Frame-based Semantics
///
/// A simulation frame ticks each tree exactly once, so long-running work
/// (turning, walking) spans many ticks:
/// - `Running` asks the caller to tick the same node again next frame
/// - `Success` and `Failure` both mean the node has finished; only
///   composites care which one it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior needs more ticks to finish.
    Running,

    /// The behavior could not complete (e.g., nothing left to pick).
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if the node finished, successfully or not.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
