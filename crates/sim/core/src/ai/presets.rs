//! Complete behavior trees for board actors.
//!
//! ```text
//! seek_and_capture(actor)
//!   └─ Once
//!       └─ Sequence
//!           ├─ PickTarget
//!           ├─ DecomposePath
//!           ├─ UntilFail
//!           │   └─ Sequence
//!           │       ├─ PopPathLeg      ← fails when the path is exhausted
//!           │       ├─ TurnToHeading
//!           │       └─ MoveToPoint
//!           └─ RemoveCapturedTarget
//! ```
//!
//! The whole tree returns `Failure` when no target is left, `Success` once a
//! target has been captured and `Running` in between. The terminal status is
//! latched by the root, so ticking a finished instance again neither picks a
//! new target nor moves the actor.

use behavior_tree::builder::{leaf, once, sequence, until_fail};

use super::nodes::{
    DecomposePath, MoveToPoint, PickTarget, PopPathLeg, RemoveCapturedTarget, TurnToHeading,
};
use crate::board::ItemId;
use crate::item::Brain;

/// Hunts the nearest target, walks to it along an L-shaped path and removes it.
///
/// Builds a fresh instance every call; trees are never shared between actors.
pub fn seek_and_capture(actor: ItemId) -> Brain {
    once(sequence(vec![
        leaf(PickTarget::new(actor)),
        leaf(DecomposePath::new(actor)),
        until_fail(sequence(vec![
            leaf(PopPathLeg::new(actor)),
            leaf(TurnToHeading::new(actor)),
            leaf(MoveToPoint::new(actor)),
        ])),
        leaf(RemoveCapturedTarget::new(actor)),
    ]))
}
