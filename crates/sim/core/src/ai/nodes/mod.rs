//! Leaf nodes of the seek-and-capture tree.
//!
//! Every leaf is bound to one actor through its [`crate::ItemId`] and is
//! ticked against the whole [`crate::Board`]. If the actor has vanished from
//! the board, leaves fail (or, for pure bookkeeping leaves, succeed) without
//! touching anything.
//!
//! - `targeting`: picking and removing targets
//! - `movement`: planning legs, turning and walking

pub mod movement;
pub mod targeting;

pub use movement::{DecomposePath, MoveToPoint, PopPathLeg, TurnToHeading};
pub use targeting::{PickTarget, RemoveCapturedTarget};
