//! Target selection and capture nodes.

use behavior_tree::{Behavior, Status};

use crate::board::{Board, ItemId};

/// Chooses the nearest target on the board.
///
/// Distance is Euclidean from the actor's current location. When several
/// targets are equally near, the first one in board order wins. Fails when
/// the board holds no targets, which ends the owning tree.
pub struct PickTarget {
    actor: ItemId,
}

impl PickTarget {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for PickTarget {
    fn tick(&mut self, board: &mut Board) -> Status {
        let Some(origin) = board.actor(self.actor).map(|actor| actor.location) else {
            return Status::Failure;
        };

        let nearest = board
            .targets()
            .map(|(id, target)| (id, origin.distance(target.location())))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(id, _)| id);

        let Some(target) = nearest else {
            tracing::trace!(actor = %self.actor, "no targets left");
            return Status::Failure;
        };

        match board.actor_mut(self.actor) {
            Some(actor) => {
                actor.scratch.target = Some(target);
                tracing::debug!(actor = %self.actor, %target, "picked target");
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Removes the captured target from the board and forgets it.
///
/// Always succeeds: when another actor got there first the removal is a
/// no-op.
pub struct RemoveCapturedTarget {
    actor: ItemId,
}

impl RemoveCapturedTarget {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for RemoveCapturedTarget {
    fn tick(&mut self, board: &mut Board) -> Status {
        let Some(target) = board
            .actor_mut(self.actor)
            .and_then(|actor| actor.scratch.target.take())
        else {
            return Status::Success;
        };

        match board.remove_target(target) {
            Some(captured) => tracing::info!(
                actor = %self.actor,
                %target,
                location = %captured.location(),
                "target captured"
            ),
            None => tracing::debug!(actor = %self.actor, %target, "target already gone"),
        }

        Status::Success
    }
}
