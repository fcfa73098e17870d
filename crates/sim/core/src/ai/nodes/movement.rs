//! Path planning and locomotion nodes.
//!
//! Paths are L-shaped: one horizontal leg, then one vertical leg. Each leg is
//! walked by turning onto its cardinal heading and then stepping `speed`
//! units per tick until the leg's end point is reached.

use behavior_tree::{Behavior, Status};

use crate::board::{Board, ItemId};
use crate::error::SimError;
use crate::geometry::{Cardinal, Point, heading_eq, normalize_angle, shortest_arc};
use crate::item::Leg;

/// Builds the two-leg path from the actor to its chosen target.
///
/// The first leg runs along x to `(target.x, actor.y)`, the second along y
/// to the target itself. An axis that is already aligned within tolerance
/// gets no leg. A target that has meanwhile disappeared yields an empty
/// path, so the walk loop exits at once.
pub struct DecomposePath {
    actor: ItemId,
}

impl DecomposePath {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for DecomposePath {
    fn tick(&mut self, board: &mut Board) -> Status {
        let tolerance = board.config().tolerance;
        let destination = board
            .actor(self.actor)
            .and_then(|actor| actor.scratch.target)
            .and_then(|target| board.target(target))
            .map(|target| target.location());

        let Some(actor) = board.actor_mut(self.actor) else {
            return Status::Success;
        };

        actor.scratch.path.clear();
        let Some(destination) = destination else {
            return Status::Success;
        };

        let start = actor.location;
        let dx = destination.x - start.x;
        if dx.abs() > tolerance.location {
            actor.scratch.path.push_back(Leg::new(
                Point::new(destination.x, start.y),
                Cardinal::horizontal(dx),
            ));
        }

        let dy = destination.y - start.y;
        if dy.abs() > tolerance.location {
            actor
                .scratch
                .path
                .push_back(Leg::new(destination, Cardinal::vertical(dy)));
        }

        tracing::trace!(
            actor = %self.actor,
            legs = actor.scratch.path.len(),
            "path decomposed"
        );
        Status::Success
    }
}

/// Makes the next leg current. Fails when the path is exhausted.
pub struct PopPathLeg {
    actor: ItemId,
}

impl PopPathLeg {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for PopPathLeg {
    fn tick(&mut self, board: &mut Board) -> Status {
        let Some(actor) = board.actor_mut(self.actor) else {
            return Status::Failure;
        };

        actor.scratch.step = actor.scratch.path.pop_front();
        if actor.scratch.step.is_some() {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Rotates the actor towards the current leg's heading.
///
/// Each tick turns by at most the configured turn step along the shortest
/// arc. On reaching the heading (within tolerance) the heading is snapped
/// to the exact cardinal value and the node succeeds.
pub struct TurnToHeading {
    actor: ItemId,
}

impl TurnToHeading {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for TurnToHeading {
    fn tick(&mut self, board: &mut Board) -> Status {
        let config = *board.config();
        let Some(actor) = board.actor_mut(self.actor) else {
            return Status::Failure;
        };

        let Some(step) = actor.scratch.step else {
            board.raise(SimError::MissingStep { actor: self.actor });
            return Status::Failure;
        };

        let target = step.heading.heading();
        let turn = shortest_arc(actor.heading, target).clamp(-config.turn_step, config.turn_step);
        actor.heading = normalize_angle(actor.heading + turn);

        if heading_eq(actor.heading, target, config.tolerance) {
            actor.heading = target;
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Walks the actor along the current leg.
///
/// Succeeds once the actor's location tolerance-equals the leg's end point.
/// Otherwise it advances along the cardinal direction the actor is facing,
/// never past the end point. Facing anything other than a cardinal
/// direction is an invariant violation and raises
/// [`SimError::NonCardinalHeading`].
pub struct MoveToPoint {
    actor: ItemId,
}

impl MoveToPoint {
    pub fn new(actor: ItemId) -> Self {
        Self { actor }
    }
}

impl Behavior<Board> for MoveToPoint {
    fn tick(&mut self, board: &mut Board) -> Status {
        let tolerance = board.config().tolerance;
        let Some(actor) = board.actor_mut(self.actor) else {
            return Status::Failure;
        };

        let Some(step) = actor.scratch.step else {
            board.raise(SimError::MissingStep { actor: self.actor });
            return Status::Failure;
        };

        if actor.location.approx_eq(step.target, tolerance) {
            return Status::Success;
        }

        let Some(direction) = Cardinal::from_heading(actor.heading, tolerance) else {
            let error = SimError::NonCardinalHeading {
                actor: self.actor,
                location: actor.location,
                heading: actor.heading,
            };
            board.raise(error);
            return Status::Failure;
        };

        let (ux, uy) = direction.unit();
        let remaining =
            (step.target.x - actor.location.x) * ux + (step.target.y - actor.location.y) * uy;
        let distance = actor.speed.min(remaining.max(0.0));

        actor.location.x += ux * distance;
        actor.location.y += uy * distance;
        Status::Running
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::config::SimConfig;
    use crate::geometry::Tolerance;
    use crate::item::{Actor, Target};

    fn board() -> Board {
        let config = SimConfig::default().with_tolerance(Tolerance::new(1.0, 0.01));
        Board::new(500.0, 500.0, config)
    }

    fn aimed_actor(board: &mut Board, from: Point, to: Point) -> ItemId {
        let actor = board.add(Actor::new(from, 0.0, 2.0));
        let target = board.add(Target::new(to));
        board.actor_mut(actor).unwrap().scratch.target = Some(target);
        actor
    }

    fn legs(board: &Board, actor: ItemId) -> Vec<(f64, f64, Cardinal)> {
        board
            .actor(actor)
            .unwrap()
            .scratch
            .path
            .iter()
            .map(|leg| (leg.target.x, leg.target.y, leg.heading))
            .collect()
    }

    #[test]
    fn diagonal_target_gives_horizontal_then_vertical_leg() {
        let mut board = board();
        let actor = aimed_actor(&mut board, Point::ORIGIN, Point::new(10.0, 10.0));

        assert_eq!(DecomposePath::new(actor).tick(&mut board), Status::Success);
        assert_eq!(
            legs(&board, actor),
            vec![(10.0, 0.0, Cardinal::Right), (10.0, 10.0, Cardinal::Down)]
        );
    }

    #[test]
    fn negative_deltas_point_left_and_up() {
        let mut board = board();
        let actor = aimed_actor(&mut board, Point::new(20.0, 20.0), Point::new(5.0, 2.0));

        DecomposePath::new(actor).tick(&mut board);
        assert_eq!(
            legs(&board, actor),
            vec![(5.0, 20.0, Cardinal::Left), (5.0, 2.0, Cardinal::Up)]
        );
    }

    #[test]
    fn aligned_axis_is_skipped() {
        let mut board = board();
        let actor = aimed_actor(&mut board, Point::ORIGIN, Point::new(0.0, 5.0));

        DecomposePath::new(actor).tick(&mut board);
        assert_eq!(legs(&board, actor), vec![(0.0, 5.0, Cardinal::Down)]);
    }

    #[test]
    fn vanished_target_gives_an_empty_path() {
        let mut board = board();
        let actor = aimed_actor(&mut board, Point::ORIGIN, Point::new(10.0, 10.0));
        let target = board.actor(actor).unwrap().scratch.target.unwrap();
        board.remove(target);

        assert_eq!(DecomposePath::new(actor).tick(&mut board), Status::Success);
        assert!(legs(&board, actor).is_empty());
    }

    #[test]
    fn pop_fails_once_the_path_is_empty() {
        let mut board = board();
        let actor = aimed_actor(&mut board, Point::ORIGIN, Point::new(10.0, 0.0));
        DecomposePath::new(actor).tick(&mut board);

        let mut pop = PopPathLeg::new(actor);
        assert_eq!(pop.tick(&mut board), Status::Success);
        assert!(board.actor(actor).unwrap().scratch.step.is_some());
        assert_eq!(pop.tick(&mut board), Status::Failure);
    }

    #[test]
    fn turn_converges_after_ceil_pi_over_step_ticks() {
        let step = 0.1;
        let config = SimConfig::default()
            .with_tolerance(Tolerance::new(1.0, 0.01))
            .with_turn_step(step);
        let mut board = Board::new(100.0, 100.0, config);
        let actor = board.add(Actor::new(Point::ORIGIN, 0.0, 1.0));
        board.actor_mut(actor).unwrap().scratch.step =
            Some(Leg::new(Point::new(-50.0, 0.0), Cardinal::Left));

        let expected_ticks = (PI / step).ceil() as usize;
        let mut turn = TurnToHeading::new(actor);
        for _ in 1..expected_ticks {
            assert_eq!(turn.tick(&mut board), Status::Running);
        }
        assert_eq!(turn.tick(&mut board), Status::Success);
        assert_eq!(board.actor(actor).unwrap().heading, PI);
    }

    #[test]
    fn turn_takes_the_short_way_across_zero() {
        let config = SimConfig::default()
            .with_tolerance(Tolerance::new(1.0, 0.01))
            .with_turn_step(0.1);
        let mut board = Board::new(100.0, 100.0, config);
        let actor = board.add(Actor::new(Point::ORIGIN, 3.0 * FRAC_PI_2 + 1.5, 1.0));
        board.actor_mut(actor).unwrap().scratch.step =
            Some(Leg::new(Point::new(50.0, 0.0), Cardinal::Right));

        // 0.0708 rad short of a full turn: one forward step reaches Right.
        assert_eq!(TurnToHeading::new(actor).tick(&mut board), Status::Success);
        assert_eq!(board.actor(actor).unwrap().heading, 0.0);
    }

    #[test]
    fn move_steps_by_speed_and_lands_exactly() {
        let mut board = board();
        let actor = board.add(Actor::new(Point::ORIGIN, 0.0, 4.0));
        board.actor_mut(actor).unwrap().scratch.step =
            Some(Leg::new(Point::new(10.0, 0.0), Cardinal::Right));

        let mut walk = MoveToPoint::new(actor);
        assert_eq!(walk.tick(&mut board), Status::Running);
        assert_eq!(board.actor(actor).unwrap().location.x, 4.0);
        assert_eq!(walk.tick(&mut board), Status::Running);
        assert_eq!(walk.tick(&mut board), Status::Running);
        // Last step is shortened so the actor never overshoots.
        assert_eq!(board.actor(actor).unwrap().location.x, 10.0);
        assert_eq!(walk.tick(&mut board), Status::Success);
    }

    #[test]
    fn move_with_non_cardinal_heading_raises() {
        let mut board = board();
        let actor = board.add(Actor::new(Point::ORIGIN, 0.7, 1.0));
        board.actor_mut(actor).unwrap().scratch.step =
            Some(Leg::new(Point::new(10.0, 0.0), Cardinal::Right));

        assert_eq!(MoveToPoint::new(actor).tick(&mut board), Status::Failure);
        // The fault surfaces on the next board tick.
        let err = board.tick().expect_err("fault must surface");
        assert!(matches!(err, SimError::NonCardinalHeading { .. }));
    }

    #[test]
    fn turn_without_a_leg_raises() {
        let mut board = board();
        let actor = board.add(Actor::new(Point::ORIGIN, 0.0, 1.0));

        assert_eq!(TurnToHeading::new(actor).tick(&mut board), Status::Failure);
        let err = board.tick().expect_err("fault must surface");
        assert_eq!(err.actor(), actor);
    }
}
