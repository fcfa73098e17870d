use crate::config::EdgePolicy;
use crate::geometry::{Point, normalize_angle};

/// Free-moving item that drifts along a fixed heading.
///
/// Wanderers ignore every other item: they are neither targets nor hunters.
#[derive(Clone, Copy, Debug)]
pub struct Wanderer {
    pub location: Point,
    pub heading: f64,
    pub speed: f64,
}

impl Wanderer {
    pub fn new(location: Point, heading: f64, speed: f64) -> Self {
        Self {
            location,
            heading: normalize_angle(heading),
            speed,
        }
    }

    /// Moves one tick forward, applying `policy` when the board is left.
    pub(crate) fn advance(&mut self, width: f64, height: f64, policy: EdgePolicy) {
        self.location = self.location.advanced(self.heading, self.speed);

        if self.location.within(width, height) {
            return;
        }

        self.location = match policy {
            EdgePolicy::Recenter => Point::new(width / 2.0, height / 2.0),
            EdgePolicy::Wrap => self.location.wrapped(width, height),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recenters_after_leaving_the_board() {
        let mut wanderer = Wanderer::new(Point::new(99.0, 50.0), 0.0, 2.0);
        wanderer.advance(100.0, 80.0, EdgePolicy::Recenter);
        assert_eq!((wanderer.location.x, wanderer.location.y), (50.0, 40.0));
    }

    #[test]
    fn wraps_to_the_opposite_edge() {
        let mut wanderer = Wanderer::new(Point::new(99.0, 50.0), 0.0, 2.0);
        wanderer.advance(100.0, 80.0, EdgePolicy::Wrap);
        assert!((wanderer.location.x - 1.0).abs() < 1e-9);
        assert_eq!(wanderer.location.y, 50.0);
    }

    #[test]
    fn stays_put_on_the_board_otherwise() {
        let mut wanderer = Wanderer::new(Point::new(10.0, 10.0), 0.0, 2.0);
        wanderer.advance(100.0, 80.0, EdgePolicy::Recenter);
        assert_eq!((wanderer.location.x, wanderer.location.y), (12.0, 10.0));
    }
}
