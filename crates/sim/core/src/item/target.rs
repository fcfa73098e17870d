use crate::geometry::Point;

/// Passive capturable item. It never moves and does nothing on tick.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    location: Point,
}

impl Target {
    pub fn new(location: Point) -> Self {
        Self { location }
    }

    pub fn location(&self) -> Point {
        self.location
    }
}
