//! Drawing interface consumed by [`crate::Board::draw`].
//!
//! The board never draws pixels itself. For every item it hands the renderer
//! a shape tag plus the frame the shape lives in (translated to the item's
//! location, rotated by its heading); the actual glyphs/paths are up to the
//! implementation.

use crate::geometry::Point;

/// Which shape to draw for an item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    /// Behavior-tree driven hunter.
    Actor,
    /// Passive capturable item.
    Target,
    /// Free-moving decorative item.
    Wanderer,
}

/// Local coordinate frame of a shape.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// Translation applied before drawing.
    pub origin: Point,
    /// Rotation in radians, applied after the translation.
    pub rotation: f64,
}

impl Transform {
    pub const fn new(origin: Point, rotation: f64) -> Self {
        Self { origin, rotation }
    }
}

/// Sink for one frame of shapes.
pub trait Renderer {
    /// Called once per frame before any shape, with the current surface size.
    fn begin_frame(&mut self, _width: f64, _height: f64) {}

    /// Draws one shape in the given frame.
    fn draw_shape(&mut self, kind: ShapeKind, transform: Transform);
}

/// Renderer that discards everything. Used for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_shape(&mut self, _kind: ShapeKind, _transform: Transform) {}
}
