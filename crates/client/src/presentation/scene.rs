//! Frame buffer between the board and the terminal.
//!
//! [`Scene`] implements [`Renderer`] by recording every shape of a frame; the
//! UI then paints the recorded shapes onto a ratatui canvas.
use std::f64::consts::{FRAC_PI_4, TAU};

use sim_core::{Renderer, ShapeKind, Transform};

/// Arrow glyphs by heading octant, clockwise from "right" in screen space.
const ARROWS: [&str; 8] = ["→", "↘", "↓", "↙", "←", "↖", "↑", "↗"];

/// One recorded shape.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub kind: ShapeKind,
    pub transform: Transform,
}

impl Sprite {
    pub fn glyph(&self) -> &'static str {
        glyph(self.kind, self.transform.rotation)
    }
}

/// Shapes of the most recent frame plus the surface they were drawn for.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    width: f64,
    height: f64,
    sprites: Vec<Sprite>,
}

impl Scene {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.sprites.iter().filter(|sprite| sprite.kind == kind).count()
    }
}

impl Renderer for Scene {
    fn begin_frame(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.sprites.clear();
    }

    fn draw_shape(&mut self, kind: ShapeKind, transform: Transform) {
        self.sprites.push(Sprite { kind, transform });
    }
}

/// Character used for a shape. Actors point along their heading.
pub fn glyph(kind: ShapeKind, rotation: f64) -> &'static str {
    match kind {
        ShapeKind::Actor => {
            let octant = (rotation.rem_euclid(TAU) / FRAC_PI_4).round() as usize % ARROWS.len();
            ARROWS[octant]
        }
        ShapeKind::Target => "o",
        ShapeKind::Wanderer => "·",
    }
}
