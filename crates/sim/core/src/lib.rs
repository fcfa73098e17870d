//! Deterministic seek-and-capture simulation on a continuous 2D board.
//!
//! `sim-core` owns the world model ([`Board`] and its [`Item`]s), the
//! tolerance-based geometry every movement relies on, and the behavior-tree
//! leaves that make actors hunt targets. It has no notion of time or pixels:
//! a clock calls [`Board::tick`] once per frame and a [`Renderer`] receives
//! shapes from [`Board::draw`].
pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod item;
pub mod render;

pub use board::{Board, ItemId};
pub use config::{EdgePolicy, SimConfig};
pub use error::SimError;
pub use geometry::{
    Cardinal, Point, Tolerance, angle_eq, heading_eq, heading_to, normalize_angle, shortest_arc,
};
pub use item::{Actor, Brain, Item, Leg, Scratch, Target, Wanderer};
pub use render::{NullRenderer, Renderer, ShapeKind, Transform};
