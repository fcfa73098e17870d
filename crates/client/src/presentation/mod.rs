//! Terminal presentation: setup, frame capture, and layout.
pub mod scene;
pub mod terminal;
pub mod ui;

pub use scene::Scene;
pub use terminal::{TerminalGuard, Tui};
pub use ui::Hud;
