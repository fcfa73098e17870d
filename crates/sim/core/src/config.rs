use std::f64::consts::PI;

use crate::geometry::Tolerance;

/// What a free-moving item does when it leaves the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EdgePolicy {
    /// Jump back to the centre of the board.
    #[default]
    Recenter,
    /// Re-enter from the opposite edge.
    Wrap,
}

/// Simulation tunables shared by every item on a board.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Arrival and alignment thresholds.
    pub tolerance: Tolerance,
    /// Maximum rotation per tick, in radians.
    pub turn_step: f64,
    /// Edge handling for wanderers.
    pub edge_policy: EdgePolicy,
}

impl SimConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_STEP: f64 = PI / 36.0;

    pub fn new() -> Self {
        Self {
            tolerance: Tolerance::default(),
            turn_step: Self::DEFAULT_TURN_STEP,
            edge_policy: EdgePolicy::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_turn_step(mut self, turn_step: f64) -> Self {
        self.turn_step = turn_step;
        self
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
