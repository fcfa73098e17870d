//! Population and pacing settings for a [`crate::Simulation`].
use std::env;
use std::time::Duration;

use sim_core::{EdgePolicy, SimConfig};

use crate::error::{Result, RuntimeError};

/// Runtime configuration.
///
/// The embedded [`SimConfig`] is handed to the board untouched; everything
/// else decides how the board is populated and how fast it is driven.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub sim: SimConfig,
    /// Actors spawned by [`crate::Simulation::populate`].
    pub actors: usize,
    /// Targets spawned on populate and on every replenishment.
    pub targets: usize,
    /// Wanderers spawned by [`crate::Simulation::populate`].
    pub wanderers: usize,
    /// Lower bound of the per-actor speed draw.
    pub min_speed: f64,
    /// Upper bound (inclusive) of the per-actor speed draw.
    pub max_speed: f64,
    /// Wanderer speeds are drawn from `[0, wanderer_max_speed)`.
    pub wanderer_max_speed: f64,
    pub frame_interval: Duration,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Spawn a fresh batch of targets once the board runs out.
    pub replenish_targets: bool,
}

impl RuntimeConfig {
    // ===== population defaults =====
    pub const DEFAULT_ACTORS: usize = 3;
    pub const DEFAULT_TARGETS: usize = 5;
    pub const DEFAULT_WANDERERS: usize = 12;

    // ===== movement defaults =====
    pub const DEFAULT_MIN_SPEED: f64 = 0.5;
    pub const DEFAULT_MAX_SPEED: f64 = 2.0;
    pub const DEFAULT_WANDERER_MAX_SPEED: f64 = 1.0;

    // ===== pacing defaults =====
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SEEKER_ACTORS`, `SEEKER_TARGETS`, `SEEKER_WANDERERS` - population sizes
    /// - `SEEKER_MIN_SPEED`, `SEEKER_MAX_SPEED` - actor speed range
    /// - `SEEKER_WANDERER_MAX_SPEED` - wanderer speed ceiling
    /// - `SEEKER_FRAME_MS` - frame interval in milliseconds
    /// - `SEEKER_SEED` - fixed RNG seed
    /// - `SEEKER_REPLENISH` - `true`/`false`
    /// - `SEEKER_TURN_STEP` - radians per tick
    /// - `SEEKER_EDGE_POLICY` - `recenter` or `wrap`
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = lookup;
        let mut config = Self::default();

        if let Some(actors) = parse(read("SEEKER_ACTORS")) {
            config.actors = actors;
        }
        if let Some(targets) = parse(read("SEEKER_TARGETS")) {
            config.targets = targets;
        }
        if let Some(wanderers) = parse(read("SEEKER_WANDERERS")) {
            config.wanderers = wanderers;
        }
        if let Some(speed) = parse(read("SEEKER_MIN_SPEED")) {
            config.min_speed = speed;
        }
        if let Some(speed) = parse(read("SEEKER_MAX_SPEED")) {
            config.max_speed = speed;
        }
        if let Some(speed) = parse(read("SEEKER_WANDERER_MAX_SPEED")) {
            config.wanderer_max_speed = speed;
        }
        if let Some(millis) = parse::<u64>(read("SEEKER_FRAME_MS")) {
            config.frame_interval = Duration::from_millis(millis);
        }
        if let Some(seed) = parse(read("SEEKER_SEED")) {
            config.seed = Some(seed);
        }
        if let Some(replenish) = parse(read("SEEKER_REPLENISH")) {
            config.replenish_targets = replenish;
        }
        if let Some(turn_step) = parse(read("SEEKER_TURN_STEP")) {
            config.sim = config.sim.with_turn_step(turn_step);
        }
        if let Some(policy) = parse::<EdgePolicy>(read("SEEKER_EDGE_POLICY")) {
            config.sim = config.sim.with_edge_policy(policy);
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_population(mut self, actors: usize, targets: usize, wanderers: usize) -> Self {
        self.actors = actors;
        self.targets = targets;
        self.wanderers = wanderers;
        self
    }

    pub fn with_speed_range(mut self, min_speed: f64, max_speed: f64) -> Self {
        self.min_speed = min_speed;
        self.max_speed = max_speed;
        self
    }

    pub fn with_replenish_targets(mut self, replenish: bool) -> Self {
        self.replenish_targets = replenish;
        self
    }

    /// Rejects settings the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_speed.is_finite() && self.min_speed > 0.0) {
            return Err(RuntimeError::invalid("min_speed", "must be a positive number"));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= self.min_speed) {
            return Err(RuntimeError::invalid(
                "max_speed",
                format!("must be at least min_speed ({})", self.min_speed),
            ));
        }
        if !(self.wanderer_max_speed.is_finite() && self.wanderer_max_speed >= 0.0) {
            return Err(RuntimeError::invalid(
                "wanderer_max_speed",
                "must be a non-negative number",
            ));
        }
        if self.frame_interval.is_zero() {
            return Err(RuntimeError::invalid("frame_interval", "must be non-zero"));
        }

        let sim = &self.sim;
        if !(sim.turn_step.is_finite() && sim.turn_step > 0.0) {
            return Err(RuntimeError::invalid("turn_step", "must be a positive number"));
        }
        if !(sim.tolerance.location >= 0.0 && sim.tolerance.angle >= 0.0) {
            return Err(RuntimeError::invalid("tolerance", "must be non-negative"));
        }

        if self.actors == 0 && self.targets > 0 {
            tracing::warn!("no actors configured; targets will never be captured");
        }

        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            actors: Self::DEFAULT_ACTORS,
            targets: Self::DEFAULT_TARGETS,
            wanderers: Self::DEFAULT_WANDERERS,
            min_speed: Self::DEFAULT_MIN_SPEED,
            max_speed: Self::DEFAULT_MAX_SPEED,
            wanderer_max_speed: Self::DEFAULT_WANDERER_MAX_SPEED,
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_INTERVAL_MS),
            seed: None,
            replenish_targets: true,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
