//! Owner of the board and its frame loop.
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sim_core::{Actor, Board, ItemId, Point, Renderer, Target, Wanderer};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::RuntimeConfig;
use crate::error::Result;

/// What happened during one [`Simulation::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Frame number just completed, starting at 1.
    pub frame: u64,
    /// Targets removed during the tick.
    pub captured: usize,
    /// Targets spawned by replenishment after the tick.
    pub spawned: usize,
    /// Targets left on the board.
    pub targets: usize,
}

/// Totals for a [`Simulation::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub captured: usize,
}

/// A populated board plus the randomness and bookkeeping around it.
pub struct Simulation {
    board: Board,
    config: RuntimeConfig,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    /// Validates `config` and creates an empty board of the given size.
    pub fn new(config: RuntimeConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            board: Board::new(width, height, config.sim),
            config,
            rng,
            frame: 0,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Spawns the configured actors, targets and wanderers.
    pub fn populate(&mut self) {
        for _ in 0..self.config.actors {
            self.spawn_actor();
        }
        self.spawn_targets(self.config.targets);
        for _ in 0..self.config.wanderers {
            self.spawn_wanderer();
        }

        info!(
            actors = self.config.actors,
            targets = self.config.targets,
            wanderers = self.config.wanderers,
            width = self.board.width(),
            height = self.board.height(),
            "board populated"
        );
    }

    /// Adds an actor at a random location with a random heading and speed.
    pub fn spawn_actor(&mut self) -> ItemId {
        let location = self.random_point();
        let heading = self.rng.gen_range(0.0..TAU);
        let speed = self
            .rng
            .gen_range(self.config.min_speed..=self.config.max_speed);
        self.board.add(Actor::new(location, heading, speed))
    }

    /// Adds `count` targets at random locations.
    pub fn spawn_targets(&mut self, count: usize) -> Vec<ItemId> {
        (0..count)
            .map(|_| {
                let location = self.random_point();
                self.board.add(Target::new(location))
            })
            .collect()
    }

    /// Adds a wanderer at the board centre drifting in a random direction.
    pub fn spawn_wanderer(&mut self) -> ItemId {
        let centre = Point::new(self.board.width() / 2.0, self.board.height() / 2.0);
        let heading = self.rng.gen_range(0.0..TAU);
        let speed = self.rng.gen_range(0.0..1.0) * self.config.wanderer_max_speed;
        self.board.add(Wanderer::new(centre, heading, speed))
    }

    /// Advances the board by one frame.
    pub fn step(&mut self) -> Result<StepReport> {
        let before = self.board.target_count();
        self.board.tick()?;
        self.frame += 1;

        let captured = before.saturating_sub(self.board.target_count());
        let mut spawned = 0;
        if self.config.replenish_targets && self.board.target_count() == 0 {
            spawned = self.spawn_targets(self.config.targets).len();
            if spawned > 0 {
                info!(frame = self.frame, spawned, "targets replenished");
            }
        }

        Ok(StepReport {
            frame: self.frame,
            captured,
            spawned,
            targets: self.board.target_count(),
        })
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.board.draw(renderer);
    }

    /// Updates the board bounds. Existing items keep their locations.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "board resized");
        self.board.resize(width, height);
    }

    /// Ticks then draws once per clock frame.
    ///
    /// Runs `frames` frames, or until the first error when `frames` is `None`.
    pub async fn run<C>(
        &mut self,
        clock: &mut C,
        renderer: &mut dyn Renderer,
        frames: Option<u64>,
    ) -> Result<RunSummary>
    where
        C: Clock + ?Sized,
    {
        let mut summary = RunSummary::default();

        while frames.is_none_or(|limit| summary.frames < limit) {
            clock.next_frame().await;
            let report = self.step()?;
            self.draw(renderer);

            summary.frames += 1;
            summary.captured += report.captured;
        }

        Ok(summary)
    }

    fn random_point(&mut self) -> Point {
        let x = self.rng.gen_range(0.0..1.0) * self.board.width();
        let y = self.rng.gen_range(0.0..1.0) * self.board.height();
        Point::new(x, y)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("frame", &self.frame)
            .field("items", &self.board.len())
            .field("config", &self.config)
            .finish()
    }
}
