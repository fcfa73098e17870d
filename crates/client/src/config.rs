//! Client configuration assembled from the environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Settings for the terminal client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Simulation population and pacing.
    pub runtime: RuntimeConfig,
    /// Run this many frames without a terminal, then exit.
    pub headless_frames: Option<u64>,
    /// Board size used for headless runs.
    pub headless_size: (f64, f64),
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Log session name; defaults to a timestamp.
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub const DEFAULT_HEADLESS_SIZE: (f64, f64) = (160.0, 48.0);

    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SEEKER_HEADLESS_FRAMES` - run headless for this many frames
    /// - `SEEKER_HEADLESS_WIDTH`, `SEEKER_HEADLESS_HEIGHT` - headless board size
    /// - `SEEKER_LOG_DIR` - log directory override
    /// - `SEEKER_SESSION_ID` - log session name
    ///
    /// Simulation variables are read by [`RuntimeConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            headless_frames: read_env("SEEKER_HEADLESS_FRAMES"),
            headless_size: Self::DEFAULT_HEADLESS_SIZE,
            log_dir: read_env("SEEKER_LOG_DIR"),
            session_id: read_env("SEEKER_SESSION_ID"),
        };

        if let Some(width) = read_env::<f64>("SEEKER_HEADLESS_WIDTH") {
            config.headless_size.0 = width.max(1.0);
        }
        if let Some(height) = read_env::<f64>("SEEKER_HEADLESS_HEIGHT") {
            config.headless_size.1 = height.max(1.0);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
