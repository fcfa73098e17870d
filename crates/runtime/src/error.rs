//! Error types surfaced by the runtime.
//!
//! Simulation faults are forwarded untouched so clients can inspect the
//! offending actor; configuration problems are reported before anything runs.
use sim_core::SimError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl RuntimeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RuntimeError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
