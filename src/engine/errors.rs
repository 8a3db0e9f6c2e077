//! Errors surfaced by [`PlaybackEngine`](super::PlaybackEngine) operations
//!
//! Rejected runs are not errors: `run` reports them as
//! [`RunOutcome::Rejected`](super::RunOutcome::Rejected).

use super::config::ConfigError;
use crate::algorithms::ProducerError;
use crate::dataset::DatasetError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The step producer failed; no session was created
    #[error(transparent)]
    Producer(#[from] ProducerError),

    /// Size lookup failed and there was no default to fall back to
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),

    /// `configure` while a replay is running
    #[error("cannot change size while a replay is in progress")]
    ReplayInProgress,
}
