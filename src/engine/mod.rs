//! Playback engine: one run session per instance, replayed on a timer
//!
//! ```text
//! configure / reset ──▶ Idle ──run──▶ Computed ──▶ Replaying ──last step──▶ Idle
//!                                                      │
//!                                                      └──reset──▶ Idle
//! ```

pub mod config;
pub mod errors;
pub mod playback;
pub mod timer;

pub use config::{ConfigError, EngineConfig};
pub use errors::EngineError;
pub use playback::{EngineState, PlaybackEngine, RunOutcome, RunStats};
pub use timer::{Clock, ManualClock, OneShotTimer, SystemClock};
