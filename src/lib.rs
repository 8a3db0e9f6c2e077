//! # Introduction
//!
//! algotrace runs classic sorting and searching algorithms ahead of time,
//! recording every observable state change as a [`snapshot::Step`], then
//! replays the recorded steps on a timer. The bundled terminal front-end is
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Step Producer → Vec<Step> → Playback Engine → TUI
//! ```
//!
//! 1. [`dataset`]: fixed input sequences keyed by size, with a default fallback.
//! 2. [`algorithms`]: one step producer per algorithm, plus the catalog and
//!    the reference listings the steps point into.
//! 3. [`snapshot`]: the [`snapshot::Step`] record and the shared
//!    [`snapshot::StepRecorder`] every producer appends to.
//! 4. [`engine`]: the [`engine::PlaybackEngine`] state machine (run, reset,
//!    configure, timed replay, overrun detection).
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotrace::algorithms::Algorithm;
//! use algotrace::dataset::Datasets;
//! use algotrace::engine::{EngineConfig, ManualClock, PlaybackEngine};
//!
//! let clock = ManualClock::new();
//! let mut engine =
//!     PlaybackEngine::with_clock(Datasets::builtin(), EngineConfig::default(), clock.clone())?;
//! engine.run(&Algorithm::BubbleSort)?;
//! while engine.is_replaying() {
//!     clock.advance(engine.delay());
//!     engine.tick();
//! }
//! assert!(engine.data().windows(2).all(|w| w[0] <= w[1]));
//! # Ok::<(), algotrace::engine::EngineError>(())
//! ```

pub mod algorithms;
pub mod dataset;
pub mod engine;
pub mod snapshot;
pub mod ui;
