//! Run sessions and timed replay
//!
//! A run computes the whole step list up front, then [`PlaybackEngine::tick`]
//! publishes one step per replay delay. The caller drives the engine: call
//! `tick` whenever [`PlaybackEngine::next_deadline`] has passed (or just poll
//! it regularly, it is cheap when nothing is due).

use std::time::{Duration, Instant};

use super::config::EngineConfig;
use super::errors::EngineError;
use super::timer::{Clock, OneShotTimer, SystemClock};
use crate::algorithms::{ProducerError, StepProducer};
use crate::dataset::Datasets;
use crate::snapshot::{Markers, Step, Vars};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No session, or the session finished or was reset
    Idle,
    /// Steps produced, replay not yet scheduled
    Computed,
    /// Timer armed, steps being published
    Replaying,
}

/// Result of [`PlaybackEngine::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Started {
        steps: usize,
        elapsed: Duration,
        overrun: bool,
    },
    /// A session was already active; nothing changed
    Rejected,
}

/// Cost of the most recent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub producer: String,
    pub steps: usize,
    pub elapsed: Duration,
    pub overrun: bool,
}

/// Produced steps plus the index of the next step to publish
#[derive(Debug)]
struct Session {
    steps: Vec<Step>,
    next: usize,
}

/// Trace fields of the last published step
#[derive(Debug, Default)]
struct TraceView {
    line: Option<usize>,
    vars: Vars,
    markers: Markers,
    aux: Vec<i64>,
}

/// Owns one run session at a time and replays it on a fixed cadence
pub struct PlaybackEngine<C: Clock = SystemClock> {
    clock: C,
    config: EngineConfig,
    datasets: Datasets,
    size: usize,
    data: Vec<i64>,
    state: EngineState,
    session: Option<Session>,
    timer: OneShotTimer,
    view: TraceView,
    overrun: bool,
    last_run: Option<RunStats>,
}

impl PlaybackEngine<SystemClock> {
    pub fn new(datasets: Datasets, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_clock(datasets, config, SystemClock)
    }
}

impl<C: Clock> PlaybackEngine<C> {
    /// Engine loaded with the dataset for `config.initial_size`
    pub fn with_clock(datasets: Datasets, config: EngineConfig, clock: C) -> Result<Self, EngineError> {
        config.validate()?;
        let size = config.initial_size;
        let data = datasets.lookup(size)?.to_vec();

        Ok(PlaybackEngine {
            clock,
            config,
            datasets,
            size,
            data,
            state: EngineState::Idle,
            session: None,
            timer: OneShotTimer::new(),
            view: TraceView::default(),
            overrun: false,
            last_run: None,
        })
    }

    /// Select a new input size and start over with its dataset.
    ///
    /// Rejected while replaying. A size without a dataset falls back to the
    /// default size; if there is none the engine is left unchanged.
    pub fn configure(&mut self, size: usize) -> Result<(), EngineError> {
        if self.state != EngineState::Idle {
            log::warn!("configure({}) rejected: replay in progress", size);
            return Err(EngineError::ReplayInProgress);
        }
        let data = self.datasets.lookup(size)?.to_vec();

        self.timer.cancel();
        self.size = size;
        self.data = data;
        self.clear_session();
        log::debug!("configured size {}", size);
        Ok(())
    }

    /// Produce the full step list for the current data and start replay.
    ///
    /// The producer gets a private copy of the data view. On failure nothing
    /// visible changes and the engine stays idle.
    pub fn run<P>(&mut self, producer: &P) -> Result<RunOutcome, EngineError>
    where
        P: StepProducer + ?Sized,
    {
        if self.state != EngineState::Idle {
            log::warn!("run({}) rejected: session already active", producer.name());
            return Ok(RunOutcome::Rejected);
        }

        let input = self.data.clone();
        let start = self.clock.now();
        let result = producer.produce(&input);
        let elapsed = self.clock.now().saturating_duration_since(start);

        let steps = match result {
            Ok(steps) if steps.is_empty() => {
                let err = ProducerError::EmptyTrace {
                    algorithm: producer.name().to_string(),
                };
                log::error!("{}", err);
                return Err(err.into());
            }
            Ok(steps) => steps,
            Err(err) => {
                log::error!("{} failed: {}", producer.name(), err);
                return Err(err.into());
            }
        };

        let count = steps.len();
        let overrun = count > self.config.max_steps || elapsed > self.config.max_compute();
        if overrun {
            log::warn!(
                "{} overran: {} steps in {:?} (limits {} steps, {:?})",
                producer.name(),
                count,
                elapsed,
                self.config.max_steps,
                self.config.max_compute()
            );
        }
        log::info!(
            "{} produced {} steps in {:?} for {} items",
            producer.name(),
            count,
            elapsed,
            input.len()
        );

        self.overrun = overrun;
        self.last_run = Some(RunStats {
            producer: producer.name().to_string(),
            steps: count,
            elapsed,
            overrun,
        });
        self.session = Some(Session { steps, next: 0 });
        self.state = EngineState::Computed;

        let delay = self.delay();
        self.timer.schedule(self.clock.now(), delay);
        self.state = EngineState::Replaying;
        log::debug!("replaying {} steps every {:?}", count, delay);

        Ok(RunOutcome::Started {
            steps: count,
            elapsed,
            overrun,
        })
    }

    /// Stop replay and restore the dataset for the current size
    pub fn reset(&mut self) {
        self.timer.cancel();
        match self.datasets.lookup(self.size) {
            Ok(data) => self.data = data.to_vec(),
            // Unreachable once constructed: the size was looked up successfully before
            Err(e) => log::error!("reset could not reload data: {}", e),
        }
        self.clear_session();
        log::debug!("reset");
    }

    /// Publish the next step if its delay has elapsed.
    ///
    /// Returns true when a step was published. Publishes at most one step per
    /// call; the next delay is measured from this call.
    pub fn tick(&mut self) -> bool {
        if self.state != EngineState::Replaying {
            return false;
        }
        let now = self.clock.now();
        if !self.timer.fire(now) {
            return false;
        }

        let Some(session) = self.session.as_mut() else {
            self.state = EngineState::Idle;
            return false;
        };
        let Some(step) = session.steps.get(session.next) else {
            self.state = EngineState::Idle;
            return false;
        };

        self.data = step.array.clone();
        self.view = TraceView {
            line: Some(step.line),
            vars: step.vars.clone(),
            markers: step.markers.clone(),
            aux: step.aux.clone().unwrap_or_default(),
        };
        session.next += 1;
        log::debug!("published step {}/{}", session.next, session.steps.len());

        if session.next >= session.steps.len() {
            self.state = EngineState::Idle;
            log::info!("replay finished after {} steps", session.next);
        } else {
            let delay = self.delay();
            self.timer.schedule(now, delay);
        }
        true
    }

    /// When the next step is due, if replaying
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Replay delay for the configured size
    pub fn delay(&self) -> Duration {
        self.config.delay_for(self.size)
    }

    fn clear_session(&mut self) {
        self.session = None;
        self.state = EngineState::Idle;
        self.view = TraceView::default();
        self.overrun = false;
        self.last_run = None;
    }

    /// Current data view: the dataset, or the last published step's array
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_replaying(&self) -> bool {
        self.state == EngineState::Replaying
    }

    /// Advisory flag: the last run was too large or too slow to animate smoothly
    pub fn is_overrun(&self) -> bool {
        self.overrun
    }

    pub fn active_line(&self) -> Option<usize> {
        self.view.line
    }

    pub fn vars(&self) -> &Vars {
        &self.view.vars
    }

    pub fn markers(&self) -> &Markers {
        &self.view.markers
    }

    pub fn aux(&self) -> &[i64] {
        &self.view.aux
    }

    /// Number of steps published so far in this session
    pub fn current_step(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.next)
    }

    pub fn total_steps(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.steps.len())
    }

    pub fn last_run(&self) -> Option<&RunStats> {
        self.last_run.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
