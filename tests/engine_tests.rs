// Playback engine state machine tests, driven by a manual clock

use std::time::Duration;

use algotrace::algorithms::{Algorithm, ProducerError, StepProducer};
use algotrace::dataset::Datasets;
use algotrace::engine::{
    EngineConfig, EngineError, EngineState, ManualClock, PlaybackEngine, RunOutcome,
};
use algotrace::snapshot::{Markers, Step, StepRecorder, Vars};

fn engine_with(config: EngineConfig) -> (PlaybackEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let engine = PlaybackEngine::with_clock(Datasets::builtin(), config, clock.clone())
        .expect("builtin datasets cover the initial size");
    (engine, clock)
}

fn engine() -> (PlaybackEngine<ManualClock>, ManualClock) {
    engine_with(EngineConfig::default())
}

/// `count` trivial steps, the last one terminal
fn synthetic_steps(count: usize) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    for i in 0..count.saturating_sub(1) {
        rec.record(&[i as i64], 1, Vars::new().with("i", i), Markers::new());
    }
    rec.record(&[0], 1, Vars::new().with("status", "Sorted"), Markers::new());
    rec.finish()
}

fn drain(engine: &mut PlaybackEngine<ManualClock>, clock: &ManualClock) -> usize {
    let mut published = 0;
    while engine.is_replaying() {
        clock.advance(engine.delay());
        if engine.tick() {
            published += 1;
        }
    }
    published
}

#[test]
fn test_initial_state() {
    let (engine, _clock) = engine();
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.size(), 10);
    assert_eq!(engine.data().len(), 10);
    assert_eq!(engine.active_line(), None);
    assert!(engine.vars().is_empty());
    assert!(engine.markers().is_empty());
    assert!(engine.aux().is_empty());
    assert!(!engine.is_overrun());
    assert_eq!(engine.total_steps(), 0);
}

#[test]
fn test_second_run_while_replaying_is_rejected() {
    let (mut engine, clock) = engine();
    let first = engine.run(&Algorithm::BubbleSort).unwrap();
    let total = match first {
        RunOutcome::Started { steps, .. } => steps,
        RunOutcome::Rejected => panic!("first run rejected"),
    };

    clock.advance(engine.delay());
    assert!(engine.tick());

    let second = engine.run(&Algorithm::QuickSort).unwrap();
    assert_eq!(second, RunOutcome::Rejected);
    assert_eq!(engine.total_steps(), total);
    assert_eq!(engine.current_step(), 1);
    assert_eq!(engine.last_run().unwrap().producer, "Bubble Sort");
}

#[test]
fn test_reset_cancels_pending_publish() {
    let (mut engine, clock) = engine();
    let original = engine.data().to_vec();
    engine.run(&Algorithm::SelectionSort).unwrap();

    for _ in 0..3 {
        clock.advance(engine.delay());
        assert!(engine.tick());
    }
    engine.reset();
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.next_deadline().is_none());

    // Nothing changes after a full delay
    clock.advance(engine.delay());
    assert!(!engine.tick());
    clock.advance(engine.delay() * 10);
    assert!(!engine.tick());

    assert_eq!(engine.data(), original.as_slice());
    assert_eq!(engine.active_line(), None);
    assert!(engine.vars().is_empty());
    assert_eq!(engine.total_steps(), 0);
}

#[test]
fn test_replay_publishes_every_step_in_order() {
    let (mut engine, clock) = engine();
    let expected = Algorithm::MergeSort.produce(engine.data()).unwrap();
    engine.run(&Algorithm::MergeSort).unwrap();

    for step in &expected {
        assert!(engine.is_replaying());
        clock.advance(engine.delay());
        assert!(engine.tick());
        assert_eq!(engine.data(), step.array.as_slice());
        assert_eq!(engine.active_line(), Some(step.line));
        assert_eq!(engine.vars(), &step.vars);
        assert_eq!(engine.markers(), &step.markers);
        assert_eq!(engine.aux(), step.aux_view());
    }

    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.current_step(), expected.len());
    assert!(!engine.tick());
}

#[test]
fn test_tick_publishes_at_most_one_step() {
    let (mut engine, clock) = engine();
    engine.run(&Algorithm::InsertionSort).unwrap();

    // A long stall still yields one step, and the next delay restarts from now
    clock.advance(engine.delay() * 5);
    assert!(engine.tick());
    assert!(!engine.tick());
    clock.advance(engine.delay() - Duration::from_millis(1));
    assert!(!engine.tick());
    clock.advance(Duration::from_millis(1));
    assert!(engine.tick());
    assert_eq!(engine.current_step(), 2);
}

#[test]
fn test_rerun_uses_current_data_view() {
    let (mut engine, clock) = engine();
    engine.run(&Algorithm::HeapSort).unwrap();
    drain(&mut engine, &clock);
    let sorted = engine.data().to_vec();

    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = seen.clone();
    let recorder = move |input: &[i64]| -> Result<Vec<Step>, ProducerError> {
        sink.borrow_mut().extend_from_slice(input);
        Ok(synthetic_steps(1))
    };
    engine.run(&recorder).unwrap();
    assert_eq!(*seen.borrow(), sorted);
}

#[test]
fn test_overrun_by_step_count() {
    let (mut engine, _clock) = engine();
    let big = |_: &[i64]| -> Result<Vec<Step>, ProducerError> { Ok(synthetic_steps(2001)) };
    match engine.run(&big).unwrap() {
        RunOutcome::Started { steps, overrun, .. } => {
            assert_eq!(steps, 2001);
            assert!(overrun);
        }
        RunOutcome::Rejected => panic!("run rejected"),
    }
    assert!(engine.is_overrun());
    // advisory only: replay still runs
    assert!(engine.is_replaying());

    engine.reset();
    assert!(!engine.is_overrun());

    let small = |_: &[i64]| -> Result<Vec<Step>, ProducerError> { Ok(synthetic_steps(5)) };
    engine.run(&small).unwrap();
    assert!(!engine.is_overrun());
}

#[test]
fn test_overrun_step_boundary() {
    let (mut engine, _clock) = engine_with(EngineConfig {
        max_steps: 5,
        ..EngineConfig::default()
    });
    let exact = |_: &[i64]| -> Result<Vec<Step>, ProducerError> { Ok(synthetic_steps(5)) };
    engine.run(&exact).unwrap();
    assert!(!engine.is_overrun());

    engine.reset();
    let over = |_: &[i64]| -> Result<Vec<Step>, ProducerError> { Ok(synthetic_steps(6)) };
    engine.run(&over).unwrap();
    assert!(engine.is_overrun());
}

#[test]
fn test_overrun_by_compute_time() {
    let (mut engine, clock) = engine();
    let slow_clock = clock.clone();
    let slow = move |_: &[i64]| -> Result<Vec<Step>, ProducerError> {
        slow_clock.advance(Duration::from_millis(101));
        Ok(synthetic_steps(3))
    };
    match engine.run(&slow).unwrap() {
        RunOutcome::Started { elapsed, overrun, .. } => {
            assert_eq!(elapsed, Duration::from_millis(101));
            assert!(overrun);
        }
        RunOutcome::Rejected => panic!("run rejected"),
    }

    engine.reset();
    let on_time_clock = clock.clone();
    let on_time = move |_: &[i64]| -> Result<Vec<Step>, ProducerError> {
        on_time_clock.advance(Duration::from_millis(100));
        Ok(synthetic_steps(3))
    };
    engine.run(&on_time).unwrap();
    assert!(!engine.is_overrun());
}

#[test]
fn test_producer_failure_leaves_engine_idle() {
    let (mut engine, clock) = engine();
    engine.run(&Algorithm::BubbleSort).unwrap();
    drain(&mut engine, &clock);
    let data = engine.data().to_vec();
    let line = engine.active_line();
    let total = engine.total_steps();

    let failing = |_: &[i64]| -> Result<Vec<Step>, ProducerError> {
        Err(ProducerError::Failed {
            message: "boom".to_string(),
        })
    };
    let err = engine.run(&failing).unwrap_err();
    assert!(matches!(err, EngineError::Producer(ProducerError::Failed { .. })));
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.data(), data.as_slice());
    assert_eq!(engine.active_line(), line);
    assert_eq!(engine.total_steps(), total);

    let empty = |_: &[i64]| -> Result<Vec<Step>, ProducerError> { Ok(Vec::new()) };
    let err = engine.run(&empty).unwrap_err();
    assert!(matches!(err, EngineError::Producer(ProducerError::EmptyTrace { .. })));
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn test_negative_data_surfaces_producer_error() {
    let datasets = Datasets::from_json(r#"{"3": [4, -2, 7]}"#).unwrap();
    let config = EngineConfig {
        initial_size: 3,
        ..EngineConfig::default()
    };
    let mut engine = PlaybackEngine::with_clock(datasets, config, ManualClock::new()).unwrap();
    let err = engine.run(&Algorithm::CountingSort).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Producer(ProducerError::NegativeValue { index: 1, value: -2, .. })
    ));
    assert!(!engine.is_replaying());
}

#[test]
fn test_huge_counting_table_surfaces_producer_error() {
    let datasets = Datasets::from_json(r#"{"2": [1, 9223372036854775807]}"#).unwrap();
    let config = EngineConfig {
        initial_size: 2,
        ..EngineConfig::default()
    };
    let mut engine = PlaybackEngine::with_clock(datasets, config, ManualClock::new()).unwrap();
    let err = engine.run(&Algorithm::CountingSort).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Producer(ProducerError::TableTooLarge { max: i64::MAX, .. })
    ));
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.total_steps(), 0);
    assert_eq!(engine.data(), &[1, i64::MAX]);
}

#[test]
fn test_configure_while_replaying_is_rejected() {
    let (mut engine, _clock) = engine();
    engine.run(&Algorithm::QuickSort).unwrap();
    assert!(matches!(engine.configure(50), Err(EngineError::ReplayInProgress)));
    assert_eq!(engine.size(), 10);
    assert!(engine.is_replaying());
}

#[test]
fn test_configure_resets_finished_session() {
    let (mut engine, clock) = engine();
    engine.run(&Algorithm::BucketSort).unwrap();
    drain(&mut engine, &clock);
    assert!(engine.active_line().is_some());

    engine.configure(50).unwrap();
    assert_eq!(engine.size(), 50);
    assert_eq!(engine.data().len(), 50);
    assert_eq!(engine.active_line(), None);
    assert!(engine.aux().is_empty());
    assert_eq!(engine.total_steps(), 0);
    assert!(engine.last_run().is_none());
}

#[test]
fn test_configure_unknown_size_falls_back() {
    let (mut engine, _clock) = engine();
    engine.configure(37).unwrap();
    assert_eq!(engine.size(), 37);
    assert_eq!(engine.data().len(), 10);
    // cadence follows the configured size, not the data length
    assert_eq!(engine.delay(), Duration::from_millis(430));
}

#[test]
fn test_configure_without_fallback_is_invalid() {
    let datasets = Datasets::from_json(r#"{"10": [1,2,3,4,5,6,7,8,9,10]}"#)
        .unwrap()
        .with_default(None);
    let (mut engine, _clock) = {
        let clock = ManualClock::new();
        let engine =
            PlaybackEngine::with_clock(datasets, EngineConfig::default(), clock.clone()).unwrap();
        (engine, clock)
    };
    assert!(matches!(engine.configure(25), Err(EngineError::Dataset(_))));
    assert_eq!(engine.size(), 10);
}

#[test]
fn test_delay_shrinks_with_size() {
    let (mut engine, _clock) = engine();
    assert_eq!(engine.delay(), Duration::from_millis(700));
    engine.configure(25).unwrap();
    assert_eq!(engine.delay(), Duration::from_millis(550));
    engine.configure(50).unwrap();
    assert_eq!(engine.delay(), Duration::from_millis(300));
}

#[test]
fn test_invalid_config_is_rejected() {
    let clock = ManualClock::new();
    let result = PlaybackEngine::with_clock(
        Datasets::builtin(),
        EngineConfig {
            min_delay_ms: 0,
            ..EngineConfig::default()
        },
        clock,
    );
    assert!(matches!(result, Err(EngineError::Config(_))));
}
