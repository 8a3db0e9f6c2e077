//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::engine::{EngineError, PlaybackEngine, RunOutcome};
use crate::ui::panes::{self, SourceScrollState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before the engine is ticked again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// Engine driving the current session
    pub engine: PlaybackEngine,

    /// Algorithm run by `r`
    pub algorithm: Algorithm,

    pub source_scroll: SourceScrollState,
    pub array_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last run failure, shown until the next successful action
    pub error: Option<String>,
}

impl App {
    pub fn new(engine: PlaybackEngine, algorithm: Algorithm) -> Self {
        App {
            engine,
            algorithm,
            source_scroll: SourceScrollState::default(),
            array_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready! Press r to run."),
            error: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.advance();

            // Wake up for the next step or for input, whichever comes first
            let timeout = self
                .engine
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(POLL_INTERVAL)
                .min(POLL_INTERVAL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Publish the next step if due
    fn advance(&mut self) {
        if self.engine.tick() && !self.engine.is_replaying() {
            self.status_message = format!("{} complete", self.algorithm.name());
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Listing (top) | Trace (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let title = format!("{} · size {}", self.algorithm, self.engine.size());
        panes::render_source_pane(
            frame,
            left_rows[0],
            &title,
            self.algorithm.listing(),
            self.engine.active_line(),
            &mut self.source_scroll,
        );

        panes::render_trace_pane(
            frame,
            left_rows[1],
            self.engine.vars(),
            self.engine.aux(),
            self.algorithm.aux_label(),
        );

        panes::render_array_pane(
            frame,
            columns[1],
            self.engine.data(),
            self.engine.markers(),
            &mut self.array_scroll,
        );

        let message = self.error.as_deref().unwrap_or(self.status_message.as_str());
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message,
                current_step: self.engine.current_step(),
                total_steps: self.engine.total_steps(),
                is_replaying: self.engine.is_replaying(),
                is_overrun: self.engine.is_overrun(),
                is_error: self.error.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Enter => self.run_algorithm(),
            KeyCode::Char('x') | KeyCode::Backspace => {
                self.engine.reset();
                self.error = None;
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let choice = c as usize - '1' as usize;
                if let Some(size) = self.engine.datasets().sizes().get(choice).copied() {
                    self.configure(size);
                }
            }
            KeyCode::Tab => self.select(self.algorithm.next()),
            KeyCode::BackTab => self.select(self.algorithm.prev()),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_target(1),
            KeyCode::Char('-') => self.adjust_target(-1),
            KeyCode::Up => {
                self.array_scroll = self.array_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.array_scroll = self.array_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn run_algorithm(&mut self) {
        match self.engine.run(&self.algorithm) {
            Ok(RunOutcome::Started {
                steps,
                elapsed,
                overrun,
            }) => {
                self.error = None;
                self.status_message = format!(
                    "Running {}: {} steps computed in {:.1} ms{}",
                    self.algorithm.name(),
                    steps,
                    elapsed.as_secs_f64() * 1000.0,
                    if overrun { " (too large to animate smoothly)" } else { "" }
                );
            }
            Ok(RunOutcome::Rejected) => {
                self.status_message = "Already running".to_string();
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
            }
        }
    }

    fn configure(&mut self, size: usize) {
        match self.engine.configure(size) {
            Ok(()) => {
                self.error = None;
                self.array_scroll = 0;
                self.status_message = format!("Size set to {}", size);
            }
            Err(EngineError::ReplayInProgress) => {
                self.status_message = "Reset (x) before changing size".to_string();
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
            }
        }
    }

    /// Switching algorithms abandons the current session
    fn select(&mut self, algorithm: Algorithm) {
        self.engine.reset();
        self.algorithm = algorithm;
        self.error = None;
        self.source_scroll = SourceScrollState::default();
        self.status_message = format!("Selected {}", algorithm);
    }

    fn adjust_target(&mut self, delta: i64) {
        if let Some(target) = self.algorithm.target() {
            self.algorithm = self.algorithm.with_target(target.saturating_add(delta));
            self.status_message = format!("Target set to {}", target.saturating_add(delta));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Datasets;
    use crate::engine::{EngineConfig, EngineState};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(algorithm: Algorithm) -> App {
        let engine = PlaybackEngine::new(Datasets::builtin(), EngineConfig::default()).unwrap();
        App::new(engine, algorithm)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_size_keys_follow_dataset_sizes() {
        let mut app = app(Algorithm::BubbleSort);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.size(), 50);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine.size(), 25);
        // no fourth size
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.engine.size(), 25);
    }

    #[test]
    fn test_size_change_refused_while_running() {
        let mut app = app(Algorithm::SelectionSort);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.engine.is_replaying());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine.size(), 10);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.engine.state(), EngineState::Idle);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine.size(), 25);
    }

    #[test]
    fn test_target_keys_only_affect_searches() {
        let mut app = app(Algorithm::LinearSearch { target: 45 });
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.algorithm.target(), Some(46));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.algorithm, Algorithm::BinarySearch { target: 46 });

        let mut sorting = self::app(Algorithm::HeapSort);
        press(&mut sorting, KeyCode::Char('+'));
        assert_eq!(sorting.algorithm, Algorithm::HeapSort);
    }

    #[test]
    fn test_render_shows_listing_and_hints() {
        let mut app = app(Algorithm::BubbleSort);
        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Bubble Sort"));
        assert!(text.contains("Step 0/0"));
        assert!(text.contains("quit"));
    }
}
