//! Terminal front-end built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: event loop, key bindings, drives [`PlaybackEngine::tick`]
//! - **[`panes`]**: stateless render functions (listing, array, trace, status bar)
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] with an engine and an algorithm, then call
//! [`App::run`] to start the event loop.
//!
//! [`PlaybackEngine::tick`]: crate::engine::PlaybackEngine::tick
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
