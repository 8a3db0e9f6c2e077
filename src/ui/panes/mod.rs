//! TUI pane rendering modules
//!
//! - [`source`]: reference listing with the active line highlighted
//! - [`array`]: the current data view as bars, with per-index markers
//! - [`trace`]: traced variables and the auxiliary view
//! - [`status`]: step counter, messages, overrun warning and key hints

pub mod array;
pub mod source;
pub mod status;
pub mod trace;

pub use array::{marker_color, render_array_pane};
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;
