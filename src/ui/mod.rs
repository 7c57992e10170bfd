//! UI modules for the Flight Globe application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title and status
//! - Left panel: Airport search and route list
//! - Central canvas: Interactive globe
//! - Right panel: Display settings, view and export controls

mod canvas;
mod colors;
mod left_panel;
mod right_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use left_panel::render_left_panel;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
