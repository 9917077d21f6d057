//! HTML page output.
//!
//! Wraps a graph description in the embedded page that renders it with `viz.js`.

pub mod html;

pub use html::{render_page, write_page, Page};
