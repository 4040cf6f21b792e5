//! Live status dashboard
//!
//! Each request collects every source afresh and renders the page. The
//! document refreshes itself through a `<meta http-equiv="refresh">` tag.

pub mod handler;

pub use handler::{dashboard_handler, render_now};
