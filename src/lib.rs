//! statusboard - live status page for a local agent host
//!
//! Collects container state, Ollama model inventory, GPU, memory and disk
//! usage on every request and renders them as a single self-refreshing
//! HTML page.

pub mod api;
pub mod cli;
pub mod collect;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod render;
