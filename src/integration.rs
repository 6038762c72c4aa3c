//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - `Runtime` owns the state and message queues
//! - `AppRunner` turns terminal events into update cycles and draws
//! - `Coalescer` collapses redundant renders and resizes

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
