//! # pagesmith - landing page configurator for the terminal
//!
//! Pick components from a catalog, choose a theme and a layout, and watch the
//! price breakdown and a live page preview follow every change.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state, including the rendered output regions
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): the pure state transition and its Event Wiring
//! - **Command** (`core::cmd`): side effects, executed by `core::cmd_executor`
//! - **View** (`presentation`): stateless components drawing the state
//!
//! Domain rules (catalog, selection, pricing, preview composition, export)
//! live in `domain` and know nothing about the terminal.
//!
//! ## Example
//!
//! ```rust
//! use pagesmith::core::{
//!     msg::{selection::SelectionMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! assert_eq!(state.view.prices.total, 2850);
//!
//! let (state, _cmds) = update(Msg::Selection(SelectionMsg::ToggleComponent(3)), state);
//! assert_eq!(state.view.prices.total, 3550);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
