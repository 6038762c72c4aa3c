//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components that lay out the screen
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
