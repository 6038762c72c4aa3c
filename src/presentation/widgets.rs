//! Reusable UI widgets
//!
//! Widgets render display data handed to them by components and never
//! read `AppState` directly.

pub mod component_card;
pub mod export_dialog;
pub mod option_row;
pub mod page_preview;
pub mod price_breakdown;
pub mod status_bar;
