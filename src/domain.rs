//! Domain layer
//!
//! Pure configurator logic with no terminal or I/O dependencies:
//! - Component catalog and option groups
//! - Selection state and its setters
//! - Pricing engine
//! - Grid and preview renderers
//! - Project export snapshot

pub mod catalog;
pub mod export;
pub mod grid;
pub mod options;
pub mod preview;
pub mod pricing;
pub mod selection;
