use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::Catalog,
    options::{AbVariant, Layout, Theme},
};

/// The mutable record of everything the user has chosen
///
/// Setters only mutate; re-rendering and re-pricing is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_ids: BTreeSet<u32>,
    pub theme: Theme,
    pub layout: Layout,
    pub urgency_enabled: bool,
    pub ab_testing_enabled: bool,
    pub ab_variant: AbVariant,
}

impl SelectionState {
    /// Initial selection from the catalog's default flags
    pub fn new(catalog: &Catalog, theme: Theme, layout: Layout) -> Self {
        Self {
            selected_ids: catalog.default_selection(),
            theme,
            layout,
            ..Default::default()
        }
    }

    pub fn selected_ids(&self) -> &BTreeSet<u32> {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Flip membership of `id`. Unknown ids are ignored and return `false`.
    pub fn toggle_component(&mut self, id: u32, catalog: &Catalog) -> bool {
        if !catalog.contains(id) {
            return false;
        }

        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
        true
    }

    /// Returns `false` and keeps the current theme when `theme_id` is unknown
    pub fn set_theme(&mut self, theme_id: &str) -> bool {
        match Theme::from_str(theme_id) {
            Ok(theme) => {
                self.theme = theme;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `false` and keeps the current layout when `layout_id` is unknown
    pub fn set_layout(&mut self, layout_id: &str) -> bool {
        match Layout::from_str(layout_id) {
            Ok(layout) => {
                self.layout = layout;
                true
            }
            Err(_) => false,
        }
    }

    /// Does not touch the chosen variant
    pub fn set_ab_testing(&mut self, enabled: bool) {
        self.ab_testing_enabled = enabled;
    }

    /// Allowed while A/B testing is off; it just has no visible effect yet
    pub fn set_ab_variant(&mut self, variant_id: &str) -> bool {
        match AbVariant::from_str(variant_id) {
            Ok(variant) => {
                self.ab_variant = variant;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_urgency(&mut self, enabled: bool) {
        self.urgency_enabled = enabled;
    }

    /// Variant the call-to-action should show, `None` while testing is off
    pub fn active_variant(&self) -> Option<AbVariant> {
        self.ab_testing_enabled.then_some(self.ab_variant)
    }
}
