//! Output regions the renderer draws from
//!
//! Every region is overwritten wholesale by the Event Wiring in
//! `core::update`; widgets never compute domain values themselves.

use crate::domain::{
    catalog::Catalog,
    export::ProjectExport,
    grid::{build_grid, ComponentCard},
    options::{AbVariant, Layout, Theme},
    preview::{build_preview, Preview},
    pricing::compute_price,
    selection::SelectionState,
};

/// Displayed price breakdown fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceDisplay {
    pub components: u64,
    /// `None` until the urgency row has been injected
    pub urgency: Option<u64>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub grid: Vec<ComponentCard>,
    pub prices: PriceDisplay,
    pub preview: Preview,
    /// Global style class; only changes when a valid theme is chosen
    pub theme_class: Theme,
    pub ab_section_visible: bool,
    pub export_dialog: Option<ProjectExport>,
}

impl ViewState {
    /// First full render of every region
    pub fn initial(catalog: &Catalog, selection: &SelectionState) -> Self {
        let mut view = Self {
            theme_class: selection.theme,
            ab_section_visible: selection.ab_testing_enabled,
            ..Default::default()
        };
        view.render_grid(catalog, selection);
        view.render_prices(catalog, selection);
        view.render_preview(catalog, selection);
        view
    }

    pub fn render_grid(&mut self, catalog: &Catalog, selection: &SelectionState) {
        self.grid = build_grid(catalog, selection);
    }

    /// Write the breakdown fields; the urgency field is only written once it exists
    pub fn render_prices(&mut self, catalog: &Catalog, selection: &SelectionState) {
        let price = compute_price(selection, catalog);
        self.prices.components = price.components_subtotal;
        self.prices.total = price.total;
        if let Some(urgency) = self.prices.urgency.as_mut() {
            *urgency = price.urgency_surcharge;
        }
    }

    pub fn render_preview(&mut self, catalog: &Catalog, selection: &SelectionState) {
        self.preview = build_preview(catalog, selection);
    }

    pub fn apply_layout(&mut self, layout: Layout) {
        self.preview.apply_layout(layout);
    }

    pub fn apply_variant(&mut self, variant: AbVariant) -> bool {
        self.preview.apply_variant(variant)
    }

    pub fn has_urgency_row(&self) -> bool {
        self.prices.urgency.is_some()
    }

    /// Add the urgency row to the breakdown. Returns `false` if it already exists.
    pub fn inject_urgency_row(&mut self) -> bool {
        if self.has_urgency_row() {
            return false;
        }
        self.prices.urgency = Some(0);
        true
    }
}
