use serde::{Deserialize, Serialize};

use crate::domain::{catalog::Catalog, selection::SelectionState};

/// Fixed base price of every project
pub const BASE_PRICE: u64 = 1500;

/// Urgency markup on the base price, in percent
pub const URGENCY_PERCENT: u64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: u64,
    pub components_subtotal: u64,
    pub urgency_surcharge: u64,
    pub total: u64,
}

/// Surcharge for an urgent order; integer division truncates toward zero
pub fn urgency_surcharge(base: u64) -> u64 {
    base * URGENCY_PERCENT / 100
}

/// Price a selection against the catalog
pub fn compute_price(selection: &SelectionState, catalog: &Catalog) -> PriceBreakdown {
    let components_subtotal = catalog
        .iter()
        .filter(|item| selection.is_selected(item.id))
        .map(|item| item.price)
        .sum();

    let urgency_surcharge = if selection.urgency_enabled {
        urgency_surcharge(BASE_PRICE)
    } else {
        0
    };

    PriceBreakdown {
        base: BASE_PRICE,
        components_subtotal,
        urgency_surcharge,
        total: BASE_PRICE + components_subtotal + urgency_surcharge,
    }
}
