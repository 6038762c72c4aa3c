use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::Catalog,
    options::{Layout, Theme},
    selection::SelectionState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedComponent {
    pub id: u32,
    pub name: String,
    pub price: u64,
}

/// Plain snapshot of the configured project. Nothing is written anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectExport {
    pub theme: Theme,
    pub layout: Layout,
    pub components: Vec<ExportedComponent>,
    pub total: u64,
}

impl ProjectExport {
    /// `displayed_total` is the total currently shown, not a fresh computation
    pub fn snapshot(selection: &SelectionState, catalog: &Catalog, displayed_total: u64) -> Self {
        let components = catalog
            .iter()
            .filter(|item| selection.is_selected(item.id))
            .map(|item| ExportedComponent {
                id: item.id,
                name: item.name.clone(),
                price: item.price,
            })
            .collect();

        Self {
            theme: selection.theme,
            layout: selection.layout,
            components,
            total: displayed_total,
        }
    }

    /// Confirmation text shown to the user
    pub fn summary(&self) -> String {
        format!(
            "Project exported!\nTheme: {}\nLayout: {}\nTotal: ${}",
            self.theme, self.layout, self.total
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
