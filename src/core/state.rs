pub mod system;
pub mod ui;
pub mod view;

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::{
    domain::{
        catalog::Catalog,
        options::{Layout, Theme},
        selection::SelectionState,
    },
    infrastructure::config::Config,
};

pub use system::SystemState;
pub use ui::{Focus, UiContext, UiState};
pub use view::{PriceDisplay, ViewState};

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub selection: SelectionState,
    pub view: ViewState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(
            Arc::new(Catalog::builtin()),
            Theme::default(),
            Layout::default(),
            Config::default(),
        )
    }
}

impl AppState {
    /// Initialize AppState from the loaded config
    ///
    /// The configured catalog replaces the built-in one; unknown initial
    /// theme or layout identifiers fall back to the defaults.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = match config.catalog.clone() {
            Some(items) => Catalog::new(items)?,
            None => Catalog::builtin(),
        };

        let theme = config.initial.theme.parse().unwrap_or_else(|_| {
            log::warn!(
                "unknown initial theme {:?}, using {}",
                config.initial.theme,
                Theme::default()
            );
            Theme::default()
        });
        let layout = config.initial.layout.parse().unwrap_or_else(|_| {
            log::warn!(
                "unknown initial layout {:?}, using {}",
                config.initial.layout,
                Layout::default()
            );
            Layout::default()
        });

        Ok(Self::with_catalog(Arc::new(catalog), theme, layout, config))
    }

    fn with_catalog(catalog: Arc<Catalog>, theme: Theme, layout: Layout, config: Config) -> Self {
        let selection = SelectionState::new(&catalog, theme, layout);
        let view = ViewState::initial(&catalog, &selection);
        let ui = UiState::new(&selection);

        Self {
            catalog,
            selection,
            view,
            ui,
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    /// Which control groups are reachable right now
    pub fn ui_context(&self) -> UiContext {
        UiContext {
            component_count: self.catalog.len(),
            ab_section_visible: self.view.ab_section_visible,
            urgency_row_visible: self.view.has_urgency_row(),
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.view.export_dialog.is_some()
    }

    /// Catalog id of the card under the grid cursor
    pub fn component_under_cursor(&self) -> Option<u32> {
        self.catalog.at(self.ui.component_cursor).map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::catalog::CatalogItem;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.catalog.len(), 8);
        assert_eq!(
            state.selection.selected_ids().iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 5]
        );
        assert_eq!(state.view.prices.total, 2850);
        assert_eq!(state.ui.focus, Focus::Components);
        assert!(!state.system.should_quit);
        assert!(!state.system.post_render_setup_done);
    }

    #[test]
    fn test_new_uses_initial_options() -> Result<()> {
        let mut config = Config::default();
        config.initial.theme = "dark".to_string();
        config.initial.layout = "creative".to_string();

        let state = AppState::new(config)?;

        assert_eq!(state.selection.theme, Theme::Dark);
        assert_eq!(state.view.theme_class, Theme::Dark);
        assert_eq!(state.selection.layout, Layout::Creative);
        assert_eq!(state.ui.theme_under_cursor(), Some(Theme::Dark));
        Ok(())
    }

    #[test]
    fn test_new_falls_back_on_unknown_options() -> Result<()> {
        let mut config = Config::default();
        config.initial.theme = "neon".to_string();
        config.initial.layout = "brutalist".to_string();

        let state = AppState::new(config)?;

        assert_eq!(state.selection.theme, Theme::Blue);
        assert_eq!(state.selection.layout, Layout::Standard);
        Ok(())
    }

    #[test]
    fn test_new_with_configured_catalog() -> Result<()> {
        let mut config = Config::default();
        config.catalog = Some(vec![
            CatalogItem::new(10, "Blog", "Article list", 300, &["grid"], true),
            CatalogItem::new(11, "Map", "Office location", 200, &[], false),
        ]);

        let state = AppState::new(config)?;

        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.view.prices.total, 1800);
        assert_eq!(state.component_under_cursor(), Some(10));
        Ok(())
    }

    #[test]
    fn test_new_rejects_duplicate_catalog_ids() {
        let mut config = Config::default();
        config.catalog = Some(vec![
            CatalogItem::new(1, "A", "", 100, &[], false),
            CatalogItem::new(1, "B", "", 100, &[], false),
        ]);

        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_ui_context_tracks_view() {
        let mut state = AppState::default();
        assert_eq!(
            state.ui_context(),
            UiContext {
                component_count: 8,
                ab_section_visible: false,
                urgency_row_visible: false,
            }
        );

        state.view.ab_section_visible = true;
        state.view.inject_urgency_row();

        let ctx = state.ui_context();
        assert!(ctx.ab_section_visible);
        assert!(ctx.urgency_row_visible);
    }
}
