use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::export_dialog::ExportDialogWidget};

/// Modal overlay shown after an export
#[derive(Debug, Clone, Default)]
pub struct ExportDialogComponent;

impl ExportDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(export) = state.view.export_dialog.as_ref() else {
            return;
        };
        let accent = state.config.config.styles.accent(state.view.theme_class);
        frame.render_widget(ExportDialogWidget::new(export, accent), area);
    }
}
