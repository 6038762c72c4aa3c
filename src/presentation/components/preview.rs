use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::{core::state::AppState, presentation::widgets::page_preview::PagePreviewWidget};

/// Live preview of the page being configured
#[derive(Debug, Clone, Default)]
pub struct PreviewComponent;

impl PreviewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let accent = state.config.config.styles.accent(state.view.theme_class);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(format!(
                " Preview · {} · {} ",
                state.view.theme_class.label(),
                state.selection.layout.label()
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(PagePreviewWidget::new(&state.view.preview, accent), inner);
    }
}
