use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::{
    core::state::{AppState, Focus},
    presentation::widgets::price_breakdown::PriceBreakdownWidget,
};

/// Price breakdown panel
#[derive(Debug, Clone, Default)]
pub struct TotalsComponent;

impl TotalsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed: borders, base, components, total and the urgency row once present
    pub fn height(state: &AppState) -> u16 {
        if state.view.has_urgency_row() {
            6
        } else {
            5
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let accent = state.config.config.styles.accent(state.view.theme_class);
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Price ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let breakdown = PriceBreakdownWidget::new(state.view.prices, accent).urgency(
            state.selection.urgency_enabled,
            state.ui.focus == Focus::Urgency,
        );
        frame.render_widget(breakdown, inner);
    }
}
