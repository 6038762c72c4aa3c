//! Component grid
//!
//! Cards are laid out `GRID_COLUMNS` per row and scrolled so the card under
//! the cursor is always on screen.

use ratatui::{prelude::*, widgets::Block};

use crate::{
    core::state::{ui::GRID_COLUMNS, AppState, Focus},
    presentation::widgets::component_card::{ComponentCardWidget, CARD_HEIGHT},
};

#[derive(Debug, Clone, Default)]
pub struct GridComponent;

impl GridComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let accent = styles.accent(state.view.theme_class);
        let focused = state.ui.focus == Focus::Components;

        let title_style = if focused {
            Style::default().fg(accent).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default().title(Line::from(" Components ").style(title_style));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        let cursor_row = state.ui.component_cursor / GRID_COLUMNS;
        let first_row = first_visible_row(cursor_row, visible_rows);

        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
        let selected_style = styles.get_or_default("card.selected");

        for (row_index, row_area) in rows.iter().enumerate() {
            let columns =
                Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row_area);
            for (column, cell) in columns.iter().enumerate() {
                let index = (first_row + row_index) * GRID_COLUMNS + column;
                let Some(card) = state.view.grid.get(index) else {
                    return;
                };
                let widget = ComponentCardWidget::new(card, accent)
                    .cursor(focused && index == state.ui.component_cursor)
                    .selected_style(selected_style);
                frame.render_widget(widget, *cell);
            }
        }
    }
}

/// First grid row to draw so that `cursor_row` stays inside the window
pub fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    cursor_row.saturating_sub(visible_rows.saturating_sub(1))
}
