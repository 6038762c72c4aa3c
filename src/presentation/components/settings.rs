//! Settings panel: theme, layout, A/B testing and the export button

use ratatui::{prelude::*, widgets::Paragraph};
use strum::VariantArray;

use crate::{
    core::state::{AppState, Focus},
    domain::options::{position_of, AbVariant, Layout as PageLayout, Theme},
    presentation::widgets::option_row::OptionRow,
};

#[derive(Debug, Clone, Default)]
pub struct SettingsComponent;

impl SettingsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows this panel needs for the current state
    pub fn height(state: &AppState) -> u16 {
        if state.view.ab_section_visible {
            5
        } else {
            4
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let accent = state.config.config.styles.accent(state.view.theme_class);
        let focus = state.ui.focus;
        let rows = Layout::vertical(vec![Constraint::Length(1); usize::from(Self::height(state))])
            .split(area);
        let mut rows = rows.iter().copied();

        if let Some(row) = rows.next() {
            let theme = OptionRow::new("Theme", Theme::VARIANTS.iter().map(Theme::label).collect(), accent)
                .active(position_of(&state.view.theme_class))
                .cursor(state.ui.theme_cursor)
                .focused(focus == Focus::Theme);
            frame.render_widget(theme, row);
        }

        if let Some(row) = rows.next() {
            let layout = OptionRow::new(
                "Layout",
                PageLayout::VARIANTS.iter().map(PageLayout::label).collect(),
                accent,
            )
            .active(position_of(&state.selection.layout))
            .cursor(state.ui.layout_cursor)
            .focused(focus == Focus::Layout);
            frame.render_widget(layout, row);
        }

        if let Some(row) = rows.next() {
            let enabled = usize::from(state.selection.ab_testing_enabled);
            let ab_testing = OptionRow::new("A/B Test", vec!["Off", "On"], accent)
                .active(enabled)
                .cursor(enabled)
                .focused(focus == Focus::AbTesting);
            frame.render_widget(ab_testing, row);
        }

        if state.view.ab_section_visible {
            if let Some(row) = rows.next() {
                let variant = OptionRow::new(
                    "Variant",
                    AbVariant::VARIANTS.iter().map(AbVariant::label).collect(),
                    accent,
                )
                .active(position_of(&state.selection.ab_variant))
                .cursor(state.ui.variant_cursor)
                .focused(focus == Focus::AbVariant);
                frame.render_widget(variant, row);
            }
        }

        if let Some(row) = rows.next() {
            frame.render_widget(export_button(focus == Focus::Export, accent), row);
        }
    }
}

fn export_button(focused: bool, accent: Color) -> Paragraph<'static> {
    let (pointer, style) = if focused {
        ("▶ ", Style::default().fg(Color::Black).bg(accent).bold())
    } else {
        ("  ", Style::default().fg(accent))
    };
    Paragraph::new(Line::from(vec![
        Span::raw(pointer),
        Span::styled("[ Export project ]", style),
    ]))
}
