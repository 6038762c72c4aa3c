//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! Each one owns a screen region and hands display data to the widgets.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::{AppState, Focus},
    presentation::widgets::status_bar::StatusBarWidget,
};

pub mod export_dialog;
pub mod grid;
pub mod preview;
pub mod settings;
pub mod totals;

pub use export_dialog::ExportDialogComponent;
pub use grid::GridComponent;
pub use preview::PreviewComponent;
pub use settings::SettingsComponent;
pub use totals::TotalsComponent;

/// Collection of all components
pub struct Components {
    pub grid: GridComponent,
    pub settings: SettingsComponent,
    pub totals: TotalsComponent,
    pub preview: PreviewComponent,
    pub export_dialog: ExportDialogComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            grid: GridComponent::new(),
            settings: SettingsComponent::new(),
            totals: TotalsComponent::new(),
            preview: PreviewComponent::new(),
            export_dialog: ExportDialogComponent::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let accent = state.config.config.styles.accent(state.view.theme_class);

        // Create layout: [title row, main area, status bar (2 rows)]
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" pagesmith ", Style::default().fg(Color::Black).bg(accent).bold()),
                Span::raw(" landing page builder"),
            ])),
            layout[0],
        );

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(layout[1]);
        self.grid.view(state, frame, left);

        let [settings, totals, preview] = Layout::vertical([
            Constraint::Length(SettingsComponent::height(state)),
            Constraint::Length(TotalsComponent::height(state)),
            Constraint::Min(0),
        ])
        .areas(right);
        self.settings.view(state, frame, settings);
        self.totals.view(state, frame, totals);
        self.preview.view(state, frame, preview);

        let status_bar = StatusBarWidget::new(
            state.system.status_message().map(String::as_str),
            key_hints(state),
        )
        .hint_style(state.config.config.styles.get_or_default("status"));
        frame.render_widget(status_bar, layout[2]);

        // Modal overlay goes last so it sits on top
        self.export_dialog.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

/// Hints for the keys that do something right now
fn key_hints(state: &AppState) -> &'static str {
    if state.is_dialog_open() {
        return " Enter/Esc close";
    }
    match state.ui.focus {
        Focus::Components => " ←↑↓→ move  Enter toggle  Tab next  e export  q quit",
        Focus::Urgency => " Enter toggle urgency  Tab next  q quit",
        Focus::AbTesting => " Enter toggle A/B  Tab next  q quit",
        Focus::Export => " Enter export  Tab next  q quit",
        Focus::Theme | Focus::Layout | Focus::AbVariant => {
            " ←→ move  Enter choose  Tab next  q quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{selection::SelectionMsg, system::SystemMsg, Msg},
            update::update,
        },
        infrastructure::tui::{test::TestTui, TuiLike},
    };

    fn render(state: &AppState, tui: &mut TestTui) -> color_eyre::Result<()> {
        let mut components = Components::new();
        tui.draw(&mut |frame| components.render(frame, state))
    }

    #[test]
    fn test_full_screen_render() -> color_eyre::Result<()> {
        let state = AppState::default();
        let mut tui = TestTui::new(120, 40)?;

        render(&state, &mut tui)?;

        assert!(tui.line(0).starts_with(" pagesmith "));
        assert!(tui.contains_text("Animated Hero Section"));
        assert!(tui.contains_text("[Blue]"));
        assert!(tui.contains_text("$2,850"));
        assert!(tui.contains_text("Preview · Blue · Standard"));
        assert!(tui.line(39).contains("Tab next"));
        Ok(())
    }

    #[test]
    fn test_status_message_is_shown() -> color_eyre::Result<()> {
        let state = AppState::default();
        let (state, _) = update(Msg::Selection(SelectionMsg::SetLayout("minimal".into())), state);
        let mut tui = TestTui::new(120, 40)?;

        render(&state, &mut tui)?;

        assert_eq!(tui.line(38), "[Layout] minimal");
        Ok(())
    }

    #[test]
    fn test_export_dialog_overlays_screen() -> color_eyre::Result<()> {
        let state = AppState::default();
        let (state, _) = update(Msg::System(SystemMsg::InitialRenderCompleted), state);
        let (state, _) = update(Msg::Selection(SelectionMsg::Export), state);
        let mut tui = TestTui::new(120, 40)?;

        render(&state, &mut tui)?;

        assert!(tui.contains_text("Project exported!"));
        assert!(tui.contains_text("Total: $2850"));
        assert_eq!(key_hints(&state), " Enter/Esc close");
        Ok(())
    }
}
