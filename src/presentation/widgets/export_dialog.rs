use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::domain::export::ProjectExport;

/// Modal confirmation of an export, centred in the given area
pub struct ExportDialogWidget<'a> {
    export: &'a ProjectExport,
    accent: Color,
}

impl<'a> ExportDialogWidget<'a> {
    pub fn new(export: &'a ProjectExport, accent: Color) -> Self {
        Self { export, accent }
    }

    pub fn popup_area(area: Rect, lines: u16) -> Rect {
        let width = area.width.min(44);
        let height = area.height.min(lines + 4);
        let [vertical] = Layout::vertical([Constraint::Length(height)])
            .flex(layout::Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(layout::Flex::Center)
            .areas(vertical);
        popup
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = self
            .export
            .summary()
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        lines.push(Line::from(format!(
            "Components: {}",
            self.export.components.len()
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter/Esc to close",
            Style::default().fg(Color::Gray).italic(),
        )));
        lines
    }
}

impl Widget for ExportDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let popup = Self::popup_area(area, u16::try_from(lines.len()).unwrap_or(u16::MAX));
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.accent))
            .title(Line::from(" Export ").bold().centered());

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::Catalog,
        options::{Layout as PageLayout, Theme},
        selection::SelectionState,
    };

    #[test]
    fn test_dialog_shows_summary() {
        let catalog = Catalog::builtin();
        let selection = SelectionState::new(&catalog, Theme::Green, PageLayout::Minimal);
        let export = ProjectExport::snapshot(&selection, &catalog, 2850);
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        ExportDialogWidget::new(&export, Color::Green).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect::<String>()
                    + "\n"
            })
            .collect();
        assert!(text.contains("Project exported!"));
        assert!(text.contains("Theme: green"));
        assert!(text.contains("Layout: minimal"));
        assert!(text.contains("Total: $2850"));
        assert!(text.contains("Components: 3"));
    }

    #[test]
    fn test_popup_is_centred() {
        let popup = ExportDialogWidget::popup_area(Rect::new(0, 0, 84, 24), 6);

        assert_eq!(popup, Rect::new(20, 7, 44, 10));
    }
}
