use ratatui::{prelude::*, widgets::Paragraph};

/// Two rows: the last status message and a key hint line
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hints: &'a str,
    hint_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hints: &'a str) -> Self {
        Self {
            message,
            hints,
            hint_style: Style::default().fg(Color::Gray).italic(),
        }
    }

    pub fn hint_style(mut self, style: Style) -> Self {
        self.hint_style = style;
        self
    }

    fn message_style(&self) -> Style {
        match self.message {
            Some(message) if message.starts_with("[ERR") => Style::default().fg(Color::Red),
            _ => Style::default(),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Status message line
                Constraint::Length(1), // Key hints line
            ],
        )
        .split(area);

        Paragraph::new(self.message.unwrap_or_default())
            .style(self.message_style())
            .render(layout[1], buf);

        Paragraph::new(Span::styled(self.hints, self.hint_style))
        .style(Style::default().bg(Color::Black))
        .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(widget: StatusBarWidget<'_>) -> Buffer {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_message_and_hints() {
        let buf = render(StatusBarWidget::new(Some("[Theme] green"), "q quit"));

        assert_eq!(row(&buf, 0), "[Theme] green");
        assert_eq!(row(&buf, 1), "q quit");
    }

    #[test]
    fn test_empty_message() {
        let buf = render(StatusBarWidget::new(None, "q quit"));

        assert_eq!(row(&buf, 0), "");
    }

    #[test]
    fn test_error_message_is_red() {
        let buf = render(StatusBarWidget::new(Some("[ERR: Runtime] boom"), ""));

        assert_eq!(buf.cell((0, 0)).map(|cell| cell.fg), Some(Color::Red));
    }
}
