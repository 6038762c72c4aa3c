use ratatui::{prelude::*, widgets::Paragraph};

/// One labelled group of mutually exclusive buttons, e.g. `Theme  [Blue] Green Purple`
///
/// The active option is bracketed and drawn in the accent colour; the option
/// under the cursor is underlined while the group has focus.
pub struct OptionRow<'a> {
    label: &'a str,
    options: Vec<&'a str>,
    active: Option<usize>,
    cursor: Option<usize>,
    focused: bool,
    accent: Color,
}

impl<'a> OptionRow<'a> {
    pub fn new(label: &'a str, options: Vec<&'a str>, accent: Color) -> Self {
        Self {
            label,
            options,
            active: None,
            cursor: None,
            focused: false,
            accent,
        }
    }

    pub fn active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }

    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn label_span(&self) -> Span<'a> {
        let style = if self.focused {
            Style::default().fg(self.accent).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let pointer = if self.focused { "▶ " } else { "  " };
        Span::styled(format!("{pointer}{:<9}", self.label), style)
    }

    fn option_span(&self, index: usize, option: &'a str) -> Span<'a> {
        let is_active = self.active == Some(index);
        let mut style = if is_active {
            Style::default().fg(self.accent).bold()
        } else {
            Style::default()
        };
        if self.focused && self.cursor == Some(index) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }

        let text = if is_active {
            format!("[{option}]")
        } else {
            format!(" {option} ")
        };
        Span::styled(text, style)
    }
}

impl Widget for OptionRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![self.label_span()];
        for (index, option) in self.options.iter().enumerate() {
            spans.push(self.option_span(index, option));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_row(row: OptionRow<'_>) -> (String, Buffer) {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        row.render(area, &mut buf);
        let text = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|cell| cell.symbol().to_string()))
            .collect::<String>();
        (text.trim_end().to_string(), buf)
    }

    #[test]
    fn test_active_option_is_bracketed() {
        let row = OptionRow::new("Layout", vec!["Standard", "Minimal"], Color::Blue).active(1);

        let (text, _) = render_row(row);

        assert_eq!(text, "  Layout    Standard  [Minimal]");
    }

    #[test]
    fn test_focused_row_has_pointer_and_cursor() {
        let row = OptionRow::new("Theme", vec!["Blue", "Green"], Color::Blue)
            .active(0)
            .cursor(1)
            .focused(true);

        let (text, buf) = render_row(row);

        assert!(text.starts_with("▶ Theme"));
        let cursor_cell = buf.cell((19, 0)).map(|cell| cell.modifier);
        assert_eq!(
            cursor_cell.map(|m| m.contains(Modifier::REVERSED)),
            Some(true)
        );
    }
}
