use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::domain::grid::ComponentCard;

/// Rows a card needs, borders included
pub const CARD_HEIGHT: u16 = 6;

pub struct ComponentCardWidget<'a> {
    card: &'a ComponentCard,
    accent: Color,
    has_cursor: bool,
    selected_style: Style,
}

impl<'a> ComponentCardWidget<'a> {
    pub fn new(card: &'a ComponentCard, accent: Color) -> Self {
        Self {
            card,
            accent,
            has_cursor: false,
            selected_style: Style::default(),
        }
    }

    pub fn cursor(mut self, has_cursor: bool) -> Self {
        self.has_cursor = has_cursor;
        self
    }

    /// Extra style patched onto the marker of a selected card
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    fn marker(&self) -> Span<'static> {
        if self.card.selected {
            Span::styled(
                "[x] Selected",
                Style::default().fg(self.accent).patch(self.selected_style),
            )
        } else {
            Span::styled("[ ] Add", Style::default().fg(Color::DarkGray))
        }
    }

    fn tags(&self) -> Line<'a> {
        let spans: Vec<Span> = self
            .card
            .tags
            .iter()
            .map(|tag| Span::styled(format!("#{tag} "), Style::default().fg(Color::DarkGray)))
            .collect();
        Line::from(spans)
    }
}

impl Widget for ComponentCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match (self.card.selected, self.has_cursor) {
            (_, true) => Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.accent),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let border_type = if self.has_cursor {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Line::from(self.card.name.as_str()).bold())
            .title(
                Line::from(Span::styled(
                    self.card.price_label.as_str(),
                    Style::default().fg(self.accent),
                ))
                .right_aligned(),
            );

        let text = vec![
            Line::from(self.card.description.as_str()),
            self.tags(),
            Line::from(""),
            Line::from(self.marker()),
        ];

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_card(selected: bool) -> ComponentCard {
        ComponentCard {
            id: 8,
            price_label: "$1,000".to_string(),
            name: "Multilingual Support".to_string(),
            description: "RTL and 3+ languages".to_string(),
            tags: vec!["RTL".to_string(), "localization".to_string()],
            selected,
        }
    }

    fn render_card(card: &ComponentCard, has_cursor: bool) -> Buffer {
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        ComponentCardWidget::new(card, Color::Green)
            .cursor(has_cursor)
            .render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_card_shows_name_price_and_tags() {
        let buf = render_card(&create_test_card(false), false);

        assert!(row(&buf, 0).contains("Multilingual Support"));
        assert!(row(&buf, 0).contains("$1,000"));
        assert!(row(&buf, 1).contains("RTL and 3+ languages"));
        assert!(row(&buf, 2).contains("#RTL"));
        assert!(row(&buf, 4).contains("[ ] Add"));
    }

    #[test]
    fn test_selected_marker() {
        let buf = render_card(&create_test_card(true), false);

        assert!(row(&buf, 4).contains("[x] Selected"));
    }

    #[test]
    fn test_selected_style_is_patched_onto_marker() {
        let card = create_test_card(true);
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        ComponentCardWidget::new(&card, Color::Green)
            .selected_style(Style::default().add_modifier(Modifier::ITALIC))
            .render(area, &mut buf);

        let cell = buf.cell((1, 4));
        assert_eq!(cell.map(|cell| cell.fg), Some(Color::Green));
        assert_eq!(
            cell.map(|cell| cell.modifier.contains(Modifier::ITALIC)),
            Some(true)
        );
    }

    #[test]
    fn test_cursor_uses_thick_border() {
        let buf = render_card(&create_test_card(false), true);

        assert_eq!(buf.cell((0, 0)).map(|cell| cell.symbol()), Some("┏"));
    }
}
