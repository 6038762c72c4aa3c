use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::PriceDisplay,
    domain::{
        grid::price_label,
        pricing::{BASE_PRICE, URGENCY_PERCENT},
    },
};

/// Base, components, optional urgency row and total
pub struct PriceBreakdownWidget {
    prices: PriceDisplay,
    urgency_enabled: bool,
    urgency_focused: bool,
    accent: Color,
}

impl PriceBreakdownWidget {
    pub fn new(prices: PriceDisplay, accent: Color) -> Self {
        Self {
            prices,
            urgency_enabled: false,
            urgency_focused: false,
            accent,
        }
    }

    pub fn urgency(mut self, enabled: bool, focused: bool) -> Self {
        self.urgency_enabled = enabled;
        self.urgency_focused = focused;
        self
    }

    fn row(label: String, amount: u64, style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<22}"), style),
            Span::styled(format!("{:>10}", price_label(amount)), style),
        ])
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::row("Base".to_string(), BASE_PRICE, Style::default()),
            Self::row(
                "Components".to_string(),
                self.prices.components,
                Style::default(),
            ),
        ];

        if let Some(urgency) = self.prices.urgency {
            let checkbox = if self.urgency_enabled { "[x]" } else { "[ ]" };
            let mut style = Style::default().fg(Color::Yellow);
            if self.urgency_focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Self::row(
                format!("{checkbox} Urgent (+{URGENCY_PERCENT}%)"),
                urgency,
                style,
            ));
        }

        lines.push(Self::row(
            "Total".to_string(),
            self.prices.total,
            Style::default().fg(self.accent).bold(),
        ));
        lines
    }
}

impl Widget for PriceBreakdownWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn test_breakdown_without_urgency_row() {
        let widget = PriceBreakdownWidget::new(
            PriceDisplay {
                components: 1350,
                urgency: None,
                total: 2850,
            },
            Color::Blue,
        );

        assert_eq!(
            plain(&widget.lines()),
            vec!["Base $1,500", "Components $1,350", "Total $2,850"]
        );
    }

    #[test]
    fn test_breakdown_with_urgency_row() {
        let widget = PriceBreakdownWidget::new(
            PriceDisplay {
                components: 1350,
                urgency: Some(450),
                total: 3300,
            },
            Color::Blue,
        )
        .urgency(true, false);

        assert_eq!(
            plain(&widget.lines()),
            vec![
                "Base $1,500",
                "Components $1,350",
                "[x] Urgent (+30%) $450",
                "Total $3,300",
            ]
        );
    }
}
