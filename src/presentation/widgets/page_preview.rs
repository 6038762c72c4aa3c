use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::preview::{BlockKind, ColumnTemplate, LayoutSpacing, Preview, PreviewBlock};

/// Spacing values are expressed in pixels; one terminal cell stands for ten
const PX_PER_CELL: u16 = 10;

pub struct PagePreviewWidget<'a> {
    preview: &'a Preview,
    accent: Color,
}

impl<'a> PagePreviewWidget<'a> {
    pub fn new(preview: &'a Preview, accent: Color) -> Self {
        Self { preview, accent }
    }

    fn block_style(&self, kind: BlockKind) -> Style {
        match kind {
            BlockKind::Header | BlockKind::Footer => Style::default().fg(Color::Gray).bg(Color::DarkGray),
            BlockKind::Hero => Style::default().fg(Color::Black).bg(self.accent).bold(),
            BlockKind::CallToAction => Style::default().fg(self.accent).bold().reversed(),
            _ => Style::default().fg(self.accent),
        }
    }

    fn block_line(&self, block: &'a PreviewBlock) -> Line<'a> {
        let mut spans = vec![Span::raw("▌ ")];
        if let Some(icon) = block.icon {
            spans.push(Span::raw(icon.glyph()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(block.label.as_str()));
        Line::from(spans).style(self.block_style(block.kind))
    }
}

/// Number of columns an auto-fit template yields for `width` cells
pub fn column_count(spacing: LayoutSpacing, width: u16) -> u16 {
    match spacing.columns {
        ColumnTemplate::Single => 1,
        ColumnTemplate::AutoFit { min_width } => {
            let gap = spacing.gap / PX_PER_CELL;
            let min_cells = (min_width / PX_PER_CELL).max(1);
            (width.saturating_add(gap) / min_cells.saturating_add(gap)).max(1)
        }
    }
}

impl Widget for PagePreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spacing = self.preview.spacing();
        let padding = spacing.padding.unwrap_or_default() / PX_PER_CELL;
        let inner = area.inner(Margin::new(padding * 2, padding));
        let gap = spacing.gap / PX_PER_CELL;
        let columns = column_count(spacing, inner.width);

        let mut y = inner.y;
        for row in self.preview.blocks().chunks(usize::from(columns)) {
            if y >= inner.bottom() {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            let cells = Layout::horizontal(vec![Constraint::Fill(1); usize::from(columns)])
                .spacing(gap)
                .split(row_area);
            for (block, cell) in row.iter().zip(cells.iter()) {
                Paragraph::new(self.block_line(block)).render(*cell, buf);
            }
            y = y.saturating_add(1 + gap);
        }
    }
}
