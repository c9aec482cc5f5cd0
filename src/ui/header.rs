use crate::format::format_count;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, population: i64) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(ACCENT);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("PPV Calculator", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled("diagnostic test characteristics → predictive value", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("population {}", format_count(population)), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
