use crate::calc::Param;
use crate::format::{format_count, format_pct, format_ppv, NOT_APPLICABLE};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, card_grid, layout_regions};
use crate::ui::theme::{
    ACCENT, CELL_CORRECT, CELL_WRONG, EDIT_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    SLIDER_FILL, SLIDER_TRACK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Columns reserved at the right edge of a control group for the numeric
/// field.
const VALUE_FIELD_WIDTH: usize = 9;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.population()), header);

    let (controls, result, grid) = body_regions(body);
    for (rect, param) in controls.into_iter().zip(Param::ALL) {
        draw_control(frame, rect, app, param);
    }
    draw_result(frame, result, app);
    draw_cells(frame, grid, app);

    frame.render_widget(
        Footer::new().widget(footer, app.screen().is_editing()),
        footer,
    );
}

/// One control group: a label, a slider, and a numeric field, all bound to
/// the same stored percentage.
fn draw_control(frame: &mut Frame<'_>, rect: Rect, app: &App, param: Param) {
    let screen = app.screen();
    let focused = screen.focused == param;
    let editing = focused && screen.is_editing();
    let pct = screen.params.get(param);

    let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", param.label()),
            Style::default().fg(if focused { ACCENT } else { HEADER_TEXT }),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_width = rect.width.saturating_sub(2) as usize;
    let bar_width = inner_width.saturating_sub(VALUE_FIELD_WIDTH + 1);
    let filled = if pct.is_finite() {
        let frac = (pct / 100.0).clamp(0.0, 1.0);
        (bar_width as f64 * frac).round() as usize
    } else {
        0
    };

    let value_span = if editing {
        let buffer = screen.edit.as_deref().unwrap_or("");
        Span::styled(
            format!("{:>width$}▏", buffer, width = VALUE_FIELD_WIDTH - 1),
            Style::default().fg(EDIT_TEXT),
        )
    } else {
        let text = if pct.is_finite() {
            format!("{}%", format_pct(pct))
        } else {
            NOT_APPLICABLE.to_string()
        };
        Span::styled(
            format!("{:>width$}", text, width = VALUE_FIELD_WIDTH),
            Style::default().fg(HEADER_TEXT),
        )
    };

    let line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(SLIDER_FILL)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(SLIDER_TRACK),
        ),
        Span::raw(" "),
        value_span,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), rect);
}

fn draw_result(frame: &mut Frame<'_>, rect: Rect, app: &App) {
    let text = format_ppv(app.ppv());
    let style = if text == NOT_APPLICABLE {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(
            "P(disease │ positive test) = ",
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(text, style),
    ]);

    let block = Block::default()
        .title(Span::styled(
            " Positive Predictive Value ",
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        rect,
    );
}

fn draw_cells(frame: &mut Frame<'_>, rect: Rect, app: &App) {
    let cells = app.cells();
    let counts = cells.map(|c| {
        [
            c.true_positives,
            c.false_positives,
            c.true_negatives,
            c.false_negatives,
        ]
    });
    let labels = [
        ("True Positives", CELL_CORRECT),
        ("False Positives", CELL_WRONG),
        ("True Negatives", CELL_CORRECT),
        ("False Negatives", CELL_WRONG),
    ];

    for (i, card) in card_grid(rect).into_iter().enumerate() {
        let (label, color) = labels[i];
        let (text, style) = match counts {
            Some(values) => (
                format_count(values[i]),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            None => (
                NOT_APPLICABLE.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(HEADER_TEXT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style)))
                .alignment(Alignment::Center)
                .block(block),
            card,
        );
    }
}
