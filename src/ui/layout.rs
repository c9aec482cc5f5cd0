use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this get the stacked 2×2 confusion grid.
const WIDE_GRID_MIN_WIDTH: u16 = 88;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the three control groups, the result panel, and the
/// confusion grid.
pub fn body_regions(body: Rect) -> (Vec<Rect>, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(body);
    (rows[0..3].to_vec(), rows[3], rows[4])
}

/// Lay out the four count cards: one row on wide terminals, a 2×2 grid on
/// narrow ones.
pub fn card_grid(area: Rect) -> Vec<Rect> {
    if area.width >= WIDE_GRID_MIN_WIDTH {
        let quarters = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);
        return quarters.to_vec();
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let mut cells = Vec::with_capacity(4);
    for row in rows.iter() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(halves.iter().copied());
    }
    cells
}
