use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 11;
const CARD_MAX_WIDTH: u16 = 96;
const BLOCK_WIDTH: u16 = 12;
const BLOCK_HEIGHT: u16 = 4;

pub struct AppLayout {
    pub header: Rect,
    pub cards: Vec<Rect>,
    pub status_bar: Rect,
}

pub struct CardLayout {
    pub title: Rect,
    pub blocks: [Rect; 4],
    pub divider: Rect,
    pub target: Rect,
}

pub fn compute_layout(area: Rect, card_count: usize) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header + breathing room
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = centered_column(main_chunks[0]);
    let content = centered_column(main_chunks[1]);
    let status_bar = main_chunks[2];

    let mut constraints: Vec<Constraint> = (0..card_count)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .spacing(1)
        .constraints(constraints)
        .split(content);

    AppLayout {
        header,
        cards: card_chunks[..card_count].to_vec(),
        status_bar,
    }
}

/// Split the inside of a card (borders already removed).
pub fn card_layout(inner: Rect) -> CardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title / subtitle
            Constraint::Length(1),            // Gap
            Constraint::Length(BLOCK_HEIGHT), // Time blocks
            Constraint::Length(1),            // Gap
            Constraint::Length(1),            // Divider
            Constraint::Length(1),            // Target
        ])
        .split(inner);

    let blocks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Length(BLOCK_WIDTH),
            Constraint::Length(BLOCK_WIDTH),
            Constraint::Length(BLOCK_WIDTH),
            Constraint::Length(BLOCK_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[2]);

    CardLayout {
        title: rows[0],
        blocks: [blocks[0], blocks[1], blocks[2], blocks[3]],
        divider: rows[4],
        target: rows[5],
    }
}

fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect {
        x,
        width,
        ..area
    }
}
