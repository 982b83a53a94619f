mod card;
mod header;
mod layout;
mod status_bar;
pub mod theme;
mod time_block;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(state.theme.canvas()), area);

    let cards: Vec<_> = state.active_cards().collect();
    let app_layout = layout::compute_layout(area, cards.len());

    header::render(frame, app_layout.header, state);
    for (card, rect) in cards.iter().zip(&app_layout.cards) {
        card::render(frame, *rect, card);
    }
    if cards.is_empty() {
        render_all_hidden(frame, app_layout.header, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_all_hidden(frame: &mut Frame, header: Rect, state: &AppState) {
    let area = Rect {
        y: header.bottom(),
        height: 1,
        ..header
    };
    let text = if state.cards.is_empty() {
        "No countdowns configured.".to_string()
    } else {
        format!("All cards hidden. Press 1-{} to show one.", state.cards.len().min(9))
    };
    frame.render_widget(Paragraph::new(Span::styled(text, state.theme.muted())), area);
}
