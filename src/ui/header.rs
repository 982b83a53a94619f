use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let row = Rect { height: 1, ..area };

    let tagline = state.page.tagline.as_str();
    let tagline_width = u16::try_from(tagline.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(tagline_width)])
        .split(row);

    frame.render_widget(
        Paragraph::new(Span::styled(state.page.title.as_str(), theme.page_title())),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(tagline, theme.muted())).alignment(Alignment::Right),
        chunks[1],
    );
}
