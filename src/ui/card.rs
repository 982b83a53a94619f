//! A single countdown card: title, four time blocks, gradient divider and
//! the target in its anchored zone. Stateless; everything comes from the
//! [`CardState`] passed in.

use crate::app::state::CardState;
use crate::ui::layout::card_layout;
use crate::ui::theme::{gradient, Theme};
use crate::ui::time_block;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, card: &CardState) {
    let theme = &card.spec.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border())
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", card.id + 1),
            theme.card_border(),
        )))
        .padding(Padding::horizontal(2))
        .style(theme.card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = card_layout(inner);

    render_title(frame, layout.title, card, theme);

    let r = &card.remaining;
    let units = [
        ("Days", r.days),
        ("Hours", r.hours),
        ("Minutes", r.minutes),
        ("Seconds", r.seconds),
    ];
    for ((label, value), rect) in units.into_iter().zip(layout.blocks) {
        time_block::render(frame, rect, label, value, theme);
    }

    render_divider(frame, layout.divider, theme);

    let target = Paragraph::new(Line::from(Span::styled(
        format!("Target: {}", card.spec.target_display()),
        theme.subtitle(),
    )));
    frame.render_widget(target, layout.target);
}

fn render_title(frame: &mut Frame, area: Rect, card: &CardState, theme: &Theme) {
    let subtitle = card.spec.subtitle.as_deref().unwrap_or("");
    let subtitle_width = u16::try_from(subtitle.width()).unwrap_or(u16::MAX);
    let title_width = u16::try_from(card.spec.title.width()).unwrap_or(u16::MAX);

    // Subtitle only when it fits beside the title
    let (title_area, subtitle_area) = if !subtitle.is_empty()
        && title_width.saturating_add(subtitle_width).saturating_add(2) <= area.width
    {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(subtitle_width)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(card.spec.title.as_str(), theme.card_title())),
        title_area,
    );
    if let Some(rect) = subtitle_area {
        frame.render_widget(
            Paragraph::new(Span::styled(subtitle, theme.subtitle())),
            rect,
        );
    }
}

fn render_divider(frame: &mut Frame, area: Rect, theme: &Theme) {
    let stops = theme.divider_stops();
    let spans: Vec<Span> = gradient(&stops, area.width as usize)
        .into_iter()
        .map(|color| Span::styled("─", Style::default().fg(color).bg(theme.panel)))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
