use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Zero-padded to two digits; longer values (100+ days) keep all digits.
pub fn format_value(value: u64) -> String {
    format!("{:02}", value)
}

/// One unit of the countdown: the number on top, its label underneath.
pub fn render(frame: &mut Frame, area: Rect, label: &str, value: u64, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.block_border())
        .style(theme.block());

    let lines = vec![
        Line::from(Span::styled(format_value(value), theme.block_value())),
        Line::from(Span::styled(label.to_uppercase(), theme.block_label())),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
