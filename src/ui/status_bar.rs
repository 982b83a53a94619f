use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut parts: Vec<Span> = vec![Span::styled(format!(" {} ", state.page.footer), theme.muted())];

    let hidden = state.hidden_count();
    if hidden > 0 {
        parts.push(Span::styled(format!(" | {} hidden ", hidden), theme.muted()));
    }

    // Key hints pinned to the right edge
    let hints = key_hints(state.cards.len());
    let hint_width: usize = hints.iter().map(|(t, _)| t.width()).sum();
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint_width);
    parts.push(Span::styled(" ".repeat(remaining), theme.muted()));
    parts.extend(hints.into_iter().map(|(text, key)| {
        if key {
            Span::styled(text, theme.key_hint())
        } else {
            Span::styled(text, theme.muted())
        }
    }));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// `(text, is_key)` pieces, e.g. ` 1-2 toggle  q quit `.
fn key_hints(card_count: usize) -> Vec<(String, bool)> {
    let mut hints = Vec::new();
    match card_count.min(9) {
        0 => {}
        1 => hints.push((" 1".to_string(), true)),
        n => hints.push((format!(" 1-{}", n), true)),
    }
    if !hints.is_empty() {
        hints.push((" toggle ".to_string(), false));
    }
    hints.push((" q".to_string(), true));
    hints.push((" quit ".to_string(), false));
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(hints: &[(String, bool)]) -> String {
        hints.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn test_key_hints() {
        assert_eq!(text(&key_hints(2)), " 1-2 toggle  q quit ");
        assert_eq!(text(&key_hints(1)), " 1 toggle  q quit ");
        assert_eq!(text(&key_hints(0)), " q quit ");
        assert_eq!(text(&key_hints(12)), " 1-9 toggle  q quit ");
    }
}
