use crate::app::action::Action;
use crate::app::event::{AppEvent, CardId, TickerGeneration};
use crate::app::state::AppState;
use chrono::{DateTime, Utc};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, Utc::now()),
        AppEvent::Tick {
            card,
            generation,
            now,
        } => {
            handle_tick(state, card, generation, now);
            vec![]
        }
    }
}

fn handle_tick(
    state: &mut AppState,
    card: CardId,
    generation: TickerGeneration,
    now: DateTime<Utc>,
) {
    let Some(c) = state.get_card_mut(card) else {
        return;
    };
    // Ticks from a stopped ticker can still be queued after the card was
    // hidden, or hidden and shown again
    if !c.active || generation != c.ticker_generation {
        tracing::trace!(card, generation, "stale tick dropped");
        return;
    }
    if c.set_now(now) {
        tracing::trace!(card, remaining_secs = c.remaining.total_seconds(), "tick");
        if c.remaining.is_zero() {
            tracing::info!(card, title = %c.spec.title, "countdown reached zero");
        }
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: DateTime<Utc>) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, now),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: DateTime<Utc>) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(c @ '1'..='9') => {
            let card = c as usize - '1' as usize;
            toggle_card(state, card, now).into_iter().collect()
        }
        _ => vec![],
    }
}

/// Hide a visible card or bring a hidden one back. Hiding stops its ticker;
/// showing refreshes `now` right away and starts a new one.
fn toggle_card(state: &mut AppState, card: CardId, now: DateTime<Utc>) -> Option<Action> {
    let c = state.get_card_mut(card)?;
    c.active = !c.active;
    let action = if c.active {
        c.set_now(now);
        c.ticker_generation += 1;
        Action::StartTicker {
            card,
            generation: c.ticker_generation,
        }
    } else {
        Action::StopTicker { card }
    };
    tracing::info!(card, title = %c.spec.title, active = c.active, "card toggled");
    state.dirty = true;
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{spec, utc};
    use crate::config::model::PageConfig;
    use crate::ui::theme::Theme;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(
            PageConfig::default(),
            Theme::default(),
            vec![
                spec("Q3", "2025-10-31T23:59:59"),
                spec("FY26", "2026-01-31T23:59:59"),
            ],
            utc("2025-10-31T00:00:00Z"),
        )
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_tick_updates_card_and_marks_dirty() {
        let mut s = state();
        s.dirty = false;
        let actions = handle_event(
            &mut s,
            AppEvent::Tick {
                card: 0,
                generation: 0,
                now: utc("2025-11-01T06:59:00Z"),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(s.cards[0].remaining.seconds, 59);
        assert_eq!(s.cards[0].remaining.minutes, 0);
        assert!(s.dirty);
        // Other cards keep their own clock
        assert_eq!(s.cards[1].now, utc("2025-10-31T00:00:00Z"));
    }

    #[test]
    fn test_tick_for_hidden_or_unknown_card_is_ignored() {
        let mut s = state();
        s.cards[1].active = false;
        s.dirty = false;
        let before = s.cards[1].remaining;
        handle_event(
            &mut s,
            AppEvent::Tick {
                card: 1,
                generation: 0,
                now: utc("2026-01-01T00:00:00Z"),
            },
        );
        handle_event(
            &mut s,
            AppEvent::Tick {
                card: 7,
                generation: 0,
                now: utc("2026-01-01T00:00:00Z"),
            },
        );
        assert_eq!(s.cards[1].remaining, before);
        assert!(!s.dirty);
    }

    #[test]
    fn test_number_keys_toggle_cards() {
        let mut s = state();
        assert_eq!(
            handle_event(&mut s, key(KeyCode::Char('2'))),
            vec![Action::StopTicker { card: 1 }]
        );
        assert!(!s.cards[1].active);
        assert_eq!(s.hidden_count(), 1);

        assert_eq!(
            handle_event(&mut s, key(KeyCode::Char('2'))),
            vec![Action::StartTicker {
                card: 1,
                generation: 1
            }]
        );
        assert!(s.cards[1].active);
        assert_eq!(s.cards[1].ticker_generation, 1);

        // No third card
        assert!(handle_event(&mut s, key(KeyCode::Char('3'))).is_empty());
    }

    #[test]
    fn test_tick_from_replaced_ticker_is_dropped() {
        let mut s = state();
        // Hide then show the first card; its old ticker may still have a tick queued
        handle_event(&mut s, key(KeyCode::Char('1')));
        handle_event(&mut s, key(KeyCode::Char('1')));
        assert!(s.cards[0].active);
        let shown_at = s.cards[0].now;
        let shown_remaining = s.cards[0].remaining;

        s.dirty = false;
        handle_event(
            &mut s,
            AppEvent::Tick {
                card: 0,
                generation: 0,
                now: utc("2025-11-01T06:59:01Z"),
            },
        );
        assert_eq!(s.cards[0].now, shown_at);
        assert_eq!(s.cards[0].remaining, shown_remaining);
        assert!(!s.dirty);

        // The new ticker's ticks still land
        handle_event(
            &mut s,
            AppEvent::Tick {
                card: 0,
                generation: 1,
                now: utc("2025-11-01T06:59:01Z"),
            },
        );
        assert_eq!(s.cards[0].remaining.seconds, 58);
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Esc)), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut s, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut s = state();
        let release = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        assert!(handle_event(&mut s, release).is_empty());
        assert!(s.cards[0].active);
    }

    #[test]
    fn test_resize_marks_dirty() {
        let mut s = state();
        s.dirty = false;
        handle_event(&mut s, AppEvent::Terminal(CEvent::Resize(80, 24)));
        assert!(s.dirty);
    }
}
