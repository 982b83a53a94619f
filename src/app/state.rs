use crate::app::event::{CardId, TickerGeneration};
use crate::config::model::PageConfig;
use crate::countdown::{compute_remaining, Remaining, Target};
use crate::ui::theme::Theme;
use chrono::{DateTime, Utc};

/// Everything a card needs to render, validated at startup.
#[derive(Debug, Clone)]
pub struct CardSpec {
    pub title: String,
    pub subtitle: Option<String>,
    pub target: Target,
    pub zone_label: String,
    pub theme: Theme,
}

impl CardSpec {
    pub fn target_display(&self) -> String {
        let label = Some(self.zone_label.as_str()).filter(|l| !l.is_empty());
        self.target.display(label)
    }
}

#[derive(Debug)]
pub struct CardState {
    pub id: CardId,
    pub spec: CardSpec,
    pub now: DateTime<Utc>,
    pub remaining: Remaining,
    /// Mounted on screen with a ticker feeding it.
    pub active: bool,
    /// Generation of the ticker whose ticks this card accepts.
    pub ticker_generation: TickerGeneration,
}

impl CardState {
    pub fn new(id: CardId, spec: CardSpec, now: DateTime<Utc>) -> Self {
        let remaining = compute_remaining(&now, spec.target.instant());
        Self {
            id,
            spec,
            now,
            remaining,
            active: true,
            ticker_generation: 0,
        }
    }

    /// Replace `now` and recompute the breakdown. Returns whether the
    /// displayed value changed.
    pub fn set_now(&mut self, now: DateTime<Utc>) -> bool {
        self.now = now;
        let remaining = compute_remaining(&self.now, self.spec.target.instant());
        let changed = remaining != self.remaining;
        self.remaining = remaining;
        changed
    }
}

#[derive(Debug)]
pub struct AppState {
    pub page: PageConfig,
    pub theme: Theme,
    pub cards: Vec<CardState>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(page: PageConfig, theme: Theme, specs: Vec<CardSpec>, now: DateTime<Utc>) -> Self {
        let cards = specs
            .into_iter()
            .enumerate()
            .map(|(id, spec)| CardState::new(id, spec, now))
            .collect();
        Self {
            page,
            theme,
            cards,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn get_card_mut(&mut self, id: CardId) -> Option<&mut CardState> {
        self.cards.get_mut(id)
    }

    pub fn active_cards(&self) -> impl Iterator<Item = &CardState> {
        self.cards.iter().filter(|c| c.active)
    }

    pub fn hidden_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.active).count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn spec(title: &str, literal: &str) -> CardSpec {
        CardSpec {
            title: title.to_string(),
            subtitle: None,
            target: Target::parse(literal, "America/Los_Angeles").unwrap(),
            zone_label: "PT".to_string(),
            theme: Theme::default(),
        }
    }

    pub(crate) fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_card_computes_remaining() {
        // 23:59:00 PDT
        let card = CardState::new(0, spec("Q3", "2025-10-31T23:59:59"), utc("2025-11-01T06:59:00Z"));
        assert_eq!(card.remaining, Remaining::from_seconds(59));
        assert!(card.active);
    }

    #[test]
    fn test_set_now_reports_change() {
        let mut card = CardState::new(0, spec("Q3", "2025-10-31T23:59:59"), utc("2025-11-01T06:59:00Z"));
        assert!(card.set_now(utc("2025-11-01T06:59:01Z")));
        assert_eq!(card.remaining.seconds, 58);
        // Same whole second
        assert!(!card.set_now(utc("2025-11-01T06:59:00.500Z")));
        assert_eq!(card.remaining.seconds, 58);
        assert!(card.set_now(utc("2025-11-01T07:30:00Z")));
        assert!(card.remaining.is_zero());
        assert!(!card.set_now(utc("2025-11-02T00:00:00Z")));
    }

    #[test]
    fn test_target_display_label() {
        let mut s = spec("Q3", "2025-10-31T23:59:59");
        assert_eq!(s.target_display(), "Oct 31, 2025 at 11:59:59 PM PT");
        s.zone_label.clear();
        assert_eq!(s.target_display(), "Oct 31, 2025 at 11:59:59 PM PDT");
    }

    #[test]
    fn test_app_state_ids_follow_order() {
        let state = AppState::new(
            PageConfig::default(),
            Theme::default(),
            vec![spec("a", "2025-10-31"), spec("b", "2026-01-31")],
            utc("2025-01-01T00:00:00Z"),
        );
        let ids: Vec<_> = state.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(state.hidden_count(), 0);
        assert!(state.dirty);
    }
}
