use chrono::{DateTime, Utc};
use crossterm::event::Event as CrosstermEvent;

pub type CardId = usize;

/// Bumped each time a card gets a new ticker, so ticks from a replaced
/// ticker can be told apart from current ones.
pub type TickerGeneration = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A card's refresh ticker fired, carrying the instant it observed
    Tick {
        card: CardId,
        generation: TickerGeneration,
        now: DateTime<Utc>,
    },
}
