use crate::app::event::{CardId, TickerGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartTicker { card: CardId, generation: TickerGeneration },
    StopTicker { card: CardId },
    Quit,
}
