//! Per-card once-per-second refresh.
//!
//! A [`RefreshTicker`] owns the tokio task that feeds its card fresh
//! instants. The task lives exactly as long as the ticker value: dropping
//! it aborts the task, so a hidden card never keeps a timer running.
//! [`TickerSet`] holds the tickers of every visible card.

use crate::app::event::{AppEvent, CardId, TickerGeneration};
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct RefreshTicker {
    card: CardId,
    generation: TickerGeneration,
    handle: JoinHandle<()>,
}

impl RefreshTicker {
    /// Spawn the ticker task for `card`. The first tick fires immediately.
    /// Every tick carries `generation` so the receiver can drop ticks from
    /// a ticker that has since been replaced.
    pub fn start(
        card: CardId,
        generation: TickerGeneration,
        tx: UnboundedSender<AppEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            // Late ticks are dropped rather than bunched up; each tick reads
            // the clock itself so spacing drift is harmless.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let event = AppEvent::Tick {
                    card,
                    generation,
                    now: Utc::now(),
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(card, generation, "refresh ticker started");
        Self {
            card,
            generation,
            handle,
        }
    }

    /// Stop ticking. Equivalent to dropping the ticker.
    pub fn stop(self) {}
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(
            card = self.card,
            generation = self.generation,
            "refresh ticker stopped"
        );
    }
}

/// The running tickers, at most one per card.
pub struct TickerSet {
    tx: UnboundedSender<AppEvent>,
    tickers: HashMap<CardId, RefreshTicker>,
}

impl TickerSet {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            tx,
            tickers: HashMap::new(),
        }
    }

    /// Start a ticker for `card`, stopping any ticker it already had.
    pub fn start(&mut self, card: CardId, generation: TickerGeneration) {
        let ticker = RefreshTicker::start(card, generation, self.tx.clone());
        if let Some(old) = self.tickers.insert(card, ticker) {
            old.stop();
        }
    }

    pub fn stop(&mut self, card: CardId) {
        if let Some(ticker) = self.tickers.remove(&card) {
            ticker.stop();
        }
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Stop every ticker.
    pub fn clear(&mut self) {
        self.tickers.clear();
    }
}
