//! Countdown core: the remaining-time calculation, validated targets and
//! the per-card refresh ticker.

pub mod remaining;
pub mod target;
pub mod ticker;

pub use remaining::{compute_remaining, Remaining};
pub use target::Target;
pub use ticker::TickerSet;
