//! Breakdown of the time left between two instants.

use chrono::{DateTime, TimeZone};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Whole days, hours, minutes and seconds left until a target.
///
/// Never negative: once the target has passed every field is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a number of whole seconds into days/hours/minutes/seconds,
    /// each unit taking the largest count that fits before the remainder
    /// carries to the next one.
    pub fn from_seconds(total: u64) -> Self {
        let days = total / SECS_PER_DAY;
        let rem = total % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        let rem = rem % SECS_PER_HOUR;
        Self {
            days,
            hours,
            minutes: rem / SECS_PER_MINUTE,
            seconds: rem % SECS_PER_MINUTE,
        }
    }

    /// Whole seconds represented by the breakdown.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Time left from `now` until `target`, clamped at zero.
///
/// Sub-second fractions are dropped. Both instants are compared on
/// absolute time, so their zones only matter for display.
pub fn compute_remaining<A: TimeZone, B: TimeZone>(
    now: &DateTime<A>,
    target: &DateTime<B>,
) -> Remaining {
    let diff = target.naive_utc().signed_duration_since(now.naive_utc());
    // num_seconds truncates toward zero, which is a floor for positive spans
    let secs = diff.num_seconds();
    if secs <= 0 {
        return Remaining::ZERO;
    }
    Remaining::from_seconds(secs as u64)
}
