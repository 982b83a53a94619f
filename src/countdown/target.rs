//! Fixed deadlines anchored to a civil timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

/// Formats accepted for target literals, most specific first.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

const DISPLAY_FORMAT: &str = "%b %d, %Y at %I:%M:%S %p";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("malformed target '{0}', expected YYYY-MM-DDTHH:MM:SS")]
    Malformed(String),
    #[error("'{literal}' does not exist in {timezone} (skipped by a clock change)")]
    Nonexistent { literal: String, timezone: String },
}

/// An instant a countdown runs toward. Built once from a validated literal
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    instant: DateTime<Tz>,
}

impl Target {
    /// Parse a civil date/time literal (e.g. `2025-10-31T23:59:59`) as local
    /// time in the IANA zone `timezone`.
    ///
    /// A time repeated by a DST fall-back resolves to its first occurrence.
    pub fn parse(literal: &str, timezone: &str) -> Result<Self, TargetError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| TargetError::UnknownTimezone(timezone.to_string()))?;
        let naive = parse_naive(literal.trim())
            .ok_or_else(|| TargetError::Malformed(literal.to_string()))?;
        let instant = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TargetError::Nonexistent {
                literal: literal.to_string(),
                timezone: timezone.to_string(),
            })?;
        Ok(Self { instant })
    }

    pub fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// Human-readable form in the anchored zone, e.g.
    /// `Oct 31, 2025 at 11:59:59 PM PT`. Without a label the zone
    /// abbreviation in effect at the target (`PDT`/`PST`) is used.
    pub fn display(&self, zone_label: Option<&str>) -> String {
        let stamp = self.instant.format(DISPLAY_FORMAT);
        match zone_label {
            Some(label) => format!("{} {}", stamp, label),
            None => format!("{} {}", stamp, self.instant.format("%Z")),
        }
    }
}

fn parse_naive(literal: &str) -> Option<NaiveDateTime> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(literal, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(literal, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn test_parse_pacific_target() {
        let t = Target::parse("2025-10-31T23:59:59", "America/Los_Angeles").unwrap();
        // PDT is UTC-7 until Nov 2, 2025
        let utc = t.instant().with_timezone(&Utc);
        assert_eq!(utc.to_rfc3339(), "2025-11-01T06:59:59+00:00");
    }

    #[test]
    fn test_parse_winter_target_uses_pst() {
        let t = Target::parse("2026-01-31T23:59:59", "America/Los_Angeles").unwrap();
        let utc = t.instant().with_timezone(&Utc);
        assert_eq!(utc.to_rfc3339(), "2026-02-01T07:59:59+00:00");
    }

    #[test]
    fn test_parse_shorter_literals() {
        let t = Target::parse("2025-10-31T23:59", "America/Los_Angeles").unwrap();
        assert_eq!(t.instant().second(), 0);
        let t = Target::parse("2025-10-31", "America/Los_Angeles").unwrap();
        assert_eq!((t.instant().hour(), t.instant().minute()), (0, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Target::parse("2025-10-31T23:59:59", "Pacific/Nowhere"),
            Err(TargetError::UnknownTimezone("Pacific/Nowhere".into()))
        );
        assert_eq!(
            Target::parse("Oct 31", "America/Los_Angeles"),
            Err(TargetError::Malformed("Oct 31".into()))
        );
        assert!(matches!(
            Target::parse("2025-03-09T02:30:00", "America/Los_Angeles"),
            Err(TargetError::Nonexistent { .. })
        ));
    }

    #[test]
    fn test_ambiguous_time_takes_first_occurrence() {
        let t = Target::parse("2025-11-02T01:30:00", "America/Los_Angeles").unwrap();
        assert_eq!(t.display(None), "Nov 02, 2025 at 01:30:00 AM PDT");
    }

    #[test]
    fn test_display() {
        let t = Target::parse("2025-10-31T23:59:59", "America/Los_Angeles").unwrap();
        assert_eq!(t.display(Some("PT")), "Oct 31, 2025 at 11:59:59 PM PT");
        let t = Target::parse("2026-01-31T23:59:59", "America/Los_Angeles").unwrap();
        assert_eq!(t.display(None), "Jan 31, 2026 at 11:59:59 PM PST");
    }
}
