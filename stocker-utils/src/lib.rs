//! Shared utility functions for stocker crates.

/// Date utility functions
pub mod dates {
    use anyhow::{bail, Context};
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Current time in the given fixed offset.
    pub fn now_in(offset: &FixedOffset) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(offset)
    }

    /// Parse a point in time for queries. Accepts RFC 3339
    /// ("2025-01-01T08:00:00-07:00") or a bare date, which means midnight of
    /// that date in `offset`.
    pub fn parse_instant(s: &str, offset: &FixedOffset) -> anyhow::Result<DateTime<FixedOffset>> {
        let s = s.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(instant.with_timezone(offset));
        }
        let date = parse_date(s).with_context(|| format!("invalid time {s:?}"))?;
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            bail!("invalid time {s:?}");
        };
        match offset.from_local_datetime(&midnight).single() {
            Some(instant) => Ok(instant),
            None => bail!("invalid time {s:?}"),
        }
    }

}
