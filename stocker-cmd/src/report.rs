//! Plain-text rendering of extraction results.

use chrono::{DateTime, TimeZone};
use stocker_core::{calendar::NO_DATA, CalendarSet, DetailOptions, RankedEntry};

/// One block per water, in name order, each headed by the water name.
pub fn render_calendars<Tz: TimeZone>(
    set: &CalendarSet,
    detail: &DetailOptions,
    now: &DateTime<Tz>,
) -> String {
    if set.is_empty() {
        return NO_DATA.to_string();
    }
    set.iter()
        .map(|calendar| {
            let body = calendar.detail(detail, now);
            format!("{}\n{}", calendar.water_name, body.trim_end())
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// One "water: entry" line per ranked water.
pub fn render_ranked(ranked: &[RankedEntry]) -> String {
    if ranked.is_empty() {
        return NO_DATA.to_string();
    }
    ranked
        .iter()
        .map(RankedEntry::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn render_waters(water_names: &[String]) -> String {
    water_names.join("\n")
}
