//! Next/last stocking lookups and cross-water rankings.

use crate::calendar::{Calendar, CalendarSet, DateEntry, ARIZONA};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

/// A water's next or last stocking, for ranking across waters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub water_name: String,
    pub entry: DateEntry,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.water_name, self.entry)
    }
}

impl Calendar {
    /// The first stocked date strictly after `now`.
    pub fn next<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<&DateEntry> {
        let now = now.with_timezone(&ARIZONA);
        self.entries
            .iter()
            .filter(|entry| entry.stock.is_stocked())
            .find(|entry| entry.time().is_some_and(|t| t > now))
    }

    /// The most recent stocked date strictly before `now`.
    pub fn last<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<&DateEntry> {
        let now = now.with_timezone(&ARIZONA);
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.stock.is_stocked())
            .find(|entry| entry.time().is_some_and(|t| t < now))
    }
}

/// Every water's next stocking, soonest first.
pub fn rank_next<Tz: TimeZone>(set: &CalendarSet, now: &DateTime<Tz>) -> Vec<RankedEntry> {
    let mut ranked = lookup_all(set, |calendar| calendar.next(now));
    ranked.sort_by(|a, b| {
        a.entry
            .date()
            .cmp(&b.entry.date())
            .then_with(|| a.water_name.cmp(&b.water_name))
    });
    ranked
}

/// Every water's last stocking, most recent first.
pub fn rank_last<Tz: TimeZone>(set: &CalendarSet, now: &DateTime<Tz>) -> Vec<RankedEntry> {
    let mut ranked = lookup_all(set, |calendar| calendar.last(now));
    ranked.sort_by(|a, b| {
        b.entry
            .date()
            .cmp(&a.entry.date())
            .then_with(|| a.water_name.cmp(&b.water_name))
    });
    ranked
}

fn lookup_all<'a, F>(set: &'a CalendarSet, lookup: F) -> Vec<RankedEntry>
where
    F: Fn(&'a Calendar) -> Option<&'a DateEntry>,
{
    set.calendars
        .iter()
        .filter_map(|(water_name, calendar)| {
            lookup(calendar).map(|entry| RankedEntry {
                water_name: water_name.clone(),
                entry: *entry,
            })
        })
        .collect()
}
