use crate::{error::RowError, fish::StockKind};
use chrono::{DateTime, Days, FixedOffset, Month, NaiveDate, TimeZone};
use serde::Serialize;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
};

/// Arizona time: UTC-7 all year round, no daylight saving.
pub const ARIZONA: FixedOffset = match FixedOffset::west_opt(7 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC-7 is a valid offset"),
};

/// Rendered in place of a missing next/last stocking.
pub const NO_DATA: &str = "No Data";

/// One date on the axis and what is stocked on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateEntry {
    pub year: i32,
    pub month: Month,
    pub day: u32,
    pub stock: StockKind,
}

impl DateEntry {
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        DateEntry {
            year,
            month,
            day,
            stock: StockKind::None,
        }
    }

    /// Calendar date of the entry. A day past the end of its month rolls
    /// into the next month ("February 30" is March 1 or 2), day 0 is the
    /// last day of the previous month.
    pub fn date(&self) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)?;
        match self.day {
            0 => first.checked_sub_days(Days::new(1)),
            d => first.checked_add_days(Days::new(u64::from(d) - 1)),
        }
    }

    /// Midnight of the entry's date in Arizona time.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        let midnight = self.date()?.and_hms_opt(0, 0, 0)?;
        ARIZONA.from_local_datetime(&midnight).single()
    }

    /// Copy of this date carrying a different stocking value.
    pub fn with_stock(&self, stock: StockKind) -> Self {
        DateEntry { stock, ..*self }
    }

    /// Year, month and day as a comparable triple.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month.number_from_month(), self.day)
    }
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: \"{}\"",
            self.year,
            self.month.name(),
            self.day,
            self.stock
        )
    }
}

/// Renders a lookup result, or [`NO_DATA`] when there is none.
pub fn describe(entry: Option<&DateEntry>) -> String {
    entry.map_or_else(|| NO_DATA.to_string(), DateEntry::to_string)
}

/// All known dates for a single water, in date axis order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Calendar {
    pub water_name: String,
    pub entries: Vec<DateEntry>,
}

/// Which sections [`Calendar::detail`] prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOptions {
    /// Every date, stocked or not
    pub show_all: bool,
    /// Only stocked dates (ignored when `show_all` is set)
    pub show_stocked: bool,
    pub next: bool,
    pub last: bool,
}

impl Calendar {
    /// One line per entry. `hide_empty` drops dates with nothing scheduled.
    pub fn format(&self, hide_empty: bool) -> String {
        self.entries
            .iter()
            .filter(|entry| !hide_empty || entry.stock.is_stocked())
            .map(DateEntry::to_string)
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Multi-section report. With no options set this is the full calendar.
    pub fn detail<Tz: TimeZone>(&self, options: &DetailOptions, now: &DateTime<Tz>) -> String {
        if *options == DetailOptions::default() {
            return self.format(false);
        }

        let mut out = String::new();
        if options.show_all {
            out.push_str(&self.format(false));
            out.push('\n');
        } else if options.show_stocked {
            out.push_str(&self.format(true));
            out.push('\n');
        }
        if options.last {
            out.push_str("Last: ");
            out.push_str(&describe(self.last(now)));
            out.push('\n');
        }
        if options.next {
            out.push_str("Next: ");
            out.push_str(&describe(self.next(now)));
        }
        out
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Sort calendars with `compare`, falling back to the water name on ties.
pub fn sort_calendars<F>(calendars: &mut [Calendar], mut compare: F)
where
    F: FnMut(&Calendar, &Calendar) -> Ordering,
{
    calendars.sort_by(|a, b| compare(a, b).then_with(|| a.water_name.cmp(&b.water_name)));
}

/// A schedule row left out of a [`CalendarSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    pub water_name: String,
    pub error: RowError,
}

/// Result of one extraction.
#[derive(Debug, Clone, Default)]
pub struct CalendarSet {
    /// Calendars keyed by the water name as written in the sheet
    pub calendars: BTreeMap<String, Calendar>,
    /// Every water name in the sheet, in row order, filtered or not
    pub water_names: Vec<String>,
    /// Requested rows that could not be aligned to the date axis
    pub dropped: Vec<DroppedRow>,
}

impl CalendarSet {
    /// Case-insensitive lookup by water name.
    pub fn find(&self, water_name: &str) -> Option<&Calendar> {
        self.calendars.get(water_name).or_else(|| {
            let wanted = water_name.to_lowercase();
            self.calendars
                .iter()
                .find(|(name, _)| name.to_lowercase() == wanted)
                .map(|(_, calendar)| calendar)
        })
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Calendar> {
        self.calendars.values()
    }
}
