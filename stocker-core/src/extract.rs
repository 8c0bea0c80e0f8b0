//! Turns a program's header and schedule grids into a [`CalendarSet`].

use crate::{
    calendar::{CalendarSet, DroppedRow, ARIZONA},
    cell::Grid,
    date_axis::DateAxis,
    error::Result,
    grid::GridSource,
    program::{Program, ProgramTable, SheetLayout},
    row::normalize_row,
};
use chrono::{Datelike, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Current year in Arizona, the default first year of a date axis.
pub fn current_year() -> i32 {
    Utc::now().with_timezone(&ARIZONA).year()
}

/// Build calendars from already fetched grids.
///
/// `header` must be the month row and the day row. Each `schedule` row starts
/// with the water name. When `waters` is non-empty only those waters
/// (compared case-insensitively) get calendars, but every name in the sheet is
/// still listed in [`CalendarSet::water_names`].
pub fn extract_grids(
    layout: &SheetLayout,
    header: &Grid,
    schedule: &Grid,
    waters: &[String],
    base_year: i32,
) -> Result<CalendarSet> {
    let axis = DateAxis::from_header(header, base_year)?;
    debug!("{} date axis has {} dates", layout.program, axis.len());

    let wanted: HashSet<String> = waters.iter().map(|w| w.to_lowercase()).collect();
    let mut set = CalendarSet::default();
    for row in schedule {
        if row.len() < 2 {
            continue;
        }
        let water_name = row[0].text();
        if water_name.is_empty() {
            continue;
        }
        set.water_names.push(water_name.to_string());
        if !wanted.is_empty() && !wanted.contains(&water_name.to_lowercase()) {
            continue;
        }

        match normalize_row(&row[1..], &axis, layout.skip_column) {
            Ok(mut calendar) => {
                calendar.water_name = water_name.to_string();
                set.calendars.insert(water_name.to_string(), calendar);
            }
            Err(error) => {
                warn!("error getting data for row {water_name:?}: {error}");
                set.dropped.push(DroppedRow {
                    water_name: water_name.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        "{}: {} calendars, {} waters listed, {} rows dropped",
        layout.program,
        set.calendars.len(),
        set.water_names.len(),
        set.dropped.len()
    );
    Ok(set)
}

/// Fetches a program's grids from a [`GridSource`] and extracts them.
pub struct Extractor<S> {
    source: S,
    table: ProgramTable,
    base_year: Option<i32>,
}

impl<S: GridSource> Extractor<S> {
    /// Extractor over the builtin program table.
    pub fn new(source: S) -> Result<Self> {
        Ok(Extractor::with_table(source, ProgramTable::builtin()?))
    }

    pub fn with_table(source: S, table: ProgramTable) -> Self {
        Extractor {
            source,
            table,
            base_year: None,
        }
    }

    /// Year of the first header date; defaults to [`current_year`].
    pub fn base_year(mut self, year: i32) -> Self {
        self.base_year = Some(year);
        self
    }

    /// Fetch and parse `program`, keeping only `waters` when it's non-empty.
    pub async fn extract(&self, program: Program, waters: &[String]) -> Result<CalendarSet> {
        let layout = self.table.layout(program)?;
        let header = self
            .source
            .fetch(&layout.spreadsheet_id, &layout.sheet_name, &layout.date_range)
            .await?;
        let schedule = self
            .source
            .fetch(&layout.spreadsheet_id, &layout.sheet_name, &layout.schedule_range)
            .await?;
        let base_year = self.base_year.unwrap_or_else(current_year);
        extract_grids(layout, &header, &schedule, waters, base_year)
    }
}
