//! Builds the shared date axis from a sheet's two header rows.
//!
//! The month row is sparse: a month name sits above its first date and the
//! cells after it are blank. The day row has one label per date. Sheets never
//! say where a month ends, so a day number smaller than the one before it is
//! taken to mean the next listed month has started. Entering January straight
//! after December moves to the next year.

use crate::{
    calendar::DateEntry,
    cell::{non_empty, parse_day, parse_month, Cell},
    error::{Error, Result},
};
use chrono::Month;
use log::debug;

/// Ordered dates shared by every row of one sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateAxis(pub Vec<DateEntry>);

impl DateAxis {
    /// Build the axis from the `[months, days]` header block.
    pub fn from_header(header: &[Vec<Cell>], base_year: i32) -> Result<DateAxis> {
        match header {
            [months, days] => DateAxis::build(months, days, base_year),
            _ => Err(Error::HeaderRows {
                found: header.len(),
            }),
        }
    }

    /// Build the axis from a month row and a day row.
    pub fn build(month_cells: &[Cell], day_cells: &[Cell], base_year: i32) -> Result<DateAxis> {
        let months: Vec<Month> = non_empty(month_cells).filter_map(parse_month).collect();

        let mut entries = Vec::new();
        let mut year = base_year;
        let mut month_index = 0;
        let mut prev_day: Option<u32> = None;
        for token in non_empty(day_cells) {
            let Some(day) = parse_day(token) else {
                debug!("skipping day label {token:?}");
                continue;
            };

            if prev_day.is_some_and(|prev| day < prev) {
                month_index += 1;
                if is_new_year(&months, month_index) {
                    year += 1;
                }
            }
            prev_day = Some(day);

            let month = *months.get(month_index).ok_or(Error::MonthOverflow {
                index: month_index,
                months: months.len(),
            })?;
            entries.push(DateEntry::new(year, month, day));
        }

        Ok(DateAxis(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[DateEntry] {
        &self.0
    }
}

fn is_new_year(months: &[Month], index: usize) -> bool {
    index > 0
        && months.get(index) == Some(&Month::January)
        && months.get(index - 1) == Some(&Month::December)
}
