//! Suppliers of raw cell grids.

use crate::{
    cell::{Cell, Grid},
    error::{Error, Result},
    program::ProgramTable,
};
use async_trait::async_trait;
use csv::ReaderBuilder;
use log::debug;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// Snapshot file holding a program's date header rows.
pub const DATES_FILE: &str = "dates.csv";

/// Snapshot file holding a program's water rows.
pub const SCHEDULE_FILE: &str = "schedule.csv";

/// Anything that can hand over the cells of an A1 range.
#[async_trait]
pub trait GridSource: Send + Sync {
    async fn fetch(&self, spreadsheet_id: &str, sheet_name: &str, range: &str) -> Result<Grid>;
}

/// Parse a header-less CSV into a grid. Blank fields become [`Cell::Empty`]
/// and trailing blank cells are trimmed the way the Sheets API trims them.
pub fn grid_from_csv<R: Read>(reader: R) -> csv::Result<Grid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut grid = Grid::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::from(field)
                }
            })
            .collect();
        while row.last().is_some_and(Cell::is_blank) {
            row.pop();
        }
        grid.push(row);
    }
    Ok(grid)
}

/// Grids saved to disk, one directory per program:
/// `<root>/<program>/dates.csv` and `<root>/<program>/schedule.csv`.
#[derive(Debug, Clone)]
pub struct CsvSnapshot {
    root: PathBuf,
    table: ProgramTable,
}

impl CsvSnapshot {
    pub fn new(root: impl Into<PathBuf>, table: ProgramTable) -> Self {
        CsvSnapshot {
            root: root.into(),
            table,
        }
    }

    fn file_for(&self, spreadsheet_id: &str, sheet_name: &str, range: &str) -> Option<PathBuf> {
        let layout = self
            .table
            .layouts()
            .iter()
            .find(|l| l.spreadsheet_id == spreadsheet_id && l.sheet_name == sheet_name)?;
        let file = if range == layout.date_range {
            DATES_FILE
        } else if range == layout.schedule_range {
            SCHEDULE_FILE
        } else {
            return None;
        };
        Some(self.root.join(layout.program.as_str()).join(file))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl GridSource for CsvSnapshot {
    async fn fetch(&self, spreadsheet_id: &str, sheet_name: &str, range: &str) -> Result<Grid> {
        let path = self
            .file_for(spreadsheet_id, sheet_name, range)
            .ok_or_else(|| {
                Error::transport(sheet_name, range, "no snapshot file is mapped to this range")
            })?;
        debug!("reading {} for {}!{}", path.display(), sheet_name, range);
        let file = std::fs::File::open(&path)
            .map_err(|e| Error::transport(sheet_name, range, format!("{}: {}", path.display(), e)))?;
        grid_from_csv(file).map_err(|e| Error::transport(sheet_name, range, e))
    }
}
