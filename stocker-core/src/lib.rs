pub mod calendar;
pub mod cell;
pub mod date_axis;
pub mod error;
pub mod extract;
pub mod fish;
pub mod grid;
pub mod program;
pub mod query;
pub mod row;
#[cfg(feature = "api")]
pub mod sheets;

pub use calendar::{Calendar, CalendarSet, DateEntry, DetailOptions, DroppedRow, ARIZONA};
pub use cell::{Cell, Grid};
pub use error::{Error, Result, RowError};
pub use extract::{extract_grids, Extractor};
pub use fish::StockKind;
pub use grid::{CsvSnapshot, GridSource};
pub use program::{Program, ProgramTable, SheetLayout};
pub use query::{rank_last, rank_next, RankedEntry};
