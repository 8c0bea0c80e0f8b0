use crate::error::{Error, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

/// Embedded sheet layouts for every program.
pub static PROGRAMS_CSV: &str = include_str!("../../fixtures/programs.csv");

/// A stocking schedule published by the agency.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// Community Fishing Program
    Cfp,
    Winter,
    /// Spring and summer share one sheet
    SpringSummer,
}

impl Program {
    pub const ALL: [Program; 3] = [Program::Cfp, Program::Winter, Program::SpringSummer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Program::Cfp => "cfp",
            Program::Winter => "winter",
            Program::SpringSummer => "springsummer",
        }
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cfp" => Ok(Program::Cfp),
            "winter" => Ok(Program::Winter),
            "springsummer" | "spring" | "summer" => Ok(Program::SpringSummer),
            _ => Err(Error::UnknownProgram(s.to_string())),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a program's schedule lives and how its rows are shaped.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    pub program: Program,
    pub spreadsheet_id: String,
    pub sheet_name: String,
    /// A1 range holding the water name column and the schedule cells
    pub schedule_range: String,
    /// A1 range holding the month row and the day row
    pub date_range: String,
    /// Data column (after the water name) deleted from the live sheet
    pub skip_column: Option<usize>,
}

/// Sheet layouts keyed by program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTable(Vec<SheetLayout>);

impl ProgramTable {
    /// The layouts shipped with the crate.
    pub fn builtin() -> Result<ProgramTable> {
        ProgramTable::from_csv(PROGRAMS_CSV)
    }

    /// Load layouts from a CSV file with the same columns as the builtin table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<ProgramTable> {
        let path = path.as_ref();
        let csv_object = std::fs::read_to_string(path)
            .map_err(|e| Error::Layout(format!("{}: {}", path.display(), e)))?;
        ProgramTable::from_csv(&csv_object)
    }

    /// Parse layouts from CSV text.
    ///
    /// Expected CSV columns: program, spreadsheet_id, sheet_name, schedule_range,
    /// date_range, skip_column (blank when the program has no deleted column)
    pub fn from_csv(csv_object: &str) -> Result<ProgramTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut layouts: Vec<SheetLayout> = Vec::new();
        for row in rdr.deserialize::<SheetLayout>() {
            let layout = row.map_err(|e| Error::Layout(e.to_string()))?;
            if layouts.iter().any(|l| l.program == layout.program) {
                return Err(Error::Layout(format!(
                    "program {} is listed twice",
                    layout.program
                )));
            }
            layouts.push(layout);
        }
        Ok(ProgramTable(layouts))
    }

    pub fn layout(&self, program: Program) -> Result<&SheetLayout> {
        self.0
            .iter()
            .find(|layout| layout.program == program)
            .ok_or_else(|| Error::Layout(format!("no layout for program {program}")))
    }

    pub fn layouts(&self) -> &[SheetLayout] {
        &self.0
    }
}
