//! Fetches a program's calendars and prints reports about them.

use crate::{report, Options};
use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset};
use log::{info, warn};
use stocker_core::{
    rank_last, rank_next, sheets::SheetsClient, CalendarSet, CsvSnapshot, DetailOptions,
    Extractor, GridSource, Program, ProgramTable, ARIZONA,
};
use stocker_utils::dates::{format_date, now_in, parse_instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Next,
    Last,
}

/// `--now` if given, otherwise the current time in Arizona.
pub fn resolve_now(options: &Options) -> anyhow::Result<DateTime<FixedOffset>> {
    match &options.now {
        Some(now) => parse_instant(now, &ARIZONA),
        None => Ok(now_in(&ARIZONA)),
    }
}

fn program_table(options: &Options) -> anyhow::Result<ProgramTable> {
    let table = match &options.programs {
        Some(path) => ProgramTable::from_path(path)
            .with_context(|| format!("loading program table {}", path.display()))?,
        None => ProgramTable::builtin()?,
    };
    Ok(table)
}

async fn extract_with<S: GridSource>(
    source: S,
    table: ProgramTable,
    options: &Options,
    program: Program,
    waters: &[String],
) -> anyhow::Result<CalendarSet> {
    let mut extractor = Extractor::with_table(source, table);
    if let Some(year) = options.year {
        extractor = extractor.base_year(year);
    }
    let set = extractor
        .extract(program, waters)
        .await
        .with_context(|| format!("extracting the {program} schedule"))?;
    Ok(set)
}

/// Requested waters the sheet does not list at all.
fn unknown_waters<'a>(set: &CalendarSet, waters: &'a [String]) -> Vec<&'a str> {
    waters
        .iter()
        .filter(|water| {
            let water = water.to_lowercase();
            !set.water_names.iter().any(|name| name.to_lowercase() == water)
        })
        .map(String::as_str)
        .collect()
}

/// Extract `program` from the configured source and warn about unknown waters.
pub async fn load(
    options: &Options,
    program: Program,
    waters: &[String],
) -> anyhow::Result<CalendarSet> {
    let table = program_table(options)?;
    let set = match (&options.snapshot_dir, &options.api_key) {
        (Some(dir), _) => {
            let source = CsvSnapshot::new(dir, table.clone());
            info!("Reading {} snapshot from {}", program, source.root().display());
            extract_with(source, table, options, program, waters).await?
        }
        (None, Some(api_key)) => {
            info!("Fetching {} schedule from Google Sheets", program);
            extract_with(SheetsClient::new(api_key), table, options, program, waters).await?
        }
        (None, None) => {
            bail!("a Google Sheets API key is required: pass --api-key or set STOCKER_API_KEY")
        }
    };

    for water in unknown_waters(&set, waters) {
        warn!("no water named {water:?} in the {program} schedule");
    }
    Ok(set)
}

pub async fn run_calendar(
    options: &Options,
    program: Program,
    waters: &[String],
    detail: &DetailOptions,
    now: &DateTime<FixedOffset>,
) -> anyhow::Result<()> {
    let set = load(options, program, waters).await?;
    println!("{}", report::render_calendars(&set, detail, now));
    Ok(())
}

pub async fn run_rank(
    options: &Options,
    program: Program,
    waters: &[String],
    rank: Rank,
    now: &DateTime<FixedOffset>,
) -> anyhow::Result<()> {
    let set = load(options, program, waters).await?;
    info!(
        "Ranking {} waters as of {}",
        set.len(),
        format_date(&now.date_naive())
    );
    let ranked = match rank {
        Rank::Next => rank_next(&set, now),
        Rank::Last => rank_last(&set, now),
    };
    println!("{}", report::render_ranked(&ranked));
    Ok(())
}

pub async fn run_waters(options: &Options, program: Program) -> anyhow::Result<()> {
    let set = load(options, program, &[]).await?;
    println!("{}", report::render_waters(&set.water_names));
    Ok(())
}
