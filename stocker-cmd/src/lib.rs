//! Command implementations for the stocker CLI.
//!
//! Provides subcommands for printing stocking calendars and ranking waters by
//! their next or most recent stocking.

use clap::{Args, Subcommand};
use std::path::PathBuf;
use stocker_core::Program;

pub mod query;
pub mod report;

/// Where grids come from and how they are read. Shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct Options {
    /// Google Sheets API key
    #[arg(long, env = "STOCKER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Read `<dir>/<program>/dates.csv` and `schedule.csv` instead of Google Sheets
    #[arg(long, global = true)]
    pub snapshot_dir: Option<PathBuf>,

    /// CSV of program sheet layouts replacing the builtin table
    #[arg(long, global = true)]
    pub programs: Option<PathBuf>,

    /// Year of the first header date (defaults to the current year)
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Answer queries as of this time (RFC 3339 or YYYY-MM-DD, Arizona time)
    #[arg(long, global = true)]
    pub now: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print stocking calendars for a program
    Calendar {
        /// cfp, winter, or springsummer (spring and summer also work)
        program: Program,

        /// Only include these waters (case-insensitive, repeatable)
        #[arg(short = 'w', long = "water")]
        waters: Vec<String>,

        /// Print every date, stocked or not
        #[arg(long)]
        all: bool,

        /// Print only stocked dates
        #[arg(long)]
        stocked: bool,

        /// Print each water's next stocking
        #[arg(long)]
        next: bool,

        /// Print each water's most recent stocking
        #[arg(long)]
        last: bool,
    },

    /// Rank waters by their next stocking, soonest first
    Next {
        program: Program,

        #[arg(short = 'w', long = "water")]
        waters: Vec<String>,
    },

    /// Rank waters by their most recent stocking, latest first
    Last {
        program: Program,

        #[arg(short = 'w', long = "water")]
        waters: Vec<String>,
    },

    /// List every water in a program's sheet
    Waters { program: Program },
}

pub async fn run(command: Command, options: &Options) -> anyhow::Result<()> {
    let now = query::resolve_now(options)?;
    match command {
        Command::Calendar {
            program,
            waters,
            all,
            stocked,
            next,
            last,
        } => {
            let detail = stocker_core::DetailOptions {
                show_all: all,
                show_stocked: stocked,
                next,
                last,
            };
            query::run_calendar(options, program, &waters, &detail, &now).await
        }
        Command::Next { program, waters } => {
            query::run_rank(options, program, &waters, query::Rank::Next, &now).await
        }
        Command::Last { program, waters } => {
            query::run_rank(options, program, &waters, query::Rank::Last, &now).await
        }
        Command::Waters { program } => query::run_waters(options, program).await,
    }
}
