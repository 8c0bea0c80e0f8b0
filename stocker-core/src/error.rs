/// Error types for the stocker library
use thiserror::Error;

/// Boxed source of a failed grid fetch, kept opaque so any transport fits.
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for extraction. Any of these aborts the current call.
#[derive(Error, Debug)]
pub enum Error {
    /// The grid supplier failed
    #[error("error getting {range} from sheet {sheet:?}: {source}")]
    Transport {
        sheet: String,
        range: String,
        #[source]
        source: TransportSource,
    },

    /// The date header block did not have a month row and a day row
    #[error("expected 2 header rows but got {found}")]
    HeaderRows { found: usize },

    /// The day row rolled over more months than the month row lists
    #[error("day row needs month index {index} but the header only lists {months} months")]
    MonthOverflow { index: usize, months: usize },

    /// Program name did not match any known program
    #[error("unknown program {0:?}")]
    UnknownProgram(String),

    /// The program table could not be read or lacks a program
    #[error("invalid program table: {0}")]
    Layout(String),
}

/// Recoverable problems with a single schedule row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("dates and stock rows don't match: {expected} != {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("skip column {skip} is outside a {axis_len}-date row")]
    SkipColumnOutOfRange { skip: usize, axis_len: usize },
}

/// Type alias for Results using the stocker Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn transport(
        sheet: &str,
        range: &str,
        source: impl Into<TransportSource>,
    ) -> Self {
        Error::Transport {
            sheet: sheet.to_string(),
            range: range.to_string(),
            source: source.into(),
        }
    }
}
