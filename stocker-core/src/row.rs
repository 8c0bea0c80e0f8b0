use crate::{
    calendar::Calendar,
    cell::Cell,
    date_axis::DateAxis,
    error::RowError,
    fish::StockKind,
};

/// Aligns one schedule row's cells (water name already removed) to the axis.
///
/// `skip_column` names a data cell that has no date: it was deleted from the
/// live sheet but still arrives as an empty slot. Trailing empty cells are
/// trimmed by the sheet API, so short rows are padded before aligning.
pub fn normalize_row(
    cells: &[Cell],
    axis: &DateAxis,
    skip_column: Option<usize>,
) -> Result<Calendar, RowError> {
    if let Some(skip) = skip_column.filter(|skip| *skip > axis.len()) {
        return Err(RowError::SkipColumnOutOfRange {
            skip,
            axis_len: axis.len(),
        });
    }
    let skipped = usize::from(skip_column.is_some());
    let expected = axis.len() + skipped;
    if cells.len() > expected {
        return Err(RowError::LengthMismatch {
            expected: axis.len(),
            found: cells.len() - skipped,
        });
    }

    let blank = Cell::Empty;
    let padding = std::iter::repeat(&blank).take(expected - cells.len());
    let mut entries = Vec::with_capacity(axis.len());
    let mut offset = 0;
    for (i, cell) in cells.iter().chain(padding).enumerate() {
        if Some(i) == skip_column {
            offset = 1;
            continue;
        }
        let date = &axis.entries()[i - offset];
        entries.push(date.with_stock(StockKind::parse(cell.text())));
    }

    Ok(Calendar {
        water_name: String::new(),
        entries,
    })
}
