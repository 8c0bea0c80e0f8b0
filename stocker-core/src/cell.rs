use chrono::Month;
use serde_json::Value;

/// A raw spreadsheet cell as delivered by a grid source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

/// Rows of cells, in the order the sheet lists them. Rows may be ragged:
/// sources trim trailing empty cells.
pub type Grid = Vec<Vec<Cell>>;

/// Full month names accepted in a header row.
const MONTHS: [(&str, Month); 12] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
];

impl Cell {
    /// Trimmed text of the cell. Numbers and blanks read as "".
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) => s.trim(),
            Cell::Number(_) | Cell::Empty => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Cell::Text(s),
            Value::Number(n) => n.as_f64().map_or(Cell::Empty, Cell::Number),
            _ => Cell::Empty,
        }
    }
}

/// Yields the trimmed text of every non-blank cell, left to right.
pub fn non_empty(cells: &[Cell]) -> impl Iterator<Item = &str> {
    cells.iter().map(Cell::text).filter(|s| !s.is_empty())
}

/// Parse a month header such as "January" or "DECEMBER 2024".
pub fn parse_month(token: &str) -> Option<Month> {
    let token = token.trim();
    let name = match token.rsplit_once(char::is_whitespace) {
        Some((head, year)) if !year.is_empty() && year.chars().all(|c| c.is_ascii_digit()) => {
            head.trim_end()
        }
        _ => token,
    };
    MONTHS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, month)| *month)
}

/// Parse a day header. Ranges like "7-11" yield their first day.
pub fn parse_day(token: &str) -> Option<u32> {
    let first = token.split('-').next().unwrap_or_default();
    first.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_trims_and_narrows() {
        assert_eq!(Cell::from("  Trout ").text(), "Trout");
        assert_eq!(Cell::from("   ").text(), "");
        assert_eq!(Cell::Number(4.0).text(), "");
        assert_eq!(Cell::Empty.text(), "");
        assert!(Cell::Number(1.0).is_blank());
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(Cell::from(json!("x")), Cell::Text("x".to_string()));
        assert_eq!(Cell::from(json!(12)), Cell::Number(12.0));
        assert_eq!(Cell::from(json!(null)), Cell::Empty);
        assert_eq!(Cell::from(json!(true)), Cell::Empty);
    }

    #[test]
    fn test_non_empty_skips_blanks() {
        let cells = vec![
            Cell::from("March"),
            Cell::Empty,
            Cell::from(" "),
            Cell::Number(3.0),
            Cell::from(" April "),
        ];
        let tokens: Vec<&str> = non_empty(&cells).collect();
        assert_eq!(tokens, vec!["March", "April"]);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("January"), Some(Month::January));
        assert_eq!(parse_month("SEPTEMBER"), Some(Month::September));
        assert_eq!(parse_month("December 2024"), Some(Month::December));
        assert_eq!(parse_month("may 2025"), Some(Month::May));
        assert_eq!(parse_month("Jan"), None);
        assert_eq!(parse_month("Week of"), None);
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("28"), Some(28));
        assert_eq!(parse_day("7-11"), Some(7));
        assert_eq!(parse_day("30-3"), Some(30));
        assert_eq!(parse_day("TBD"), None);
        assert_eq!(parse_day("-4"), None);
    }
}
