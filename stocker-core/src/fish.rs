use serde::{Deserialize, Serialize};
use std::fmt;

/// What a schedule cell says about a date.
/// - `None`: nothing scheduled (blank cell)
/// - `Unknown`: the cell held a token we don't recognize
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum StockKind {
    Trout,
    Catfish,
    #[default]
    None,
    Unknown,
}

impl StockKind {
    /// Classify a trimmed schedule token.
    pub fn parse(token: &str) -> StockKind {
        match token.to_lowercase().as_str() {
            "x" | "t" => StockKind::Trout,
            "c" => StockKind::Catfish,
            "" => StockKind::None,
            _ => StockKind::Unknown,
        }
    }

    pub fn is_stocked(&self) -> bool {
        *self != StockKind::None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockKind::Trout => "Trout",
            StockKind::Catfish => "Catfish",
            StockKind::None => "None",
            StockKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::StockKind;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(StockKind::parse("x"), StockKind::Trout);
        assert_eq!(StockKind::parse("X"), StockKind::Trout);
        assert_eq!(StockKind::parse("t"), StockKind::Trout);
        assert_eq!(StockKind::parse("T"), StockKind::Trout);
        assert_eq!(StockKind::parse("c"), StockKind::Catfish);
        assert_eq!(StockKind::parse("C"), StockKind::Catfish);
        assert_eq!(StockKind::parse(""), StockKind::None);
        assert_eq!(StockKind::parse("?"), StockKind::Unknown);
        assert_eq!(StockKind::parse("xx"), StockKind::Unknown);
    }

    #[test]
    fn test_unknown_counts_as_stocked() {
        assert!(StockKind::Unknown.is_stocked());
        assert!(StockKind::Catfish.is_stocked());
        assert!(!StockKind::None.is_stocked());
        assert_ne!(StockKind::Unknown, StockKind::None);
    }
}
