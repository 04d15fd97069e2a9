//! Budget range value object

use serde::{Deserialize, Serialize};

/// A per-person budget range in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: i64,
    pub max: i64,
}

impl BudgetRange {
    /// Used when nobody eligible has given both bounds
    pub const DEFAULT: BudgetRange = BudgetRange {
        min: 3000,
        max: 5000,
    };

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Parse free text like `"3000-5000"`
    ///
    /// Splits on the first `-` and parses both halves. Returns `None` when
    /// the text is not of that shape; callers treat that as "no budget given".
    pub fn parse(text: &str) -> Option<Self> {
        let (min, max) = text.split_once('-')?;
        let min = min.trim().parse().ok()?;
        let max = max.trim().parse().ok()?;
        Some(Self { min, max })
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "¥{}〜¥{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(BudgetRange::parse("3000-5000"), Some(BudgetRange::new(3000, 5000)));
        assert_eq!(BudgetRange::parse(" 2000 - 4000 "), Some(BudgetRange::new(2000, 4000)));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(BudgetRange::parse("3000"), None);
        assert_eq!(BudgetRange::parse("cheap-ish"), None);
        assert_eq!(BudgetRange::parse("3000-5000-7000"), None);
        assert_eq!(BudgetRange::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BudgetRange::DEFAULT.to_string(), "¥3000〜¥5000");
    }
}
