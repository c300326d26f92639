use serde::{Deserialize, Serialize};

/// Monthly income against expenses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub income: f64,
    pub expenses: f64,
}

impl Budget {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self { income, expenses }
    }

    /// Positive for a surplus, negative for a deficit.
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }

    pub fn is_deficit(&self) -> bool {
        self.balance() < 0.0
    }

    /// Share of income left over, in percent. `None` without income.
    pub fn savings_rate(&self) -> Option<f64> {
        (self.income > 0.0).then(|| self.balance() / self.income * 100.0)
    }
}

/// Parse a loosely written amount such as `30000`, `30,000`, `₹30K` or `1.2L`.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('₹')
        .trim_start_matches("Rs.")
        .trim_start_matches("Rs")
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let (digits, multiplier) = match cleaned.chars().last() {
        Some('k' | 'K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('l' | 'L') => (&cleaned[..cleaned.len() - 1], 100_000.0),
        _ => (cleaned.as_str(), 1.0),
    };
    let value: f64 = digits.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surplus() {
        let b = Budget::new(30_000.0, 25_000.0);
        assert_eq!(b.balance(), 5_000.0);
        assert!(!b.is_deficit());
        let rate = b.savings_rate().unwrap();
        assert!((rate - 16.666).abs() < 0.01);
    }

    #[test]
    fn deficit_and_zero_income() {
        assert!(Budget::new(20_000.0, 25_000.0).is_deficit());
        assert_eq!(Budget::new(0.0, 100.0).savings_rate(), None);
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(parse_amount("30000"), Some(30_000.0));
        assert_eq!(parse_amount("30,000"), Some(30_000.0));
        assert_eq!(parse_amount("₹30K"), Some(30_000.0));
        assert_eq!(parse_amount("1.5L"), Some(150_000.0));
        assert_eq!(parse_amount("Rs 500"), Some(500.0));
        assert_eq!(parse_amount("unknown"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-5"), None);
    }
}
