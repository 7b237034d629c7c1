use crate::domain::payment::Amount;
use rust_decimal::{Decimal, RoundingStrategy};

/// How integer digits are grouped with `,`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Grouping {
    /// Groups of three: `1,250,000`.
    Western,
    /// Last three digits, then groups of two: `12,50,000`.
    Indian,
}

/// Renders decimal amounts as fixed-point currency strings.
///
/// Rounds half away from zero to exactly two fraction digits on the decimal
/// value itself, so the displayed cents never depend on float conversion.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    grouping: Grouping,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::inr()
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Indian rupees with lakh grouping, e.g. `₹1,25,000.00`.
    pub fn inr() -> Self {
        Self::new("₹", Grouping::Indian)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, amount: Amount) -> String {
        self.format_decimal(amount.value())
    }

    pub fn format_decimal(&self, value: Decimal) -> String {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        format!(
            "{sign}{}{}.{fraction}",
            self.symbol,
            group_digits(integer, self.grouping)
        )
    }
}

fn group_digits(integer: &str, grouping: Grouping) -> String {
    let len = integer.len();
    if len <= 3 {
        return integer.to_string();
    }
    let (head, tail) = integer.split_at(len - 3);
    let step = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > step {
        groups.push(&head[end - step..end]);
        end -= step;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inr(value: Decimal) -> String {
        CurrencyFormatter::inr().format_decimal(value)
    }

    #[test]
    fn test_two_fraction_digits_always() {
        assert_eq!(inr(dec!(1250.0)), "₹1,250.00");
        assert_eq!(inr(dec!(0)), "₹0.00");
        assert_eq!(inr(dec!(890.5)), "₹890.50");
        assert_eq!(inr(dec!(7)), "₹7.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(inr(dec!(125000)), "₹1,25,000.00");
        assert_eq!(inr(dec!(12345678.9)), "₹1,23,45,678.90");
        assert_eq!(inr(dec!(999)), "₹999.00");
    }

    #[test]
    fn test_western_grouping() {
        let usd = CurrencyFormatter::new("$", Grouping::Western);
        assert_eq!(usd.format_decimal(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(usd.format_decimal(dec!(100000)), "$100,000.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(inr(dec!(0.125)), "₹0.13");
        assert_eq!(inr(dec!(0.135)), "₹0.14");
        assert_eq!(inr(dec!(1.005)), "₹1.01");
        assert_eq!(inr(dec!(999.995)), "₹1,000.00");
        assert_eq!(inr(dec!(0.004)), "₹0.00");
    }

    #[test]
    fn test_negative_sign_precedes_symbol() {
        assert_eq!(inr(dec!(-1250.5)), "-₹1,250.50");
        assert_eq!(inr(dec!(-0.001)), "₹0.00");
    }
}
