//! Formatting helpers shared by the terminal views

use crate::models::{BalanceFlag, Money};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format a header line centered in `width`
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Marker column for a flagged day
pub fn flag_marker(flag: BalanceFlag) -> &'static str {
    match flag {
        BalanceFlag::None => "",
        BalanceFlag::Low => "LOW",
        BalanceFlag::Neg => "NEG !",
    }
}

/// Money with a sign always shown, e.g. "+$12.00" / "-$3.50"
pub fn format_signed(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        amount.format_with_symbol(symbol)
    } else {
        format!("+{}", amount.format_with_symbol(symbol))
    }
}

/// Blank for zero amounts so busy tables stay readable
pub fn format_nonzero(amount: Money, symbol: &str) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.format_with_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rent", 10), "Rent");
        assert_eq!(truncate("Car payment", 8), "Car p...");
        assert_eq!(truncate("Café crème", 7), "Café...");
        assert_eq!(truncate("abc", 2), "..");
    }

    #[test]
    fn test_header_and_separator() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }

    #[test]
    fn test_signed_and_nonzero() {
        assert_eq!(format_signed(Money::from_units(12), "$"), "+$12.00");
        assert_eq!(format_signed(Money::from_cents(-350), "$"), "-$3.50");
        assert_eq!(format_nonzero(Money::zero(), "$"), "");
        assert_eq!(format_nonzero(Money::from_units(5), "€"), "€5.00");
    }

    #[test]
    fn test_flag_marker() {
        assert_eq!(flag_marker(BalanceFlag::None), "");
        assert_eq!(flag_marker(BalanceFlag::Low), "LOW");
        assert_eq!(flag_marker(BalanceFlag::Neg), "NEG !");
    }
}
