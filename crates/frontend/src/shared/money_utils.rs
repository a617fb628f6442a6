//! Display formatting for rupee amounts.
//!
//! Amounts travel as `rust_decimal::Decimal` and are formatted with the
//! Indian digit grouping (last three digits, then pairs): 1349900 renders
//! as `₹13,49,900.00`.

use rust_decimal::Decimal;

/// Format an amount as INR with two decimal places.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };
    format!("{}₹{}.{:0<2}", sign, group_indian(int_part), frac_part)
}

fn group_indian(digits: &str) -> String {
    let n = digits.len();
    if n <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(n - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    if i > 0 {
        groups.push(&head[..i]);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_amounts() {
        assert_eq!(format_inr(Decimal::from(0)), "₹0.00");
        assert_eq!(format_inr(Decimal::from(999)), "₹999.00");
        assert_eq!(format_inr(Decimal::from(13999)), "₹13,999.00");
    }

    #[test]
    fn formats_fractional_amounts() {
        assert_eq!(format_inr(Decimal::new(1649522, 2)), "₹16,495.22");
        assert_eq!(format_inr(Decimal::new(139795, 1)), "₹13,979.50");
    }

    #[test]
    fn uses_indian_grouping_for_large_amounts() {
        assert_eq!(format_inr(Decimal::from(1349900)), "₹13,49,900.00");
        assert_eq!(format_inr(Decimal::new(1234567895, 1)), "₹12,34,56,789.50");
    }

    #[test]
    fn keeps_the_sign_outside_the_currency_mark() {
        assert_eq!(format_inr(Decimal::from(-250)), "-₹250.00");
    }
}
