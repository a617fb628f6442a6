//! Display pricing for the review panel.
//!
//! Advisory only: the backend recomputes the charge at submission and the
//! stored order carries the authoritative amounts.

use rust_decimal::Decimal;

/// GST applied to the post-discount subtotal.
fn gst_rate() -> Decimal {
    Decimal::new(18, 2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base: Decimal,
    pub discount: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// `subtotal = max(0, base - discount)`, tax on the subtotal, both
    /// rounded to paise.
    pub fn calculate(base: Decimal, discount: Decimal) -> Self {
        let subtotal = (base - discount).max(Decimal::ZERO);
        let tax = (subtotal * gst_rate()).round_dp(2);
        let total = (subtotal + tax).round_dp(2);
        Self {
            base,
            discount,
            subtotal,
            tax,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scenario_with_discount() {
        let price = PriceBreakdown::calculate(Decimal::new(13999, 0), Decimal::new(20, 0));
        assert_eq!(price.subtotal, Decimal::new(13979, 0));
        assert_eq!(price.tax, Decimal::new(251622, 2));
        assert_eq!(price.total, Decimal::new(1649522, 2));
    }

    #[test]
    fn subtotal_never_drops_below_zero() {
        let price = PriceBreakdown::calculate(Decimal::new(500, 0), Decimal::new(9000, 0));
        assert_eq!(price.subtotal, Decimal::ZERO);
        assert_eq!(price.tax, Decimal::ZERO);
        assert_eq!(price.total, Decimal::ZERO);
    }

    #[test]
    fn zero_discount_taxes_the_full_base() {
        let price = PriceBreakdown::calculate(Decimal::new(99999, 2), Decimal::ZERO);
        assert_eq!(price.subtotal, Decimal::new(99999, 2));
        // 999.99 * 0.18 = 179.9982, rounded to paise
        assert_eq!(price.tax, Decimal::new(18000, 2));
        assert_eq!(price.total, Decimal::new(117999, 2));
    }
}
