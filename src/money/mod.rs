//! Exact decimal invoice arithmetic.
//!
//! All sums and products use [`rust_decimal::Decimal`] at full precision.
//! Rounding to display precision happens only in [`format_amount`] /
//! [`MoneyPolicy::round`], never while totals are accumulated.
//!
//! ```rust
//! use rechnung_pdf::core::InvoiceItem;
//! use rechnung_pdf::money::{calculate_totals, format_amount, MoneyPolicy};
//! use rust_decimal_macros::dec;
//!
//! let policy = MoneyPolicy::default();
//! let totals = calculate_totals(&[InvoiceItem::new("Widget", 3, dec!(0.1), dec!(0))], &policy);
//! assert_eq!(totals.net_total, dec!(0.3));
//! assert_eq!(format_amount(totals.net_total, &policy), "0.30");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::core::InvoiceItem;

/// Precision and rounding rules, passed explicitly into every calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneyPolicy {
    /// Significant digits kept for intermediate results.
    pub significant_digits: u32,
    /// Fraction digits of displayed amounts.
    pub display_scale: u32,
    /// Strategy for both intermediate bounding and display rounding.
    pub rounding: RoundingStrategy,
}

impl Default for MoneyPolicy {
    /// 28 significant digits, two fraction digits, round half up.
    fn default() -> Self {
        Self {
            significant_digits: 28,
            display_scale: 2,
            rounding: RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl MoneyPolicy {
    /// Round a value to display precision.
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.display_scale, self.rounding)
    }

    /// Bound an intermediate result to the configured significant digits.
    fn bound(&self, value: Decimal) -> Decimal {
        let digits = value.mantissa().unsigned_abs().checked_ilog10().map_or(1, |d| d + 1);
        if digits <= self.significant_digits {
            return value;
        }
        value
            .round_sf_with_strategy(self.significant_digits, self.rounding)
            .unwrap_or(value)
    }
}

/// Computed amounts of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineAmounts {
    /// quantity × unit price.
    pub net: Decimal,
    /// net × rate / 100.
    pub tax: Decimal,
    /// net + tax.
    pub gross: Decimal,
}

/// Invoice-level totals, computed once and read by the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    /// Per-item amounts in item order.
    pub lines: Vec<LineAmounts>,
    pub net_total: Decimal,
    pub tax_total: Decimal,
    /// net_total + tax_total.
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    pub fn zero() -> Self {
        Self {
            lines: Vec::new(),
            net_total: Decimal::ZERO,
            tax_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

/// Compute the amounts of a single item.
pub fn line_amounts(item: &InvoiceItem, policy: &MoneyPolicy) -> LineAmounts {
    let net = policy.bound(Decimal::from(item.quantity) * item.unit_price);
    let tax = policy.bound(net * item.tax_rate / dec!(100));
    LineAmounts {
        net,
        tax,
        gross: net + tax,
    }
}

/// Compute per-item and invoice-level totals.
///
/// An empty item list yields all-zero totals.
pub fn calculate_totals(items: &[InvoiceItem], policy: &MoneyPolicy) -> InvoiceTotals {
    let lines: Vec<LineAmounts> = items.iter().map(|i| line_amounts(i, policy)).collect();

    let mut net_total = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;
    for line in &lines {
        net_total += line.net;
        tax_total += line.tax;
    }

    InvoiceTotals {
        lines,
        net_total,
        tax_total,
        grand_total: net_total + tax_total,
    }
}

/// Format an amount with exactly `display_scale` fraction digits and a `.`
/// decimal point (e.g. `0.3` → `"0.30"`).
pub fn format_amount(value: Decimal, policy: &MoneyPolicy) -> String {
    let mut rounded = policy.round(value);
    rounded.rescale(policy.display_scale);
    if rounded.is_zero() {
        // -0.00 prints as 0.00
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Format a tax rate without trailing zeros (`19.00` → `"19"`, `7.50` → `"7.5"`).
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}
