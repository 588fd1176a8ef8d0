//! Property-based tests for totals, wrapping and assembly.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use proptest::prelude::*;
use rechnung_pdf::core::*;
use rechnung_pdf::document::{LayoutConfig, Step, StepStatus, assemble};
use rechnung_pdf::layout::wrap_text;
use rechnung_pdf::money::{MoneyPolicy, calculate_totals, format_amount};
use rust_decimal::Decimal;

fn arb_item() -> impl Strategy<Value = InvoiceItem> {
    (1u32..=99_999, 0i64..=100_000_000, 0u32..=10_000).prop_map(|(qty, cents, rate_bp)| {
        InvoiceItem::new(
            "Item",
            qty,
            Decimal::new(cents, 2),
            Decimal::new(i64::from(rate_bp), 2),
        )
    })
}

fn arb_items() -> impl Strategy<Value = Vec<InvoiceItem>> {
    prop::collection::vec(arb_item(), 0..=10)
}

fn arb_words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Zäöüß0-9.,-]{1,15}", 0..40).prop_map(|words| words.join(" "))
}

fn invoice(items: Vec<InvoiceItem>) -> InvoiceData {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut builder = InvoiceBuilder::new("PROP-1", date, date)
        .seller(PartyBuilder::new("Seller", "Street 1").build())
        .buyer(PartyBuilder::new("Buyer", "Street 2").build());
    for item in items {
        builder = builder.add_item(item);
    }
    builder.build_unchecked().unwrap()
}

proptest! {
    /// Net and tax totals are exact sums of the per-line products.
    #[test]
    fn totals_are_exact_sums(items in arb_items()) {
        let totals = calculate_totals(&items, &MoneyPolicy::default());

        let net: Decimal = items
            .iter()
            .map(|i| Decimal::from(i.quantity) * i.unit_price)
            .sum();
        let tax: Decimal = items
            .iter()
            .map(|i| Decimal::from(i.quantity) * i.unit_price * i.tax_rate / Decimal::ONE_HUNDRED)
            .sum();

        prop_assert_eq!(totals.net_total, net);
        prop_assert_eq!(totals.tax_total, tax);
        prop_assert_eq!(totals.grand_total, net + tax);
        prop_assert_eq!(totals.lines.len(), items.len());
    }

    /// Display formatting always has exactly two fraction digits.
    #[test]
    fn formatted_amounts_have_two_decimals(items in arb_items()) {
        let policy = MoneyPolicy::default();
        let totals = calculate_totals(&items, &policy);
        let text = format_amount(totals.grand_total, &policy);
        let (_, frac) = text.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), 2);
    }

    /// Wrapping never splits, drops or reorders words.
    #[test]
    fn wrap_preserves_words(text in arb_words(), width in 1usize..60) {
        let lines = wrap_text(&text, width).into_value();

        let original: Vec<&str> = text.split_whitespace().collect();
        let wrapped: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(wrapped, original);

        for line in &lines {
            let len = line.chars().count();
            // only a single over-long word may exceed the budget
            prop_assert!(len <= width || !line.contains(' '));
        }
    }

    /// Same input, same lines.
    #[test]
    fn wrap_is_deterministic(text in arb_words(), width in 0usize..60) {
        prop_assert_eq!(wrap_text(&text, width), wrap_text(&text, width));
    }

    /// Assembly of identical input yields identical documents, and the only
    /// step that may degrade is a table whose figures outgrow the page.
    #[test]
    fn assembly_is_deterministic(items in arb_items()) {
        let data = invoice(items);
        let config = LayoutConfig::default();
        let first = assemble(&data, &MoneyPolicy::default(), &config);
        let second = assemble(&data, &MoneyPolicy::default(), &config);
        for report in first.degradations() {
            prop_assert_eq!(report.step, Step::Table);
            let columns_exceed_width = matches!(
                report.status,
                StepStatus::Degraded(DegradeReason::ColumnsExceedWidth { .. })
            );
            prop_assert!(columns_exceed_width);
        }
        prop_assert_eq!(first, second);
    }
}
