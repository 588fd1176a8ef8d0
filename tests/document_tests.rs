use chrono::NaiveDate;
use rechnung_pdf::core::*;
use rechnung_pdf::document::{
    ColumnKind, Element, InvoiceDocument, LayoutConfig, PageSize, Step, StepStatus, assemble,
};
use rechnung_pdf::locale::Language;
use rechnung_pdf::money::MoneyPolicy;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base() -> InvoiceBuilder {
    InvoiceBuilder::new("INV-2024-042", date(2024, 6, 15), date(2024, 7, 15))
        .seller(
            PartyBuilder::new("ACME GmbH", "Friedrichstraße 123\n10115 Berlin")
                .tax_id("DE123456789")
                .email("billing@acme.de")
                .build(),
        )
        .buyer(
            PartyBuilder::new("Client SARL", "12 Rue de Rivoli\n75001 Paris")
                .tax_id("FR12345678901")
                .build(),
        )
}

fn with_items(builder: InvoiceBuilder, count: usize) -> InvoiceBuilder {
    (0..count).fold(builder, |b, i| {
        b.add_item(InvoiceItem::new(format!("Consulting block {i}"), 2, dec!(125.50), dec!(19)))
    })
}

fn render(data: &InvoiceData) -> InvoiceDocument {
    assemble(data, &MoneyPolicy::default(), &LayoutConfig::default())
}

fn status(doc: &InvoiceDocument, step: Step) -> &StepStatus {
    &doc.report(step).unwrap().status
}

#[test]
fn ten_items_fit_on_one_page() {
    let data = with_items(base(), 10).build().unwrap();
    let doc = render(&data);

    assert_eq!(doc.page_count(), 1);
    assert!(doc.degradations().is_empty());
    let table = doc.table.as_ref().unwrap();
    assert_eq!(table.rows, 10);
    assert_eq!(table.header_pages, vec![1]);
    assert_eq!(doc.totals.net_total, dec!(2510.00));
    assert!(doc.contains_text("Invoice No. INV-2024-042"));
    assert!(doc.contains_text("€2,986.90"));
}

#[test]
fn empty_invoice_has_header_only_table_and_zero_totals() {
    let data = base().build().unwrap();
    let doc = render(&data);

    let table = doc.table.as_ref().unwrap();
    assert_eq!(table.rows, 0);
    assert_eq!(table.columns.len(), 7);
    assert!(doc.totals.grand_total.is_zero());
    assert!(doc.contains_text("Description"));
    assert!(doc.contains_text("€0.00"));
}

#[test]
fn reverse_charge_is_vat_only() {
    let vat = with_items(base(), 1)
        .tax_system(TaxSystem::Vat)
        .reverse_charge(true)
        .build()
        .unwrap();
    let doc = render(&vat);
    assert!(doc.contains_text("Reverse charge"));
    assert_eq!(status(&doc, Step::ReverseCharge), &StepStatus::Ok);

    let sales = with_items(base(), 1)
        .tax_system(TaxSystem::SalesTax)
        .reverse_charge(true)
        .build()
        .unwrap();
    let doc = render(&sales);
    assert!(!doc.contains_text("Reverse charge"));
    assert_eq!(status(&doc, Step::ReverseCharge), &StepStatus::Skipped);
}

#[test]
fn paid_marker_replaces_grand_total() {
    let data = with_items(base(), 3).paid(true).build().unwrap();
    let doc = render(&data);

    let grand_total = "€896.07";
    assert!(doc.contains_text("PAID"));
    assert!(!doc.contains_text(grand_total));
    // the computed total is unchanged
    assert_eq!(doc.totals.grand_total, dec!(896.07));

    let unpaid = render(&with_items(base(), 3).build().unwrap());
    assert!(unpaid.contains_text(grand_total));
    assert!(!unpaid.contains_text("PAID"));
}

#[test]
fn hidden_tax_drops_columns_and_breakdown() {
    let data = with_items(base(), 2).show_tax(false).build().unwrap();
    let doc = render(&data);

    assert_eq!(doc.table_column_count(), Some(4));
    assert_eq!(
        doc.table.as_ref().unwrap().columns,
        vec![
            ColumnKind::Description,
            ColumnKind::Quantity,
            ColumnKind::UnitPrice,
            ColumnKind::Total,
        ]
    );
    assert!(!doc.contains_text("Subtotal"));
    assert!(!doc.contains_text("Total VAT"));
    assert!(doc.contains_text("Total due"));
    // totals still include tax
    assert_eq!(doc.totals.tax_total, dec!(95.38));
}

#[test]
fn long_item_names_paginate_with_repeated_headers() {
    let name = "Implementation of the quarterly reporting pipeline including data \
                extraction, transformation, validation and delivery to the finance \
                department, with documentation and two follow-up review sessions";
    let data = (0..10)
        .fold(base(), |b, i| {
            b.add_item(InvoiceItem::new(format!("{i}. {name}"), 1, dec!(990), dec!(19)))
        })
        .build()
        .unwrap();
    let doc = render(&data);

    assert!(doc.page_count() >= 2);
    let table = doc.table.as_ref().unwrap();
    assert_eq!(table.rows, 10);
    for (i, page) in table.header_pages.iter().enumerate() {
        assert_eq!(*page, i + 1);
        assert!(doc.pages[page - 1].contains_text("Description"));
    }
    assert!(table.header_pages.len() >= 2);

    let pages = doc.page_count();
    for page in &doc.pages {
        let label = format!("Page {} of {pages}", page.number);
        assert_eq!(page.texts().filter(|t| *t == label).count(), 1);
    }
}

#[test]
fn many_rows_flow_across_pages() {
    let data = with_items(base(), 80).build_unchecked().unwrap();
    let doc = render(&data);

    assert!(doc.page_count() >= 3);
    assert_eq!(doc.table.as_ref().unwrap().rows, 80);
    assert!(doc.contains_text("Consulting block 79"));
    assert!(doc.pages.last().unwrap().contains_text("Total due"));
    for page in &doc.pages {
        assert!(page.contains_text("Description"), "page {} lacks header", page.number);
    }
}

#[test]
fn table_failure_keeps_the_rest_of_the_document() {
    let config = LayoutConfig {
        margin: 140.0,
        ..LayoutConfig::default()
    };
    let data = with_items(base(), 2).notes("Thanks!").build().unwrap();
    let doc = assemble(&data, &MoneyPolicy::default(), &config);

    assert!(doc.table.is_none());
    assert!(matches!(
        status(&doc, Step::Table),
        StepStatus::Degraded(DegradeReason::ColumnsExceedWidth { .. })
    ));
    assert_eq!(doc.degradations().len(), 1);
    assert!(doc.contains_text("Invoice No. INV-2024-042"));
    assert!(doc.contains_text("Total due"));
    assert!(doc.contains_text("Thanks!"));
    assert!(doc.contains_text("Page 1 of 1"));
    assert!(!doc.contains_text("Consulting block 0"));
}

#[test]
fn oversized_row_omits_the_table() {
    let huge = "word ".repeat(2_000);
    let data = base()
        .add_item(InvoiceItem::new(huge, 1, dec!(1), dec!(0)))
        .build_unchecked()
        .unwrap();
    let doc = render(&data);

    assert!(doc.table.is_none());
    assert!(matches!(
        status(&doc, Step::Table),
        StepStatus::Degraded(DegradeReason::RowExceedsPage { row: 0, .. })
    ));
    assert_eq!(status(&doc, Step::Summary), &StepStatus::Ok);
    assert!(doc.contains_text("€1.00"));
}

fn at_the_limits(show_tax: bool) -> InvoiceData {
    (0..10)
        .fold(base().show_tax(show_tax), |b, _| {
            b.add_item(InvoiceItem::new("Maximum position", 99_999, dec!(10000000), dec!(100)))
        })
        .build()
        .unwrap()
}

#[test]
fn largest_accepted_amounts_widen_their_columns() {
    let doc = render(&at_the_limits(false));

    assert!(doc.degradations().is_empty());
    assert_eq!(doc.table.as_ref().unwrap().rows, 10);
    assert_eq!(doc.totals.grand_total, dec!(19999800000000));
    assert!(doc.contains_text("€1,999,980,000,000.00"));
    assert!(doc.contains_text("€19,999,800,000,000.00"));
}

#[test]
fn amounts_too_wide_for_seven_columns_are_reported() {
    let doc = render(&at_the_limits(true));

    assert!(doc.table.is_none());
    let degradations = doc.degradations();
    assert_eq!(degradations.len(), 1);
    assert_eq!(degradations[0].step, Step::Table);
    assert!(matches!(
        degradations[0].status,
        StepStatus::Degraded(DegradeReason::ColumnsExceedWidth { .. })
    ));
    assert_eq!(status(&doc, Step::Summary), &StepStatus::Ok);
    assert!(doc.contains_text("€9,999,900,000,000.00"));
    assert!(doc.contains_text("€19,999,800,000,000.00"));
}

#[test]
fn optional_party_fields_are_omitted() {
    let data = InvoiceBuilder::new("INV-1", date(2024, 1, 1), date(2024, 1, 2))
        .seller(PartyBuilder::new("Solo", "Somewhere 1").build())
        .buyer(PartyBuilder::new("Buyer", "Elsewhere 2").website("buyer.example").build())
        .build()
        .unwrap();
    let doc = render(&data);

    assert!(!doc.contains_text("VAT ID"));
    assert!(!doc.contains_text("Email"));
    assert!(doc.contains_text("Website: buyer.example"));
    assert_eq!(status(&doc, Step::Payment), &StepStatus::Skipped);
    assert_eq!(status(&doc, Step::Notes), &StepStatus::Skipped);
}

#[test]
fn payment_block_lists_bank_details() {
    let data = with_items(base(), 1)
        .payment(
            PaymentInfo::new(PaymentMethod::BankTransfer)
                .iban("DE89370400440532013000")
                .swift("COBADEFFXXX"),
        )
        .build()
        .unwrap();
    let doc = render(&data);

    assert!(doc.contains_text("Payment method: Bank transfer"));
    assert!(doc.contains_text("IBAN: DE89370400440532013000"));
    assert!(doc.contains_text("SWIFT/BIC: COBADEFFXXX"));
    assert!(!doc.contains_text("Bank account"));
}

#[test]
fn german_labels_and_number_format() {
    let data = with_items(base(), 4)
        .language(Language::De)
        .currency("EUR")
        .build()
        .unwrap();
    let doc = render(&data);

    assert_eq!(doc.language, "de");
    assert!(doc.contains_text("Seite 1 von 1"));
    assert!(doc.contains_text("USt-IdNr.: DE123456789"));
    assert!(doc.contains_text("1.194,76 €"));
}

#[test]
fn russian_labels_render() {
    let data = with_items(base(), 1).language(Language::Ru).build().unwrap();
    let doc = render(&data);
    assert!(doc.contains_text("Страница 1 из 1"));
}

#[test]
fn letter_pages_use_letter_dimensions() {
    let config = LayoutConfig {
        page_size: PageSize::Letter,
        attribution: None,
        ..LayoutConfig::default()
    };
    let doc = assemble(&base().build().unwrap(), &MoneyPolicy::default(), &config);
    assert_eq!(doc.page_size, (612.0, 792.0));
    assert!(!doc.contains_text("Created with"));
}

#[test]
fn elements_stay_inside_the_page_width() {
    let doc = render(&with_items(base(), 10).build().unwrap());
    let (width, _) = doc.page_size;
    for element in doc.pages.iter().flat_map(|p| &p.elements) {
        match element {
            Element::Text { x, .. } => assert!(*x >= 0.0 && *x <= width),
            Element::Rect { x, width: w, .. } => assert!(*x >= 0.0 && x + w <= width + 0.01),
            Element::Line { x1, x2, .. } => assert!(*x1 >= 0.0 && *x2 <= width),
        }
    }
}

#[test]
fn assembly_is_deterministic() {
    let data = with_items(base(), 7).notes("Payable within 30 days.").build().unwrap();
    assert_eq!(render(&data), render(&data));
}
