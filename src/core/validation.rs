use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Maximum number of line items on one invoice.
pub const MAX_ITEMS: usize = 10;
/// Maximum quantity per line.
pub const MAX_QUANTITY: u32 = 99_999;
/// Maximum unit price.
pub const MAX_UNIT_PRICE: Decimal = dec!(10000000);
/// Maximum characters of an item name.
pub const MAX_ITEM_NAME_LEN: usize = 200;
/// Maximum characters of the invoice number and short references.
pub const MAX_SHORT_TEXT_LEN: usize = 60;
/// Maximum characters of a company name or optional party field.
pub const MAX_NAME_LEN: usize = 120;
/// Maximum characters of an address.
pub const MAX_ADDRESS_LEN: usize = 400;
/// Maximum characters of the notes block.
pub const MAX_NOTES_LEN: usize = 1_500;

/// Check invoice data against the bounds of the data model.
/// Returns all violations found (not just the first).
///
/// The document engine never calls this; it trusts its input. Callers that
/// do not run their own validator can use it before rendering. The due date
/// is deliberately not compared to the issue date.
pub fn validate_invoice(invoice: &InvoiceData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let header = &invoice.header;
    require_text(&header.number, "header.number", MAX_SHORT_TEXT_LEN, &mut errors);
    if header.currency_code.chars().count() != 3
        || !header.currency_code.chars().all(|c| c.is_ascii_alphabetic())
    {
        errors.push(ValidationError::with_rule(
            "header.currency_code",
            "currency code must be 3 letters (ISO 4217)",
            "FORMAT-CURRENCY",
        ));
    }
    optional_text(
        header.reference_number.as_deref(),
        "header.reference_number",
        MAX_SHORT_TEXT_LEN,
        &mut errors,
    );
    optional_text(
        header.customer_reference.as_deref(),
        "header.customer_reference",
        MAX_SHORT_TEXT_LEN,
        &mut errors,
    );
    optional_text(
        header.order_number.as_deref(),
        "header.order_number",
        MAX_SHORT_TEXT_LEN,
        &mut errors,
    );

    validate_party(&invoice.seller, "seller", &mut errors);
    validate_party(&invoice.buyer, "buyer", &mut errors);

    if invoice.items.len() > MAX_ITEMS {
        errors.push(ValidationError::with_rule(
            "items",
            format!("invoice cannot have more than {MAX_ITEMS} items"),
            "LIMIT-ITEMS",
        ));
    }
    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if let Some(payment) = &invoice.payment {
        optional_text(
            payment.bank_account.as_deref(),
            "payment.bank_account",
            MAX_NAME_LEN,
            &mut errors,
        );
        optional_text(payment.iban.as_deref(), "payment.iban", MAX_NAME_LEN, &mut errors);
        optional_text(payment.swift.as_deref(), "payment.swift", MAX_NAME_LEN, &mut errors);
    }

    if let Some(notes) = &invoice.options.notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.push(ValidationError::with_rule(
                "options.notes",
                format!("notes cannot exceed {MAX_NOTES_LEN} characters"),
                "LIMIT-LENGTH",
            ));
        }
    }

    errors
}

fn validate_party(party: &PartyInfo, prefix: &str, errors: &mut Vec<ValidationError>) {
    require_text(
        &party.company_name,
        &format!("{prefix}.company_name"),
        MAX_NAME_LEN,
        errors,
    );
    require_text(
        &party.address,
        &format!("{prefix}.address"),
        MAX_ADDRESS_LEN,
        errors,
    );
    let optional = [
        ("company_id", &party.company_id),
        ("tax_id", &party.tax_id),
        ("email", &party.email),
        ("website", &party.website),
    ];
    for (name, value) in optional {
        optional_text(
            value.as_deref(),
            &format!("{prefix}.{name}"),
            MAX_NAME_LEN,
            errors,
        );
    }
}

fn validate_item(item: &InvoiceItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items.{index}");

    require_text(&item.name, &format!("{prefix}.name"), MAX_ITEM_NAME_LEN, errors);

    if item.quantity == 0 || item.quantity > MAX_QUANTITY {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.quantity"),
            format!("quantity must be between 1 and {MAX_QUANTITY}"),
            "RANGE-QUANTITY",
        ));
    }

    if item.unit_price.is_sign_negative() || item.unit_price > MAX_UNIT_PRICE {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.unit_price"),
            format!("unit price must be between 0 and {MAX_UNIT_PRICE}"),
            "RANGE-PRICE",
        ));
    }

    if item.tax_rate.is_sign_negative() || item.tax_rate > dec!(100) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.tax_rate"),
            "tax rate must be between 0 and 100",
            "RANGE-RATE",
        ));
    }
}

fn require_text(value: &str, field: &str, max: usize, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            field,
            "must not be empty",
            "REQUIRED",
        ));
    } else if value.chars().count() > max {
        errors.push(ValidationError::with_rule(
            field,
            format!("cannot exceed {max} characters"),
            "LIMIT-LENGTH",
        ));
    }
}

fn optional_text(value: Option<&str>, field: &str, max: usize, errors: &mut Vec<ValidationError>) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.push(ValidationError::with_rule(
                field,
                format!("cannot exceed {max} characters"),
                "LIMIT-LENGTH",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn party(name: &str) -> PartyInfo {
        PartyInfo {
            company_name: name.into(),
            address: "Hauptstraße 1\n10115 Berlin".into(),
            company_id: None,
            tax_id: None,
            email: None,
            website: None,
        }
    }

    fn invoice(items: Vec<InvoiceItem>) -> InvoiceData {
        InvoiceData {
            header: InvoiceHeader {
                number: "INV-1".into(),
                issue_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                currency_code: "EUR".into(),
                reference_number: None,
                customer_reference: None,
                order_number: None,
            },
            seller: party("ACME GmbH"),
            buyer: party("Kunde AG"),
            items,
            payment: None,
            options: PresentationOptions::default(),
        }
    }

    #[test]
    fn due_date_before_issue_date_is_accepted() {
        let inv = invoice(vec![InvoiceItem::new("Beratung", 1, dec!(100), dec!(19))]);
        assert!(validate_invoice(&inv).is_empty());
    }

    #[test]
    fn item_ranges() {
        let inv = invoice(vec![
            InvoiceItem::new("", 0, dec!(-1), dec!(101)),
        ]);
        let errors = validate_invoice(&inv);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"items.0.name"));
        assert!(fields.contains(&"items.0.quantity"));
        assert!(fields.contains(&"items.0.unit_price"));
        assert!(fields.contains(&"items.0.tax_rate"));
    }

    #[test]
    fn too_many_items() {
        let items = (0..=MAX_ITEMS)
            .map(|i| InvoiceItem::new(format!("Item {i}"), 1, dec!(1), dec!(0)))
            .collect();
        let errors = validate_invoice(&invoice(items));
        assert!(errors.iter().any(|e| e.rule.as_deref() == Some("LIMIT-ITEMS")));
    }

    #[test]
    fn currency_must_be_three_letters() {
        let mut inv = invoice(Vec::new());
        inv.header.currency_code = "EURO".into();
        let errors = validate_invoice(&inv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "header.currency_code");
    }
}
