use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::RenderError;
use super::types::*;
use super::validation;
use crate::locale::Language;
use crate::theme::ThemeColor;

/// Builder for constructing invoice input.
///
/// ```
/// use rechnung_pdf::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(
///     "INV-2024-001",
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
/// )
/// .seller(PartyBuilder::new("ACME GmbH", "Friedrichstraße 123\n10115 Berlin")
///     .tax_id("DE123456789")
///     .build())
/// .buyer(PartyBuilder::new("Kunde AG", "Marienplatz 1\n80331 München").build())
/// .add_item(InvoiceItem::new("Beratung", 10, dec!(150.00), dec!(19)))
/// .build()
/// .unwrap();
///
/// assert_eq!(invoice.items.len(), 1);
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    currency_code: String,
    reference_number: Option<String>,
    customer_reference: Option<String>,
    order_number: Option<String>,
    seller: Option<PartyInfo>,
    buyer: Option<PartyInfo>,
    items: Vec<InvoiceItem>,
    payment: Option<PaymentInfo>,
    options: PresentationOptions,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date,
            currency_code: "EUR".to_string(),
            reference_number: None,
            customer_reference: None,
            order_number: None,
            seller: None,
            buyer: None,
            items: Vec::new(),
            payment: None,
            options: PresentationOptions::default(),
        }
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn reference_number(mut self, reference: impl Into<String>) -> Self {
        self.reference_number = Some(reference.into());
        self
    }

    pub fn customer_reference(mut self, reference: impl Into<String>) -> Self {
        self.customer_reference = Some(reference.into());
        self
    }

    pub fn order_number(mut self, number: impl Into<String>) -> Self {
        self.order_number = Some(number.into());
        self
    }

    pub fn seller(mut self, party: PartyInfo) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: PartyInfo) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn payment(mut self, payment: PaymentInfo) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn options(mut self, options: PresentationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn color(mut self, color: ThemeColor) -> Self {
        self.options.color = color;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.options.language = language;
        self
    }

    pub fn tax_system(mut self, system: TaxSystem) -> Self {
        self.options.tax_system = system;
        self
    }

    pub fn show_tax(mut self, show: bool) -> Self {
        self.options.show_tax = show;
        self
    }

    pub fn reverse_charge(mut self, reverse_charge: bool) -> Self {
        self.options.reverse_charge = reverse_charge;
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.options.paid = paid;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.options.notes = Some(notes.into());
        self
    }

    /// Build the invoice and run [`validate_invoice`](validation::validate_invoice).
    /// Returns all check failures (not just the first).
    pub fn build(self) -> Result<InvoiceData, RenderError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(RenderError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without the input checks; useful for testing layout edge cases.
    pub fn build_unchecked(self) -> Result<InvoiceData, RenderError> {
        let seller = self
            .seller
            .ok_or_else(|| RenderError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| RenderError::Builder("buyer is required".into()))?;

        Ok(InvoiceData {
            header: InvoiceHeader {
                number: self.number,
                issue_date: self.issue_date,
                due_date: self.due_date,
                currency_code: self.currency_code,
                reference_number: self.reference_number,
                customer_reference: self.customer_reference,
                order_number: self.order_number,
            },
            seller,
            buyer,
            items: self.items,
            payment: self.payment,
            options: self.options,
        })
    }
}

/// Builder for [`PartyInfo`] (seller/buyer).
pub struct PartyBuilder {
    company_name: String,
    address: String,
    company_id: Option<String>,
    tax_id: Option<String>,
    email: Option<String>,
    website: Option<String>,
}

impl PartyBuilder {
    pub fn new(company_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            address: address.into(),
            company_id: None,
            tax_id: None,
            email: None,
            website: None,
        }
    }

    pub fn company_id(mut self, id: impl Into<String>) -> Self {
        self.company_id = Some(id.into());
        self
    }

    pub fn tax_id(mut self, id: impl Into<String>) -> Self {
        self.tax_id = Some(id.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn build(self) -> PartyInfo {
        PartyInfo {
            company_name: self.company_name,
            address: self.address,
            company_id: self.company_id,
            tax_id: self.tax_id,
            email: self.email,
            website: self.website,
        }
    }
}

/// Builder for [`InvoiceItem`]. Quantity defaults to 1 and the tax rate to 0.
pub struct ItemBuilder {
    name: String,
    quantity: u32,
    unit_price: Decimal,
    tax_rate: Decimal,
}

impl ItemBuilder {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            unit_price,
            tax_rate: Decimal::ZERO,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Percentage, e.g. `dec!(19)`.
    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn build(self) -> InvoiceItem {
        InvoiceItem {
            name: self.name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_rate: self.tax_rate,
        }
    }
}
