use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::locale::Language;
use crate::theme::ThemeColor;

/// The complete, already-checked input to the document engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceData {
    pub header: InvoiceHeader,
    pub seller: PartyInfo,
    pub buyer: PartyInfo,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    /// Payment block; omitted from the document when absent.
    #[serde(default)]
    pub payment: Option<PaymentInfo>,
    #[serde(default)]
    pub options: PresentationOptions,
}

/// Invoice number, dates, currency and references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub number: String,
    pub issue_date: NaiveDate,
    /// Not required to fall on or after the issue date.
    pub due_date: NaiveDate,
    /// ISO 4217 code (e.g. "EUR"), shown through the currency symbol table.
    pub currency_code: String,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub customer_reference: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
}

/// Seller or buyer.
///
/// Absent optional fields are left out of the layout entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyInfo {
    pub company_name: String,
    /// Free text, may contain line breaks.
    pub address: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A single billed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,
    /// At least 1.
    pub quantity: u32,
    /// Non-negative unit net price.
    pub unit_price: Decimal,
    /// Percentage in `0..=100`.
    pub tax_rate: Decimal,
}

impl InvoiceItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }
}

/// How the buyer is asked to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    BankTransfer,
    Cash,
    CreditCard,
    PayPal,
    Wise,
    Unknown,
}

impl PaymentMethod {
    pub fn id(&self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::PayPal => "paypal",
            Self::Wise => "wise",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a selector string; anything unrecognized maps to `Unknown`.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "bank_transfer" | "bank-transfer" | "bank" => Self::BankTransfer,
            "cash" => Self::Cash,
            "credit_card" | "credit-card" | "card" => Self::CreditCard,
            "paypal" => Self::PayPal,
            "wise" => Self::Wise,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.id().to_string()
    }
}

/// Payment method plus optional bank details.
///
/// Bank fields are printed whenever present, whatever the method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub swift: Option<String>,
}

impl PaymentInfo {
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            method,
            bank_account: None,
            iban: None,
            swift: None,
        }
    }

    pub fn bank_account(mut self, account: impl Into<String>) -> Self {
        self.bank_account = Some(account.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }
}

/// Tax terminology family used for labels and the reverse-charge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaxSystem {
    #[default]
    Vat,
    Gst,
    SalesTax,
    None,
}

impl TaxSystem {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Vat => "vat",
            Self::Gst => "gst",
            Self::SalesTax => "sales_tax",
            Self::None => "none",
        }
    }

    /// Parse a selector string; unknown values resolve to `Vat`.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "gst" => Self::Gst,
            "sales_tax" | "sales-tax" | "salestax" => Self::SalesTax,
            "none" => Self::None,
            _ => Self::Vat,
        }
    }
}

impl From<String> for TaxSystem {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<TaxSystem> for String {
    fn from(system: TaxSystem) -> Self {
        system.id().to_string()
    }
}

/// Cosmetic choices. None of them changes the computed totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationOptions {
    #[serde(default)]
    pub color: ThemeColor,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub tax_system: TaxSystem,
    /// When false, the tax columns and tax summary lines are dropped.
    #[serde(default = "default_true")]
    pub show_tax: bool,
    /// Only honoured when `tax_system` is VAT.
    #[serde(default)]
    pub reverse_charge: bool,
    /// Replaces the grand total with the paid marker.
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            color: ThemeColor::default(),
            language: Language::default(),
            tax_system: TaxSystem::default(),
            show_tax: true,
            reverse_charge: false,
            paid: false,
            notes: None,
        }
    }
}

impl PresentationOptions {
    /// Reverse charge applies to VAT invoices only.
    pub fn reverse_charge_applies(&self) -> bool {
        self.tax_system == TaxSystem::Vat && self.reverse_charge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_selectors_fall_back() {
        assert_eq!(TaxSystem::from_id("flat"), TaxSystem::Vat);
        assert_eq!(TaxSystem::from_id("Sales_Tax"), TaxSystem::SalesTax);
        assert_eq!(PaymentMethod::from_id("bitcoin"), PaymentMethod::Unknown);
        assert_eq!(PaymentMethod::from_id("paypal"), PaymentMethod::PayPal);
    }

    #[test]
    fn reverse_charge_is_vat_only() {
        let mut options = PresentationOptions {
            reverse_charge: true,
            ..Default::default()
        };
        assert!(options.reverse_charge_applies());
        options.tax_system = TaxSystem::SalesTax;
        assert!(!options.reverse_charge_applies());
    }

    #[test]
    fn show_tax_defaults_to_true() {
        assert!(PresentationOptions::default().show_tax);
    }
}
