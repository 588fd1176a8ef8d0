//! Label bundles, tax terminology and number/date formatting per language.
//!
//! Resolution never fails: unknown language selectors resolve to the first
//! table entry (English), unknown currency codes print as the raw code.

mod bundles;
mod currencies;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{PaymentMethod, TaxSystem};

pub use currencies::currency_symbol;

/// Supported label languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    De,
    Es,
    Fr,
    Pl,
    Ru,
}

impl Language {
    /// All languages in table order; the first entry is the fallback.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::De,
        Language::Es,
        Language::Fr,
        Language::Pl,
        Language::Ru,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Pl => "pl",
            Self::Ru => "ru",
        }
    }

    /// Parse a selector such as `"de"` or `"de-AT"`.
    pub fn from_id(id: &str) -> Self {
        let primary = id.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|l| l.id().eq_ignore_ascii_case(primary))
            .unwrap_or(Self::ALL[0])
    }
}

impl From<String> for Language {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.id().to_string()
    }
}

/// Tax-specific labels for one tax system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxLabels {
    /// Rate column header, e.g. "VAT %".
    pub percent: &'static str,
    /// Amount column header, e.g. "VAT".
    pub amount: &'static str,
    /// Summary line, e.g. "Total VAT".
    pub total: &'static str,
    /// Party tax identifier label, e.g. "VAT ID".
    pub id: &'static str,
}

/// Display names of the payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethodNames {
    pub bank_transfer: &'static str,
    pub cash: &'static str,
    pub credit_card: &'static str,
    pub paypal: &'static str,
    pub wise: &'static str,
    pub unknown: &'static str,
}

impl PaymentMethodNames {
    pub fn name(&self, method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::BankTransfer => self.bank_transfer,
            PaymentMethod::Cash => self.cash,
            PaymentMethod::CreditCard => self.credit_card,
            PaymentMethod::PayPal => self.paypal,
            PaymentMethod::Wise => self.wise,
            PaymentMethod::Unknown => self.unknown,
        }
    }
}

/// Separators and symbol placement for money amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal: char,
    pub group: Option<char>,
    /// `€1,234.56` when true, `1.234,56 €` when false.
    pub symbol_first: bool,
}

impl NumberFormat {
    /// Localize a canonical amount string such as `"-1234.56"`.
    pub fn format_number(&self, canonical: &str) -> String {
        let (sign, digits) = match canonical.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", canonical),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(canonical.len() + 4);
        out.push_str(sign);
        let len = int_part.chars().count();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                if let Some(group) = self.group {
                    out.push(group);
                }
            }
            out.push(c);
        }
        if let Some(frac) = frac_part {
            out.push(self.decimal);
            out.push_str(frac);
        }
        out
    }

    /// Localize an amount and attach the currency symbol.
    pub fn format_money(&self, canonical: &str, symbol: &str) -> String {
        let number = self.format_number(canonical);
        if symbol.is_empty() {
            number
        } else if self.symbol_first {
            // Alphabetic symbols ("CHF") read better with a gap.
            if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                format!("{symbol} {number}")
            } else {
                format!("{symbol}{number}")
            }
        } else {
            format!("{number} {symbol}")
        }
    }
}

/// Every string the document prints, for one language and tax system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub language: Language,
    pub invoice_title: &'static str,
    pub invoice_number: &'static str,
    pub issue_date: &'static str,
    pub due_date: &'static str,
    pub reference_number: &'static str,
    pub customer_reference: &'static str,
    pub order_number: &'static str,
    pub from: &'static str,
    pub bill_to: &'static str,
    pub company_id: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub payment_details: &'static str,
    pub payment_method: &'static str,
    pub bank_account: &'static str,
    pub iban: &'static str,
    pub swift: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub net_price: &'static str,
    pub total: &'static str,
    pub notes: &'static str,
    pub subtotal: &'static str,
    pub grand_total: &'static str,
    pub paid_marker: &'static str,
    pub reverse_charge: &'static str,
    /// Contains `{page}` and `{pages}` placeholders.
    pub page_template: &'static str,
    pub created_with: &'static str,
    pub payment_methods: PaymentMethodNames,
    pub tax: TaxLabels,
    /// chrono format string.
    pub date_format: &'static str,
    pub number_format: NumberFormat,
}

impl Labels {
    pub fn page_label(&self, page: usize, pages: usize) -> String {
        self.page_template
            .replace("{pages}", &pages.to_string())
            .replace("{page}", &page.to_string())
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }

    /// `"19"` → `"19%"`, with the language's decimal separator.
    pub fn format_percent(&self, canonical_rate: &str) -> String {
        format!("{}%", self.number_format.format_number(canonical_rate))
    }
}

/// Resolve the label bundle for a language and tax system.
pub fn resolve_labels(language: Language, tax_system: TaxSystem) -> Labels {
    bundles::bundle(language, bundles::tax_labels(language, tax_system))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_resolves_to_first_entry() {
        assert_eq!(Language::from_id("xx"), Language::En);
        assert_eq!(Language::from_id(""), Language::En);
        assert_eq!(Language::from_id("de-AT"), Language::De);
        assert_eq!(Language::from_id("RU"), Language::Ru);
    }

    #[test]
    fn tax_labels_follow_tax_system() {
        let vat = resolve_labels(Language::En, TaxSystem::Vat);
        assert_eq!(vat.tax.percent, "VAT %");
        assert_eq!(vat.tax.id, "VAT ID");
        let gst = resolve_labels(Language::En, TaxSystem::Gst);
        assert_eq!(gst.tax.total, "Total GST");
        let de = resolve_labels(Language::De, TaxSystem::Vat);
        assert_eq!(de.tax.id, "USt-IdNr.");
    }

    #[test]
    fn number_grouping() {
        let en = resolve_labels(Language::En, TaxSystem::Vat).number_format;
        assert_eq!(en.format_number("1234567.89"), "1,234,567.89");
        assert_eq!(en.format_number("-999.00"), "-999.00");
        assert_eq!(en.format_money("1234.50", "€"), "€1,234.50");
        assert_eq!(en.format_money("10.00", "CHF"), "CHF 10.00");

        let de = resolve_labels(Language::De, TaxSystem::Vat).number_format;
        assert_eq!(de.format_money("1234.50", "€"), "1.234,50 €");
    }

    #[test]
    fn page_label_fills_both_placeholders() {
        let labels = resolve_labels(Language::En, TaxSystem::None);
        assert_eq!(labels.page_label(2, 3), "Page 2 of 3");
        let ru = resolve_labels(Language::Ru, TaxSystem::None);
        assert_eq!(ru.page_label(1, 1), "Страница 1 из 1");
    }

    #[test]
    fn every_language_resolves_every_tax_system() {
        for language in Language::ALL {
            for system in [TaxSystem::Vat, TaxSystem::Gst, TaxSystem::SalesTax, TaxSystem::None] {
                let labels = resolve_labels(language, system);
                assert_eq!(labels.language, language);
                assert!(!labels.tax.amount.is_empty());
                assert!(labels.page_template.contains("{page}"));
                assert!(labels.page_template.contains("{pages}"));
            }
        }
    }
}
