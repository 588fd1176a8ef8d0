//! # rechnung-pdf
//!
//! Invoice document engine: turns one validated invoice record into a
//! paginated document with exact decimal totals, localized labels and an
//! accent theme, and serializes it to PDF.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Layout is a pure function of its input; the same invoice always yields
//! the same pages and the same PDF bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rechnung_pdf::core::*;
//! use rechnung_pdf::document::{assemble, LayoutConfig};
//! use rechnung_pdf::money::{format_amount, MoneyPolicy};
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(
//!     "RE-2024-001",
//!     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
//! )
//! .seller(PartyBuilder::new("ACME GmbH", "Friedrichstraße 123\n10115 Berlin")
//!     .tax_id("DE123456789").build())
//! .buyer(PartyBuilder::new("Kunde AG", "Marienplatz 1\n80331 München").build())
//! .add_item(ItemBuilder::new("Beratung", dec!(150)).quantity(10).tax_rate(dec!(19)).build())
//! .build()
//! .unwrap();
//!
//! let policy = MoneyPolicy::default();
//! let doc = assemble(&invoice, &policy, &LayoutConfig::default());
//! assert_eq!(format_amount(doc.totals.grand_total, &policy), "1785.00");
//! assert_eq!(doc.page_count(), 1);
//! ```
//!
//! With the `pdf` feature, [`pdf::generate_invoice`] loads fonts, assembles
//! and serializes in one call.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Input types, totals, labels, theme, text layout, page assembly |
//! | `pdf` (default) | PDF output with embedded TrueType fonts |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod money;

#[cfg(feature = "core")]
pub mod locale;

#[cfg(feature = "core")]
pub mod theme;

#[cfg(feature = "core")]
pub mod layout;

#[cfg(feature = "core")]
pub mod document;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
