//! Paginated page model of an invoice.
//!
//! [`assemble`] runs a fixed pipeline of blocks (header, dates, parties,
//! payment, line-item table, notes, summary, reverse-charge line, footers)
//! over a per-call layout session. It never fails: each block records a
//! [`StepReport`], and a table that cannot be built is left out while the
//! rest of the invoice is still placed.
//!
//! ```
//! use chrono::NaiveDate;
//! use rechnung_pdf::core::*;
//! use rechnung_pdf::document::{assemble, LayoutConfig};
//! use rechnung_pdf::money::MoneyPolicy;
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let invoice = InvoiceBuilder::new("INV-1", date, date)
//!     .seller(PartyBuilder::new("ACME GmbH", "Berlin").build())
//!     .buyer(PartyBuilder::new("Kunde AG", "München").build())
//!     .add_item(InvoiceItem::new("Support", 3, dec!(0.1), dec!(0)))
//!     .build()
//!     .unwrap();
//!
//! let doc = assemble(&invoice, &MoneyPolicy::default(), &LayoutConfig::default());
//! assert_eq!(doc.page_count(), 1);
//! assert!(doc.contains_text("€0.30"));
//! ```

mod assembler;
mod config;
mod model;
mod table;

pub use assembler::assemble;
pub use config::*;
pub use model::*;
pub use table::ColumnKind;
