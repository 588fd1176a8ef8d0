//! PDF serialization of assembled invoices.
//!
//! Text is set with caller-supplied TrueType fonts (see [`FontSet`]). Font
//! problems are the only fatal error of a render: they are detected before
//! any layout work starts, and no partial output is returned.

mod font;
mod writer;

pub use font::{EmbeddedFont, FontSet};
pub use writer::{PdfInvoice, render_pdf};

use tracing::debug;

use crate::core::{InvoiceData, RenderError};
use crate::document::{LayoutConfig, assemble};
use crate::money::MoneyPolicy;

/// Load the fonts, lay out the invoice and serialize it to PDF.
///
/// Uses the default [`MoneyPolicy`]; call [`assemble`] and [`render_pdf`]
/// directly for a different one.
pub fn generate_invoice(
    data: &InvoiceData,
    regular_font: &[u8],
    bold_font: &[u8],
    config: &LayoutConfig,
) -> Result<PdfInvoice, RenderError> {
    let fonts = FontSet::from_bytes(regular_font, bold_font)?;
    debug!(invoice = %data.header.number, "fonts loaded");

    let document = assemble(data, &MoneyPolicy::default(), config);
    render_pdf(&document, &fonts)
}
