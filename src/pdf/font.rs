use rusttype::{Font, Scale};

use crate::core::RenderError;
use crate::document::FontWeight;

/// A parsed TrueType font plus the raw bytes embedded into the PDF.
pub struct EmbeddedFont {
    base_name: &'static str,
    data: Vec<u8>,
    font: Font<'static>,
    units_per_em: f32,
    ascent: f32,
    descent: f32,
}

impl EmbeddedFont {
    fn parse(base_name: &'static str, data: Vec<u8>) -> Result<Self, RenderError> {
        if data.is_empty() {
            return Err(RenderError::FontLoad(format!("{base_name}: font data is empty")));
        }
        let font = Font::try_from_vec(data.clone()).ok_or_else(|| {
            RenderError::FontLoad(format!("{base_name}: not a TrueType/OpenType font"))
        })?;
        if font.glyph_count() == 0 {
            return Err(RenderError::FontLoad(format!("{base_name}: font has no glyphs")));
        }

        let units_per_em = f32::from(font.units_per_em().max(1));
        let metrics = font.v_metrics_unscaled();
        if !(metrics.ascent - metrics.descent).is_normal() || metrics.ascent <= metrics.descent {
            return Err(RenderError::FontLoad(format!(
                "{base_name}: invalid vertical metrics"
            )));
        }
        Ok(Self {
            base_name,
            data,
            font,
            units_per_em,
            ascent: metrics.ascent,
            descent: metrics.descent,
        })
    }

    pub fn base_name(&self) -> &'static str {
        self.base_name
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    /// Glyph ID of `c`; characters the font lacks map to glyph 0.
    pub fn glyph_id(&self, c: char) -> u16 {
        self.font.glyph(c).id().0
    }

    /// Advance of `c` in PDF glyph space (1000 units per em).
    pub fn advance(&self, c: char) -> f32 {
        // a uniform scale of ascent - descent yields unscaled font units
        let scale = Scale::uniform(self.ascent - self.descent);
        let units = self.font.glyph(c).scaled(scale).h_metrics().advance_width;
        (units * 1000.0 / self.units_per_em).round()
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.advance(c)).sum::<f32>() * size / 1000.0
    }

    /// Ascent in PDF glyph space.
    pub(crate) fn ascent(&self) -> f32 {
        (self.ascent * 1000.0 / self.units_per_em).round()
    }

    /// Descent in PDF glyph space (negative).
    pub(crate) fn descent(&self) -> f32 {
        (self.descent * 1000.0 / self.units_per_em).round()
    }
}

impl std::fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("base_name", &self.base_name)
            .field("bytes", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// Regular and bold faces used for every text run.
///
/// Fonts are supplied as already-loaded bytes; nothing here touches the
/// filesystem.
#[derive(Debug)]
pub struct FontSet {
    regular: EmbeddedFont,
    bold: EmbeddedFont,
}

impl FontSet {
    /// Parse both faces. Missing or corrupt data fails with
    /// [`RenderError::FontLoad`].
    pub fn from_bytes(
        regular: impl Into<Vec<u8>>,
        bold: impl Into<Vec<u8>>,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            regular: EmbeddedFont::parse("RechnungSans-Regular", regular.into())?,
            bold: EmbeddedFont::parse("RechnungSans-Bold", bold.into())?,
        })
    }

    /// Use one face for both weights.
    pub fn single(data: impl Into<Vec<u8>>) -> Result<Self, RenderError> {
        let data = data.into();
        Self::from_bytes(data.clone(), data)
    }

    pub fn get(&self, weight: FontWeight) -> &EmbeddedFont {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}
