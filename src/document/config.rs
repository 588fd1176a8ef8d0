use serde::{Deserialize, Serialize};

/// Supported page formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    /// 210 × 297 mm.
    #[default]
    A4,
    /// 8.5 × 11 in.
    Letter,
}

impl PageSize {
    /// Width and height in PDF points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
        }
    }
}

/// Page geometry and typography. All lengths are PDF points.
///
/// Deserializes with per-field defaults, so a caller can override only
/// what it needs:
///
/// ```
/// use rechnung_pdf::document::{LayoutConfig, PageSize};
///
/// let config: LayoutConfig = serde_json::from_str(r#"{"page_size": "letter"}"#).unwrap();
/// assert_eq!(config.page_size, PageSize::Letter);
/// assert_eq!(config.party_chars, LayoutConfig::default().party_chars);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margin: f32,
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub line_height: f32,
    /// Height of the colored band carrying the title.
    pub header_band_height: f32,
    /// Character budget of each party column.
    pub party_chars: usize,
    /// Average glyph advance as a fraction of the font size; converts column
    /// widths into character budgets.
    pub avg_char_em: f32,
    pub cell_padding: f32,
    /// Space reserved above the bottom margin for the footer.
    pub footer_height: f32,
    /// Product name printed after the localized "created with" text.
    pub attribution: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 42.0,
            title_size: 22.0,
            heading_size: 10.0,
            body_size: 9.0,
            small_size: 7.5,
            line_height: 12.0,
            header_band_height: 72.0,
            party_chars: 33,
            avg_char_em: 0.5,
            cell_padding: 4.0,
            footer_height: 30.0,
            attribution: Some("rechnung-pdf".to_string()),
        }
    }
}
