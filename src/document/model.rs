use std::fmt;

use crate::core::DegradeReason;
use crate::money::InvoiceTotals;
use crate::theme::Rgb;

use super::table::ColumnKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A drawing instruction. Coordinates are points from the top-left corner;
/// text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        weight: FontWeight,
        color: Rgb,
        align: Align,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

/// One fixed-size page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            elements: Vec::new(),
        }
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Pipeline blocks, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Header,
    Dates,
    Parties,
    Payment,
    Table,
    Notes,
    Summary,
    ReverseCharge,
    Footer,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Dates => "dates",
            Self::Parties => "parties",
            Self::Payment => "payment",
            Self::Table => "table",
            Self::Notes => "notes",
            Self::Summary => "summary",
            Self::ReverseCharge => "reverse_charge",
            Self::Footer => "footer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepStatus {
    Ok,
    /// Optional block with nothing to show.
    Skipped,
    Degraded(DegradeReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: Step,
    pub status: StepStatus,
}

/// Shape of the committed line-item table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub columns: Vec<ColumnKind>,
    pub rows: usize,
    /// Page numbers (1-based) that carry a table header.
    pub header_pages: Vec<usize>,
}

/// The finished page model plus the totals it displays.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    /// Used as the PDF title.
    pub title: String,
    pub language: &'static str,
    /// Width and height in points.
    pub page_size: (f32, f32),
    pub pages: Vec<Page>,
    pub totals: InvoiceTotals,
    pub reports: Vec<StepReport>,
    /// `None` when the table was omitted.
    pub table: Option<TableSummary>,
}

impl InvoiceDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn report(&self, step: Step) -> Option<&StepReport> {
        self.reports.iter().find(|r| r.step == step)
    }

    /// Steps that fell back to a reduced result.
    pub fn degradations(&self) -> Vec<&StepReport> {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, StepStatus::Degraded(_)))
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|p| p.contains_text(needle))
    }

    pub fn table_column_count(&self) -> Option<usize> {
        self.table.as_ref().map(|t| t.columns.len())
    }
}
