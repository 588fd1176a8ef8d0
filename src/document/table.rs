//! Line-item table: column model and page-break planning.
//!
//! The whole table is measured and broken into pages before anything is
//! drawn, so a failure leaves the document untouched.

use crate::core::DegradeReason;
use crate::layout::{FIGURE_EM, char_budget, estimated_width, wrap_text};

use super::model::Align;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Description,
    Quantity,
    UnitPrice,
    TaxRate,
    NetPrice,
    TaxAmount,
    Total,
}

impl ColumnKind {
    /// Columns in print order for the given tax visibility.
    pub fn for_tax_visibility(show_tax: bool) -> &'static [ColumnKind] {
        use ColumnKind::*;
        if show_tax {
            &[
                Description,
                Quantity,
                UnitPrice,
                TaxRate,
                NetPrice,
                TaxAmount,
                Total,
            ]
        } else {
            &[Description, Quantity, UnitPrice, Total]
        }
    }

    /// Narrowest width the column can be printed at.
    fn min_width(&self) -> f32 {
        match self {
            Self::Description => 90.0,
            Self::Quantity => 30.0,
            Self::TaxRate => 36.0,
            Self::UnitPrice | Self::NetPrice | Self::TaxAmount | Self::Total => 54.0,
        }
    }

    /// Cells hold a single figure that must stay on one line.
    fn is_numeric(&self) -> bool {
        !matches!(self, Self::Description)
    }

    /// Relative share of the width left over after minimums.
    fn share(&self) -> f32 {
        match self {
            Self::Description => 6.0,
            Self::Quantity => 0.5,
            Self::TaxRate => 0.5,
            Self::UnitPrice | Self::NetPrice | Self::TaxAmount | Self::Total => 1.0,
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Self::Description => Align::Left,
            Self::Quantity => Align::Center,
            _ => Align::Right,
        }
    }
}

/// Where the table may be drawn.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableGeometry {
    pub left: f32,
    pub width: f32,
    /// Cursor position on continuation pages.
    pub page_top: f32,
    /// Lowest y a row may reach.
    pub page_bottom: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub padding: f32,
    pub avg_char_em: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlannedColumn {
    pub kind: ColumnKind,
    pub x: f32,
    pub width: f32,
    pub header: Vec<String>,
}

impl PlannedColumn {
    /// Anchor x for a cell text with this column's alignment.
    pub fn anchor(&self, padding: f32) -> f32 {
        match self.kind.align() {
            Align::Left => self.x + padding,
            Align::Center => self.x + self.width / 2.0,
            Align::Right => self.x + self.width - padding,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlannedRow {
    /// Wrapped lines per column.
    pub cells: Vec<Vec<String>>,
    pub height: f32,
    /// Page offset from the page the table starts on.
    pub page: usize,
    /// Top of the row.
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TablePlan {
    pub columns: Vec<PlannedColumn>,
    pub header_height: f32,
    /// (page offset, top) of each header repetition.
    pub headers: Vec<(usize, f32)>,
    pub rows: Vec<PlannedRow>,
    /// Page offset and cursor after the last row.
    pub end: (usize, f32),
}

/// Measure the table and assign every row to a page.
///
/// `cells` holds one formatted string per column for every row.
pub(crate) fn plan_table(
    kinds: &[ColumnKind],
    headers: &[&str],
    cells: &[Vec<String>],
    start_y: f32,
    geo: &TableGeometry,
) -> Result<TablePlan, DegradeReason> {
    let floors: Vec<f32> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| column_floor(*kind, cells.iter().filter_map(|row| row.get(i)), geo))
        .collect();
    let required: f32 = floors.iter().sum();
    if !geo.width.is_finite() || required > geo.width {
        return Err(DegradeReason::ColumnsExceedWidth {
            required,
            available: geo.width,
        });
    }

    let spare = geo.width - required;
    let total_share: f32 = kinds.iter().map(ColumnKind::share).sum();
    let mut x = geo.left;
    let mut columns = Vec::with_capacity(kinds.len());
    let mut budgets = Vec::with_capacity(kinds.len());
    for ((kind, header), floor) in kinds.iter().zip(headers).zip(&floors) {
        let width = floor + spare * kind.share() / total_share;
        let budget =
            char_budget(width - 2.0 * geo.padding, geo.font_size, geo.avg_char_em).max(1);
        columns.push(PlannedColumn {
            kind: *kind,
            x,
            width,
            header: wrap_text(header, budget).into_value(),
        });
        budgets.push(budget);
        x += width;
    }

    let cell_height =
        |lines: usize| lines.max(1) as f32 * geo.line_height + 2.0 * geo.padding;
    let header_height = cell_height(columns.iter().map(|c| c.header.len()).max().unwrap_or(1));

    let mut rows = Vec::with_capacity(cells.len());
    for row in cells {
        let wrapped: Vec<Vec<String>> = row
            .iter()
            .zip(&budgets)
            .map(|(text, budget)| wrap_text(text, *budget).into_value())
            .collect();
        let height = cell_height(wrapped.iter().map(Vec::len).max().unwrap_or(1));
        rows.push(PlannedRow {
            cells: wrapped,
            height,
            page: 0,
            y: 0.0,
        });
    }

    let body = geo.page_bottom - geo.page_top;
    for (i, row) in rows.iter().enumerate() {
        if header_height + row.height > body {
            return Err(DegradeReason::RowExceedsPage {
                row: i,
                height: header_height + row.height,
                available: body,
            });
        }
    }

    let mut page = 0;
    let mut y = start_y;
    let first_height = rows.first().map_or(0.0, |r| r.height);
    if y + header_height + first_height > geo.page_bottom {
        page += 1;
        y = geo.page_top;
    }
    let mut header_positions = vec![(page, y)];
    y += header_height;

    for row in &mut rows {
        if y + row.height > geo.page_bottom {
            page += 1;
            y = geo.page_top;
            header_positions.push((page, y));
            y += header_height;
        }
        row.page = page;
        row.y = y;
        y += row.height;
    }

    Ok(TablePlan {
        columns,
        header_height,
        headers: header_positions,
        rows,
        end: (page, y),
    })
}

/// Narrowest width of a column, widened for numeric columns until the
/// widest formatted cell fits at figure width.
fn column_floor<'c>(
    kind: ColumnKind,
    cells: impl Iterator<Item = &'c String>,
    geo: &TableGeometry,
) -> f32 {
    if !kind.is_numeric() {
        return kind.min_width();
    }
    cells
        .map(|text| estimated_width(text, geo.font_size, FIGURE_EM) + 2.0 * geo.padding)
        .fold(kind.min_width(), f32::max)
}
