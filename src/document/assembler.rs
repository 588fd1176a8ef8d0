use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::core::{
    DegradeReason, InvoiceData, InvoiceHeader, InvoiceItem, PartyInfo, PaymentInfo,
    PresentationOptions,
};
use crate::layout::{BASELINE_RATIO, FIGURE_EM, char_budget, estimated_width, layout_text};
use crate::locale::{Labels, currency_symbol, resolve_labels};
use crate::money::{InvoiceTotals, LineAmounts, MoneyPolicy, calculate_totals, format_amount, format_rate};
use crate::theme::{Rgb, Theme, resolve_theme};

use super::config::LayoutConfig;
use super::model::{
    Align, Element, FontWeight, InvoiceDocument, Page, Step, StepReport, StepStatus, TableSummary,
};
use super::table::{ColumnKind, TableGeometry, TablePlan, plan_table};

/// Vertical space between blocks.
const BLOCK_GAP: f32 = 10.0;
/// Horizontal space between the seller and buyer columns.
const COLUMN_GAP: f32 = 20.0;
/// Narrowest amount column in the summary block.
const SUMMARY_VALUE_WIDTH: f32 = 110.0;
/// Space between a summary label and the widest amount.
const SUMMARY_GAP: f32 = 12.0;

#[derive(Debug, Clone, Copy)]
struct Style {
    size: f32,
    weight: FontWeight,
    color: Rgb,
}

/// Lay out an invoice into pages.
///
/// Never fails. Steps that hit a layout problem fall back to a reduced
/// result and are reported in [`InvoiceDocument::reports`]; a table that
/// cannot be built is omitted while every other block is still placed.
pub fn assemble(
    data: &InvoiceData,
    policy: &MoneyPolicy,
    config: &LayoutConfig,
) -> InvoiceDocument {
    let totals = calculate_totals(&data.items, policy);
    let mut session = LayoutSession::new(data, policy, config);

    session.header(&data.header.number);
    session.dates(&data.header);
    session.parties(&data.seller, &data.buyer);
    session.payment(data.payment.as_ref());
    let table = session.table(&data.items, &totals, data.options.show_tax);
    session.notes(data.options.notes.as_deref());
    session.summary(&totals, &data.options);
    session.reverse_charge(&data.options);
    session.footers();

    let document = InvoiceDocument {
        title: format!("{} {}", session.labels.invoice_title, data.header.number),
        language: session.labels.language.id(),
        page_size: (session.width, session.height),
        pages: session.pages,
        totals,
        reports: session.reports,
        table,
    };

    info!(
        invoice = %data.header.number,
        pages = document.page_count(),
        degraded = document.degradations().len(),
        "invoice assembled"
    );
    document
}

/// Cursor, page list and resolved resources of one assembly run.
struct LayoutSession<'a> {
    config: &'a LayoutConfig,
    policy: &'a MoneyPolicy,
    labels: Labels,
    theme: Theme,
    symbol: &'a str,
    width: f32,
    height: f32,
    pages: Vec<Page>,
    current: usize,
    y: f32,
    reports: Vec<StepReport>,
}

impl<'a> LayoutSession<'a> {
    fn new(data: &'a InvoiceData, policy: &'a MoneyPolicy, config: &'a LayoutConfig) -> Self {
        let (width, height) = config.page_size.dimensions();
        Self {
            config,
            policy,
            labels: resolve_labels(data.options.language, data.options.tax_system),
            theme: resolve_theme(data.options.color),
            symbol: currency_symbol(&data.header.currency_code),
            width,
            height,
            pages: vec![Page::new(1)],
            current: 0,
            y: config.margin,
            reports: Vec::new(),
        }
    }

    fn left(&self) -> f32 {
        self.config.margin
    }

    fn right(&self) -> f32 {
        self.width - self.config.margin
    }

    fn content_width(&self) -> f32 {
        self.right() - self.left()
    }

    fn page_top(&self) -> f32 {
        self.config.margin
    }

    fn body_bottom(&self) -> f32 {
        self.height - self.config.margin - self.config.footer_height
    }

    /// Character budget of a paragraph spanning the content width.
    fn full_width_chars(&self) -> usize {
        char_budget(
            self.content_width(),
            self.config.body_size,
            self.config.avg_char_em,
        )
    }

    fn body(&self) -> Style {
        Style {
            size: self.config.body_size,
            weight: FontWeight::Regular,
            color: Rgb::TEXT,
        }
    }

    fn heading(&self) -> Style {
        Style {
            size: self.config.heading_size,
            weight: FontWeight::Bold,
            color: self.theme.accent,
        }
    }

    fn small(&self) -> Style {
        Style {
            size: self.config.small_size,
            weight: FontWeight::Regular,
            color: Rgb::MUTED,
        }
    }

    fn money(&self, value: Decimal) -> String {
        self.labels
            .number_format
            .format_money(&format_amount(value, self.policy), self.symbol)
    }

    fn push(&mut self, element: Element) {
        self.pages[self.current].elements.push(element);
    }

    fn text(&mut self, x: f32, baseline: f32, text: impl Into<String>, style: Style, align: Align) {
        self.push(Element::Text {
            x,
            y: baseline,
            text: text.into(),
            size: style.size,
            weight: style.weight,
            color: style.color,
            align,
        });
    }

    fn rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.push(Element::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            width: 0.5,
            color: Rgb::RULE,
        });
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number));
        self.current = self.pages.len() - 1;
        self.y = self.page_top();
        debug!(page = number, "page break");
    }

    /// Switch to page `index`, appending pages as needed.
    fn go_to(&mut self, index: usize) {
        while self.pages.len() <= index {
            self.new_page();
        }
        self.current = index;
    }

    /// Start a new page unless `needed` fits below the cursor. A fresh page
    /// is never broken again, so oversized content overflows instead of
    /// looping.
    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > self.body_bottom() && self.y > self.page_top() {
            self.new_page();
        }
    }

    /// Wrap `text` and place it line by line, breaking pages between lines.
    fn write_lines(
        &mut self,
        text: &str,
        x: f32,
        max_chars: usize,
        style: Style,
    ) -> Option<DegradeReason> {
        let (block, reason) =
            layout_text(text, max_chars, self.y, self.config.line_height).into_parts();
        for line in block.lines {
            if block.line_height > 0.0 {
                self.ensure_space(block.line_height);
            }
            let baseline = self.y + block.line_height * BASELINE_RATIO;
            self.text(x, baseline, line, style, Align::Left);
            self.y += block.line_height;
        }
        reason
    }

    fn finish(&mut self, step: Step, status: StepStatus) {
        match &status {
            StepStatus::Degraded(reason) => {
                warn!(step = %step, reason = %reason, "layout step degraded")
            }
            StepStatus::Skipped => debug!(step = %step, "block skipped"),
            StepStatus::Ok => debug!(step = %step, page = self.current + 1, y = self.y, "block committed"),
        }
        self.reports.push(StepReport { step, status });
    }

    fn header(&mut self, number: &str) {
        let band = self.config.header_band_height;
        self.push(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: band,
            color: self.theme.accent,
        });

        let baseline = band / 2.0 + self.config.title_size * 0.35;
        let title = Style {
            size: self.config.title_size,
            weight: FontWeight::Bold,
            color: self.theme.header_text,
        };
        let number_style = Style {
            size: self.config.heading_size,
            weight: FontWeight::Regular,
            ..title
        };
        let labels = self.labels;
        self.text(self.left(), baseline, labels.invoice_title, title, Align::Left);
        self.text(
            self.right(),
            baseline,
            format!("{} {}", labels.invoice_number, number),
            number_style,
            Align::Right,
        );

        self.y = band + self.config.line_height;
        self.finish(Step::Header, StepStatus::Ok);
    }

    fn dates(&mut self, header: &InvoiceHeader) {
        let labels = self.labels;
        let mut fields = vec![
            (labels.issue_date, labels.format_date(header.issue_date)),
            (labels.due_date, labels.format_date(header.due_date)),
        ];
        for (label, value) in [
            (labels.reference_number, &header.reference_number),
            (labels.customer_reference, &header.customer_reference),
            (labels.order_number, &header.order_number),
        ] {
            if let Some(value) = value {
                fields.push((label, value.clone()));
            }
        }

        let chars = self.full_width_chars();
        let style = self.body();
        let mut reason = None;
        for (label, value) in fields {
            let line = format!("{label}: {value}");
            reason = reason.or(self.write_lines(&line, self.left(), chars, style));
        }
        self.y += BLOCK_GAP;
        self.finish(Step::Dates, status_of(reason));
    }

    fn parties(&mut self, seller: &PartyInfo, buyer: &PartyInfo) {
        let column_width = (self.content_width() - COLUMN_GAP) / 2.0;
        let start = self.y;
        let (from, bill_to) = (self.labels.from, self.labels.bill_to);

        let left_x = self.left();
        let right_x = left_x + column_width + COLUMN_GAP;
        let (left_end, left_reason) = self.party_column(left_x, start, from, seller);
        let (right_end, right_reason) = self.party_column(right_x, start, bill_to, buyer);

        self.y = left_end.max(right_end) + BLOCK_GAP;
        self.finish(Step::Parties, status_of(left_reason.or(right_reason)));
    }

    /// Place one party column from `start_y` with its own cursor and return
    /// where that cursor ends.
    fn party_column(
        &mut self,
        x: f32,
        start_y: f32,
        heading: &str,
        party: &PartyInfo,
    ) -> (f32, Option<DegradeReason>) {
        let labels = self.labels;
        let body = self.body();
        let name = Style {
            weight: FontWeight::Bold,
            ..body
        };

        let mut fields = vec![
            (heading.to_string(), self.heading()),
            (party.company_name.clone(), name),
            (party.address.clone(), body),
        ];
        let optional = [
            (labels.company_id, &party.company_id),
            (labels.tax.id, &party.tax_id),
            (labels.email, &party.email),
            (labels.website, &party.website),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                fields.push((format!("{label}: {value}"), body));
            }
        }

        let mut y = start_y;
        let mut reason = None;
        for (text, style) in fields {
            let (block, degraded) =
                layout_text(&text, self.config.party_chars, y, self.config.line_height)
                    .into_parts();
            reason = reason.or(degraded);
            for (baseline, line) in block.baselines() {
                self.text(x, baseline, line, style, Align::Left);
            }
            y = block.end_y();
        }
        (y, reason)
    }

    fn payment(&mut self, payment: Option<&PaymentInfo>) {
        let Some(payment) = payment else {
            self.finish(Step::Payment, StepStatus::Skipped);
            return;
        };

        let labels = self.labels;
        let mut lines = vec![format!(
            "{}: {}",
            labels.payment_method,
            labels.payment_methods.name(payment.method)
        )];
        for (label, value) in [
            (labels.bank_account, &payment.bank_account),
            (labels.iban, &payment.iban),
            (labels.swift, &payment.swift),
        ] {
            if let Some(value) = value {
                lines.push(format!("{label}: {value}"));
            }
        }

        self.ensure_space(self.config.line_height * (lines.len() + 1) as f32);
        let chars = self.full_width_chars();
        let (heading, body) = (self.heading(), self.body());
        let mut reason = self.write_lines(labels.payment_details, self.left(), chars, heading);
        for line in lines {
            reason = reason.or(self.write_lines(&line, self.left(), chars, body));
        }
        self.y += BLOCK_GAP;
        self.finish(Step::Payment, status_of(reason));
    }

    fn table(
        &mut self,
        items: &[InvoiceItem],
        totals: &InvoiceTotals,
        show_tax: bool,
    ) -> Option<TableSummary> {
        let kinds = ColumnKind::for_tax_visibility(show_tax);
        let labels = self.labels;
        let headers: Vec<&str> = kinds
            .iter()
            .map(|kind| match kind {
                ColumnKind::Description => labels.description,
                ColumnKind::Quantity => labels.quantity,
                ColumnKind::UnitPrice => labels.unit_price,
                ColumnKind::TaxRate => labels.tax.percent,
                ColumnKind::NetPrice => labels.net_price,
                ColumnKind::TaxAmount => labels.tax.amount,
                ColumnKind::Total => labels.total,
            })
            .collect();
        let cells: Vec<Vec<String>> = items
            .iter()
            .zip(&totals.lines)
            .map(|(item, line)| kinds.iter().map(|k| self.cell(*k, item, line)).collect())
            .collect();

        let geometry = TableGeometry {
            left: self.left(),
            width: self.content_width(),
            page_top: self.page_top(),
            page_bottom: self.body_bottom(),
            font_size: self.config.body_size,
            line_height: self.config.line_height,
            padding: self.config.cell_padding,
            avg_char_em: self.config.avg_char_em,
        };

        match plan_table(kinds, &headers, &cells, self.y, &geometry) {
            Ok(plan) => {
                let summary = self.draw_table(&plan);
                self.finish(Step::Table, StepStatus::Ok);
                Some(summary)
            }
            Err(reason) => {
                self.finish(Step::Table, StepStatus::Degraded(reason));
                None
            }
        }
    }

    fn cell(&self, kind: ColumnKind, item: &InvoiceItem, line: &LineAmounts) -> String {
        match kind {
            ColumnKind::Description => item.name.clone(),
            ColumnKind::Quantity => item.quantity.to_string(),
            ColumnKind::UnitPrice => self.money(item.unit_price),
            ColumnKind::TaxRate => self.labels.format_percent(&format_rate(item.tax_rate)),
            ColumnKind::NetPrice => self.money(line.net),
            ColumnKind::TaxAmount => self.money(line.tax),
            ColumnKind::Total => self.money(line.gross),
        }
    }

    fn draw_table(&mut self, plan: &TablePlan) -> TableSummary {
        let first = self.current;
        let pad = self.config.cell_padding;
        let line_height = self.config.line_height;
        let (left, width) = (self.left(), self.content_width());
        let head = Style {
            size: self.config.body_size,
            weight: FontWeight::Bold,
            color: self.theme.header_text,
        };
        let body = self.body();

        let mut header_pages = Vec::with_capacity(plan.headers.len());
        for &(offset, top) in &plan.headers {
            self.go_to(first + offset);
            header_pages.push(self.current + 1);
            self.push(Element::Rect {
                x: left,
                y: top,
                width,
                height: plan.header_height,
                color: self.theme.accent,
            });
            for column in &plan.columns {
                for (i, line) in column.header.iter().enumerate() {
                    let baseline = top + pad + (i as f32 + BASELINE_RATIO) * line_height;
                    self.text(column.anchor(pad), baseline, line.as_str(), head, column.kind.align());
                }
            }
        }

        for (index, row) in plan.rows.iter().enumerate() {
            self.go_to(first + row.page);
            if index % 2 == 1 {
                self.push(Element::Rect {
                    x: left,
                    y: row.y,
                    width,
                    height: row.height,
                    color: Rgb::STRIPE,
                });
            }
            for (column, lines) in plan.columns.iter().zip(&row.cells) {
                for (i, line) in lines.iter().enumerate() {
                    let baseline = row.y + pad + (i as f32 + BASELINE_RATIO) * line_height;
                    self.text(column.anchor(pad), baseline, line.as_str(), body, column.kind.align());
                }
            }
            self.rule(left, left + width, row.y + row.height);
        }

        self.go_to(first + plan.end.0);
        self.y = plan.end.1 + BLOCK_GAP;

        TableSummary {
            columns: plan.columns.iter().map(|c| c.kind).collect(),
            rows: plan.rows.len(),
            header_pages,
        }
    }

    fn notes(&mut self, notes: Option<&str>) {
        let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) else {
            self.finish(Step::Notes, StepStatus::Skipped);
            return;
        };

        self.ensure_space(2.0 * self.config.line_height);
        let chars = self.full_width_chars();
        let (heading, body) = (self.heading(), self.body());
        let mut reason = self.write_lines(self.labels.notes, self.left(), chars, heading);
        reason = reason.or(self.write_lines(notes, self.left(), chars, body));
        self.y += BLOCK_GAP;
        self.finish(Step::Notes, status_of(reason));
    }

    fn summary(&mut self, totals: &InvoiceTotals, options: &PresentationOptions) {
        let labels = self.labels;
        let mut rows: Vec<(&str, String)> = Vec::new();
        if options.show_tax {
            rows.push((labels.subtotal, self.money(totals.net_total)));
            rows.push((labels.tax.total, self.money(totals.tax_total)));
        }
        let grand_total = if options.paid {
            labels.paid_marker.to_string()
        } else {
            self.money(totals.grand_total)
        };

        let line_height = self.config.line_height;
        self.ensure_space(line_height * (rows.len() + 1) as f32 + 4.0);

        let total = Style {
            size: self.config.heading_size,
            weight: FontWeight::Bold,
            color: Rgb::TEXT,
        };
        let body = self.body();
        let widest_value = rows
            .iter()
            .map(|(_, value)| estimated_width(value, body.size, FIGURE_EM))
            .fold(estimated_width(&grand_total, total.size, FIGURE_EM), f32::max);
        let widest_label = rows
            .iter()
            .map(|(label, _)| estimated_width(label, body.size, self.config.avg_char_em))
            .fold(
                estimated_width(labels.grand_total, total.size, self.config.avg_char_em),
                f32::max,
            );
        let value_width = SUMMARY_VALUE_WIDTH.max(widest_value + SUMMARY_GAP);
        let required = value_width + widest_label;
        let status = if required > self.content_width() {
            StepStatus::Degraded(DegradeReason::ColumnsExceedWidth {
                required,
                available: self.content_width(),
            })
        } else {
            StepStatus::Ok
        };

        let value_x = self.right();
        let label_x = value_x - value_width;
        for (label, value) in rows {
            let baseline = self.y + line_height * BASELINE_RATIO;
            self.text(label_x, baseline, label, body, Align::Right);
            self.text(value_x, baseline, value, body, Align::Right);
            self.y += line_height;
        }

        let rule_start = (label_x - SUMMARY_VALUE_WIDTH).max(self.left());
        self.rule(rule_start, value_x, self.y + 1.0);
        self.y += 3.0;

        let baseline = self.y + line_height * BASELINE_RATIO;
        self.text(label_x, baseline, labels.grand_total, total, Align::Right);
        self.text(value_x, baseline, grand_total, total, Align::Right);
        self.y += line_height + BLOCK_GAP;

        self.finish(Step::Summary, status);
    }

    fn reverse_charge(&mut self, options: &PresentationOptions) {
        if !options.reverse_charge_applies() {
            self.finish(Step::ReverseCharge, StepStatus::Skipped);
            return;
        }
        let chars = self.full_width_chars();
        let style = self.small();
        let reason = self.write_lines(self.labels.reverse_charge, self.left(), chars, style);
        self.finish(Step::ReverseCharge, status_of(reason));
    }

    /// Page label and attribution on every page, once the page count is final.
    fn footers(&mut self) {
        let labels = self.labels;
        let pages = self.pages.len();
        let baseline = self.height - self.config.margin;
        let rule_y = baseline - self.config.small_size - 4.0;
        let style = self.small();
        let attribution = self
            .config
            .attribution
            .as_ref()
            .map(|name| format!("{} {name}", labels.created_with));

        for index in 0..pages {
            self.current = index;
            self.rule(self.left(), self.right(), rule_y);
            self.text(self.right(), baseline, labels.page_label(index + 1, pages), style, Align::Right);
            if let Some(attribution) = &attribution {
                self.text(self.left(), baseline, attribution.as_str(), style, Align::Left);
            }
        }
        self.finish(Step::Footer, StepStatus::Ok);
    }
}

fn status_of(reason: Option<DegradeReason>) -> StepStatus {
    match reason {
        Some(reason) => StepStatus::Degraded(reason),
        None => StepStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::core::{InvoiceBuilder, PartyBuilder};

    fn invoice(items: usize) -> InvoiceData {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut builder = InvoiceBuilder::new("INV-7", date, date)
            .seller(PartyBuilder::new("Seller GmbH", "Hauptstraße 1\n10115 Berlin").build())
            .buyer(PartyBuilder::new("Buyer Ltd", "1 High Street\nLondon").build());
        for i in 0..items {
            builder = builder.add_item(InvoiceItem::new(format!("Item {i}"), 1, dec!(10), dec!(19)));
        }
        builder.build_unchecked().unwrap()
    }

    #[test]
    fn pipeline_reports_every_step_in_order() {
        let doc = assemble(&invoice(2), &MoneyPolicy::default(), &LayoutConfig::default());
        let steps: Vec<Step> = doc.reports.iter().map(|r| r.step).collect();
        assert_eq!(
            steps,
            vec![
                Step::Header,
                Step::Dates,
                Step::Parties,
                Step::Payment,
                Step::Table,
                Step::Notes,
                Step::Summary,
                Step::ReverseCharge,
                Step::Footer,
            ]
        );
        assert_eq!(doc.report(Step::Payment).unwrap().status, StepStatus::Skipped);
        assert!(doc.degradations().is_empty());
    }

    #[test]
    fn party_cursors_resync_to_the_taller_column() {
        let mut data = invoice(0);
        data.buyer.address = "Line 1\nLine 2\nLine 3\nLine 4\nLine 5".into();
        let config = LayoutConfig::default();
        let short = assemble(&invoice(0), &MoneyPolicy::default(), &config);
        let tall = assemble(&data, &MoneyPolicy::default(), &config);

        let table_top = |doc: &InvoiceDocument| {
            doc.pages[0]
                .elements
                .iter()
                .find_map(|e| match e {
                    Element::Rect { y, .. } if *y > 0.0 => Some(*y),
                    _ => None,
                })
                .unwrap()
        };
        // three extra address lines in the buyer column push the table down
        assert_eq!(table_top(&tall) - table_top(&short), 3.0 * config.line_height);
    }

    #[test]
    fn summary_slot_fits_the_widest_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut builder = InvoiceBuilder::new("INV-MAX", date, date)
            .seller(PartyBuilder::new("Seller GmbH", "Berlin").build())
            .buyer(PartyBuilder::new("Buyer Ltd", "London").build())
            .show_tax(false);
        for _ in 0..10 {
            builder = builder.add_item(InvoiceItem::new("Item", 99_999, dec!(10000000), dec!(100)));
        }
        let doc = assemble(&builder.build().unwrap(), &MoneyPolicy::default(), &LayoutConfig::default());
        assert_eq!(doc.report(Step::Summary).unwrap().status, StepStatus::Ok);

        let find = |wanted: &str| {
            doc.pages
                .iter()
                .flat_map(|p| &p.elements)
                .find_map(|e| match e {
                    Element::Text { x, text, size, .. } if text == wanted => Some((*x, *size)),
                    _ => None,
                })
                .unwrap()
        };
        let value = "€19,999,800,000,000.00";
        let (value_x, size) = find(value);
        let (label_x, _) = find("Total due");
        let value_left = value_x - estimated_width(value, size, FIGURE_EM);
        assert!(value_left >= label_x + SUMMARY_GAP - 0.01);
    }

    #[test]
    fn footer_sits_on_every_page() {
        let doc = assemble(&invoice(60), &MoneyPolicy::default(), &LayoutConfig::default());
        assert!(doc.page_count() >= 2);
        for page in &doc.pages {
            assert!(page.contains_text(&format!("Page {} of {}", page.number, doc.page_count())));
            assert!(page.contains_text("Created with rechnung-pdf"));
        }
    }
}
