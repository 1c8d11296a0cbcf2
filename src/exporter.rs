use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

use crate::categorizer::CategoryBucket;
use crate::columns::STANDARD_COLUMNS;
use crate::error::Result;
use crate::models::{PaymentRow, Record};
use crate::report::{payment_text_row, PAYMENT_COLUMNS};
use crate::summary::summarize;

/// Spreadsheet sheet names are capped at 31 characters.
pub const MAX_SHEET_NAME: usize = 31;

const SUMMARY_COLUMNS: [&str; 5] = ["category", "cycle", "status", "count", "total_balance"];

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::Black)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

pub fn sheet_title(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME).collect()
}

/// Tracks the widest rendered text per column so widths can be set to
/// max length + 2. Cosmetic only.
struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    fn new() -> Self {
        Self { widths: Vec::new() }
    }

    fn observe(&mut self, col: usize, text: &str) {
        if self.widths.len() <= col {
            self.widths.resize(col + 1, 0);
        }
        self.widths[col] = self.widths[col].max(text.chars().count());
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (col, width) in self.widths.iter().enumerate() {
            sheet.set_column_width(col as u16, (*width + 2) as f64)?;
        }
        Ok(())
    }
}

fn write_category_sheet(sheet: &mut Worksheet, records: &[Record]) -> Result<()> {
    let hfmt = header_format();
    let mut widths = ColumnWidths::new();

    for (c, name) in STANDARD_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, *name, &hfmt)?;
        widths.observe(c, name);
    }

    for (r, record) in records.iter().enumerate() {
        let row = r as u32 + 1;
        for (c, name) in STANDARD_COLUMNS.iter().enumerate() {
            if *name == "balance" {
                sheet.write_number(row, c as u16, record.balance)?;
                widths.observe(c, &record.balance.to_string());
            } else {
                let value = record.text_field(name).unwrap_or("");
                sheet.write_string(row, c as u16, value)?;
                widths.observe(c, value);
            }
        }
    }

    widths.apply(sheet)
}

fn write_summary_sheet(sheet: &mut Worksheet, buckets: &[CategoryBucket]) -> Result<()> {
    let hfmt = header_format();
    let mut widths = ColumnWidths::new();
    let mut row: u32 = 0;

    for bucket in buckets {
        if bucket.records.is_empty() {
            continue;
        }
        let pivot = summarize(bucket.name, &bucket.records);

        let title = format!("{} Summary", bucket.name);
        sheet.write_string(row, 0, &title)?;
        widths.observe(0, &title);
        row += 1;

        for (c, name) in SUMMARY_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(row, c as u16, *name, &hfmt)?;
            widths.observe(c, name);
        }
        row += 1;

        for line in &pivot {
            let cycle = line.cycle.as_deref().unwrap_or("");
            let status = line.status.as_deref().unwrap_or("");
            sheet.write_string(row, 0, &line.category)?;
            sheet.write_string(row, 1, cycle)?;
            sheet.write_string(row, 2, status)?;
            sheet.write_number(row, 3, line.count as f64)?;
            sheet.write_number(row, 4, line.total_balance)?;
            widths.observe(0, &line.category);
            widths.observe(1, cycle);
            widths.observe(2, status);
            widths.observe(3, &line.count.to_string());
            widths.observe(4, &line.total_balance.to_string());
            row += 1;
        }

        // 3 blank rows before the next block
        row += 3;
    }

    widths.apply(sheet)
}

/// Write one sheet per non-empty category (in rule order) plus the stacked
/// "Summary" sheet. Empty buckets get neither a sheet nor a summary block.
pub fn write_efforts_workbook(buckets: &[CategoryBucket], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    for bucket in buckets {
        if bucket.records.is_empty() {
            continue;
        }
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_title(bucket.name))?;
        write_category_sheet(sheet, &bucket.records)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;
    write_summary_sheet(sheet, buckets)?;

    workbook.save(path)?;
    Ok(())
}

/// Single-sheet posted-payments export with auto-fit columns.
pub fn write_payments_workbook(rows: &[PaymentRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Agent Payments")?;

    let mut widths = ColumnWidths::new();
    for (c, name) in PAYMENT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, c as u16, *name)?;
        widths.observe(c, name);
    }

    for (r, payment) in rows.iter().enumerate() {
        let row = r as u32 + 1;
        let text = payment_text_row(payment);
        for (c, value) in text.iter().enumerate() {
            widths.observe(c, value);
        }
        sheet.write_string(row, 0, &text[0])?;
        sheet.write_string(row, 1, &text[1])?;
        sheet.write_string(row, 2, &text[2])?;
        sheet.write_string(row, 3, &text[3])?;
        sheet.write_string(row, 4, &text[4])?;
        sheet.write_string(row, 5, &text[5])?;
        match payment.ptp_amount {
            Some(v) => sheet.write_number(row, 6, v)?,
            None => sheet.write_string(row, 6, "")?,
        };
        sheet.write_string(row, 7, &text[7])?;
        match payment.ob {
            Some(v) => sheet.write_number(row, 8, v)?,
            None => sheet.write_string(row, 8, "")?,
        };
        sheet.write_string(row, 9, &text[9])?;
        sheet.write_string(row, 10, &text[10])?;
        match payment.is_locked {
            Some(v) => sheet.write_number(row, 11, v as f64)?,
            None => sheet.write_string(row, 11, "")?,
        };
        match payment.is_aborted {
            Some(v) => sheet.write_number(row, 12, v as f64)?,
            None => sheet.write_string(row, 12, "")?,
        };
    }

    widths.apply(sheet)?;
    workbook.save(path)?;
    Ok(())
}

/// Flat CSV rendition of the posted-payments result set.
pub fn write_payments_csv(rows: &[PaymentRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(PAYMENT_COLUMNS)?;
    for payment in rows {
        writer.write_record(payment_text_row(payment))?;
    }
    writer.flush()?;
    Ok(())
}
