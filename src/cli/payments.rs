use std::path::PathBuf;

use colored::Colorize;
use comfy_table::Table;

use crate::db::get_connection;
use crate::error::{DispoError, Result};
use crate::exporter::{write_payments_csv, write_payments_workbook};
use crate::report::{get_posted_payments, payment_text_row, validate_range, PAYMENT_COLUMNS};
use crate::settings::{default_db_path, exports_dir};

const PREVIEW_ROWS: usize = 10;

pub fn run(
    from: &str,
    to: &str,
    format: &str,
    output_dir: Option<String>,
    db: Option<String>,
) -> Result<()> {
    let (from_date, to_date) = validate_range(from, to)?;

    let want_csv = matches!(format, "csv" | "both");
    let want_xlsx = matches!(format, "xlsx" | "both");
    if !want_csv && !want_xlsx {
        return Err(DispoError::Other(format!(
            "Unknown format: {format} (expected csv, xlsx, or both)"
        )));
    }

    // One connection per report run; nothing is pooled or reused.
    let db_path = db.map(PathBuf::from).unwrap_or_else(default_db_path);
    let conn = get_connection(&db_path)?;
    let rows = get_posted_payments(&conn, from_date, to_date)?;

    if rows.is_empty() {
        println!("{}", "No data found for the selected date range.".yellow());
        return Ok(());
    }
    println!("{}", format!("Loaded {} records.", rows.len()).green());

    let mut table = Table::new();
    table.set_header(PAYMENT_COLUMNS.to_vec());
    for payment in rows.iter().take(PREVIEW_ROWS) {
        table.add_row(payment_text_row(payment).to_vec());
    }
    println!("{table}");
    if rows.len() > PREVIEW_ROWS {
        println!("... and {} more", rows.len() - PREVIEW_ROWS);
    }

    let dir = output_dir.map(PathBuf::from).unwrap_or_else(exports_dir);
    std::fs::create_dir_all(&dir)?;

    if want_csv {
        let path = dir.join("agent_posted_payments.csv");
        write_payments_csv(&rows, &path)?;
        println!("Wrote {}", path.display());
    }
    if want_xlsx {
        let path = dir.join("agent_posted_payments.xlsx");
        write_payments_workbook(&rows, &path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
