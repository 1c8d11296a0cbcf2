use std::collections::BTreeMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::columns::{clean_balance, normalize_header, resolve_required};
use crate::error::{DispoError, Result};
use crate::models::Record;

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // Whole floats render without the trailing ".0" so cycle numbers
        // and account numbers survive the spreadsheet round trip as text.
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => {
            let s = other.to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }
    }
}

/// Read the first sheet of an efforts workbook into normalized records.
/// The header row is normalized first; the three required logical columns
/// are located by rule, every other canonical column by exact name. A
/// canonical column missing from the source simply yields empty fields.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| DispoError::WorkbookRead(e.to_string()))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DispoError::EmptyWorkbook)?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| DispoError::WorkbookRead(e.to_string()))?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or(DispoError::EmptyWorkbook)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|c| normalize_header(&c.to_string()))
        .collect();

    let required = resolve_required(&headers)?;
    let exact = |name: &str| headers.iter().position(|h| h == name);

    let idx_cycle = exact("cycle");
    let idx_client = exact("client");
    let idx_account_no = exact("account no.");
    let idx_card_no = exact("card no.");
    let idx_debtor = exact("debtor");
    let idx_call_status = exact("call status");
    let idx_remark = exact("remark");
    let idx_ptp_amount = exact("ptp amount");
    let idx_ptp_date = exact("ptp date");
    let idx_dialed_number = exact("dialed number");
    let idx_min_payment = exact("min payment");

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).and_then(cell_to_string);

        let balance_text = field(Some(required.balance)).unwrap_or_default();
        records.push(Record {
            cycle: field(idx_cycle),
            client: field(idx_client),
            account_no: field(idx_account_no),
            card_no: field(idx_card_no),
            debtor: field(idx_debtor),
            call_status: field(idx_call_status),
            status: field(Some(required.status)),
            remark: field(idx_remark),
            remark_by: field(Some(required.remark_by)),
            ptp_amount: field(idx_ptp_amount),
            ptp_date: field(idx_ptp_date),
            dialed_number: field(idx_dialed_number),
            balance: clean_balance(&balance_text),
            min_payment: field(idx_min_payment),
        });
    }
    Ok(records)
}

/// Distinct "remark by" agents with their row counts, sorted by name.
pub fn list_agents(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if let Some(agent) = &record.remark_by {
            *counts.entry(agent.clone()).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

/// Rows logged by one agent (exact match on the remark-by field).
pub fn filter_agent(records: &[Record], agent: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.remark_by.as_deref() == Some(agent))
        .cloned()
        .collect()
}
