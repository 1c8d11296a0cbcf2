use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DispoError, Result};

/// Canonical export column order for efforts sheets.
pub const STANDARD_COLUMNS: [&str; 14] = [
    "cycle",
    "client",
    "account no.",
    "card no.",
    "debtor",
    "call status",
    "status",
    "remark",
    "remark by",
    "ptp amount",
    "ptp date",
    "dialed number",
    "balance",
    "min payment",
];

/// Lower-case, trim, and collapse non-breaking spaces / embedded newlines /
/// runs of whitespace to single spaces.
pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .replace('\u{a0}', " ")
        .replace('\n', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Indices of the required logical fields within a normalized header row.
#[derive(Debug, Clone, Copy)]
pub struct RequiredColumns {
    pub remark_by: usize,
    pub status: usize,
    pub balance: usize,
}

fn find_column(headers: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    headers.iter().position(|h| pred(h))
}

/// Locate the "remark by", "status" and "balance" columns. The status column
/// must be the exact header "status" and must not be a call-status column.
/// Missing fields halt the pipeline with the full discovered header list so
/// the user can see what the sheet actually contained.
pub fn resolve_required(headers: &[String]) -> Result<RequiredColumns> {
    let remark_by = find_column(headers, |h| h.contains("remark by"));
    let status = find_column(headers, |h| h == "status" && !h.contains("call"));
    let balance = find_column(headers, |h| h == "balance");

    let mut missing = Vec::new();
    if remark_by.is_none() {
        missing.push("Remark By".to_string());
    }
    if status.is_none() {
        missing.push("Status".to_string());
    }
    if balance.is_none() {
        missing.push("Balance".to_string());
    }
    if !missing.is_empty() {
        return Err(DispoError::MissingColumns {
            missing,
            found: headers.to_vec(),
        });
    }

    Ok(RequiredColumns {
        remark_by: remark_by.unwrap(),
        status: status.unwrap(),
        balance: balance.unwrap(),
    })
}

/// Strip everything that is not a digit, '.' or '-' and parse the remainder.
/// Empty or still-unparseable remainders become 0.0 rather than an error.
pub fn clean_balance(raw: &str) -> f64 {
    static NON_NUMERIC: OnceLock<Regex> = OnceLock::new();
    let re = NON_NUMERIC.get_or_init(|| Regex::new(r"[^0-9.\-]").expect("fixed pattern"));
    let stripped = re.replace_all(raw, "");
    if stripped.is_empty() {
        return 0.0;
    }
    stripped.parse().unwrap_or(0.0)
}
