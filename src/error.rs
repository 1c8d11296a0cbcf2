use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispoError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not read workbook: {0}")]
    WorkbookRead(String),

    #[error("Could not write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Required columns missing: {}. Found: {}", missing.join(", "), found.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Workbook has no data rows")]
    EmptyWorkbook,

    #[error("No rows found for agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DispoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = DispoError::MissingColumns {
            missing: vec!["Status".to_string(), "Balance".to_string()],
            found: vec!["cycle".to_string(), "client".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Required columns missing: Status, Balance. Found: cycle, client"
        );

        let err = DispoError::InvalidDateRange {
            start: "2025-04-14".to_string(),
            end: "2025-04-10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Start date 2025-04-14 is after end date 2025-04-10"
        );

        assert_eq!(
            DispoError::UnknownAgent("NOBODY".to_string()).to_string(),
            "No rows found for agent: NOBODY"
        );
    }
}
