use chrono::NaiveDate;
use rusqlite::Connection;

use crate::error::{DispoError, Result};
use crate::models::PaymentRow;

/// Export column labels for the posted-payments report.
pub const PAYMENT_COLUMNS: [&str; 13] = [
    "CYCLE",
    "CH CODE",
    "ACCOUNT NUMBER",
    "REMARKS",
    "AGENT CODE",
    "STATUS CODE",
    "PTP AMOUNT",
    "PTP DATE",
    "OB",
    "DISPO DATE",
    "FINONE ID",
    "IS LOCKED",
    "IS ABORTED",
];

// Fixed report filters. These are business constants for this client
// engagement, not user configuration.
pub const CLIENT_PREFIX: &str = "BPI CARDS XDAYS";
pub const CURED_STATUS: &str = "PAYMENT - CURED";
pub const EXCLUDED_AGENTS: &[&str] = &[
    "BLRUIZ",
    "KPILUSTRISIMO",
    "MMMEJIA",
    "SAHERNANDEZ",
    "FGPANGANIBAN",
];
pub const EXCLUDED_REMARK: &str = "MSPM";

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DispoError::InvalidDate(raw.to_string()))
}

/// Parse and order-check the report bounds. A start date after the end date
/// is a user error; no query is issued.
pub fn validate_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let from = parse_date(start)?;
    let to = parse_date(end)?;
    if from > to {
        return Err(DispoError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((from, to))
}

/// One parameterized read: cured payments for the fixed client prefix within
/// the date range, minus the excluded agents and remarks, newest dispo first.
pub fn get_posted_payments(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<PaymentRow>> {
    let excluded_agents = EXCLUDED_AGENTS
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "SELECT DISTINCT \
            'Cycle ' || substr(debtor.cycle, -2), \
            debtor.card_no, \
            debtor.account, \
            followup.remark, \
            followup.remark_by, \
            followup.status_code, \
            debtor.ptp_amount, \
            debtor.ptp_date, \
            debtor.balance, \
            followup.datetime, \
            debtor.placement, \
            debtor.is_locked, \
            debtor.is_aborted \
         FROM debtor \
         LEFT JOIN debtor_followup ON debtor_followup.debtor_id = debtor.id \
         LEFT JOIN followup ON followup.id = debtor_followup.followup_id \
         LEFT JOIN user ON user.id = followup.remark_by_id \
         WHERE debtor.client_name LIKE ?1 \
           AND followup.status_code = ?2 \
           AND date(followup.date) BETWEEN ?3 AND ?4 \
           AND followup.remark_by NOT IN ({excluded_agents}) \
           AND followup.remark NOT LIKE ?5 \
         ORDER BY followup.datetime DESC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(
            rusqlite::params![
                format!("{CLIENT_PREFIX}%"),
                CURED_STATUS,
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string(),
                format!("%{EXCLUDED_REMARK}%"),
            ],
            |row| {
                Ok(PaymentRow {
                    cycle: row.get(0)?,
                    ch_code: row.get(1)?,
                    account_number: row
                        .get::<_, Option<String>>(2)?
                        .map(|account| format!("{account:0>10}")),
                    remarks: row.get(3)?,
                    agent_code: row.get(4)?,
                    status_code: row.get(5)?,
                    ptp_amount: row.get(6)?,
                    ptp_date: row.get(7)?,
                    ob: row.get(8)?,
                    dispo_date: row.get(9)?,
                    finone_id: row.get(10)?,
                    is_locked: row.get(11)?,
                    is_aborted: row.get(12)?,
                })
            },
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Text rendition of a payment row in PAYMENT_COLUMNS order, shared by the
/// CSV export, the XLSX width fitting, and the terminal preview.
pub fn payment_text_row(payment: &PaymentRow) -> [String; 13] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let num = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    let flag = |v: Option<i64>| v.map(|x| x.to_string()).unwrap_or_default();
    [
        opt(&payment.cycle),
        opt(&payment.ch_code),
        opt(&payment.account_number),
        opt(&payment.remarks),
        opt(&payment.agent_code),
        opt(&payment.status_code),
        num(payment.ptp_amount),
        opt(&payment.ptp_date),
        num(payment.ob),
        opt(&payment.dispo_date),
        opt(&payment.finone_id),
        flag(payment.is_locked),
        flag(payment.is_aborted),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    struct Followup<'a> {
        client: &'a str,
        account: &'a str,
        status: &'a str,
        remark: &'a str,
        agent: &'a str,
        date: &'a str,
        datetime: &'a str,
    }

    fn seed(conn: &Connection, f: &Followup) {
        conn.execute(
            "INSERT INTO debtor (client_name, cycle, card_no, account, ptp_amount, ptp_date, balance, placement) \
             VALUES (?1, '103', 'CH01', ?2, 1500.0, '2025-04-11', 20000.5, 'F-88')",
            rusqlite::params![f.client, f.account],
        )
        .unwrap();
        let debtor_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO user (username) VALUES (?1)",
            [f.agent],
        )
        .unwrap();
        let user_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO followup (status_code, remark, remark_by, remark_by_id, date, datetime) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![f.status, f.remark, f.agent, user_id, f.date, f.datetime],
        )
        .unwrap();
        let followup_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO debtor_followup (debtor_id, followup_id) VALUES (?1, ?2)",
            rusqlite::params![debtor_id, followup_id],
        )
        .unwrap();
    }

    fn cured(
        account: &'static str,
        agent: &'static str,
        date: &'static str,
        datetime: &'static str,
    ) -> Followup<'static> {
        Followup {
            client: "BPI CARDS XDAYS B1",
            account,
            status: "PAYMENT - CURED",
            remark: "POSTED PAYMENT CONFIRMED",
            agent,
            date,
            datetime,
        }
    }

    fn range() -> (NaiveDate, NaiveDate) {
        validate_range("2025-04-10", "2025-04-14").unwrap()
    }

    #[test]
    fn test_validate_range_rejects_inverted_dates() {
        let err = validate_range("2025-04-14", "2025-04-10").unwrap_err();
        assert!(matches!(err, DispoError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_validate_range_rejects_malformed_dates() {
        assert!(matches!(
            validate_range("04/10/2025", "2025-04-14").unwrap_err(),
            DispoError::InvalidDate(_)
        ));
    }

    #[test]
    fn test_query_filters_by_date_range() {
        let (_dir, conn) = test_db();
        seed(&conn, &cured("123456", "JDOE", "2025-04-11", "2025-04-11 09:00:00"));
        seed(&conn, &cured("777777", "JDOE", "2025-05-01", "2025-05-01 09:00:00"));
        let (from, to) = range();
        let rows = get_posted_payments(&conn, from, to).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_number.as_deref(), Some("0000123456"));
    }

    #[test]
    fn test_query_excludes_agents_and_remarks() {
        let (_dir, conn) = test_db();
        seed(&conn, &cured("111111", "BLRUIZ", "2025-04-11", "2025-04-11 09:00:00"));
        let mut mspm = cured("222222", "JDOE", "2025-04-11", "2025-04-11 10:00:00");
        mspm.remark = "MSPM ADJUSTMENT";
        seed(&conn, &mspm);
        seed(&conn, &cured("333333", "JDOE", "2025-04-11", "2025-04-11 11:00:00"));
        let (from, to) = range();
        let rows = get_posted_payments(&conn, from, to).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].agent_code.as_deref(), Some("JDOE"));
        assert_eq!(rows[0].account_number.as_deref(), Some("0000333333"));
    }

    #[test]
    fn test_query_filters_by_client_prefix_and_status() {
        let (_dir, conn) = test_db();
        let mut other_client = cured("111111", "JDOE", "2025-04-11", "2025-04-11 09:00:00");
        other_client.client = "RCBC CARDS";
        seed(&conn, &other_client);
        let mut not_cured = cured("222222", "JDOE", "2025-04-11", "2025-04-11 10:00:00");
        not_cured.status = "PTP - NEW";
        seed(&conn, &not_cured);
        let (from, to) = range();
        assert!(get_posted_payments(&conn, from, to).unwrap().is_empty());
    }

    #[test]
    fn test_query_orders_by_dispo_timestamp_descending() {
        let (_dir, conn) = test_db();
        seed(&conn, &cured("111111", "JDOE", "2025-04-11", "2025-04-11 09:00:00"));
        seed(&conn, &cured("222222", "JDOE", "2025-04-12", "2025-04-12 09:00:00"));
        let (from, to) = range();
        let rows = get_posted_payments(&conn, from, to).unwrap();
        assert_eq!(rows[0].account_number.as_deref(), Some("0000222222"));
        assert_eq!(rows[1].account_number.as_deref(), Some("0000111111"));
    }

    #[test]
    fn test_query_renders_cycle_label_from_last_two_digits() {
        let (_dir, conn) = test_db();
        seed(&conn, &cured("123456", "JDOE", "2025-04-11", "2025-04-11 09:00:00"));
        let (from, to) = range();
        let rows = get_posted_payments(&conn, from, to).unwrap();
        assert_eq!(rows[0].cycle.as_deref(), Some("Cycle 03"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let (_dir, conn) = test_db();
        let (from, to) = range();
        assert!(get_posted_payments(&conn, from, to).unwrap().is_empty());
    }

    #[test]
    fn test_payment_text_row_blanks_missing_values() {
        let payment = PaymentRow {
            cycle: None,
            ch_code: None,
            account_number: Some("0000000001".to_string()),
            remarks: None,
            agent_code: None,
            status_code: None,
            ptp_amount: None,
            ptp_date: None,
            ob: Some(10.0),
            dispo_date: None,
            finone_id: None,
            is_locked: None,
            is_aborted: None,
        };
        let text = payment_text_row(&payment);
        assert_eq!(text[0], "");
        assert_eq!(text[2], "0000000001");
        assert_eq!(text[8], "10");
    }
}
