use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS debtor (
    id INTEGER PRIMARY KEY,
    client_name TEXT NOT NULL,
    cycle TEXT,
    card_no TEXT,
    account TEXT,
    ptp_amount REAL,
    ptp_date TEXT,
    balance REAL,
    placement TEXT,
    is_locked INTEGER DEFAULT 0,
    is_aborted INTEGER DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS followup (
    id INTEGER PRIMARY KEY,
    status_code TEXT,
    remark TEXT,
    remark_by TEXT,
    remark_by_id INTEGER,
    date TEXT,
    datetime TEXT,
    FOREIGN KEY (remark_by_id) REFERENCES user(id)
);

CREATE TABLE IF NOT EXISTS debtor_followup (
    id INTEGER PRIMARY KEY,
    debtor_id INTEGER NOT NULL,
    followup_id INTEGER NOT NULL,
    FOREIGN KEY (debtor_id) REFERENCES debtor(id),
    FOREIGN KEY (followup_id) REFERENCES followup(id)
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
