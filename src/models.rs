/// One normalized call-disposition row. Text fields keep whatever the
/// source sheet held; `balance` is numeric after cleaning.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub cycle: Option<String>,
    pub client: Option<String>,
    pub account_no: Option<String>,
    pub card_no: Option<String>,
    pub debtor: Option<String>,
    pub call_status: Option<String>,
    pub status: Option<String>,
    pub remark: Option<String>,
    pub remark_by: Option<String>,
    pub ptp_amount: Option<String>,
    pub ptp_date: Option<String>,
    pub dialed_number: Option<String>,
    pub balance: f64,
    pub min_payment: Option<String>,
}

impl Record {
    /// Look up a text field by its canonical export column name.
    /// `balance` is numeric and is not served from here.
    pub fn text_field(&self, column: &str) -> Option<&str> {
        let field = match column {
            "cycle" => &self.cycle,
            "client" => &self.client,
            "account no." => &self.account_no,
            "card no." => &self.card_no,
            "debtor" => &self.debtor,
            "call status" => &self.call_status,
            "status" => &self.status,
            "remark" => &self.remark,
            "remark by" => &self.remark_by,
            "ptp amount" => &self.ptp_amount,
            "ptp date" => &self.ptp_date,
            "dialed number" => &self.dialed_number,
            "min payment" => &self.min_payment,
            _ => &None,
        };
        field.as_deref()
    }
}

/// One pivoted summary line: how many records and how much balance a
/// (cycle, status) pair contributed within a category.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub cycle: Option<String>,
    pub status: Option<String>,
    pub count: usize,
    pub total_balance: f64,
}

/// One cured-payment result row from the posted-payments query.
#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub cycle: Option<String>,
    pub ch_code: Option<String>,
    pub account_number: Option<String>,
    pub remarks: Option<String>,
    pub agent_code: Option<String>,
    pub status_code: Option<String>,
    pub ptp_amount: Option<f64>,
    pub ptp_date: Option<String>,
    pub ob: Option<f64>,
    pub dispo_date: Option<String>,
    pub finone_id: Option<String>,
    pub is_locked: Option<i64>,
    pub is_aborted: Option<i64>,
}
