use std::collections::BTreeMap;

use crate::models::{Record, SummaryRow};

/// Pivot one category's records by (cycle, status): row count plus summed
/// cleaned balance per pair. A missing cycle or status forms its own group
/// rather than being dropped. BTreeMap keeps the output stable; callers do
/// not rely on any particular order.
pub fn summarize(category: &str, records: &[Record]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(Option<String>, Option<String>), (usize, f64)> = BTreeMap::new();

    for record in records {
        let key = (record.cycle.clone(), record.status.clone());
        let entry = groups.entry(key).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.balance;
    }

    groups
        .into_iter()
        .map(|((cycle, status), (count, total_balance))| SummaryRow {
            category: category.to_string(),
            cycle,
            status,
            count,
            total_balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(cycle: Option<&str>, status: Option<&str>, balance: f64) -> Record {
        Record {
            cycle: cycle.map(|c| c.to_string()),
            status: status.map(|s| s.to_string()),
            balance,
            ..Record::default()
        }
    }

    #[test]
    fn test_groups_by_cycle_and_status() {
        let records = vec![
            rec(Some("1"), Some("A"), 10.0),
            rec(Some("1"), Some("A"), 5.0),
            rec(Some("2"), Some("B"), 3.0),
        ];
        let rows = summarize("PTP", &records);
        assert_eq!(rows.len(), 2);

        let first = rows.iter().find(|r| r.cycle.as_deref() == Some("1")).unwrap();
        assert_eq!(first.status.as_deref(), Some("A"));
        assert_eq!(first.count, 2);
        assert_eq!(first.total_balance, 15.0);

        let second = rows.iter().find(|r| r.cycle.as_deref() == Some("2")).unwrap();
        assert_eq!(second.count, 1);
        assert_eq!(second.total_balance, 3.0);
    }

    #[test]
    fn test_missing_cycle_forms_own_group() {
        let records = vec![
            rec(None, Some("A"), 1.0),
            rec(None, Some("A"), 2.0),
            rec(Some("1"), Some("A"), 4.0),
        ];
        let rows = summarize("RPC", &records);
        assert_eq!(rows.len(), 2);
        let null_group = rows.iter().find(|r| r.cycle.is_none()).unwrap();
        assert_eq!(null_group.count, 2);
        assert_eq!(null_group.total_balance, 3.0);
    }

    #[test]
    fn test_grouping_is_complete() {
        let records = vec![
            rec(Some("1"), None, 1.0),
            rec(None, None, 1.0),
            rec(Some("1"), Some("A"), 1.0),
        ];
        let rows = summarize("TPC", &records);
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_category_name_is_carried() {
        let rows = summarize("Negative", &[rec(Some("1"), Some("A"), 0.0)]);
        assert_eq!(rows[0].category, "Negative");
    }
}
