use crate::models::Record;

/// A disposition category: case-insensitive substring match on the status
/// field, with an optional exclusion substring.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub include: &'static str,
    pub exclude: Option<&'static str>,
}

/// Fixed rule set, applied independently per rule — a record may land in
/// several categories or in none.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule { name: "Bank Escalation", include: "bank escalation", exclude: None },
    CategoryRule { name: "PTP", include: "ptp", exclude: Some("ptp ff up") },
    CategoryRule { name: "Payment - Cured", include: "payment - cured", exclude: None },
    CategoryRule { name: "Negative", include: "negative", exclude: None },
    CategoryRule { name: "RPC", include: "rpc", exclude: None },
    CategoryRule { name: "TPC", include: "tpc", exclude: None },
];

fn matches(rule: &CategoryRule, status: &str) -> bool {
    let status_lower = status.to_lowercase();
    if !status_lower.contains(rule.include) {
        return false;
    }
    match rule.exclude {
        Some(exclude) => !status_lower.contains(exclude),
        None => true,
    }
}

pub struct CategoryBucket {
    pub name: &'static str,
    pub records: Vec<Record>,
}

/// Partition records into the fixed categories, in rule order. Records
/// without a status never match. Empty buckets are kept here; the emitter
/// skips them.
pub fn categorize(records: &[Record]) -> Vec<CategoryBucket> {
    CATEGORY_RULES
        .iter()
        .map(|rule| CategoryBucket {
            name: rule.name,
            records: records
                .iter()
                .filter(|r| r.status.as_deref().is_some_and(|s| matches(rule, s)))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(status: Option<&str>) -> Record {
        Record {
            status: status.map(|s| s.to_string()),
            ..Record::default()
        }
    }

    fn bucket<'a>(buckets: &'a [CategoryBucket], name: &str) -> &'a CategoryBucket {
        buckets.iter().find(|b| b.name == name).unwrap()
    }

    #[test]
    fn test_ptp_excludes_ff_up() {
        let records = vec![rec(Some("PTP FF UP - CALLBACK")), rec(Some("PTP - NEW"))];
        let buckets = categorize(&records);
        let ptp = bucket(&buckets, "PTP");
        assert_eq!(ptp.records.len(), 1);
        assert_eq!(ptp.records[0].status.as_deref(), Some("PTP - NEW"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let records = vec![rec(Some("ptp - followup")), rec(Some("Rpc Confirmed"))];
        let buckets = categorize(&records);
        assert_eq!(bucket(&buckets, "PTP").records.len(), 1);
        assert_eq!(bucket(&buckets, "RPC").records.len(), 1);
    }

    #[test]
    fn test_membership_is_not_exclusive() {
        let records = vec![rec(Some("RPC - NEGATIVE"))];
        let buckets = categorize(&records);
        assert_eq!(bucket(&buckets, "RPC").records.len(), 1);
        assert_eq!(bucket(&buckets, "Negative").records.len(), 1);
    }

    #[test]
    fn test_missing_status_never_matches() {
        let records = vec![rec(None)];
        let buckets = categorize(&records);
        assert!(buckets.iter().all(|b| b.records.is_empty()));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let buckets = categorize(&[]);
        let names: Vec<&str> = buckets.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec!["Bank Escalation", "PTP", "Payment - Cured", "Negative", "RPC", "TPC"]
        );
    }
}
