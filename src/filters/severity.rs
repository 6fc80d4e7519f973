use crate::models::{AlertRecord, Severity};

/// Severities that make a call "bad"
pub const BAD_CALL_SEVERITIES: [Severity; 2] = [Severity::Medium, Severity::High];

/// Pure predicate: the record's severity is Medium or High
///
/// Applied only after the fuzzy matcher has accepted a record, so name
/// matching always sees the full population regardless of severity.
pub fn is_bad_call(record: &AlertRecord) -> bool {
    BAD_CALL_SEVERITIES.contains(&record.severity)
}

/// Keep only bad-call records, preserving order
pub fn retain_bad_calls(records: Vec<AlertRecord>) -> Vec<AlertRecord> {
    records.into_iter().filter(is_bad_call).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertUser;

    fn create_test_record(id: &str, severity: Severity) -> AlertRecord {
        AlertRecord {
            alert_id: Some(id.to_string()),
            timestamp: "2025-06-01T10:00:00Z".to_string(),
            level: None,
            severity,
            source: None,
            call_id: None,
            user: AlertUser { display_name: "Jamie Torres".to_string(), email: None },
            alert_type: None,
            issue: "Audio Jitter".to_string(),
            metric: "AudioJitter".to_string(),
            description: "d".to_string(),
            platform: "Windows".to_string(),
        }
    }

    #[test]
    fn test_is_bad_call() {
        assert!(!is_bad_call(&create_test_record("a", Severity::Low)));
        assert!(is_bad_call(&create_test_record("b", Severity::Medium)));
        assert!(is_bad_call(&create_test_record("c", Severity::High)));
    }

    #[test]
    fn test_retain_bad_calls_preserves_order() {
        let records = vec![
            create_test_record("a", Severity::High),
            create_test_record("b", Severity::Low),
            create_test_record("c", Severity::Medium),
            create_test_record("d", Severity::Low),
        ];

        let kept: Vec<String> =
            retain_bad_calls(records).into_iter().filter_map(|r| r.alert_id).collect();
        assert_eq!(kept, vec!["a", "c"]);
    }
}
