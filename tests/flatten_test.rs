/// Call-detail record flattening through the public API
mod common;

use std::fs;

use callscope::flatten::{FlattenReport, flatten_directory};
use callscope::flatten_record;
use callscope::parsers::parse_call_record;
use common::FULL_CALL_RECORD;
use tempfile::TempDir;

#[test]
fn test_flatten_full_record_summary() {
    let record = parse_call_record(FULL_CALL_RECORD).unwrap();
    let flat = flatten_record(&record);

    assert_eq!(flat.conference_id.as_deref(), Some("conf-42"));
    assert_eq!(flat.session_count, 2);
    assert_eq!(flat.participant_roles, vec!["organizer", "attendee"]);
    assert_eq!(flat.notable_metrics.len(), 1);
    assert!(flat.summary.starts_with("Call by alex.morgan@example.com, type: groupCall."));
    assert!(flat.summary.contains("Session count: 2."));
}

#[test]
fn test_flatten_is_total_over_sparse_documents() {
    let documents = [
        "{}",
        r#"{"sessions":[]}"#,
        r#"{"sessions":[{}]}"#,
        r#"{"sessions":[{"participants":[{}]}]}"#,
        r#"{"sessions":[{"participants":[{"streams":[{}]}]}]}"#,
        r#"{"sessions":[{"participants":[{"streams":[{"deviceMetrics":{}}]}]}]}"#,
        r#"{"organizerUPN":null,"callType":null,"sessions":null}"#,
    ];

    for doc in documents {
        let record = parse_call_record(doc).unwrap();
        let flat = flatten_record(&record);
        assert!(flat.summary.starts_with("Call by "), "bad summary for {}", doc);
        assert!(flat.summary.ends_with('.'), "bad summary for {}", doc);
    }
}

#[test]
fn test_flatten_is_idempotent() {
    let record = parse_call_record(FULL_CALL_RECORD).unwrap();
    assert_eq!(flatten_record(&record), flatten_record(&record));
}

#[test]
fn test_flatten_directory_writes_one_line_per_document() {
    let input = TempDir::new().expect("Failed to create temp dir");
    fs::write(input.path().join("call_1.json"), FULL_CALL_RECORD).unwrap();
    fs::write(input.path().join("call_2.json"), r#"{"conferenceId":"conf-7"}"#).unwrap();
    fs::write(input.path().join("call_3.json"), "{ truncated").unwrap();
    fs::write(input.path().join("readme.txt"), "ignored").unwrap();

    let mut out = Vec::new();
    let report = flatten_directory(input.path(), &mut out).unwrap();

    assert_eq!(report, FlattenReport { flattened: 2, failed: 1 });
    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["conferenceId"], "conf-42");
    assert_eq!(lines[1]["conferenceId"], "conf-7");
    assert_eq!(
        lines[1]["summary"],
        "Call by none, type: none. Participants: . Session count: 0. Metrics: ."
    );
}

#[test]
fn test_flatten_directory_missing_input() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let mut out = Vec::new();

    let err = flatten_directory(&temp.path().join("created_json"), &mut out).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
