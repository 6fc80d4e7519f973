//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

/// Builder for creating test corpus directories
pub struct CorpusDirBuilder {
    temp_dir: TempDir,
}

impl CorpusDirBuilder {
    /// Create a new builder with an empty corpus directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the corpus directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        let mut file = fs::File::create(path).expect("Failed to create shard");
        file.write_all(content.as_bytes()).expect("Failed to write shard");
        self
    }

    /// Add a shard built from records, one per line
    pub fn with_shard(self, name: &str, records: &[AlertRecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_file(name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CorpusDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one alert shard line
pub struct AlertRecordBuilder {
    alert_id: String,
    display_name: String,
    severity: String,
    timestamp: String,
    issue: String,
    platform: String,
}

impl AlertRecordBuilder {
    /// Create a new record with default values
    pub fn new() -> Self {
        Self {
            alert_id: "00000000-0000-4000-8000-000000000000".to_string(),
            display_name: "Jamie Torres".to_string(),
            severity: "High".to_string(),
            timestamp: "2025-06-01T10:00:00.000000Z".to_string(),
            issue: "Audio Jitter".to_string(),
            platform: "Windows".to_string(),
        }
    }

    pub fn alert_id(mut self, alert_id: &str) -> Self {
        self.alert_id = alert_id.to_string();
        self
    }

    pub fn user(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }

    pub fn severity(mut self, severity: &str) -> Self {
        self.severity = severity.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn issue(mut self, issue: &str) -> Self {
        self.issue = issue.to_string();
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Convert to a JSON line in the exporter's field layout
    pub fn to_json(&self) -> String {
        json!({
            "alert_id": self.alert_id,
            "timestamp": self.timestamp,
            "Level": "User Level",
            "Severity": self.severity,
            "Source": "CQD",
            "callId": "11111111-1111-4111-8111-111111111111",
            "User": {
                "DisplayName": self.display_name,
                "email": format!("{}@example.com", self.display_name.to_lowercase().replace(' ', ".")),
            },
            "Type": "Others",
            "Issue": self.issue,
            "Metric": self.issue.replace(' ', ""),
            "Description": format!("User experienced {} during the call.", self.issue.to_lowercase()),
            "Platform": self.platform,
        })
        .to_string()
    }
}

impl Default for AlertRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a corpus with several users, severities and one corrupt line
pub fn realistic_corpus() -> TempDir {
    CorpusDirBuilder::new()
        .with_shard(
            "call_data_1.jsonl",
            &[
                AlertRecordBuilder::new().alert_id("a-1").user("Jamie Torres").severity("High"),
                AlertRecordBuilder::new().alert_id("a-2").user("More, Santosh").severity("Medium"),
                AlertRecordBuilder::new()
                    .alert_id("a-3")
                    .user("Jamie Torres")
                    .severity("Low")
                    .issue("Packet Loss"),
            ],
        )
        .with_shard(
            "call_data_2.jsonl",
            &[
                AlertRecordBuilder::new()
                    .alert_id("b-1")
                    .user("Jamie Torres")
                    .severity("Medium")
                    .issue("Inactive Video Stream")
                    .platform("CitrixVDI")
                    .timestamp("2025-06-03T08:15:00.000000Z"),
                AlertRecordBuilder::new().alert_id("b-2").user("Murali, Srinath-XT").severity("Low"),
            ],
        )
        .with_file("call_data_3.jsonl", "{\"alert_id\": \"c-1\", \"timestamp\": \n")
        .build()
}

/// A complete call-detail record with two sessions
pub const FULL_CALL_RECORD: &str = r#"{
    "organizerUPN": "alex.morgan@example.com",
    "callType": "groupCall",
    "conferenceId": "conf-42",
    "sessions": [
        {
            "participants": [
                {
                    "role": "organizer",
                    "streams": [
                        {
                            "averageJitter": "PT0.012S",
                            "packetLossRate": 0.02,
                            "averageRoundTripTime": "PT0.08S",
                            "deviceMetrics": {"glitchRate": 5, "sentSignalLevel": -32}
                        }
                    ]
                }
            ]
        },
        {"participants": [{"role": "attendee"}]}
    ]
}"#;
