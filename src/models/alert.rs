use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Severity level of a call-quality alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// A "bad call" is anything above Low
    pub fn is_bad(self) -> bool {
        matches!(self, Severity::Medium | Severity::High)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => bail!("unknown severity '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertUser {
    #[serde(
        rename = "DisplayName",
        alias = "displayName",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub display_name: String,
    #[serde(alias = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One call-quality alert, as stored on a single line of a corpus shard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(
        rename = "alert_id",
        alias = "alertId",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_opaque_id"
    )]
    pub alert_id: Option<String>,
    /// Empty when the exporter omitted it
    #[serde(
        alias = "Timestamp",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub timestamp: String,
    #[serde(rename = "Level", alias = "level", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(
        rename = "Severity",
        alias = "severity",
        deserialize_with = "crate::parsers::deserializers::deserialize_severity"
    )]
    pub severity: Severity,
    #[serde(rename = "Source", alias = "source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        alias = "callId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_opaque_id"
    )]
    pub call_id: Option<String>,
    #[serde(
        rename = "User",
        alias = "user",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_null_default"
    )]
    pub user: AlertUser,
    #[serde(rename = "Type", alias = "type", default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(
        rename = "Issue",
        alias = "issue",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub issue: String,
    #[serde(
        rename = "Metric",
        alias = "metric",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub metric: String,
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub description: String,
    #[serde(
        rename = "Platform",
        alias = "platform",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_text"
    )]
    pub platform: String,
}

impl AlertRecord {
    pub fn display_name(&self) -> &str {
        &self.user.display_name
    }

    pub fn is_bad_call(&self) -> bool {
        self.severity.is_bad()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_str_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!(" medium ".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_only_medium_and_high_are_bad() {
        assert!(!Severity::Low.is_bad());
        assert!(Severity::Medium.is_bad());
        assert!(Severity::High.is_bad());
    }

    #[test]
    fn test_generator_format_record() {
        let json = r#"{
            "alert_id": "3f1c2a9e-0000-4000-8000-000000000001",
            "timestamp": "2025-06-01T10:00:00.000000Z",
            "Level": "User Level",
            "Severity": "High",
            "Source": "CQD",
            "call_id": "3f1c2a9e-0000-4000-8000-000000000002",
            "User": {"DisplayName": "Jamie Torres", "email": "jamie.torres@example.com"},
            "Type": "Others",
            "Issue": "Audio Jitter",
            "Metric": "AudioJitter",
            "Description": "User experienced audio jitter during the call.",
            "Platform": "Windows"
        }"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "Jamie Torres");
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.metric, "AudioJitter");
        assert_eq!(record.level.as_deref(), Some("User Level"));
        assert!(record.is_bad_call());
    }

    #[test]
    fn test_camel_case_record() {
        let json = r#"{
            "alertId": "a-1",
            "timestamp": "2025-06-01T10:00:00Z",
            "severity": "medium",
            "issue": "Packet Loss",
            "metric": "PacketLoss",
            "description": "Loss spike",
            "platform": "MacOS",
            "user": {"displayName": "More, Santosh", "email": "more.santosh@example.com"}
        }"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.alert_id.as_deref(), Some("a-1"));
        assert_eq!(record.severity, Severity::Medium);
        assert_eq!(record.display_name(), "More, Santosh");
        assert_eq!(record.platform, "MacOS");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"timestamp":"2025-06-01T10:00:00Z","Severity":"Low"}"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "");
        assert!(record.issue.is_empty());
        assert!(record.alert_id.is_none());
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let json = r#"{"timestamp":"2025-06-01T10:00:00Z","Severity":"Critical"}"#;
        assert!(serde_json::from_str::<AlertRecord>(json).is_err());
    }
}
