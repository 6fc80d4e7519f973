//! Call-detail record schema consumed by the flattener.
//!
//! Every level of the hierarchy is optional. Missing or `null` collections are
//! exposed as empty slices through the accessor methods, and missing metrics as
//! `None`, so callers never repeat the absence handling themselves.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single metric value, rendered verbatim in descriptions.
///
/// CDR exports mix plain numbers (`packetLossRate`) with ISO-8601 durations
/// (`averageJitter: "PT0.012S"`), so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Other(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetrics {
    #[serde(default)]
    pub glitch_rate: Option<MetricValue>,
    #[serde(default)]
    pub sent_signal_level: Option<MetricValue>,
}

/// One media leg of a participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    #[serde(default)]
    pub average_jitter: Option<MetricValue>,
    #[serde(default)]
    pub packet_loss_rate: Option<MetricValue>,
    #[serde(default)]
    pub average_round_trip_time: Option<MetricValue>,
    #[serde(default)]
    pub device_metrics: Option<DeviceMetrics>,
}

impl Stream {
    pub fn glitch_rate(&self) -> Option<&MetricValue> {
        self.device_metrics.as_ref().and_then(|d| d.glitch_rate.as_ref())
    }

    pub fn sent_signal_level(&self) -> Option<&MetricValue> {
        self.device_metrics.as_ref().and_then(|d| d.sent_signal_level.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub streams: Option<Vec<Stream>>,
}

impl Participant {
    pub fn streams(&self) -> &[Stream] {
        self.streams.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub participants: Option<Vec<Participant>>,
}

impl Session {
    pub fn participants(&self) -> &[Participant] {
        self.participants.as_deref().unwrap_or_default()
    }
}

/// A nested call-detail record: conference → session → participant → stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallDetailRecord {
    #[serde(rename = "organizerUPN", default)]
    pub organizer_upn: Option<String>,
    #[serde(rename = "callType", default)]
    pub call_type: Option<String>,
    #[serde(rename = "conferenceId", default)]
    pub conference_id: Option<String>,
    #[serde(default)]
    pub sessions: Option<Vec<Session>>,
}

impl CallDetailRecord {
    pub fn sessions(&self) -> &[Session] {
        self.sessions.as_deref().unwrap_or_default()
    }
}

/// Single-level summary produced from one [`CallDetailRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedSummary {
    pub conference_id: Option<String>,
    #[serde(rename = "organizerUPN")]
    pub organizer_upn: Option<String>,
    pub call_type: Option<String>,
    pub session_count: usize,
    pub participant_roles: Vec<String>,
    pub summary: String,
    pub notable_metrics: Vec<String>,
}
