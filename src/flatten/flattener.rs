use std::fmt::Display;

use crate::models::{CallDetailRecord, FlattenedSummary, Stream};

/// Rendered in place of any missing value
pub const MISSING: &str = "none";

/// Render an optional value, substituting [`MISSING`] when absent
fn or_missing<T: Display + ?Sized>(value: Option<&T>) -> String {
    value.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

/// Fixed-format description of one stream's quality metrics
pub fn describe_stream(role: Option<&str>, stream: &Stream) -> String {
    format!(
        "role:{} avgJitter:{} packetLoss:{} avgRTT:{} glitchRate:{} sentSignalLevel:{}",
        or_missing(role),
        or_missing(stream.average_jitter.as_ref()),
        or_missing(stream.packet_loss_rate.as_ref()),
        or_missing(stream.average_round_trip_time.as_ref()),
        or_missing(stream.glitch_rate()),
        or_missing(stream.sent_signal_level()),
    )
}

/// Flatten one call-detail record into a single-level summary
///
/// Sessions, participants and streams are walked in document order. The
/// transform is total: sparse records produce a summary with `none`
/// placeholders instead of failing.
pub fn flatten_record(record: &CallDetailRecord) -> FlattenedSummary {
    let sessions = record.sessions();
    let mut participant_roles = Vec::new();
    let mut notable_metrics = Vec::new();

    for session in sessions {
        for participant in session.participants() {
            let role = participant.role.as_deref();
            participant_roles.push(or_missing(role));
            for stream in participant.streams() {
                notable_metrics.push(describe_stream(role, stream));
            }
        }
    }

    let summary = format!(
        "Call by {}, type: {}. Participants: {}. Session count: {}. Metrics: {}.",
        or_missing(record.organizer_upn.as_deref()),
        or_missing(record.call_type.as_deref()),
        participant_roles.join(", "),
        sessions.len(),
        notable_metrics.join(" | "),
    );

    FlattenedSummary {
        conference_id: record.conference_id.clone(),
        organizer_upn: record.organizer_upn.clone(),
        call_type: record.call_type.clone(),
        session_count: sessions.len(),
        participant_roles,
        summary,
        notable_metrics,
    }
}
