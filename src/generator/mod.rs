//! Synthetic alert corpus generation
//!
//! Produces shards in the same shape as the production exporter so the retrieval engine
//! can be exercised without real telemetry. Output is reproducible for a given seed and
//! reference time.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::info;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Builder;

use crate::models::{AlertRecord, AlertUser, Severity};

pub const DEFAULT_USER_NAMES: [&str; 5] = [
    "Jamie Torres",
    "Aryan Nayan-XT",
    "Mitra, Abhinivesh-XT",
    "More, Santosh",
    "Murali, Srinath-XT",
];
pub const DEFAULT_ISSUES: [&str; 5] =
    ["Inactive Video Stream", "VideoFreezeDuration", "Audio Jitter", "Packet Loss", "High CPU Usage"];
pub const DEFAULT_PLATFORMS: [&str; 4] = ["CitrixVDI", "Windows", "MacOS", "Mobile"];

/// Shape of a generated corpus
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_files: usize,
    pub records_per_file: usize,
    /// Probability that a record draws a random severity instead of Low
    pub bad_call_probability: f64,
    /// Timestamps fall within this many days before the reference time
    pub max_age_days: i64,
    pub user_names: Vec<String>,
    pub issues: Vec<String>,
    pub platforms: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_files: 50,
            records_per_file: 25,
            bad_call_probability: 0.3,
            max_age_days: 30,
            user_names: DEFAULT_USER_NAMES.iter().map(|s| s.to_string()).collect(),
            issues: DEFAULT_ISSUES.iter().map(|s| s.to_string()).collect(),
            platforms: DEFAULT_PLATFORMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [String]) -> &'a str {
    options.choose(rng).map(String::as_str).unwrap_or_default()
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// `jamie.torres@example.com` from `Jamie Torres`, `more.santosh@example.com` from `More, Santosh`
pub fn email_for(display_name: &str) -> String {
    format!("{}@example.com", display_name.to_lowercase().replace(' ', ".").replace(',', ""))
}

/// Generate one random alert record relative to `now`
pub fn create_random_record<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    now: DateTime<Utc>,
) -> AlertRecord {
    let user = pick(rng, &config.user_names).to_string();
    let issue = pick(rng, &config.issues).to_string();
    let severity = if rng.gen_bool(config.bad_call_probability.clamp(0.0, 1.0)) {
        *Severity::ALL.choose(rng).unwrap_or(&Severity::Low)
    } else {
        Severity::Low
    };
    let age = Duration::days(rng.gen_range(0..=config.max_age_days.max(0)));

    AlertRecord {
        alert_id: Some(random_uuid(rng)),
        timestamp: (now - age).format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        level: Some("User Level".to_string()),
        severity,
        source: Some("CQD".to_string()),
        call_id: Some(random_uuid(rng)),
        user: AlertUser { email: Some(email_for(&user)), display_name: user },
        alert_type: Some("Others".to_string()),
        metric: issue.replace(' ', ""),
        description: format!("User experienced {} during the call.", issue.to_lowercase()),
        issue,
        platform: pick(rng, &config.platforms).to_string(),
    }
}

/// Write `config.num_files` shards named `call_data_<n>.jsonl` into `output_dir`
///
/// Returns the number of records written.
pub fn generate_corpus<R: Rng + ?Sized>(
    output_dir: &Path,
    config: &GeneratorConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<usize> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut written = 0;
    for i in 0..config.num_files {
        let path = output_dir.join(format!("call_data_{}.jsonl", i + 1));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create shard: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        for _ in 0..config.records_per_file {
            let record = create_random_record(rng, config, now);
            let line = serde_json::to_string(&record).context("Failed to serialize record")?;
            writeln!(writer, "{}", line)
                .with_context(|| format!("Failed to write shard: {}", path.display()))?;
            written += 1;
        }

        writer.flush().with_context(|| format!("Failed to write shard: {}", path.display()))?;
    }

    info!(
        "Generated {} records in {} files under {}",
        written,
        config.num_files,
        output_dir.display()
    );
    Ok(written)
}
