//! Log parsing, level distribution and hourly anomaly analysis.
//!
//! Works over lines of the form `[YYYY-MM-DD HH:MM:SS] LEVEL: message`.
//! Lines that do not fit the shape are skipped rather than failing the
//! whole analysis.

use crate::PracticumError;
use rand::Rng;
use std::path::Path;

/// Hours charted by the temporal analysis.
pub const TOTAL_HOURS: usize = 24;

/// Entries shown per filter or search before the listing is cut off.
pub const DISPLAY_LIMIT: usize = 10;

/// One parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Bracketed timestamp, e.g. `[2026-01-03 14:23:01]`.
    pub timestamp: String,
    /// Hour digits from the timestamp, 0 when they cannot be read.
    pub hour: u32,
    pub level: String,
    pub message: String,
}

/// Parse one line. The level runs up to the first colon; an optional
/// single space after the colon is not part of the message.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    if !line.starts_with('[') {
        return None;
    }
    let end = line.find(']')?;
    let timestamp = &line[..=end];
    let hour = timestamp
        .get(12..14)
        .and_then(|h| h.parse::<u32>().ok())
        .unwrap_or(0);

    let rest = line[end + 1..].strip_prefix(' ')?;
    if rest.is_empty() {
        return None;
    }
    let colon = rest.find(':')?;
    let level = &rest[..colon];
    let after = &rest[colon + 1..];
    let message = after.strip_prefix(' ').unwrap_or(after);

    Some(LogEntry {
        timestamp: timestamp.to_string(),
        hour,
        level: level.to_string(),
        message: message.to_string(),
    })
}

/// Read and parse every well-formed entry from `path`.
pub fn load_entries(path: &Path) -> Result<Vec<LogEntry>, PracticumError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_log_line).collect())
}

/// Entry counts per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LevelSummary {
    pub total: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub critical: usize,
}

impl LevelSummary {
    /// Largest single-level count, for scaling the distribution bars.
    pub fn max_count(&self) -> usize {
        self.info
            .max(self.warning)
            .max(self.error)
            .max(self.critical)
    }
}

pub fn summarize(entries: &[LogEntry]) -> LevelSummary {
    let mut summary = LevelSummary::default();
    for entry in entries {
        summary.total += 1;
        match entry.level.as_str() {
            "INFO" => summary.info += 1,
            "WARNING" => summary.warning += 1,
            "ERROR" => summary.error += 1,
            "CRITICAL" => summary.critical += 1,
            _ => {}
        }
    }
    summary
}

/// Count of non-INFO entries per hour. Entries whose hour digits fall
/// outside the day are left out.
pub fn hourly_anomalies(entries: &[LogEntry]) -> [usize; TOTAL_HOURS] {
    let mut counts = [0usize; TOTAL_HOURS];
    for entry in entries {
        if entry.level != "INFO" && (entry.hour as usize) < TOTAL_HOURS {
            counts[entry.hour as usize] += 1;
        }
    }
    counts
}

/// Hour with the highest anomaly count and that count, earliest hour
/// winning ties. `None` when every hour is quiet.
pub fn peak_hour(counts: &[usize; TOTAL_HOURS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (hour, &count) in counts.iter().enumerate() {
        if count > 0 && best.map_or(true, |(_, max)| count > max) {
            best = Some((hour, count));
        }
    }
    best
}

const LEVEL_TABLE: [&str; 8] = [
    "INFO", "INFO", "INFO", "INFO", "WARNING", "WARNING", "ERROR", "CRITICAL",
];

const ERROR_MESSAGES: [&str; 3] = [
    "Database connection timeout",
    "Failed to write to disk",
    "Corrupted data packet received",
];

/// Build the demo log: two fixed startup lines plus 300 generated
/// entries, with a burst forced into the 14:00 hour so the temporal
/// analysis always has a visible peak.
pub fn generate_log<R: Rng>(rng: &mut R) -> String {
    let mut log = String::new();
    log.push_str("[2026-01-03 00:05:12] INFO: System startup initiated\n");
    log.push_str("[2026-01-03 00:06:45] INFO: Services loaded successfully\n");

    for i in 0..300 {
        let mut hour: u32 = rng.gen_range(0..24);
        let min: u32 = rng.gen_range(0..60);
        let sec: u32 = rng.gen_range(0..60);
        if i > 150 && i < 200 {
            hour = 14;
        }

        let level = LEVEL_TABLE[rng.gen_range(0..LEVEL_TABLE.len())];
        let message = match level {
            "INFO" => "User session created normally",
            "WARNING" => "High memory usage detected (85%)",
            "ERROR" => ERROR_MESSAGES[rng.gen_range(0..ERROR_MESSAGES.len())],
            _ => "Kernel panic - syncing VFS",
        };

        log.push_str(&format!(
            "[2026-01-03 {hour:02}:{min:02}:{sec:02}] {level}: {message}\n"
        ));
    }
    log
}

/// Write a fresh demo log to `path` unless one already exists.
pub fn ensure_log<R: Rng>(path: &Path, rng: &mut R) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::write(path, generate_log(rng))
}
