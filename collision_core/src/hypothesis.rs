//! Append-only log of student hypotheses
//!
//! Submissions are validated, timestamped and appended together with the
//! particle inputs they were made against. Storage sits behind one trait so
//! a session can run with an in-memory log or with the durable tabular file
//! that survives process restarts.

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LabError;
use crate::physics::Particle;

/// How many records the in-memory review echoes back
pub const MEMORY_REVIEW_DEPTH: usize = 5;
/// How many records the durable review reads back from the tail
pub const FILE_REVIEW_DEPTH: usize = 10;

/// Header row of the durable log, fixed column order
const FILE_HEADER: &str = "timestamp,mass1,velocity1,mass2,velocity2,hypothesis";

/// One submitted hypothesis with the inputs it was made against
#[derive(Debug, Clone, PartialEq)]
pub struct HypothesisRecord {
    pub timestamp: u64,
    pub mass1: f64,
    pub velocity1: f64,
    pub mass2: f64,
    pub velocity2: f64,
    pub text: String,
}

/// Append-only storage for hypothesis records
pub trait HypothesisStore {
    /// Append one record at the end of the log
    fn append(&mut self, record: HypothesisRecord) -> Result<(), LabError>;

    /// Last `n` records in submission order, most recent last
    fn recent(&self, n: usize) -> Result<Vec<HypothesisRecord>, LabError>;

    /// Number of records in the log
    fn len(&self) -> Result<usize, LabError>;
}

/// Validate, timestamp and append a submission.
///
/// Whitespace-only text is rejected without touching the log; the caller
/// shows the warning and the session stays where it is.
pub fn submit(
    store: &mut dyn HypothesisStore,
    text: &str,
    particles: &[Particle; 2],
) -> Result<(), LabError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        log::warn!("rejected empty hypothesis submission");
        return Err(LabError::EmptyHypothesis);
    }

    store.append(HypothesisRecord {
        timestamp: unix_timestamp(),
        mass1: particles[0].mass,
        velocity1: particles[0].velocity,
        mass2: particles[1].mass,
        velocity2: particles[1].velocity,
        text: trimmed.to_string(),
    })?;
    log::info!("hypothesis recorded, {} on file", store.len()?);
    Ok(())
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// In-memory log, scoped to one session
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<HypothesisRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HypothesisStore for MemoryStore {
    fn append(&mut self, record: HypothesisRecord) -> Result<(), LabError> {
        self.records.push(record);
        Ok(())
    }

    fn recent(&self, n: usize) -> Result<Vec<HypothesisRecord>, LabError> {
        let skip = self.records.len().saturating_sub(n);
        Ok(self.records[skip..].to_vec())
    }

    fn len(&self) -> Result<usize, LabError> {
        Ok(self.records.len())
    }
}

/// Durable log backed by one tabular UTF-8 file.
///
/// One record per line, comma separated, in the header's column order. The
/// hypothesis column has backslash, comma and line-break characters escaped
/// so a record never spans lines. The header row is written when the file
/// is first created; a missing file reads as an empty log. Appends are one
/// synchronous write each and assume a single writer per file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<HypothesisRecord>, LabError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if i == 0 || line.trim().is_empty() {
                continue;
            }
            let record = parse_row(&line).ok_or(LabError::MalformedRecord { line: i + 1 })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl HypothesisStore for FileStore {
    fn append(&mut self, record: HypothesisRecord) -> Result<(), LabError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_header {
            writeln!(file, "{}", FILE_HEADER)?;
        }
        writeln!(
            file,
            "{},{},{},{},{},{}",
            record.timestamp,
            record.mass1,
            record.velocity1,
            record.mass2,
            record.velocity2,
            escape_text(&record.text)
        )?;
        log::debug!("appended hypothesis record to {}", self.path.display());
        Ok(())
    }

    fn recent(&self, n: usize) -> Result<Vec<HypothesisRecord>, LabError> {
        let mut records = self.read_all()?;
        let skip = records.len().saturating_sub(n);
        Ok(records.split_off(skip))
    }

    fn len(&self) -> Result<usize, LabError> {
        Ok(self.read_all()?.len())
    }
}

/// Escape the free-text column so one record stays on one line
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\c"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('c') => out.push(','),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn parse_row(line: &str) -> Option<HypothesisRecord> {
    let mut fields = line.splitn(6, ',');
    let timestamp = fields.next()?.parse().ok()?;
    let mass1 = fields.next()?.parse().ok()?;
    let velocity1 = fields.next()?.parse().ok()?;
    let mass2 = fields.next()?.parse().ok()?;
    let velocity2 = fields.next()?.parse().ok()?;
    let text = unescape_text(fields.next()?);
    Some(HypothesisRecord {
        timestamp,
        mass1,
        velocity1,
        mass2,
        velocity2,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> HypothesisRecord {
        HypothesisRecord {
            timestamp: 1_700_000_000,
            mass1: 5.0,
            velocity1: 5.0,
            mass2: 5.0,
            velocity2: -3.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn memory_store_keeps_submission_order() {
        let mut store = MemoryStore::new();
        for text in ["first", "second", "third"] {
            store.append(record(text)).unwrap();
        }

        let tail = store.recent(2).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].text, "second");
        assert_eq!(tail[1].text, "third");
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn text_escaping_round_trips() {
        let awkward = "momentum, I think,\nstays the same \\ energy doesn't";
        let escaped = escape_text(awkward);
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains(','));
        assert_eq!(unescape_text(&escaped), awkward);
    }

    #[test]
    fn row_format_round_trips() {
        let original = record("the velocities swap, energy is conserved");
        let line = format!(
            "{},{},{},{},{},{}",
            original.timestamp,
            original.mass1,
            original.velocity1,
            original.mass2,
            original.velocity2,
            escape_text(&original.text)
        );
        assert_eq!(parse_row(&line).unwrap(), original);
    }
}
