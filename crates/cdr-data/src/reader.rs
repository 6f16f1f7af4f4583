//! Export file discovery and row normalisation.
//!
//! Reads carrier CDR exports (`.csv` / `.txt`), locates the header row,
//! and converts every usable data row into a [`CallRecord`].

use std::path::{Path, PathBuf};

use cdr_core::error::{AnalyzerError, Result};
use cdr_core::models::{digit_count, CallRecord, Direction};
use tracing::{debug, warn};

use crate::duration::parse_duration;
use crate::tokenizer::tokenize_line;

/// Text of the header cell meaning "start time"; data begins on the next line.
pub const HEADER_MARKER: &str = "开始时间";
/// Text of the footer cell meaning "total"; such lines are skipped.
pub const FOOTER_MARKER: &str = "合计";
/// Field separator used by the exports.
pub const DELIMITER: char = ',';
/// File extensions treated as exports.
pub const EXPORT_EXTENSIONS: [&str; 2] = ["csv", "txt"];
/// Rows with fewer fields are malformed.
pub const MIN_FIELDS: usize = 6;
/// Counterparty numbers need at least this many ASCII digits.
pub const MIN_NUMBER_DIGITS: usize = 7;

// ── RawRow ────────────────────────────────────────────────────────────────────

/// A tokenized data row known to carry at least [`MIN_FIELDS`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    /// Validate the field count once; `None` for short rows.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some(Self { fields })
    }

    pub fn direction_label(&self) -> &str {
        &self.fields[0]
    }

    pub fn counterparty_number(&self) -> &str {
        &self.fields[1]
    }

    pub fn start_timestamp(&self) -> &str {
        &self.fields[2]
    }

    /// Field 3, or field 4 when field 3 is blank.
    pub fn duration_text(&self) -> &str {
        if self.fields[3].is_empty() {
            &self.fields[4]
        } else {
            &self.fields[3]
        }
    }

    pub fn location(&self) -> &str {
        &self.fields[5]
    }

    /// Field 6, `"0"` when absent or blank.
    pub fn fee_text(&self) -> &str {
        self.optional(6).unwrap_or("0")
    }

    pub fn product_text(&self) -> &str {
        self.optional(7).unwrap_or("")
    }

    pub fn remark_text(&self) -> &str {
        self.optional(8).unwrap_or("")
    }

    fn optional(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Build the normalised record. Validity filtering happens separately.
    pub fn into_record(self) -> CallRecord {
        let duration_text = self.duration_text().to_string();
        let parsed = parse_duration(&duration_text);

        CallRecord {
            direction: Direction::from_label(self.direction_label()),
            direction_label: self.direction_label().to_string(),
            counterparty_number: self.counterparty_number().to_string(),
            start_timestamp: self.start_timestamp().to_string(),
            duration_seconds: parsed.map(|d| d.seconds).unwrap_or(0),
            duration_format: parsed.map(|d| d.format),
            duration_text,
            location: self.location().to_string(),
            fee_text: self.fee_text().to_string(),
            product_text: self.product_text().to_string(),
            remark_text: self.remark_text().to_string(),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// `true` when `number` may enter the corpus: non-empty, at least
/// [`MIN_NUMBER_DIGITS`] digits, and not the account holder's own number.
pub fn is_valid_counterparty(number: &str, self_number: Option<&str>) -> bool {
    let number = number.trim();
    if number.is_empty() || digit_count(number) < MIN_NUMBER_DIGITS {
        return false;
    }
    self_number != Some(number)
}

/// Parse the full text of one export into valid records.
///
/// Malformed rows are skipped, never reported as errors.
pub fn parse_content(content: &str, self_number: Option<&str>) -> Vec<CallRecord> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.split('\n').collect();

    // Without a header marker every line is a candidate row.
    let start_index = lines
        .iter()
        .position(|line| line.contains(HEADER_MARKER))
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut records = Vec::new();
    let mut skipped = 0u64;
    let mut malformed = 0u64;
    let mut filtered = 0u64;
    let mut defaulted = 0u64;

    for raw_line in &lines[start_index..] {
        let line = raw_line.trim();
        if line.is_empty() || line.contains(FOOTER_MARKER) || !line.contains(DELIMITER) {
            skipped += 1;
            continue;
        }

        let Some(row) = RawRow::from_fields(tokenize_line(line, DELIMITER)) else {
            malformed += 1;
            continue;
        };

        if !is_valid_counterparty(row.counterparty_number(), self_number) {
            filtered += 1;
            continue;
        }

        let record = row.into_record();
        if !record.has_parsed_duration() {
            defaulted += 1;
        }
        records.push(record);
    }

    debug!(
        "Parsed {} lines from header offset {}: {} kept ({} with defaulted duration), \
         {} skipped, {} malformed, {} filtered",
        lines.len(),
        start_index,
        records.len(),
        defaulted,
        skipped,
        malformed,
        filtered,
    );

    records
}

/// Read an export file as UTF-8 text.
pub fn read_export(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| AnalyzerError::Decode(path.to_path_buf()))
}

/// Parse one export file. Unreadable files contribute no records.
pub fn parse_file(path: &Path, self_number: Option<&str>) -> Vec<CallRecord> {
    match read_export(path) {
        Ok(content) => {
            let records = parse_content(&content, self_number);
            debug!("File {}: {} records", path.display(), records.len());
            records
        }
        Err(e) => {
            warn!("Failed to parse file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Find all export files recursively under `root`, sorted by path.
///
/// Symbolic links are followed; a link that points back at one of its own
/// ancestors is reported and skipped.
pub fn find_export_files(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        warn!("{}", AnalyzerError::RootNotFound(root.to_path_buf()));
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("{}", AnalyzerError::Walk(e.to_string()));
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_export_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Parse every export under `root` and concatenate the results in path order.
pub fn parse_tree(root: &Path, self_number: Option<&str>) -> Vec<CallRecord> {
    let files = find_export_files(root);
    let mut all_records = Vec::new();

    for file in &files {
        all_records.extend(parse_file(file, self_number));
    }

    debug!(
        "Loaded {} records from {} files under {}",
        all_records.len(),
        files.len(),
        root.display()
    );

    all_records
}

/// Parse a mixed list of export files and directories, concatenating the
/// results in the order given. Directories are walked like [`parse_tree`];
/// a path that cannot be read contributes nothing and the rest still load.
pub fn parse_paths<I, P>(paths: I, self_number: Option<&str>) -> Vec<CallRecord>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut all_records = Vec::new();
    let mut sources = 0usize;

    for path in paths {
        let path = path.as_ref();
        sources += 1;
        if path.is_dir() {
            all_records.extend(parse_tree(path, self_number));
        } else {
            all_records.extend(parse_file(path, self_number));
        }
    }

    debug!(
        "Loaded {} records from {} paths",
        all_records.len(),
        sources
    );

    all_records
}

fn has_export_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            EXPORT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
