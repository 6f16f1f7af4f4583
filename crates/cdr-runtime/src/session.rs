//! The caller-owned analysis session.
//!
//! Every operation a CLI or GUI needs (parse, self-number, the three
//! queries, rendering, clear) is a method on [`AnalysisSession`]. Callers
//! that share one session across threads must serialise access themselves.

use std::path::Path;

use cdr_core::error::Result;
use cdr_core::models::{AnalysisReport, CallRecord, ContactAnalysis, Statistics, TimeAnalysis};
use cdr_core::time_utils::format_generated_at;
use cdr_data::aggregator::CorpusAggregator;
use cdr_data::reader;
use cdr_report::ReportFormat;

/// One analysis session: the current corpus plus its self-number.
///
/// # Example
/// ```no_run
/// use cdr_runtime::AnalysisSession;
///
/// let mut session = AnalysisSession::new();
/// session.parse_tree("./calls");
/// session.set_self_number("13800138000");
/// println!("{}", session.render_report());
/// ```
#[derive(Debug, Default)]
pub struct AnalysisSession {
    aggregator: CorpusAggregator,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    /// Parse a single export file with the current self-number filter.
    ///
    /// The corpus is left untouched; unreadable files yield no records.
    pub fn parse_one(&self, path: impl AsRef<Path>) -> Vec<CallRecord> {
        reader::parse_file(path.as_ref(), self.aggregator.self_number())
    }

    /// Parse every export under `root` and make the result the new corpus.
    ///
    /// A missing root yields an empty corpus rather than an error.
    pub fn parse_tree(&mut self, root: impl AsRef<Path>) -> &[CallRecord] {
        let root = root.as_ref();
        let records = reader::parse_tree(root, self.aggregator.self_number());
        tracing::info!(
            records = records.len(),
            root = %root.display(),
            "corpus replaced from export tree"
        );
        self.aggregator.replace_all(records);
        self.aggregator.records()
    }

    /// Parse one export file and make the result the new corpus.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> &[CallRecord] {
        let path = path.as_ref();
        let records = self.parse_one(path);
        tracing::info!(
            records = records.len(),
            file = %path.display(),
            "corpus replaced from single export"
        );
        self.aggregator.replace_all(records);
        self.aggregator.records()
    }

    /// Parse a list of export files and directories and make the
    /// concatenated result the new corpus.
    ///
    /// Directories are walked like [`AnalysisSession::parse_tree`]. Paths
    /// that cannot be read are logged and skipped; the others still load.
    pub fn load_files<I, P>(&mut self, paths: I) -> &[CallRecord]
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let records = reader::parse_paths(paths, self.aggregator.self_number());
        tracing::info!(
            records = records.len(),
            "corpus replaced from export list"
        );
        self.aggregator.replace_all(records);
        self.aggregator.records()
    }

    // ── Corpus state ──────────────────────────────────────────────────────

    /// Set the account holder's number and drop matching records.
    pub fn set_self_number(&mut self, number: &str) {
        let before = self.aggregator.len();
        self.aggregator.set_self_number(number);
        tracing::debug!(
            removed = before - self.aggregator.len(),
            "self-number applied"
        );
    }

    pub fn self_number(&self) -> Option<&str> {
        self.aggregator.self_number()
    }

    pub fn records(&self) -> &[CallRecord] {
        self.aggregator.records()
    }

    /// Empty the corpus and forget the self-number.
    pub fn clear(&mut self) {
        self.aggregator.clear();
        tracing::debug!("session cleared");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn statistics(&self) -> Statistics {
        self.aggregator.statistics()
    }

    pub fn contact_analysis(&self) -> ContactAnalysis {
        self.aggregator.contact_analysis()
    }

    pub fn time_analysis(&self) -> TimeAnalysis {
        self.aggregator.time_analysis()
    }

    /// All three analyses, stamped with the current local time.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            generated_at: format_generated_at(chrono::Local::now()),
            statistics: self.statistics(),
            contacts: self.contact_analysis(),
            time: self.time_analysis(),
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// The Markdown report for the current corpus.
    pub fn render_report(&self) -> String {
        cdr_report::markdown::render_markdown(&self.report())
    }

    /// The report for the current corpus in any supported format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        cdr_report::render(&self.report(), format)
    }
}
