//! Report rendering for the CDR analyzer.
//!
//! Turns an [`AnalysisReport`] into a Markdown document, an aligned
//! plain-text document for terminals, or pretty-printed JSON for callers
//! that render the data themselves.

pub mod markdown;
pub mod sections;
pub mod text;

use std::fmt;
use std::str::FromStr;

use cdr_core::error::{AnalyzerError, Result};
use cdr_core::models::AnalysisReport;

pub use cdr_core as core;

/// Placeholder rendered in place of an empty table or list.
pub const NO_DATA: &str = "暂无数据";

/// Output document flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(AnalyzerError::Config(format!(
                "unknown report format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render `report` in the requested format.
pub fn render(report: &AnalysisReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(markdown::render_markdown(report)),
        ReportFormat::Text => Ok(text::render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

/// Pretty-printed JSON of the whole report.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
