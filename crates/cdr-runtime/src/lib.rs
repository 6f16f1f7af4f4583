//! Session layer for the CDR analyzer.
//!
//! Coordinates the data-ingestion and report layers behind one
//! caller-owned [`AnalysisSession`] value.

pub mod session;

pub use cdr_core as core;
pub use cdr_data as data;
pub use cdr_report as report;
pub use session::AnalysisSession;
