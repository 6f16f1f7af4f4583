//! Core types for the call-detail-record analyzer.
//!
//! Holds the normalised record model, the structured analysis outputs,
//! the shared error type, display formatting helpers, timestamp helpers
//! and the command-line settings of the analyzer binary.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
