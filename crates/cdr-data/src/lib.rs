//! Data ingestion layer for the CDR analyzer.
//!
//! Responsible for discovering export files, tokenizing their rows, parsing
//! durations, normalising rows into [`CallRecord`]s and aggregating the
//! resulting corpus into statistics, contact profiles and time patterns.
//!
//! [`CallRecord`]: cdr_core::models::CallRecord

pub mod aggregator;
pub mod duration;
pub mod reader;
pub mod tokenizer;

pub use cdr_core as core;
