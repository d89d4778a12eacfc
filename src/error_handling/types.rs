//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::dns::RecordKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A DNS query failure that is not one of the tolerated "no data" conditions.
///
/// Any of these aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The nameserver did not answer within the configured timeout.
    #[error("query timed out")]
    Timeout,

    /// Socket level failure talking to the nameserver.
    #[error("network error: {0}")]
    Network(String),

    /// The response could not be parsed, or the query name was invalid.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Any other resolver failure.
    #[error("resolver error: {0}")]
    Other(String),
}

/// Errors that abort a batch run before any output is written.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input file does not exist.
    #[error("The input file {} does not exist", .0.display())]
    InputMissing(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A query failed with a non-tolerated error.
    #[error("{kind} query for {domain} failed: {source}")]
    Query {
        /// Domain being resolved
        domain: String,
        /// Record type being queried
        kind: RecordKind,
        /// The failure
        source: QueryError,
    },
}

/// Errors writing the output workbook.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The spreadsheet library rejected the data or failed to serialize it.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Writing the temporary workbook file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Moving the finished workbook onto the output path failed.
    #[error("Failed to save {}: {source}", path.display())]
    Persist {
        /// Output path
        path: PathBuf,
        /// Underlying persist error
        source: tempfile::PersistError,
    },
}
