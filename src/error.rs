//! Fatal pipeline errors.
//!
//! Anything here aborts the run before a report is printed. Per-record
//! problems are `Diagnostic`s instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A reference or inventory file could not be read
    #[error("failed to read {}: {source}", path.display())]
    FatalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A reference dataset is missing columns or has an unusable row
    #[error("malformed {dataset} data: {reason}")]
    MalformedReferenceData { dataset: &'static str, reason: String },
}

impl PipelineError {
    pub(crate) fn malformed(dataset: &'static str, reason: impl Into<String>) -> Self {
        PipelineError::MalformedReferenceData { dataset, reason: reason.into() }
    }
}
