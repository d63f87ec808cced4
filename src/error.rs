use std::path::PathBuf;
use thiserror::Error;

// Core aggregation is total over well-formed tables: schema gaps and
// malformed values coerce to fallbacks instead of failing. The only hard
// failures belong to the I/O boundary.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input unavailable: {}", .0.display())]
    InputUnavailable(PathBuf),
    #[error("output unavailable")]
    OutputUnavailable,
}
