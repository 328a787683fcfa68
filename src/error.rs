//! Error type for the file-read boundary.
//!
//! Only I/O can fail: malformed EXIF bytes degrade to absent fields in
//! [`ExifData`](crate::ExifData) and never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the bytes to decode.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
