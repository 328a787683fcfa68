//! # focalmeta
//!
//! Extract camera capture metadata (focal length, ISO, aperture, shutter
//! speed, model) from the EXIF/TIFF structure embedded in a JPEG file, to
//! drive focal-length-based cropping in a host application.
//!
//! Decoding is slice-based and bounds-checked throughout: the input is
//! untrusted and possibly truncated, so every read is validated against the
//! buffer length and any structural problem degrades to an absent field
//! rather than an error. Only the file-read boundary can fail.
//!
//! ## Example
//!
//! ```no_run
//! # async fn run() -> Result<(), focalmeta::ExtractError> {
//! let exif = focalmeta::parse_exif_file("photo.jpg").await?;
//! if let Some(mm) = exif.focal_length {
//!     println!("shot at {} mm", mm);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! For buffers already in memory, use [`parse_exif`] directly; it never
//! errors and always returns a well-formed (possibly empty) record.

mod error;
pub mod exif;
mod result;

pub use error::ExtractError;
pub use exif::{is_jpeg, parse_exif};
pub use result::ExifData;

use std::path::Path;
use tokio::io::AsyncReadExt;

/// Decode window: at most the first 100 KiB of a file are read and decoded.
/// EXIF payloads beyond this window are never seen; this is an accepted
/// limitation, not an error.
pub const SCAN_WINDOW: usize = 100 * 1024;

/// Read at most [`SCAN_WINDOW`] bytes of `path` and decode camera metadata.
///
/// The read is the only fallible step: an unreadable file is an
/// [`ExtractError::Io`], while unparseable content yields an empty record.
pub async fn parse_exif_file(path: impl AsRef<Path>) -> Result<ExifData, ExtractError> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let mut buf = Vec::with_capacity(SCAN_WINDOW);
    file.take(SCAN_WINDOW as u64)
        .read_to_end(&mut buf)
        .await
        .map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_exif(&buf))
}
