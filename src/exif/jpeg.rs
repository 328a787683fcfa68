//! JPEG marker segment scanning: locate the APP1/EXIF payload.
//! Walks 0xFF-prefixed marker segments without decoding image data.

use crate::exif::reader::{ByteReader, Endian};

/// JPEG Start-Of-Image marker.
pub const SOI_MARKER: [u8; 2] = [0xFF, 0xD8];
/// APP1 marker type byte (EXIF and XMP both live in APP1).
pub const MARKER_APP1: u8 = 0xE1;
/// Full 6-byte EXIF identifier at the start of an APP1 segment body.
const EXIF_IDENTIFIER: [u8; 6] = *b"Exif\0\0";

/// Detect JPEG content from the SOI magic.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == SOI_MARKER[0] && data[1] == SOI_MARKER[1]
}

/// Scan marker segments for APP1/EXIF. Returns the offset of the TIFF header
/// (first byte after the `Exif\0\0` identifier), or `None` when the buffer is
/// not a JPEG, has no EXIF segment, or a segment length is malformed.
pub fn find_exif_payload(reader: &ByteReader) -> Option<usize> {
    if reader.u8(0)? != SOI_MARKER[0] || reader.u8(1)? != SOI_MARKER[1] {
        return None;
    }

    let mut offset = 2;
    while offset < reader.len() {
        if reader.u8(offset)? != 0xFF {
            offset += 1;
            continue;
        }
        let marker = reader.u8(offset + 1)?;

        // Segment body starts after marker (2) + length (2).
        if marker == MARKER_APP1 && matches_exif_identifier(reader, offset + 4) {
            return Some(offset + 4 + EXIF_IDENTIFIER.len());
        }

        // Length is big-endian and includes its own two bytes; anything
        // smaller cannot advance the scan and means a corrupt stream.
        let length = reader.u16(offset + 2, Endian::Big)? as usize;
        if length < 2 {
            return None;
        }
        offset += 2 + length;
    }
    None
}

/// Full 6-byte comparison. A 5-byte `Exif\0` prefix check would also accept
/// segments whose sixth identifier byte is nonzero; those are not EXIF.
fn matches_exif_identifier(reader: &ByteReader, start: usize) -> bool {
    EXIF_IDENTIFIER
        .iter()
        .enumerate()
        .all(|(i, &b)| reader.u8(start + i) == Some(b))
}
