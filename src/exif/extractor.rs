//! Decode pipeline: JPEG segment scan, TIFF header, IFD0 tag dispatch.

use crate::exif::apex::{format_aperture, format_shutter_speed};
use crate::exif::jpeg::find_exif_payload;
use crate::exif::reader::{ByteReader, Endian};
use crate::exif::tiff::{
    entry_count, read_ifd_entry, read_srational, read_tiff_header, read_urational, IfdEntry,
    IFD_ENTRY_LEN, TAG_APERTURE, TAG_FOCAL_LENGTH, TAG_ISO, TAG_MODEL, TAG_SHUTTER_SPEED,
};
use crate::result::ExifData;

/// Inline value slot width; the Model tag reads at most this many bytes and
/// does not follow external string offsets.
const INLINE_VALUE_LEN: usize = 4;

/// Decode camera metadata from a JPEG byte buffer.
///
/// Pure function of the input bytes: no I/O, no shared state, identical
/// input always yields an identical record. Any structural problem (missing
/// SOI, missing APP1/EXIF, garbled byte order, out-of-range entry, zero
/// denominator) degrades to absent fields instead of an error.
pub fn parse_exif(data: &[u8]) -> ExifData {
    let reader = ByteReader::new(data);
    let mut exif = ExifData::default();

    let Some(payload) = find_exif_payload(&reader) else {
        return exif;
    };
    let Some((bo, ifd_offset)) = read_tiff_header(&reader, payload) else {
        return exif;
    };
    let Some(count) = entry_count(&reader, bo, ifd_offset) else {
        return exif;
    };

    for i in 0..count {
        let Some(entry) = read_ifd_entry(&reader, bo, ifd_offset + 2 + i * IFD_ENTRY_LEN) else {
            continue;
        };
        decode_entry(&reader, bo, entry, &mut exif);
    }
    exif
}

/// Decode one directory entry into the record. A read failure inside one
/// entry leaves its field absent; the caller moves on to the next entry.
fn decode_entry(reader: &ByteReader, bo: Endian, entry: IfdEntry, exif: &mut ExifData) {
    match entry.tag {
        TAG_MODEL => {
            if let Some(model) = reader.ascii_run(entry.value_at, INLINE_VALUE_LEN) {
                exif.model = Some(model);
            }
        }
        TAG_ISO => {
            if let Some(iso) = reader.u16(entry.value_at, bo) {
                exif.iso = Some(iso);
            }
        }
        TAG_FOCAL_LENGTH => {
            if let Some(mm) = read_urational(reader, bo, entry.value_at) {
                exif.focal_length = Some((mm * 10.0).round() / 10.0);
            }
        }
        TAG_SHUTTER_SPEED => {
            if let Some(apex) = read_srational(reader, bo, entry.value_at) {
                exif.shutter_speed = Some(format_shutter_speed(apex));
            }
        }
        TAG_APERTURE => {
            if let Some(apex) = read_srational(reader, bo, entry.value_at) {
                exif.aperture = Some(format_aperture(apex));
            }
        }
        _ => {}
    }
}
