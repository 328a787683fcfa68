//! TIFF header and IFD entry reading inside the EXIF payload.

use crate::exif::reader::{ByteReader, Endian};

/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_LEN: usize = 12;

/// Camera model (ASCII).
pub const TAG_MODEL: u16 = 0x0110;
/// ISO speed rating (SHORT).
pub const TAG_ISO: u16 = 0x8827;
/// Shutter speed, APEX-encoded (SRATIONAL).
pub const TAG_SHUTTER_SPEED: u16 = 0x9201;
/// Aperture, APEX-encoded (SRATIONAL).
pub const TAG_APERTURE: u16 = 0x9202;
/// Focal length in millimeters (RATIONAL).
pub const TAG_FOCAL_LENGTH: u16 = 0x920A;

/// Read the TIFF header at `payload`: byte-order marker (`II` or `MM`),
/// then the 4-byte offset of IFD0 relative to the header start. Returns the
/// byte order and the absolute IFD0 offset; `None` on a garbled marker.
pub fn read_tiff_header(reader: &ByteReader, payload: usize) -> Option<(Endian, usize)> {
    let bo = match (reader.u8(payload)?, reader.u8(payload + 1)?) {
        (0x49, 0x49) => Endian::Little,
        (0x4D, 0x4D) => Endian::Big,
        _ => return None,
    };
    let relative = reader.u32(payload + 4, bo)? as usize;
    Some((bo, payload.checked_add(relative)?))
}

/// One 12-byte directory entry. The field type and count are read for
/// completeness; the five tags of interest decode from fixed shapes at the
/// value slot.
#[derive(Debug, Clone, Copy)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    /// Absolute offset of the 4-byte inline value slot (entry start + 8).
    pub value_at: usize,
}

/// Number of entries in the IFD at `ifd_offset`. Entries follow at
/// `ifd_offset + 2`, 12 bytes each.
#[inline]
pub fn entry_count(reader: &ByteReader, bo: Endian, ifd_offset: usize) -> Option<usize> {
    reader.u16(ifd_offset, bo).map(usize::from)
}

/// Read the entry at `offset`; `None` when its fixed fields lie past the
/// buffer end.
pub fn read_ifd_entry(reader: &ByteReader, bo: Endian, offset: usize) -> Option<IfdEntry> {
    Some(IfdEntry {
        tag: reader.u16(offset, bo)?,
        field_type: reader.u16(offset + 2, bo)?,
        count: reader.u32(offset + 4, bo)?,
        value_at: offset + 8,
    })
}

/// Unsigned rational (4-byte numerator, 4-byte denominator) at `offset`.
/// `None` when out of range or the denominator is zero.
pub fn read_urational(reader: &ByteReader, bo: Endian, offset: usize) -> Option<f64> {
    let num = reader.u32(offset, bo)?;
    let den = reader.u32(offset + 4, bo)?;
    if den == 0 {
        return None;
    }
    Some(num as f64 / den as f64)
}

/// Signed rational at `offset`. APEX shutter values go negative for
/// exposures longer than one second, so the sign matters.
pub fn read_srational(reader: &ByteReader, bo: Endian, offset: usize) -> Option<f64> {
    let num = reader.i32(offset, bo)?;
    let den = reader.i32(offset + 4, bo)?;
    if den == 0 {
        return None;
    }
    Some(num as f64 / den as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_little() {
        let data = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        let r = ByteReader::new(&data);
        let (bo, ifd0) = read_tiff_header(&r, 0).unwrap();
        assert_eq!(bo, Endian::Little);
        assert_eq!(ifd0, 8);
    }

    #[test]
    fn header_big() {
        let data = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        let r = ByteReader::new(&data);
        let (bo, ifd0) = read_tiff_header(&r, 0).unwrap();
        assert_eq!(bo, Endian::Big);
        assert_eq!(ifd0, 8);
    }

    #[test]
    fn header_garbled_byte_order() {
        let data = [0x41, 0x42, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        let r = ByteReader::new(&data);
        assert!(read_tiff_header(&r, 0).is_none());
    }

    #[test]
    fn header_offset_is_relative_to_payload() {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
        let r = ByteReader::new(&data);
        let (_, ifd0) = read_tiff_header(&r, 4).unwrap();
        assert_eq!(ifd0, 12);
    }

    #[test]
    fn urational_zero_denominator() {
        let mut data = 500u32.to_le_bytes().to_vec();
        data.extend_from_slice(&0u32.to_le_bytes());
        let r = ByteReader::new(&data);
        assert_eq!(read_urational(&r, Endian::Little, 0), None);
    }

    #[test]
    fn srational_negative_numerator() {
        let mut data = (-3i32).to_le_bytes().to_vec();
        data.extend_from_slice(&1i32.to_le_bytes());
        let r = ByteReader::new(&data);
        assert_eq!(read_srational(&r, Endian::Little, 0), Some(-3.0));
    }

    #[test]
    fn entry_past_end_is_none() {
        let data = [0x0A, 0x92, 0x05, 0x00];
        let r = ByteReader::new(&data);
        assert!(read_ifd_entry(&r, Endian::Little, 0).is_none());
    }
}
