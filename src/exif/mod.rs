//! EXIF decoding for JPEG buffers.
//!
//! Pipeline: the segment scanner locates the APP1/EXIF payload, the TIFF
//! reader establishes byte order and walks IFD0, and the APEX formatter turns
//! shutter and aperture values into display strings. Everything runs over a
//! [`ByteReader`]; no accessor reads past the buffer.

mod apex;
mod extractor;
mod jpeg;
mod reader;
mod tiff;

pub use apex::{format_aperture, format_shutter_speed};
pub use extractor::parse_exif;
pub use jpeg::{find_exif_payload, is_jpeg, MARKER_APP1, SOI_MARKER};
pub use reader::{ByteReader, Endian};
pub use tiff::{
    entry_count, read_ifd_entry, read_srational, read_tiff_header, read_urational, IfdEntry,
    IFD_ENTRY_LEN, TAG_APERTURE, TAG_FOCAL_LENGTH, TAG_ISO, TAG_MODEL, TAG_SHUTTER_SPEED,
};
