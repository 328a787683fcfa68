//! Bounds-checked reads over a fixed byte buffer.
//!
//! The decoder processes untrusted, possibly truncated bytes. Every accessor
//! checks the requested range against the buffer length and returns `None`
//! past the end; callers treat that as "value absent".

/// Byte order for multi-byte reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Random access over an immutable byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn u8(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    #[inline]
    pub fn u16(&self, offset: usize, bo: Endian) -> Option<u16> {
        let end = offset.checked_add(2)?;
        let bytes = self.data.get(offset..end)?;
        Some(match bo {
            Endian::Little => u16::from_le_bytes([bytes[0], bytes[1]]),
            Endian::Big => u16::from_be_bytes([bytes[0], bytes[1]]),
        })
    }

    #[inline]
    pub fn u32(&self, offset: usize, bo: Endian) -> Option<u32> {
        let end = offset.checked_add(4)?;
        let bytes = self.data.get(offset..end)?;
        Some(match bo {
            Endian::Little => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            Endian::Big => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }

    #[inline]
    pub fn i32(&self, offset: usize, bo: Endian) -> Option<i32> {
        self.u32(offset, bo).map(|v| v as i32)
    }

    /// ASCII run of at most `max_len` bytes starting at `offset`, stopped at
    /// the first zero byte. `None` only when a byte that would still be part
    /// of the run lies past the buffer end.
    pub fn ascii_run(&self, offset: usize, max_len: usize) -> Option<String> {
        let mut s = String::new();
        for i in 0..max_len {
            let byte = self.u8(offset.checked_add(i)?)?;
            if byte == 0 {
                break;
            }
            s.push(byte as char);
        }
        Some(s)
    }
}
