//! Low-level byte reading over an in-memory file buffer.
//!
//! Every read is bounds-checked up front: a read that cannot be satisfied in
//! full fails with [`NavGridError::TruncatedInput`] and never yields a default
//! value.

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::mem::decode_latin1;
use log::trace;

use super::types::error::{DecodeStep, NavGridError, Result};
use super::types::models::Vec3;

/// A read position over an owned, immutable byte buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    data: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Total buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current absolute offset.
    pub fn tell(&self) -> u64 {
        self.pos as u64
    }

    /// Moves the cursor to an absolute offset. Seeking to the very end is
    /// allowed; seeking past it is not.
    pub fn seek_absolute(&mut self, offset: u64) -> Result<()> {
        match usize::try_from(offset) {
            Ok(pos) if pos <= self.data.len() => {
                self.pos = pos;
                Ok(())
            }
            _ => Err(NavGridError::SeekOutOfBounds {
                offset,
                len: self.data.len(),
            }),
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8]> {
        let available = self.remaining();
        if n > available {
            return Err(NavGridError::TruncatedInput {
                step: DecodeStep::Raw,
                offset: self.tell(),
                needed: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    /// Consumes `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_bytes(2)?))
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    /// Reads a 32-bit integer and interprets any non-zero value as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u32_le()? != 0)
    }

    /// Three consecutive floats. Not atomic: on truncation the cursor stays
    /// after the components that were read.
    pub fn read_vec3f(&mut self) -> Result<Vec3> {
        let x = self.read_f32_le()?;
        let y = self.read_f32_le()?;
        let z = self.read_f32_le()?;
        Ok(Vec3::new(x, y, z))
    }

    /// One byte as a Latin-1 character.
    pub fn read_char(&mut self) -> Result<char> {
        Ok(char::from(self.read_u8()?))
    }

    /// Reads a NUL-terminated Latin-1 string of at most `max_len` bytes
    /// (terminator excluded) and advances past the terminator.
    ///
    /// # Errors
    /// - [`NavGridError::TruncatedInput`] if the buffer ends first.
    /// - [`NavGridError::MalformedStructure`] if no terminator is found
    ///   within `max_len` bytes.
    pub fn read_cstring(&mut self, max_len: usize) -> Result<String> {
        let start = self.tell();
        let window = &self.data[self.pos..];
        let limit = window.len().min(max_len.saturating_add(1));
        let Some(len) = window[..limit].iter().position(|&b| b == 0) else {
            if window.len() <= max_len {
                return Err(NavGridError::TruncatedInput {
                    step: DecodeStep::Raw,
                    offset: start,
                    needed: window.len() + 1,
                    available: window.len(),
                });
            }
            return Err(NavGridError::MalformedStructure {
                step: DecodeStep::Raw,
                reason: format!("string at offset {} exceeds {} bytes without a terminator", start, max_len),
            });
        };
        let bytes = self.read_bytes(len + 1)?;
        let text = decode_latin1(&bytes[..len]).into_owned();
        trace!("Read string of {} bytes at offset {}", len, start);
        Ok(text)
    }

    /// Fails fast with `MalformedStructure` if `count` records of
    /// `record_size` bytes cannot fit in the remaining buffer.
    pub(crate) fn ensure_records(&self, step: DecodeStep, count: u64, record_size: u64) -> Result<()> {
        let needed = count.checked_mul(record_size).ok_or_else(|| NavGridError::MalformedStructure {
            step,
            reason: format!("{} records of {} bytes overflow the addressable size", count, record_size),
        })?;
        let available = self.remaining() as u64;
        if needed > available {
            return Err(NavGridError::MalformedStructure {
                step,
                reason: format!(
                    "{} records of {} bytes need {} bytes at offset {}, but only {} remain",
                    count, record_size, needed, self.tell(), available
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_primitives() {
        let mut data = vec![0x07, 0x34, 0x12, 0xFE, 0xFF, 0x78, 0x56, 0x34, 0x12];
        data.extend_from_slice(&1.5f32.to_le_bytes());
        let mut cursor = ByteCursor::new(data);

        assert_eq!(cursor.read_u8().unwrap(), 0x07);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.read_i16_le().unwrap(), -2);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_f32_le().unwrap(), 1.5);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reads_latin1_chars() {
        let mut cursor = ByteCursor::new(b"A\xe9".to_vec());
        assert_eq!(cursor.read_char().unwrap(), 'A');
        assert_eq!(cursor.read_char().unwrap(), '\u{e9}');
        assert!(matches!(
            cursor.read_char(),
            Err(NavGridError::TruncatedInput { offset: 2, needed: 1, available: 0, .. })
        ));
    }

    #[test]
    fn short_read_fails_without_advancing() {
        let mut cursor = ByteCursor::new(vec![0x01, 0x02, 0x03]);
        cursor.read_u8().unwrap();

        match cursor.read_u32_le() {
            Err(NavGridError::TruncatedInput { offset, needed, available, .. }) => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected TruncatedInput, got {:?}", other),
        }
        assert_eq!(cursor.tell(), 1);
    }

    #[test]
    fn every_primitive_fails_on_empty_buffer() {
        let mut cursor = ByteCursor::new(Vec::new());
        assert!(matches!(cursor.read_u8(), Err(NavGridError::TruncatedInput { .. })));
        assert!(matches!(cursor.read_i16_le(), Err(NavGridError::TruncatedInput { .. })));
        assert!(matches!(cursor.read_u32_le(), Err(NavGridError::TruncatedInput { .. })));
        assert!(matches!(cursor.read_f32_le(), Err(NavGridError::TruncatedInput { .. })));
        assert!(matches!(cursor.read_vec3f(), Err(NavGridError::TruncatedInput { .. })));
    }

    #[test]
    fn vec3_truncation_leaves_cursor_at_failure_point() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.0f32.to_le_bytes());
        data.extend_from_slice(&2.0f32.to_le_bytes());
        data.extend_from_slice(&[0x00, 0x00]);
        let mut cursor = ByteCursor::new(data);

        let err = cursor.read_vec3f().unwrap_err();
        assert!(matches!(err, NavGridError::TruncatedInput { offset: 8, .. }));
        assert_eq!(cursor.tell(), 8);
    }

    #[test]
    fn seek_is_bounded_by_buffer_length() {
        let mut cursor = ByteCursor::new(vec![0xAA, 0xBB]);
        cursor.seek_absolute(1).unwrap();
        assert_eq!(cursor.read_u8().unwrap(), 0xBB);
        cursor.seek_absolute(2).unwrap();
        assert_eq!(cursor.remaining(), 0);
        assert!(matches!(
            cursor.seek_absolute(3),
            Err(NavGridError::SeekOutOfBounds { offset: 3, len: 2 })
        ));
        cursor.reset();
        assert_eq!(cursor.tell(), 0);
    }

    #[test]
    fn reads_bounded_cstrings() {
        let mut cursor = ByteCursor::new(b"srx\0caf\xe9\0".to_vec());
        assert_eq!(cursor.read_cstring(16).unwrap(), "srx");
        assert_eq!(cursor.read_cstring(4).unwrap(), "caf\u{e9}");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn cstring_without_terminator_is_rejected() {
        let mut cursor = ByteCursor::new(b"abcdef".to_vec());
        assert!(matches!(cursor.read_cstring(3), Err(NavGridError::MalformedStructure { .. })));
        assert!(matches!(cursor.read_cstring(32), Err(NavGridError::TruncatedInput { .. })));
        assert_eq!(cursor.tell(), 0);
    }

    #[test]
    fn record_budget_is_checked_before_reading() {
        let cursor = ByteCursor::new(vec![0; 10]);
        assert!(cursor.ensure_records(DecodeStep::CellRecords, 2, 5).is_ok());
        assert!(matches!(
            cursor.ensure_records(DecodeStep::CellRecords, 3, 5),
            Err(NavGridError::MalformedStructure { step: DecodeStep::CellRecords, .. })
        ));
        assert!(cursor.ensure_records(DecodeStep::CellRecords, u64::MAX, 48).is_err());
    }
}
