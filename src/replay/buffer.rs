use byteorder::{ByteOrder, LittleEndian};

use super::types::{Quaternion, Vector3};
use super::{Section, TextDecoding};
use crate::error::{Error, Result};

/// Forward-only little-endian reader over a replay buffer.
///
/// Every `read_*` consumes exactly the width of the value it returns. The
/// `read_*_at` variants read at an explicit offset and leave the cursor
/// where it is. Bounds are checked before the cursor moves, so a failed
/// read never advances it.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
    text: TextDecoding,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_text_decoding(data, TextDecoding::default())
    }

    pub fn with_text_decoding(data: &'a [u8], text: TextDecoding) -> Self {
        ByteCursor {
            data,
            offset: 0,
            text,
        }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let available = self.data.len().saturating_sub(offset);
        if len > available {
            return Err(Error::Truncated {
                offset,
                needed: len,
                available,
            });
        }
        Ok(&self.data[offset..offset + len])
    }

    pub fn read_u8_at(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes_at(offset, 1)?[0])
    }

    pub fn read_i32_at(&self, offset: usize) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.bytes_at(offset, 4)?))
    }

    pub fn read_f32_at(&self, offset: usize) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.bytes_at(offset, 4)?))
    }

    pub fn read_i64_at(&self, offset: usize) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.bytes_at(offset, 8)?))
    }

    /// Any non-zero byte is `true`.
    pub fn read_bool_at(&self, offset: usize) -> Result<bool> {
        Ok(self.read_u8_at(offset)? != 0)
    }

    pub fn read_vector3_at(&self, offset: usize) -> Result<Vector3> {
        let bytes = self.bytes_at(offset, 12)?;
        Ok(Vector3 {
            x: LittleEndian::read_f32(&bytes[0..4]),
            y: LittleEndian::read_f32(&bytes[4..8]),
            z: LittleEndian::read_f32(&bytes[8..12]),
        })
    }

    pub fn read_quaternion_at(&self, offset: usize) -> Result<Quaternion> {
        let bytes = self.bytes_at(offset, 16)?;
        Ok(Quaternion {
            x: LittleEndian::read_f32(&bytes[0..4]),
            y: LittleEndian::read_f32(&bytes[4..8]),
            z: LittleEndian::read_f32(&bytes[8..12]),
            w: LittleEndian::read_f32(&bytes[12..16]),
        })
    }

    /// Reads an i32 length prefix followed by that many bytes of text.
    /// Returns the text and the total width consumed, prefix included.
    fn string_at(&self, offset: usize) -> Result<(String, usize)> {
        let length = self.read_i32_at(offset)?;
        if length < 0 {
            return Err(Error::NegativeLength { offset, length });
        }
        let start = offset + 4;
        let bytes = self.bytes_at(start, length as usize)?;
        let text = match self.text {
            TextDecoding::Lossy => String::from_utf8_lossy(bytes).into_owned(),
            TextDecoding::Strict => std::str::from_utf8(bytes)
                .map_err(|source| Error::TextDecode {
                    offset: start,
                    source,
                })?
                .to_owned(),
        };
        Ok((text, 4 + bytes.len()))
    }

    pub fn read_string_at(&self, offset: usize) -> Result<String> {
        self.string_at(offset).map(|(text, _)| text)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.read_u8_at(self.offset)?;
        self.offset += 1;
        Ok(value)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let value = self.read_i32_at(self.offset)?;
        self.offset += 4;
        Ok(value)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let value = self.read_f32_at(self.offset)?;
        self.offset += 4;
        Ok(value)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let value = self.read_i64_at(self.offset)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        let value = self.read_bool_at(self.offset)?;
        self.offset += 1;
        Ok(value)
    }

    pub fn read_vector3(&mut self) -> Result<Vector3> {
        let value = self.read_vector3_at(self.offset)?;
        self.offset += 12;
        Ok(value)
    }

    pub fn read_quaternion(&mut self) -> Result<Quaternion> {
        let value = self.read_quaternion_at(self.offset)?;
        self.offset += 16;
        Ok(value)
    }

    pub fn read_string(&mut self) -> Result<String> {
        let (text, width) = self.string_at(self.offset)?;
        self.offset += width;
        Ok(text)
    }

    /// Consumes the marker byte that opens `section`.
    pub fn expect_section(&mut self, section: Section) -> Result<()> {
        let offset = self.offset;
        let found = self.read_u8_at(offset)?;
        let expected = section as u8;
        if found != expected {
            return Err(Error::UnexpectedSection {
                offset,
                expected,
                found,
            });
        }
        self.offset += 1;
        Ok(())
    }

    /// Reads a section's element count. Negative counts are rejected.
    pub fn read_count(&mut self) -> Result<u32> {
        let offset = self.offset;
        let length = self.read_i32_at(offset)?;
        if length < 0 {
            return Err(Error::NegativeLength { offset, length });
        }
        self.offset += 4;
        Ok(length as u32)
    }
}
