//! Bounds-checked byte cursor over a serialized value stream.

use crate::BufferError;

/// Maximum number of 7-bit groups in a 64-bit varint.
const MAX_VARINT_GROUPS: usize = 10;

/// A binary reader over a borrowed byte slice.
///
/// Every read is bounds-checked: reading past the end returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use hippy_buffers::Reader;
///
/// let data = [0x54, 0xac, 0x02];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x54));
/// assert_eq!(reader.try_varint(), Ok(300));
/// assert_eq!(reader.size(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Points the reader at a new byte slice and rewinds the cursor.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.uint8 = uint8;
        self.x = 0;
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len().saturating_sub(self.x)
    }

    /// Absolute cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Moves the cursor to an absolute position.
    ///
    /// `pos == len()` is allowed and leaves the reader exhausted.
    pub fn set_position(&mut self, pos: usize) -> Result<(), BufferError> {
        if pos > self.uint8.len() {
            return Err(BufferError::OutOfBounds {
                position: pos,
                len: self.uint8.len(),
            });
        }
        self.x = pos;
        Ok(())
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        match self.x.checked_add(n) {
            Some(end) if end <= self.uint8.len() => Ok(()),
            _ => Err(BufferError::EndOfBuffer),
        }
    }

    /// Peeks at the current byte without advancing.
    pub fn try_peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.uint8[self.x])
    }

    /// Reads one byte.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a base-128 unsigned varint: 7 payload bits per byte, low group
    /// first, high bit set on every byte but the last.
    ///
    /// On failure the cursor is restored to where the varint started.
    pub fn try_varint(&mut self) -> Result<u64, BufferError> {
        let start = self.x;
        let mut result: u64 = 0;
        let mut shift = 0u32;
        for _ in 0..MAX_VARINT_GROUPS {
            let b = match self.try_u8() {
                Ok(b) => b,
                Err(err) => {
                    self.x = start;
                    return Err(err);
                }
            };
            result |= ((b & 0x7f) as u64).wrapping_shl(shift);
            if b & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
        }
        self.x = start;
        Err(BufferError::VarintTooLong)
    }

    /// Reads an IEEE-754 double stored little-endian.
    #[inline]
    pub fn try_f64_le(&mut self) -> Result<f64, BufferError> {
        self.check(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.uint8[self.x..self.x + 8]);
        self.x += 8;
        Ok(f64::from_le_bytes(bytes))
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        Ok(bin)
    }
}
