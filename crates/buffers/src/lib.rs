//! Byte cursor and writer for the structured-clone value stream.
//!
//! The [`Reader`] is what the deserializer consumes; the [`Writer`] emits the
//! same primitives and is mostly used to assemble streams in tests.

mod reader;
mod writer;

use thiserror::Error;

pub use reader::Reader;
pub use writer::Writer;

/// Errors raised by bounds-checked [`Reader`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("position {position} is past the end of a {len}-byte buffer")]
    OutOfBounds { position: usize, len: usize },
    #[error("varint is longer than 10 bytes")]
    VarintTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_output_reads_back() {
        let mut writer = Writer::new();
        writer.u8(b'N');
        writer.f64_le(-2.25);
        writer.varint(1 << 40);
        writer.buf(b"abc");
        let data = writer.flush();

        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u8(), Ok(b'N'));
        assert_eq!(reader.try_f64_le(), Ok(-2.25));
        assert_eq!(reader.try_varint(), Ok(1 << 40));
        assert_eq!(reader.try_buf(3), Ok(b"abc".as_ref()));
        assert_eq!(reader.size(), 0);
    }
}
