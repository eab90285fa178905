//! Deserializer error types.

use hippy_buffers::BufferError;
use thiserror::Error;

/// Failure to turn raw string bytes into a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StringTableError {
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid UTF-16")]
    InvalidUtf16,
    #[error("two-byte string has odd byte length {0}")]
    OddUtf16Length(usize),
}

/// Error type for value deserialization.
///
/// Every variant aborts the whole decode pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeserializeError {
    #[error("unsupported wire format version {version} (supported up to {supported})")]
    UnsupportedVersion { version: u64, supported: u32 },
    #[error("malformed length or id: {0}")]
    MalformedLength(u64),
    #[error("unexpected tag 0x{0:02x}")]
    UnexpectedTag(u8),
    #[error("object reference to unassigned id {0}")]
    DanglingReference(u64),
    #[error("string table lookup failed: {0}")]
    StringTable(#[from] StringTableError),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
