//! String tables: pluggable strategies that resolve raw string bytes.
//!
//! The deserializer always knows *where* a string sits in the value graph
//! ([`StringLocation`]) and which key it belongs to, and hands both to the
//! table so that a table can cache or intern per location.

mod direct;
mod internalized;

pub use direct::DirectStringTable;
pub use internalized::InternalizedStringTable;

use crate::{StringTableError, Value};

/// Byte encoding of a string payload, selected by its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    /// `ONE_BYTE_STRING`: one byte per code point, U+0000..=U+00FF.
    Latin1,
    /// `TWO_BYTE_STRING`: UTF-16 code units, little-endian.
    Utf16Le,
    /// `UTF8_STRING`.
    Utf8,
}

/// Where a string occurs in the decoded value graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringLocation {
    TopLevel,
    ObjectKey,
    ObjectValue,
    DenseArrayKey,
    DenseArrayItem,
    SparseArrayKey,
    SparseArrayItem,
    MapKey,
    MapValue,
    SetItem,
    ErrorMessage,
    ErrorStack,
    Regexp,
    Void,
}

/// Resolves raw string bytes into a string.
///
/// Implementations are used by one deserializer at a time. A table shared
/// between threads must synchronize its own state.
pub trait StringTable {
    fn lookup(
        &mut self,
        bytes: &[u8],
        encoding: StringEncoding,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, StringTableError>;

    /// Marks the end of use. Called when the owning deserializer is dropped,
    /// including after a failed decode.
    fn release(&mut self) {}
}

impl<T: StringTable + ?Sized> StringTable for &mut T {
    fn lookup(
        &mut self,
        bytes: &[u8],
        encoding: StringEncoding,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, StringTableError> {
        (**self).lookup(bytes, encoding, location, related_key)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

impl<T: StringTable + ?Sized> StringTable for Box<T> {
    fn lookup(
        &mut self,
        bytes: &[u8],
        encoding: StringEncoding,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, StringTableError> {
        (**self).lookup(bytes, encoding, location, related_key)
    }

    fn release(&mut self) {
        (**self).release()
    }
}
