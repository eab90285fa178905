use super::{StringEncoding, StringLocation, StringTable};
use crate::{StringTableError, Value};

/// Decodes every string from its bytes. No caching; location and related
/// key are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectStringTable;

impl DirectStringTable {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(bytes: &[u8], encoding: StringEncoding) -> Result<String, StringTableError> {
        match encoding {
            StringEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            StringEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(StringTableError::OddUtf16Length(bytes.len()));
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| StringTableError::InvalidUtf16)
            }
            StringEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| StringTableError::InvalidUtf8),
        }
    }
}

impl StringTable for DirectStringTable {
    fn lookup(
        &mut self,
        bytes: &[u8],
        encoding: StringEncoding,
        _location: StringLocation,
        _related_key: Option<&Value>,
    ) -> Result<String, StringTableError> {
        Self::decode(bytes, encoding)
    }
}
