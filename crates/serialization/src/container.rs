//! Extension seam for composite containers.

use crate::{DeserializeError, PrimitiveValueDeserializer, StringLocation, StringTable, Value};

/// Decodes tags the primitive deserializer does not recognize.
///
/// The deserializer hands over the tag byte it has already consumed, and
/// itself, so the implementation can keep reading from the same stream.
/// Child values should be read with
/// [`read_value_with`](PrimitiveValueDeserializer::read_value_with), passing
/// `self`, so nested containers reach this decoder too.
///
/// Returning `Ok(None)` declines the tag; the caller then sees
/// [`Sentinel::Nothing`](crate::Sentinel::Nothing).
pub trait ContainerDecoder<'a, T: StringTable> {
    fn read_container(
        &mut self,
        tag: u8,
        location: StringLocation,
        related_key: Option<&Value>,
        de: &mut PrimitiveValueDeserializer<'a, T>,
    ) -> Result<Option<Value>, DeserializeError>;
}

/// Declines every tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveOnly;

impl<'a, T: StringTable> ContainerDecoder<'a, T> for PrimitiveOnly {
    fn read_container(
        &mut self,
        _tag: u8,
        _location: StringLocation,
        _related_key: Option<&Value>,
        _de: &mut PrimitiveValueDeserializer<'a, T>,
    ) -> Result<Option<Value>, DeserializeError> {
        Ok(None)
    }
}
