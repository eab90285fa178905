//! `PrimitiveValueDeserializer` — tag dispatch for primitive values.

use hippy_buffers::Reader;
use num_bigint::{BigInt, BigUint, Sign};
use tracing::{debug, trace, warn};

use crate::constants::{Tag, PADDING};
use crate::container::{ContainerDecoder, PrimitiveOnly};
use crate::string::{DirectStringTable, StringEncoding, StringLocation, StringTable};
use crate::{Date, DeserializeError, DeserializerOptions, Value};

/// 2^63, the first double that no longer fits in `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Decodes primitive values from one structured-clone byte stream.
///
/// Holds the cursor, the wire format version and the object map used to
/// resolve back-references. Use [`reset`](Self::reset) before reusing an
/// instance for another stream. The string table is released when the
/// deserializer is dropped, whether or not decoding succeeded.
pub struct PrimitiveValueDeserializer<'a, T: StringTable = DirectStringTable> {
    reader: Reader<'a>,
    string_table: T,
    options: DeserializerOptions,
    version: u64,
    object_map: Vec<Value>,
    container_decoder: Option<Box<dyn ContainerDecoder<'a, T> + 'a>>,
}

impl<'a> PrimitiveValueDeserializer<'a, DirectStringTable> {
    /// Deserializer over `data` backed by a [`DirectStringTable`].
    pub fn direct(data: &'a [u8]) -> Self {
        Self::new(data, DirectStringTable::new())
    }
}

impl<'a, T: StringTable> PrimitiveValueDeserializer<'a, T> {
    pub fn new(data: &'a [u8], string_table: T) -> Self {
        Self::with_reader(Reader::new(data), string_table)
    }

    pub fn with_reader(reader: Reader<'a>, string_table: T) -> Self {
        Self {
            reader,
            string_table,
            options: DeserializerOptions::default(),
            version: 0,
            object_map: Vec::new(),
            container_decoder: None,
        }
    }

    pub fn with_options(mut self, options: DeserializerOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs a decoder for tags outside the primitive set.
    pub fn with_container_decoder<C>(mut self, decoder: C) -> Self
    where
        C: ContainerDecoder<'a, T> + 'a,
    {
        self.container_decoder = Some(Box::new(decoder));
        self
    }

    pub fn options(&self) -> &DeserializerOptions {
        &self.options
    }

    pub fn supported_version(&self) -> Option<u32> {
        self.options.supported_version
    }

    /// Version read by [`read_header`](Self::read_header), 0 if none.
    pub fn wire_format_version(&self) -> u64 {
        self.version
    }

    pub fn reader(&self) -> &Reader<'a> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut Reader<'a> {
        &mut self.reader
    }

    pub fn set_reader(&mut self, reader: Reader<'a>) {
        self.reader = reader;
    }

    pub fn string_table(&self) -> &T {
        &self.string_table
    }

    pub fn string_table_mut(&mut self) -> &mut T {
        &mut self.string_table
    }

    /// Id the next referenceable value will receive.
    pub fn next_id(&self) -> usize {
        self.object_map.len()
    }

    /// Clears the object map. Version and cursor are left alone.
    pub fn reset(&mut self) {
        self.object_map.clear();
    }

    /// Consumes an optional `VERSION` tag and its varint.
    ///
    /// Any other leading tag is left in the stream.
    pub fn read_header(&mut self) -> Result<(), DeserializeError> {
        if self.peek_tag() != Tag::Version {
            return Ok(());
        }
        self.read_tag()?;
        let version = self.reader.try_varint()?;
        self.version = version;
        if let Some(supported) = self.options.supported_version {
            if version > supported as u64 {
                warn!(version, supported, "unsupported wire format version");
                return Err(DeserializeError::UnsupportedVersion { version, supported });
            }
        }
        debug!(version, "read wire format header");
        Ok(())
    }

    /// Reads the next non-padding tag byte.
    pub fn read_tag(&mut self) -> Result<u8, DeserializeError> {
        loop {
            let tag = self.reader.try_u8()?;
            if tag != PADDING {
                return Ok(tag);
            }
        }
    }

    /// Next non-padding tag without moving the cursor, [`Tag::Void`] once
    /// the stream is exhausted.
    pub fn peek_tag(&self) -> Tag {
        self.reader
            .uint8
            .get(self.reader.position()..)
            .unwrap_or(&[])
            .iter()
            .copied()
            .find(|&b| b != PADDING)
            .map(Tag::from_byte)
            .unwrap_or(Tag::Void)
    }

    /// Reads one top-level value.
    pub fn read_value(&mut self) -> Result<Value, DeserializeError> {
        self.read_value_at(StringLocation::TopLevel, None)
    }

    /// Reads one value, resolving strings for `location`.
    ///
    /// Unrecognized tags go to the installed container decoder, if any.
    pub fn read_value_at(
        &mut self,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<Value, DeserializeError> {
        match self.container_decoder.take() {
            Some(mut containers) => {
                let result = self.read_value_with(containers.as_mut(), location, related_key);
                self.container_decoder = Some(containers);
                result
            }
            None => self.read_value_with(&mut PrimitiveOnly, location, related_key),
        }
    }

    /// Reads one value, sending unrecognized tags to `containers`.
    pub fn read_value_with<C>(
        &mut self,
        containers: &mut C,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<Value, DeserializeError>
    where
        C: ContainerDecoder<'a, T> + ?Sized,
    {
        let tag = self.read_tag()?;
        match Tag::from_byte(tag) {
            Tag::True => Ok(Value::Bool(true)),
            Tag::False => Ok(Value::Bool(false)),
            Tag::TheHole => Ok(Value::HOLE),
            Tag::Undefined => Ok(Value::UNDEFINED),
            Tag::Null => Ok(Value::NULL),
            Tag::Int32 => Ok(Value::Int32(self.read_zigzag()?)),
            Tag::Uint32 => Ok(Value::Uint32(self.read_uint32()?)),
            Tag::Double => self.read_double_with_rectification(),
            Tag::BigInt => Ok(Value::BigInt(self.read_big_int()?)),
            Tag::OneByteString => self
                .read_string_payload(StringEncoding::Latin1, location, related_key)
                .map(Value::Str),
            Tag::TwoByteString => self
                .read_string_payload(StringEncoding::Utf16Le, location, related_key)
                .map(Value::Str),
            Tag::Utf8String => self
                .read_string_payload(StringEncoding::Utf8, location, related_key)
                .map(Value::Str),
            Tag::Date => self.read_date().map(Value::Date),
            Tag::ObjectReference => self.read_object_reference(),
            Tag::Padding | Tag::Version | Tag::Void | Tag::Other(_) => {
                match containers.read_container(tag, location, related_key, self)? {
                    Some(value) => Ok(value),
                    None => {
                        trace!(tag, "unrecognized tag");
                        Ok(Value::NOTHING)
                    }
                }
            }
        }
    }

    /// Reads a value that must be a string, e.g. an object key.
    pub fn read_string(
        &mut self,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, DeserializeError> {
        let tag = self.read_tag()?;
        let encoding = match Tag::from_byte(tag) {
            Tag::OneByteString => StringEncoding::Latin1,
            Tag::TwoByteString => StringEncoding::Utf16Le,
            Tag::Utf8String => StringEncoding::Utf8,
            _ => return Err(DeserializeError::UnexpectedTag(tag)),
        };
        self.read_string_payload(encoding, location, related_key)
    }

    fn read_string_payload(
        &mut self,
        encoding: StringEncoding,
        location: StringLocation,
        related_key: Option<&Value>,
    ) -> Result<String, DeserializeError> {
        let byte_count = self.read_length()?;
        let bytes = self.reader.try_buf(byte_count)?;
        Ok(self
            .string_table
            .lookup(bytes, encoding, location, related_key)?)
    }

    /// Reads a varint count. Values that would be negative as a signed
    /// 64-bit integer are rejected.
    pub fn read_length(&mut self) -> Result<usize, DeserializeError> {
        let raw = self.reader.try_varint()?;
        if raw > i64::MAX as u64 {
            return Err(DeserializeError::MalformedLength(raw));
        }
        usize::try_from(raw).map_err(|_| DeserializeError::MalformedLength(raw))
    }

    pub fn read_zigzag(&mut self) -> Result<i32, DeserializeError> {
        let zigzag = self.reader.try_varint()? as u32;
        Ok(((zigzag >> 1) as i32) ^ -((zigzag & 1) as i32))
    }

    pub fn read_uint32(&mut self) -> Result<u32, DeserializeError> {
        Ok(self.reader.try_varint()? as u32)
    }

    pub fn read_uint64(&mut self) -> Result<u64, DeserializeError> {
        Ok(self.reader.try_varint()?)
    }

    pub fn read_double(&mut self) -> Result<f64, DeserializeError> {
        Ok(self.reader.try_f64_le()?)
    }

    /// Reads a double, returning [`Value::Integer`] when it has no
    /// fractional part and fits in `i64`.
    pub fn read_double_with_rectification(&mut self) -> Result<Value, DeserializeError> {
        Ok(rectify(self.read_double()?))
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], DeserializeError> {
        Ok(self.reader.try_buf(length)?)
    }

    /// Bitfield varint (bit 0 sign, rest byte count) followed by the
    /// magnitude, least significant byte first.
    pub fn read_big_int(&mut self) -> Result<BigInt, DeserializeError> {
        let bitfield = self.reader.try_varint()?;
        let negative = bitfield & 1 != 0;
        let byte_count = usize::try_from(bitfield >> 1)
            .map_err(|_| DeserializeError::MalformedLength(bitfield))?;
        let bytes = self.reader.try_buf(byte_count)?;
        let magnitude = BigUint::from_bytes_le(bytes);
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_biguint(sign, magnitude))
    }

    /// Reads a date and registers it in the object map.
    pub fn read_date(&mut self) -> Result<Date, DeserializeError> {
        let date = Date::from_millis(self.read_double()?);
        self.assign_id(Value::Date(date));
        Ok(date)
    }

    pub fn read_object_reference(&mut self) -> Result<Value, DeserializeError> {
        let id = self.reader.try_varint()?;
        if id > i64::MAX as u64 {
            return Err(DeserializeError::MalformedLength(id));
        }
        usize::try_from(id)
            .ok()
            .and_then(|index| self.object_map.get(index))
            .cloned()
            .ok_or_else(|| {
                warn!(id, "dangling object reference");
                DeserializeError::DanglingReference(id)
            })
    }

    /// Registers `value` under the next id and hands it back.
    pub fn assign_id(&mut self, value: Value) -> Value {
        self.object_map.push(value.clone());
        value
    }
}

impl<'a, T: StringTable> Drop for PrimitiveValueDeserializer<'a, T> {
    fn drop(&mut self) {
        self.string_table.release();
    }
}

fn rectify(value: f64) -> Value {
    if value.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&value) {
        Value::Integer(value as i64)
    } else {
        Value::Double(value)
    }
}
