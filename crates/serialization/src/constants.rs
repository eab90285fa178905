//! Wire tag bytes.
//!
//! The primitive tags use the byte values of V8's `ValueSerializer`, so
//! streams produced by `v8::ValueSerializer` decode without translation.

pub const PADDING: u8 = 0x00;
pub const VERSION: u8 = 0xff;
pub const TRUE: u8 = b'T';
pub const FALSE: u8 = b'F';
pub const THE_HOLE: u8 = b'-';
pub const UNDEFINED: u8 = b'_';
pub const NULL: u8 = b'0';
pub const INT32: u8 = b'I';
pub const UINT32: u8 = b'U';
pub const DOUBLE: u8 = b'N';
pub const BIG_INT: u8 = b'Z';
pub const ONE_BYTE_STRING: u8 = b'"';
pub const TWO_BYTE_STRING: u8 = b'c';
pub const UTF8_STRING: u8 = b'S';
pub const DATE: u8 = b'D';
pub const OBJECT_REFERENCE: u8 = b'^';

/// Render-tree container markers.
///
/// Never decoded by the primitive deserializer; a
/// [`ContainerDecoder`](crate::ContainerDecoder) can claim them.
pub mod render {
    pub const TRUE_OBJECT: u8 = b'y';
    pub const FALSE_OBJECT: u8 = b'x';
    pub const NUMBER_OBJECT: u8 = b'n';
    pub const BIG_INT_OBJECT: u8 = b'z';
    pub const STRING_OBJECT: u8 = b's';
    pub const BEGIN_MAP: u8 = b';';
    pub const END_MAP: u8 = b':';
    pub const BEGIN_OBJECT: u8 = b'o';
    pub const END_OBJECT: u8 = b'{';
    pub const BEGIN_DENSE_ARRAY: u8 = b'A';
    pub const END_DENSE_ARRAY: u8 = b'$';
    pub const BEGIN_SPARSE_JS_ARRAY: u8 = b'a';
    pub const END_SPARSE_JS_ARRAY: u8 = b'@';
}

/// Typed view of a tag byte.
///
/// [`Tag::Void`] has no byte of its own: it is what
/// [`peek_tag`](crate::PrimitiveValueDeserializer::peek_tag) reports once
/// the stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Padding,
    Version,
    True,
    False,
    TheHole,
    Undefined,
    Null,
    Int32,
    Uint32,
    Double,
    BigInt,
    OneByteString,
    TwoByteString,
    Utf8String,
    Date,
    ObjectReference,
    Void,
    /// Any byte the primitive deserializer does not understand.
    Other(u8),
}

impl Tag {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            PADDING => Tag::Padding,
            VERSION => Tag::Version,
            TRUE => Tag::True,
            FALSE => Tag::False,
            THE_HOLE => Tag::TheHole,
            UNDEFINED => Tag::Undefined,
            NULL => Tag::Null,
            INT32 => Tag::Int32,
            UINT32 => Tag::Uint32,
            DOUBLE => Tag::Double,
            BIG_INT => Tag::BigInt,
            ONE_BYTE_STRING => Tag::OneByteString,
            TWO_BYTE_STRING => Tag::TwoByteString,
            UTF8_STRING => Tag::Utf8String,
            DATE => Tag::Date,
            OBJECT_REFERENCE => Tag::ObjectReference,
            other => Tag::Other(other),
        }
    }

    /// The wire byte, or `None` for [`Tag::Void`].
    pub fn byte(self) -> Option<u8> {
        Some(match self {
            Tag::Padding => PADDING,
            Tag::Version => VERSION,
            Tag::True => TRUE,
            Tag::False => FALSE,
            Tag::TheHole => THE_HOLE,
            Tag::Undefined => UNDEFINED,
            Tag::Null => NULL,
            Tag::Int32 => INT32,
            Tag::Uint32 => UINT32,
            Tag::Double => DOUBLE,
            Tag::BigInt => BIG_INT,
            Tag::OneByteString => ONE_BYTE_STRING,
            Tag::TwoByteString => TWO_BYTE_STRING,
            Tag::Utf8String => UTF8_STRING,
            Tag::Date => DATE,
            Tag::ObjectReference => OBJECT_REFERENCE,
            Tag::Void => return None,
            Tag::Other(byte) => byte,
        })
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            Tag::OneByteString | Tag::TwoByteString | Tag::Utf8String
        )
    }
}

impl From<u8> for Tag {
    fn from(byte: u8) -> Self {
        Tag::from_byte(byte)
    }
}
