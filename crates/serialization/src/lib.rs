//! Deserializer for the V8 structured-clone wire format.
//!
//! Decodes primitive values (booleans, numbers, big integers, strings,
//! dates, sentinels) and back-references. Composite containers are left to
//! an injected [`ContainerDecoder`].
//!
//! ```
//! use hippy_serialization::{deserialize, Value};
//!
//! // VERSION 13, UINT32 42
//! let value = deserialize(&[0xff, 0x0d, b'U', 0x2a]).unwrap();
//! assert_eq!(value, Value::Uint32(42));
//! ```

pub mod constants;
mod container;
mod deserializer;
mod error;
mod options;
mod sentinel;
pub mod string;
mod value;

pub use constants::Tag;
pub use container::{ContainerDecoder, PrimitiveOnly};
pub use deserializer::PrimitiveValueDeserializer;
pub use error::{DeserializeError, StringTableError};
pub use num_bigint::BigInt;
pub use options::DeserializerOptions;
pub use sentinel::Sentinel;
pub use string::{
    DirectStringTable, InternalizedStringTable, StringEncoding, StringLocation, StringTable,
};
pub use value::{Date, Extension, Value};

/// Reads the optional header and one top-level value from `data`.
pub fn deserialize(data: &[u8]) -> Result<Value, DeserializeError> {
    let mut de = PrimitiveValueDeserializer::direct(data);
    de.read_header()?;
    de.read_value()
}
