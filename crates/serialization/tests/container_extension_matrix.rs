use hippy_buffers::Writer;
use hippy_serialization::constants::*;
use hippy_serialization::{
    ContainerDecoder, DeserializeError, Extension, InternalizedStringTable,
    PrimitiveValueDeserializer, StringLocation, StringTable, Tag, Value,
};

/// Dense arrays and plain objects in the render-tree layout.
struct RenderContainers;

impl<'a, T: StringTable> ContainerDecoder<'a, T> for RenderContainers {
    fn read_container(
        &mut self,
        tag: u8,
        _location: StringLocation,
        _related_key: Option<&Value>,
        de: &mut PrimitiveValueDeserializer<'a, T>,
    ) -> Result<Option<Value>, DeserializeError> {
        match tag {
            render::BEGIN_DENSE_ARRAY => {
                let length = de.read_length()?;
                let mut items = Vec::new();
                for _ in 0..length {
                    items.push(de.read_value_with(self, StringLocation::DenseArrayItem, None)?);
                }
                let end = de.read_tag()?;
                if end != render::END_DENSE_ARRAY {
                    return Err(DeserializeError::UnexpectedTag(end));
                }
                let _properties = de.read_uint32()?;
                let _length = de.read_uint32()?;
                let value = Value::Extension(Box::new(Extension::new(tag, items)));
                Ok(Some(de.assign_id(value)))
            }
            render::BEGIN_OBJECT => {
                let mut items = Vec::new();
                while de.peek_tag() != Tag::Other(render::END_OBJECT) {
                    let key = Value::Str(de.read_string(StringLocation::ObjectKey, None)?);
                    let value = de.read_value_with(self, StringLocation::ObjectValue, Some(&key))?;
                    items.push(key);
                    items.push(value);
                }
                de.read_tag()?;
                let _properties = de.read_uint32()?;
                let value = Value::Extension(Box::new(Extension::new(tag, items)));
                Ok(Some(de.assign_id(value)))
            }
            _ => Ok(None),
        }
    }
}

fn write_utf8(writer: &mut Writer, s: &str) {
    writer.u8(UTF8_STRING);
    writer.varint(s.len() as u64);
    writer.buf(s.as_bytes());
}

fn nested_stream() -> Vec<u8> {
    // {"list": [1, [true]], "name": "x"} followed by a reference to the inner array
    let mut w = Writer::new();
    w.u8(VERSION);
    w.varint(13);
    w.u8(render::BEGIN_OBJECT);
    write_utf8(&mut w, "list");
    w.u8(render::BEGIN_DENSE_ARRAY);
    w.varint(2);
    w.u8(INT32);
    w.zigzag_i32(1);
    w.u8(render::BEGIN_DENSE_ARRAY);
    w.varint(1);
    w.u8(TRUE);
    w.u8(render::END_DENSE_ARRAY);
    w.varint(0);
    w.varint(1);
    w.u8(render::END_DENSE_ARRAY);
    w.varint(0);
    w.varint(2);
    write_utf8(&mut w, "name");
    write_utf8(&mut w, "x");
    w.u8(render::END_OBJECT);
    w.varint(2);
    w.u8(OBJECT_REFERENCE);
    w.varint(0);
    w.flush()
}

fn ext(tag: u8, items: Vec<Value>) -> Value {
    Value::Extension(Box::new(Extension::new(tag, items)))
}

#[test]
fn nested_containers_decode_through_injected_decoder() {
    let data = nested_stream();
    let mut de = PrimitiveValueDeserializer::direct(&data).with_container_decoder(RenderContainers);
    de.read_header().unwrap();

    let inner = ext(render::BEGIN_DENSE_ARRAY, vec![Value::Bool(true)]);
    let list = ext(
        render::BEGIN_DENSE_ARRAY,
        vec![Value::Int32(1), inner.clone()],
    );
    let expected = ext(
        render::BEGIN_OBJECT,
        vec![
            Value::from("list"),
            list,
            Value::from("name"),
            Value::from("x"),
        ],
    );
    assert_eq!(de.read_value(), Ok(expected));
    assert_eq!(de.next_id(), 3);
    // the innermost array finished first and took id 0
    assert_eq!(de.read_value(), Ok(inner));
    assert_eq!(de.peek_tag(), Tag::Void);
}

#[test]
fn containers_are_nothing_without_decoder() {
    let data = [render::BEGIN_DENSE_ARRAY, 0, render::END_DENSE_ARRAY, 0, 0];
    let mut de = PrimitiveValueDeserializer::direct(&data);
    assert_eq!(de.read_value(), Ok(Value::NOTHING));
}

#[test]
fn declined_tags_are_nothing() {
    let data = [render::BEGIN_MAP, NULL];
    let mut de = PrimitiveValueDeserializer::direct(&data).with_container_decoder(RenderContainers);
    assert_eq!(de.read_value(), Ok(Value::NOTHING));
    assert_eq!(de.read_value(), Ok(Value::NULL));
}

#[test]
fn container_errors_abort_the_pass() {
    let data = [render::BEGIN_DENSE_ARRAY, 1, TRUE, render::END_OBJECT];
    let mut de = PrimitiveValueDeserializer::direct(&data).with_container_decoder(RenderContainers);
    assert_eq!(
        de.read_value(),
        Err(DeserializeError::UnexpectedTag(render::END_OBJECT))
    );
}

#[test]
fn internalized_table_sees_container_locations() {
    let data = nested_stream();
    let mut table = InternalizedStringTable::new();
    {
        let mut de =
            PrimitiveValueDeserializer::new(&data, &mut table).with_container_decoder(RenderContainers);
        de.read_header().unwrap();
        match de.read_value() {
            Ok(Value::Extension(object)) => {
                assert_eq!(object.items[0], Value::from(""));
                assert_eq!(object.items[2], Value::from(""));
                assert_eq!(object.items[3], Value::from(""));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    assert!(table.is_released());
}
