//! Serde bridge.
//!
//! This module provides [`ValueSerializer`], which converts any `Serialize`
//! type into a [`Value`] so it can be rendered without a
//! [`Reflect`](crate::Reflect) implementation.
//!
//! ## Overview
//!
//! Serde's data model is coarser than Go's type system, so the bridge infers:
//!
//! - **Package**: every named type is declared in package `main`
//! - **Field names**: `snake_case` fields become exported `PascalCase` names
//! - **Element types**: a sequence or map whose elements share one type uses
//!   it; mixed or empty collections fall back to `interface {}`
//! - **Options**: `None` is the nil interface, so zero-omission skips it
//! - **Enums**: unit variants become string constants of a defined type named
//!   after the enum, newtype and struct variants are named after the variant
//!
//! ## Usage
//!
//! ```rust
//! use gorepr::to_string_serialized;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { number: i64, list: Vec<i64> }
//!
//! let data = Data { number: 123, list: vec![10, 20] };
//! assert_eq!(
//!     to_string_serialized(&data).unwrap(),
//!     "Data{\n\tNumber: 123,\n\tList: []int64{10, 20},\n}"
//! );
//! ```

use crate::options::MAIN_PACKAGE;
use crate::types::{Kind, Type};
use crate::value::{Field, Value};
use crate::{Error, Reflect, Result};
use serde::ser::{self, Impossible};
use serde::Serialize;
use std::borrow::Cow;

/// Serializer producing a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    items: Vec<Value>,
    shape: SeqShape,
}

enum SeqShape {
    Slice,
    Array,
    NamedArray(&'static str),
}

pub struct SerializeMap {
    entries: Vec<(Value, Value)>,
    current_key: Option<Value>,
}

pub struct SerializeStruct {
    ty: Type,
    fields: Vec<Field>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = Impossible<Value, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = SerializeStruct;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.reflect())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::nil(Type::any()))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::structure(Type::anonymous_struct(Vec::new()), Vec::new()))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::structure(
            Type::structure(MAIN_PACKAGE, name),
            Vec::new(),
        ))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(variant.reflect().renamed(MAIN_PACKAGE, name))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(to_value(value)?.renamed(MAIN_PACKAGE, name))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(to_value(value)?.renamed(MAIN_PACKAGE, variant))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(SeqShape::Slice, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(SeqShape::Array, len))
    }

    fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(SeqShape::NamedArray(name), len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Impossible<Value, Error>> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct> {
        Ok(SerializeStruct::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStruct> {
        Ok(SerializeStruct::new(variant, len))
    }
}

impl SerializeVec {
    fn new(shape: SeqShape, len: usize) -> Self {
        SerializeVec {
            items: Vec::with_capacity(len),
            shape,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let elem = common_type(self.items.iter());
        match self.shape {
            SeqShape::Slice => Value::slice(elem, self.items),
            SeqShape::Array => Value::array(elem, self.items),
            SeqShape::NamedArray(name) => {
                Value::array(elem, self.items).renamed(MAIN_PACKAGE, name)
            }
        }
    }
}

impl SerializeStruct {
    fn new(name: &'static str, len: usize) -> Self {
        SerializeStruct {
            ty: Type::structure(MAIN_PACKAGE, name),
            fields: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        let value = to_value(value)?;
        self.fields
            .push(Field::new(exported_name(key), value.ty().clone(), value));
        Ok(())
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let key = common_type(self.entries.iter().map(|(k, _)| k));
        let elem = common_type(self.entries.iter().map(|(_, v)| v));
        Ok(Value::map(key, elem, self.entries))
    }
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::structure(self.ty, self.fields))
    }
}

impl ser::SerializeStructVariant for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::structure(self.ty, self.fields))
    }
}

/// Converts a `Serialize` value into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use gorepr::to_value;
///
/// let value = to_value(&vec![1u8, 2]).unwrap();
/// assert_eq!(value.ty().to_string(), "[]uint8");
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// The shared type of all values, or `interface {}` when they differ or there
/// are none.
fn common_type<'a>(mut values: impl Iterator<Item = &'a Value>) -> Type {
    let Some(first) = values.next() else {
        return Type::any();
    };
    let ty = first.ty();
    if *ty.kind() == Kind::Interface || values.any(|value| value.ty() != ty) {
        Type::any()
    } else {
        ty.clone()
    }
}

/// `user_name` becomes `UserName`. Names already starting with an uppercase
/// letter are kept.
fn exported_name(key: &'static str) -> Cow<'static, str> {
    if key.chars().next().map_or(true, char::is_uppercase) {
        return Cow::Borrowed(key);
    }
    let name: String = key
        .split('_')
        .flat_map(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .into_iter()
                .flat_map(char::to_uppercase)
                .chain(chars)
        })
        .collect();
    if name.is_empty() {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Data;
    use std::collections::BTreeMap;

    #[test]
    fn test_exported_name() {
        assert_eq!(exported_name("id"), "Id");
        assert_eq!(exported_name("user_name"), "UserName");
        assert_eq!(exported_name("Already"), "Already");
        assert_eq!(exported_name("_"), "_");
    }

    #[test]
    fn test_homogeneous_seq() {
        let value = to_value(&vec![1i32, 2, 3]).unwrap();
        assert_eq!(value.ty().to_string(), "[]int32");
    }

    #[test]
    fn test_mixed_tuple_is_interface_array() {
        let value = to_value(&(1u16, "x")).unwrap();
        assert_eq!(value.ty().to_string(), "[2]interface {}");
    }

    #[test]
    fn test_empty_seq_is_interface_slice() {
        let value = to_value(&Vec::<i32>::new()).unwrap();
        assert_eq!(value.ty().to_string(), "[]interface {}");
    }

    #[test]
    fn test_map_types() {
        let mut map = BTreeMap::new();
        map.insert("a", 1u64);
        let value = to_value(&map).unwrap();
        assert_eq!(value.ty().to_string(), "map[string]uint64");
    }

    #[test]
    fn test_none_is_nil_interface() {
        let value = to_value(&Option::<i32>::None).unwrap();
        assert!(value.is_nil_interface());
        assert_eq!(to_value(&Some(3i32)).unwrap().data(), &Data::Int(3));
    }

    #[test]
    fn test_tuple_variant_is_unsupported() {
        #[derive(Serialize)]
        enum Shape {
            Rect(u32, u32),
        }
        let err = to_value(&Shape::Rect(1, 2)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }
}
