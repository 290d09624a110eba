//! Dynamic value representation.
//!
//! A [`Value`] is a runtime value classified into one Go [`Kind`]: it pairs the
//! value's dynamic [`Type`] with its [`Data`]. Values are usually produced by
//! [`Reflect::reflect`](crate::Reflect::reflect) or by the serde bridge
//! ([`to_value`](crate::to_value)), and can also be assembled by hand.
//!
//! ## Static and dynamic types
//!
//! Containers record the *static* type of their positions: a slice's element
//! type, a map's key and element types, each struct field's declared type. The
//! values stored in those positions carry their own *dynamic* type. The two
//! differ only for interface-typed positions, where Go code would hold any
//! concrete value. The renderer uses the static type to decide whether a type
//! name can be elided, and the dynamic type to decide what to print.
//!
//! ## Examples
//!
//! ```rust
//! use gorepr::{Field, Kind, Reflect, Type, Value};
//!
//! let ty = Type::structure("main", "Data");
//! let value = Value::structure(ty, vec![
//!     Field::new("Number", Type::new(Kind::Int), 123isize.reflect()),
//!     Field::new("List", <Vec<isize>>::type_of(), Value::nil(<Vec<isize>>::type_of())),
//! ]);
//!
//! assert!(!value.is_zero());
//! assert_eq!(gorepr::value_to_string(&value, gorepr::Config::global()).unwrap(), "Data{\n\tNumber: 123,\n}");
//! ```

use crate::types::{Kind, Type};
use std::borrow::Cow;

/// The payload of a [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    Bool(bool),
    /// Signed integers of every width.
    Int(i64),
    /// Unsigned integers of every width.
    Uint(u64),
    /// `float32` values are stored widened; the conversion is exact.
    Float(f64),
    Complex(f64, f64),
    String(String),
    /// `uintptr` and `unsafe.Pointer`.
    Address(usize),
    /// Channels, functions and the nil interface.
    Nil,
    Ptr(Option<Box<Value>>),
    Array(Vec<Value>),
    Slice(Option<Vec<Value>>),
    Map(Option<Vec<(Value, Value)>>),
    Struct(Vec<Field>),
}

/// A runtime value with its dynamic type.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    ty: Type,
    data: Data,
}

/// One struct field: its declared name and type, and the value it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: Cow<'static, str>,
    ty: Type,
    value: Value,
}

impl Field {
    /// Creates a field. `ty` is the field's declared type; `value` may have a
    /// different dynamic type when `ty` is an interface.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, ty: Type, value: Value) -> Self {
        Field {
            name: name.into(),
            ty,
            value,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Go's export rule: the name starts with an uppercase letter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::{Field, Reflect};
    ///
    /// assert!(Field::new("Name", String::type_of(), "x".reflect()).is_exported());
    /// assert!(!Field::new("name", String::type_of(), "x".reflect()).is_exported());
    /// ```
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().map_or(false, char::is_uppercase)
    }

    /// Returns `true` if the field holds the zero value of its declared type.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_zero_as(&self.value, &self.ty)
    }
}

impl Value {
    pub(crate) const fn new(ty: Type, data: Data) -> Self {
        Value { ty, data }
    }

    /// Creates the nil value of a nilable type (slice, map, pointer, interface,
    /// channel or function).
    ///
    /// For any other type the result is rejected by the renderer.
    #[must_use]
    pub fn nil(ty: Type) -> Self {
        let data = match ty.kind() {
            Kind::Slice(_) => Data::Slice(None),
            Kind::Map(..) => Data::Map(None),
            Kind::Ptr(_) => Data::Ptr(None),
            _ => Data::Nil,
        };
        Value::new(ty, data)
    }

    /// Creates a struct value. `ty` should have [`Kind::Struct`].
    #[must_use]
    pub fn structure(ty: Type, fields: Vec<Field>) -> Self {
        Value::new(ty, Data::Struct(fields))
    }

    /// Creates a non-nil slice of `elem`.
    #[must_use]
    pub fn slice(elem: Type, items: Vec<Value>) -> Self {
        Value::new(Type::slice(elem), Data::Slice(Some(items)))
    }

    /// Creates an array of `elem`; the length is taken from `items`.
    #[must_use]
    pub fn array(elem: Type, items: Vec<Value>) -> Self {
        Value::new(Type::array(items.len(), elem), Data::Array(items))
    }

    /// Creates a non-nil map. Entry order is preserved as given.
    #[must_use]
    pub fn map(key: Type, elem: Type, entries: Vec<(Value, Value)>) -> Self {
        Value::new(Type::map(key, elem), Data::Map(Some(entries)))
    }

    /// Creates a non-nil pointer to `pointee`.
    #[must_use]
    pub fn pointer_to(pointee: Value) -> Self {
        Value::new(Type::ptr(pointee.ty.clone()), Data::Ptr(Some(Box::new(pointee))))
    }

    /// Re-declares the value's type under a new name, like a conversion to a
    /// Go defined type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::{Reflect, Value};
    ///
    /// let kind = 2u8.reflect().renamed("github.com/mitranim/repr/test", "AbiKind");
    /// assert_eq!(kind.ty().to_string(), "test.AbiKind");
    /// ```
    #[must_use]
    pub fn renamed(
        self,
        package: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Value {
            ty: self.ty.renamed(package, name),
            data: self.data,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    #[must_use]
    pub const fn data(&self) -> &Data {
        &self.data
    }

    /// Returns `true` for nil slices, maps, pointers, channels, functions and
    /// interfaces.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(
            self.data,
            Data::Nil | Data::Ptr(None) | Data::Slice(None) | Data::Map(None)
        )
    }

    /// Returns `true` for the nil interface, the value an empty interface
    /// position holds.
    #[must_use]
    pub fn is_nil_interface(&self) -> bool {
        matches!(self.ty.kind(), Kind::Interface) && matches!(self.data, Data::Nil)
    }

    /// Zero-value predicate.
    ///
    /// Scalars compare to their natural zero, nilable kinds are zero iff nil,
    /// and arrays and structs are zero iff every element or field is zero,
    /// unexported fields included. Channels and functions always count as zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::Reflect;
    ///
    /// assert!(0i32.reflect().is_zero());
    /// assert!("".reflect().is_zero());
    /// assert!([0u8; 4].reflect().is_zero());
    /// assert!(!Vec::<i32>::new().reflect().is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match &self.data {
            Data::Bool(b) => !b,
            Data::Int(i) => *i == 0,
            Data::Uint(u) => *u == 0,
            Data::Float(f) => *f == 0.0,
            Data::Complex(re, im) => *re == 0.0 && *im == 0.0,
            Data::String(s) => s.is_empty(),
            Data::Address(addr) => *addr == 0,
            Data::Nil => true,
            Data::Ptr(ptr) => ptr.is_none(),
            Data::Slice(items) => items.is_none(),
            Data::Map(entries) => entries.is_none(),
            Data::Array(items) => match self.ty.elem() {
                Some(elem) => items.iter().all(|item| is_zero_as(item, elem)),
                None => items.iter().all(Value::is_zero),
            },
            Data::Struct(fields) => fields.iter().all(Field::is_zero),
        }
    }
}

/// Zero check of `value` stored in a position declared as `ty`.
pub(crate) fn is_zero_as(value: &Value, ty: &Type) -> bool {
    match ty.kind() {
        Kind::Interface => value.is_nil_interface(),
        Kind::Chan(..) | Kind::Func(_) => true,
        _ => value.is_zero(),
    }
}

/// A Go `uintptr`. Renders as `0x`-prefixed hex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uintptr(pub usize);

/// A Go `unsafe.Pointer`, carried as a raw address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnsafePointer(pub usize);

/// A Go `complex64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

/// A Go `complex128`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Complex64 { re, im }
    }
}

impl Complex128 {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex128 { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;

    #[test]
    fn test_nil_constructor_matches_kind() {
        assert_eq!(Value::nil(Type::slice(Type::any())).data(), &Data::Slice(None));
        assert_eq!(
            Value::nil(Type::map(Type::any(), Type::any())).data(),
            &Data::Map(None)
        );
        assert_eq!(Value::nil(Type::ptr(Type::any())).data(), &Data::Ptr(None));
        assert_eq!(Value::nil(Type::any()).data(), &Data::Nil);
        assert!(Value::nil(Type::any()).is_nil_interface());
    }

    #[test]
    fn test_scalar_zero() {
        assert!(false.reflect().is_zero());
        assert!(!true.reflect().is_zero());
        assert!(0.0f64.reflect().is_zero());
        assert!(Complex128::new(0.0, 0.0).reflect().is_zero());
        assert!(!Complex128::new(0.0, 1.0).reflect().is_zero());
        assert!(Uintptr(0).reflect().is_zero());
        assert!(!"x".reflect().is_zero());
    }

    #[test]
    fn test_empty_collections_are_not_zero() {
        assert!(!Vec::<u8>::new().reflect().is_zero());
        assert!(Value::nil(<Vec<u8>>::type_of()).is_zero());
    }

    #[test]
    fn test_struct_zero_includes_unexported_fields() {
        let ty = Type::structure("main", "Secret");
        let hidden = Value::structure(
            ty.clone(),
            vec![Field::new("token", String::type_of(), "abc".reflect())],
        );
        assert!(!hidden.is_zero());

        let blank = Value::structure(
            ty,
            vec![Field::new("token", String::type_of(), "".reflect())],
        );
        assert!(blank.is_zero());
    }

    #[test]
    fn test_interface_field_zero_only_when_nil() {
        let holding_zero = Field::new("Any", Type::any(), 0i64.reflect());
        assert!(!holding_zero.is_zero());

        let nil = Field::new("Any", Type::any(), Value::nil(Type::any()));
        assert!(nil.is_zero());
    }

    #[test]
    fn test_func_fields_are_always_zero() {
        let field = Field::new("Callback", Type::func("func()"), Value::nil(Type::func("func()")));
        assert!(field.is_zero());
    }

    #[test]
    fn test_renamed_keeps_data() {
        let value = 7u8.reflect().renamed("github.com/mitranim/repr/test", "AbiKind");
        assert_eq!(value.data(), &Data::Uint(7));
        assert!(!value.ty().is_byte());
    }
}
