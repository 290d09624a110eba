//! Runtime introspection: mapping Rust values onto Go types.
//!
//! [`Reflect`] exposes a value's static Go type and its dynamic contents as a
//! [`Value`]. It is implemented for the standard scalar, string and collection
//! types below; user structs, defined types and interface-like enums get it
//! through [`reflect_struct!`](crate::reflect_struct),
//! [`reflect_newtype!`](crate::reflect_newtype) and
//! [`reflect_interface!`](crate::reflect_interface).
//!
//! | Rust | Go |
//! |------|----|
//! | `bool` | `bool` |
//! | `i8`..`i64`, `isize` | `int8`..`int64`, `int` |
//! | `u8`..`u64`, `usize` | `uint8`..`uint64`, `uint` |
//! | `char` | `int32` (rune) |
//! | `f32`, `f64` | `float32`, `float64` |
//! | [`Complex64`], [`Complex128`] | `complex64`, `complex128` |
//! | [`Uintptr`], [`UnsafePointer`], `*const T` | `uintptr`, `unsafe.Pointer` |
//! | `String`, `&str`, `Cow<str>` | `string` |
//! | `Vec<T>`, `&[T]`, `VecDeque<T>` | `[]T` |
//! | `[T; N]` | `[N]T` |
//! | `HashMap`, `BTreeMap`, `IndexMap` | `map[K]V` |
//! | `Box<T>` | `*T` |
//! | `Option<T>` | `T` when nilable (`None` is nil), otherwise `*T` |
//! | `Box<dyn Reflect>` | `interface {}` |
//! | `mpsc::Sender<T>`, `mpsc::Receiver<T>` | `chan<- T`, `<-chan T` |
//! | `fn()` | `func()` |
//! | `BigInt` | `big.Int` |
//! | `DateTime<Utc>` | `time.Time` |
//!
//! Rust collections are never nil; use `Option<Vec<T>>` or `Option<HashMap<K, V>>`
//! for a Go slice or map that may be nil.

use crate::types::{ChanDir, Kind, Type};
use crate::value::{Complex128, Complex64, Data, Field, Uintptr, UnsafePointer, Value};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::{BigInt, Sign};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::{mpsc, Arc};

/// Seconds from January 1 of year 1 to the Unix epoch.
const UNIX_TO_INTERNAL: i64 = 62_135_596_800;

/// Introspection of a value as a Go value.
///
/// # Examples
///
/// ```rust
/// use gorepr::{Kind, Reflect};
///
/// assert_eq!(<Vec<u8>>::type_of().to_string(), "[]uint8");
/// assert_eq!(<Option<Vec<u8>>>::type_of().to_string(), "[]uint8");
/// assert_eq!(<[i64; 2]>::type_of().to_string(), "[2]int64");
///
/// let value = 'x'.reflect();
/// assert_eq!(value.ty().kind(), &Kind::Int32);
/// ```
pub trait Reflect {
    /// The static Go type of `Self`.
    fn type_of() -> Type
    where
        Self: Sized;

    /// The dynamic value. For interface-like types the value's type is the
    /// concrete type held, not [`type_of`](Reflect::type_of).
    fn reflect(&self) -> Value;
}

/// Static type of a value, inferred from a reference. Used by the struct macros
/// to record declared field types.
#[doc(hidden)]
pub fn type_of_val<T: Reflect>(_: &T) -> Type {
    T::type_of()
}

macro_rules! reflect_scalar {
    ($($ty:ty => $kind:ident, $data:ident($conv:ty);)*) => {
        $(
            impl Reflect for $ty {
                fn type_of() -> Type {
                    Type::new(Kind::$kind)
                }

                fn reflect(&self) -> Value {
                    Value::new(Self::type_of(), Data::$data(*self as $conv))
                }
            }
        )*
    };
}

reflect_scalar! {
    i8 => Int8, Int(i64);
    i16 => Int16, Int(i64);
    i32 => Int32, Int(i64);
    i64 => Int64, Int(i64);
    isize => Int, Int(i64);
    u8 => Uint8, Uint(u64);
    u16 => Uint16, Uint(u64);
    u32 => Uint32, Uint(u64);
    u64 => Uint64, Uint(u64);
    usize => Uint, Uint(u64);
    char => Int32, Int(i64);
    f32 => Float32, Float(f64);
    f64 => Float64, Float(f64);
}

impl Reflect for bool {
    fn type_of() -> Type {
        Type::new(Kind::Bool)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Bool(*self))
    }
}

impl Reflect for Complex64 {
    fn type_of() -> Type {
        Type::new(Kind::Complex64)
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Complex(f64::from(self.re), f64::from(self.im)),
        )
    }
}

impl Reflect for Complex128 {
    fn type_of() -> Type {
        Type::new(Kind::Complex128)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Complex(self.re, self.im))
    }
}

impl Reflect for Uintptr {
    fn type_of() -> Type {
        Type::new(Kind::Uintptr)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Address(self.0))
    }
}

impl Reflect for UnsafePointer {
    fn type_of() -> Type {
        Type::new(Kind::UnsafePointer)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Address(self.0))
    }
}

impl<T> Reflect for *const T {
    fn type_of() -> Type {
        Type::new(Kind::UnsafePointer)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Address(*self as usize))
    }
}

impl<T> Reflect for *mut T {
    fn type_of() -> Type {
        Type::new(Kind::UnsafePointer)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Address(*self as usize))
    }
}

impl Reflect for String {
    fn type_of() -> Type {
        Type::new(Kind::String)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::String(self.clone()))
    }
}

impl<'a> Reflect for &'a str {
    fn type_of() -> Type {
        Type::new(Kind::String)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::String((*self).to_string()))
    }
}

impl<'a> Reflect for Cow<'a, str> {
    fn type_of() -> Type {
        Type::new(Kind::String)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::String(self.to_string()))
    }
}

fn reflect_items<'a, T, I>(items: I) -> Option<Vec<Value>>
where
    T: Reflect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Some(items.into_iter().map(Reflect::reflect).collect())
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_of() -> Type {
        Type::slice(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Slice(reflect_items(self)))
    }
}

impl<'a, T: Reflect> Reflect for &'a [T] {
    fn type_of() -> Type {
        Type::slice(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Slice(reflect_items(self.iter())))
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_of() -> Type {
        Type::slice(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Slice(reflect_items(self)))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_of() -> Type {
        Type::array(N, T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Array(self.iter().map(Reflect::reflect).collect()),
        )
    }
}

fn reflect_entries<'a, K, V, I>(entries: I) -> Data
where
    K: Reflect + 'a,
    V: Reflect + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    Data::Map(Some(
        entries
            .into_iter()
            .map(|(key, value)| (key.reflect(), value.reflect()))
            .collect(),
    ))
}

/// Go map iteration order is unspecified; `HashMap` entries are emitted in
/// iteration order, which varies between runs. Prefer `BTreeMap` or `IndexMap`
/// for reproducible output.
impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn type_of() -> Type {
        Type::map(K::type_of(), V::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), reflect_entries(self))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_of() -> Type {
        Type::map(K::type_of(), V::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), reflect_entries(self))
    }
}

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for IndexMap<K, V, S> {
    fn type_of() -> Type {
        Type::map(K::type_of(), V::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), reflect_entries(self))
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn type_of() -> Type {
        Type::ptr(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Ptr(Some(Box::new((**self).reflect()))),
        )
    }
}

impl<T: Reflect> Reflect for Rc<T> {
    fn type_of() -> Type {
        Type::ptr(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Ptr(Some(Box::new((**self).reflect()))),
        )
    }
}

impl<T: Reflect> Reflect for Arc<T> {
    fn type_of() -> Type {
        Type::ptr(T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Ptr(Some(Box::new((**self).reflect()))),
        )
    }
}

/// A boxed trait object stands for a Go `interface {}` holding a value.
impl Reflect for Box<dyn Reflect> {
    fn type_of() -> Type {
        Type::any()
    }

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<'a, T: Reflect> Reflect for &'a T {
    fn type_of() -> Type {
        T::type_of()
    }

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_of() -> Type {
        let inner = T::type_of();
        if inner.kind().is_nilable() {
            inner
        } else {
            Type::ptr(inner)
        }
    }

    fn reflect(&self) -> Value {
        match self {
            None => Value::nil(Self::type_of()),
            Some(inner) if T::type_of().kind().is_nilable() => inner.reflect(),
            Some(inner) => Value::new(
                Self::type_of(),
                Data::Ptr(Some(Box::new(inner.reflect()))),
            ),
        }
    }
}

impl<T: Reflect> Reflect for mpsc::Sender<T> {
    fn type_of() -> Type {
        Type::chan(ChanDir::Send, T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Nil)
    }
}

impl<T: Reflect> Reflect for mpsc::SyncSender<T> {
    fn type_of() -> Type {
        Type::chan(ChanDir::Send, T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Nil)
    }
}

impl<T: Reflect> Reflect for mpsc::Receiver<T> {
    fn type_of() -> Type {
        Type::chan(ChanDir::Recv, T::type_of())
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Nil)
    }
}

impl Reflect for fn() {
    fn type_of() -> Type {
        Type::func("func()")
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Nil)
    }
}

/// `math/big.Int`: a sign flag and the magnitude as little-endian words.
/// Both fields are unexported, so the literal body is always empty.
impl Reflect for BigInt {
    fn type_of() -> Type {
        Type::structure("math/big", "Int")
    }

    fn reflect(&self) -> Value {
        let digits = self.magnitude().to_u64_digits();
        let words = Type::new(Kind::Uint);
        let abs = if digits.is_empty() {
            Value::nil(Type::slice(words))
        } else {
            Value::slice(words, digits.iter().map(|d| (*d as usize).reflect()).collect())
        };
        Value::structure(
            Self::type_of(),
            vec![
                Field::new("neg", bool::type_of(), (self.sign() == Sign::Minus).reflect()),
                Field::new("abs", Type::slice(Type::new(Kind::Uint)), abs),
            ],
        )
    }
}

/// `time.Time` without a monotonic reading: nanoseconds in `wall`, seconds
/// since January 1 of year 1 in `ext`, UTC location.
impl Reflect for DateTime<Utc> {
    fn type_of() -> Type {
        Type::structure("time", "Time")
    }

    fn reflect(&self) -> Value {
        let location = Type::ptr(Type::structure("time", "Location"));
        Value::structure(
            Self::type_of(),
            vec![
                Field::new(
                    "wall",
                    u64::type_of(),
                    u64::from(self.timestamp_subsec_nanos()).reflect(),
                ),
                Field::new(
                    "ext",
                    i64::type_of(),
                    (self.timestamp() + UNIX_TO_INTERNAL).reflect(),
                ),
                Field::new("loc", location.clone(), Value::nil(location)),
            ],
        )
    }
}
