//! Static type descriptors and the Go type-name formatter.
//!
//! A [`Type`] is a [`Kind`] plus an optional [`TypeName`]. Unnamed types are
//! Go's predeclared scalars (`int`, `string`, ...) and type literals (`[]T`,
//! `[N]T`, `map[K]V`, `*T`, `struct { ... }`). Named types are Go defined types
//! declared in a package, such as `test.Abi` declared in
//! `github.com/mitranim/repr/test`.
//!
//! ## Examples
//!
//! ```rust
//! use gorepr::{Config, Kind, Type};
//!
//! let word = Type::named("github.com/mitranim/repr/test", "Word", Kind::Array(32, Box::new(Type::new(Kind::Uint8))));
//! let ty = Type::map(Type::new(Kind::String), Type::slice(word));
//!
//! assert_eq!(ty.to_string(), "map[string][]test.Word");
//!
//! let config = Config::new().with_package("github.com/mitranim/repr/test", "abi");
//! assert_eq!(ty.display_name(&config.package_map), "map[string][]abi.Word");
//! ```

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Direction of a channel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// The shape of a Go type.
///
/// Every runtime value is classified into exactly one kind before rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,
    Chan(ChanDir, Box<Type>),
    /// Full function type literal, e.g. `func(int) error`.
    Func(Cow<'static, str>),
    Interface,
    Array(usize, Box<Type>),
    Slice(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Ptr(Box<Type>),
    /// Field list, used only to spell anonymous struct types.
    Struct(Vec<(Cow<'static, str>, Type)>),
}

impl Kind {
    /// Scalar kinds that render as a bare literal inside a typed context.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Kind::Bool
                | Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Uint
                | Kind::Uint8
                | Kind::Uint16
                | Kind::Uint32
                | Kind::Uint64
                | Kind::Uintptr
                | Kind::Float32
                | Kind::Float64
                | Kind::Complex64
                | Kind::Complex128
                | Kind::String
        )
    }

    /// Kinds whose literal may span several lines in multi-line mode.
    #[must_use]
    pub fn may_require_multiline(&self) -> bool {
        matches!(
            self,
            Kind::Array(..)
                | Kind::Chan(..)
                | Kind::Func(_)
                | Kind::Interface
                | Kind::Map(..)
                | Kind::Slice(_)
                | Kind::String
                | Kind::Struct(_)
        )
    }

    #[must_use]
    pub fn is_nilable(&self) -> bool {
        matches!(
            self,
            Kind::Chan(..)
                | Kind::Func(_)
                | Kind::Interface
                | Kind::Map(..)
                | Kind::Ptr(_)
                | Kind::Slice(_)
        )
    }

    /// Kinds that may be the target of an `&` literal.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Kind::Array(..) | Kind::Slice(_) | Kind::Struct(_) | Kind::Map(..)
        )
    }

    /// Spelling of the predeclared type with this kind, if there is one.
    #[must_use]
    pub const fn builtin_name(&self) -> Option<&'static str> {
        Some(match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Uintptr => "uintptr",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::UnsafePointer => "unsafe.Pointer",
            _ => return None,
        })
    }
}

/// The declared name of a Go defined type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Fully-qualified package path, e.g. `github.com/mitranim/repr/test`.
    pub package: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl TypeName {
    /// Go's default qualifier for the package: its last path segment.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        self.package.rsplit('/').next().unwrap_or_default()
    }
}

/// A static Go type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    kind: Kind,
    name: Option<TypeName>,
}

impl Type {
    /// Creates an unnamed type: a predeclared scalar or a type literal.
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Type { kind, name: None }
    }

    /// Creates a defined type declared in `package`.
    #[must_use]
    pub fn named(
        package: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        kind: Kind,
    ) -> Self {
        Type {
            kind,
            name: Some(TypeName {
                package: package.into(),
                name: name.into(),
            }),
        }
    }

    /// Creates a named struct type. Field types are not recorded.
    #[must_use]
    pub fn structure(
        package: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Type::named(package, name, Kind::Struct(Vec::new()))
    }

    #[must_use]
    pub fn anonymous_struct(fields: Vec<(Cow<'static, str>, Type)>) -> Self {
        Type::new(Kind::Struct(fields))
    }

    /// The empty interface, `interface {}`.
    #[must_use]
    pub const fn any() -> Self {
        Type::new(Kind::Interface)
    }

    #[must_use]
    pub fn slice(elem: Type) -> Self {
        Type::new(Kind::Slice(Box::new(elem)))
    }

    #[must_use]
    pub fn array(len: usize, elem: Type) -> Self {
        Type::new(Kind::Array(len, Box::new(elem)))
    }

    #[must_use]
    pub fn map(key: Type, elem: Type) -> Self {
        Type::new(Kind::Map(Box::new(key), Box::new(elem)))
    }

    #[must_use]
    pub fn ptr(elem: Type) -> Self {
        Type::new(Kind::Ptr(Box::new(elem)))
    }

    #[must_use]
    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Type::new(Kind::Chan(dir, Box::new(elem)))
    }

    #[must_use]
    pub fn func(signature: impl Into<Cow<'static, str>>) -> Self {
        Type::new(Kind::Func(signature.into()))
    }

    /// Re-declares this type under a new name, keeping its underlying kind.
    ///
    /// This is Go's `type Word [32]byte`.
    #[must_use]
    pub fn renamed(
        self,
        package: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Type::named(package, name, self.kind)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> Option<&TypeName> {
        self.name.as_ref()
    }

    /// Returns `true` for unnamed types.
    #[inline]
    #[must_use]
    pub const fn is_unnamed(&self) -> bool {
        self.name.is_none()
    }

    /// Element type of arrays, slices, maps, pointers and channels.
    #[must_use]
    pub fn elem(&self) -> Option<&Type> {
        match &self.kind {
            Kind::Array(_, elem)
            | Kind::Slice(elem)
            | Kind::Map(_, elem)
            | Kind::Ptr(elem)
            | Kind::Chan(_, elem) => Some(elem),
            _ => None,
        }
    }

    /// Returns `true` for the predeclared `byte` (`uint8`) type. Defined types
    /// over `byte` do not count.
    #[must_use]
    pub fn is_byte(&self) -> bool {
        self.name.is_none() && self.kind == Kind::Uint8
    }

    /// Renders the type name, shortening package qualifiers through `package_map`.
    #[must_use]
    pub fn display_name(&self, package_map: &IndexMap<String, String>) -> String {
        let mut out = String::new();
        write_type_name(&mut out, self, package_map);
        out
    }
}

impl From<Kind> for Type {
    fn from(kind: Kind) -> Self {
        Type::new(kind)
    }
}

/// Go's default spelling, with every package qualified by its last path segment.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name(&IndexMap::new()))
    }
}

/// Appends the Go spelling of `ty` to `out`.
///
/// Type literals recurse into their component types, so package aliases apply
/// at every depth (`[]renamed.AbiParam`, `map[string]*renamed.AbiType`).
pub fn write_type_name(out: &mut String, ty: &Type, package_map: &IndexMap<String, String>) {
    if let Some(name) = &ty.name {
        match package_map.get(name.package.as_ref()) {
            Some(alias) if alias.is_empty() => {}
            Some(alias) => {
                out.push_str(alias);
                out.push('.');
            }
            None => {
                let qualifier = name.qualifier();
                if !qualifier.is_empty() {
                    out.push_str(qualifier);
                    out.push('.');
                }
            }
        }
        out.push_str(&name.name);
        return;
    }

    if let Some(builtin) = ty.kind.builtin_name() {
        out.push_str(builtin);
        return;
    }

    match &ty.kind {
        Kind::Array(len, elem) => {
            out.push('[');
            out.push_str(&len.to_string());
            out.push(']');
            write_type_name(out, elem, package_map);
        }
        Kind::Slice(elem) => {
            out.push_str("[]");
            write_type_name(out, elem, package_map);
        }
        Kind::Map(key, elem) => {
            out.push_str("map[");
            write_type_name(out, key, package_map);
            out.push(']');
            write_type_name(out, elem, package_map);
        }
        Kind::Ptr(elem) => {
            out.push('*');
            write_type_name(out, elem, package_map);
        }
        Kind::Chan(dir, elem) => {
            out.push_str(match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            });
            write_type_name(out, elem, package_map);
        }
        Kind::Func(signature) => out.push_str(signature),
        Kind::Interface => out.push_str("interface {}"),
        Kind::Struct(fields) if fields.is_empty() => out.push_str("struct {}"),
        Kind::Struct(fields) => {
            out.push_str("struct { ");
            for (i, (name, field_ty)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(name);
                out.push(' ');
                write_type_name(out, field_ty, package_map);
            }
            out.push_str(" }");
        }
        // Scalars are covered by `builtin_name` above.
        _ => {}
    }
}
