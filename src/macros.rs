/// Implements [`Reflect`](crate::Reflect) for a struct as a Go struct type.
///
/// Each entry maps a Go field name to a Rust field. Go's export rule applies to
/// the Go name: lowercase names are unexported and never rendered, but still
/// count towards the struct's zero value.
///
/// # Examples
///
/// ```rust
/// use gorepr::{reflect_struct, to_string};
///
/// pub struct Data {
///     number: isize,
///     string: String,
///     list: Vec<isize>,
/// }
///
/// reflect_struct!("main", Data {
///     Number: number,
///     String: string,
///     List: list,
/// });
///
/// let data = Data { number: 123, string: "hello world!".into(), list: vec![10, 20, 30] };
/// assert_eq!(
///     to_string(&data).unwrap(),
///     "Data{\n\tNumber: 123,\n\tString: \"hello world!\",\n\tList: []int{10, 20, 30},\n}"
/// );
/// ```
///
/// The Go type name defaults to the Rust name; `Rust as "GoName"` overrides it.
#[macro_export]
macro_rules! reflect_struct {
    (@impl $package:expr, $ty:ident, $name:expr, $($go:ident : $field:ident),*) => {
        impl $crate::Reflect for $ty {
            fn type_of() -> $crate::Type {
                $crate::Type::structure($package, $name)
            }

            fn reflect(&self) -> $crate::Value {
                $crate::Value::structure(
                    <Self as $crate::Reflect>::type_of(),
                    vec![$(
                        $crate::Field::new(
                            stringify!($go),
                            $crate::reflect::type_of_val(&self.$field),
                            $crate::Reflect::reflect(&self.$field),
                        )
                    ),*],
                )
            }
        }
    };

    // Handle an explicit Go type name
    ($package:expr, $ty:ident as $name:literal { $($go:ident : $field:ident),* $(,)? }) => {
        $crate::reflect_struct!(@impl $package, $ty, $name, $($go : $field),*);
    };

    ($package:expr, $ty:ident { $($go:ident : $field:ident),* $(,)? }) => {
        $crate::reflect_struct!(@impl $package, $ty, stringify!($ty), $($go : $field),*);
    };
}

/// Implements [`Reflect`](crate::Reflect) for a tuple newtype as a Go defined
/// type over the inner type, like `type Word [32]byte`.
///
/// # Examples
///
/// ```rust
/// use gorepr::{reflect_newtype, to_string};
///
/// pub struct AbiKind(u8);
/// reflect_newtype!("github.com/mitranim/repr/test", AbiKind(u8));
///
/// assert_eq!(to_string(&AbiKind(4)).unwrap(), "test.AbiKind(4)");
/// ```
#[macro_export]
macro_rules! reflect_newtype {
    ($package:expr, $ty:ident ($inner:ty)) => {
        impl $crate::Reflect for $ty {
            fn type_of() -> $crate::Type {
                <$inner as $crate::Reflect>::type_of().renamed($package, stringify!($ty))
            }

            fn reflect(&self) -> $crate::Value {
                $crate::Reflect::reflect(&self.0).renamed($package, stringify!($ty))
            }
        }
    };
}

/// Implements [`Reflect`](crate::Reflect) for an enum standing in for a Go
/// interface type.
///
/// Every listed variant wraps one value; the interface's dynamic value is the
/// wrapped value. An optional `nil => Variant` entry names a unit variant that
/// represents the nil interface.
///
/// # Examples
///
/// ```rust
/// use gorepr::{reflect_interface, Reflect};
///
/// pub enum Shape {
///     Empty,
///     Square(u32),
///     Label(String),
/// }
///
/// reflect_interface!("main", Shape { nil => Empty, Square, Label });
///
/// assert_eq!(Shape::type_of().to_string(), "main.Shape");
/// assert_eq!(Shape::Square(3).reflect().ty().to_string(), "uint32");
/// assert!(Shape::Empty.reflect().is_nil_interface());
/// ```
#[macro_export]
macro_rules! reflect_interface {
    // Handle an enum with a nil variant
    ($package:expr, $ty:ident { nil => $nil:ident $(, $variant:ident)* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_of() -> $crate::Type {
                $crate::Type::named($package, stringify!($ty), $crate::Kind::Interface)
            }

            fn reflect(&self) -> $crate::Value {
                match self {
                    $ty::$nil => $crate::Value::nil(<Self as $crate::Reflect>::type_of()),
                    $($ty::$variant(inner) => $crate::Reflect::reflect(inner),)*
                }
            }
        }
    };

    ($package:expr, $ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_of() -> $crate::Type {
                $crate::Type::named($package, stringify!($ty), $crate::Kind::Interface)
            }

            fn reflect(&self) -> $crate::Value {
                match self {
                    $($ty::$variant(inner) => $crate::Reflect::reflect(inner),)*
                }
            }
        }
    };
}
