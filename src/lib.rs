//! # gorepr
//!
//! Renders Rust values as Go source literals.
//!
//! ## What is it for?
//!
//! Go test suites, code generators and debugging sessions often need a value
//! written back out as Go code: a fixture to paste into a `_test.go` file, a
//! table of constants, a reproduction of a bug report. `gorepr` takes any value
//! that implements [`Reflect`] (or `serde::Serialize`) and produces a single Go
//! expression that evaluates to an equal value.
//!
//! ## Key Features
//!
//! - **Go literal syntax**: struct, slice, array and map composite literals,
//!   `&T{...}` pointers, typed conversions like `test.AbiKind(4)`
//! - **Minimal type names**: element and field types are elided wherever the
//!   Go grammar allows it
//! - **Hex bytes**: `[]byte` prints as `0x`-prefixed hex, 8 bytes per row
//! - **Zero-field omission**: struct fields holding zero values are skipped
//! - **Package aliases**: package qualifiers can be stripped or renamed
//! - **Serde bridge**: any `Serialize` type can be rendered with inferred types
//!
//! ## Quick Start
//!
//! ```rust
//! use gorepr::{reflect_struct, to_string};
//!
//! pub struct Data {
//!     number: isize,
//!     string: String,
//!     list: Vec<isize>,
//! }
//!
//! reflect_struct!("main", Data {
//!     Number: number,
//!     String: string,
//!     List: list,
//! });
//!
//! let data = Data { number: 123, string: "hello world!".into(), list: vec![10, 20, 30] };
//!
//! assert_eq!(
//!     to_string(&data).unwrap(),
//!     "Data{\n\tNumber: 123,\n\tString: \"hello world!\",\n\tList: []int{10, 20, 30},\n}"
//! );
//! ```
//!
//! ### Single-line Output
//!
//! ```rust
//! use gorepr::{to_string_with_config, Config};
//!
//! let config = Config::single_line();
//! let value = vec![vec![1u16, 2], vec![3]];
//!
//! assert_eq!(to_string_with_config(&value, &config).unwrap(), "[][]uint16{{1, 2}, {3}}");
//! ```
//!
//! ### Serde Types
//!
//! ```rust
//! use gorepr::to_string_serialized_with_config;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let config = gorepr::Config::single_line();
//! let out = to_string_serialized_with_config(&Point { x: 1, y: 0 }, &config).unwrap();
//! assert_eq!(out, "Point{X: 1}");
//! ```
//!
//! ## Limitations
//!
//! - Pointers to non-composite types (`*int`, `*string`) have no literal form
//!   and are rejected with [`Error::UnsupportedPointer`]
//! - Bare interface values cannot be rendered; a nil interface only survives
//!   as an omitted zero field
//! - Channels and functions always render as `nil`
//! - Types with only unexported fields, such as `big.Int` or `time.Time`,
//!   render as empty struct literals
//! - Map entries are rendered in the map's iteration order
//!
//! ## Logging
//!
//! Entry points emit `tracing` events: `trace!` on success, and `debug!` naming
//! the offending type when a value has no literal form. The crate never
//! installs a subscriber.

pub mod error;
pub mod macros;
pub mod options;
pub mod reflect;
pub mod render;
pub mod ser;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use options::{Config, MAIN_PACKAGE};
pub use reflect::Reflect;
pub use render::Renderer;
pub use ser::{to_value, ValueSerializer};
pub use types::{ChanDir, Kind, Type, TypeName};
pub use value::{Complex128, Complex64, Data, Field, Uintptr, UnsafePointer, Value};

use serde::Serialize;
use std::io;
use tracing::trace;

/// Render any `T: Reflect` as a Go literal with the default configuration.
///
/// # Examples
///
/// ```rust
/// use gorepr::to_string;
///
/// assert_eq!(to_string(&[1u8, 2, 3]).unwrap(), "[3]uint8{0x01, 0x02, 0x03}");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form
/// (pointers to scalars, bare interfaces).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Reflect,
{
    to_string_with_config(value, Config::global())
}

/// Render any `T: Reflect` as a Go literal with a custom configuration.
///
/// # Examples
///
/// ```rust
/// use gorepr::{to_string_with_config, Config};
///
/// let config = Config::single_line().with_force_constructor_name(true);
/// let value = vec![[1u16], [2]];
/// assert_eq!(to_string_with_config(&value, &config).unwrap(), "[][1]uint16{[1]uint16{1}, [1]uint16{2}}");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_config<T>(value: &T, config: &Config) -> Result<String>
where
    T: ?Sized + Reflect,
{
    value_to_string(&value.reflect(), config)
}

/// Render an already-built [`Value`] as a Go literal.
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form, or
/// if its data disagrees with its type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn value_to_string(value: &Value, config: &Config) -> Result<String> {
    let mut renderer = Renderer::new(config);
    renderer.render(value)?;
    let output = renderer.into_inner();
    trace!(
        single_line = config.single_line,
        len = output.len(),
        "rendered Go literal"
    );
    Ok(output)
}

/// Render any `T: Reflect` as Go literal bytes with the default configuration.
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Reflect,
{
    to_vec_with_config(value, Config::global())
}

/// Render any `T: Reflect` as Go literal bytes with a custom configuration.
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_config<T>(value: &T, config: &Config) -> Result<Vec<u8>>
where
    T: ?Sized + Reflect,
{
    to_string_with_config(value, config).map(String::into_bytes)
}

/// Append the Go literal for `value` to `out` with the default configuration.
///
/// # Examples
///
/// ```rust
/// use gorepr::append;
///
/// let mut out = String::from("var x = ");
/// append(&mut out, &42i64).unwrap();
/// assert_eq!(out, "var x = 42");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form.
/// `out` is left unchanged in that case.
pub fn append<T>(out: &mut String, value: &T) -> Result<()>
where
    T: ?Sized + Reflect,
{
    append_with_config(out, value, Config::global())
}

/// Append the Go literal for `value` to `out` with a custom configuration.
///
/// # Errors
///
/// Returns an error if the value contains a shape with no Go literal form.
/// `out` is left unchanged in that case.
pub fn append_with_config<T>(out: &mut String, value: &T, config: &Config) -> Result<()>
where
    T: ?Sized + Reflect,
{
    let start = out.len();
    let mut renderer = Renderer::with_output(std::mem::take(out), config);
    let result = renderer.render(&value.reflect());
    *out = renderer.into_inner();
    if result.is_err() {
        out.truncate(start);
    }
    result
}

/// Write the Go literal for `value` to a writer with the default configuration.
///
/// # Examples
///
/// ```rust
/// use gorepr::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![true, false]).unwrap();
/// assert_eq!(buffer, b"[]bool{true, false}");
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Reflect,
{
    to_writer_with_config(writer, value, Config::global())
}

/// Write the Go literal for `value` to a writer with a custom configuration.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_config<W, T>(mut writer: W, value: &T, config: &Config) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Reflect,
{
    let literal = to_string_with_config(value, config)?;
    writer
        .write_all(literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Print the Go literal for `value` to stdout, followed by a newline.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to stdout fails.
pub fn println<T>(value: &T) -> Result<()>
where
    T: ?Sized + Reflect,
{
    let mut literal = to_string(value)?;
    literal.push('\n');
    io::Write::write_all(&mut io::stdout().lock(), literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Render any `T: Serialize` as a Go literal with the default configuration.
///
/// Go types are inferred as described in [`ser`].
///
/// # Errors
///
/// Returns an error if the value cannot be converted (e.g., tuple variants) or
/// has no Go literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_serialized<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_serialized_with_config(value, Config::global())
}

/// Render any `T: Serialize` as a Go literal with a custom configuration.
///
/// # Errors
///
/// Returns an error if the value cannot be converted or has no Go literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_serialized_with_config<T>(value: &T, config: &Config) -> Result<String>
where
    T: ?Sized + Serialize,
{
    value_to_string(&to_value(value)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        y: i32,
    }

    crate::reflect_struct!("main", Point { X: x, Y: y });

    #[test]
    fn test_default_config_is_multiline() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(to_string(&point).unwrap(), "Point{\n\tX: 1,\n\tY: 2,\n}");
    }

    #[test]
    fn test_to_vec_matches_to_string() {
        let point = Point { x: 1, y: 0 };
        assert_eq!(
            to_vec(&point).unwrap(),
            to_string(&point).unwrap().into_bytes()
        );
    }

    #[test]
    fn test_append_keeps_prefix() {
        let mut out = String::from("x := ");
        append_with_config(&mut out, &Point { x: 0, y: 3 }, &Config::single_line()).unwrap();
        assert_eq!(out, "x := Point{Y: 3}");
    }

    #[test]
    fn test_append_restores_buffer_on_error() {
        let mut out = String::from("x := ");
        let value: Vec<Option<i32>> = vec![Some(1)];
        assert!(append(&mut out, &value).is_err());
        assert_eq!(out, "x := ");
    }

    #[test]
    fn test_to_writer_with_config() {
        let mut buffer = Vec::new();
        let config = Config::single_line().with_omit_zero_fields(false);
        to_writer_with_config(&mut buffer, &Point { x: 0, y: 0 }, &config).unwrap();
        assert_eq!(buffer, b"Point{X: 0, Y: 0}");
    }

    #[test]
    fn test_dyn_reflect_entry_point() {
        let boxed: Box<dyn Reflect> = Box::new(Point { x: 4, y: 0 });
        let config = Config::single_line();
        assert_eq!(to_string_with_config(&*boxed, &config).unwrap(), "Point{X: 4}");
    }
}
