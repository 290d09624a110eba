//! Go literal rendering.
//!
//! This module provides the [`Renderer`], which walks a [`Value`] tree and
//! appends Go source text to an output buffer.
//!
//! ## Layout rules
//!
//! - **Type elision**: inside a typed list, map or struct literal, Go lets the
//!   element type be omitted. The renderer drops it wherever that is legal:
//!   primitive fields, nil fields, non-interface list elements and primitive
//!   map keys and values.
//! - **Inline lists**: in multi-line mode, lists of up to 48 elements whose
//!   element type can never span lines are kept on one line.
//! - **Byte blocks**: `[]byte` and `[N]byte` print as hex, 8 bytes per row.
//! - **Zero fields**: with [`Config::omit_zero_fields`], struct fields holding
//!   their zero value are skipped.
//!
//! ## Direct Renderer Usage
//!
//! ```rust
//! use gorepr::{render::Renderer, Config, Reflect};
//!
//! let config = Config::new();
//! let mut renderer = Renderer::new(&config);
//! renderer.render(&vec![1u16, 2, 3].reflect()).unwrap();
//!
//! assert_eq!(renderer.into_inner(), "[]uint16{1, 2, 3}");
//! ```

use crate::types::{write_type_name, Kind, Type};
use crate::value::{Data, Field, Value};
use crate::{Config, Error, Result};
use tracing::debug;

/// Lists longer than this always go multi-line in multi-line mode.
const MAX_INLINE_ELEMENTS: usize = 48;

const BYTES_PER_ROW: usize = 8;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Per-call rendering state. Passed by value; nested literals get a copy.
#[derive(Clone, Copy, Debug, Default)]
struct State {
    indent: usize,
    /// The enclosing literal already names this value's type.
    elide_type: bool,
}

impl State {
    fn nested(self) -> Self {
        State {
            indent: self.indent + 1,
            ..self
        }
    }

    fn eliding(self, elide_type: bool) -> Self {
        State { elide_type, ..self }
    }
}

/// Renders [`Value`] trees as Go literals.
///
/// Created via [`Renderer::new`] or [`Renderer::with_output`] to append to an
/// existing buffer.
pub struct Renderer<'a> {
    output: String,
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_output(String::with_capacity(256), config)
    }

    /// Creates a renderer appending to `output`.
    pub fn with_output(output: String, config: &'a Config) -> Self {
        Renderer { output, config }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the Go literal for `value`.
    ///
    /// On error the buffer may hold a partial literal.
    pub fn render(&mut self, value: &Value) -> Result<()> {
        self.emit(value, State::default())
    }

    fn emit(&mut self, value: &Value, state: State) -> Result<()> {
        if value.ty().is_unnamed() && self.emit_builtin(value)? {
            return Ok(());
        }
        self.emit_generic(value, state)
    }

    /// Fast path for unnamed scalars: bare literals with no type name, since
    /// untyped constants default to these types or convert implicitly.
    fn emit_builtin(&mut self, value: &Value) -> Result<bool> {
        match (value.ty().kind(), value.data()) {
            (Kind::Uint8, Data::Uint(byte)) => {
                let byte = u8::try_from(*byte).map_err(|_| self.mismatch(value.ty(), "uint8"))?;
                write_byte(&mut self.output, byte);
            }
            (kind, _) if kind.is_primitive() || *kind == Kind::UnsafePointer => {
                self.write_scalar(value)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn emit_generic(&mut self, value: &Value, state: State) -> Result<()> {
        let ty = value.ty();
        match (ty.kind(), value.data()) {
            (kind, _) if kind.is_primitive() || *kind == Kind::UnsafePointer => {
                self.open_cast(ty, state);
                self.write_scalar(value)?;
                self.close_cast(state);
            }
            (Kind::Chan(..) | Kind::Func(_), Data::Nil) => {
                self.open_cast(ty, state);
                self.output.push_str("nil");
                self.close_cast(state);
            }
            (Kind::Interface, Data::Nil) => {
                let name = self.type_name(ty);
                debug!(ty = %name, "cannot render a bare interface value");
                return Err(Error::unsupported_interface(name));
            }
            (Kind::Ptr(elem), data) => {
                if !elem.kind().is_composite() {
                    let name = self.type_name(ty);
                    debug!(ty = %name, "cannot render a pointer to a non-composite type");
                    return Err(Error::unsupported_pointer(name));
                }
                match data {
                    Data::Ptr(None) => self.output.push_str("nil"),
                    Data::Ptr(Some(pointee)) => {
                        if !state.elide_type {
                            self.output.push('&');
                        }
                        self.emit(pointee, state)?;
                    }
                    _ => return Err(self.mismatch(ty, "pointer")),
                }
            }
            (Kind::Array(_, elem), Data::Array(items)) => {
                self.write_type(ty, state);
                self.write_sequence(elem, items, state)?;
            }
            (Kind::Slice(_), Data::Slice(None)) | (Kind::Map(..), Data::Map(None)) => {
                self.write_nil(ty, state);
            }
            (Kind::Slice(elem), Data::Slice(Some(items))) => {
                self.write_type(ty, state);
                self.write_sequence(elem, items, state)?;
            }
            (Kind::Struct(_), Data::Struct(fields)) => {
                self.write_type(ty, state);
                self.write_struct(fields, state)?;
            }
            (Kind::Map(key, elem), Data::Map(Some(entries))) => {
                self.write_type(ty, state);
                self.write_map(key, elem, entries, state)?;
            }
            (kind, _) => return Err(self.mismatch(ty, expected_data(kind))),
        }
        Ok(())
    }

    fn write_scalar(&mut self, value: &Value) -> Result<()> {
        match (value.ty().kind(), value.data()) {
            (Kind::Bool, Data::Bool(b)) => {
                self.output.push_str(if *b { "true" } else { "false" });
            }
            (
                Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64,
                Data::Int(i),
            ) => self.output.push_str(&i.to_string()),
            (
                Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64,
                Data::Uint(u),
            ) => self.output.push_str(&u.to_string()),
            (Kind::Uintptr | Kind::UnsafePointer, Data::Address(addr)) => {
                self.output.push_str(&format!("0x{addr:x}"));
            }
            (Kind::Float32, Data::Float(f)) => write_float(&mut self.output, *f, true),
            (Kind::Float64, Data::Float(f)) => write_float(&mut self.output, *f, false),
            (Kind::Complex64 | Kind::Complex128, Data::Complex(re, im)) => {
                write_complex(&mut self.output, *re, *im);
            }
            (Kind::String, Data::String(s)) => write_quoted(&mut self.output, s),
            (kind, _) => return Err(self.mismatch(value.ty(), expected_data(kind))),
        }
        Ok(())
    }

    fn write_sequence(&mut self, elem: &Type, items: &[Value], state: State) -> Result<()> {
        if !elem.is_byte() {
            return self.write_list(elem, items, state);
        }
        let bytes = items
            .iter()
            .map(|item| match item.data() {
                Data::Uint(b) => u8::try_from(*b).map_err(|_| self.mismatch(item.ty(), "uint8")),
                _ => Err(self.mismatch(item.ty(), "uint8")),
            })
            .collect::<Result<Vec<u8>>>()?;
        self.write_bytes(&bytes, state);
        Ok(())
    }

    fn write_list(&mut self, elem: &Type, items: &[Value], state: State) -> Result<()> {
        let elide = !self.config.force_constructor_name && *elem.kind() != Kind::Interface;

        if self.config.single_line
            || (!elem.kind().may_require_multiline() && items.len() <= MAX_INLINE_ELEMENTS)
        {
            self.output.push('{');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.emit(item, state.eliding(elide))?;
            }
            self.output.push('}');
            return Ok(());
        }

        self.output.push('{');
        if items.is_empty() {
            self.output.push('}');
            return Ok(());
        }
        self.output.push('\n');
        let inner = state.nested().eliding(elide);
        for item in items {
            self.write_indent(inner.indent);
            self.emit(item, inner)?;
            self.output.push_str(",\n");
        }
        self.write_indent(state.indent);
        self.output.push('}');
        Ok(())
    }

    fn write_struct(&mut self, fields: &[Field], state: State) -> Result<()> {
        let omit_zero = self.config.omit_zero_fields;
        let kept = fields
            .iter()
            .filter(|field| field.is_exported() && !(omit_zero && field.is_zero()));

        self.output.push('{');

        if self.config.single_line {
            for (i, field) in kept.enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.write_field(field, state)?;
            }
            self.output.push('}');
            return Ok(());
        }

        let inner = state.nested();
        let mut written = 0;
        for field in kept {
            if written == 0 {
                self.output.push('\n');
            }
            written += 1;
            self.write_indent(inner.indent);
            self.write_field(field, inner)?;
            self.output.push_str(",\n");
        }
        if written > 0 {
            self.write_indent(state.indent);
        }
        self.output.push('}');
        Ok(())
    }

    fn write_field(&mut self, field: &Field, state: State) -> Result<()> {
        let elide = field.ty().kind().is_primitive() || field.value().is_nil();
        self.output.push_str(field.name());
        self.output.push_str(": ");
        self.emit(field.value(), state.eliding(elide))
    }

    fn write_map(
        &mut self,
        key: &Type,
        elem: &Type,
        entries: &[(Value, Value)],
        state: State,
    ) -> Result<()> {
        let key_state = |state: State| state.eliding(key.kind().is_primitive());
        let elem_state = |state: State| state.eliding(elem.kind().is_primitive());

        self.output.push('{');

        if self.config.single_line {
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.emit(k, key_state(state))?;
                self.output.push_str(": ");
                self.emit(v, elem_state(state))?;
            }
            self.output.push('}');
            return Ok(());
        }

        let inner = state.nested();
        for (i, (k, v)) in entries.iter().enumerate() {
            if i == 0 {
                self.output.push('\n');
            }
            self.write_indent(inner.indent);
            self.emit(k, key_state(inner))?;
            self.output.push_str(": ");
            self.emit(v, elem_state(inner))?;
            self.output.push_str(",\n");
        }
        if !entries.is_empty() {
            self.write_indent(state.indent);
        }
        self.output.push('}');
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8], state: State) {
        self.output.push('{');

        if self.config.single_line || bytes.len() <= BYTES_PER_ROW {
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                write_byte(&mut self.output, *byte);
            }
            self.output.push('}');
            return;
        }

        self.output.push('\n');
        for (i, row) in bytes.chunks(BYTES_PER_ROW).enumerate() {
            if i > 0 {
                self.output.push_str(",\n");
            }
            self.write_indent(state.indent + 1);
            for (j, byte) in row.iter().enumerate() {
                if j > 0 {
                    self.output.push_str(", ");
                }
                write_byte(&mut self.output, *byte);
            }
        }
        self.output.push_str(",\n");
        self.write_indent(state.indent);
        self.output.push('}');
    }

    fn write_type(&mut self, ty: &Type, state: State) {
        if !state.elide_type {
            write_type_name(&mut self.output, ty, &self.config.package_map);
        }
    }

    fn write_nil(&mut self, ty: &Type, state: State) {
        if state.elide_type {
            self.output.push_str("nil");
        } else {
            write_type_name(&mut self.output, ty, &self.config.package_map);
            self.output.push_str("(nil)");
        }
    }

    fn open_cast(&mut self, ty: &Type, state: State) {
        if !state.elide_type {
            write_type_name(&mut self.output, ty, &self.config.package_map);
            self.output.push('(');
        }
    }

    fn close_cast(&mut self, state: State) {
        if !state.elide_type {
            self.output.push(')');
        }
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.config.indent);
        }
    }

    fn type_name(&self, ty: &Type) -> String {
        ty.display_name(&self.config.package_map)
    }

    fn mismatch(&self, ty: &Type, expected: &'static str) -> Error {
        let name = self.type_name(ty);
        debug!(ty = %name, expected, "value data does not match its type");
        Error::mismatch(name, expected)
    }
}

fn expected_data(kind: &Kind) -> &'static str {
    match kind {
        Kind::Bool => "bool",
        Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 => "signed integer",
        Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64 => {
            "unsigned integer"
        }
        Kind::Uintptr | Kind::UnsafePointer => "address",
        Kind::Float32 | Kind::Float64 => "float",
        Kind::Complex64 | Kind::Complex128 => "complex",
        Kind::String => "string",
        Kind::Chan(..) | Kind::Func(_) | Kind::Interface => "nil",
        Kind::Array(..) => "array",
        Kind::Slice(_) => "slice",
        Kind::Map(..) => "map",
        Kind::Ptr(_) => "pointer",
        Kind::Struct(_) => "struct",
    }
}

/// Appends `0xHH` with lowercase hex digits.
#[inline]
pub fn write_byte(out: &mut String, byte: u8) {
    out.push_str("0x");
    out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
}

/// Appends the shortest decimal form that round-trips, never in exponent
/// notation. `single` formats with `float32` precision.
pub fn write_float(out: &mut String, value: f64, single: bool) {
    if value.is_nan() {
        out.push_str("NaN");
    } else if value.is_infinite() {
        out.push_str(if value > 0.0 { "+Inf" } else { "-Inf" });
    } else if single {
        out.push_str(&(value as f32).to_string());
    } else {
        out.push_str(&value.to_string());
    }
}

/// Appends `(re+imi)`. Both parts use `float64` precision.
pub fn write_complex(out: &mut String, re: f64, im: f64) {
    out.push('(');
    write_float(out, re, false);
    if !(im < 0.0) {
        out.push('+');
    }
    write_float(out, im, false);
    out.push_str("i)");
}

/// Appends a double-quoted Go string literal.
///
/// Printable characters are kept as-is. Everything else uses Go escapes: the
/// short forms (`\n`, `\t`, ...), `\xHH` for ASCII controls, and `\uXXXX` or
/// `\UXXXXXXXX` above that.
pub fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            ch if is_printable(ch) => out.push(ch),
            ch if (ch as u32) < 0x80 => out.push_str(&format!("\\x{:02x}", ch as u32)),
            ch if (ch as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => out.push_str(&format!("\\U{:08x}", ch as u32)),
        }
    }
    out.push('"');
}

/// Graphic characters and the ASCII space. Other whitespace, controls,
/// invisible format characters, private-use and noncharacter code points are
/// escaped.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !(ch.is_control()
        || ch.is_whitespace()
        || matches!(
            ch,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{206f}'
                | '\u{feff}'
                | '\u{fff9}'..='\u{fffb}'
                | '\u{fffe}'..='\u{ffff}'
                | '\u{e000}'..='\u{f8ff}'
                | '\u{e0000}'..='\u{e007f}'
                | '\u{f0000}'..='\u{10ffff}'
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Complex128;
    use crate::Reflect;

    fn render(value: &Value, config: &Config) -> String {
        let mut renderer = Renderer::new(config);
        renderer.render(value).unwrap();
        renderer.into_inner()
    }

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        write_quoted(&mut out, s);
        out
    }

    #[test]
    fn test_scalar_fast_path() {
        let config = Config::new();
        assert_eq!(render(&true.reflect(), &config), "true");
        assert_eq!(render(&(-12i64).reflect(), &config), "-12");
        assert_eq!(render(&255u8.reflect(), &config), "0xff");
        assert_eq!(render(&10u8.reflect(), &config), "0x0a");
        assert_eq!(render(&1.5f64.reflect(), &config), "1.5");
        assert_eq!(render(&0.1f32.reflect(), &config), "0.1");
        assert_eq!(render(&"hi".reflect(), &config), "\"hi\"");
    }

    #[test]
    fn test_named_scalar_gets_cast() {
        let config = Config::new();
        let value = 7u8.reflect().renamed("github.com/mitranim/repr/test", "AbiKind");
        assert_eq!(render(&value, &config), "test.AbiKind(7)");
    }

    #[test]
    fn test_floats() {
        let mut out = String::new();
        write_float(&mut out, 1e21, false);
        assert_eq!(out, "1000000000000000000000");

        for (value, expected) in [
            (f64::INFINITY, "+Inf"),
            (f64::NEG_INFINITY, "-Inf"),
            (f64::NAN, "NaN"),
        ] {
            let mut out = String::new();
            write_float(&mut out, value, false);
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_complex() {
        let config = Config::new();
        assert_eq!(render(&Complex128::new(1.0, 2.5).reflect(), &config), "(1+2.5i)");
        assert_eq!(render(&Complex128::new(0.0, -1.0).reflect(), &config), "(0-1i)");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quoted("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quoted("\n\t\r\u{07}\u{0b}"), r#""\n\t\r\a\v""#);
        assert_eq!(quoted("\u{01}\u{7f}"), r#""\x01\x7f""#);
        assert_eq!(quoted("\u{a0}\u{feff}"), r#""\u00a0\ufeff""#);
        assert_eq!(quoted("héllo 世界"), "\"héllo 世界\"");
        assert_eq!(quoted("\u{e0001}"), r#""\U000e0001""#);
    }

    #[test]
    fn test_private_use_is_escaped() {
        assert_eq!(quoted("\u{e000}"), r#""\ue000""#);
        assert_eq!(quoted("\u{f8ff}"), r#""\uf8ff""#);
        assert_eq!(quoted("\u{ffff}"), r#""\uffff""#);
        assert_eq!(quoted("\u{f0000}"), r#""\U000f0000""#);
        assert_eq!(quoted("\u{10fffd}"), r#""\U0010fffd""#);
        assert_eq!(quoted("\u{f900}"), "\"\u{f900}\"");
    }

    #[test]
    fn test_byte_rows() {
        let config = Config::new();
        let bytes: Vec<u8> = (0..10).collect();
        assert_eq!(
            render(&bytes.reflect(), &config),
            "[]uint8{\n\t0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n\t0x08, 0x09,\n}"
        );

        let short: [u8; 3] = [1, 2, 3];
        assert_eq!(render(&short.reflect(), &config), "[3]uint8{0x01, 0x02, 0x03}");
    }

    #[test]
    fn test_bytes_single_line() {
        let config = Config::single_line();
        let bytes = vec![0xabu8; 12];
        let out = render(&bytes.reflect(), &config);
        assert!(!out.contains('\n'));
        assert!(out.starts_with("[]uint8{0xab, "));
    }

    #[test]
    fn test_list_collapse_threshold() {
        let config = Config::new();
        let inline: Vec<i32> = (0..48).collect();
        assert!(!render(&inline.reflect(), &config).contains('\n'));

        let long: Vec<i32> = (0..49).collect();
        let out = render(&long.reflect(), &config);
        assert!(out.starts_with("[]int32{\n\t0,\n\t1,\n"));
        assert!(out.ends_with("\t48,\n}"));
    }

    #[test]
    fn test_strings_never_inline_in_multiline() {
        let config = Config::new();
        let value = vec!["a", "b"].reflect();
        assert_eq!(render(&value, &config), "[]string{\n\t\"a\",\n\t\"b\",\n}");
        assert_eq!(render(&value, &Config::single_line()), "[]string{\"a\", \"b\"}");
    }

    #[test]
    fn test_empty_list_multiline() {
        let config = Config::new();
        assert_eq!(render(&Vec::<String>::new().reflect(), &config), "[]string{}");
    }

    #[test]
    fn test_nil_slice_at_root() {
        let config = Config::new();
        let none: Option<Vec<String>> = None;
        assert_eq!(render(&none.reflect(), &config), "[]string(nil)");
    }

    #[test]
    fn test_interface_elements_keep_types() {
        let config = Config::single_line();
        let items: Vec<Box<dyn Reflect>> = vec![Box::new(1u16), Box::new("x")];
        assert_eq!(render(&items.reflect(), &config), "[]interface {}{1, \"x\"}");

        let named = 3u8.reflect().renamed("main", "Level");
        let value = Value::slice(Type::any(), vec![named]);
        assert_eq!(render(&value, &config), "[]interface {}{Level(3)}");
    }

    #[test]
    fn test_map_layout() {
        let mut map = indexmap::IndexMap::new();
        map.insert("one", 1i64);
        map.insert("two", 2i64);
        let value = map.reflect();

        assert_eq!(
            render(&value, &Config::new()),
            "map[string]int64{\n\t\"one\": 1,\n\t\"two\": 2,\n}"
        );
        assert_eq!(
            render(&value, &Config::single_line()),
            "map[string]int64{\"one\": 1, \"two\": 2}"
        );
        let empty: indexmap::IndexMap<String, i64> = indexmap::IndexMap::new();
        assert_eq!(render(&empty.reflect(), &Config::new()), "map[string]int64{}");
    }

    #[test]
    fn test_bare_interface_is_rejected() {
        let config = Config::new();
        let mut renderer = Renderer::new(&config);
        let err = renderer.render(&Value::nil(Type::any())).unwrap_err();
        assert_eq!(err, Error::unsupported_interface("interface {}"));
    }

    #[test]
    fn test_scalar_pointer_is_rejected_even_when_nil() {
        let config = Config::new();
        let none: Option<i32> = None;
        let mut renderer = Renderer::new(&config);
        let err = renderer.render(&none.reflect()).unwrap_err();
        assert_eq!(err, Error::unsupported_pointer("*int32"));
    }

    #[test]
    fn test_pointer_to_composite() {
        let config = Config::single_line();
        assert_eq!(render(&Box::new([1u16, 2]).reflect(), &config), "&[2]uint16{1, 2}");

        let none: Option<Box<[u16; 2]>> = None;
        assert_eq!(render(&none.reflect(), &config), "nil");
    }

    #[test]
    fn test_pointer_elements_drop_ampersand() {
        let config = Config::single_line();
        let items = vec![Box::new(vec![1u16]), Box::new(vec![2u16])];
        assert_eq!(render(&items.reflect(), &config), "[]*[]uint16{{1}, {2}}");
    }

    #[test]
    fn test_mismatch() {
        let config = Config::new();
        let value = Value::new(Type::new(Kind::Int), Data::String("x".into()));
        let mut renderer = Renderer::new(&config);
        assert_eq!(
            renderer.render(&value).unwrap_err(),
            Error::mismatch("int", "signed integer")
        );
    }

    #[test]
    fn test_func_and_chan_render_nil() {
        let config = Config::new();
        let f: fn() = || {};
        assert_eq!(render(&f.reflect(), &config), "func()(nil)");

        let (tx, _rx) = std::sync::mpsc::channel::<u16>();
        assert_eq!(render(&tx.reflect(), &config), "chan<- uint16(nil)");
    }

    #[test]
    fn test_custom_indent() {
        let config = Config::new().with_indent("  ");
        let value = vec![vec![1i32], vec![2]].reflect();
        assert_eq!(render(&value, &config), "[][]int32{\n  {1},\n  {2},\n}");
    }
}
