//! Configuration for Go literal rendering.
//!
//! [`Config`] controls layout (single-line or multi-line), whether zero struct
//! fields are printed, whether list elements repeat their type names, and how
//! package paths are shortened in type names.
//!
//! ## Examples
//!
//! ```rust
//! use gorepr::{reflect_struct, to_string_with_config, Config};
//!
//! pub struct Point { pub x: i32, pub y: i32 }
//! reflect_struct!("main", Point { X: x, Y: y });
//!
//! let point = Point { x: 1, y: 0 };
//!
//! let config = Config::new().with_single_line(true);
//! assert_eq!(to_string_with_config(&point, &config).unwrap(), "Point{X: 1}");
//!
//! let config = Config::single_line().with_omit_zero_fields(false);
//! assert_eq!(to_string_with_config(&point, &config).unwrap(), "Point{X: 1, Y: 0}");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Package path of the program entry point. Stripped from type names by default.
pub const MAIN_PACKAGE: &str = "main";

/// Configuration for rendering values as Go literals.
///
/// # Package map
///
/// `package_map` maps fully-qualified package paths to short aliases:
///
/// - a path absent from the map keeps Go's default qualifier (the last path
///   segment), e.g. `github.com/mitranim/repr/test` renders as `test.Abi`
/// - an empty alias strips the qualifier entirely: `Abi`
/// - any other alias replaces it: `renamed.Abi`
///
/// The default map is `{"main": ""}`.
///
/// # Examples
///
/// ```rust
/// use gorepr::Config;
///
/// let config = Config::new()
///     .with_package("golang.org/x/sys", "sys")
///     .with_indent("    ");
/// assert_eq!(config.package_map.get("golang.org/x/sys").map(String::as_str), Some("sys"));
/// assert!(config.omit_zero_fields);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Put everything on one line instead of indented multi-line output.
    pub single_line: bool,
    /// Omit struct fields holding their type's zero value.
    pub omit_zero_fields: bool,
    /// Repeat the element type name on every composite list element.
    pub force_constructor_name: bool,
    /// Indentation unit for multi-line output, repeated once per level.
    pub indent: String,
    /// Fully-qualified package path to display alias.
    pub package_map: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut package_map = IndexMap::new();
        package_map.insert(MAIN_PACKAGE.to_string(), String::new());
        Config {
            single_line: false,
            omit_zero_fields: true,
            force_constructor_name: false,
            indent: "\t".to_string(),
            package_map,
        }
    }
}

impl Config {
    /// Creates the default configuration (multi-line, tab indent, zero fields
    /// omitted, `main` stripped).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::Config;
    ///
    /// let config = Config::new();
    /// assert!(!config.single_line);
    /// assert_eq!(config.indent, "\t");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default configuration in single-line mode.
    #[must_use]
    pub fn single_line() -> Self {
        Config {
            single_line: true,
            ..Default::default()
        }
    }

    /// Returns the process-wide default configuration.
    ///
    /// The instance is built once and never mutated; entry points without an
    /// explicit config render with it.
    pub fn global() -> &'static Config {
        static DEFAULT: OnceLock<Config> = OnceLock::new();
        DEFAULT.get_or_init(Config::default)
    }

    #[must_use]
    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    /// Sets whether zero-valued struct fields are omitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::Config;
    ///
    /// let config = Config::new().with_omit_zero_fields(false);
    /// assert!(!config.omit_zero_fields);
    /// ```
    #[must_use]
    pub fn with_omit_zero_fields(mut self, omit: bool) -> Self {
        self.omit_zero_fields = omit;
        self
    }

    #[must_use]
    pub fn with_force_constructor_name(mut self, force: bool) -> Self {
        self.force_constructor_name = force;
        self
    }

    /// Sets the indentation unit used by multi-line output.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Adds or replaces one package alias.
    #[must_use]
    pub fn with_package(mut self, path: impl Into<String>, alias: impl Into<String>) -> Self {
        self.package_map.insert(path.into(), alias.into());
        self
    }

    /// Replaces the whole package map.
    ///
    /// Passing an empty map keeps every package qualifier, `main` included.
    #[must_use]
    pub fn with_package_map(mut self, package_map: IndexMap<String, String>) -> Self {
        self.package_map = package_map;
        self
    }
}
