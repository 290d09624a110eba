//! Error types for Go literal rendering.
//!
//! Rendering is a pure computation, so there are no transient failures. The
//! errors here describe input shapes that have no Go literal form:
//!
//! - **Interface values**: a bare (nil) interface reached the renderer in a
//!   position where it cannot be omitted
//! - **Pointers to scalars**: Go has no `&` form for primitive constants
//! - **Mismatched values**: a hand-built [`Value`](crate::Value) whose data
//!   disagrees with its type
//! - **Serde bridge errors**: shapes serde can express but Go cannot
//! - **I/O errors**: failures of the writer passed to [`to_writer`](crate::to_writer)
//!
//! ## Examples
//!
//! ```rust
//! use gorepr::{to_string, Error};
//!
//! let value: Option<i32> = Some(1);
//! let err = to_string(&value).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedPointer { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// A bare interface value reached the generic dispatch
    #[error("cannot render a bare interface value of type {ty}")]
    UnsupportedInterface { ty: String },

    /// Pointer to a non-composite type
    #[error("pointers to non-composite types are not supported: {ty}")]
    UnsupportedPointer { ty: String },

    /// Value data disagrees with its declared kind
    #[error("value of type {ty} does not hold {expected} data")]
    Mismatch { ty: String, expected: &'static str },

    /// Unsupported type for the serde bridge
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an interface error for the given rendered type name.
    pub fn unsupported_interface(ty: impl Into<String>) -> Self {
        Error::UnsupportedInterface { ty: ty.into() }
    }

    /// Creates a pointer error for the given rendered pointer type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::Error;
    ///
    /// let err = Error::unsupported_pointer("*int");
    /// assert!(err.to_string().contains("*int"));
    /// ```
    pub fn unsupported_pointer(ty: impl Into<String>) -> Self {
        Error::UnsupportedPointer { ty: ty.into() }
    }

    pub fn mismatch(ty: impl Into<String>, expected: &'static str) -> Self {
        Error::Mismatch {
            ty: ty.into(),
            expected,
        }
    }

    /// Creates an unsupported type error for serde shapes with no Go literal form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gorepr::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
