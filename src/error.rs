//! Error types raised when a union is unwrapped on demand
//!
//! Unions carry their failures as values. The types here only appear at the
//! edges where a caller explicitly asks for a value that may not be there:
//!
//! - [`UnionError`] is returned by branch-specific extraction (`get`,
//!   `get_left`, `get_failure`, ...) on the wrong variant. It is always a
//!   programmer error and carries the rendered state of the union.
//! - [`BoxError`] is what [`Attempt::get_or_throw`](crate::Attempt::get_or_throw)
//!   raises when the stored failure is surfaced as-is.
//! - [`Panicked`] is the failure payload captured by
//!   [`Attempt::catch_unwind`](crate::Attempt::catch_unwind).
//!
//! # Examples
//!
//! ```
//! use flowty::{Either, UnionError};
//!
//! let e: Either<i32, &str> = Either::right("hello");
//! let err = e.get_left().unwrap_err();
//!
//! assert_eq!(err.union_name(), "Either");
//! assert_eq!(err.to_string(), "Either is of the wrong variant: Right(\"hello\")");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// A boxed, thread-safe error trait object.
///
/// Any `E: std::error::Error + Send + Sync + 'static` converts into it, and so
/// do `String` and `&str` (wrapped in an opaque error carrying the message).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error raised when a union is unwrapped on a branch it does not hold.
///
/// `state` is the `Debug` rendering of the branch that was actually held, so
/// it reads `Failure("boom")` where the `Display` form would read
/// `Failure(boom)`. Only `Debug` is required of that payload, which keeps the
/// extractors usable for payloads without a `Display` impl. The branch that
/// was asked for is never rendered.
///
/// # Examples
///
/// ```
/// use flowty::{Attempt, UnionError};
///
/// let a: Attempt<i32, &str> = Attempt::failure("boom");
/// match a.get() {
///     Err(UnionError::WrongVariant { union, state }) => {
///         assert_eq!(union, "Attempt");
///         assert_eq!(state, "Failure(\"boom\")");
///     }
///     Ok(_) => panic!("expected a wrong-variant error"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionError {
    /// A branch-specific extraction was called on the other branch.
    WrongVariant {
        /// Name of the union type (`Maybe`, `Either`, `Attempt`).
        union: &'static str,
        /// Debug rendering of the union at the time of the call.
        state: String,
    },
}

impl UnionError {
    /// Build a wrong-variant error from the union being unwrapped.
    pub fn wrong_variant(union: &'static str, value: &impl fmt::Debug) -> Self {
        UnionError::WrongVariant {
            union,
            state: format!("{:?}", value),
        }
    }

    /// Name of the union type that was unwrapped.
    pub fn union_name(&self) -> &'static str {
        match self {
            UnionError::WrongVariant { union, .. } => *union,
        }
    }

    /// Rendered state of the union that was unwrapped.
    pub fn state(&self) -> &str {
        match self {
            UnionError::WrongVariant { state, .. } => state,
        }
    }
}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnionError::WrongVariant { union, state } => {
                write!(f, "{} is of the wrong variant: {}", union, state)
            }
        }
    }
}

impl StdError for UnionError {}

/// A panic captured at an [`Attempt::catch_unwind`](crate::Attempt::catch_unwind)
/// boundary.
///
/// Only the panic message survives the capture. Payloads that are neither
/// `&str` nor `String` are reported with a placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create a captured panic with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Panicked {
            message: message.into(),
        }
    }

    /// Extract the message from a panic payload returned by
    /// [`std::panic::catch_unwind`].
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panic with a non-string payload".to_string(),
            },
        };
        Panicked { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Panicked {}
