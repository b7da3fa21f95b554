//! # Flowty
//!
//! Immutable tagged unions with a uniform combinator protocol.
//!
//! Three sum types cover the usual "value or something else" shapes:
//!
//! - [`Maybe<T>`]: a value or nothing (`Some` / `Empty`)
//! - [`Either<L, R>`]: one of two equally ranked alternatives (`Left` / `Right`)
//! - [`Attempt<S, F>`]: the outcome of an operation (`Success` / `Failure`)
//!
//! Every combinator on these types is built on a single exhaustive
//! elimination method, `either`, which takes one function per variant and
//! calls exactly one of them. Values are never mutated; each combinator
//! consumes its receiver and returns a new union.
//!
//! Fallible functions are plain closures returning `Result`. The capturing
//! factories ([`Attempt::of`], [`Maybe::of_try`]) and the `try_*` combinators
//! turn their `Err` into a union value; nothing else swallows errors.
//!
//! ## Quick Example
//!
//! ```rust
//! use flowty::{Attempt, Maybe};
//!
//! fn parse_port(raw: &str) -> Attempt<u16, String> {
//!     Attempt::of(|| raw.parse::<u16>())
//!         .map_failure(|e| format!("invalid port {:?}: {}", raw, e))
//!         .filter_with(|port| *port >= 1024, |port| format!("port {} is reserved", port))
//! }
//!
//! assert_eq!(parse_port("8080"), Attempt::Success(8080));
//! assert_eq!(parse_port("80"), Attempt::Failure("port 80 is reserved".to_string()));
//!
//! let configured: Maybe<&str> = Maybe::of(None);
//! let port = configured
//!     .into_attempt("PORT is not set".to_string())
//!     .flat_map(parse_port)
//!     .get_or(3000);
//! assert_eq!(port, 3000);
//! ```
//!
//! ## Free-function combinators
//!
//! The [`combinators`] module offers the same operations as functions that
//! return transformers, for use with `then` and [`combinators::compose`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when a factory captures a failure, and
//!   enable `trace::UnionTracingExt`.
//! - `proptest`: `Arbitrary` implementations for all three unions.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod combinators;
pub mod either;
pub mod error;
pub mod maybe;
pub mod testing;
pub mod trace;

// Re-exports
pub use attempt::Attempt;
pub use either::Either;
pub use error::{BoxError, Panicked, UnionError};
pub use maybe::Maybe;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::Attempt;
    pub use crate::either::Either;
    pub use crate::error::{BoxError, Panicked, UnionError};
    pub use crate::maybe::Maybe;

    #[cfg(feature = "tracing")]
    pub use crate::trace::UnionTracingExt;
}
