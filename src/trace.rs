//! Tracing hooks for unions.
//!
//! With the `tracing` feature enabled, the capturing factories
//! ([`Attempt::of`](crate::Attempt::of), [`Attempt::of_fn`](crate::Attempt::of_fn),
//! [`Attempt::catch_unwind`](crate::Attempt::catch_unwind) and
//! [`Maybe::of_try`](crate::Maybe::of_try)) emit a `debug` event each time an
//! error is turned into a value, and [`UnionTracingExt::traced`] records which
//! variant a union holds at a point in a chain. Without the feature every hook
//! compiles to nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowty::Attempt;
//! use flowty::trace::UnionTracingExt;
//!
//! let port = Attempt::of(|| std::env::var("PORT"))
//!     .traced("port lookup")
//!     .get_or_from(|| "8080".to_string());
//! ```

#[cfg(feature = "tracing")]
use crate::{Attempt, Either, Maybe};

/// Record that a capturing factory turned an error of type `X` into a value.
#[inline]
pub(crate) fn failure_captured<X>(factory: &'static str) {
    #[cfg(feature = "tracing")]
    ::tracing::debug!(
        factory,
        failure_type = std::any::type_name::<X>(),
        "failure captured"
    );

    #[cfg(not(feature = "tracing"))]
    let _ = factory;
}

/// Extension trait for emitting a trace event that names a union's variant.
///
/// This trait is only available when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
pub trait UnionTracingExt: Sized {
    /// Name of the variant currently held (`"Some"`, `"Left"`, `"Failure"`, ...).
    fn variant_name(&self) -> &'static str;

    /// Emit a `trace` event naming the held variant and pass the value through.
    fn traced(self, label: &'static str) -> Self {
        ::tracing::trace!(label, variant = self.variant_name(), "union observed");
        self
    }
}

#[cfg(feature = "tracing")]
impl<T> UnionTracingExt for Maybe<T> {
    fn variant_name(&self) -> &'static str {
        self.as_ref().either(|_| "Some", || "Empty")
    }
}

#[cfg(feature = "tracing")]
impl<L, R> UnionTracingExt for Either<L, R> {
    fn variant_name(&self) -> &'static str {
        self.as_ref().either(|_| "Left", |_| "Right")
    }
}

#[cfg(feature = "tracing")]
impl<S, F> UnionTracingExt for Attempt<S, F> {
    fn variant_name(&self) -> &'static str {
        self.as_ref().either(|_| "Success", |_| "Failure")
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_attempt_of_logs_captured_failure() {
        let a = Attempt::of(|| "x".parse::<i32>());
        assert!(a.is_failure());
        assert!(logs_contain("failure captured"));
        assert!(logs_contain("Attempt::of"));
        assert!(logs_contain("ParseIntError"));
    }

    #[traced_test]
    #[test]
    fn test_success_logs_nothing() {
        let a = Attempt::of(|| "1".parse::<i32>());
        assert!(a.is_success());
        assert!(!logs_contain("failure captured"));
    }

    #[traced_test]
    #[test]
    fn test_maybe_of_try_logs_captured_failure() {
        let m = Maybe::of_try(|| "x".parse::<u8>());
        assert!(m.is_empty());
        assert!(logs_contain("Maybe::of_try"));
    }

    #[traced_test]
    #[test]
    fn test_catch_unwind_logs_captured_panic() {
        let a = Attempt::catch_unwind(|| -> u8 { panic!("boom") });
        assert!(a.is_failure());
        assert!(logs_contain("Attempt::catch_unwind"));
    }

    #[traced_test]
    #[test]
    fn test_traced_passes_value_through() {
        let e: Either<i32, &str> = Either::right("ok");
        assert_eq!(e.traced("checkpoint"), Either::right("ok"));
        assert!(logs_contain("union observed"));
        assert!(logs_contain("Right"));
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Maybe::some(1).variant_name(), "Some");
        assert_eq!(Maybe::<i32>::empty().variant_name(), "Empty");
        assert_eq!(Either::<i32, i32>::left(1).variant_name(), "Left");
        assert_eq!(Attempt::<i32, i32>::failure(1).variant_name(), "Failure");
    }
}
