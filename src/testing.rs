//! Testing utilities for code built on flowty's unions.
//!
//! This module provides assertion macros that report the unexpected variant's
//! payload on failure, and, with the `proptest` feature, `Arbitrary`
//! implementations for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use flowty::{Attempt, Either, Maybe};
//! use flowty::{assert_failure, assert_right, assert_some, assert_success};
//!
//! assert_success!(Attempt::<_, String>::success(42));
//! assert_success!(Attempt::<_, String>::success(42), 42);
//! assert_failure!(Attempt::<i32, _>::failure("boom"));
//! assert_some!(Maybe::some('x'), 'x');
//! assert_right!(Either::<i32, _>::right("r"));
//! ```

/// Assert that an attempt succeeded, optionally with a given value.
///
/// Panics with the failure payload if the attempt is a `Failure`.
///
/// # Example
///
/// ```rust
/// use flowty::{Attempt, assert_success};
///
/// let a = Attempt::<_, &str>::success(42);
/// assert_success!(a);
/// assert_success!(a.map(|v| v + 1), 43);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($attempt:expr) => {
        match $attempt {
            $crate::Attempt::Success(_) => {}
            $crate::Attempt::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
    ($attempt:expr, $expected:expr) => {
        match $attempt {
            $crate::Attempt::Success(v) => assert_eq!(v, $expected),
            $crate::Attempt::Failure(e) => {
                panic!("Expected Success({:?}), got Failure: {:?}", $expected, e);
            }
        }
    };
}

/// Assert that an attempt failed, optionally with a given failure.
///
/// Panics with the success value if the attempt is a `Success`.
///
/// # Example
///
/// ```rust
/// use flowty::{Attempt, assert_failure};
///
/// let a = Attempt::<i32, _>::failure("boom");
/// assert_failure!(a);
/// assert_failure!(a, "boom");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($attempt:expr) => {
        match $attempt {
            $crate::Attempt::Failure(_) => {}
            $crate::Attempt::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
    ($attempt:expr, $expected:expr) => {
        match $attempt {
            $crate::Attempt::Failure(e) => assert_eq!(e, $expected),
            $crate::Attempt::Success(v) => {
                panic!("Expected Failure({:?}), got Success: {:?}", $expected, v);
            }
        }
    };
}

/// Assert that a maybe holds a value, optionally equal to the given one.
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        if let $crate::Maybe::Empty = $maybe {
            panic!("Expected Some, got Empty");
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $maybe {
            $crate::Maybe::Some(v) => assert_eq!(v, $expected),
            $crate::Maybe::Empty => panic!("Expected Some({:?}), got Empty", $expected),
        }
    };
}

/// Assert that a maybe is empty.
///
/// # Example
///
/// ```rust
/// use flowty::{Maybe, assert_empty};
///
/// assert_empty!(Maybe::some(3).filter(|v| *v > 5));
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($maybe:expr) => {
        if let $crate::Maybe::Some(v) = $maybe {
            panic!("Expected Empty, got Some: {:?}", v);
        }
    };
}

/// Assert that an either is on the left side, optionally with a given value.
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        if let $crate::Either::Right(r) = $either {
            panic!("Expected Left, got Right: {:?}", r);
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(l) => assert_eq!(l, $expected),
            $crate::Either::Right(r) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, r);
            }
        }
    };
}

/// Assert that an either is on the right side, optionally with a given value.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        if let $crate::Either::Left(l) = $either {
            panic!("Expected Right, got Left: {:?}", l);
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(r) => assert_eq!(r, $expected),
            $crate::Either::Left(l) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, l);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Attempt, Either, Maybe};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(Maybe::of)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::Left),
            any_with::<R>(r_params).prop_map(Either::Right),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Attempt<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Attempt::Success),
            any_with::<F>(f_params).prop_map(Attempt::Failure),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Attempt, Either, Maybe};

    #[test]
    fn assert_success_macro() {
        let a = Attempt::<_, String>::success(42);
        assert_success!(a.clone());
        assert_success!(a, 42);
    }

    #[test]
    fn assert_failure_macro() {
        let a = Attempt::<i32, _>::failure("error".to_string());
        assert_failure!(a.clone());
        assert_failure!(a, "error".to_string());
    }

    #[test]
    fn assert_maybe_macros() {
        assert_some!(Maybe::some(1));
        assert_some!(Maybe::some(1), 1);
        assert_empty!(Maybe::<i32>::empty());
    }

    #[test]
    fn assert_either_macros() {
        assert_left!(Either::<_, ()>::left(1));
        assert_left!(Either::<_, ()>::left(1), 1);
        assert_right!(Either::<(), _>::right("r"));
        assert_right!(Either::<(), _>::right("r"), "r");
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let a = Attempt::<i32, _>::failure("error");
        assert_success!(a);
    }

    #[test]
    #[should_panic(expected = "Expected Failure(\"boom\"), got Success")]
    fn assert_failure_with_value_panics_on_success() {
        let a = Attempt::<_, &str>::success(42);
        assert_failure!(a, "boom");
    }

    #[test]
    #[should_panic(expected = "Expected Empty, got Some: 5")]
    fn assert_empty_panics_on_some() {
        assert_empty!(Maybe::some(5));
    }

    #[test]
    #[should_panic(expected = "Expected Left, got Right")]
    fn assert_left_panics_on_right() {
        assert_left!(Either::<i32, _>::right("r"));
    }

    #[test]
    #[should_panic(expected = "Expected Right(2), got Left: 1")]
    fn assert_right_with_value_panics_on_left() {
        assert_right!(Either::<i32, i32>::left(1), 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn attempt_arbitrary_generates_valid_instances(
                a in any::<Attempt<i32, String>>()
            ) {
                prop_assert_ne!(a.is_success(), a.is_failure());
            }

            #[test]
            fn maybe_arbitrary_generates_valid_instances(m in any::<Maybe<u8>>()) {
                prop_assert_ne!(m.is_present(), m.is_empty());
            }

            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<u8, bool>>()) {
                prop_assert_ne!(e.is_left(), e.is_right());
            }
        }
    }
}
