//! A zero-or-one value with a combinator protocol built on a single fold.
//!
//! `Maybe<T>` plays the role of an optional value. It converts freely to and
//! from `std::option::Option`, and `Maybe::of(None)` collapses to `Empty` the
//! same way a missing value would.
//!
//! Every combinator is derived from [`Maybe::either`], the exhaustive
//! elimination of the two variants.
//!
//! # Examples
//!
//! ```rust
//! use flowty::Maybe;
//!
//! fn parse_port(raw: &str) -> Maybe<u16> {
//!     Maybe::some(raw)
//!         .try_map(|s| s.trim().parse::<u16>())
//!         .filter(|port| *port >= 1024)
//! }
//!
//! assert_eq!(parse_port(" 8080 "), Maybe::some(8080));
//! assert_eq!(parse_port("80"), Maybe::empty());
//! assert_eq!(parse_port("http"), Maybe::empty());
//! ```

use std::fmt;
use std::panic::UnwindSafe;

use crate::error::UnionError;
use crate::trace;
use crate::{Attempt, Either};

/// A value that is either present (`Some(T)`) or absent (`Empty`).
///
/// All `Empty` values compare equal regardless of how they were produced.
///
/// # Example
///
/// ```rust
/// use flowty::Maybe;
///
/// let present = Maybe::of(Some(5));
/// let absent: Maybe<i32> = Maybe::of(None);
///
/// assert_eq!(present, Maybe::Some(5));
/// assert_eq!(absent, Maybe::empty());
/// assert_eq!(present.to_string(), "Some(5)");
/// assert_eq!(absent.to_string(), "Empty");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A present value
    Some(T),
    /// No value
    Empty,
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Create an absent value.
    #[inline]
    pub fn empty() -> Self {
        Maybe::Empty
    }

    /// Normalise an `Option` into a `Maybe`: `None` becomes `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some("x")), Maybe::some("x"));
    /// assert_eq!(Maybe::<&str>::of(None), Maybe::empty());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::Empty,
        }
    }

    /// Run a fallible supplier, keeping its value and discarding any error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::of_try(|| "42".parse::<i32>()), Maybe::some(42));
    /// assert_eq!(Maybe::of_try(|| "x".parse::<i32>()), Maybe::empty());
    /// ```
    pub fn of_try<X, P>(supplier: P) -> Self
    where
        P: FnOnce() -> Result<T, X>,
    {
        match supplier() {
            Ok(value) => Maybe::Some(value),
            Err(_) => {
                trace::failure_captured::<X>("Maybe::of_try");
                Maybe::Empty
            }
        }
    }

    /// Run a supplier, collapsing a panic to `Empty`.
    ///
    /// The panic is still reported by the panic hook; only the value is lost.
    /// Use [`Attempt::catch_unwind`] to keep the panic message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let items: Vec<i32> = vec![1, 2];
    /// assert_eq!(Maybe::catch_unwind(|| items[1]), Maybe::some(2));
    /// assert_eq!(Maybe::catch_unwind(|| items[5]), Maybe::empty());
    /// ```
    pub fn catch_unwind<P>(supplier: P) -> Self
    where
        P: FnOnce() -> T + UnwindSafe,
    {
        Attempt::catch_unwind(supplier).into_maybe()
    }

    // ========== Elimination ==========

    /// Fold both variants into a single value.
    ///
    /// Exactly one of the two functions runs, exactly once. The empty side
    /// receives no payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.either(|v| format!("got {}", v), || "nothing".to_string());
    ///
    /// assert_eq!(describe(Maybe::some(3)), "got 3");
    /// assert_eq!(describe(Maybe::empty()), "nothing");
    /// ```
    #[inline]
    pub fn either<U, S, E>(self, on_some: S, on_empty: E) -> U
    where
        S: FnOnce(T) -> U,
        E: FnOnce() -> U,
    {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::Empty => on_empty(),
        }
    }

    /// Apply a function to the whole union.
    ///
    /// Lets free-function combinators slot into a method chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    /// use flowty::combinators::maybe;
    ///
    /// let m = Maybe::some(2).then(maybe::map(|x: i32| x * 10));
    /// assert_eq!(m, Maybe::some(20));
    /// ```
    #[inline]
    pub fn then<U, G>(self, f: G) -> U
    where
        G: FnOnce(Self) -> U,
    {
        f(self)
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.as_ref().either(|_| true, || false)
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Convert to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::Empty => Maybe::Empty,
        }
    }

    // ========== Transformations ==========

    /// Transform the present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::empty().map(|x| x * 2), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<O, G>(self, f: G) -> Maybe<O>
    where
        G: FnOnce(T) -> O,
    {
        self.either(|value| Maybe::Some(f(value)), Maybe::empty)
    }

    /// Transform the present value with a function that may produce nothing.
    ///
    /// The result is re-normalised through [`Maybe::of`], so a `None` result
    /// collapses to `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let first_char = |s: &str| s.chars().next();
    ///
    /// assert_eq!(Maybe::some("abc").map_of(first_char), Maybe::some('a'));
    /// assert_eq!(Maybe::some("").map_of(first_char), Maybe::empty());
    /// ```
    #[inline]
    pub fn map_of<O, G>(self, f: G) -> Maybe<O>
    where
        G: FnOnce(T) -> Option<O>,
    {
        self.either(|value| Maybe::of(f(value)), Maybe::empty)
    }

    /// Chain a computation that itself returns a `Maybe`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::empty() };
    ///
    /// assert_eq!(Maybe::some(8).flat_map(half), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(half), Maybe::empty());
    /// ```
    #[inline]
    pub fn flat_map<O, G>(self, f: G) -> Maybe<O>
    where
        G: FnOnce(T) -> Maybe<O>,
    {
        self.either(f, Maybe::empty)
    }

    /// Keep the present value only if it satisfies the predicate.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.either(
            |value| {
                if predicate(&value) {
                    Maybe::Some(value)
                } else {
                    Maybe::Empty
                }
            },
            Maybe::empty,
        )
    }

    // ========== Fallible transformations ==========

    /// Transform with a fallible function; an error collapses to `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::some("7").try_map(|s| s.parse::<i32>()), Maybe::some(7));
    /// assert_eq!(Maybe::some("x").try_map(|s| s.parse::<i32>()), Maybe::empty());
    /// ```
    pub fn try_map<O, X, G>(self, f: G) -> Maybe<O>
    where
        G: FnOnce(T) -> Result<O, X>,
    {
        self.either(|value| f(value).map_or(Maybe::Empty, Maybe::Some), Maybe::empty)
    }

    /// Transform with a fallible function; an error is mapped to a replacement value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let parsed = Maybe::some("x").try_map_or_else(|s| s.parse::<i32>(), |_| -1);
    /// assert_eq!(parsed, Maybe::some(-1));
    /// ```
    pub fn try_map_or_else<O, X, G, R>(self, f: G, recovery: R) -> Maybe<O>
    where
        G: FnOnce(T) -> Result<O, X>,
        R: FnOnce(X) -> O,
    {
        self.either(
            |value| match f(value) {
                Ok(output) => Maybe::Some(output),
                Err(error) => Maybe::Some(recovery(error)),
            },
            Maybe::empty,
        )
    }

    /// Chain a fallible computation returning a `Maybe`; an error collapses to `Empty`.
    pub fn try_flat_map<O, X, G>(self, f: G) -> Maybe<O>
    where
        G: FnOnce(T) -> Result<Maybe<O>, X>,
    {
        self.either(|value| f(value).unwrap_or(Maybe::Empty), Maybe::empty)
    }

    /// Chain a fallible computation returning a `Maybe`; an error is mapped to
    /// a replacement `Maybe`.
    pub fn try_flat_map_or_else<O, X, G, R>(self, f: G, recovery: R) -> Maybe<O>
    where
        G: FnOnce(T) -> Result<Maybe<O>, X>,
        R: FnOnce(X) -> Maybe<O>,
    {
        self.either(|value| f(value).unwrap_or_else(recovery), Maybe::empty)
    }

    // ========== Recovery ==========

    /// Replace `Empty` with a supplied value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::empty().recover(|| 0), Maybe::some(0));
    /// assert_eq!(Maybe::some(5).recover(|| 0), Maybe::some(5));
    /// ```
    #[inline]
    pub fn recover<P>(self, supplier: P) -> Self
    where
        P: FnOnce() -> T,
    {
        self.either(Maybe::Some, || Maybe::Some(supplier()))
    }

    /// Replace `Empty` with the value of a fallible supplier; an error leaves it `Empty`.
    pub fn try_recover<X, P>(self, supplier: P) -> Self
    where
        P: FnOnce() -> Result<T, X>,
    {
        self.either(Maybe::Some, || supplier().map_or(Maybe::Empty, Maybe::Some))
    }

    /// Replace `Empty` with the value of a fallible supplier; an error is mapped
    /// to a replacement value.
    pub fn try_recover_or_else<X, P, R>(self, supplier: P, on_error: R) -> Self
    where
        P: FnOnce() -> Result<T, X>,
        R: FnOnce(X) -> T,
    {
        self.either(Maybe::Some, || Maybe::Some(supplier().unwrap_or_else(on_error)))
    }

    // ========== Extractors ==========

    /// Return the present value, or a wrong-variant error on `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).get(), Ok(1));
    /// assert_eq!(
    ///     Maybe::<i32>::empty().get().unwrap_err().to_string(),
    ///     "Maybe is of the wrong variant: Empty"
    /// );
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, UnionError> {
        self.either(Ok, || Err(empty_error()))
    }

    /// Return the present value, panicking on `Empty`.
    ///
    /// # Panics
    ///
    /// Panics with a wrong-variant message if the value is `Empty`.
    #[inline]
    pub fn unwrap(self) -> T {
        self.either(|value| value, || panic!("{}", empty_error()))
    }

    /// Return the present value or a default.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        self.either(|value| value, || default)
    }

    /// Return the present value or compute one.
    #[inline]
    pub fn get_or_from<P>(self, supplier: P) -> T
    where
        P: FnOnce() -> T,
    {
        self.either(|value| value, supplier)
    }

    /// Return the present value, or raise the given error.
    ///
    /// The error is built by the caller whether or not it is used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).get_or_throw_err("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::empty().get_or_throw_err("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn get_or_throw_err<X>(self, error: X) -> Result<T, X> {
        self.either(Ok, || Err(error))
    }

    /// Return the present value, or raise an error built on demand.
    #[inline]
    pub fn get_or_throw_with<X, P>(self, supplier: P) -> Result<T, X>
    where
        P: FnOnce() -> X,
    {
        self.either(Ok, || Err(supplier()))
    }

    // ========== Side effects ==========

    /// Run a procedure on the present value and pass the union through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let m = Maybe::some(3).if_present_peek(|v| seen.push(*v)).map(|v| v + 1);
    ///
    /// assert_eq!(m, Maybe::some(4));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn if_present_peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&T),
    {
        self.either(
            |value| {
                consumer(&value);
                Maybe::Some(value)
            },
            Maybe::empty,
        )
    }

    /// Run a procedure when empty and pass the union through.
    #[inline]
    pub fn if_empty_peek<C>(self, runnable: C) -> Self
    where
        C: FnOnce(),
    {
        self.either(Maybe::Some, || {
            runnable();
            Maybe::Empty
        })
    }

    /// Consume the present value with a procedure.
    #[inline]
    pub fn if_present_do<C>(self, consumer: C)
    where
        C: FnOnce(T),
    {
        self.either(consumer, || ())
    }

    /// Run a procedure when empty.
    #[inline]
    pub fn if_empty_do<C>(self, runnable: C)
    where
        C: FnOnce(),
    {
        self.either(|_| (), runnable)
    }

    // ========== Conversions ==========

    /// Convert into a `std::option::Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.either(Some, || None)
    }

    /// Present values become `Right`; `Empty` becomes a supplied `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::some(1).into_either(|| "none"), Either::right(1));
    /// assert_eq!(Maybe::<i32>::empty().into_either(|| "none"), Either::left("none"));
    /// ```
    #[inline]
    pub fn into_either<L, P>(self, on_empty: P) -> Either<L, T>
    where
        P: FnOnce() -> L,
    {
        self.either(Either::Right, || Either::Left(on_empty()))
    }

    /// Present values become `Success`; `Empty` becomes the given `Failure`.
    #[inline]
    pub fn into_attempt<F>(self, failure: F) -> Attempt<T, F> {
        self.either(Attempt::Success, || Attempt::Failure(failure))
    }

    /// Present values become `Success`; `Empty` becomes a `Failure` built on demand.
    #[inline]
    pub fn into_attempt_with<F, P>(self, supplier: P) -> Attempt<T, F>
    where
        P: FnOnce() -> F,
    {
        self.either(Attempt::Success, || Attempt::Failure(supplier()))
    }

    /// Returns an iterator over the present value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }
}

// Flatten for nested Maybe
impl<T> Maybe<Maybe<T>> {
    /// Flatten a nested `Maybe`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::empty()).flatten(), Maybe::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.either(|inner| inner, Maybe::empty)
    }
}

fn empty_error() -> UnionError {
    UnionError::WrongVariant {
        union: "Maybe",
        state: "Empty".to_string(),
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::Empty`.
    fn default() -> Self {
        Maybe::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => write!(f, "Some({})", value),
            Maybe::Empty => write!(f, "Empty"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Maybe::of)
    }

    proptest! {
        #[test]
        fn prop_functor_identity(m in maybe_strategy()) {
            prop_assert_eq!(m.map(|v| v), m);
        }

        #[test]
        fn prop_functor_composition(m in maybe_strategy()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(m.map(f).map(g), m.map(|v| g(f(v))));
        }

        #[test]
        fn prop_monad_right_identity(m in maybe_strategy()) {
            prop_assert_eq!(m.flat_map(Maybe::some), m);
        }

        #[test]
        fn prop_option_roundtrip(o in proptest::option::of(any::<i32>())) {
            prop_assert_eq!(Maybe::of(o).into_option(), o);
        }
    }
}
