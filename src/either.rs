//! A symmetric sum type for representing one of two possible values.
//!
//! # Either vs Attempt
//!
//! `Either<L, R>` has no success/failure semantics and no bias: every
//! operation exists once per side (`map_left`/`map_right`,
//! `flat_map_left`/`flat_map_right`, ...). Use [`Attempt`](crate::Attempt)
//! when one branch is clearly a failure.
//!
//! # Either as a validation result
//!
//! [`Either::filter_left`] and [`Either::filter_right`] re-classify a payload
//! that fails its predicate into the other side, so a chain of filters turns
//! raw input into either an accepted value or a rejection.
//!
//! # Examples
//!
//! ```rust
//! use flowty::Either;
//!
//! // Right holds accepted names, Left holds rejections.
//! fn check(name: &str) -> Either<String, String> {
//!     Either::right(name.to_string())
//!         .filter_right(|n| !n.is_empty(), |_| "empty name".to_string())
//!         .filter_right(|n| n.len() <= 8, |n| format!("{} is too long", n))
//! }
//!
//! assert_eq!(check("ada"), Either::right("ada".to_string()));
//! assert_eq!(check(""), Either::left("empty name".to_string()));
//! assert_eq!(check("grace hopper"), Either::left("grace hopper is too long".to_string()));
//! ```

use std::fmt;

use crate::error::UnionError;
use crate::{Attempt, Maybe};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Neither branch is privileged. The two payloads are typed independently and
/// exactly one of them is populated.
///
/// # Example
///
/// ```rust
/// use flowty::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// // Pattern matching works naturally
/// match left {
///     Either::Left(n) => println!("Got left: {}", n),
///     Either::Right(s) => println!("Got right: {}", s),
/// }
///
/// // Eliminate both variants
/// let result = right.either(
///     |n| format!("number: {}", n),
///     |s| format!("string: {}", s),
/// );
/// assert_eq!(result, "string: hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Elimination ==========

    /// Fold both variants into a single value.
    ///
    /// Exactly one of the two functions runs, exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.either(|x| x.to_string(), |s| s.to_string()), "42");
    /// assert_eq!(right.either(|x| x.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Apply a function to the whole union.
    #[inline]
    pub fn then<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        self.as_ref().either(|_| true, |_| false)
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Convert to `Either<&L, &R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let e: Either<i32, String> = Either::left(42);
    /// let e_ref: Either<&i32, &String> = e.as_ref();
    /// assert_eq!(e_ref, Either::left(&42));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let mut e: Either<i32, String> = Either::left(42);
    /// if let Either::Left(l) = e.as_mut() {
    ///     *l = 100;
    /// }
    /// assert_eq!(e, Either::left(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(21);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(42));
    /// assert_eq!(right.map_left(|x| x * 2), Either::right("hello"));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.either(|l| Either::Left(f(l)), Either::Right)
    }

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("hello");
    /// let right: Either<&str, i32> = Either::right(21);
    ///
    /// assert_eq!(left.map_right(|x| x * 2), Either::left("hello"));
    /// assert_eq!(right.map_right(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.either(Either::Left, |r| Either::Right(f(r)))
    }

    /// Transform both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.bimap(|x| x + 1, |s| s.len()), Either::left(2));
    /// assert_eq!(right.bimap(|x| x + 1, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        self.either(|l| Either::Left(f(l)), |r| Either::Right(g(r)))
    }

    /// Swap Left and Right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.invert(), Either::right(42));
    /// assert_eq!(right.invert(), Either::left("hello"));
    /// ```
    #[inline]
    pub fn invert(self) -> Either<R, L> {
        self.either(Either::Right, Either::Left)
    }

    /// Chain a computation on the left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("ok");
    ///
    /// assert_eq!(left.flat_map_left(|_| Either::<i32, &str>::right("recovered")), Either::right("recovered"));
    /// assert_eq!(right.flat_map_left(|x| Either::<i32, &str>::left(x * 2)), Either::right("ok"));
    /// ```
    #[inline]
    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.either(f, Either::Right)
    }

    /// Chain a computation on the right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(21);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.flat_map_right(|x| Either::right(x * 2)), Either::right(42));
    /// assert_eq!(left.flat_map_right(|x| Either::right(x * 2)), Either::left("error"));
    /// ```
    #[inline]
    pub fn flat_map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.either(Either::Left, f)
    }

    // ========== Fallible transformations ==========

    /// Transform the left value with a fallible function.
    ///
    /// An error is mapped to a replacement left value; the union never drops it
    /// silently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let ok: Either<&str, ()> = Either::left("7");
    /// let bad: Either<&str, ()> = Either::left("seven");
    ///
    /// assert_eq!(ok.try_map_left(|s| s.parse::<i32>(), |_| -1), Either::left(7));
    /// assert_eq!(bad.try_map_left(|s| s.parse::<i32>(), |_| -1), Either::left(-1));
    /// ```
    pub fn try_map_left<L2, X, F, E>(self, f: F, on_error: E) -> Either<L2, R>
    where
        F: FnOnce(L) -> Result<L2, X>,
        E: FnOnce(X) -> L2,
    {
        self.either(|l| Either::Left(f(l).unwrap_or_else(on_error)), Either::Right)
    }

    /// Transform the right value with a fallible function.
    ///
    /// An error is mapped to a replacement right value.
    pub fn try_map_right<R2, X, F, E>(self, f: F, on_error: E) -> Either<L, R2>
    where
        F: FnOnce(R) -> Result<R2, X>,
        E: FnOnce(X) -> R2,
    {
        self.either(Either::Left, |r| Either::Right(f(r).unwrap_or_else(on_error)))
    }

    /// Chain a fallible computation on the left value.
    ///
    /// An error is mapped to a whole replacement `Either`, so it may land on
    /// either side.
    pub fn try_flat_map_left<L2, X, F, E>(self, f: F, on_error: E) -> Either<L2, R>
    where
        F: FnOnce(L) -> Result<Either<L2, R>, X>,
        E: FnOnce(X) -> Either<L2, R>,
    {
        self.either(|l| f(l).unwrap_or_else(on_error), Either::Right)
    }

    /// Chain a fallible computation on the right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let parse = |s: &str| s.parse::<i32>().map(Either::right);
    /// let reject = |e: std::num::ParseIntError| Either::left(e.to_string());
    ///
    /// let ok: Either<String, &str> = Either::right("5");
    /// assert_eq!(ok.try_flat_map_right(parse, reject), Either::right(5));
    ///
    /// let bad: Either<String, &str> = Either::right("five");
    /// assert!(bad.try_flat_map_right(parse, reject).is_left());
    /// ```
    pub fn try_flat_map_right<R2, X, F, E>(self, f: F, on_error: E) -> Either<L, R2>
    where
        F: FnOnce(R) -> Result<Either<L, R2>, X>,
        E: FnOnce(X) -> Either<L, R2>,
    {
        self.either(Either::Left, |r| f(r).unwrap_or_else(on_error))
    }

    // ========== Re-classification ==========

    /// Keep a left value that satisfies the predicate; otherwise move it to the
    /// right side through `on_false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let even: Either<i32, String> = Either::left(4);
    /// let odd: Either<i32, String> = Either::left(3);
    ///
    /// assert_eq!(even.filter_left(|n| n % 2 == 0, |n| format!("{} is odd", n)), Either::left(4));
    /// assert_eq!(odd.filter_left(|n| n % 2 == 0, |n| format!("{} is odd", n)), Either::right("3 is odd".to_string()));
    /// ```
    pub fn filter_left<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&L) -> bool,
        F: FnOnce(L) -> R,
    {
        self.either(
            |l| {
                if predicate(&l) {
                    Either::Left(l)
                } else {
                    Either::Right(on_false(l))
                }
            },
            Either::Right,
        )
    }

    /// Keep a right value that satisfies the predicate; otherwise move it to the
    /// left side through `on_false`.
    pub fn filter_right<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        self.either(Either::Left, |r| {
            if predicate(&r) {
                Either::Right(r)
            } else {
                Either::Left(on_false(r))
            }
        })
    }

    /// Force a right value onto the left side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let e: Either<usize, &str> = Either::right("four");
    /// assert_eq!(e.recover_to_left(|s| s.len()), Either::left(4));
    /// ```
    #[inline]
    pub fn recover_to_left<F>(self, f: F) -> Self
    where
        F: FnOnce(R) -> L,
    {
        self.either(Either::Left, |r| Either::Left(f(r)))
    }

    /// Force a left value onto the right side.
    #[inline]
    pub fn recover_to_right<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        self.either(|l| Either::Right(f(l)), Either::Right)
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::{Either, Maybe};
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.into_left(), Maybe::some(42));
    /// assert_eq!(right.into_left(), Maybe::empty());
    /// ```
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        self.either(Maybe::Some, |_| Maybe::Empty)
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        self.either(|_| Maybe::Empty, Maybe::Some)
    }

    /// Return the left value, or a wrong-variant error on `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.get_left(), Ok(42));
    ///
    /// let right: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(right.get_left().unwrap_err().state(), "Right(\"hello\")");
    /// ```
    pub fn get_left(self) -> Result<L, UnionError>
    where
        R: fmt::Debug,
    {
        self.either(Ok, |r| Err(right_error(r)))
    }

    /// Return the right value, or a wrong-variant error on `Left`.
    pub fn get_right(self) -> Result<R, UnionError>
    where
        L: fmt::Debug,
    {
        self.either(|l| Err(left_error(l)), Ok)
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics with a wrong-variant message carrying the right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.unwrap_left(), 42);
    /// ```
    pub fn unwrap_left(self) -> L
    where
        R: fmt::Debug,
    {
        self.either(|l| l, |r| panic!("{}", right_error(r)))
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics with a wrong-variant message carrying the left value.
    pub fn unwrap_right(self) -> R
    where
        L: fmt::Debug,
    {
        self.either(|l| panic!("{}", left_error(l)), |r| r)
    }

    /// Return the left value or a default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.get_left_or(0), 42);
    /// assert_eq!(right.get_left_or(0), 0);
    /// ```
    #[inline]
    pub fn get_left_or(self, default: L) -> L {
        self.either(|l| l, |_| default)
    }

    /// Return the right value or a default.
    #[inline]
    pub fn get_right_or(self, default: R) -> R {
        self.either(|_| default, |r| r)
    }

    /// Return the left value or compute one, ignoring the right payload.
    #[inline]
    pub fn get_left_or_from<P>(self, supplier: P) -> L
    where
        P: FnOnce() -> L,
    {
        self.either(|l| l, |_| supplier())
    }

    /// Return the right value or compute one, ignoring the left payload.
    #[inline]
    pub fn get_right_or_from<P>(self, supplier: P) -> R
    where
        P: FnOnce() -> R,
    {
        self.either(|_| supplier(), |r| r)
    }

    /// Return the left value or compute it from the right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.get_left_or_recover(|s| s.len() as i32), 42);
    /// assert_eq!(right.get_left_or_recover(|s| s.len() as i32), 5);
    /// ```
    #[inline]
    pub fn get_left_or_recover<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.either(|l| l, f)
    }

    /// Return the right value or compute it from the left.
    #[inline]
    pub fn get_right_or_recover<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.either(f, |r| r)
    }

    // ========== Side effects ==========

    /// Inspect the left value and pass the union through.
    #[inline]
    pub fn on_left_peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&L),
    {
        self.either(
            |l| {
                consumer(&l);
                Either::Left(l)
            },
            Either::Right,
        )
    }

    /// Inspect the right value and pass the union through.
    #[inline]
    pub fn on_right_peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&R),
    {
        self.either(Either::Left, |r| {
            consumer(&r);
            Either::Right(r)
        })
    }

    /// Inspect whichever value is present and pass the union through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let mut log = Vec::new();
    /// let e: Either<i32, &str> = Either::left(1);
    /// let e = e.on_either_peek(|l| log.push(format!("left {}", l)), |_| {});
    ///
    /// assert_eq!(e, Either::left(1));
    /// assert_eq!(log, vec!["left 1".to_string()]);
    /// ```
    #[inline]
    pub fn on_either_peek<C, D>(self, on_left: C, on_right: D) -> Self
    where
        C: FnOnce(&L),
        D: FnOnce(&R),
    {
        self.either(
            |l| {
                on_left(&l);
                Either::Left(l)
            },
            |r| {
                on_right(&r);
                Either::Right(r)
            },
        )
    }

    /// Consume the left value with a procedure.
    #[inline]
    pub fn on_left_do<C>(self, consumer: C)
    where
        C: FnOnce(L),
    {
        self.either(consumer, |_| ())
    }

    /// Consume the right value with a procedure.
    #[inline]
    pub fn on_right_do<C>(self, consumer: C)
    where
        C: FnOnce(R),
    {
        self.either(|_| (), consumer)
    }

    /// Consume whichever value is present.
    #[inline]
    pub fn on_either_do<C, D>(self, on_left: C, on_right: D)
    where
        C: FnOnce(L),
        D: FnOnce(R),
    {
        self.either(on_left, on_right)
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.into_result(), Ok(42));
    /// assert_eq!(left.into_result(), Err("error"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.either(Err, Ok)
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to Attempt (Right becomes Success, Left becomes Failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowty::{Attempt, Either};
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.into_attempt(), Attempt::Success(42));
    /// assert_eq!(left.into_attempt(), Attempt::Failure("error"));
    /// ```
    #[inline]
    pub fn into_attempt(self) -> Attempt<R, L> {
        self.either(Attempt::Failure, Attempt::Success)
    }
}

fn left_error<L: fmt::Debug>(l: L) -> UnionError {
    UnionError::wrong_variant("Either", &Either::<L, ()>::Left(l))
}

fn right_error<R: fmt::Debug>(r: R) -> UnionError {
    UnionError::wrong_variant("Either", &Either::<(), R>::Right(r))
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use flowty::either::{Either, partition};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        item.either(|l| lefts.push(l), |r| rights.push(r));
    }

    (lefts, rights)
}

/// Extract all Left values from an iterator.
///
/// # Example
///
/// ```rust
/// use flowty::either::{Either, lefts};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
/// ];
///
/// let left_values: Vec<_> = lefts(items).collect();
/// assert_eq!(left_values, vec![1, 2]);
/// ```
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().flat_map(|e| e.into_left())
}

/// Extract all Right values from an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().flat_map(|e| e.into_right())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn either_strategy() -> impl Strategy<Value = Either<i32, i32>> {
        prop_oneof![
            any::<i32>().prop_map(Either::left),
            any::<i32>().prop_map(Either::right),
        ]
    }

    proptest! {
        #[test]
        fn prop_invert_involution(e in either_strategy()) {
            prop_assert_eq!(e.invert().invert(), e);
        }

        #[test]
        fn prop_functor_identity(e in either_strategy()) {
            prop_assert_eq!(e.map_right(|v| v).map_left(|v| v), e);
        }

        #[test]
        fn prop_functor_composition(e in either_strategy()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            prop_assert_eq!(e.map_right(f).map_right(g), e.map_right(|v| g(f(v))));
            prop_assert_eq!(e.map_left(f).map_left(g), e.map_left(|v| g(f(v))));
        }

        #[test]
        fn prop_result_roundtrip(e in either_strategy()) {
            let result: Result<i32, i32> = e.into();
            let back: Either<i32, i32> = result.into();
            prop_assert_eq!(back, e);
        }

        #[test]
        fn prop_bimap_invert_commutes(e in either_strategy()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            prop_assert_eq!(e.bimap(f, g).invert(), e.invert().bimap(g, f));
        }
    }
}
