//! Success/failure union with error-capturing construction
//!
//! `Attempt<S, F>` has the same shape as [`Either`](crate::Either), with a
//! success/failure reading of its two branches and factories that turn a
//! raised error into a value.
//!
//! # Examples
//!
//! ## Capturing a fallible computation
//!
//! ```
//! use flowty::Attempt;
//!
//! let parsed = Attempt::of(|| "42".parse::<i32>());
//! assert_eq!(parsed, Attempt::Success(42));
//!
//! let failed = Attempt::of(|| "forty-two".parse::<i32>());
//! assert!(failed.is_failure());
//! ```
//!
//! ## Chaining
//!
//! ```
//! use flowty::Attempt;
//!
//! let price = Attempt::<_, String>::success(250)
//!     .filter_with(|cents| *cents > 0, |cents| format!("{} is not a price", cents))
//!     .map(|cents| cents as f64 / 100.0)
//!     .get_or(0.0);
//!
//! assert_eq!(price, 2.5);
//! ```
//!
//! ## Recovering inside the success branch
//!
//! A failed transformation of a success recovers into another success; it is
//! never demoted to a failure implicitly.
//!
//! ```
//! use flowty::Attempt;
//!
//! let a = Attempt::<&str, ()>::success("n/a")
//!     .try_map(|s| s.parse::<i32>(), |_| 0);
//!
//! assert_eq!(a, Attempt::Success(0));
//! ```

use std::fmt;
use std::panic::UnwindSafe;

use crate::error::{BoxError, Panicked, UnionError};
use crate::trace;
use crate::{Either, Maybe};

/// An outcome that either succeeded with `S` or failed with `F`.
///
/// `F` is usually an error type but is not required to be one.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `F` - The type of the failure value
///
/// # Examples
///
/// ```
/// use flowty::Attempt;
///
/// let ok = Attempt::<_, String>::success(1);
/// let err = Attempt::<i32, _>::failure("boom".to_string());
///
/// assert_eq!(ok.to_string(), "Success(1)");
/// assert_eq!(err.to_string(), "Failure(boom)");
/// assert_ne!(Attempt::<i32, i32>::success(1), Attempt::failure(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attempt<S, F> {
    /// The computation succeeded
    Success(S),
    /// The computation failed
    Failure(F),
}

impl<S, F> Attempt<S, F> {
    // ========== Constructors ==========

    /// Create a successful attempt
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<i32, String>::success(42);
    /// assert!(a.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Attempt::Success(value)
    }

    /// Create a failed attempt
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<i32, &str>::failure("error");
    /// assert!(a.is_failure());
    /// ```
    #[inline]
    pub fn failure(failure: F) -> Self {
        Attempt::Failure(failure)
    }

    /// Run a fallible supplier and capture its outcome.
    ///
    /// `Ok` becomes `Success` and `Err` becomes `Failure`. No error crosses this
    /// boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ArithmeticError(&'static str);
    ///
    /// assert_eq!(Attempt::of(|| Ok::<_, ArithmeticError>(42)), Attempt::Success(42));
    /// assert_eq!(
    ///     Attempt::<i32, _>::of(|| Err(ArithmeticError("x"))),
    ///     Attempt::Failure(ArithmeticError("x"))
    /// );
    /// ```
    pub fn of<P>(supplier: P) -> Self
    where
        P: FnOnce() -> Result<S, F>,
    {
        Self::capture("Attempt::of", supplier())
    }

    /// Lift a fallible function into one that returns an `Attempt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let parse = Attempt::of_fn(|s: &str| s.parse::<u8>());
    ///
    /// assert_eq!(parse("7"), Attempt::Success(7));
    /// assert!(parse("700").is_failure());
    /// ```
    pub fn of_fn<I, G>(f: G) -> impl Fn(I) -> Self
    where
        G: Fn(I) -> Result<S, F>,
    {
        move |input| Self::capture("Attempt::of_fn", f(input))
    }

    /// Convert a `Result` (Ok becomes Success, Err becomes Failure).
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Attempt::Success(value),
            Err(failure) => Attempt::Failure(failure),
        }
    }

    fn capture(factory: &'static str, result: Result<S, F>) -> Self {
        if result.is_err() {
            trace::failure_captured::<F>(factory);
        }
        Attempt::from_result(result)
    }

    // ========== Elimination ==========

    /// Fold both variants into a single value.
    ///
    /// Exactly one of the two functions runs, exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<i32, String>::failure("nope".to_string());
    /// let len = a.either(|v| v as usize, |e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn either<U, G, H>(self, on_success: G, on_failure: H) -> U
    where
        G: FnOnce(S) -> U,
        H: FnOnce(F) -> U,
    {
        match self {
            Attempt::Success(value) => on_success(value),
            Attempt::Failure(failure) => on_failure(failure),
        }
    }

    /// Apply a function to the whole union.
    #[inline]
    pub fn then<U, G>(self, f: G) -> U
    where
        G: FnOnce(Self) -> U,
    {
        f(self)
    }

    /// Check if this attempt succeeded
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_ref().either(|_| true, |_| false)
    }

    /// Check if this attempt failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Convert to `Attempt<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Attempt<&S, &F> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(failure) => Attempt::Failure(failure),
        }
    }

    /// Convert to `Attempt<&mut S, &mut F>`.
    #[inline]
    pub fn as_mut(&mut self) -> Attempt<&mut S, &mut F> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(failure) => Attempt::Failure(failure),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<_, String>::success(5);
    /// assert_eq!(a.map(|x| x * 2), Attempt::Success(10));
    /// ```
    #[inline]
    pub fn map<O, G>(self, f: G) -> Attempt<O, F>
    where
        G: FnOnce(S) -> O,
    {
        self.either(|value| Attempt::Success(f(value)), Attempt::Failure)
    }

    /// Transform the failure value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<i32, _>::failure(vec!["error1", "error2"]);
    /// assert_eq!(a.map_failure(|errors| errors.len()), Attempt::Failure(2));
    /// ```
    #[inline]
    pub fn map_failure<G2, G>(self, f: G) -> Attempt<S, G2>
    where
        G: FnOnce(F) -> G2,
    {
        self.either(Attempt::Success, |failure| Attempt::Failure(f(failure)))
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<O, G2, G, H>(self, on_success: G, on_failure: H) -> Attempt<O, G2>
    where
        G: FnOnce(S) -> O,
        H: FnOnce(F) -> G2,
    {
        self.either(
            |value| Attempt::Success(on_success(value)),
            |failure| Attempt::Failure(on_failure(failure)),
        )
    }

    /// Chain a computation on the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let positive = |x: i32| {
    ///     if x > 0 { Attempt::success(x) } else { Attempt::failure("not positive") }
    /// };
    ///
    /// assert_eq!(Attempt::success(5).flat_map(positive), Attempt::Success(5));
    /// assert_eq!(Attempt::success(-5).flat_map(positive), Attempt::Failure("not positive"));
    /// ```
    #[inline]
    pub fn flat_map<O, G>(self, f: G) -> Attempt<O, F>
    where
        G: FnOnce(S) -> Attempt<O, F>,
    {
        self.either(f, Attempt::Failure)
    }

    /// Chain a computation on the failure value.
    #[inline]
    pub fn flat_map_failure<G2, G>(self, f: G) -> Attempt<S, G2>
    where
        G: FnOnce(F) -> Attempt<S, G2>,
    {
        self.either(Attempt::Success, f)
    }

    // ========== Fallible transformations ==========

    /// Transform the success value with a fallible function.
    ///
    /// An error is mapped to a replacement success value, so the result is
    /// still a `Success`.
    pub fn try_map<O, X, G, H>(self, f: G, on_error: H) -> Attempt<O, F>
    where
        G: FnOnce(S) -> Result<O, X>,
        H: FnOnce(X) -> O,
    {
        self.either(
            |value| Attempt::Success(f(value).unwrap_or_else(on_error)),
            Attempt::Failure,
        )
    }

    /// Chain a fallible computation on the success value.
    ///
    /// An error is mapped to a replacement `Attempt`.
    pub fn try_flat_map<O, X, G, H>(self, f: G, on_error: H) -> Attempt<O, F>
    where
        G: FnOnce(S) -> Result<Attempt<O, F>, X>,
        H: FnOnce(X) -> Attempt<O, F>,
    {
        self.either(|value| f(value).unwrap_or_else(on_error), Attempt::Failure)
    }

    /// Transform the failure value with a fallible function.
    ///
    /// An error is mapped to a replacement failure value, so the result is
    /// still a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<(), &str>::failure("404")
    ///     .try_map_failure(|code| code.parse::<u16>(), |_| 500);
    /// assert_eq!(a, Attempt::Failure(404));
    ///
    /// let a = Attempt::<(), &str>::failure("gone")
    ///     .try_map_failure(|code| code.parse::<u16>(), |_| 500);
    /// assert_eq!(a, Attempt::Failure(500));
    /// ```
    pub fn try_map_failure<G2, X, G, H>(self, f: G, on_error: H) -> Attempt<S, G2>
    where
        G: FnOnce(F) -> Result<G2, X>,
        H: FnOnce(X) -> G2,
    {
        self.either(Attempt::Success, |failure| {
            Attempt::Failure(f(failure).unwrap_or_else(on_error))
        })
    }

    /// Chain a fallible computation on the failure value.
    pub fn try_flat_map_failure<G2, X, G, H>(self, f: G, on_error: H) -> Attempt<S, G2>
    where
        G: FnOnce(F) -> Result<Attempt<S, G2>, X>,
        H: FnOnce(X) -> Attempt<S, G2>,
    {
        self.either(Attempt::Success, |failure| f(failure).unwrap_or_else(on_error))
    }

    // ========== Recovery ==========

    /// Promote a failure to a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<usize, &str>::failure("abc").recover(|e| e.len());
    /// assert_eq!(a, Attempt::Success(3));
    /// ```
    #[inline]
    pub fn recover<G>(self, f: G) -> Self
    where
        G: FnOnce(F) -> S,
    {
        self.either(Attempt::Success, |failure| Attempt::Success(f(failure)))
    }

    /// Promote a failure to a success with a fallible function.
    ///
    /// An error from `f` is mapped to a replacement success value.
    pub fn try_recover<X, G, H>(self, f: G, on_error: H) -> Self
    where
        G: FnOnce(F) -> Result<S, X>,
        H: FnOnce(X) -> S,
    {
        self.either(Attempt::Success, |failure| {
            Attempt::Success(f(failure).unwrap_or_else(on_error))
        })
    }

    // ========== Filtering ==========

    /// Demote a success that fails the predicate to the given failure.
    ///
    /// The failure value is built before the call, whether or not it is used.
    /// Use [`Attempt::filter_from`] to build it only when needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let big = Attempt::<i32, &str>::success(10).filter(|v| *v > 5, "too small");
    /// let small = Attempt::<i32, &str>::success(3).filter(|v| *v > 5, "too small");
    ///
    /// assert_eq!(big, Attempt::Success(10));
    /// assert_eq!(small, Attempt::Failure("too small"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        self.filter_from(predicate, || failure)
    }

    /// Demote a success that fails the predicate to a failure built on demand.
    #[inline]
    pub fn filter_from<P, G>(self, predicate: P, supplier: G) -> Self
    where
        P: FnOnce(&S) -> bool,
        G: FnOnce() -> F,
    {
        self.filter_with(predicate, |_| supplier())
    }

    /// Demote a success that fails the predicate to a failure derived from it.
    pub fn filter_with<P, G>(self, predicate: P, mapper: G) -> Self
    where
        P: FnOnce(&S) -> bool,
        G: FnOnce(&S) -> F,
    {
        self.either(
            |value| {
                if predicate(&value) {
                    Attempt::Success(value)
                } else {
                    Attempt::Failure(mapper(&value))
                }
            },
            Attempt::Failure,
        )
    }

    // ========== Extractors ==========

    /// Return the success value, or a wrong-variant error on `Failure`.
    pub fn get(self) -> Result<S, UnionError>
    where
        F: fmt::Debug,
    {
        self.either(Ok, |failure| Err(failure_error(failure)))
    }

    /// Return the success value, panicking on `Failure`.
    ///
    /// # Panics
    ///
    /// Panics with the rendered failure if the attempt failed.
    pub fn unwrap(self) -> S
    where
        F: fmt::Debug,
    {
        self.either(|value| value, |failure| panic!("{}", failure_error(failure)))
    }

    /// Return the success value or a default.
    #[inline]
    pub fn get_or(self, default: S) -> S {
        self.either(|value| value, |_| default)
    }

    /// Return the success value or compute one, ignoring the failure.
    #[inline]
    pub fn get_or_from<G>(self, supplier: G) -> S
    where
        G: FnOnce() -> S,
    {
        self.either(|value| value, |_| supplier())
    }

    /// Return the success value or compute it from the failure.
    #[inline]
    pub fn get_or_recover<G>(self, f: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        self.either(|value| value, f)
    }

    /// Return the failure value, or a wrong-variant error on `Success`.
    pub fn get_failure(self) -> Result<F, UnionError>
    where
        S: fmt::Debug,
    {
        self.either(|value| Err(success_error(value)), Ok)
    }

    /// Return the failure value, panicking on `Success`.
    ///
    /// # Panics
    ///
    /// Panics with the rendered success if the attempt succeeded.
    pub fn unwrap_failure(self) -> F
    where
        S: fmt::Debug,
    {
        self.either(|value| panic!("{}", success_error(value)), |failure| failure)
    }

    /// Return the failure value or a default.
    #[inline]
    pub fn get_failure_or(self, default: F) -> F {
        self.either(|_| default, |failure| failure)
    }

    /// Return the failure value or compute one, ignoring the success.
    #[inline]
    pub fn get_failure_or_from<G>(self, supplier: G) -> F
    where
        G: FnOnce() -> F,
    {
        self.either(|_| supplier(), |failure| failure)
    }

    // ========== Raising ==========

    /// Return the success value, or raise the stored failure.
    ///
    /// A failure that is an error is raised as itself (and can be downcast
    /// back); a message such as a `String` is wrapped in a generic error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let err = Attempt::<(), _>::failure(io).get_or_throw().unwrap_err();
    /// assert!(err.downcast_ref::<std::io::Error>().is_some());
    ///
    /// let err = Attempt::<(), _>::failure("plain message").get_or_throw().unwrap_err();
    /// assert_eq!(err.to_string(), "plain message");
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> Result<S, BoxError>
    where
        F: Into<BoxError>,
    {
        self.either(Ok, |failure| Err(failure.into()))
    }

    /// Return the success value, or raise the given error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct IllegalState(&'static str);
    ///
    /// let a = Attempt::<i32, &str>::failure("err");
    /// assert_eq!(a.get_or_throw_err(IllegalState("err")), Err(IllegalState("err")));
    /// ```
    #[inline]
    pub fn get_or_throw_err<X>(self, error: X) -> Result<S, X> {
        self.either(Ok, |_| Err(error))
    }

    /// Return the success value, or raise an error built on demand.
    #[inline]
    pub fn get_or_throw_with<X, G>(self, supplier: G) -> Result<S, X>
    where
        G: FnOnce() -> X,
    {
        self.either(Ok, |_| Err(supplier()))
    }

    /// Return the success value, or raise an error translated from the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let a = Attempt::<i32, u16>::failure(404);
    /// assert_eq!(a.get_or_throw_map(|code| format!("HTTP {}", code)), Err("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn get_or_throw_map<X, G>(self, mapper: G) -> Result<S, X>
    where
        G: FnOnce(F) -> X,
    {
        self.either(Ok, |failure| Err(mapper(failure)))
    }

    // ========== Side effects ==========

    /// Inspect the success value and pass the attempt through.
    #[inline]
    pub fn if_success_peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&S),
    {
        self.either(
            |value| {
                consumer(&value);
                Attempt::Success(value)
            },
            Attempt::Failure,
        )
    }

    /// Inspect the failure value and pass the attempt through.
    #[inline]
    pub fn if_failure_peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&F),
    {
        self.either(Attempt::Success, |failure| {
            consumer(&failure);
            Attempt::Failure(failure)
        })
    }

    /// Consume the success value with a procedure.
    #[inline]
    pub fn if_success_do<C>(self, consumer: C)
    where
        C: FnOnce(S),
    {
        self.either(consumer, |_| ())
    }

    /// Consume the failure value with a procedure.
    #[inline]
    pub fn if_failure_do<C>(self, consumer: C)
    where
        C: FnOnce(F),
    {
        self.either(|_| (), consumer)
    }

    // ========== Conversions ==========

    /// Convert this attempt to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// assert_eq!(Attempt::<_, String>::success(42).into_result(), Ok(42));
    /// assert_eq!(Attempt::<i32, _>::failure("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.either(Ok, Err)
    }

    /// Keep the success value, discarding any failure.
    #[inline]
    pub fn into_maybe(self) -> Maybe<S> {
        self.either(Maybe::Some, |_| Maybe::Empty)
    }

    /// Convert to Either (Success becomes Right, Failure becomes Left).
    #[inline]
    pub fn into_either(self) -> Either<F, S> {
        self.either(Either::Right, Either::Left)
    }

    /// Returns an iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.as_ref().into_maybe().into_iter()
    }
}

impl<S> Attempt<S, Panicked> {
    /// Run a supplier and capture a panic as a failure.
    ///
    /// Together with [`Maybe::catch_unwind`], this is the only place a panic
    /// becomes a value. Every other combinator lets panics propagate.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let divisor: i32 = "0".parse().unwrap();
    /// let a = Attempt::catch_unwind(|| 10 / divisor);
    /// assert!(a.get_failure().unwrap().message().contains("divide by zero"));
    ///
    /// assert_eq!(Attempt::catch_unwind(|| 10 / 2), Attempt::Success(5));
    /// ```
    pub fn catch_unwind<P>(supplier: P) -> Self
    where
        P: FnOnce() -> S + UnwindSafe,
    {
        let result = std::panic::catch_unwind(supplier).map_err(Panicked::from_payload);
        Self::capture("Attempt::catch_unwind", result)
    }
}

// Nested success
impl<S, F, G> Attempt<Attempt<S, F>, G> {
    /// Flatten a success that holds another attempt.
    ///
    /// The outer failure is merged into the inner failure type.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowty::Attempt;
    ///
    /// let nested = Attempt::<Attempt<i32, String>, &str>::success(Attempt::success(1));
    /// assert_eq!(nested.flatten(|e| e.to_string()), Attempt::Success(1));
    ///
    /// let outer = Attempt::<Attempt<i32, String>, &str>::failure("outer");
    /// assert_eq!(outer.flatten(|e| e.to_string()), Attempt::Failure("outer".to_string()));
    /// ```
    #[inline]
    pub fn flatten<H>(self, merge: H) -> Attempt<S, F>
    where
        H: FnOnce(G) -> F,
    {
        self.either(|inner| inner, |failure| Attempt::Failure(merge(failure)))
    }
}

// Nested failure
impl<T, S, F> Attempt<T, Attempt<S, F>> {
    /// Flatten a failure that holds another attempt.
    ///
    /// The outer success is merged into the inner success type.
    #[inline]
    pub fn flatten_failure<H>(self, merge: H) -> Attempt<S, F>
    where
        H: FnOnce(T) -> S,
    {
        self.either(|value| Attempt::Success(merge(value)), |inner| inner)
    }
}

// Only the branch actually held is rendered.
fn failure_error<F: fmt::Debug>(failure: F) -> UnionError {
    UnionError::wrong_variant("Attempt", &Attempt::<(), F>::Failure(failure))
}

fn success_error<S: fmt::Debug>(value: S) -> UnionError {
    UnionError::wrong_variant("Attempt", &Attempt::<S, ()>::Success(value))
}

// ========== Trait Implementations ==========

impl<S, F> From<Result<S, F>> for Attempt<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Attempt::from_result(result)
    }
}

impl<S, F> From<Attempt<S, F>> for Result<S, F> {
    fn from(attempt: Attempt<S, F>) -> Self {
        attempt.into_result()
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Attempt<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempt::Success(value) => write!(f, "Success({})", value),
            Attempt::Failure(failure) => write!(f, "Failure({})", failure),
        }
    }
}

impl<S, F> IntoIterator for Attempt<S, F> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_option().into_iter()
    }
}
