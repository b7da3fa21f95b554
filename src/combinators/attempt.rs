//! Free-function combinators over [`Attempt`].
//!
//! # Example
//!
//! ```rust
//! use flowty::Attempt;
//! use flowty::combinators::{attempt, compose};
//!
//! let parse_port = |input: &str| {
//!     let pipeline = compose(
//!         attempt::attempt_of(|s: &str| s.parse::<u16>()),
//!         attempt::map_failure(|e: std::num::ParseIntError| e.to_string()),
//!     );
//!     pipeline(input)
//! };
//!
//! assert_eq!(parse_port("8080"), Attempt::Success(8080));
//! assert!(parse_port("http").is_failure());
//! ```

use std::fmt;

use crate::error::{BoxError, UnionError};
use crate::{Attempt, Either, Maybe};

// ========== Constructors ==========

/// Lift a fallible function into one that returns an `Attempt`.
///
/// The error is captured as the failure; it is never propagated.
pub fn attempt_of<I, O, X, G>(f: G) -> impl FnOnce(I) -> Attempt<O, X>
where
    G: FnOnce(I) -> Result<O, X>,
{
    move |input| Attempt::of(|| f(input))
}

/// Lift a function into one that always succeeds.
pub fn success_of<I, S, F, G>(f: G) -> impl FnOnce(I) -> Attempt<S, F>
where
    G: FnOnce(I) -> S,
{
    move |input| Attempt::Success(f(input))
}

/// Lift a function into one that always fails.
pub fn failure_of<I, S, F, G>(f: G) -> impl FnOnce(I) -> Attempt<S, F>
where
    G: FnOnce(I) -> F,
{
    move |input| Attempt::Failure(f(input))
}

/// Succeed with a value that satisfies the predicate, or fail with `failure`.
///
/// # Example
///
/// ```rust
/// use flowty::Attempt;
/// use flowty::combinators::attempt;
///
/// let adult = attempt::success_if(|age: &u8| *age >= 18, "minor");
/// assert_eq!(adult(21), Attempt::Success(21));
/// ```
pub fn success_if<T, F, P>(predicate: P, failure: F) -> impl FnOnce(T) -> Attempt<T, F>
where
    P: FnOnce(&T) -> bool,
{
    move |value| Attempt::Success(value).filter(predicate, failure)
}

/// Succeed with a value that satisfies the predicate, or fail with a failure
/// derived from the value.
pub fn success_if_with<T, F, P, G>(predicate: P, mapper: G) -> impl FnOnce(T) -> Attempt<T, F>
where
    P: FnOnce(&T) -> bool,
    G: FnOnce(&T) -> F,
{
    move |value| Attempt::Success(value).filter_with(predicate, mapper)
}

// ========== Transformations ==========

/// See [`Attempt::map`].
pub fn map<S, F, O, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> Attempt<O, F>
where
    G: FnOnce(S) -> O,
{
    move |attempt| attempt.map(f)
}

/// See [`Attempt::map_failure`].
pub fn map_failure<S, F, G2, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, G2>
where
    G: FnOnce(F) -> G2,
{
    move |attempt| attempt.map_failure(f)
}

/// See [`Attempt::bimap`].
pub fn bimap<S, F, O, G2, G, H>(
    on_success: G,
    on_failure: H,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<O, G2>
where
    G: FnOnce(S) -> O,
    H: FnOnce(F) -> G2,
{
    move |attempt| attempt.bimap(on_success, on_failure)
}

/// See [`Attempt::flat_map`].
pub fn flat_map<S, F, O, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> Attempt<O, F>
where
    G: FnOnce(S) -> Attempt<O, F>,
{
    move |attempt| attempt.flat_map(f)
}

/// See [`Attempt::flat_map_failure`].
pub fn flat_map_failure<S, F, G2, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, G2>
where
    G: FnOnce(F) -> Attempt<S, G2>,
{
    move |attempt| attempt.flat_map_failure(f)
}

/// See [`Attempt::try_map`].
pub fn try_map<S, F, O, X, G, H>(f: G, on_error: H) -> impl FnOnce(Attempt<S, F>) -> Attempt<O, F>
where
    G: FnOnce(S) -> Result<O, X>,
    H: FnOnce(X) -> O,
{
    move |attempt| attempt.try_map(f, on_error)
}

/// See [`Attempt::try_flat_map`].
pub fn try_flat_map<S, F, O, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<O, F>
where
    G: FnOnce(S) -> Result<Attempt<O, F>, X>,
    H: FnOnce(X) -> Attempt<O, F>,
{
    move |attempt| attempt.try_flat_map(f, on_error)
}

/// See [`Attempt::try_map_failure`].
pub fn try_map_failure<S, F, G2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, G2>
where
    G: FnOnce(F) -> Result<G2, X>,
    H: FnOnce(X) -> G2,
{
    move |attempt| attempt.try_map_failure(f, on_error)
}

/// See [`Attempt::try_flat_map_failure`].
pub fn try_flat_map_failure<S, F, G2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, G2>
where
    G: FnOnce(F) -> Result<Attempt<S, G2>, X>,
    H: FnOnce(X) -> Attempt<S, G2>,
{
    move |attempt| attempt.try_flat_map_failure(f, on_error)
}

// ========== Recovery and filtering ==========

/// See [`Attempt::recover`].
pub fn recover<S, F, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    G: FnOnce(F) -> S,
{
    move |attempt| attempt.recover(f)
}

/// See [`Attempt::try_recover`].
pub fn try_recover<S, F, X, G, H>(f: G, on_error: H) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    G: FnOnce(F) -> Result<S, X>,
    H: FnOnce(X) -> S,
{
    move |attempt| attempt.try_recover(f, on_error)
}

/// See [`Attempt::filter`].
pub fn filter<S, F, P>(predicate: P, failure: F) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    P: FnOnce(&S) -> bool,
{
    move |attempt| attempt.filter(predicate, failure)
}

/// See [`Attempt::filter_from`].
pub fn filter_from<S, F, P, G>(
    predicate: P,
    supplier: G,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    P: FnOnce(&S) -> bool,
    G: FnOnce() -> F,
{
    move |attempt| attempt.filter_from(predicate, supplier)
}

/// See [`Attempt::filter_with`].
pub fn filter_with<S, F, P, G>(
    predicate: P,
    mapper: G,
) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    P: FnOnce(&S) -> bool,
    G: FnOnce(&S) -> F,
{
    move |attempt| attempt.filter_with(predicate, mapper)
}

// ========== Extractors ==========

/// See [`Attempt::get`].
pub fn get<S, F>() -> impl FnOnce(Attempt<S, F>) -> Result<S, UnionError>
where
    F: fmt::Debug,
{
    Attempt::get
}

/// See [`Attempt::get_failure`].
pub fn get_failure<S, F>() -> impl FnOnce(Attempt<S, F>) -> Result<F, UnionError>
where
    S: fmt::Debug,
{
    Attempt::get_failure
}

/// See [`Attempt::get_or`].
pub fn get_or<S, F>(default: S) -> impl FnOnce(Attempt<S, F>) -> S {
    move |attempt| attempt.get_or(default)
}

/// See [`Attempt::get_or_from`].
pub fn get_or_from<S, F, G>(supplier: G) -> impl FnOnce(Attempt<S, F>) -> S
where
    G: FnOnce() -> S,
{
    move |attempt| attempt.get_or_from(supplier)
}

/// See [`Attempt::get_or_recover`].
pub fn get_or_recover<S, F, G>(f: G) -> impl FnOnce(Attempt<S, F>) -> S
where
    G: FnOnce(F) -> S,
{
    move |attempt| attempt.get_or_recover(f)
}

/// See [`Attempt::get_failure_or`].
pub fn get_failure_or<S, F>(default: F) -> impl FnOnce(Attempt<S, F>) -> F {
    move |attempt| attempt.get_failure_or(default)
}

/// See [`Attempt::get_failure_or_from`].
pub fn get_failure_or_from<S, F, G>(supplier: G) -> impl FnOnce(Attempt<S, F>) -> F
where
    G: FnOnce() -> F,
{
    move |attempt| attempt.get_failure_or_from(supplier)
}

/// See [`Attempt::get_or_throw`].
pub fn get_or_throw<S, F>() -> impl FnOnce(Attempt<S, F>) -> Result<S, BoxError>
where
    F: Into<BoxError>,
{
    Attempt::get_or_throw
}

/// See [`Attempt::get_or_throw_err`].
pub fn get_or_throw_err<S, F, X>(error: X) -> impl FnOnce(Attempt<S, F>) -> Result<S, X> {
    move |attempt| attempt.get_or_throw_err(error)
}

/// See [`Attempt::get_or_throw_with`].
pub fn get_or_throw_with<S, F, X, G>(supplier: G) -> impl FnOnce(Attempt<S, F>) -> Result<S, X>
where
    G: FnOnce() -> X,
{
    move |attempt| attempt.get_or_throw_with(supplier)
}

/// See [`Attempt::get_or_throw_map`].
pub fn get_or_throw_map<S, F, X, G>(mapper: G) -> impl FnOnce(Attempt<S, F>) -> Result<S, X>
where
    G: FnOnce(F) -> X,
{
    move |attempt| attempt.get_or_throw_map(mapper)
}

// ========== Side effects and conversions ==========

/// See [`Attempt::if_success_peek`].
pub fn if_success_peek<S, F, C>(consumer: C) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    C: FnOnce(&S),
{
    move |attempt| attempt.if_success_peek(consumer)
}

/// See [`Attempt::if_failure_peek`].
pub fn if_failure_peek<S, F, C>(consumer: C) -> impl FnOnce(Attempt<S, F>) -> Attempt<S, F>
where
    C: FnOnce(&F),
{
    move |attempt| attempt.if_failure_peek(consumer)
}

/// See [`Attempt::if_success_do`].
pub fn if_success_do<S, F, C>(consumer: C) -> impl FnOnce(Attempt<S, F>)
where
    C: FnOnce(S),
{
    move |attempt| attempt.if_success_do(consumer)
}

/// See [`Attempt::if_failure_do`].
pub fn if_failure_do<S, F, C>(consumer: C) -> impl FnOnce(Attempt<S, F>)
where
    C: FnOnce(F),
{
    move |attempt| attempt.if_failure_do(consumer)
}

/// See [`Attempt::into_result`].
pub fn into_result<S, F>() -> impl FnOnce(Attempt<S, F>) -> Result<S, F> {
    Attempt::into_result
}

/// See [`Attempt::into_maybe`].
pub fn into_maybe<S, F>() -> impl FnOnce(Attempt<S, F>) -> Maybe<S> {
    Attempt::into_maybe
}

/// See [`Attempt::into_either`].
pub fn into_either<S, F>() -> impl FnOnce(Attempt<S, F>) -> Either<F, S> {
    Attempt::into_either
}

/// See [`Attempt::flatten`].
pub fn flatten<S, F, G, H>(merge: H) -> impl FnOnce(Attempt<Attempt<S, F>, G>) -> Attempt<S, F>
where
    H: FnOnce(G) -> F,
{
    move |attempt| attempt.flatten(merge)
}

/// See [`Attempt::flatten_failure`].
pub fn flatten_failure<T, S, F, H>(merge: H) -> impl FnOnce(Attempt<T, Attempt<S, F>>) -> Attempt<S, F>
where
    H: FnOnce(T) -> S,
{
    move |attempt| attempt.flatten_failure(merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::compose;
    use std::num::ParseIntError;

    #[test]
    fn test_attempt_of_captures_error() {
        let parse = attempt_of(|s: &str| s.parse::<i32>());
        assert!(parse("nope").is_failure());

        let parse = attempt_of(|s: &str| s.parse::<i32>());
        assert_eq!(parse("12"), Attempt::success(12));
    }

    #[test]
    fn test_success_and_failure_of() {
        assert_eq!(
            success_of::<_, _, (), _>(|s: &str| s.len())("abc"),
            Attempt::success(3)
        );
        assert_eq!(
            failure_of::<_, (), _, _>(|code: u16| format!("HTTP {}", code))(404),
            Attempt::failure("HTTP 404".to_string())
        );
    }

    #[test]
    fn test_success_if() {
        let positive = success_if(|v: &i32| *v > 0, "not positive");
        assert_eq!(positive(-1), Attempt::failure("not positive"));

        let positive = success_if_with(|v: &i32| *v > 0, |v: &i32| format!("{} <= 0", v));
        assert_eq!(positive(-1), Attempt::failure("-1 <= 0".to_string()));
    }

    #[test]
    fn test_matches_method_form() {
        let a: Attempt<i32, &str> = Attempt::success(5);
        assert_eq!(a.then(map(|x: i32| x + 1)), a.map(|x| x + 1));
        assert_eq!(a.then(map_failure(|e: &str| e.len())), Attempt::success(5));
        assert_eq!(
            a.then(bimap(|x: i32| x * 2, |e: &str| e.len())),
            Attempt::success(10)
        );
        assert_eq!(
            a.then(flat_map(|x: i32| {
                Attempt::<u8, &str>::failure(if x > 3 { "big" } else { "small" })
            })),
            Attempt::failure("big")
        );

        let f: Attempt<i32, &str> = Attempt::failure("boom");
        assert_eq!(
            f.then(flat_map_failure(|e: &str| Attempt::<i32, usize>::failure(e.len()))),
            Attempt::failure(4)
        );
        assert_eq!(f.then(recover(|e: &str| e.len() as i32)), Attempt::success(4));
    }

    #[test]
    fn test_try_forms_stay_on_their_side() {
        let a: Attempt<&str, String> = Attempt::success("x");
        assert_eq!(
            a.clone().then(try_map(|s: &str| s.parse::<i32>(), |_| -1)),
            Attempt::success(-1)
        );
        assert!(a
            .then(try_flat_map(
                |s: &str| s.parse::<i32>().map(Attempt::success),
                |e: ParseIntError| Attempt::failure(e.to_string())
            ))
            .is_failure());

        let f: Attempt<i32, &str> = Attempt::failure("503");
        assert_eq!(
            f.then(try_map_failure(|s: &str| s.parse::<u16>(), |_| 500)),
            Attempt::failure(503)
        );
        assert_eq!(
            f.then(try_flat_map_failure(
                |s: &str| s.parse::<u16>().map(Attempt::failure),
                |_| Attempt::success(0)
            )),
            Attempt::failure(503)
        );
        assert_eq!(
            f.then(try_recover(|s: &str| s.parse::<i32>(), |_| 0)),
            Attempt::success(503)
        );
    }

    #[test]
    fn test_filters() {
        let a: Attempt<i32, String> = Attempt::success(3);
        assert_eq!(
            a.clone().then(filter(|v: &i32| *v > 5, "small".to_string())),
            Attempt::failure("small".to_string())
        );
        assert_eq!(
            a.clone().then(filter_from(|v: &i32| *v > 1, || unreachable!())),
            Attempt::success(3)
        );
        assert_eq!(
            a.then(filter_with(|v: &i32| *v > 5, |v: &i32| format!("{} too small", v))),
            Attempt::failure("3 too small".to_string())
        );
    }

    #[test]
    fn test_extractors() {
        let f: Attempt<i32, &str> = Attempt::failure("bad");
        assert_eq!(f.then(get_or(1)), 1);
        assert_eq!(f.then(get_or_from(|| 2)), 2);
        assert_eq!(f.then(get_or_recover(|e: &str| e.len() as i32)), 3);
        assert_eq!(f.then(get_failure_or("default")), "bad");
        assert_eq!(f.then(get_or_throw_err("raised")), Err("raised"));
        assert_eq!(f.then(get_or_throw_with(|| 0u8)), Err(0u8));
        assert_eq!(f.then(get_or_throw_map(|e: &str| e.to_uppercase())), Err("BAD".to_string()));

        let err = f.then(get_or_throw()).unwrap_err();
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_conversions() {
        let a: Attempt<i32, &str> = Attempt::success(1);
        assert_eq!(a.then(into_maybe()), Maybe::some(1));
        assert_eq!(a.then(into_either()), Either::right(1));

        let nested: Attempt<Attempt<i32, String>, &str> = Attempt::failure("outer");
        assert_eq!(
            nested.then(flatten(|e: &str| e.to_string())),
            Attempt::failure("outer".to_string())
        );
    }

    #[test]
    fn test_peek_pipeline() {
        let seen = std::cell::RefCell::new(Vec::new());
        let pipeline = compose(
            if_success_peek(|v: &i32| seen.borrow_mut().push(*v)),
            compose(
                map(|v: i32| v * 10),
                if_failure_peek(|_: &&str| seen.borrow_mut().push(-1)),
            ),
        );
        assert_eq!(Attempt::success(4).then(pipeline), Attempt::success(40));
        assert_eq!(*seen.borrow(), vec![4]);
    }

    #[test]
    fn test_terminal_forms() {
        let a: Attempt<i32, &str> = Attempt::failure("bad");
        assert_eq!(a.then(get_failure()), Ok("bad"));
        assert!(a.then(get()).is_err());
        assert_eq!(a.then(into_result()), Err("bad"));
        assert_eq!(Attempt::<i32, &str>::success(1).then(get_failure_or_from(|| "none")), "none");

        let mut seen = Vec::new();
        Attempt::<i32, i32>::success(1).then(if_success_do(|v: i32| seen.push(v)));
        Attempt::<i32, i32>::failure(2).then(if_failure_do(|v: i32| seen.push(-v)));
        Attempt::<i32, i32>::failure(3).then(if_success_do(|v: i32| seen.push(v)));
        assert_eq!(seen, vec![1, -2]);
    }

    #[test]
    fn test_flatten_failure() {
        let nested = Attempt::<u8, Attempt<i32, &str>>::failure(Attempt::failure("inner"));
        assert_eq!(nested.then(flatten_failure(i32::from)), Attempt::failure("inner"));

        let outer = Attempt::<u8, Attempt<i32, &str>>::success(7);
        assert_eq!(outer.then(flatten_failure(i32::from)), Attempt::success(7));
    }
}
