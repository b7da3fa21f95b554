//! Free-function combinators over [`Maybe`].

use crate::{Attempt, Either, Maybe, UnionError};

/// Lift a function returning `Option` into one returning `Maybe`.
///
/// # Example
///
/// ```rust
/// use flowty::Maybe;
/// use flowty::combinators::maybe;
///
/// let first_word = maybe::maybe_of(|s: &str| s.split_whitespace().next());
/// assert_eq!(first_word("hello world"), Maybe::some("hello"));
/// ```
pub fn maybe_of<I, O, G>(f: G) -> impl FnOnce(I) -> Maybe<O>
where
    G: FnOnce(I) -> Option<O>,
{
    move |input| Maybe::of(f(input))
}

/// Wrap a value in `Some` when it satisfies the predicate.
pub fn some_if<T, P>(predicate: P) -> impl FnOnce(T) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    move |value| Maybe::some(value).filter(predicate)
}

/// See [`Maybe::map`].
pub fn map<T, O, G>(f: G) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> O,
{
    move |maybe| maybe.map(f)
}

/// See [`Maybe::map_of`].
pub fn map_of<T, O, G>(f: G) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Option<O>,
{
    move |maybe| maybe.map_of(f)
}

/// See [`Maybe::flat_map`].
pub fn flat_map<T, O, G>(f: G) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Maybe<O>,
{
    move |maybe| maybe.flat_map(f)
}

/// See [`Maybe::filter`].
pub fn filter<T, P>(predicate: P) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    move |maybe| maybe.filter(predicate)
}

/// See [`Maybe::try_map`].
pub fn try_map<T, O, X, G>(f: G) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Result<O, X>,
{
    move |maybe| maybe.try_map(f)
}

/// See [`Maybe::try_map_or_else`].
pub fn try_map_or_else<T, O, X, G, R>(f: G, recovery: R) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Result<O, X>,
    R: FnOnce(X) -> O,
{
    move |maybe| maybe.try_map_or_else(f, recovery)
}

/// See [`Maybe::try_flat_map`].
pub fn try_flat_map<T, O, X, G>(f: G) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Result<Maybe<O>, X>,
{
    move |maybe| maybe.try_flat_map(f)
}

/// See [`Maybe::try_flat_map_or_else`].
pub fn try_flat_map_or_else<T, O, X, G, R>(
    f: G,
    recovery: R,
) -> impl FnOnce(Maybe<T>) -> Maybe<O>
where
    G: FnOnce(T) -> Result<Maybe<O>, X>,
    R: FnOnce(X) -> Maybe<O>,
{
    move |maybe| maybe.try_flat_map_or_else(f, recovery)
}

/// See [`Maybe::recover`].
pub fn recover<T, P>(supplier: P) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    P: FnOnce() -> T,
{
    move |maybe| maybe.recover(supplier)
}

/// See [`Maybe::try_recover`].
pub fn try_recover<T, X, P>(supplier: P) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    P: FnOnce() -> Result<T, X>,
{
    move |maybe| maybe.try_recover(supplier)
}

/// See [`Maybe::try_recover_or_else`].
pub fn try_recover_or_else<T, X, P, R>(supplier: P, on_error: R) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    P: FnOnce() -> Result<T, X>,
    R: FnOnce(X) -> T,
{
    move |maybe| maybe.try_recover_or_else(supplier, on_error)
}

/// See [`Maybe::get`].
pub fn get<T>() -> impl FnOnce(Maybe<T>) -> Result<T, UnionError> {
    Maybe::get
}

/// See [`Maybe::get_or`].
pub fn get_or<T>(default: T) -> impl FnOnce(Maybe<T>) -> T {
    move |maybe| maybe.get_or(default)
}

/// See [`Maybe::get_or_from`].
pub fn get_or_from<T, P>(supplier: P) -> impl FnOnce(Maybe<T>) -> T
where
    P: FnOnce() -> T,
{
    move |maybe| maybe.get_or_from(supplier)
}

/// See [`Maybe::get_or_throw_err`].
pub fn get_or_throw_err<T, X>(error: X) -> impl FnOnce(Maybe<T>) -> Result<T, X> {
    move |maybe| maybe.get_or_throw_err(error)
}

/// See [`Maybe::get_or_throw_with`].
pub fn get_or_throw_with<T, X, P>(supplier: P) -> impl FnOnce(Maybe<T>) -> Result<T, X>
where
    P: FnOnce() -> X,
{
    move |maybe| maybe.get_or_throw_with(supplier)
}

/// See [`Maybe::if_present_peek`].
pub fn if_present_peek<T, C>(consumer: C) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    C: FnOnce(&T),
{
    move |maybe| maybe.if_present_peek(consumer)
}

/// See [`Maybe::if_empty_peek`].
pub fn if_empty_peek<T, C>(runnable: C) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    C: FnOnce(),
{
    move |maybe| maybe.if_empty_peek(runnable)
}

/// See [`Maybe::if_present_do`].
pub fn if_present_do<T, C>(consumer: C) -> impl FnOnce(Maybe<T>)
where
    C: FnOnce(T),
{
    move |maybe| maybe.if_present_do(consumer)
}

/// See [`Maybe::if_empty_do`].
pub fn if_empty_do<T, C>(runnable: C) -> impl FnOnce(Maybe<T>)
where
    C: FnOnce(),
{
    move |maybe| maybe.if_empty_do(runnable)
}

/// See [`Maybe::into_option`].
pub fn into_option<T>() -> impl FnOnce(Maybe<T>) -> Option<T> {
    Maybe::into_option
}

/// See [`Maybe::into_either`].
pub fn into_either<T, L, P>(on_empty: P) -> impl FnOnce(Maybe<T>) -> Either<L, T>
where
    P: FnOnce() -> L,
{
    move |maybe| maybe.into_either(on_empty)
}

/// See [`Maybe::into_attempt_with`].
pub fn into_attempt<T, F, P>(supplier: P) -> impl FnOnce(Maybe<T>) -> Attempt<T, F>
where
    P: FnOnce() -> F,
{
    move |maybe| maybe.into_attempt_with(supplier)
}

/// See [`Maybe::flatten`].
pub fn flatten<T>() -> impl FnOnce(Maybe<Maybe<T>>) -> Maybe<T> {
    Maybe::flatten
}
