//! Free-function combinators over [`Either`].

use std::fmt;

use crate::{Attempt, Either, Maybe, UnionError};

/// Lift a function into one that wraps its result on the left side.
pub fn left_of<I, L, R, G>(f: G) -> impl FnOnce(I) -> Either<L, R>
where
    G: FnOnce(I) -> L,
{
    move |input| Either::Left(f(input))
}

/// Lift a function into one that wraps its result on the right side.
///
/// # Example
///
/// ```rust
/// use flowty::Either;
/// use flowty::combinators::either;
///
/// let len = either::right_of::<_, (), _, _>(|s: &str| s.len());
/// assert_eq!(len("abc"), Either::right(3));
/// ```
pub fn right_of<I, L, R, G>(f: G) -> impl FnOnce(I) -> Either<L, R>
where
    G: FnOnce(I) -> R,
{
    move |input| Either::Right(f(input))
}

/// Place a value on the left when it satisfies the predicate and on the right
/// (through `on_false`) otherwise.
pub fn left_if<L, R, P, G>(predicate: P, on_false: G) -> impl FnOnce(L) -> Either<L, R>
where
    P: FnOnce(&L) -> bool,
    G: FnOnce(L) -> R,
{
    move |value| Either::Left(value).filter_left(predicate, on_false)
}

/// Place a value on the right when it satisfies the predicate and on the left
/// (through `on_false`) otherwise.
pub fn right_if<L, R, P, G>(predicate: P, on_false: G) -> impl FnOnce(R) -> Either<L, R>
where
    P: FnOnce(&R) -> bool,
    G: FnOnce(R) -> L,
{
    move |value| Either::Right(value).filter_right(predicate, on_false)
}

/// See [`Either::map_left`].
pub fn map_left<L, R, L2, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L2, R>
where
    G: FnOnce(L) -> L2,
{
    move |either| either.map_left(f)
}

/// See [`Either::map_right`].
pub fn map_right<L, R, R2, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L, R2>
where
    G: FnOnce(R) -> R2,
{
    move |either| either.map_right(f)
}

/// See [`Either::bimap`].
pub fn bimap<L, R, L2, R2, G, H>(f: G, g: H) -> impl FnOnce(Either<L, R>) -> Either<L2, R2>
where
    G: FnOnce(L) -> L2,
    H: FnOnce(R) -> R2,
{
    move |either| either.bimap(f, g)
}

/// See [`Either::invert`].
pub fn invert<L, R>() -> impl FnOnce(Either<L, R>) -> Either<R, L> {
    Either::invert
}

/// See [`Either::flat_map_left`].
pub fn flat_map_left<L, R, L2, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L2, R>
where
    G: FnOnce(L) -> Either<L2, R>,
{
    move |either| either.flat_map_left(f)
}

/// See [`Either::flat_map_right`].
pub fn flat_map_right<L, R, R2, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L, R2>
where
    G: FnOnce(R) -> Either<L, R2>,
{
    move |either| either.flat_map_right(f)
}

/// See [`Either::try_map_left`].
pub fn try_map_left<L, R, L2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Either<L, R>) -> Either<L2, R>
where
    G: FnOnce(L) -> Result<L2, X>,
    H: FnOnce(X) -> L2,
{
    move |either| either.try_map_left(f, on_error)
}

/// See [`Either::try_map_right`].
pub fn try_map_right<L, R, R2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Either<L, R>) -> Either<L, R2>
where
    G: FnOnce(R) -> Result<R2, X>,
    H: FnOnce(X) -> R2,
{
    move |either| either.try_map_right(f, on_error)
}

/// See [`Either::try_flat_map_left`].
pub fn try_flat_map_left<L, R, L2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Either<L, R>) -> Either<L2, R>
where
    G: FnOnce(L) -> Result<Either<L2, R>, X>,
    H: FnOnce(X) -> Either<L2, R>,
{
    move |either| either.try_flat_map_left(f, on_error)
}

/// See [`Either::try_flat_map_right`].
pub fn try_flat_map_right<L, R, R2, X, G, H>(
    f: G,
    on_error: H,
) -> impl FnOnce(Either<L, R>) -> Either<L, R2>
where
    G: FnOnce(R) -> Result<Either<L, R2>, X>,
    H: FnOnce(X) -> Either<L, R2>,
{
    move |either| either.try_flat_map_right(f, on_error)
}

/// See [`Either::filter_left`].
pub fn filter_left<L, R, P, G>(predicate: P, on_false: G) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    P: FnOnce(&L) -> bool,
    G: FnOnce(L) -> R,
{
    move |either| either.filter_left(predicate, on_false)
}

/// See [`Either::filter_right`].
pub fn filter_right<L, R, P, G>(
    predicate: P,
    on_false: G,
) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    P: FnOnce(&R) -> bool,
    G: FnOnce(R) -> L,
{
    move |either| either.filter_right(predicate, on_false)
}

/// See [`Either::recover_to_left`].
pub fn recover_to_left<L, R, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    G: FnOnce(R) -> L,
{
    move |either| either.recover_to_left(f)
}

/// See [`Either::recover_to_right`].
pub fn recover_to_right<L, R, G>(f: G) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    G: FnOnce(L) -> R,
{
    move |either| either.recover_to_right(f)
}

/// See [`Either::into_left`].
pub fn into_left<L, R>() -> impl FnOnce(Either<L, R>) -> Maybe<L> {
    Either::into_left
}

/// See [`Either::into_right`].
pub fn into_right<L, R>() -> impl FnOnce(Either<L, R>) -> Maybe<R> {
    Either::into_right
}

/// See [`Either::get_left`].
pub fn get_left<L, R>() -> impl FnOnce(Either<L, R>) -> Result<L, UnionError>
where
    R: fmt::Debug,
{
    Either::get_left
}

/// See [`Either::get_right`].
pub fn get_right<L, R>() -> impl FnOnce(Either<L, R>) -> Result<R, UnionError>
where
    L: fmt::Debug,
{
    Either::get_right
}

/// See [`Either::get_left_or`].
pub fn get_left_or<L, R>(default: L) -> impl FnOnce(Either<L, R>) -> L {
    move |either| either.get_left_or(default)
}

/// See [`Either::get_right_or`].
pub fn get_right_or<L, R>(default: R) -> impl FnOnce(Either<L, R>) -> R {
    move |either| either.get_right_or(default)
}

/// See [`Either::get_left_or_from`].
pub fn get_left_or_from<L, R, P>(supplier: P) -> impl FnOnce(Either<L, R>) -> L
where
    P: FnOnce() -> L,
{
    move |either| either.get_left_or_from(supplier)
}

/// See [`Either::get_right_or_from`].
pub fn get_right_or_from<L, R, P>(supplier: P) -> impl FnOnce(Either<L, R>) -> R
where
    P: FnOnce() -> R,
{
    move |either| either.get_right_or_from(supplier)
}

/// See [`Either::get_left_or_recover`].
pub fn get_left_or_recover<L, R, G>(f: G) -> impl FnOnce(Either<L, R>) -> L
where
    G: FnOnce(R) -> L,
{
    move |either| either.get_left_or_recover(f)
}

/// See [`Either::get_right_or_recover`].
pub fn get_right_or_recover<L, R, G>(f: G) -> impl FnOnce(Either<L, R>) -> R
where
    G: FnOnce(L) -> R,
{
    move |either| either.get_right_or_recover(f)
}

/// See [`Either::on_left_peek`].
pub fn on_left_peek<L, R, C>(consumer: C) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    C: FnOnce(&L),
{
    move |either| either.on_left_peek(consumer)
}

/// See [`Either::on_right_peek`].
pub fn on_right_peek<L, R, C>(consumer: C) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    C: FnOnce(&R),
{
    move |either| either.on_right_peek(consumer)
}

/// See [`Either::on_either_peek`].
pub fn on_either_peek<L, R, C, D>(on_left: C, on_right: D) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    C: FnOnce(&L),
    D: FnOnce(&R),
{
    move |either| either.on_either_peek(on_left, on_right)
}

/// See [`Either::on_left_do`].
pub fn on_left_do<L, R, C>(consumer: C) -> impl FnOnce(Either<L, R>)
where
    C: FnOnce(L),
{
    move |either| either.on_left_do(consumer)
}

/// See [`Either::on_right_do`].
pub fn on_right_do<L, R, C>(consumer: C) -> impl FnOnce(Either<L, R>)
where
    C: FnOnce(R),
{
    move |either| either.on_right_do(consumer)
}

/// See [`Either::on_either_do`].
pub fn on_either_do<L, R, C, D>(on_left: C, on_right: D) -> impl FnOnce(Either<L, R>)
where
    C: FnOnce(L),
    D: FnOnce(R),
{
    move |either| either.on_either_do(on_left, on_right)
}

/// See [`Either::into_result`].
pub fn into_result<L, R>() -> impl FnOnce(Either<L, R>) -> Result<R, L> {
    Either::into_result
}

/// See [`Either::into_attempt`].
pub fn into_attempt<L, R>() -> impl FnOnce(Either<L, R>) -> Attempt<R, L> {
    Either::into_attempt
}
