//! Free-function form of the union combinators.
//!
//! Each function here returns a transformer closure that does the same thing
//! as the method of the same name, so combinators can be built up front,
//! stored, composed with [`compose`], and applied with `then`:
//!
//! ```rust
//! use flowty::Attempt;
//! use flowty::combinators::{attempt, compose};
//!
//! let pipeline = compose(
//!     attempt::map(|x: i32| x * 2),
//!     attempt::filter(|x: &i32| *x < 100, "too large"),
//! );
//!
//! assert_eq!(Attempt::success(21).then(pipeline), Attempt::Success(42));
//! ```
//!
//! Constructor-shaped functions (`maybe_of`, `left_of`, `attempt_of`,
//! `success_if`, ...) turn a plain or fallible function into one that returns
//! a union.
//!
//! Panicking extractors (`unwrap*`), borrowing views (`as_ref`, `iter`) and
//! the variant tests (`is_*`) have no free-function form.

pub mod attempt;
pub mod either;
pub mod maybe;

/// Compose two functions, applying `f` first and then `g`.
///
/// # Example
///
/// ```rust
/// use flowty::combinators::compose;
///
/// let parse_then_double = compose(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(parse_then_double("abc"), 6);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl FnOnce(A) -> C
where
    F: FnOnce(A) -> B,
    G: FnOnce(B) -> C,
{
    move |a| g(f(a))
}

/// Return the argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attempt, Either, Maybe};

    #[test]
    fn test_compose_order() {
        let f = compose(|x: i32| x + 1, |x: i32| x * 10);
        assert_eq!(f(1), 20);
    }

    #[test]
    fn test_identity_is_functor_identity() {
        assert_eq!(Maybe::some(1).map(identity), Maybe::some(1));
        assert_eq!(
            Either::<i32, &str>::left(1).map_left(identity),
            Either::left(1)
        );
        assert_eq!(
            Attempt::<i32, &str>::failure("e").map(identity),
            Attempt::failure("e")
        );
    }

    #[test]
    fn test_compose_matches_sequential_maps() {
        let f = |x: i32| x + 3;
        let g = |x: i32| x * 2;
        let m = Maybe::some(4);
        assert_eq!(m.map(f).map(g), m.map(compose(f, g)));
    }
}
