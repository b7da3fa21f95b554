//! End-to-end tests chaining unions the way application code does.
//!
//! A small signup flow exercises factories, method chains, the free-function
//! combinators, raising with `?`, and the assertion macros together.

use flowty::combinators::{attempt, compose, either, maybe};
use flowty::prelude::*;
use flowty::{assert_empty, assert_failure, assert_left, assert_right, assert_some, assert_success};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    Missing(&'static str),
    BadAge(String),
    TooYoung(u8),
    BadEmail(String),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::Missing(field) => write!(f, "missing field: {}", field),
            SignupError::BadAge(raw) => write!(f, "age is not a number: {}", raw),
            SignupError::TooYoung(age) => write!(f, "must be 18 or older, got {}", age),
            SignupError::BadEmail(raw) => write!(f, "invalid email: {}", raw),
        }
    }
}

impl std::error::Error for SignupError {}

#[derive(Debug, Clone, PartialEq)]
struct Signup {
    email: String,
    age: u8,
}

fn field<'a>(form: &'a HashMap<&str, &str>, name: &'static str) -> Attempt<&'a str, SignupError> {
    Maybe::of(form.get(name).copied())
        .filter(|value| !value.trim().is_empty())
        .into_attempt(SignupError::Missing(name))
}

fn parse_age(raw: &str) -> Attempt<u8, SignupError> {
    Attempt::of(|| raw.trim().parse::<u8>())
        .map_failure(|_| SignupError::BadAge(raw.to_string()))
        .filter_with(|age| *age >= 18, |age| SignupError::TooYoung(*age))
}

fn parse_email(raw: &str) -> Attempt<String, SignupError> {
    Attempt::success(raw.trim().to_lowercase()).filter_from(
        |email| email.contains('@'),
        || SignupError::BadEmail(raw.to_string()),
    )
}

fn signup(form: &HashMap<&str, &str>) -> Attempt<Signup, SignupError> {
    field(form, "email").flat_map(parse_email).flat_map(|email| {
        field(form, "age")
            .flat_map(parse_age)
            .map(|age| Signup { email, age })
    })
}

fn form(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

#[test]
fn test_signup_success() {
    let f = form(&[("email", " Ada@Example.com "), ("age", "36")]);
    assert_success!(
        signup(&f),
        Signup {
            email: "ada@example.com".to_string(),
            age: 36
        }
    );
}

#[test]
fn test_signup_reports_first_failure() {
    assert_failure!(signup(&form(&[])), SignupError::Missing("email"));
    assert_failure!(
        signup(&form(&[("email", "ada")])),
        SignupError::BadEmail("ada".to_string())
    );
    assert_failure!(
        signup(&form(&[("email", "a@b.c"), ("age", "  ")])),
        SignupError::Missing("age")
    );
    assert_failure!(
        signup(&form(&[("email", "a@b.c"), ("age", "old")])),
        SignupError::BadAge("old".to_string())
    );
    assert_failure!(
        signup(&form(&[("email", "a@b.c"), ("age", "12")])),
        SignupError::TooYoung(12)
    );
}

fn register(form: &HashMap<&str, &str>) -> Result<String, flowty::BoxError> {
    let account = signup(form).get_or_throw()?;
    Ok(format!("{} ({})", account.email, account.age))
}

#[test]
fn test_get_or_throw_propagates_with_question_mark() {
    let ok = register(&form(&[("email", "x@y.z"), ("age", "40")]));
    assert_eq!(ok.unwrap(), "x@y.z (40)");

    let err = register(&form(&[("email", "x@y.z"), ("age", "9")])).unwrap_err();
    assert_eq!(err.to_string(), "must be 18 or older, got 9");
    assert_eq!(
        err.downcast_ref::<SignupError>(),
        Some(&SignupError::TooYoung(9))
    );
}

#[test]
fn test_get_or_throw_wraps_message_failures() {
    let a: Attempt<i32, String> = Attempt::failure("disk full".to_string());
    let err = a.get_or_throw().unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn test_free_function_pipeline_matches_method_chain() {
    let via_methods = Attempt::<&str, String>::success("41")
        .try_map(|s| s.parse::<i32>(), |_| 0)
        .map(|n| n + 1)
        .filter(|n| *n % 2 == 0, "odd".to_string());

    let pipeline = compose(
        attempt::try_map(|s: &str| s.parse::<i32>(), |_| 0),
        compose(
            attempt::map(|n: i32| n + 1),
            attempt::filter(|n: &i32| *n % 2 == 0, "odd".to_string()),
        ),
    );
    let via_functions = Attempt::<&str, String>::success("41").then(pipeline);

    assert_eq!(via_methods, via_functions);
    assert_success!(via_functions, 42);
}

#[test]
fn test_cross_type_pipeline() {
    let lookup = maybe::maybe_of(|key: &str| if key == "timeout" { Some("30") } else { None });
    let timeout = lookup("timeout")
        .then(maybe::into_either(|| "unset"))
        .then(either::try_map_right(|s: &str| s.parse::<u32>(), |_| 0))
        .then(either::into_attempt())
        .get_or(5);
    assert_eq!(timeout, 30);

    let lookup = maybe::maybe_of(|key: &str| if key == "timeout" { Some("30") } else { None });
    let unset = lookup("retries").then(maybe::into_either(|| "unset"));
    assert_left!(unset, "unset");
}

#[test]
fn test_either_routes_values() {
    let classify = |n: i32| -> Either<String, i32> {
        Either::right(n).filter_right(|n| *n >= 0, |n| format!("{} is negative", n))
    };

    let inputs = vec![3, -1, 4, -5];
    let (lefts, rights) = flowty::either::partition(inputs.into_iter().map(classify));
    assert_eq!(lefts, vec!["-1 is negative".to_string(), "-5 is negative".to_string()]);
    assert_eq!(rights, vec![3, 4]);

    assert_right!(classify(7).then(either::map_right(|n: i32| n * 2)), 14);
}

#[test]
fn test_hooks_run_in_order_and_pass_through() {
    let mut events = Vec::new();
    let result = Maybe::some(3)
        .if_present_peek(|v| events.push(format!("got {}", v)))
        .filter(|v| *v > 5)
        .if_empty_peek(|| events.push("filtered out".to_string()));

    assert_empty!(result);
    assert_eq!(events, vec!["got 3".to_string(), "filtered out".to_string()]);

    let mut seen = None;
    Attempt::<u8, &str>::failure("nope").if_failure_do(|e| seen = Some(e.len()));
    assert_eq!(seen, Some(4));
}

#[test]
fn test_catch_unwind_isolates_panics() {
    let items: Vec<i32> = Vec::new();
    let a = Attempt::catch_unwind(|| items[3]);
    assert_failure!(a.clone());
    assert!(a.unwrap_failure().message().contains("index out of bounds"));

    assert_success!(Attempt::catch_unwind(|| 2 + 2), 4);
}

#[test]
fn test_wrong_variant_errors() {
    let err = Maybe::<i32>::empty().get().unwrap_err();
    assert_eq!(err.to_string(), "Maybe is of the wrong variant: Empty");

    let err = Either::<i32, &str>::right("r").get_left().unwrap_err();
    assert_eq!(err.union_name(), "Either");

    let err = Attempt::<i32, &str>::success(1).get_failure().unwrap_err();
    assert!(err.to_string().starts_with("Attempt is of the wrong variant"));
}

#[test]
fn test_display_forms() {
    assert_eq!(Maybe::some(1).to_string(), "Some(1)");
    assert_eq!(Maybe::<i32>::empty().to_string(), "Empty");
    assert_eq!(Either::<i32, &str>::left(1).to_string(), "Left(1)");
    assert_eq!(Either::<i32, &str>::right("r").to_string(), "Right(r)");
    assert_eq!(Attempt::<i32, &str>::success(1).to_string(), "Success(1)");
    assert_eq!(Attempt::<i32, &str>::failure("e").to_string(), "Failure(e)");
}

#[test]
fn test_of_try_collapses_errors() {
    assert_some!(Maybe::of_try(|| "12".parse::<i32>()), 12);
    assert_empty!(Maybe::of_try(|| "twelve".parse::<i32>()));
}

#[test]
#[should_panic(expected = "supplier blew up")]
fn test_attempt_of_lets_panics_through() {
    let _ = Attempt::of(|| -> Result<i32, String> { panic!("supplier blew up") });
}

#[test]
#[should_panic(expected = "mapper blew up")]
fn test_attempt_try_map_lets_panics_through() {
    let _ = Attempt::<i32, String>::success(1).try_map(
        |_| -> Result<i32, String> { panic!("mapper blew up") },
        |_| 0,
    );
}

#[test]
#[should_panic(expected = "mapper blew up")]
fn test_maybe_try_map_lets_panics_through() {
    let _ = Maybe::some(1).try_map(|_| -> Result<i32, String> { panic!("mapper blew up") });
}

#[test]
#[should_panic(expected = "pipeline blew up")]
fn test_free_function_pipeline_lets_panics_through() {
    let pipeline = compose(
        attempt::map(|n: i32| n + 1),
        attempt::map(|_: i32| -> i32 { panic!("pipeline blew up") }),
    );
    let _ = Attempt::<i32, String>::success(1).then(pipeline);
}

/// Payload whose `Debug` rendering is counted.
struct Rendered<'a>(&'a std::cell::Cell<usize>);

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.set(self.0.get() + 1);
        write!(f, "Rendered")
    }
}

#[test]
fn test_extractors_render_only_the_wrong_branch() {
    let renders = std::cell::Cell::new(0);

    let _ = Attempt::<Rendered, Rendered>::success(Rendered(&renders)).get();
    let _ = Attempt::<Rendered, Rendered>::success(Rendered(&renders)).unwrap();
    let _ = Attempt::<Rendered, Rendered>::failure(Rendered(&renders)).get_failure();
    let _ = Either::<Rendered, Rendered>::left(Rendered(&renders)).get_left();
    let _ = Either::<Rendered, Rendered>::right(Rendered(&renders)).unwrap_right();
    assert_eq!(renders.get(), 0);

    let err = Attempt::<Rendered, Rendered>::failure(Rendered(&renders))
        .get()
        .unwrap_err();
    assert_eq!(err.state(), "Failure(Rendered)");
    assert_eq!(renders.get(), 1);
}

#[test]
fn test_extractors_do_not_need_debug_on_the_held_branch() {
    struct Opaque(u8);

    assert_eq!(Attempt::<Opaque, &str>::success(Opaque(7)).unwrap().0, 7);
    assert_eq!(Either::<Opaque, &str>::left(Opaque(8)).unwrap_left().0, 8);
    assert!(Attempt::<Opaque, &str>::failure("no").get().is_err());
}
