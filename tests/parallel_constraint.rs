//! Integration tests for the parallel combinator
//!
//! Two children, `value < 3` and `value < 5`, combined with `parallel`.

use ballast::prelude::*;
use ballast::{assert_accepts, assert_problem, Custom, Parallel};

fn less_than_3() -> Custom<i32, String> {
    constraint(|v: &i32| *v < 3, "not_less_than_3".to_string())
}

fn less_than_5() -> Custom<i32, String> {
    constraint(|v: &i32| *v < 5, "not_less_than_5".to_string())
}

fn both() -> Parallel<i32, Custom<i32, String>> {
    parallel(NonEmptyVec::new(less_than_3(), vec![less_than_5()]))
}

#[test]
fn test_accepts() {
    assert!(both().accepts(&2));
}

#[test]
fn test_not_accepts() {
    assert!(!both().accepts(&4));
}

#[test]
fn test_check_succeeds() {
    assert_eq!(both().check(&2), Ok(()));
}

#[test]
fn test_check_fails() {
    let failure = both().check(&6).unwrap_err();
    assert_eq!(failure.problem(), "not_less_than_3 not_less_than_5");
}

#[test]
#[should_panic(expected = "not_less_than_3 not_less_than_5")]
fn test_check_fails_loudly_when_unwrapped() {
    both().check(&6).unwrap();
}

#[test]
fn test_no_problem_with() {
    assert_eq!(both().problem_with(&2), None);
}

#[test]
fn test_problem_with_one_failing_child() {
    assert_problem!(both(), 4, "not_less_than_3".to_string());
}

#[test]
fn test_problem_with_two_failing_children() {
    assert_problem!(both(), 6, "not_less_than_3 not_less_than_5".to_string());
}

#[test]
fn test_apply_to_ok() {
    let res = both().apply_to(Ok(2));
    assert!(res.is_ok());
    assert_eq!(res, Ok(2));
}

#[test]
fn test_apply_to_not_ok() {
    let res = both().apply_to(Ok(7));
    assert!(res.is_err());
    assert_eq!(res, Err("not_less_than_3 not_less_than_5".to_string()));
}

#[test]
fn test_apply_to_error_is_passed_through_untouched() {
    let prior = String::from("prior");
    let address = prior.as_ptr();

    let res = both().apply_to(Err(prior));

    let err = res.unwrap_err();
    assert_eq!(err, "prior");
    // Same buffer: the error was moved through, not re-rendered.
    assert_eq!(err.as_ptr(), address);
}

#[test]
fn test_apply_to_ok_keeps_the_value() {
    let c = parallel(NonEmptyVec::singleton(constraint(
        |s: &String| s.len() < 10,
        "too_long".to_string(),
    )));
    let value = String::from("short");
    let address = value.as_ptr();

    let res = c.apply_to(Ok(value)).unwrap();
    assert_eq!(res.as_ptr(), address);
}

#[test]
fn test_with_problem_builder() {
    let new_c = both().with_problem_builder(|_, _| "This was a fault".to_string());
    assert_eq!(new_c.problem_with(&7), Some("This was a fault".to_string()));
}

#[test]
fn test_with_problem_builder_does_not_touch_receiver() {
    let c = both();
    let _new_c = c.with_problem_builder(|_, _| "This was a fault".to_string());
    assert_problem!(c, 7, "not_less_than_3 not_less_than_5".to_string());
}

#[test]
fn test_with_problem_builder_applies_to_check_and_apply_to() {
    let c = both().with_problem_builder(|_, _| "This was a fault".to_string());
    assert_eq!(
        c.check(&7).unwrap_err().into_problem(),
        "This was a fault".to_string()
    );
    assert_eq!(c.apply_to(Ok(7)), Err("This was a fault".to_string()));
    assert_accepts!(c, 1);
}

#[test]
fn test_parallel_inside_sequential() {
    let positive = constraint(|v: &i32| *v > 0, "not_positive".to_string()).boxed();
    let c = sequential(NonEmptyVec::new(positive, vec![both().boxed()]));

    assert_problem!(c, -1, "not_positive".to_string());
    assert_problem!(c, 6, "not_less_than_3 not_less_than_5".to_string());
    assert_accepts!(c, 1);
}

#[test]
fn test_negated_parallel() {
    let c = both().not("less_than_3_and_5".to_string());
    assert_problem!(c, 1, "less_than_3_and_5".to_string());
    assert_accepts!(c, 4);
}

#[test]
fn test_boolean_failing_and_monadic_styles_agree() {
    let c = both();
    for v in -5..10 {
        let accepted = c.accepts(&v);
        assert_eq!(accepted, c.problem_with(&v).is_none());
        assert_eq!(accepted, c.check(&v).is_ok());
        assert_eq!(accepted, c.apply_to(Ok(v)).is_ok());
        assert_eq!(accepted, c.transform(v).is_ok());
    }
}

#[test]
fn test_shared_across_threads() {
    let c = std::sync::Arc::new(both());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || c.problem_with(&(i * 3)))
        })
        .collect();

    let problems: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        problems,
        vec![
            None,
            Some("not_less_than_3".to_string()),
            Some("not_less_than_3 not_less_than_5".to_string()),
            Some("not_less_than_3 not_less_than_5".to_string()),
        ]
    );
}
