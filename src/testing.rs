//! Testing utilities for constraints
//!
//! Assertion macros that print the rendered problem when they fail, which
//! `assert!(c.accepts(&v))` cannot do.
//!
//! # Examples
//!
//! ```rust
//! use ballast::{assert_accepts, assert_problem, assert_rejects, constraint};
//!
//! let positive = constraint(|n: &i32| *n > 0, "not_positive".to_string());
//!
//! assert_accepts!(positive, 1);
//! assert_rejects!(positive, 0);
//! assert_problem!(positive, -1, "not_positive".to_string());
//! ```

/// Assert that a constraint accepts a value.
///
/// Panics with the rendered problem if the value is rejected.
///
/// # Example
///
/// ```rust
/// use ballast::{assert_accepts, constraint};
///
/// let even = constraint(|n: &i32| n % 2 == 0, "odd".to_string());
/// assert_accepts!(even, 4);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($constraint:expr, $value:expr) => {
        match $crate::Constraint::problem_with(&$constraint, &$value) {
            None => {}
            Some(problem) => {
                panic!("Expected value to be accepted, got problem: {:?}", problem);
            }
        }
    };
}

/// Assert that a constraint rejects a value.
///
/// # Example
///
/// ```rust
/// use ballast::{assert_rejects, constraint};
///
/// let even = constraint(|n: &i32| n % 2 == 0, "odd".to_string());
/// assert_rejects!(even, 3);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($constraint:expr, $value:expr) => {
        match $crate::Constraint::problem_with(&$constraint, &$value) {
            Some(_) => {}
            None => {
                panic!("Expected value to be rejected, but it was accepted");
            }
        }
    };
}

/// Assert that a constraint rejects a value with a specific problem.
///
/// # Example
///
/// ```rust
/// use ballast::{assert_problem, constraint};
///
/// let even = constraint(|n: &i32| n % 2 == 0, "odd".to_string());
/// assert_problem!(even, 3, "odd".to_string());
/// ```
#[macro_export]
macro_rules! assert_problem {
    ($constraint:expr, $value:expr, $expected:expr) => {
        match $crate::Constraint::problem_with(&$constraint, &$value) {
            Some(problem) => {
                assert_eq!(problem, $expected);
            }
            None => {
                panic!(
                    "Expected problem {:?}, but the value was accepted",
                    $expected
                );
            }
        }
    };
}
