//! Atomic constraints built from closures
//!
//! [`constraint`] turns a predicate and a constant problem id into a
//! constraint; [`constraint_with`] takes a closure instead of the constant so
//! the problem can mention the rejected value.

use std::fmt;
use std::sync::Arc;

use super::{Constraint, ProblemBuilder};

/// A constraint defined by a predicate closure and an error-producing closure.
///
/// Created by [`constraint`] or [`constraint_with`]. Cloning is cheap: the
/// closures are shared, never mutated.
pub struct Custom<T: ?Sized, E> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    error: Arc<dyn Fn(&T) -> E + Send + Sync>,
    problem_builder: ProblemBuilder<T, E>,
}

impl<T: ?Sized, E> Constraint<T> for Custom<T, E> {
    type Problem = E;

    #[inline]
    fn accepts(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn problem_with(&self, value: &T) -> Option<E> {
        if self.accepts(value) {
            return None;
        }
        let problem = (self.error)(value);
        Some(self.problem_builder.render(problem, value))
    }

    fn with_problem_builder<B>(&self, builder: B) -> Self
    where
        B: Fn(E, &T) -> E + Send + Sync + 'static,
    {
        Custom {
            predicate: Arc::clone(&self.predicate),
            error: Arc::clone(&self.error),
            problem_builder: ProblemBuilder::new(builder),
        }
    }
}

impl<T: ?Sized, E> Clone for Custom<T, E> {
    fn clone(&self) -> Self {
        Custom {
            predicate: Arc::clone(&self.predicate),
            error: Arc::clone(&self.error),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for Custom<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("problem_builder", &self.problem_builder)
            .finish_non_exhaustive()
    }
}

/// Create a constraint from a predicate and a constant problem id.
///
/// The id is reported as-is when the predicate rejects a value; it is not
/// translated.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint, Constraint};
///
/// let less_than_3 = constraint(|v: &i32| *v < 3, "not_less_than_3".to_string());
///
/// assert!(less_than_3.accepts(&2));
/// assert_eq!(less_than_3.problem_with(&2), None);
/// assert_eq!(less_than_3.problem_with(&3).as_deref(), Some("not_less_than_3"));
/// ```
pub fn constraint<T, E, P>(predicate: P, error: E) -> Custom<T, E>
where
    T: ?Sized,
    E: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    constraint_with(predicate, move |_: &T| error.clone())
}

/// Create a constraint from a predicate and a closure producing the problem.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint_with, Constraint};
///
/// let short = constraint_with(
///     |s: &str| s.len() <= 5,
///     |s: &str| format!("'{}' is longer than 5", s),
/// );
///
/// assert!(short.accepts("abc"));
/// assert_eq!(
///     short.problem_with("abcdefg").as_deref(),
///     Some("'abcdefg' is longer than 5")
/// );
/// ```
pub fn constraint_with<T, E, P, F>(predicate: P, error: F) -> Custom<T, E>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    F: Fn(&T) -> E + Send + Sync + 'static,
{
    Custom {
        predicate: Arc::new(predicate),
        error: Arc::new(error),
        problem_builder: ProblemBuilder::none(),
    }
}
