//! Constraints: predicates that know how to report why they rejected a value
//!
//! A [`Constraint`] pairs an acceptance predicate with failure reporting. The
//! same constraint can be used in three styles, chosen per call site:
//!
//! - boolean: [`accepts`](Constraint::accepts) / [`problem_with`](Constraint::problem_with)
//! - failing: [`check`](Constraint::check) returns a [`ValidationFailure`]
//! - monadic: [`apply_to`](Constraint::apply_to) threads a `Result` without unwrapping it
//!
//! All three agree: `accepts(v)` is true exactly when `problem_with(v)` is
//! `None`, and that is exactly when `check(v)` is `Ok` and `apply_to(Ok(v))`
//! hands `v` back.
//!
//! # Example
//!
//! ```rust
//! use ballast::{constraint, parallel, Constraint, NonEmptyVec};
//!
//! let less_than_3 = constraint(|v: &i32| *v < 3, "not_less_than_3".to_string());
//! let less_than_5 = constraint(|v: &i32| *v < 5, "not_less_than_5".to_string());
//! let both = parallel(NonEmptyVec::new(less_than_3, vec![less_than_5]));
//!
//! assert!(both.accepts(&2));
//! assert_eq!(both.problem_with(&4).as_deref(), Some("not_less_than_3"));
//! assert_eq!(
//!     both.apply_to(Ok(7)),
//!     Err("not_less_than_3 not_less_than_5".to_string())
//! );
//! ```

mod boxed;
mod custom;
mod logical;

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationFailure;

pub use boxed::BoxedConstraint;
pub use custom::{constraint, constraint_with, Custom};
pub use logical::{any_of, not, not_with, parallel, sequential, AnyOf, Not, Parallel, Sequential};

/// A composable acceptance predicate over values of type `T`.
///
/// Atomic constraints ([`Custom`]) and combinators ([`Parallel`],
/// [`Sequential`], [`Not`], [`AnyOf`]) all implement this one trait, so a
/// combinator can be used anywhere a single constraint is expected,
/// including as the child of another combinator.
///
/// Implementors provide [`accepts`](Constraint::accepts),
/// [`problem_with`](Constraint::problem_with) and
/// [`with_problem_builder`](Constraint::with_problem_builder); the other
/// operations are derived from them.
pub trait Constraint<T: ?Sized>: Send + Sync {
    /// What a rejection is reported as.
    type Problem;

    /// Check if the value satisfies this constraint.
    fn accepts(&self, value: &T) -> bool;

    /// Render the problem with a value, or `None` if the value is accepted.
    ///
    /// The problem is returned raw. No translation happens here.
    fn problem_with(&self, value: &T) -> Option<Self::Problem>;

    /// Return a copy of this constraint whose problem is rendered by `builder`.
    ///
    /// `builder` receives the problem the constraint would have reported and
    /// the rejected value. An override already set on `self` is replaced, not
    /// stacked. `self` is left as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint};
    ///
    /// let positive = constraint(|n: &i32| *n > 0, "not_positive".to_string());
    /// let verbose = positive.with_problem_builder(|id, n| format!("{}: {}", id, n));
    ///
    /// assert_eq!(verbose.problem_with(&-2).as_deref(), Some("not_positive: -2"));
    /// assert_eq!(positive.problem_with(&-2).as_deref(), Some("not_positive"));
    /// ```
    fn with_problem_builder<B>(&self, builder: B) -> Self
    where
        Self: Sized + Clone,
        B: Fn(Self::Problem, &T) -> Self::Problem + Send + Sync + 'static;

    /// Fail with the rendered problem if the value is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint};
    ///
    /// let positive = constraint(|n: &i32| *n > 0, "not_positive".to_string());
    /// assert!(positive.check(&1).is_ok());
    /// assert_eq!(positive.check(&0).unwrap_err().problem(), "not_positive");
    /// ```
    #[must_use = "a rejected value is only reported through the returned Result"]
    fn check(&self, value: &T) -> Result<(), ValidationFailure<Self::Problem>> {
        match self.problem_with(value) {
            None => Ok(()),
            Some(problem) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    constraint = std::any::type_name::<Self>(),
                    "check rejected value"
                );
                Err(ValidationFailure::new(problem))
            }
        }
    }

    /// Validate the value inside a `Result` without unwrapping it.
    ///
    /// An `Err` is returned as it came in, untouched. An `Ok` is returned as
    /// it came in when its value is accepted, and turned into
    /// `Err(problem_with(value))` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint};
    ///
    /// let positive = constraint(|n: &i32| *n > 0, "not_positive".to_string());
    ///
    /// assert_eq!(positive.apply_to(Ok(3)), Ok(3));
    /// assert_eq!(positive.apply_to(Ok(-3)), Err("not_positive".to_string()));
    /// assert_eq!(positive.apply_to(Err("prior".to_string())), Err("prior".to_string()));
    /// ```
    fn apply_to(&self, result: Result<T, Self::Problem>) -> Result<T, Self::Problem>
    where
        T: Sized,
    {
        let value = match result {
            Ok(value) => value,
            Err(problem) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    constraint = std::any::type_name::<Self>(),
                    "result already failed, passing it through"
                );
                return Err(problem);
            }
        };

        match self.problem_with(&value) {
            None => Ok(value),
            Some(problem) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    constraint = std::any::type_name::<Self>(),
                    "apply_to rejected value"
                );
                Err(problem)
            }
        }
    }

    /// Check the value and hand it back if it is accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint};
    ///
    /// let non_empty = constraint(|s: &String| !s.is_empty(), "empty".to_string());
    /// assert_eq!(non_empty.transform("hi".to_string()).unwrap(), "hi");
    /// assert!(non_empty.transform(String::new()).is_err());
    /// ```
    fn transform(&self, value: T) -> Result<T, ValidationFailure<Self::Problem>>
    where
        T: Sized,
    {
        self.check(&value).map(|()| value)
    }

    /// Shorthand for `apply_to(Ok(value))`.
    fn validate(&self, value: T) -> Result<T, Self::Problem>
    where
        T: Sized,
    {
        self.apply_to(Ok(value))
    }
}

/// Extension methods available on every sized constraint.
pub trait ConstraintExt<T: ?Sized>: Constraint<T> + Sized {
    /// Erase the concrete type so differently-built constraints can share a
    /// combinator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, constraint_with, parallel, Constraint, ConstraintExt, NonEmptyVec};
    ///
    /// let even = constraint(|n: &i32| n % 2 == 0, "odd".to_string()).boxed();
    /// let small = constraint_with(|n: &i32| *n < 10, |n: &i32| format!("{}_too_big", n)).boxed();
    ///
    /// let both = parallel(NonEmptyVec::new(even, vec![small]));
    /// assert_eq!(both.problem_with(&11).as_deref(), Some("odd 11_too_big"));
    /// ```
    fn boxed(self) -> BoxedConstraint<T, Self::Problem>
    where
        Self: 'static,
    {
        BoxedConstraint::new(self)
    }

    /// Require both constraints, reporting every failing one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint, ConstraintExt};
    ///
    /// let range = constraint(|n: &i32| *n >= 0, "negative".to_string())
    ///     .and(constraint(|n: &i32| *n <= 100, "over_100".to_string()));
    ///
    /// assert!(range.accepts(&50));
    /// assert_eq!(range.problem_with(&101).as_deref(), Some("over_100"));
    /// ```
    fn and<C>(self, other: C) -> Parallel<T, BoxedConstraint<T, Self::Problem>>
    where
        Self: 'static,
        C: Constraint<T, Problem = Self::Problem> + 'static,
    {
        parallel(crate::NonEmptyVec::new(self.boxed(), vec![other.boxed()]))
    }

    /// Accept when either constraint accepts. A rejection reports both
    /// problems.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint, ConstraintExt};
    ///
    /// let edge = constraint(|n: &i32| *n <= 0, "positive".to_string())
    ///     .or(constraint(|n: &i32| *n >= 100, "under_100".to_string()));
    ///
    /// assert!(edge.accepts(&-5));
    /// assert!(edge.accepts(&150));
    /// assert_eq!(edge.problem_with(&50).as_deref(), Some("positive under_100"));
    /// ```
    fn or<C>(self, other: C) -> AnyOf<T, BoxedConstraint<T, Self::Problem>>
    where
        Self: 'static,
        C: Constraint<T, Problem = Self::Problem> + 'static,
    {
        any_of(crate::NonEmptyVec::new(self.boxed(), vec![other.boxed()]))
    }

    /// Accept exactly the values this constraint rejects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Constraint, ConstraintExt};
    ///
    /// let zero = constraint(|n: &i32| *n == 0, "not_zero".to_string());
    /// let non_zero = zero.not("zero".to_string());
    ///
    /// assert!(non_zero.accepts(&4));
    /// assert_eq!(non_zero.problem_with(&0).as_deref(), Some("zero"));
    /// ```
    fn not(self, error: Self::Problem) -> Not<T, Self>
    where
        Self::Problem: Clone + Send + Sync + 'static,
    {
        not(self, error)
    }
}

impl<T: ?Sized, C: Constraint<T>> ConstraintExt<T> for C {}

/// An optional override of how a constraint renders its problem.
///
/// Shared by every constraint type. Cloning shares the closure; it is never
/// mutated after construction.
pub(crate) struct ProblemBuilder<T: ?Sized, E> {
    builder: Option<Arc<dyn Fn(E, &T) -> E + Send + Sync>>,
}

impl<T: ?Sized, E> ProblemBuilder<T, E> {
    pub(crate) fn none() -> Self {
        ProblemBuilder { builder: None }
    }

    pub(crate) fn new<B>(builder: B) -> Self
    where
        B: Fn(E, &T) -> E + Send + Sync + 'static,
    {
        ProblemBuilder {
            builder: Some(Arc::new(builder)),
        }
    }

    pub(crate) fn render(&self, problem: E, value: &T) -> E {
        match &self.builder {
            Some(builder) => builder(problem, value),
            None => problem,
        }
    }
}

impl<T: ?Sized, E> Clone for ProblemBuilder<T, E> {
    fn clone(&self) -> Self {
        ProblemBuilder {
            builder: self.builder.clone(),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for ProblemBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builder {
            Some(_) => f.write_str("Some(<problem builder>)"),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn less_than(bound: i32) -> Custom<i32, String> {
        constraint(move |v: &i32| *v < bound, format!("not_less_than_{}", bound))
    }

    #[test]
    fn test_check_ok_and_err() {
        let c = less_than(3);
        assert!(c.check(&2).is_ok());
        assert_eq!(
            c.check(&3),
            Err(ValidationFailure::new("not_less_than_3".to_string()))
        );
    }

    #[test]
    fn test_apply_to_passes_error_through() {
        let c = less_than(3);
        let prior: Result<i32, String> = Err("prior".to_string());
        assert_eq!(c.apply_to(prior), Err("prior".to_string()));
    }

    #[test]
    fn test_apply_to_rejects() {
        assert_eq!(less_than(3).apply_to(Ok(5)), Err("not_less_than_3".to_string()));
    }

    #[test]
    fn test_transform_and_validate() {
        let c = less_than(3);
        assert_eq!(c.transform(1), Ok(1));
        assert_eq!(c.validate(1), Ok(1));
        assert_eq!(c.validate(4), Err("not_less_than_3".to_string()));
        assert!(c.transform(4).is_err());
    }

    #[test]
    fn test_and_reports_both() {
        let c = less_than(3).and(less_than(5));
        assert_eq!(
            c.problem_with(&9).as_deref(),
            Some("not_less_than_3 not_less_than_5")
        );
    }

    #[test]
    fn test_or_accepts_either() {
        let c = less_than(3).or(less_than(5).not("less_than_5".to_string()));
        assert!(c.accepts(&1));
        assert!(c.accepts(&7));
        assert_eq!(
            c.problem_with(&4).as_deref(),
            Some("not_less_than_3 less_than_5")
        );
    }

    #[test]
    fn test_ext_not() {
        let c = less_than(3).not("less_than_3".to_string());
        assert!(c.accepts(&3));
        assert_eq!(c.problem_with(&0).as_deref(), Some("less_than_3"));
    }

    #[test]
    fn test_problem_builder_render() {
        let none: ProblemBuilder<i32, String> = ProblemBuilder::none();
        assert_eq!(none.render("x".to_string(), &1), "x");

        let some = ProblemBuilder::new(|p: String, v: &i32| format!("{}@{}", p, v));
        assert_eq!(some.render("x".to_string(), &1), "x@1");
        assert_eq!(format!("{:?}", some), "Some(<problem builder>)");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_check_logs_rejection() {
            let _ = less_than(3).check(&4);
            assert!(logs_contain("check rejected value"));
        }

        #[test]
        #[traced_test]
        fn test_apply_to_logs_passthrough() {
            let _ = less_than(3).apply_to(Err("prior".to_string()));
            assert!(logs_contain("result already failed"));
            assert!(!logs_contain("apply_to rejected value"));
        }

        #[test]
        #[traced_test]
        fn test_accepted_value_logs_nothing() {
            let _ = less_than(3).apply_to(Ok(1));
            assert!(!logs_contain("rejected"));
        }
    }
}
