//! Negation

use std::fmt;
use std::sync::Arc;

use crate::constraint::{Constraint, ProblemBuilder};

/// Accepts exactly the values its child rejects.
///
/// A rejection by `Not` means the child accepted, so there is no child
/// problem to report; `Not` carries its own error instead.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint, not, Constraint};
///
/// let blank = constraint(|s: &str| s.trim().is_empty(), "not_blank".to_string());
/// let filled = not(blank, "blank".to_string());
///
/// assert!(filled.accepts("text"));
/// assert_eq!(filled.problem_with("   ").as_deref(), Some("blank"));
/// ```
pub struct Not<T: ?Sized, C: Constraint<T>> {
    inner: C,
    error: Arc<dyn Fn(&T) -> C::Problem + Send + Sync>,
    problem_builder: ProblemBuilder<T, C::Problem>,
}

impl<T: ?Sized, C: Constraint<T>> Not<T, C> {
    /// The negated constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Not<T, C> {
    type Problem = C::Problem;

    #[inline]
    fn accepts(&self, value: &T) -> bool {
        !self.inner.accepts(value)
    }

    fn problem_with(&self, value: &T) -> Option<C::Problem> {
        if self.accepts(value) {
            return None;
        }
        Some(self.problem_builder.render((self.error)(value), value))
    }

    fn with_problem_builder<B>(&self, builder: B) -> Self
    where
        Self: Clone,
        B: Fn(C::Problem, &T) -> C::Problem + Send + Sync + 'static,
    {
        let mut next = self.clone();
        next.problem_builder = ProblemBuilder::new(builder);
        next
    }
}

impl<T: ?Sized, C: Constraint<T> + Clone> Clone for Not<T, C> {
    fn clone(&self) -> Self {
        Not {
            inner: self.inner.clone(),
            error: Arc::clone(&self.error),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, C: Constraint<T> + fmt::Debug> fmt::Debug for Not<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Not")
            .field("inner", &self.inner)
            .field("problem_builder", &self.problem_builder)
            .finish_non_exhaustive()
    }
}

/// Negate a constraint, reporting a constant problem id on rejection.
pub fn not<T, C>(constraint: C, error: C::Problem) -> Not<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
    C::Problem: Clone + Send + Sync + 'static,
{
    not_with(constraint, move |_: &T| error.clone())
}

/// Negate a constraint, producing the problem from the rejected value.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint, not_with, Constraint};
///
/// let reserved = constraint(|name: &str| name == "root", "not_reserved".to_string());
/// let allowed = not_with(reserved, |name: &str| format!("'{}' is reserved", name));
///
/// assert_eq!(allowed.problem_with("root").as_deref(), Some("'root' is reserved"));
/// ```
pub fn not_with<T, C, F>(constraint: C, error: F) -> Not<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
    F: Fn(&T) -> C::Problem + Send + Sync + 'static,
{
    Not {
        inner: constraint,
        error: Arc::new(error),
        problem_builder: ProblemBuilder::none(),
    }
}
