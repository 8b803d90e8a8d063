//! Type-erased constraints
//!
//! Combinators hold homogeneous children. When the children are built
//! differently (a closure constraint next to a nested `Parallel`, say), erase
//! them into [`BoxedConstraint`] first.

use std::fmt;
use std::sync::Arc;

use super::{Constraint, ProblemBuilder};

/// A shared, type-erased constraint.
///
/// Created by [`ConstraintExt::boxed`](super::ConstraintExt::boxed).
pub struct BoxedConstraint<T: ?Sized, E> {
    inner: Arc<dyn Constraint<T, Problem = E>>,
    problem_builder: ProblemBuilder<T, E>,
}

impl<T: ?Sized, E> BoxedConstraint<T, E> {
    /// Erase a constraint.
    pub fn new<C>(constraint: C) -> Self
    where
        C: Constraint<T, Problem = E> + 'static,
    {
        BoxedConstraint {
            inner: Arc::new(constraint),
            problem_builder: ProblemBuilder::none(),
        }
    }
}

impl<T: ?Sized, E> Constraint<T> for BoxedConstraint<T, E> {
    type Problem = E;

    #[inline]
    fn accepts(&self, value: &T) -> bool {
        self.inner.accepts(value)
    }

    fn problem_with(&self, value: &T) -> Option<E> {
        self.inner
            .problem_with(value)
            .map(|problem| self.problem_builder.render(problem, value))
    }

    fn with_problem_builder<B>(&self, builder: B) -> Self
    where
        B: Fn(E, &T) -> E + Send + Sync + 'static,
    {
        BoxedConstraint {
            inner: Arc::clone(&self.inner),
            problem_builder: ProblemBuilder::new(builder),
        }
    }
}

impl<T: ?Sized, E> Clone for BoxedConstraint<T, E> {
    fn clone(&self) -> Self {
        BoxedConstraint {
            inner: Arc::clone(&self.inner),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for BoxedConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedConstraint")
            .field("problem_builder", &self.problem_builder)
            .finish_non_exhaustive()
    }
}
