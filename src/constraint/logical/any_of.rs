//! Disjunction

use std::fmt;

use crate::constraint::{Constraint, ProblemBuilder};
use crate::nonempty::NonEmptyVec;
use crate::problem::Problem;

/// At least one child must accept.
///
/// A rejection means every child rejected, so every child's problem is
/// joined in child order.
///
/// # Example
///
/// ```rust
/// use ballast::{any_of, constraint, Constraint, NonEmptyVec};
///
/// let negative = constraint(|v: &i32| *v < 0, "not_negative".to_string());
/// let large = constraint(|v: &i32| *v > 100, "not_large".to_string());
/// let c = any_of(NonEmptyVec::new(negative, vec![large]));
///
/// assert!(c.accepts(&-1));
/// assert!(c.accepts(&101));
/// assert_eq!(c.problem_with(&50).as_deref(), Some("not_negative not_large"));
/// ```
pub struct AnyOf<T: ?Sized, C: Constraint<T>> {
    children: NonEmptyVec<C>,
    problem_builder: ProblemBuilder<T, C::Problem>,
}

impl<T: ?Sized, C: Constraint<T>> AnyOf<T, C> {
    /// The children, in evaluation order.
    pub fn children(&self) -> &NonEmptyVec<C> {
        &self.children
    }
}

impl<T, C> Constraint<T> for AnyOf<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
    C::Problem: Problem,
{
    type Problem = C::Problem;

    fn accepts(&self, value: &T) -> bool {
        self.children.iter().any(|child| child.accepts(value))
    }

    fn problem_with(&self, value: &T) -> Option<C::Problem> {
        if self.accepts(value) {
            return None;
        }
        let problems = self
            .children
            .iter()
            .filter_map(|child| child.problem_with(value));
        let joined = <C::Problem as Problem>::join_all(problems)?;
        Some(self.problem_builder.render(joined, value))
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

impl<T: ?Sized, C: Constraint<T> + Clone> Clone for AnyOf<T, C> {
    fn clone(&self) -> Self {
        AnyOf {
            children: self.children.clone(),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, C: Constraint<T> + fmt::Debug> fmt::Debug for AnyOf<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("children", &self.children)
            .field("problem_builder", &self.problem_builder)
            .finish()
    }
}

/// Combine constraints so that at least one must accept.
///
/// See [`AnyOf`].
pub fn any_of<T, C>(constraints: NonEmptyVec<C>) -> AnyOf<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
{
    AnyOf {
        children: constraints,
        problem_builder: ProblemBuilder::none(),
    }
}
