//! Conjunction that stops at the first failing child

use std::fmt;

use crate::constraint::{Constraint, ProblemBuilder};
use crate::nonempty::NonEmptyVec;

/// All children must accept; only the first rejection is reported.
///
/// Children after the first rejecting one are not consulted.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint, sequential, Constraint, NonEmptyVec};
///
/// let present = constraint(|s: &String| !s.is_empty(), "empty".to_string());
/// let short = constraint(|s: &String| s.len() <= 3, "too_long".to_string());
/// let c = sequential(NonEmptyVec::new(present, vec![short]));
///
/// assert!(c.accepts(&"abc".to_string()));
/// assert_eq!(c.problem_with(&String::new()).as_deref(), Some("empty"));
/// assert_eq!(c.problem_with(&"abcd".to_string()).as_deref(), Some("too_long"));
/// ```
pub struct Sequential<T: ?Sized, C: Constraint<T>> {
    children: NonEmptyVec<C>,
    problem_builder: ProblemBuilder<T, C::Problem>,
}

impl<T: ?Sized, C: Constraint<T>> Sequential<T, C> {
    /// The children, in evaluation order.
    pub fn children(&self) -> &NonEmptyVec<C> {
        &self.children
    }
}

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Sequential<T, C> {
    type Problem = C::Problem;

    fn accepts(&self, value: &T) -> bool {
        self.children.iter().all(|child| child.accepts(value))
    }

    fn problem_with(&self, value: &T) -> Option<C::Problem> {
        let first = self
            .children
            .iter()
            .find_map(|child| child.problem_with(value))?;
        Some(self.problem_builder.render(first, value))
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

impl<T: ?Sized, C: Constraint<T> + Clone> Clone for Sequential<T, C> {
    fn clone(&self) -> Self {
        Sequential {
            children: self.children.clone(),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, C: Constraint<T> + fmt::Debug> fmt::Debug for Sequential<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequential")
            .field("children", &self.children)
            .field("problem_builder", &self.problem_builder)
            .finish()
    }
}

/// Combine constraints so that all must accept, reporting the first failure.
///
/// See [`Sequential`].
pub fn sequential<T, C>(constraints: NonEmptyVec<C>) -> Sequential<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
{
    Sequential {
        children: constraints,
        problem_builder: ProblemBuilder::none(),
    }
}
