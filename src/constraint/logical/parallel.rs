//! Conjunction that reports every failing child

use std::fmt;

use crate::constraint::{Constraint, ProblemBuilder};
use crate::nonempty::NonEmptyVec;
use crate::problem::Problem;

/// All children must accept; every rejection is reported.
///
/// `problem_with` collects the problem of each child that rejects the value,
/// in child order, and joins them with [`Problem::join`] (a single space for
/// `String` problems). Children that accept contribute nothing.
///
/// A problem builder set on the `Parallel` is applied once, to the joined
/// problem. The children keep their own overrides.
///
/// # Example
///
/// ```rust
/// use ballast::{constraint, parallel, Constraint, NonEmptyVec};
///
/// let less_than_3 = constraint(|v: &i32| *v < 3, "not_less_than_3".to_string());
/// let less_than_5 = constraint(|v: &i32| *v < 5, "not_less_than_5".to_string());
/// let c = parallel(NonEmptyVec::new(less_than_3, vec![less_than_5]));
///
/// assert!(c.accepts(&2));
/// assert!(!c.accepts(&4));
/// assert_eq!(c.problem_with(&2), None);
/// assert_eq!(c.problem_with(&4).as_deref(), Some("not_less_than_3"));
/// assert_eq!(
///     c.problem_with(&6).as_deref(),
///     Some("not_less_than_3 not_less_than_5")
/// );
/// ```
pub struct Parallel<T: ?Sized, C: Constraint<T>> {
    children: NonEmptyVec<C>,
    problem_builder: ProblemBuilder<T, C::Problem>,
}

impl<T: ?Sized, C: Constraint<T>> Parallel<T, C> {
    /// Build a `Parallel` from a plain `Vec`.
    ///
    /// Returns `None` for an empty `Vec`: a conjunction needs at least one
    /// member.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ballast::{constraint, Custom, Parallel};
    ///
    /// let empty: Vec<Custom<i32, String>> = Vec::new();
    /// assert!(Parallel::<i32, _>::from_vec(empty).is_none());
    ///
    /// let one = vec![constraint(|v: &i32| *v > 0, "not_positive".to_string())];
    /// assert!(Parallel::<i32, _>::from_vec(one).is_some());
    /// ```
    pub fn from_vec(constraints: Vec<C>) -> Option<Self> {
        NonEmptyVec::from_vec(constraints).map(parallel)
    }

    /// The children, in evaluation order.
    pub fn children(&self) -> &NonEmptyVec<C> {
        &self.children
    }
}

impl<T, C> Constraint<T> for Parallel<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
    C::Problem: Problem,
{
    type Problem = C::Problem;

    fn accepts(&self, value: &T) -> bool {
        self.children.iter().all(|child| child.accepts(value))
    }

    fn problem_with(&self, value: &T) -> Option<C::Problem> {
        let failing = self
            .children
            .iter()
            .filter_map(|child| child.problem_with(value));
        let joined = <C::Problem as Problem>::join_all(failing)?;
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

impl<T: ?Sized, C: Constraint<T> + Clone> Clone for Parallel<T, C> {
    fn clone(&self) -> Self {
        Parallel {
            children: self.children.clone(),
            problem_builder: self.problem_builder.clone(),
        }
    }
}

impl<T: ?Sized, C: Constraint<T> + fmt::Debug> fmt::Debug for Parallel<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallel")
            .field("children", &self.children)
            .field("problem_builder", &self.problem_builder)
            .finish()
    }
}

/// Combine constraints so that all of them must accept.
///
/// See [`Parallel`].
pub fn parallel<T, C>(constraints: NonEmptyVec<C>) -> Parallel<T, C>
where
    T: ?Sized,
    C: Constraint<T>,
{
    Parallel {
        children: constraints,
        problem_builder: ProblemBuilder::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{constraint, ConstraintExt, Custom};

    fn less_than(bound: i32) -> Custom<i32, String> {
        constraint(move |v: &i32| *v < bound, format!("not_less_than_{}", bound))
    }

    fn three_and_five() -> Parallel<i32, Custom<i32, String>> {
        parallel(NonEmptyVec::new(less_than(3), vec![less_than(5)]))
    }

    #[test]
    fn test_accepts_when_all_accept() {
        assert!(three_and_five().accepts(&2));
        assert_eq!(three_and_five().problem_with(&2), None);
    }

    #[test]
    fn test_rejects_when_one_rejects() {
        let c = three_and_five();
        assert!(!c.accepts(&4));
        assert_eq!(c.problem_with(&4), Some("not_less_than_3".to_string()));
    }

    #[test]
    fn test_joins_in_child_order() {
        assert_eq!(
            three_and_five().problem_with(&6),
            Some("not_less_than_3 not_less_than_5".to_string())
        );

        let reversed = parallel(NonEmptyVec::new(less_than(5), vec![less_than(3)]));
        assert_eq!(
            reversed.problem_with(&6),
            Some("not_less_than_5 not_less_than_3".to_string())
        );
    }

    #[test]
    fn test_single_child() {
        let c = parallel(NonEmptyVec::singleton(less_than(3)));
        assert_eq!(c.problem_with(&3), Some("not_less_than_3".to_string()));
    }

    #[test]
    fn test_duplicate_problems_are_kept() {
        let c = parallel(NonEmptyVec::new(less_than(3), vec![less_than(3)]));
        assert_eq!(
            c.problem_with(&4),
            Some("not_less_than_3 not_less_than_3".to_string())
        );
    }

    #[test]
    fn test_child_overrides_are_kept() {
        let loud = less_than(3).with_problem_builder(|p, _| p.to_uppercase());
        let c = parallel(NonEmptyVec::new(loud, vec![less_than(5)]));
        assert_eq!(
            c.problem_with(&6),
            Some("NOT_LESS_THAN_3 not_less_than_5".to_string())
        );
    }

    #[test]
    fn test_problem_builder_applies_once_to_joined() {
        let c = three_and_five().with_problem_builder(|p, v| format!("[{}] for {}", p, v));
        assert_eq!(
            c.problem_with(&6),
            Some("[not_less_than_3 not_less_than_5] for 6".to_string())
        );
        assert_eq!(c.problem_with(&1), None);
    }

    #[test]
    fn test_problem_builder_leaves_original_and_children() {
        let original = three_and_five();
        let overridden = original.with_problem_builder(|_, _| "This was a fault".to_string());

        assert_eq!(overridden.problem_with(&7), Some("This was a fault".to_string()));
        assert_eq!(
            original.problem_with(&7),
            Some("not_less_than_3 not_less_than_5".to_string())
        );
        assert_eq!(
            overridden.children().head().problem_with(&7),
            Some("not_less_than_3".to_string())
        );
    }

    #[test]
    fn test_nested_parallel() {
        let inner = three_and_five().boxed();
        let positive = constraint(|v: &i32| *v > 0, "not_positive".to_string()).boxed();
        let outer = parallel(NonEmptyVec::new(positive, vec![inner]));

        assert!(outer.accepts(&1));
        assert_eq!(outer.problem_with(&-1), Some("not_positive".to_string()));
        assert_eq!(
            outer.problem_with(&9),
            Some("not_less_than_3 not_less_than_5".to_string())
        );
    }

    #[test]
    fn test_vec_problems_concatenate() {
        let a = constraint(|v: &i32| *v < 3, vec!["a"]);
        let b = constraint(|v: &i32| *v < 5, vec!["b"]);
        let c = parallel(NonEmptyVec::new(a, vec![b]));
        assert_eq!(c.problem_with(&9), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_from_vec() {
        assert!(Parallel::<i32, Custom<i32, String>>::from_vec(Vec::new()).is_none());
        let c = Parallel::<i32, _>::from_vec(vec![less_than(3), less_than(5)]).unwrap();
        assert_eq!(c.children().len(), 2);
    }
}
