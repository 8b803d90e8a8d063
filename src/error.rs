//! The failure surfaced by [`Constraint::check`](crate::Constraint::check)
//!
//! `check` is the "assert or explode" entry point of a constraint. In Rust it
//! returns a `#[must_use]` `Result` whose error is a `ValidationFailure`
//! carrying the rendered problem, so a rejected value cannot go unnoticed.
//!
//! # Example
//!
//! ```
//! use ballast::{constraint, Constraint};
//!
//! let positive = constraint(|n: &i32| *n > 0, "not_positive".to_string());
//!
//! let err = positive.check(&-1).unwrap_err();
//! assert_eq!(err.problem(), "not_positive");
//! assert_eq!(err.to_string(), "not_positive");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::translate::Translator;

/// A value was rejected by a constraint.
///
/// The wrapped problem is the raw, untranslated payload: the constraint layer
/// never localizes. Use [`ValidationFailure::translate`] at the edge of the
/// application to turn it into user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationFailure<E> {
    problem: E,
}

impl<E> ValidationFailure<E> {
    /// Wrap a rendered problem.
    pub fn new(problem: E) -> Self {
        ValidationFailure { problem }
    }

    /// Borrow the rendered problem.
    pub fn problem(&self) -> &E {
        &self.problem
    }

    /// Take the rendered problem back out.
    pub fn into_problem(self) -> E {
        self.problem
    }

    /// Transform the problem payload.
    ///
    /// # Example
    ///
    /// ```
    /// use ballast::ValidationFailure;
    ///
    /// let failure = ValidationFailure::new("too_short").map(str::len);
    /// assert_eq!(failure.problem(), &9);
    /// ```
    pub fn map<F, E2>(self, f: F) -> ValidationFailure<E2>
    where
        F: FnOnce(E) -> E2,
    {
        ValidationFailure::new(f(self.problem))
    }
}

impl<E: AsRef<str>> ValidationFailure<E> {
    /// Look every problem id up through a translator.
    ///
    /// An aggregate problem holds several ids joined by a single space. Each
    /// id is translated on its own and the results are joined the same way.
    /// This is the only place in the crate where a [`Translator`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use ballast::ValidationFailure;
    ///
    /// let failure = ValidationFailure::new("not_positive not_even");
    /// let text = failure.translate(&|id: &str| format!("<{}>", id));
    /// assert_eq!(text, "<not_positive> <not_even>");
    /// ```
    pub fn translate<L: Translator + ?Sized>(&self, translator: &L) -> String {
        self.problem
            .as_ref()
            .split(' ')
            .map(|id| translator.txt(id))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<E: fmt::Display> fmt::Display for ValidationFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

impl<E: fmt::Display + fmt::Debug> StdError for ValidationFailure<E> {}
