//! # Ballast
//!
//! Composable value constraints.
//!
//! A constraint pairs an acceptance predicate with failure reporting.
//! Constraints are built from closures, combined with logical combinators,
//! and then used in whichever style fits the call site:
//!
//! - **boolean**: `accepts` / `problem_with`
//! - **failing**: `check`, returning a [`ValidationFailure`]
//! - **monadic**: `apply_to`, threading a `Result` without unwrapping it
//!
//! The three styles never disagree about a value.
//!
//! ## Quick Example
//!
//! ```rust
//! use ballast::prelude::*;
//!
//! let less_than_3 = constraint(|v: &i32| *v < 3, "not_less_than_3".to_string());
//! let less_than_5 = constraint(|v: &i32| *v < 5, "not_less_than_5".to_string());
//! let c = parallel(NonEmptyVec::new(less_than_3, vec![less_than_5]));
//!
//! // Boolean
//! assert!(c.accepts(&2));
//! assert_eq!(c.problem_with(&6).as_deref(), Some("not_less_than_3 not_less_than_5"));
//!
//! // Failing
//! assert!(c.check(&6).is_err());
//!
//! // Monadic: existing errors pass through untouched
//! assert_eq!(c.apply_to(Ok(2)), Ok(2));
//! assert_eq!(c.apply_to(Err("prior".to_string())), Err("prior".to_string()));
//!
//! // Per-instance rendering override
//! let c = c.with_problem_builder(|_, _| "This was a fault".to_string());
//! assert_eq!(c.problem_with(&7).as_deref(), Some("This was a fault"));
//! ```
//!
//! Problems are raw ids. Translating them for users happens outside the
//! constraint layer, through [`ValidationFailure::translate`] and a
//! [`Translator`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod constraint;
pub mod error;
pub mod nonempty;
pub mod problem;
pub mod testing;
pub mod translate;

// Re-exports
pub use constraint::{
    any_of, constraint, constraint_with, not, not_with, parallel, sequential, AnyOf,
    BoxedConstraint, Constraint, ConstraintExt, Custom, Not, Parallel, Sequential,
};
pub use error::ValidationFailure;
pub use nonempty::NonEmptyVec;
pub use problem::Problem;
pub use translate::Translator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constraint::{
        any_of, constraint, constraint_with, not, not_with, parallel, sequential, Constraint,
        ConstraintExt,
    };
    pub use crate::error::ValidationFailure;
    pub use crate::nonempty::NonEmptyVec;
}
