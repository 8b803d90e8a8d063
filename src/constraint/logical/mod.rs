//! Logical combinators over constraints
//!
//! Each combinator is itself a [`Constraint`](super::Constraint), so trees of
//! them can be built and reused wherever a single constraint is expected.
//!
//! | combinator | accepts when | reports |
//! |------------|--------------|---------|
//! | [`parallel`] | every child accepts | every failing child's problem, joined in order |
//! | [`sequential`] | every child accepts | the first failing child's problem |
//! | [`not`] | the child rejects | its own problem |
//! | [`any_of`] | some child accepts | every child's problem, joined in order |
//!
//! Children are always evaluated one after another in the order they were
//! given; problem ordering depends on it.

mod any_of;
mod not;
mod parallel;
mod sequential;

pub use any_of::{any_of, AnyOf};
pub use not::{not, not_with, Not};
pub use parallel::{parallel, Parallel};
pub use sequential::{sequential, Sequential};
