//! Aggregation of problems reported by several constraints
//!
//! When a combinator such as [`Parallel`](crate::Parallel) rejects a value
//! because more than one child rejected it, every child's problem is kept and
//! joined in child order. `Problem` is the associative operation doing that
//! join.
//!
//! # Laws
//!
//! ```text
//! a.join(b).join(c) == a.join(b.join(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use ballast::Problem;
//!
//! // Problem ids are joined by a single space
//! let joined = "not_less_than_3".to_string().join("not_less_than_5".to_string());
//! assert_eq!(joined, "not_less_than_3 not_less_than_5");
//!
//! // Structured problems concatenate
//! assert_eq!(vec![1].join(vec![2, 3]), vec![1, 2, 3]);
//! ```

/// A problem payload that can be combined with another one.
///
/// Joining never drops, reorders, or deduplicates information: the left
/// operand comes first.
pub trait Problem: Sized {
    /// Join this problem with one reported after it.
    fn join(self, other: Self) -> Self;

    /// Join every problem of an iterator in order.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use ballast::Problem;
    ///
    /// let all = String::join_all(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(all.as_deref(), Some("a b"));
    ///
    /// assert_eq!(String::join_all(Vec::<String>::new()), None);
    /// ```
    fn join_all<I>(problems: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        problems.into_iter().reduce(Self::join)
    }
}

impl Problem for String {
    fn join(mut self, other: Self) -> Self {
        self.reserve(1 + other.len());
        self.push(' ');
        self.push_str(&other);
        self
    }
}

impl<T> Problem for Vec<T> {
    fn join(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
