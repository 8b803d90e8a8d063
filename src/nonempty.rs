//! Non-empty vector type for combinator children and accumulated problems
//!
//! `NonEmptyVec<T>` is a vector guaranteed to contain at least one element.
//! Every n-ary combinator takes its children as a `NonEmptyVec`, so "a
//! conjunction of nothing" cannot be built by accident.
//!
//! # Examples
//!
//! ```
//! use ballast::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
//! assert_eq!(nev.head(), &1);
//! assert_eq!(nev.tail(), &[2, 3, 4]);
//! assert_eq!(nev.len(), 4);
//! ```

use crate::problem::Problem;

/// A non-empty vector guaranteed to contain at least one element.
///
/// # Example
///
/// ```
/// use ballast::NonEmptyVec;
///
/// let nev = NonEmptyVec::new("a", vec!["b"]);
/// assert_eq!(nev.into_vec(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use ballast::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use ballast::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// Get the first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Get the number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Push an element to the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Map a function over all elements, preserving order.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

// Accumulated problems concatenate.
impl<T> Problem for NonEmptyVec<T> {
    fn join(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NonEmptyVec;

    impl<T: Serialize> Serialize for NonEmptyVec<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let items = Vec::<T>::deserialize(deserializer)?;
            NonEmptyVec::from_vec(items)
                .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
        }
    }
}
