//! Localization seam
//!
//! Constraints report raw problem ids such as `"not_less_than_3"`. Turning an
//! id into user-facing text is the job of an external translation service,
//! reached through the [`Translator`] trait. Nothing in the constraint or
//! combinator layer calls it; only [`ValidationFailure::translate`] does.
//!
//! [`ValidationFailure::translate`]: crate::ValidationFailure::translate
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use ballast::Translator;
//!
//! struct Catalog(HashMap<&'static str, &'static str>);
//!
//! impl Translator for Catalog {
//!     fn txt(&self, id: &str) -> String {
//!         self.0
//!             .get(id)
//!             .map(|text| text.to_string())
//!             .unwrap_or_else(|| format!("-{}-", id))
//!     }
//! }
//!
//! let catalog = Catalog(HashMap::from([("not_positive", "Must be positive")]));
//! assert_eq!(catalog.txt("not_positive"), "Must be positive");
//! assert_eq!(catalog.txt("unknown"), "-unknown-");
//! ```

/// Looks up user-facing text for a problem id.
pub trait Translator {
    /// Translate one id.
    fn txt(&self, id: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn txt(&self, id: &str) -> String {
        self(id)
    }
}
