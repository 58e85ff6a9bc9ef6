//! One error value standing for several.

use core::fmt::{self, Display};
use std::sync::Arc;

use crate::traits::{IntoShared, SharedError};
use crate::types::args::{Options, Parsed};
use crate::types::config_error::{ConfigError, ConfigResult};
use crate::types::error_core::{delegate_to_core, ErrorCore, Policy};
use crate::types::ErrorVec;

const POLICY: Policy = Policy {
    default_name: AggregateError::NAME,
    boundary: "causal_error::types::aggregate::AggregateError",
};

/// An ordered, non-empty collection of errors behind a single error value.
///
/// Consumers that only deal with one error can treat it as a normal error: its
/// cause is the first error and its message summarizes the rest. Consumers
/// that care can walk [`iter`](Self::iter) or use
/// [`error_for_each`](crate::chain::error_for_each).
///
/// # Examples
///
/// ```
/// use causal_error::{AggregateError, PlainError};
///
/// let err = AggregateError::new([
///     PlainError::new("failed to resolve DNS name \"abc.example.com\""),
///     PlainError::new("failed to resolve DNS name \"def.example.com\""),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     err.message(),
///     "first of 2 errors: failed to resolve DNS name \"abc.example.com\""
/// );
/// assert_eq!(err.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct AggregateError {
    pub(crate) core: ErrorCore,
    errors: ErrorVec<SharedError>,
}

impl AggregateError {
    /// Fixed name of every aggregate.
    pub const NAME: &'static str = "AggregateError";

    /// Aggregates `errors`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyErrorList`] when `errors` is empty.
    pub fn new<I>(errors: I) -> ConfigResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoShared,
    {
        let errors: ErrorVec<SharedError> = errors.into_iter().map(IntoShared::into_shared).collect();
        if errors.is_empty() {
            return Err(ConfigError::EmptyErrorList);
        }
        Ok(Self::from_non_empty(errors))
    }

    /// Callers guarantee `errors` is non-empty.
    pub(crate) fn from_non_empty(errors: ErrorVec<SharedError>) -> Self {
        let count = errors.len();
        let short_message = format!("first of {count} error{}", if count == 1 { "" } else { "s" });

        let mut options = Options::new().name(Self::NAME);
        options.cause = errors.first().map(Arc::clone);

        let core = ErrorCore::assemble(Parsed { options, short_message }, POLICY);
        Self { core, errors }
    }

    /// Always [`AggregateError::NAME`].
    #[inline]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.core.message
    }

    /// The `"first of N errors"` summary, without the first error's message.
    #[inline]
    pub fn short_message(&self) -> &str {
        &self.core.short_message
    }

    /// Returns a copy of the contained errors in their original order.
    ///
    /// Changing the returned vector does not affect the aggregate.
    pub fn errors(&self) -> Vec<SharedError> {
        self.errors.to_vec()
    }

    /// Iterates over the contained errors in their original order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }

    /// Number of contained errors; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; provided for symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a SharedError;
    type IntoIter = core::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core.fmt_plain(f)
    }
}

delegate_to_core!(AggregateError, |this| Some(this));
