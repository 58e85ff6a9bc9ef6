//! Queries over cause chains.
//!
//! Every function here takes `&dyn ChainError`, so it works the same for this
//! crate's variants, adapted foreign errors, and custom [`ChainError`]
//! implementations. Chains are assumed finite; none of these functions bound
//! their walk.
//!
//! # Examples
//!
//! ```
//! use causal_error::{chain, verror, Options, PlainError};
//!
//! let inner = PlainError::new("bad");
//! let mid = verror!(inner, "worse").unwrap();
//! let outer = verror!(
//!     Options::new().name("BigError").cause(mid).info_entry("ip", "127.0.0.1"),
//!     "what next"
//! )
//! .unwrap();
//!
//! assert_eq!(outer.message(), "what next: worse: bad");
//! assert_eq!(chain::info(&outer)["ip"], "127.0.0.1");
//! assert_eq!(chain::causes(&outer).count(), 2);
//! assert!(chain::full_stack(&outer).contains("\ncaused by: "));
//! ```

use std::sync::Arc;

use crate::traits::{ChainError, IntoShared, SharedError};
use crate::types::{AggregateError, ConfigError, ConfigResult, ErrorVec, InfoMap};

/// Returns the direct cause of `err`, or `None` when it has none.
#[inline]
pub fn cause(err: &dyn ChainError) -> Option<SharedError> {
    err.direct_cause()
}

/// Iterator over the causes of an error, nearest first.
///
/// Created by [`causes`]. The starting error itself is not yielded.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Causes {
    next: Option<SharedError>,
}

impl Iterator for Causes {
    type Item = SharedError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.direct_cause();
        Some(current)
    }
}

impl core::iter::FusedIterator for Causes {}

/// Walks the cause chain of `err`, excluding `err`.
pub fn causes(err: &dyn ChainError) -> Causes {
    Causes { next: err.direct_cause() }
}

/// Merges the info bags of `err` and all its causes.
///
/// On a key collision the value from the error closer to `err` wins. The
/// result is a fresh map, empty when no error in the chain carries info.
pub fn info(err: &dyn ChainError) -> InfoMap {
    let mut merged = err.own_info().cloned().unwrap_or_default();
    for cause in causes(err) {
        let Some(own) = cause.own_info() else { continue };
        for (key, value) in own {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Finds the first error in the chain, starting with `err` itself, whose own
/// name is `name`.
///
/// The returned reference points at the matching error, not a copy, so
/// `Arc::ptr_eq` holds against the original. Taking `&SharedError` is what
/// lets a match on `err` itself be returned as a shared handle; for an
/// owned or borrowed error use [`inspect_cause_by_name`].
///
/// # Errors
///
/// Returns [`ConfigError::EmptyName`] when `name` is empty.
pub fn find_cause_by_name(err: &SharedError, name: &str) -> ConfigResult<Option<SharedError>> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if err.name() == name {
        return Ok(Some(Arc::clone(err)));
    }
    Ok(causes(&**err).find(|cause| cause.name() == name))
}

/// Calls `f` with the first error in the chain, starting with `err` itself,
/// whose own name is `name`, and returns its result.
///
/// Works on any `&dyn ChainError`; the match is only borrowed for the call.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyName`] when `name` is empty.
///
/// # Examples
///
/// ```
/// use causal_error::{chain, verror, PlainError};
///
/// let err = verror!(PlainError::named("IoError", "disk gone"), "save failed").unwrap();
/// let message = chain::inspect_cause_by_name(&err, "IoError", |e| e.message().to_owned());
/// assert_eq!(message.unwrap().as_deref(), Some("disk gone"));
/// ```
pub fn inspect_cause_by_name<R, F>(
    err: &dyn ChainError,
    name: &str,
    f: F,
) -> ConfigResult<Option<R>>
where
    F: FnOnce(&dyn ChainError) -> R,
{
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if err.name() == name {
        return Ok(Some(f(err)));
    }
    Ok(causes(err).find(|cause| cause.name() == name).map(|found| f(&*found)))
}

/// Returns whether `err` or any of its causes is named `name`.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyName`] when `name` is empty.
pub fn has_cause_with_name(err: &dyn ChainError, name: &str) -> ConfigResult<bool> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    Ok(err.name() == name || causes(err).any(|cause| cause.name() == name))
}

/// Concatenates the traces of `err` and its causes, separated by
/// `"\ncaused by: "`.
pub fn full_stack(err: &dyn ChainError) -> String {
    let mut out = err.stack().to_owned();
    for cause in causes(err) {
        out.push_str("\ncaused by: ");
        out.push_str(cause.stack());
    }
    out
}

/// Collapses a list of errors into at most one.
///
/// Returns `None` for an empty list, the element itself for a single-element
/// list, and an [`AggregateError`] preserving order otherwise.
///
/// # Examples
///
/// ```
/// use causal_error::{chain, PlainError, SharedError};
/// use std::sync::Arc;
///
/// let only: SharedError = Arc::new(PlainError::new("alone"));
/// let same = chain::error_from_list([Arc::clone(&only)]).unwrap();
/// assert!(Arc::ptr_eq(&only, &same));
///
/// assert!(chain::error_from_list(Vec::<SharedError>::new()).is_none());
/// ```
pub fn error_from_list<I>(errors: I) -> Option<SharedError>
where
    I: IntoIterator,
    I::Item: IntoShared,
{
    let mut errors: ErrorVec<SharedError> = errors.into_iter().map(IntoShared::into_shared).collect();
    match errors.len() {
        0 => None,
        1 => errors.pop(),
        _ => Some(Arc::new(AggregateError::from_non_empty(errors))),
    }
}

/// Calls `f` once per contained error when `err` is an aggregate, in order,
/// and once with `err` otherwise.
pub fn error_for_each<F>(err: &dyn ChainError, mut f: F)
where
    F: FnMut(&dyn ChainError),
{
    match err.as_aggregate() {
        Some(aggregate) => aggregate.iter().for_each(|inner| f(&**inner)),
        None => f(err),
    }
}
