//! The "error-shaped" capability shared by every participant in a cause chain.
//!
//! Chain utilities in [`crate::chain`] only ever see `&dyn ChainError`, so they
//! treat this crate's variants and adapted foreign errors identically.

use std::error::Error;
use std::sync::Arc;

use crate::types::{AggregateError, InfoMap};

/// Shared, ownership-free reference to an error in a cause chain.
///
/// Several errors may point at the same cause; the cause lives as long as any
/// of them does.
pub type SharedError = Arc<dyn ChainError>;

/// A value that can take part in a cause chain.
///
/// `Display` is the value's `toString()` rendering: `"{name}: {message}"`, or
/// just the name when the message is empty. Implementors whose message omits
/// the cause (like [`WError`](crate::WError)) may narrate it in `Display`.
///
/// # Implementing for Custom Types
///
/// ```
/// use causal_error::{ChainError, SharedError};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Timeout {
///     stack: String,
/// }
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("Timeout: deadline elapsed")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// impl ChainError for Timeout {
///     fn name(&self) -> &str {
///         "Timeout"
///     }
///
///     fn message(&self) -> &str {
///         "deadline elapsed"
///     }
///
///     fn stack(&self) -> &str {
///         &self.stack
///     }
/// }
///
/// let err: SharedError = std::sync::Arc::new(Timeout { stack: "Timeout".into() });
/// assert!(causal_error::chain::cause(&*err).is_none());
/// ```
pub trait ChainError: Error + Send + Sync + 'static {
    /// Category of the error, e.g. `"VError"` or a caller-supplied name.
    fn name(&self) -> &str;

    /// The full composed message.
    fn message(&self) -> &str;

    /// The direct cause, if any.
    ///
    /// Not named `cause` to stay clear of the deprecated `Error::cause`.
    fn direct_cause(&self) -> Option<SharedError> {
        None
    }

    /// Diagnostic properties attached to this error alone.
    fn own_info(&self) -> Option<&InfoMap> {
        None
    }

    /// The trace captured when this error was built.
    fn stack(&self) -> &str;

    /// Returns the aggregate view when this error holds several errors.
    fn as_aggregate(&self) -> Option<&AggregateError> {
        None
    }
}

/// Conversion into a [`SharedError`].
///
/// Implemented for every error type in this crate, for `Arc`s of them, and for
/// `SharedError` itself, so constructors can accept any of those.
pub trait IntoShared {
    fn into_shared(self) -> SharedError;
}

impl IntoShared for SharedError {
    #[inline]
    fn into_shared(self) -> SharedError {
        self
    }
}

impl<T: ChainError> IntoShared for Arc<T> {
    #[inline]
    fn into_shared(self) -> SharedError {
        self
    }
}

/// Implements [`IntoShared`] for an owned error type by wrapping it in an `Arc`.
#[macro_export]
macro_rules! impl_into_shared {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::IntoShared for $type {
                #[inline]
                fn into_shared(self) -> $crate::traits::SharedError {
                    ::std::sync::Arc::new(self)
                }
            }
        )+
    };
}
