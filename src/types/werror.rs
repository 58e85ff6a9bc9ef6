//! The wrapping chained error.

use core::fmt::{self, Display};

use crate::traits::{IntoShared, SharedError};
use crate::types::args::{parse_constructor_arguments, Arg};
use crate::types::config_error::ConfigResult;
use crate::types::error_core::{delegate_to_core, ErrorCore, Policy};

const POLICY: Policy = Policy {
    default_name: WError::DEFAULT_NAME,
    boundary: "causal_error::types::werror::WError",
};

/// Chained error that keeps its cause out of its message.
///
/// The message is the short message alone; `Display` narrates the chain as
/// `"{name}: {message}; caused by {cause}"`, recursively, for every cause with
/// a non-empty message.
///
/// Unlike the other variants, the cause slot can be replaced after
/// construction with [`WError::set_cause`]. This needs exclusive access, so an
/// error already shared as someone else's cause cannot be rewired.
///
/// # Examples
///
/// ```
/// use causal_error::{werror, PlainError};
///
/// let err = werror!(PlainError::new("root cause"), "proximate cause: %d issues", 3).unwrap();
/// assert_eq!(err.message(), "proximate cause: 3 issues");
/// assert_eq!(
///     err.to_string(),
///     "WError: proximate cause: 3 issues; caused by Error: root cause"
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct WError {
    pub(crate) core: ErrorCore,
}

impl WError {
    /// Name used when the options do not supply one.
    pub const DEFAULT_NAME: &'static str = "WError";

    /// Builds an error from positional arguments; the cause's message is not
    /// folded into this error's message.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::ConfigError) when the arguments are
    /// malformed or the message cannot be formatted.
    pub fn new(argv: Vec<Arg>) -> ConfigResult<Self> {
        let mut parsed = parse_constructor_arguments(argv, false)?;
        parsed.options = parsed.options.skip_cause_message(true);
        Ok(Self { core: ErrorCore::assemble(parsed, POLICY) })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.core.message
    }

    #[inline]
    pub fn short_message(&self) -> &str {
        &self.core.short_message
    }

    /// Replaces the cause and returns the new one.
    ///
    /// The message and the captured trace are left untouched; only `Display`
    /// and the chain utilities observe the new cause.
    pub fn set_cause(&mut self, cause: impl IntoShared) -> SharedError {
        let cause = cause.into_shared();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            error.name = %self.core.name,
            cause.name = %cause.name(),
            "replacing wrapped cause"
        );

        self.core.cause = Some(cause.clone());
        cause
    }
}

impl Display for WError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core.fmt_plain(f)?;
        match self.core.cause.as_deref() {
            Some(cause) if !cause.message().is_empty() => write!(f, "; caused by {cause}"),
            _ => Ok(()),
        }
    }
}

delegate_to_core!(WError);
