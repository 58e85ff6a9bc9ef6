//! The standard chained error.

use core::fmt::{self, Display};

use crate::types::args::{parse_constructor_arguments, Arg, Options, Parsed};
use crate::types::config_error::ConfigResult;
use crate::types::error_core::{delegate_to_core, ErrorCore, Policy};

const POLICY: Policy = Policy {
    default_name: VError::DEFAULT_NAME,
    boundary: "causal_error::types::verror::VError",
};

/// Chained error whose message folds in its cause's message.
///
/// Format arguments are lenient: a null argument prints as `"null"` instead of
/// failing, unless [`Options::strict`] is set.
///
/// # Examples
///
/// ```
/// use causal_error::{chain, verror, PlainError};
///
/// let inner = PlainError::new("bad");
/// let mid = verror!(inner, "worse").unwrap();
/// assert_eq!(mid.message(), "worse: bad");
///
/// let outer = verror!(mid, "what next").unwrap();
/// assert_eq!(outer.message(), "what next: worse: bad");
/// assert_eq!(outer.to_string(), "VError: what next: worse: bad");
/// assert!(chain::info(&outer).is_empty());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct VError {
    pub(crate) core: ErrorCore,
}

impl VError {
    /// Name used when the options do not supply one.
    pub const DEFAULT_NAME: &'static str = "VError";

    /// Builds an error from positional arguments in any of the supported call
    /// shapes (see [`crate::types::args`]).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::ConfigError) when the arguments are
    /// malformed or the message cannot be formatted.
    pub fn new(argv: Vec<Arg>) -> ConfigResult<Self> {
        let parsed = parse_constructor_arguments(argv, false)?;
        Ok(Self { core: ErrorCore::assemble(parsed, POLICY) })
    }

    /// Builds an error from typed options and a literal short message.
    ///
    /// Nothing is formatted, so this cannot fail.
    pub fn with_options(options: Options, short_message: impl Into<String>) -> Self {
        let parsed = Parsed { options, short_message: short_message.into() };
        Self { core: ErrorCore::assemble(parsed, POLICY) }
    }

    /// The name of this error.
    #[inline]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    /// The full message, including the cause chain's messages.
    #[inline]
    pub fn message(&self) -> &str {
        &self.core.message
    }

    /// This error's own contribution to the message.
    #[inline]
    pub fn short_message(&self) -> &str {
        &self.core.short_message
    }
}

impl Display for VError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core.fmt_plain(f)
    }
}

delegate_to_core!(VError);
