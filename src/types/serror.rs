//! The strict chained error.

use core::fmt::{self, Display};

use crate::types::args::{parse_constructor_arguments, Arg};
use crate::types::config_error::ConfigResult;
use crate::types::error_core::{delegate_to_core, ErrorCore, Policy};

const POLICY: Policy = Policy {
    default_name: SError::DEFAULT_NAME,
    boundary: "causal_error::types::serror::SError",
};

/// Like [`VError`](crate::VError), but a null format argument is an error.
///
/// # Examples
///
/// ```
/// use causal_error::{serror, ConfigError, FormatError};
/// use serde_json::Value;
///
/// let err = serror!("my %s string", Value::Null).unwrap_err();
/// assert!(matches!(err, ConfigError::Format(FormatError::NullArgument { .. })));
///
/// let ok = serror!("my %s string", "fine").unwrap();
/// assert_eq!(ok.to_string(), "SError: my fine string");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct SError {
    pub(crate) core: ErrorCore,
}

impl SError {
    /// Name used when the options do not supply one.
    pub const DEFAULT_NAME: &'static str = "SError";

    /// Builds an error from positional arguments, formatting strictly.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::ConfigError) when the arguments are
    /// malformed or a null argument reaches the formatter.
    pub fn new(argv: Vec<Arg>) -> ConfigResult<Self> {
        let parsed = parse_constructor_arguments(argv, true)?;
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
}

impl Display for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core.fmt_plain(f)
    }
}

delegate_to_core!(SError);
