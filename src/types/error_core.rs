//! The record every variant embeds, and the shared assembly step.

use crate::traits::SharedError;
use crate::types::args::Parsed;
use crate::types::trace;
use crate::types::InfoMap;

/// Per-variant construction policy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Policy {
    pub(crate) default_name: &'static str,
    /// Fully qualified path of the variant type; its methods are trimmed from traces.
    pub(crate) boundary: &'static str,
}

/// Fields shared by `VError`, `SError`, `WError`, and `AggregateError`.
#[derive(Debug, Clone)]
pub(crate) struct ErrorCore {
    pub(crate) name: String,
    pub(crate) short_message: String,
    pub(crate) message: String,
    pub(crate) cause: Option<SharedError>,
    pub(crate) info: InfoMap,
    pub(crate) stack: String,
}

impl ErrorCore {
    /// Builds the record from normalized arguments.
    ///
    /// The cause's message is appended as `": {cause}"` unless the options ask
    /// to skip it; this happens even when the short message is empty.
    pub(crate) fn assemble(parsed: Parsed, policy: Policy) -> Self {
        let Parsed { options, short_message } = parsed;

        let name = options
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| policy.default_name.to_owned());

        let mut message = short_message.clone();
        if let Some(cause) = options.cause.as_deref() {
            if !options.skip_cause_message {
                message.push_str(": ");
                message.push_str(cause.message());
            }
        }

        let boundary = options.constructor_opt.as_deref().unwrap_or(policy.boundary);
        let stack = trace::capture(trace::header(&name, &message), boundary);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            error.name = %name,
            error.message = %message,
            error.has_cause = options.cause.is_some(),
            "assembled error value"
        );

        Self {
            name,
            short_message,
            message,
            cause: options.cause,
            info: options.info.unwrap_or_default(),
            stack,
        }
    }

    /// `toString()` rendering: `"{name}: {message}"`, or the name alone.
    pub(crate) fn fmt_plain(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// Implements `std::error::Error` and `ChainError` for a type with a
/// `core: ErrorCore` field.
macro_rules! delegate_to_core {
    ($type:ty) => {
        delegate_to_core!($type, |_this| None);
    };
    ($type:ty, |$this:ident| $aggregate:expr) => {
        impl ::std::error::Error for $type {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                self.core
                    .cause
                    .as_deref()
                    .map(|cause| cause as &(dyn ::std::error::Error + 'static))
            }
        }

        impl $crate::traits::ChainError for $type {
            #[inline]
            fn name(&self) -> &str {
                &self.core.name
            }

            #[inline]
            fn message(&self) -> &str {
                &self.core.message
            }

            #[inline]
            fn direct_cause(&self) -> Option<$crate::traits::SharedError> {
                self.core.cause.clone()
            }

            #[inline]
            fn own_info(&self) -> Option<&$crate::types::InfoMap> {
                Some(&self.core.info)
            }

            #[inline]
            fn stack(&self) -> &str {
                &self.core.stack
            }

            #[inline]
            fn as_aggregate(&self) -> Option<&$crate::types::AggregateError> {
                let $this = self;
                $aggregate
            }
        }

        $crate::impl_into_shared!($type);
    };
}

pub(crate) use delegate_to_core;
