//! Tracing integration for causal-error.
//!
//! This module connects chained errors with the `tracing` ecosystem: span
//! metadata can be recorded in an error's info bag, and finished errors can be
//! reported as a single structured event.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! causal-error = { version = "0.1", features = ["tracing"] }
//! ```

use serde_json::Value;
use tracing::Span;

use crate::chain;
use crate::traits::ChainError;
use crate::types::{InfoMap, Options};

/// Converts a tracing span's metadata into info entries.
///
/// Produces `span.name`, `span.target`, and `span.level`. A span without
/// metadata (such as [`Span::none`]) yields an empty map.
pub fn span_info(span: &Span) -> InfoMap {
    let mut info = InfoMap::new();
    if let Some(metadata) = span.metadata() {
        info.insert("span.name".to_owned(), Value::from(metadata.name()));
        info.insert("span.target".to_owned(), Value::from(metadata.target()));
        info.insert("span.level".to_owned(), Value::from(metadata.level().as_str()));
    }
    info
}

/// Emits one `ERROR` event describing `err` and its chain.
///
/// The event carries the error's name and message, its merged info bag
/// rendered as JSON, and the number of causes below it.
///
/// # Example
///
/// ```rust
/// use causal_error::{tracing_ext::log_error, verror, PlainError};
///
/// let err = verror!(PlainError::new("connection reset"), "sync failed").unwrap();
/// log_error(&err);
/// ```
pub fn log_error(err: &dyn ChainError) {
    let info = Value::Object(chain::info(err));
    let depth = chain::causes(err).count();

    tracing::error!(
        error.name = %err.name(),
        error.message = %err.message(),
        error.info = %info,
        error.chain_depth = depth,
        "{err}"
    );
}

/// Extension trait for [`Options`] that records span metadata as info.
///
/// Entries already present in the options take precedence over span entries.
pub trait OptionsSpanExt: Sized {
    /// Records the current span's metadata.
    ///
    /// # Example
    ///
    /// ```rust
    /// use causal_error::tracing_ext::OptionsSpanExt;
    /// use causal_error::{verror, Options};
    ///
    /// let err = verror!(Options::new().with_current_span(), "lookup failed").unwrap();
    /// assert_eq!(err.message(), "lookup failed");
    /// ```
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Records a specific span's metadata.
    fn with_span(self, span: &Span) -> Self;
}

impl OptionsSpanExt for Options {
    fn with_span(mut self, span: &Span) -> Self {
        let entries = span_info(span);
        if entries.is_empty() {
            return self;
        }
        let info = self.info.get_or_insert_with(InfoMap::new);
        for (key, value) in entries {
            info.entry(key).or_insert(value);
        }
        self
    }
}
