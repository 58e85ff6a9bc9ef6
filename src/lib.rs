//! Chained errors with printf-style messages, structured info, and aggregates.
//!
//! An error built here records a name, a formatted message, an optional cause,
//! a bag of diagnostic properties, and a trace captured at construction. The
//! [`chain`] module walks the resulting cause chains.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `causal_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Causes
//!
//! ```
//! use causal_error::{verror, PlainError};
//!
//! let err1 = PlainError::new("no such file or directory");
//! let err2 = verror!(err1, "failed to stat \"%s\"", "/junk").unwrap();
//! let err3 = verror!(err2, "request failed").unwrap();
//!
//! assert_eq!(
//!     err3.message(),
//!     "request failed: failed to stat \"/junk\": no such file or directory"
//! );
//! ```
//!
//! ## Structured Info
//!
//! ```
//! use causal_error::{chain, verror, Options, PlainError};
//!
//! let err1 = verror!(
//!     Options::new()
//!         .name("ConnectionError")
//!         .cause(PlainError::new("connection refused"))
//!         .info_entry("remote_ip", "127.0.0.1")
//!         .info_entry("port", 215),
//!     "failed to connect to \"%s:%d\"",
//!     "127.0.0.1",
//!     215
//! )
//! .unwrap();
//! let err2 = verror!(
//!     Options::new().name("RequestError").cause(err1).info_entry("errno", "EBADREQUEST"),
//!     "request failed"
//! )
//! .unwrap();
//!
//! let info = chain::info(&err2);
//! assert_eq!(info["errno"], "EBADREQUEST");
//! assert_eq!(info["port"], 215);
//! ```
//!
//! ## Aggregating Parallel Failures
//!
//! ```
//! use causal_error::{chain, AggregateError, PlainError};
//!
//! let err = AggregateError::new([PlainError::new("abc"), PlainError::new("def")]).unwrap();
//! assert_eq!(err.message(), "first of 2 errors: abc");
//!
//! let mut seen = Vec::new();
//! chain::error_for_each(&err, |e| seen.push(e.message().to_owned()));
//! assert_eq!(seen, ["abc", "def"]);
//! ```

/// Queries over cause chains
pub mod chain;
/// Constructor macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for chained errors
pub mod traits;
/// Error value types and constructor arguments
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::{ChainError, IntoArg, IntoShared, SharedError};
pub use types::trace::{capture_mode, set_capture_mode};
pub use types::{
    AggregateError, Arg, CaptureMode, ConfigError, ConfigResult, ErrorVec, FormatError, InfoMap,
    Options, PlainError, SError, VError, WError,
};
