//! Error value types and their construction machinery.
//!
//! - [`VError`], [`SError`], [`WError`]: the chained variants, differing in
//!   formatting strictness and in whether the cause's message is folded in.
//! - [`AggregateError`]: several errors behind one error value.
//! - [`PlainError`]: a basic error, and the adapter for foreign errors.
//! - [`Options`] / [`Arg`]: constructor arguments.
//!
//! # Examples
//!
//! ```
//! use causal_error::{chain, verror, Options, PlainError};
//!
//! let err = verror!(
//!     Options::new()
//!         .name("RequestError")
//!         .cause(PlainError::new("connection reset"))
//!         .info_entry("errno", "EBADREQUEST"),
//!     "request failed"
//! )
//! .unwrap();
//!
//! assert_eq!(err.to_string(), "RequestError: request failed: connection reset");
//! assert_eq!(chain::info(&err)["errno"], "EBADREQUEST");
//! ```
use smallvec::SmallVec;

pub mod aggregate;
pub mod args;
pub mod config_error;
pub(crate) mod error_core;
pub mod format;
pub mod plain;
pub mod serror;
pub mod trace;
pub mod verror;
pub mod werror;

pub use aggregate::*;
pub use args::{Arg, Options, Parsed};
pub use config_error::*;
pub use plain::*;
pub use serror::*;
pub use trace::CaptureMode;
pub use verror::*;
pub use werror::*;

/// SmallVec-backed collection used for aggregated errors.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations in the
/// common case of a handful of parallel failures.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Diagnostic properties attached to an error: string keys, arbitrary JSON values.
pub type InfoMap = serde_json::Map<String, serde_json::Value>;
