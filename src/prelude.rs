//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use causal_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`verror!`], [`serror!`], [`werror!`]
//! - **Types**: [`VError`], [`SError`], [`WError`], [`AggregateError`], [`PlainError`], [`Options`]
//! - **Traits**: [`ChainError`], [`IntoShared`]
//! - **Chain queries**: the [`chain`] module
//!
//! # Examples
//!
//! ```
//! use causal_error::prelude::*;
//!
//! fn load_config(path: &str) -> Result<String, VError> {
//!     std::fs::read_to_string(path).map_err(|io_err| {
//!         VError::with_options(
//!             Options::new().cause(PlainError::from_std(io_err)).info_entry("path", path),
//!             format!("failed to read \"{path}\""),
//!         )
//!     })
//! }
//!
//! let err = load_config("/definitely/not/here.toml").unwrap_err();
//! assert_eq!(chain::info(&err)["path"], "/definitely/not/here.toml");
//! assert!(chain::cause(&err).is_some());
//! ```

// Macros
pub use crate::{serror, verror, werror};

// Core types
pub use crate::types::{AggregateError, Options, PlainError, SError, VError, WError};

// Traits
pub use crate::traits::{ChainError, IntoShared, SharedError};

// Queries
pub use crate::chain;

/// Convenient result type alias for functions returning chained errors.
///
/// # Examples
///
/// ```
/// use causal_error::prelude::*;
///
/// fn parse_port(raw: &str) -> ChainResult<u16> {
///     raw.parse::<u16>().map_err(|err| {
///         VError::with_options(
///             Options::new().cause(PlainError::from_std(err)),
///             format!("invalid port \"{raw}\""),
///         )
///     })
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert!(parse_port("http").unwrap_err().message().starts_with("invalid port \"http\": "));
/// ```
pub type ChainResult<T, E = VError> = Result<T, E>;
