//! Core traits for chained errors.
//!
//! - [`ChainError`]: the capability every link of a cause chain provides
//! - [`IntoShared`]: conversion of owned or shared errors into a [`SharedError`]
//! - [`IntoArg`]: conversion of values into positional constructor arguments
//!
//! # Examples
//!
//! ```
//! use causal_error::traits::{ChainError, IntoShared};
//! use causal_error::PlainError;
//!
//! let shared = PlainError::new("disk full").into_shared();
//! assert_eq!(shared.name(), "Error");
//! assert_eq!(shared.message(), "disk full");
//! ```

pub mod chain_error;
pub mod into_arg;

pub use chain_error::{ChainError, IntoShared, SharedError};
pub use into_arg::IntoArg;
