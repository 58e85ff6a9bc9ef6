//! Constructor macros for the chained error variants.
//!
//! Each macro takes positional arguments in any of the supported call shapes
//! and converts every argument with [`IntoArg`](crate::traits::IntoArg):
//!
//! - [`macro@crate::args`] - Builds the `Vec<Arg>` the variant constructors take.
//! - [`macro@crate::verror`] - Builds a [`VError`](crate::VError).
//! - [`macro@crate::serror`] - Builds an [`SError`](crate::SError).
//! - [`macro@crate::werror`] - Builds a [`WError`](crate::WError).
//!
//! All three constructors return `Result<_, ConfigError>`.
//!
//! # Examples
//!
//! ```
//! use causal_error::{verror, Options, PlainError};
//! use serde_json::json;
//!
//! // template and arguments
//! let a = verror!("missing %s", "file").unwrap();
//! // cause first
//! let b = verror!(PlainError::new("boom"), "wrapped").unwrap();
//! // typed options first
//! let c = verror!(Options::new().name("MyError"), "custom").unwrap();
//! // untyped options record first
//! let d = verror!(json!({ "name": "MyError" }), "custom").unwrap();
//!
//! assert_eq!(a.message(), "missing file");
//! assert_eq!(b.message(), "wrapped: boom");
//! assert_eq!(c.name(), d.name());
//! ```

/// Converts each argument with [`IntoArg`](crate::traits::IntoArg) and
/// collects them into a `Vec<Arg>`.
///
/// # Examples
///
/// ```
/// use causal_error::{args, types::Arg};
///
/// let argv = args!["%s has %d items", "cart", 3];
/// assert_eq!(argv.len(), 3);
/// assert!(matches!(argv[0], Arg::Value(_)));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {{
        let argv: ::std::vec::Vec<$crate::types::Arg> =
            ::std::vec![$($crate::traits::IntoArg::into_arg($arg)),*];
        argv
    }};
}

/// Builds a [`VError`](crate::VError) from positional arguments.
///
/// # Examples
///
/// ```
/// use causal_error::{verror, PlainError};
///
/// let err = verror!(PlainError::new("no such file"), "failed to stat \"%s\"", "/junk").unwrap();
/// assert_eq!(err.to_string(), "VError: failed to stat \"/junk\": no such file");
/// ```
#[macro_export]
macro_rules! verror {
    ($($arg:expr),* $(,)?) => {
        $crate::VError::new($crate::args![$($arg),*])
    };
}

/// Builds an [`SError`](crate::SError) from positional arguments.
///
/// # Examples
///
/// ```
/// use causal_error::{serror, ConfigError};
///
/// let err = serror!("disk %s is %d%% full", "sda", 97).unwrap();
/// assert_eq!(err.message(), "disk sda is 97% full");
///
/// let rejected = serror!("value is %s", None::<&str>);
/// assert!(matches!(rejected, Err(ConfigError::Format(_))));
/// ```
#[macro_export]
macro_rules! serror {
    ($($arg:expr),* $(,)?) => {
        $crate::SError::new($crate::args![$($arg),*])
    };
}

/// Builds a [`WError`](crate::WError) from positional arguments.
///
/// # Examples
///
/// ```
/// use causal_error::{werror, PlainError};
///
/// let err = werror!(PlainError::new("bad"), "worse").unwrap();
/// assert_eq!(err.message(), "worse");
/// assert_eq!(err.to_string(), "WError: worse; caused by Error: bad");
/// ```
#[macro_export]
macro_rules! werror {
    ($($arg:expr),* $(,)?) => {
        $crate::WError::new($crate::args![$($arg),*])
    };
}
