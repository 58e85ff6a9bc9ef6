//! Plain errors and the adapter for foreign `std::error::Error` values.

use core::fmt::{self, Display};
use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use crate::traits::{ChainError, SharedError};
use crate::types::trace;

/// A basic error: a name, a message, a trace, and optionally a cause.
///
/// This is the counterpart of a host language's built-in error type. It is
/// also how foreign errors join a chain: [`PlainError::from_std`] adapts any
/// `std::error::Error`, snapshotting its `source()` chain into causes.
///
/// # Examples
///
/// ```
/// use causal_error::{chain, verror, PlainError};
/// use std::io;
///
/// let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file or directory");
/// let err = verror!(PlainError::from_std(io_err), "failed to load configuration").unwrap();
///
/// assert_eq!(err.message(), "failed to load configuration: no such file or directory");
/// let cause = chain::cause(&err).unwrap();
/// assert_eq!(cause.name(), "Error");
/// ```
#[derive(Debug)]
pub struct PlainError {
    name: Cow<'static, str>,
    message: String,
    stack: String,
    cause: Option<SharedError>,
    inner: Option<Box<dyn Error + Send + Sync>>,
}

impl PlainError {
    /// Name of errors created with [`PlainError::new`].
    pub const DEFAULT_NAME: &'static str = "Error";

    const BOUNDARY: &'static str = "causal_error::types::plain::PlainError";

    /// Creates an error named `"Error"`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::named(Self::DEFAULT_NAME, message)
    }

    /// Creates an error with an explicit name.
    pub fn named(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = trace::capture(trace::header(&name, &message), PlainError::BOUNDARY);
        Self { name, message, stack, cause: None, inner: None }
    }

    /// Adapts a foreign error.
    ///
    /// The name is the error's type name without its module path, the message
    /// is its `Display` output, and its `source()` chain becomes this error's
    /// cause chain. The original value stays reachable through
    /// [`downcast_ref`](Self::downcast_ref).
    pub fn from_std<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let name = short_type_name(core::any::type_name::<E>());
        let message = err.to_string();
        let cause = snapshot_sources(err.source());
        let stack = trace::capture(trace::header(name, &message), PlainError::BOUNDARY);
        Self { name: Cow::Owned(name.to_owned()), message, stack, cause, inner: Some(Box::new(err)) }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The adapted foreign error, if this error came from [`from_std`](Self::from_std).
    pub fn get_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }

    /// Downcasts the adapted foreign error.
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.inner.as_deref()?.downcast_ref::<T>()
    }
}

/// Turns a borrowed `source()` chain into owned links, deepest first.
fn snapshot_sources(source: Option<&(dyn Error + 'static)>) -> Option<SharedError> {
    let messages: Vec<String> =
        core::iter::successors(source, |&err| err.source()).map(ToString::to_string).collect();

    messages.into_iter().rev().fold(None, |cause, message| {
        let stack = trace::header(PlainError::DEFAULT_NAME, &message);
        let link = PlainError {
            name: Cow::Borrowed(PlainError::DEFAULT_NAME),
            message,
            stack,
            cause,
            inner: None,
        };
        Some(Arc::new(link) as SharedError)
    })
}

fn short_type_name(full: &'static str) -> &'static str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics.rsplit("::").next().unwrap_or(without_generics)
}

impl Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl Error for PlainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl ChainError for PlainError {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn direct_cause(&self) -> Option<SharedError> {
        self.cause.clone()
    }

    #[inline]
    fn stack(&self) -> &str {
        &self.stack
    }
}

crate::impl_into_shared!(PlainError);
