//! Trait for converting values into constructor arguments.
//!
//! # Implementations
//!
//! - Strings, integers, floats, and `bool` become format arguments.
//! - `Option<T>` becomes `T`'s argument, or a JSON `null` for `None`.
//! - [`serde_json::Value`] is passed through; a JSON object in first position
//!   is read as an options record.
//! - [`Options`] becomes the options argument.
//! - Every error type in this crate, `Arc`s of them, and [`SharedError`]
//!   become a cause.
//!
//! # Examples
//!
//! ```
//! use causal_error::{traits::IntoArg, types::Arg};
//!
//! assert!(matches!("template".into_arg(), Arg::Value(_)));
//! assert!(matches!(None::<&str>.into_arg(), Arg::Value(serde_json::Value::Null)));
//! ```
use std::sync::Arc;

use serde_json::Value;

use crate::traits::{ChainError, SharedError};
use crate::types::{AggregateError, Arg, InfoMap, Options, PlainError, SError, VError, WError};

/// Converts a value into one positional constructor argument.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error constructor argument",
    label = "this type does not implement `IntoArg`",
    note = "pass a string, number, bool, `serde_json::Value`, `Options`, or an error"
)]
pub trait IntoArg {
    /// Converts `self` into an [`Arg`].
    fn into_arg(self) -> Arg;
}

impl IntoArg for Arg {
    #[inline]
    fn into_arg(self) -> Arg {
        self
    }
}

impl IntoArg for Options {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Options(self)
    }
}

impl IntoArg for Value {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Value(self)
    }
}

impl IntoArg for InfoMap {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Value(Value::Object(self))
    }
}

impl IntoArg for SharedError {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Cause(self)
    }
}

impl<T: ChainError> IntoArg for Arc<T> {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Cause(self)
    }
}

impl<T: IntoArg> IntoArg for Option<T> {
    #[inline]
    fn into_arg(self) -> Arg {
        match self {
            Some(value) => value.into_arg(),
            None => Arg::Value(Value::Null),
        }
    }
}

impl IntoArg for &String {
    #[inline]
    fn into_arg(self) -> Arg {
        Arg::Value(Value::from(self.as_str()))
    }
}

macro_rules! into_value_arg {
    ($($type:ty),+ $(,)?) => {
        $(
            impl IntoArg for $type {
                #[inline]
                fn into_arg(self) -> Arg {
                    Arg::Value(Value::from(self))
                }
            }
        )+
    };
}

into_value_arg!(&str, String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! into_cause_arg {
    ($($type:ty),+ $(,)?) => {
        $(
            impl IntoArg for $type {
                #[inline]
                fn into_arg(self) -> Arg {
                    Arg::Cause(Arc::new(self))
                }
            }
        )+
    };
}

into_cause_arg!(VError, SError, WError, AggregateError, PlainError);
