//! Constructor arguments and their normalization.
//!
//! `VError`, `SError`, and `WError` accept one of four call shapes, decided by
//! the first positional argument:
//!
//! | First argument | Options | Format arguments |
//! |----------------|---------|------------------|
//! | absent | empty | none |
//! | an error | `{ cause }` | the rest |
//! | [`Options`] or a JSON object | that record | the rest |
//! | a string | empty | all of them |
//!
//! A JSON `null` first argument is read as an empty record. Anything else is
//! a [`ConfigError::InvalidFirstArgument`].

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::traits::{IntoShared, SharedError};
use crate::types::config_error::{ConfigError, ConfigResult};
use crate::types::format::{sprintf, substitute_nulls};
use crate::types::InfoMap;

/// One positional constructor argument.
///
/// Usually produced by [`IntoArg`](crate::traits::IntoArg) through the
/// [`args!`](crate::args) family of macros.
#[derive(Debug, Clone)]
pub enum Arg {
    /// An error to record as the cause.
    Cause(SharedError),
    /// A typed options record.
    Options(Options),
    /// A template, a format argument, or an untyped options record.
    Value(Value),
}

/// Construction options for the error variants.
///
/// `Options` is taken by value, so the error never aliases a record the caller
/// keeps mutating.
///
/// # Examples
///
/// ```
/// use causal_error::{verror, Options, PlainError};
///
/// let cause = PlainError::new("connection refused");
/// let options = Options::new()
///     .name("ConnectionError")
///     .cause(cause)
///     .info_entry("port", 215);
///
/// let err = verror!(options, "failed to connect to \"%s:%d\"", "127.0.0.1", 215).unwrap();
/// assert_eq!(err.to_string(), "ConnectionError: failed to connect to \"127.0.0.1:215\": connection refused");
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Options {
    pub(crate) name: Option<String>,
    pub(crate) cause: Option<SharedError>,
    pub(crate) info: Option<InfoMap>,
    pub(crate) strict: bool,
    pub(crate) constructor_opt: Option<Cow<'static, str>>,
    pub(crate) skip_cause_message: bool,
}

impl Options {
    /// Creates an empty options record.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the variant's default name. An empty name keeps the default.
    #[inline]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Records `cause` as the direct cause.
    #[inline]
    pub fn cause(mut self, cause: impl IntoShared) -> Self {
        self.cause = Some(cause.into_shared());
        self
    }

    /// Replaces the info bag.
    #[inline]
    pub fn info(mut self, info: InfoMap) -> Self {
        self.info = Some(info);
        self
    }

    /// Adds one key to the info bag.
    #[inline]
    pub fn info_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.info.get_or_insert_with(InfoMap::new).insert(key.into(), value.into());
        self
    }

    /// Requests strict formatting: null format arguments become errors.
    #[inline]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Names the outermost construction frame to hide from the captured trace.
    ///
    /// Use this from helpers that build errors on their caller's behalf, so
    /// the trace starts at the helper's caller.
    #[inline]
    pub fn constructor_opt(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.constructor_opt = Some(function.into());
        self
    }

    #[inline]
    pub(crate) fn skip_cause_message(mut self, skip: bool) -> Self {
        self.skip_cause_message = skip;
        self
    }

    /// Reads an untyped options record.
    ///
    /// Recognized keys are `name` (string), `info` (object), `strict`
    /// (boolean), and `constructorOpt` (string); `null` counts as absent and
    /// other keys are ignored. A non-null `cause` is rejected because JSON
    /// values are never error-shaped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for a key of the wrong type and
    /// [`ConfigError::InvalidCause`] for a non-null `cause`.
    pub fn from_record(record: &Map<String, Value>) -> ConfigResult<Self> {
        let mut options = Self::default();

        match record.get("name") {
            None | Some(Value::Null) => {},
            Some(Value::String(name)) => options.name = Some(name.clone()),
            Some(_) => return Err(ConfigError::InvalidOption { key: "name", expected: "a string" }),
        }
        match record.get("cause") {
            None | Some(Value::Null) => {},
            Some(_) => return Err(ConfigError::InvalidCause),
        }
        match record.get("info") {
            None | Some(Value::Null) => {},
            Some(Value::Object(info)) => options.info = Some(info.clone()),
            Some(_) => return Err(ConfigError::InvalidOption { key: "info", expected: "an object" }),
        }
        match record.get("strict") {
            None | Some(Value::Null) => {},
            Some(Value::Bool(strict)) => options.strict = *strict,
            Some(_) => {
                return Err(ConfigError::InvalidOption { key: "strict", expected: "a boolean" })
            },
        }
        match record.get("constructorOpt") {
            None | Some(Value::Null) => {},
            Some(Value::String(function)) => options.constructor_opt = Some(function.clone().into()),
            Some(_) => {
                return Err(ConfigError::InvalidOption {
                    key: "constructorOpt",
                    expected: "a string",
                })
            },
        }

        Ok(options)
    }
}

/// Normalized constructor arguments.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub options: Options,
    pub short_message: String,
}

/// Resolves the call shape of `argv` and formats the short message.
///
/// Null format arguments are replaced with `"null"` unless `strict` or
/// `options.strict` is set, in which case they reach the formatter untouched
/// and fail there.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unrecognized first argument, a malformed
/// options record, options in a format position, a non-string template, or a
/// formatting failure.
pub fn parse_constructor_arguments(argv: Vec<Arg>, strict: bool) -> ConfigResult<Parsed> {
    let mut argv = argv.into_iter();

    let (options, format_args) = match argv.next() {
        None => (Options::default(), Vec::new()),
        Some(Arg::Cause(cause)) => {
            (Options { cause: Some(cause), ..Options::default() }, format_values(argv)?)
        },
        Some(Arg::Options(options)) => (options, format_values(argv)?),
        Some(Arg::Value(Value::Object(record))) => {
            (Options::from_record(&record)?, format_values(argv)?)
        },
        Some(Arg::Value(Value::Null)) => (Options::default(), format_values(argv)?),
        Some(Arg::Value(template @ Value::String(_))) => {
            let mut values = vec![template];
            values.extend(format_values(argv)?);
            (Options::default(), values)
        },
        Some(Arg::Value(other)) => {
            return Err(ConfigError::InvalidFirstArgument { found: value_kind(&other) })
        },
    };

    let format_args =
        if options.strict || strict { format_args } else { substitute_nulls(format_args) };

    let short_message = match format_args.split_first() {
        None => String::new(),
        Some((Value::String(template), rest)) => sprintf(template, rest)?,
        Some((other, _)) => return Err(ConfigError::InvalidTemplate { found: value_kind(other) }),
    };

    Ok(Parsed { options, short_message })
}

fn format_values(rest: impl Iterator<Item = Arg>) -> ConfigResult<Vec<Value>> {
    rest.enumerate()
        .map(|(offset, arg)| match arg {
            Arg::Value(value) => Ok(value),
            // Errors in format position print like their `toString()`.
            Arg::Cause(err) => Ok(Value::String(err.to_string())),
            Arg::Options(_) => Err(ConfigError::MisplacedOptions { position: offset + 1 }),
        })
        .collect()
}

/// Names the JSON type of `value` for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
