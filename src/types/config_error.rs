//! Configuration errors: misuse of this crate's own API.
//!
//! These are never domain errors. They are returned synchronously from the
//! constructor or query that was misused and are meant to reach the immediate
//! caller through `?`.

use thiserror::Error;

/// Failure raised by the printf-style formatter while building a short message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A null argument reached a `%s` conversion in strict mode.
    #[error("attempted to print undefined or null as a string (argument {index})")]
    NullArgument { index: usize },

    /// The template names more conversions than there are arguments.
    #[error("too few arguments to sprintf: conversion {index} has no argument")]
    MissingArgument { index: usize },

    /// The template uses a conversion character the formatter does not know.
    #[error("unsupported conversion \"%{conversion}\"")]
    UnsupportedConversion { conversion: char },

    /// The template ends in the middle of a conversion specifier.
    #[error("unterminated conversion specifier at byte {offset}")]
    UnterminatedSpecifier { offset: usize },
}

/// Programmer misuse of the constructors or chain utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The first positional argument is neither a template, an options record, nor an error.
    #[error(
        "first argument to VError, SError, or WError constructor must be a string, \
         object, or Error (found {found})"
    )]
    InvalidFirstArgument { found: &'static str },

    /// The format template after the options or cause is not a string.
    #[error("format template must be a string (found {found})")]
    InvalidTemplate { found: &'static str },

    /// Options appeared after the first positional argument.
    #[error("options may only be passed as the first argument (found at position {position})")]
    MisplacedOptions { position: usize },

    /// An options record carries a key with the wrong type.
    #[error("option \"{key}\" must be {expected}")]
    InvalidOption { key: &'static str, expected: &'static str },

    /// A cause was supplied that is not error-shaped.
    #[error("cause must be an Error")]
    InvalidCause,

    /// An aggregate was requested over zero errors.
    #[error("at least one error is required")]
    EmptyErrorList,

    /// A name lookup was given an empty name.
    #[error("name cannot be empty")]
    EmptyName,

    /// The short message could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result alias for fallible constructors and queries.
pub type ConfigResult<T> = Result<T, ConfigError>;
