//! Error types for name numbering operations

use std::fmt;
use thiserror::Error;

/// Every failure surfaced by this crate. Each variant names the offending
/// parameter so callers can report it without parsing message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A loaded option has the wrong type
    #[error("`{param}` must be of type {expected}")]
    InvalidType {
        param: String,
        expected: &'static str,
    },

    /// A value breaks one of the validation rules
    #[error("`{param}` {rule}")]
    InvalidValue { param: String, rule: Rule },

    /// A required value was neither given nor configured as a default
    #[error("`{param}` is required but was not provided and has no default")]
    MissingRequiredValue { param: String },

    /// A collection expected to be duplicate-free repeats an element
    #[error("element {element} of `{param}` is duplicated at positions {first} and {second}")]
    DuplicateElement {
        param: String,
        element: usize,
        first: usize,
        second: usize,
    },
}

/// The validation rule an [`Error::InvalidValue`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Empty,
    ContainsDot,
    ContainsDigit,
    Negative,
    NotDigits,
    OutOfRange,
    Unrecognized,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rule::Empty => "must have at least one character",
            Rule::ContainsDot => "cannot contain dots '.'",
            Rule::ContainsDigit => "cannot contain digits",
            Rule::Negative => "must be at least 0",
            Rule::NotDigits => "must consist of decimal digits only",
            Rule::OutOfRange => "is out of the representable sequence range",
            Rule::Unrecognized => "is not a recognized option",
        };
        f.write_str(msg)
    }
}

/// Fieldless discriminant of [`Error`], for matching on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidType,
    InvalidValue,
    MissingRequiredValue,
    DuplicateElement,
}

impl Error {
    pub(crate) fn invalid_value(param: impl Into<String>, rule: Rule) -> Self {
        Error::InvalidValue {
            param: param.into(),
            rule,
        }
    }

    pub(crate) fn invalid_type(param: impl Into<String>, expected: &'static str) -> Self {
        Error::InvalidType {
            param: param.into(),
            expected,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidType { .. } => ErrorKind::InvalidType,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::MissingRequiredValue { .. } => ErrorKind::MissingRequiredValue,
            Error::DuplicateElement { .. } => ErrorKind::DuplicateElement,
        }
    }

    /// Name of the parameter that caused the failure.
    pub fn param(&self) -> &str {
        match self {
            Error::InvalidType { param, .. }
            | Error::InvalidValue { param, .. }
            | Error::MissingRequiredValue { param }
            | Error::DuplicateElement { param, .. } => param,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
