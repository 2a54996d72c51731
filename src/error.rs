#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the slug crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

/// Unified error type returned by the dynamic slug boundary and the CLI.
///
/// The typed [`slugify`](crate::slugify) entry point is total and never
/// produces an error; failures only arise where untyped values or option
/// documents cross into the crate.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when the input is not a string or options cannot be decoded.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human readable message describing the rejected argument.
        message: String
    },
    /// Wraps YAML/JSON decoding errors for inline option documents.
    #[error("failed to parse options: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    }
}

impl Error {
    /// Constructs an invalid argument error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the rejected argument.
    pub fn invalid_argument<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::InvalidArgument {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}
