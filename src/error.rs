// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the configuration layer.
///
/// The alert component itself is infallible by contract: it is a pure
/// presentation state machine over trusted inputs, so nothing in
/// `ui::alert` returns a `Result`.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Toml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Toml(msg) => write!(f, "TOML error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
