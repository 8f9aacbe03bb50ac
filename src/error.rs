// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factory or container was used before [`Registry::register`] was called.
    ///
    /// [`Registry::register`]: crate::registry::Registry::register
    NotRegistered,

    /// A level name that is not one of `default`, `error`, `info`, `success`.
    InvalidLevel(String),

    /// Registration was attempted after notifications were already created
    /// under the current name.
    RegistrationLocked,

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotRegistered => write!(
                f,
                "Notifications component is not registered, call Registry::register first"
            ),
            Error::InvalidLevel(level) => write!(f, "Unknown level: {}", level),
            Error::RegistrationLocked => write!(
                f,
                "Notifications component cannot be re-registered once notifications exist"
            ),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
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
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
