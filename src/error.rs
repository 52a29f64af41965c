//! Error types for devreg

use thiserror::Error;

/// Result type alias using devreg's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in devreg operations
///
/// Every failure is a discriminable value returned to the caller; there are
/// no sentinel results and none of these is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input string is not a well-formed base-10 signed integer
    #[error("'{input}' is not a base-10 integer")]
    NotANumber {
        /// The rejected input
        input: String,
    },

    /// Integer syntax is valid but the value does not fit in a signed 64-bit integer
    #[error("'{input}' is outside the signed 64-bit range")]
    OutOfRange {
        /// The rejected input
        input: String,
    },

    /// A device-type name was registered twice
    #[error("device type '{name}' is already registered")]
    DuplicateRegistration {
        /// The name of the existing registration
        name: String,
    },

    /// Lookup of a device-type name with no registration
    #[error("unknown device type '{name}'")]
    UnknownDeviceType {
        /// The name that was looked up
        name: String,
    },

    /// Registration attempted with an empty name
    #[error("device type name must be non-empty")]
    InvalidName,
}

impl Error {
    /// Create a not-a-number error
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Self::NotANumber {
            input: input.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(input: impl Into<String>) -> Self {
        Self::OutOfRange {
            input: input.into(),
        }
    }

    /// Create a duplicate-registration error
    pub fn duplicate_registration(name: impl Into<String>) -> Self {
        Self::DuplicateRegistration { name: name.into() }
    }

    /// Create an unknown-device-type error
    pub fn unknown_device(name: impl Into<String>) -> Self {
        Self::UnknownDeviceType { name: name.into() }
    }
}
