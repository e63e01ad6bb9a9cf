//! Crate-wide error type.

/// Errors produced while building a catalog, validating configuration, or
/// parsing brute-force requests.
///
/// The search engines themselves never fail once their inputs are valid;
/// every variant here describes bad input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resistor catalog has no entries.
    #[error("resistor catalog is empty")]
    EmptyCatalog,

    /// A resistor value is zero or not a number.
    #[error("invalid resistor value {0}")]
    InvalidResistor(String),

    /// The target value is zero or not a number.
    #[error("target value is not a number: {0}")]
    InvalidTarget(String),

    /// A GA parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::config::RpickConfig`].
    #[cfg(feature = "serde")]
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
