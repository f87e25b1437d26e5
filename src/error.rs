//! Error types for the bn-assert library

/// Error types for the bn-assert library.
///
/// A failing comparison is not an error: matchers report it as a
/// [`ComparisonResult`](crate::matchers::ComparisonResult) with `passed == false`.
/// These variants cover caller contract violations around the matchers.
#[derive(Debug, thiserror::Error)]
pub enum BnAssertError {
    /// Text could not be parsed as an arbitrary-precision integer
    #[error("Invalid amount: '{input}' is not a decimal or 0x-prefixed hex integer")]
    InvalidAmount { input: String },

    /// No matcher is registered under this name
    #[error("Unknown matcher: {name}")]
    UnknownMatcher { name: String },

    /// A matcher was invoked with the wrong argument shape
    #[error("Argument mismatch: {matcher} expects {expected} operands")]
    ArgumentMismatch {
        matcher: &'static str,
        expected: &'static str,
    },

    /// Currency is not tracked by the wallet
    #[error("Missing asset: currency {currency_id} was never added to the wallet")]
    MissingAsset { currency_id: u32 },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BnAssertError {
    fn from(err: serde_json::Error) -> Self {
        BnAssertError::Serialization(err.to_string())
    }
}

/// Convenience Result type for bn-assert operations
pub type Result<T> = std::result::Result<T, BnAssertError>;
