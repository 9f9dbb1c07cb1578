//! Unified error types for the `SixJars` engine.
//!
//! All fallible operations in the crate return [`Result`], and every failure
//! mode maps onto one variant of [`Error`]. Numeric edge cases in the pure
//! computations (zero totals in percentage formulas) are deliberately *not*
//! errors; those are guarded to yield zero instead.

use thiserror::Error;

/// The unified error type for all engine, configuration, and store failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A record failed validation before being handed to the store.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// Settings or the category catalog could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// A record referenced by id does not exist in the loaded collections.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// The identifier that had no match
        id: String,
    },

    /// A wire-format value could not be converted into its domain type.
    #[error("Failed to decode field `{field}`: {message}")]
    Decode {
        /// The wire field that failed to convert
        field: &'static str,
        /// Description of the offending value
        message: String,
    },

    /// The remote store acknowledged the request with a failure status.
    #[error("Remote store rejected the request ({status}): {message}")]
    Remote {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body, when one was provided
        message: String,
    },

    /// I/O error from the local blob store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error from the remote store client.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

// Convenience `Result` type
/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
