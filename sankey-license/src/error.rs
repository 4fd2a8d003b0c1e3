//! Error types for the licensing module.

use thiserror::Error;

/// Errors raised while dissecting a decoded license blob.
///
/// These never cross the `verify` boundary; the decoder classifies them
/// into [`crate::LicenseStatus`] codes.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Blob is too short to hold the IV and MAC header fields.
    #[error("license blob too short: {0} bytes")]
    Truncated(usize),
}
