//! Error types for the crypto layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Base64 input is malformed (invalid alphabet or padding).
    #[error("base64 decode failed: {0}")]
    Decode(String),

    /// Key length does not match the algorithm requirement.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// IV length does not match the cipher block size.
    #[error("invalid iv length: expected {expected}, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// MAC provider failure.
    #[error("mac computation failed: {0}")]
    Mac(String),

    /// Cipher failure: unaligned ciphertext or bad padding.
    #[error("cipher failure: {0}")]
    Cipher(String),
}
