//! Verification status codes.

use serde::{Deserialize, Serialize};

/// Outcome of a single `verify` call.
///
/// Exhaustive and mutually exclusive. The discriminants are wire-stable:
/// hosts consuming the numeric code rely on these exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// All checks passed; the payload is available through the accessors.
    Valid = 0,
    /// Payload parsed but carries an `expiry` timestamp in the past.
    Expired = 1,
    /// Missing or empty inputs, undecodable license base64, or a blob
    /// too short to be an envelope.
    Invalid = 2,
    /// Integrity tag mismatch: altered bytes, a wrong key of correct
    /// length, or a wrong account binding.
    Tampered = 3,
    /// Master key fails to decode or is not exactly 32 bytes.
    KeyError = 4,
    /// Crypto provider failure during MAC computation or decryption.
    DecryptionFailed = 5,
    /// Decrypted plaintext is not valid UTF-8 JSON.
    ParseError = 6,
}

impl LicenseStatus {
    /// Returns the numeric status code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns true if the license passed every check.
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}
