//! Binary layout of the license envelope.
//!
//! After base64 decoding, a license blob is laid out as
//! `IV (16 bytes) || MAC (32 bytes) || ciphertext (remainder)`. The MAC
//! authenticates `IV || ciphertext || account id`, binding the blob to
//! the account it was issued for.

use crate::error::EnvelopeError;
use sankey_crypto::{IV_SIZE, MAC_SIZE};

/// Minimum decoded blob size: the IV and MAC with an empty ciphertext.
pub const MIN_ENVELOPE_SIZE: usize = IV_SIZE + MAC_SIZE;

/// A license blob split into its wire-layout fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEnvelope {
    iv: [u8; IV_SIZE],
    mac: [u8; MAC_SIZE],
    ciphertext: Vec<u8>,
}

impl LicenseEnvelope {
    /// Splits a decoded blob into IV, MAC, and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Truncated`] if the blob cannot hold the
    /// fixed-size header fields. Structural rejection happens here,
    /// before any crypto call.
    pub fn parse(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        if bytes.len() < MIN_ENVELOPE_SIZE {
            return Err(EnvelopeError::Truncated(bytes.len()));
        }

        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&bytes[..IV_SIZE]);
        let mut mac = [0u8; MAC_SIZE];
        mac.copy_from_slice(&bytes[IV_SIZE..MIN_ENVELOPE_SIZE]);

        Ok(Self {
            iv,
            mac,
            ciphertext: bytes[MIN_ENVELOPE_SIZE..].to_vec(),
        })
    }

    /// Returns the AES-CBC initialization vector.
    #[must_use]
    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    /// Returns the HMAC-SHA-256 tag carried by the blob.
    #[must_use]
    pub fn mac(&self) -> &[u8; MAC_SIZE] {
        &self.mac
    }

    /// Returns the ciphertext portion.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Builds the authenticated message: `IV || ciphertext || account id`,
    /// concatenated with no delimiters or length prefixes.
    #[must_use]
    pub fn mac_input(&self, account_id: &[u8]) -> Vec<u8> {
        let mut input = Vec::with_capacity(IV_SIZE + self.ciphertext.len() + account_id.len());
        input.extend_from_slice(&self.iv);
        input.extend_from_slice(&self.ciphertext);
        input.extend_from_slice(account_id);
        input
    }
}
