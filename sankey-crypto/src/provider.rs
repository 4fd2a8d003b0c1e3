//! Capability-scoped crypto provider.
//!
//! The license verifier depends on `Arc<dyn CryptoProvider>` rather than
//! on concrete crypto calls, keeping backend lifetime concerns out of the
//! verification logic. [`RustCryptoProvider`] is the stateless default;
//! tests can substitute failing providers to exercise error paths.

use crate::error::CryptoResult;
use crate::primitives::{self, MAC_SIZE};

/// The three primitive operations license verification needs.
pub trait CryptoProvider: Send + Sync {
    /// Decodes standard-alphabet base64 text.
    fn decode_base64(&self, text: &str) -> CryptoResult<Vec<u8>>;

    /// Computes an HMAC-SHA-256 tag over `message` with `key`.
    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> CryptoResult<[u8; MAC_SIZE]>;

    /// Decrypts AES-256-CBC ciphertext with PKCS#7 padding.
    fn aes256_cbc_decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8])
        -> CryptoResult<Vec<u8>>;
}

/// Default provider backed by the RustCrypto implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl CryptoProvider for RustCryptoProvider {
    fn decode_base64(&self, text: &str) -> CryptoResult<Vec<u8>> {
        primitives::decode_base64(text)
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> CryptoResult<[u8; MAC_SIZE]> {
        primitives::hmac_sha256(key, message)
    }

    fn aes256_cbc_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        primitives::aes256_cbc_decrypt(key, iv, ciphertext)
    }
}
