//! Cryptographic primitives for Sankey license verification.
//!
//! Thin, stateless wrappers over audited RustCrypto implementations:
//! base64 decoding, HMAC-SHA-256, and AES-256-CBC decryption. The
//! [`CryptoProvider`] trait exposes these as an injectable capability so
//! the verifier never touches a concrete crypto backend;
//! [`RustCryptoProvider`] is the default implementation.

mod error;
mod key;
mod primitives;
mod provider;

pub use error::{CryptoError, CryptoResult};
pub use key::{MasterKey, MASTER_KEY_SIZE};
pub use primitives::{
    aes256_cbc_decrypt, decode_base64, hmac_sha256, AES_BLOCK_SIZE, IV_SIZE, MAC_SIZE,
};
pub use provider::{CryptoProvider, RustCryptoProvider};
