//! Stateless primitive operations: base64, HMAC-SHA-256, AES-256-CBC.

use crate::error::{CryptoError, CryptoResult};
use crate::key::MASTER_KEY_SIZE;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Initialization vector size in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// HMAC-SHA-256 tag size in bytes.
pub const MAC_SIZE: usize = 32;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// Decodes standard-alphabet base64 text.
///
/// # Errors
///
/// Returns [`CryptoError::Decode`] on an invalid alphabet or bad padding.
pub fn decode_base64(text: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::Decode(e.to_string()))
}

/// Computes an HMAC-SHA-256 tag over `message` with `key`.
///
/// Accepts keys of any length; only a provider initialization failure
/// surfaces as an error.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> CryptoResult<[u8; MAC_SIZE]> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| CryptoError::Mac(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().into())
}

/// Decrypts AES-256-CBC ciphertext and strips PKCS#7 padding.
///
/// The ciphertext length must be a non-zero multiple of the block size;
/// anything else is rejected rather than silently truncated.
///
/// # Errors
///
/// Returns [`CryptoError::Cipher`] on unaligned input or bad padding,
/// and the length variants when `key` or `iv` have the wrong size.
pub fn aes256_cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    if key.len() != MASTER_KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: MASTER_KEY_SIZE,
            actual: key.len(),
        });
    }
    if iv.len() != IV_SIZE {
        return Err(CryptoError::InvalidIvLength {
            expected: IV_SIZE,
            actual: iv.len(),
        });
    }
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::Cipher(format!(
            "ciphertext length {} is not a positive multiple of the block size",
            ciphertext.len()
        )));
    }

    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|e| CryptoError::Cipher(e.to_string()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Cipher("invalid pkcs#7 padding".to_string()))
}
