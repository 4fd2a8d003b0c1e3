//! Shared test helpers for license envelope tests.

#![allow(dead_code)]

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine};
use sankey_crypto::hmac_sha256;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Fixed 32-byte master key used across tests.
pub const TEST_KEY: [u8; 32] = [7u8; 32];

/// Fixed IV; decode-side tests do not care about IV uniqueness.
pub const TEST_IV: [u8; 16] = [3u8; 16];

/// Account id most fixtures are bound to.
pub const TEST_ACCOUNT: &str = "1234";

/// Payload used by the standard fixture.
pub const TEST_PAYLOAD: &str =
    r#"{"accountId":"1234","eaName":"MyEA","expiry":"2099-01-01T00:00:00Z"}"#;

/// Returns the base64 form of the fixed test key.
pub fn test_key_b64() -> String {
    STANDARD.encode(TEST_KEY)
}

/// Encrypts AES-256-CBC with PKCS#7 padding.
pub fn encrypt(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Seals a payload into a base64 license blob:
/// `base64(iv || hmac(key, iv || ct || account_id) || ct)`.
pub fn seal_license(key: &[u8; 32], iv: &[u8; 16], payload: &[u8], account_id: &str) -> String {
    let ciphertext = encrypt(key, iv, payload);
    seal_raw(key, iv, &ciphertext, account_id)
}

/// Builds a blob around pre-made ciphertext bytes, computing a valid MAC
/// over them. Lets tests feed the verifier authenticated-but-broken
/// ciphertext (unaligned, bad padding).
pub fn seal_raw(key: &[u8; 32], iv: &[u8; 16], ciphertext: &[u8], account_id: &str) -> String {
    let mut mac_input = Vec::new();
    mac_input.extend_from_slice(iv);
    mac_input.extend_from_slice(ciphertext);
    mac_input.extend_from_slice(account_id.as_bytes());
    let mac = hmac_sha256(key, &mac_input).expect("hmac");

    let mut blob = Vec::new();
    blob.extend_from_slice(iv);
    blob.extend_from_slice(&mac);
    blob.extend_from_slice(ciphertext);
    STANDARD.encode(blob)
}

/// Seals the standard payload fixture bound to `account_id`.
pub fn make_license(account_id: &str) -> String {
    seal_license(&TEST_KEY, &TEST_IV, TEST_PAYLOAD.as_bytes(), account_id)
}

/// Seals an arbitrary JSON payload with the fixed key/IV/account.
pub fn make_license_with_payload(payload_json: &str) -> String {
    seal_license(&TEST_KEY, &TEST_IV, payload_json.as_bytes(), TEST_ACCOUNT)
}
