mod common;

use std::sync::Arc;

use common::{make_license, test_key_b64, TEST_ACCOUNT};
use sankey_crypto::{CryptoError, CryptoProvider, CryptoResult, RustCryptoProvider};
use sankey_license::{LicenseDecoder, LicenseStatus};

/// Provider whose MAC computation always fails, simulating a broken
/// crypto backend.
struct FailingMacProvider;

impl CryptoProvider for FailingMacProvider {
    fn decode_base64(&self, text: &str) -> CryptoResult<Vec<u8>> {
        RustCryptoProvider.decode_base64(text)
    }

    fn hmac_sha256(&self, _key: &[u8], _message: &[u8]) -> CryptoResult<[u8; 32]> {
        Err(CryptoError::Mac("provider unavailable".to_string()))
    }

    fn aes256_cbc_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        RustCryptoProvider.aes256_cbc_decrypt(key, iv, ciphertext)
    }
}

#[test]
fn mac_provider_failure_is_decryption_failed() {
    let mut decoder = LicenseDecoder::with_provider(Arc::new(FailingMacProvider));
    let status = decoder.verify(&test_key_b64(), &make_license(TEST_ACCOUNT), TEST_ACCOUNT);
    assert_eq!(status, LicenseStatus::DecryptionFailed);
    assert!(!decoder.is_verified());
}

#[test]
fn injected_default_provider_verifies() {
    let mut decoder = LicenseDecoder::with_provider(Arc::new(RustCryptoProvider));
    let status = decoder.verify(&test_key_b64(), &make_license(TEST_ACCOUNT), TEST_ACCOUNT);
    assert_eq!(status, LicenseStatus::Valid);
}
