//! License envelope verification and gated payload access.
//!
//! [`LicenseDecoder`] holds a tagged verification state: payload data
//! only exists behind the `Verified` arm, so accessors cannot read an
//! unverified or tampered license by construction.
//!
//! `verify` runs a fixed pipeline: input checks, key decode, envelope
//! layout, MAC check, decryption, JSON parse, expiry evaluation. The MAC
//! covers `IV || ciphertext || account id` and is checked before any
//! byte of ciphertext is decrypted or interpreted.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::datetime::parse_iso_datetime;
use crate::envelope::LicenseEnvelope;
use crate::status::LicenseStatus;
use sankey_crypto::{CryptoProvider, MasterKey, RustCryptoProvider};

/// Payload field holding the optional expiry timestamp.
const EXPIRY_KEY: &str = "expiry";

/// Verification state for one decoder instance.
enum VerifyState {
    Unverified,
    Verified(Value),
}

/// Verifies license envelopes and exposes the decoded payload through
/// typed, default-falling accessors.
///
/// Instances are independent of each other and carry no internal
/// synchronization; `verify` takes `&mut self`, so concurrent use of a
/// single instance is a compile error rather than a data race.
pub struct LicenseDecoder {
    provider: Arc<dyn CryptoProvider>,
    state: VerifyState,
}

impl LicenseDecoder {
    /// Creates an unverified decoder backed by the default provider.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(Arc::new(RustCryptoProvider))
    }

    /// Creates an unverified decoder with an injected crypto provider.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn CryptoProvider>) -> Self {
        Self {
            provider,
            state: VerifyState::Unverified,
        }
    }

    /// Returns true if the most recent `verify` call fully succeeded.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self.state, VerifyState::Verified(_))
    }

    /// Verifies a license blob against a master key and account binding.
    ///
    /// Resets to the unverified state first: a failed call leaves no
    /// stale payload behind, and a repeated call fully replaces prior
    /// state rather than accumulating.
    pub fn verify(
        &mut self,
        master_key_b64: &str,
        license_b64: &str,
        account_id: &str,
    ) -> LicenseStatus {
        self.state = VerifyState::Unverified;

        match self.run_checks(master_key_b64, license_b64, account_id) {
            Ok(payload) => {
                debug!("license verified");
                self.state = VerifyState::Verified(payload);
                LicenseStatus::Valid
            }
            Err(status) => {
                debug!(?status, "license rejected");
                status
            }
        }
    }

    fn run_checks(
        &self,
        master_key_b64: &str,
        license_b64: &str,
        account_id: &str,
    ) -> Result<Value, LicenseStatus> {
        if master_key_b64.is_empty() || license_b64.is_empty() || account_id.is_empty() {
            return Err(LicenseStatus::Invalid);
        }

        let key_bytes = self
            .provider
            .decode_base64(master_key_b64)
            .map_err(|_| LicenseStatus::KeyError)?;
        let master_key = MasterKey::from_bytes(&key_bytes).map_err(|_| LicenseStatus::KeyError)?;

        let blob = self
            .provider
            .decode_base64(license_b64)
            .map_err(|_| LicenseStatus::Invalid)?;
        let envelope = LicenseEnvelope::parse(&blob).map_err(|_| LicenseStatus::Invalid)?;

        // Integrity before decryption: nothing past this point runs on
        // unauthenticated bytes.
        let expected = self
            .provider
            .hmac_sha256(
                master_key.as_bytes(),
                &envelope.mac_input(account_id.as_bytes()),
            )
            .map_err(|_| LicenseStatus::DecryptionFailed)?;
        if expected != *envelope.mac() {
            return Err(LicenseStatus::Tampered);
        }

        let plaintext = self
            .provider
            .aes256_cbc_decrypt(master_key.as_bytes(), envelope.iv(), envelope.ciphertext())
            .map_err(|_| LicenseStatus::DecryptionFailed)?;

        let payload: Value =
            serde_json::from_slice(&plaintext).map_err(|_| LicenseStatus::ParseError)?;

        if let Some(expiry) = payload.get(EXPIRY_KEY).and_then(Value::as_str) {
            // An absent or unparseable expiry means no constraint.
            if let Some(expires_at) = parse_iso_datetime(expiry) {
                let now = chrono::Utc::now().timestamp();
                if expires_at < now {
                    return Err(LicenseStatus::Expired);
                }
            }
        }

        Ok(payload)
    }

    fn value(&self, key: &str) -> Option<&Value> {
        match &self.state {
            VerifyState::Verified(payload) => payload.get(key),
            VerifyState::Unverified => None,
        }
    }

    /// Returns the string value for `key`, or `default` when unverified,
    /// absent, or not a string.
    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Returns the integer value for `key`. Integer-typed JSON numbers
    /// pass through; strings are coerced from their leading integer
    /// prefix; anything else falls back to `default`.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.value(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            Some(Value::String(s)) => parse_int_prefix(s).unwrap_or(default),
            _ => default,
        }
    }

    /// Returns the boolean value for `key`. The strings `"true"`, `"1"`,
    /// and `"yes"` (exact match) map to true and every other string to
    /// false; numbers map to `value != 0`; anything else falls back to
    /// `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.as_str(), "true" | "1" | "yes"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => default,
        }
    }

    /// Returns the floating-point value for `key`. Numbers pass through;
    /// strings are coerced from their leading numeric prefix; anything
    /// else falls back to `default`.
    #[must_use]
    pub fn get_double(&self, key: &str, default: f64) -> f64 {
        match self.value(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => parse_float_prefix(s).unwrap_or(default),
            _ => default,
        }
    }

    /// Returns the epoch-seconds value of an ISO-8601 string field, or
    /// `default` when the field is absent, not a string, or unparseable.
    #[must_use]
    pub fn get_datetime(&self, key: &str, default: i64) -> i64 {
        match self.value(key) {
            Some(Value::String(s)) => parse_iso_datetime(s).unwrap_or(default),
            _ => default,
        }
    }

    /// Returns true if the payload is verified and contains `key`, for
    /// any value type including explicit null.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.value(key).is_some()
    }
}

/// Parses the leading integer prefix of a string: optional whitespace,
/// an optional sign, then digits. Existing license payloads carry values
/// like `"42 seats"` that must keep resolving to 42, so coercion stops
/// at the first non-digit instead of requiring a clean parse.
///
/// Returns `None` when no digits are present or the value overflows.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix(['+', '-']) {
        Some(rest) => (&text[..1], rest),
        None => ("", text),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    format!("{sign}{}", &digits[..len]).parse().ok()
}

/// Parses the leading floating-point prefix of a string: optional
/// whitespace and sign, a mantissa with an optional decimal point, and
/// an optional exponent. Same trailing-garbage tolerance as
/// [`parse_int_prefix`].
fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.trim_start().as_bytes();
    let n = bytes.len();
    let mut end = 0;

    if end < n && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mant_start = end;
    while end < n && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - mant_start;

    let mut frac_digits = 0;
    if end < n && bytes[end] == b'.' {
        let mut f = end + 1;
        while f < n && bytes[f].is_ascii_digit() {
            f += 1;
        }
        frac_digits = f - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = f;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < n && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut e = end + 1;
        if e < n && (bytes[e] == b'+' || bytes[e] == b'-') {
            e += 1;
        }
        let exp_start = e;
        while e < n && bytes[e].is_ascii_digit() {
            e += 1;
        }
        if e > exp_start {
            end = e;
        }
    }

    text.trim_start()[..end].parse().ok()
}

impl Default for LicenseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LicenseDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseDecoder")
            .field("verified", &self.is_verified())
            .finish()
    }
}
