//! Offline license verification for Sankey.
//!
//! Verifies and decodes a symmetric-key license envelope:
//! `base64(IV || HMAC-SHA-256 tag || AES-256-CBC ciphertext)` wrapping a
//! UTF-8 JSON payload of license attributes (owner id, entitlements,
//! expiry). The tag covers `IV || ciphertext || account id`, so a blob
//! only verifies for the account it was issued to.
//!
//! # Design Principles
//!
//! - **Integrity first**: the MAC is checked before decryption; no byte
//!   of ciphertext is interpreted until it authenticates
//! - **Gated access**: payload accessors only read from a decoder in the
//!   verified state, and every failure degrades to the caller's default
//! - **Closed status set**: `verify` classifies each outcome into one of
//!   seven status codes and never panics or throws
//! - **Offline**: no network, no persistence, everything lives in the
//!   decoder instance

mod datetime;
mod decoder;
mod envelope;
mod error;
mod status;

pub use datetime::parse_iso_datetime;
pub use decoder::LicenseDecoder;
pub use envelope::{LicenseEnvelope, MIN_ENVELOPE_SIZE};
pub use error::EnvelopeError;
pub use status::LicenseStatus;
