//! Wire format types and serialization utilities.

use serde::{Deserialize, Serialize};

use crate::errors::{EnvelopeError, Result};

/// Algorithm suite identifier for the package format.
///
/// - RSA-OAEP with SHA-256 (MGF1-SHA-256, empty label) for key wrapping
/// - AES-256-GCM with a 96-bit IV and 128-bit tag for the payload
pub const SUITE_V1: &str = "RSA-OAEP-256+A256GCM";

/// One-time AES key length in bytes.
pub const KEY_LEN: usize = 32;
/// AES-GCM IV length in bytes.
pub const IV_LEN: usize = 12;
/// AES-GCM tag length in bytes (appended to the ciphertext).
pub const TAG_LEN: usize = 16;

/// Result of one hybrid encryption.
///
/// All fields are standard padded base64. The three fields belong together:
/// `encrypted_key` and `iv` only open the `encrypted_data` they were produced
/// with. Serialized field names are camelCase; unknown fields are ignored on
/// read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedPackage {
    /// `AES-256-GCM(key, iv, json(data))`, ciphertext with the tag appended.
    pub encrypted_data: String,
    /// `RSA-OAEP-SHA256(recipient_pk, key)`.
    pub encrypted_key: String,
    /// 12-byte IV used for `encrypted_data`.
    pub iv: String,
}

impl EncryptedPackage {
    /// Serialize to the JSON wire shape `{ encryptedData, encryptedKey, iv }`.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "encryptedData": self.encrypted_data,
            "encryptedKey": self.encrypted_key,
            "iv": self.iv,
        })
        .to_string()
    }

    /// Parse the JSON wire shape. All three fields are required.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EnvelopeError::Decode(format!("package: {e}")))
    }
}
