use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::Oaep;
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::codec::{base64_to_buffer, buffer_to_base64};
use crate::errors::{EnvelopeError, Result};
use crate::keys::{import_public_key, PrivateKey, PublicKey};
use crate::types::*;

/// Internal failures name the stage that broke; they never cross the public API.
type Stage<T> = std::result::Result<T, &'static str>;

fn oaep() -> Oaep {
    // SHA-256 for both the label hash and MGF1, empty label (WebCrypto RSA-OAEP/SHA-256)
    Oaep::new::<Sha256>()
}

/* ---------------- Encrypt ---------------- */

/// Encrypt `data` for the holder of the private key matching `recipient_public_key_b64`
/// (base64 SPKI DER).
///
/// `data` is serialized to JSON first, so it must be JSON-representable; map
/// keys must be strings. Any failure, including a bad public key, is reported
/// as [`EnvelopeError::Encryption`].
pub fn hybrid_encrypt<T: Serialize + ?Sized>(
    data: &T,
    recipient_public_key_b64: &str,
) -> Result<EncryptedPackage> {
    let sealed = import_public_key(recipient_public_key_b64)
        .map_err(|_| "recipient public key")
        .and_then(|recipient| seal(data, &recipient));
    sealed.map_err(encryption_failed)
}

/// Same as [`hybrid_encrypt`] for an already imported public key.
pub fn hybrid_encrypt_with_key<T: Serialize + ?Sized>(
    data: &T,
    recipient: &PublicKey,
) -> Result<EncryptedPackage> {
    seal(data, recipient).map_err(encryption_failed)
}

fn encryption_failed(stage: &'static str) -> EnvelopeError {
    tracing::debug!(stage, "hybrid encrypt failed");
    EnvelopeError::Encryption
}

fn seal<T: Serialize + ?Sized>(data: &T, recipient: &PublicKey) -> Stage<EncryptedPackage> {
    let plaintext = Zeroizing::new(serde_json::to_vec(data).map_err(|_| "payload serialization")?);

    // One-time key and IV
    let mut rng = OsRng;
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    rng.fill_bytes(&mut key[..]);
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    // Payload AEAD (tag appended)
    let cipher = Aes256Gcm::new_from_slice(&key[..]).map_err(|_| "aes key")?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_slice())
        .map_err(|_| "payload aead")?;

    // Wrap key for recipient
    let wrapped_key = recipient
        .inner
        .encrypt(&mut rng, oaep(), &key[..])
        .map_err(|_| "key wrap")?;

    tracing::trace!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "sealed package"
    );

    Ok(EncryptedPackage {
        encrypted_data: buffer_to_base64(&ciphertext),
        encrypted_key: buffer_to_base64(&wrapped_key),
        iv: buffer_to_base64(&iv),
    })
}

/* ---------------- Decrypt ---------------- */

/// Open `pkg` with the recipient's private key and return the JSON value that was encrypted.
///
/// The shape of the returned value is not checked; callers that expect a
/// concrete type should follow up with `serde_json::from_value`. Any failure
/// (wrong key, corrupted base64, tampered ciphertext or tag, malformed JSON)
/// is reported as [`EnvelopeError::Decryption`].
pub fn hybrid_decrypt(pkg: &EncryptedPackage, private_key: &PrivateKey) -> Result<Value> {
    open(pkg, private_key).map_err(|stage| {
        tracing::debug!(stage, "hybrid decrypt failed");
        EnvelopeError::Decryption
    })
}

fn open(pkg: &EncryptedPackage, private_key: &PrivateKey) -> Stage<Value> {
    // Unwrap one-time key
    let wrapped_key = base64_to_buffer(&pkg.encrypted_key).map_err(|_| "wrapped key encoding")?;
    let key = Zeroizing::new(
        private_key
            .inner
            .decrypt(oaep(), &wrapped_key)
            .map_err(|_| "key unwrap")?,
    );
    if key.len() != KEY_LEN {
        return Err("key length");
    }

    let iv = base64_to_buffer(&pkg.iv).map_err(|_| "iv encoding")?;
    if iv.len() != IV_LEN {
        return Err("iv length");
    }
    let ciphertext = base64_to_buffer(&pkg.encrypted_data).map_err(|_| "payload encoding")?;
    if ciphertext.len() < TAG_LEN {
        return Err("payload length");
    }

    // Payload AEAD; fails on any tampering
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| "aes key")?;
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(&iv), ciphertext.as_slice())
            .map_err(|_| "payload aead")?,
    );

    tracing::trace!(plaintext_len = plaintext.len(), "opened package");

    serde_json::from_slice(&plaintext).map_err(|_| "payload json")
}
