//! Error types for tholos-envelope operations.

use thiserror::Error;

/// Errors that can occur while encoding, handling keys, or sealing/opening packages.
///
/// `Encryption` and `Decryption` deliberately carry no detail: whatever failed
/// inside the hybrid pipeline is collapsed into one of these two variants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvelopeError {
    /// Base64, PEM, or package JSON text could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The RSA key pair could not be generated with the requested parameters.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Key material does not match the expected format or algorithm.
    #[error("key import failed: {0}")]
    KeyImport(String),

    /// Key material could not be exported (e.g. private key is not extractable).
    #[error("key export failed: {0}")]
    KeyExport(&'static str),

    /// The hybrid encrypt pipeline failed.
    #[error("encryption failed")]
    Encryption,

    /// The hybrid decrypt pipeline failed (wrong key, tampering, malformed input).
    #[error("decryption failed")]
    Decryption,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
