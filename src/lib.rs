//! # tholos-envelope
//!
//! Hybrid (envelope) encryption for JSON payloads: a fresh AES-256-GCM key per
//! message, wrapped for the recipient with RSA-OAEP.
//!
//! ## Algorithm Suite
//!
//! - **Key Wrapping:** RSA-OAEP, SHA-256 (hash and MGF1), 2048-bit keys by default
//! - **Symmetric Encryption:** AES-256-GCM, random 96-bit IV, tag appended
//! - **Key Formats:** SubjectPublicKeyInfo (public), PKCS8 (private), as base64 DER or PEM
//! - **Wire Format:** `{ "encryptedData", "encryptedKey", "iv" }`, all standard base64
//!
//! The layout matches WebCrypto's `RSA-OAEP`/`AES-GCM`, so packages interoperate
//! with browser producers and consumers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tholos_envelope::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Recipient generates a key pair and publishes the public half
//! let pair = generate_key_pair()?;
//! let exported = export_public_key(&pair.public)?;
//!
//! // Sender encrypts for the recipient
//! let pkg = hybrid_encrypt(&json!({ "amount": 42.5, "vendor": "Acme" }), &exported)?;
//!
//! // Recipient opens the package
//! let value = hybrid_decrypt(&pkg, &pair.private)?;
//! assert_eq!(value, json!({ "amount": 42.5, "vendor": "Acme" }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! - Every package uses its own key and IV from the OS random generator
//! - Encrypt and decrypt failures are reported as a single error kind each,
//!   without the underlying cause
//! - Private keys are non-extractable unless generated with
//!   [`KeyGenOptions::extractable`]; persist them only through secure storage
//! - Decryption returns an untyped JSON value; validate its shape before use
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

mod codec;
mod crypto;
mod errors;
mod keys;
mod types;

pub use codec::{base64_to_buffer, buffer_to_base64, pem_to_buffer};
pub use crypto::*;
pub use errors::EnvelopeError;
pub use keys::*;
pub use types::*;
