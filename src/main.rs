//! tholos-envelope demo main.rs
//! Walks through one envelope round trip:
//! - RSA-OAEP (SHA-256) key pair for the recipient
//! - AES-256-GCM one-time key per package
//! - tamper and wrong-key rejection

use serde_json::json;
use tholos_envelope::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // --- 1. Recipient key pair ---
    let recipient = generate_key_pair()?;
    let exported = export_public_key(&recipient.public)?;
    println!("Recipient:");
    println!("  {} bit public key, fingerprint {}", recipient.public.bits(), recipient.public.fingerprint()?);
    println!("  private key extractable: {}\n", recipient.private.is_extractable());

    // --- 2. Sender encrypts a receipt for the recipient ---
    let receipt = json!({ "amount": 42.5, "vendor": "Acme", "items": ["widget", "gadget"] });
    let pkg = hybrid_encrypt(&receipt, &exported)?;
    let wire = pkg.to_json();
    println!("Encrypted package: {} bytes of JSON", wire.len());

    // --- 3. Recipient decrypts ---
    let received = EncryptedPackage::from_json(&wire)?;
    let opened = hybrid_decrypt(&received, &recipient.private)?;
    println!("Recipient decrypted: {opened}");
    assert_eq!(opened, receipt);

    // --- 4. Tampered package is rejected ---
    let mut raw = base64_to_buffer(&received.encrypted_data)?;
    raw[0] ^= 0x01;
    let tampered = EncryptedPackage {
        encrypted_data: buffer_to_base64(&raw),
        ..received.clone()
    };
    let res = hybrid_decrypt(&tampered, &recipient.private);
    println!("\nTampered package: {:?}", res.as_ref().err());
    assert_eq!(res, Err(EnvelopeError::Decryption));

    // --- 5. Someone else's key is rejected ---
    let stranger = generate_key_pair()?;
    let res = hybrid_decrypt(&received, &stranger.private);
    println!("Wrong private key: {:?}", res.as_ref().err());
    assert_eq!(res, Err(EnvelopeError::Decryption));

    println!("\nAll checks passed.");
    Ok(())
}
