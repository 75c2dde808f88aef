#![allow(dead_code)]

use tholos_envelope::*;

pub const ALICE_PUB_PEM: &str = include_str!("../fixtures/alice.pub.pem");
pub const ALICE_KEY_PEM: &str = include_str!("../fixtures/alice.key.pem");
pub const ALICE_PKCS1_KEY_PEM: &str = include_str!("../fixtures/alice.pkcs1.key.pem");
pub const BOB_PUB_PEM: &str = include_str!("../fixtures/bob.pub.pem");
pub const BOB_KEY_PEM: &str = include_str!("../fixtures/bob.key.pem");
pub const P256_PUB_PEM: &str = include_str!("../fixtures/p256.pub.pem");
/// Package produced for Alice by an independent RSA-OAEP/AES-GCM implementation.
pub const ALICE_PACKAGE_JSON: &str = include_str!("../fixtures/alice.package.json");

pub fn public(pem: &str) -> PublicKey {
    import_pem_key(pem, KeyKind::Public).unwrap().into_public().unwrap()
}

pub fn private(pem: &str) -> PrivateKey {
    import_pem_key(pem, KeyKind::Private).unwrap().into_private().unwrap()
}

/// Alice's public key as base64 SPKI DER.
pub fn alice_b64() -> String {
    export_public_key(&public(ALICE_PUB_PEM)).unwrap()
}

pub fn alice_private() -> PrivateKey {
    private(ALICE_KEY_PEM)
}

pub fn bob_private() -> PrivateKey {
    private(BOB_KEY_PEM)
}

/// Flip one bit of the base64-encoded field at byte `pos` (wrapped to length).
pub fn flip(field_b64: &str, pos: usize) -> String {
    let mut raw = base64_to_buffer(field_b64).unwrap();
    let i = pos % raw.len();
    raw[i] ^= 0x01;
    buffer_to_base64(&raw)
}
