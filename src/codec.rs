//! Binary/text conversions: base64 and PEM unwrapping.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{EnvelopeError, Result};

/// Encode bytes as standard (RFC 4648, padded) base64.
pub fn buffer_to_base64(buffer: &[u8]) -> String {
    STANDARD.encode(buffer)
}

/// Decode standard padded base64 into bytes.
pub fn base64_to_buffer(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| EnvelopeError::Decode(format!("base64: {e}")))
}

/// Extract the DER bytes from PEM text.
///
/// Every line containing `---` is treated as framing and dropped; remaining
/// lines are concatenated with all whitespace removed and base64-decoded.
/// `\n`, `\r\n` and bare `\r` line endings are all accepted.
pub fn pem_to_buffer(pem_text: &str) -> Result<Vec<u8>> {
    let body: String = pem_text
        .split(['\n', '\r'])
        .filter(|line| !line.contains("---"))
        .flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
        .collect();

    if body.is_empty() {
        return Err(EnvelopeError::Decode("pem: no body".into()));
    }
    base64_to_buffer(&body)
}
