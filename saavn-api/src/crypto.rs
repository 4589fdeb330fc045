//! Media URL decryption.
//!
//! The catalog hides stream URLs in `encrypted_media_url`:
//! plaintext URL → DES-ECB(`38346591`, PKCS#7) → base64.
//!
//! The key is fixed by the upstream web player and must match exactly; any
//! other cipher, mode, or padding yields garbage with no way to detect it
//! beyond a bad padding byte.

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use des::Des;
use ecb::cipher::{BlockDecryptMut, KeyInit, block_padding::Pkcs7};

const MEDIA_KEY: &[u8; 8] = b"38346591";

type DesEcbDec = ecb::Decryptor<Des>;

/// Decrypt an `encrypted_media_url` value into a playable URL.
///
/// Returns `None` for empty input, invalid base64, a ciphertext that is not
/// a whole number of blocks, bad padding, or a non-UTF-8 plaintext. Never
/// panics.
pub fn decrypt_media_url(encrypted: &str) -> Option<String> {
    if encrypted.is_empty() {
        return None;
    }
    match try_decrypt(encrypted) {
        Ok(url) if !url.is_empty() => Some(url),
        Ok(_) => None,
        Err(reason) => {
            tracing::warn!(%reason, "media url decryption failed");
            None
        }
    }
}

fn try_decrypt(encrypted: &str) -> Result<String, String> {
    let mut buf = B64.decode(encrypted.trim()).map_err(|e| e.to_string())?;
    let plain = DesEcbDec::new(MEDIA_KEY.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|e| e.to_string())?;
    String::from_utf8(plain.to_vec()).map_err(|e| e.to_string())
}
