//! AES-256-GCM envelope encryption for vault payloads.
//!
//! The envelope layout is `salt(16) || iv(12) || ciphertext || auth_tag(16)`,
//! base64-encoded for storage. The envelope is self-describing: decryption
//! needs only the master password and the envelope itself.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Serialize};
use zeroize::Zeroizing;

use crate::crypto::kdf::{derive_key, generate_salt, SALT_LEN};
use crate::crypto::{CryptoError, Result};

/// Initialization vector length in bytes (96 bits)
pub const IV_LEN: usize = 12;

/// Authentication tag length in bytes (128 bits)
pub const TAG_LEN: usize = 16;

/// Minimum decoded envelope length: salt and IV with an empty ciphertext
pub const ENVELOPE_MIN_LEN: usize = SALT_LEN + IV_LEN;

/// Encrypt a vault object under the master password
///
/// Serializes the value to JSON, draws a fresh random salt and IV, derives
/// the key, and seals with AES-256-GCM (the auth tag is appended to the
/// ciphertext by the AEAD). Output is `base64(salt || iv || ciphertext||tag)`.
///
/// Two calls with identical inputs produce different envelopes; both
/// decrypt to the same value. The salt/IV randomness is a required
/// property, not an artifact.
pub fn encrypt<T: Serialize>(value: &T, password: &str) -> Result<String> {
    let plaintext = Zeroizing::new(
        serde_json::to_vec(value).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?,
    );

    let salt = generate_salt();
    let key = derive_key(password, &salt);

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let iv: [u8; IV_LEN] = nonce.into();

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_slice())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut envelope = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(envelope))
}

/// Decrypt an envelope with the master password
///
/// Envelopes decoding to fewer than 28 bytes are rejected before any key
/// derivation. Invalid base64, a failed auth tag (wrong password or
/// tampered data), and unparsable plaintext all surface as the same
/// [`CryptoError::DecryptionFailed`].
pub fn decrypt<T: DeserializeOwned>(envelope: &str, password: &str) -> Result<T> {
    let decoded = STANDARD
        .decode(envelope)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    if decoded.len() < ENVELOPE_MIN_LEN {
        return Err(CryptoError::DecryptionFailed);
    }

    let salt: [u8; SALT_LEN] = decoded[..SALT_LEN]
        .try_into()
        .map_err(|_| CryptoError::DecryptionFailed)?;
    let iv: [u8; IV_LEN] = decoded[SALT_LEN..ENVELOPE_MIN_LEN]
        .try_into()
        .map_err(|_| CryptoError::DecryptionFailed)?;
    let ciphertext = &decoded[ENVELOPE_MIN_LEN..];

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Nonce::from(iv);

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(&nonce, ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)?,
    );

    serde_json::from_slice(&plaintext).map_err(|_| CryptoError::DecryptionFailed)
}
