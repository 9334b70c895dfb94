//! String transformation operations
//!
//! This module provides the high-level operations for encrypting and
//! decrypting in-memory text strings, composing the cipher with the
//! textual armoring.

use crate::armor;
use crate::error::{ErrorKind, FailureClass, RasyptError, Result};
use crate::pbecrypt;

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Transform `payload` under `password` in the requested direction.
///
/// The calling layer is expected to have screened out blank fields already;
/// they are rejected here again regardless. Every failure comes back with
/// one of the two canonical messages from [`FailureClass::display_message`]
/// as its top-level text, with the specific cause preserved as the source.
pub fn transform(mode: Mode, password: &str, payload: &str) -> Result<String> {
    transform_inner(mode, password, payload).map_err(|e| {
        let msg = e.class.display_message();
        e.with_context(msg)
    })
}

fn transform_inner(mode: Mode, password: &str, payload: &str) -> Result<String> {
    if password.is_empty() {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::BlankInput,
            "password must not be empty",
        ));
    }
    if payload.is_empty() {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::BlankInput,
            "payload must not be empty",
        ));
    }

    match mode {
        Mode::Encrypt => encrypt_text(password, payload),
        Mode::Decrypt => decrypt_text(password, payload),
    }
}

/// Encrypt a payload string, returning the armored ciphertext
pub fn encrypt_text(password: &str, payload: &str) -> Result<String> {
    let ciphertext = pbecrypt::encrypt(password.as_bytes(), payload.as_bytes())
        .map_err(|e| e.with_context("encryption failed"))?;
    Ok(armor::wrap(&ciphertext))
}

/// Decrypt an armored ciphertext string, returning the original payload
pub fn decrypt_text(password: &str, payload: &str) -> Result<String> {
    let ciphertext = armor::unwrap(payload).map_err(|e| e.with_context("failed to unarmor"))?;
    let plaintext = pbecrypt::decrypt(password.as_bytes(), &ciphertext)
        .map_err(|e| e.with_context("failed to decrypt"))?;
    String::from_utf8(plaintext).map_err(|e| {
        RasyptError::with_kind_and_source(
            FailureClass::BadInput,
            ErrorKind::NotText,
            "decrypted payload is not valid text",
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_roundtrip() {
        let encrypted = transform(Mode::Encrypt, "k1-password", "round-trip").unwrap();
        assert_ne!(encrypted, "round-trip");

        let decrypted = transform(Mode::Decrypt, "k1-password", &encrypted).unwrap();
        assert_eq!(decrypted, "round-trip");
    }

    #[test]
    fn test_transform_deterministic() {
        let ct1 = transform(Mode::Encrypt, "secret", "hello").unwrap();
        let ct2 = transform(Mode::Encrypt, "secret", "hello").unwrap();
        assert_eq!(ct1, ct2);
    }

    #[test]
    fn test_known_ciphertext() {
        let encrypted = transform(Mode::Encrypt, "secret", "hello").unwrap();
        assert_eq!(encrypted, "AAAAAAAAAADd1Bfh6XoZ/A==");

        let decrypted = transform(Mode::Decrypt, "secret", "AAAAAAAAAADd1Bfh6XoZ/A==").unwrap();
        assert_eq!(decrypted, "hello");
    }

    #[test]
    fn test_unicode_payload() {
        let encrypted = transform(Mode::Encrypt, "clé", "héllo wörld…").unwrap();
        let decrypted = transform(Mode::Decrypt, "clé", &encrypted).unwrap();
        assert_eq!(decrypted, "héllo wörld…");
    }

    #[test]
    fn test_wrong_password() {
        let encrypted = transform(Mode::Encrypt, "secret", "hello").unwrap();
        let result = transform(Mode::Decrypt, "hunter2", &encrypted);

        let err = result.expect_err("expected bad input failure");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::CipherRejected));
        assert_eq!(
            err.message(),
            "Encryption/decryption information is incorrect. Please check the input."
        );
    }

    #[test]
    fn test_garbage_ciphertext() {
        let result = transform(Mode::Decrypt, "secret", "not-even-base64!!!");

        let err = result.expect_err("expected bad input failure");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::ArmorDecode));
        assert_eq!(
            err.message(),
            "Encryption/decryption information is incorrect. Please check the input."
        );
    }

    #[test]
    fn test_truncated_ciphertext() {
        // Valid base64, but too short to contain a salt.
        let result = transform(Mode::Decrypt, "secret", "AAAA");

        let err = result.expect_err("expected bad input failure");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::TruncatedInput));
    }

    #[test]
    fn test_non_text_plaintext() {
        // Decrypts cleanly under this password but the recovered bytes
        // (ff fe 00 01) are not UTF-8.
        let result = decrypt_text("test", "AAAAAAAAAADGOVd/s4rUhA==");

        let err = result.expect_err("expected non-text failure");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::NotText));
    }

    #[test]
    fn test_blank_password_rejected() {
        let err = transform(Mode::Encrypt, "", "hello").expect_err("expected blank rejection");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::BlankInput));
        assert_eq!(
            err.message(),
            "Encryption/decryption information is incorrect. Please check the input."
        );
    }

    #[test]
    fn test_blank_payload_rejected() {
        let err = transform(Mode::Decrypt, "secret", "").expect_err("expected blank rejection");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::BlankInput));
    }
}
