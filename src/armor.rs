//! Textual ciphertext encoding
//!
//! Encrypted payloads travel as standard padded base64 so they can be pasted
//! into configuration files, terminals, and form fields. The armored form is:
//! - Free of whitespace (including newlines)
//! - Decodable by any standard base64 consumer

use crate::error::{ErrorKind, FailureClass, RasyptError, Result};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Wrap bytes in armor, returning the armored string
pub fn wrap(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Unwrap an armored string, returning the original bytes
pub fn unwrap(armored: &str) -> Result<Vec<u8>> {
    STANDARD.decode(armored).map_err(|e| {
        RasyptError::with_kind_and_source(
            FailureClass::BadInput,
            ErrorKind::ArmorDecode,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes() {
        let bytes = b"";
        let armored = wrap(bytes);
        let unwrapped = unwrap(&armored).unwrap();
        assert_eq!(bytes, &unwrapped[..]);
    }

    #[test]
    fn test_simple_bytes() {
        let bytes = b"test";
        let armored = wrap(bytes);
        let unwrapped = unwrap(&armored).unwrap();
        assert_eq!(bytes, &unwrapped[..]);
    }

    #[test]
    fn test_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let armored = wrap(&bytes);

        // Exact output; standard alphabet with padding.
        assert_eq!(
            armored,
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+P0BBQkNERUZHSElKS0xNTk9QUVJTVFVWV1hZWltcXV5fYGFiY2RlZmdoaWprbG1ub3BxcnN0dXZ3eHl6e3x9fn+AgYKDhIWGh4iJiouMjY6PkJGSk5SVlpeYmZqbnJ2en6ChoqOkpaanqKmqq6ytrq+wsbKztLW2t7i5uru8vb6/wMHCw8TFxsfIycrLzM3Oz9DR0tPU1dbX2Nna29zd3t/g4eLj5OXm5+jp6uvs7e7v8PHy8/T19vf4+fr7/P3+/w=="
        );

        let unwrapped = unwrap(&armored).unwrap();
        assert_eq!(bytes, unwrapped);
    }

    #[test]
    fn test_bad_base64() {
        let result = unwrap("bad$$");
        let err = result.expect_err("expected base64 decode error");
        assert_eq!(err.class, FailureClass::BadInput);
        assert_eq!(err.kind, Some(ErrorKind::ArmorDecode));
    }

    #[test]
    fn test_embedded_whitespace_rejected() {
        let result = unwrap("AAAA AAAA");
        assert!(result.is_err());
    }

    #[test]
    fn test_no_whitespace() {
        let bytes = b"test data with spaces";
        let armored = wrap(bytes);

        assert!(!armored.contains(' '));
        assert!(!armored.contains('\n'));
        assert!(!armored.contains('\t'));
    }
}
