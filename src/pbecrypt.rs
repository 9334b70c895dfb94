//! Encryption/decryption using PBEWithMD5AndDES
//!
//! This module implements password-based encryption using:
//! - PBKDF1 with MD5 for key derivation from the password (PKCS #5 v1.5)
//! - DES in CBC mode with PKCS #7 block padding
//!
//! The IV is not random: it is taken from the derived key material, so a
//! given password/salt/plaintext triple always produces the same bytes.
//!
//! The binary format is:
//! - salt: 8 bytes (the fixed salt on encryption; read back verbatim on decryption)
//! - ciphertext: variable length, a non-zero multiple of the DES block size

use crate::error::{ErrorKind, FailureClass, RasyptError, Result};
use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

/// Length of salt in bytes
pub const SALT_LEN: usize = 8;

/// Length of a DES block in bytes
const BLOCK_LEN: usize = 8;

/// Length of the DES key in bytes
const KEY_LEN: usize = 8;

/// Length of derived key material in bytes (DES key + IV)
const DERIVED_LEN: usize = 16;

/// PBKDF1 iteration count (key obtention iterations)
const KEY_ITERATIONS: u32 = 1000;

/// Salt used for every encryption. Keeping it constant is what makes the
/// operation deterministic; decryption honors whatever salt is embedded in
/// the input instead of assuming this one.
pub const FIXED_SALT: [u8; SALT_LEN] = [0u8; SALT_LEN];

type DesCbcEncryptor = cbc::Encryptor<des::Des>;
type DesCbcDecryptor = cbc::Decryptor<des::Des>;

/// Derive a DES key and IV from a password and salt using PBKDF1 with MD5
///
/// The first digest is computed over password || salt; the remaining
/// iterations re-hash the previous digest. The 16-byte result splits into
/// an 8-byte DES key followed by an 8-byte IV.
fn derive_key_iv(password: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; DERIVED_LEN]> {
    let mut hasher = Md5::new();
    hasher.update(password);
    hasher.update(salt);
    let mut digest = hasher.finalize();
    for _ in 1..KEY_ITERATIONS {
        digest = Md5::digest(digest);
    }
    Zeroizing::new(digest.into())
}

/// Encrypt plaintext with a password using the fixed salt
///
/// Returns the binary format: salt(8) + ciphertext(variable)
pub fn encrypt(password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_with_salt(password, plaintext, &FIXED_SALT)
}

/// Encrypt plaintext with a password using the provided salt
///
/// `encrypt` is the normal entry point; this variant exists so output can be
/// produced under a caller-chosen salt (vector fixtures, interoperability
/// checks against data salted by other producers).
pub fn encrypt_with_salt(
    password: &[u8],
    plaintext: &[u8],
    salt: &[u8; SALT_LEN],
) -> Result<Vec<u8>> {
    let derived = derive_key_iv(password, salt);
    let (key, iv) = derived.split_at(KEY_LEN);

    let cipher = DesCbcEncryptor::new_from_slices(key, iv).map_err(|e| {
        RasyptError::with_kind(
            FailureClass::InitializationFailure,
            ErrorKind::CipherSetup,
            format!("failed to initialize DES-CBC for encryption: {}", e),
        )
    })?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut output = Vec::with_capacity(SALT_LEN + ciphertext.len());
    output.extend_from_slice(salt);
    output.extend_from_slice(&ciphertext);

    Ok(output)
}

/// Decrypt ciphertext with a password
///
/// The salt is read from the input, so data produced under a salt other
/// than [`FIXED_SALT`] decrypts as long as the password matches.
pub fn decrypt(password: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < SALT_LEN {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::TruncatedInput,
            "input likely truncated while reading salt",
        ));
    }
    let (salt, body) = ciphertext.split_at(SALT_LEN);
    let salt: &[u8; SALT_LEN] = salt.try_into().map_err(|_| {
        RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::TruncatedInput,
            "failed to read salt",
        )
    })?;

    if body.is_empty() {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::BlockAlignment,
            "no ciphertext present after the salt",
        ));
    }

    if body.len() % BLOCK_LEN != 0 {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::BlockAlignment,
            "ciphertext length is not a multiple of the DES block size",
        ));
    }

    let derived = derive_key_iv(password, salt);
    let (key, iv) = derived.split_at(KEY_LEN);

    let cipher = DesCbcDecryptor::new_from_slices(key, iv).map_err(|e| {
        RasyptError::with_kind(
            FailureClass::InitializationFailure,
            ErrorKind::CipherSetup,
            format!("failed to initialize DES-CBC for decryption: {}", e),
        )
    })?;
    let plaintext = cipher.decrypt_padded_vec_mut::<Pkcs7>(body).map_err(|_| {
        RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::CipherRejected,
            "corrupt input, tampered-with data, or bad password",
        )
    })?;

    Ok(plaintext)
}
