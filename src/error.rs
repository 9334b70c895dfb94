use std::error::Error as StdError;

use thiserror::Error;

/// Broad failure classification exposed at the transform boundary.
///
/// Exactly two classes exist: either the user-supplied material (payload,
/// ciphertext, password) was unusable, or the cipher machinery could not be
/// set up in the first place. Callers branch on this, not on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The operation was rejected by the cryptographic primitive: malformed
    /// or truncated ciphertext, a password that does not match, blank
    /// input, or recovered data that is not text.
    BadInput,

    /// The cipher configuration could not be initialized, or the password
    /// could not be obtained before any transform was attempted.
    InitializationFailure,
}

impl FailureClass {
    /// The canonical user-facing message for this class of failure.
    pub fn display_message(&self) -> &'static str {
        match self {
            FailureClass::BadInput => {
                "Encryption/decryption information is incorrect. Please check the input."
            }
            FailureClass::InitializationFailure => {
                "Initialization failed. Please check the input."
            }
        }
    }
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Base64 decoding of the armored ciphertext failed.
    ArmorDecode,
    /// Input data ended before the embedded salt could be read.
    TruncatedInput,
    /// Ciphertext body is empty or not a multiple of the DES block size.
    BlockAlignment,
    /// The cipher rejected the input: bad padding after decryption, which
    /// almost always means a wrong password or corrupted ciphertext.
    CipherRejected,
    /// Decryption succeeded but the recovered bytes are not valid UTF-8.
    NotText,
    /// A blank password or payload reached the transform boundary.
    BlankInput,
    /// A field contained spaces or tabs, which the input rules forbid.
    ForbiddenWhitespace,
    /// DES-CBC construction rejected the derived key material.
    CipherSetup,
    /// Password could not be obtained from the configured reader.
    PasswordUnavailable,
    /// Interaction with the terminal, stdin/stderr, or other I/O failed.
    Io,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct RasyptError {
    /// Broad failure class, always provided.
    pub class: FailureClass,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl RasyptError {
    /// Creates a new error with a required class and display message.
    pub fn new(class: FailureClass, msg: impl Into<String>) -> Self {
        Self {
            class,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(class: FailureClass, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            class,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that retains the originating source error.
    pub fn with_source(
        class: FailureClass,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            class,
            kind: None,
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        class: FailureClass,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            class,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let class = self.class;
        let kind = self.kind;
        Self {
            class,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RasyptError>;
