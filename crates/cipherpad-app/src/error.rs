//! Validation failures.
//!
//! Raised before a request is sent; local-only, no network traffic.

use thiserror::Error;

/// A precondition violation detected before issuing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// AES encrypt triggered without a secret key.
    #[error("Please enter a secret key")]
    MissingSecretKey,

    /// Decrypt triggered without ciphertext.
    #[error("Please enter encrypted text to decrypt")]
    EmptyCiphertext,

    /// AES decrypt triggered without its key or IV.
    #[error("Please provide secret key and IV")]
    MissingAesDecryptInputs,

    /// RSA decrypt triggered without a private key.
    #[error("Please provide private key")]
    MissingPrivateKey,

    /// Decrypt triggered while SHA-256 is selected.
    #[error("Hashes cannot be decrypted")]
    DecryptUnavailable,
}
