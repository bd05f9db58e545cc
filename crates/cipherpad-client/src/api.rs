//! Operation parameters and success payloads.
//!
//! The request enums are what the workflow layer hands to the runtime when a
//! validated encrypt or decrypt is triggered; the outcome types are what the
//! service's JSON replies decode into.

/// Parameters for an encrypt (or hash) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptRequest {
    /// AES encryption with a user-supplied shared key.
    Aes {
        /// Plaintext to encrypt.
        text: String,
        /// Shared secret key.
        secret_key: String,
    },

    /// RSA encryption. The service generates a fresh key pair per call.
    Rsa {
        /// Plaintext to encrypt.
        text: String,
    },

    /// SHA-256 hashing.
    Sha256 {
        /// Text to hash. May be empty.
        text: String,
    },
}

/// Parameters for a decrypt operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptRequest {
    /// AES decryption with the key and IV from the original encryption.
    Aes {
        /// Ciphertext to decrypt.
        ciphertext: String,
        /// Shared secret key used for encryption.
        secret_key: String,
        /// Initialization vector from the encryption round.
        iv: String,
    },

    /// RSA decryption with the matching private key.
    Rsa {
        /// Ciphertext to decrypt.
        ciphertext: String,
        /// PEM private key from the encryption round.
        private_key: String,
    },
}

/// Success payload of an encrypt or hash operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptOutcome {
    /// AES ciphertext plus the IV the service generated for this round.
    Aes(AesEncrypted),

    /// RSA ciphertext plus the freshly generated key pair.
    Rsa(RsaEncrypted),

    /// SHA-256 digest, fixed length regardless of input length.
    Sha256 {
        /// Hex digest.
        digest: String,
    },
}

/// AES encryption result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AesEncrypted {
    /// Ciphertext, opaque without the key and IV.
    pub ciphertext: String,
    /// Initialization vector generated by the service for this round.
    pub iv: String,
}

/// RSA encryption result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaEncrypted {
    /// Ciphertext, opaque without the private key.
    pub ciphertext: String,
    /// Public half of the generated key pair.
    pub public_key: String,
    /// Private half of the generated key pair; required for decryption.
    pub private_key: String,
}
