//! Observable workflow state.
//!
//! [`WorkflowState`] is the "view model" for the active algorithm: every
//! field the UI renders plus the request status of the two action slots.
//! The encrypt and decrypt sections keep independent fields so a decrypt
//! never overwrites the text the user originally encrypted.

/// Request lifecycle of one action slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request issued since the last reset.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The most recent request completed successfully.
    Succeeded,
    /// The most recent request failed with this message.
    Failed(String),
}

impl RequestStatus {
    /// Whether a request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

/// Addressable fields of the workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Plaintext to encrypt or hash.
    Input,
    /// AES shared key (encrypt side).
    SecretKey,
    /// Encrypt-slot output: ciphertext or digest.
    Output,
    /// IV populated by an AES encrypt response.
    Iv,
    /// Public key populated by an RSA encrypt response.
    PublicKey,
    /// Private key populated by an RSA encrypt response.
    PrivateKey,
    /// Ciphertext to decrypt (pasted by the user).
    CipherInput,
    /// AES shared key (decrypt side).
    DecryptSecretKey,
    /// IV from the original encryption round (decrypt side).
    DecryptIv,
    /// RSA private key (decrypt side).
    DecryptPrivateKey,
    /// Decrypt-slot output: recovered plaintext.
    DecryptOutput,
}

impl Field {
    /// Whether the user can type into this field.
    ///
    /// Encrypt-slot outputs (ciphertext, IV, key pair) are server-populated
    /// and read-only; the decrypt section re-accepts the same material as
    /// editable input so previously saved keys can be pasted back.
    pub fn is_editable(self) -> bool {
        match self {
            Field::Input
            | Field::SecretKey
            | Field::CipherInput
            | Field::DecryptSecretKey
            | Field::DecryptIv
            | Field::DecryptPrivateKey => true,
            Field::Output | Field::Iv | Field::PublicKey | Field::PrivateKey | Field::DecryptOutput => false,
        }
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Input => "Input Text",
            Field::SecretKey | Field::DecryptSecretKey => "Secret Key",
            Field::Output => "Output",
            Field::Iv | Field::DecryptIv => "Initialization Vector (IV)",
            Field::PublicKey => "Public Key",
            Field::PrivateKey | Field::DecryptPrivateKey => "Private Key",
            Field::CipherInput => "Encrypted Text",
            Field::DecryptOutput => "Decrypted Output",
        }
    }
}

/// Field values and slot statuses for the active algorithm.
///
/// Created empty on algorithm selection, mutated by field edits and request
/// completions, replaced wholesale on algorithm switch or clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowState {
    /// Plaintext to encrypt or hash.
    pub input_text: String,
    /// AES shared key, user-supplied. Unused for RSA/SHA-256.
    pub secret_key: String,
    /// IV from the last AES encrypt response.
    pub iv: String,
    /// Public key from the last RSA encrypt response.
    pub public_key: String,
    /// Private key from the last RSA encrypt response.
    pub private_key: String,
    /// Ciphertext or digest of the last successful encrypt/hash.
    pub output_text: String,
    /// Encrypt-slot request lifecycle.
    pub encrypt_status: RequestStatus,

    /// Ciphertext to decrypt, user-supplied.
    pub cipher_text: String,
    /// AES key for decryption, user-supplied.
    pub decrypt_secret_key: String,
    /// IV for decryption, user-supplied.
    pub decrypt_iv: String,
    /// RSA private key for decryption, user-supplied.
    pub decrypt_private_key: String,
    /// Plaintext of the last successful decrypt.
    pub decrypt_output: String,
    /// Decrypt-slot request lifecycle.
    pub decrypt_status: RequestStatus,
}

impl WorkflowState {
    /// Current value of `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Input => &self.input_text,
            Field::SecretKey => &self.secret_key,
            Field::Output => &self.output_text,
            Field::Iv => &self.iv,
            Field::PublicKey => &self.public_key,
            Field::PrivateKey => &self.private_key,
            Field::CipherInput => &self.cipher_text,
            Field::DecryptSecretKey => &self.decrypt_secret_key,
            Field::DecryptIv => &self.decrypt_iv,
            Field::DecryptPrivateKey => &self.decrypt_private_key,
            Field::DecryptOutput => &self.decrypt_output,
        }
    }

    /// Overwrite the value of `field`.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Input => self.input_text = value,
            Field::SecretKey => self.secret_key = value,
            Field::Output => self.output_text = value,
            Field::Iv => self.iv = value,
            Field::PublicKey => self.public_key = value,
            Field::PrivateKey => self.private_key = value,
            Field::CipherInput => self.cipher_text = value,
            Field::DecryptSecretKey => self.decrypt_secret_key = value,
            Field::DecryptIv => self.decrypt_iv = value,
            Field::DecryptPrivateKey => self.decrypt_private_key = value,
            Field::DecryptOutput => self.decrypt_output = value,
        }
    }
}
