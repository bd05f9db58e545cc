//! Algorithm selection.

use std::fmt;

/// The cryptographic primitive the active workflow targets.
///
/// Selecting a new kind replaces the whole [`crate::WorkflowState`]; no
/// field survives an algorithm switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmKind {
    /// AES-256 symmetric encryption (shared key + per-round IV).
    #[default]
    Aes,
    /// RSA-2048 asymmetric encryption (fresh key pair per encrypt).
    Rsa,
    /// SHA-256 hashing (one-way, no decrypt).
    Sha256,
}

impl AlgorithmKind {
    /// All kinds in picker order.
    pub const ALL: [AlgorithmKind; 3] = [AlgorithmKind::Aes, AlgorithmKind::Rsa, AlgorithmKind::Sha256];

    /// Whether a decrypt operation exists for this kind.
    pub fn supports_decrypt(self) -> bool {
        !matches!(self, AlgorithmKind::Sha256)
    }

    /// Next kind in picker order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            AlgorithmKind::Aes => AlgorithmKind::Rsa,
            AlgorithmKind::Rsa => AlgorithmKind::Sha256,
            AlgorithmKind::Sha256 => AlgorithmKind::Aes,
        }
    }

    /// Human-readable name for titles and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Aes => "AES-256",
            AlgorithmKind::Rsa => "RSA-2048",
            AlgorithmKind::Sha256 => "SHA-256",
        }
    }

    /// Verb for the encrypt-slot trigger ("Encrypt" or "Hash").
    pub fn encrypt_verb(self) -> &'static str {
        match self {
            AlgorithmKind::Aes | AlgorithmKind::Rsa => "Encrypt",
            AlgorithmKind::Sha256 => "Hash",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
