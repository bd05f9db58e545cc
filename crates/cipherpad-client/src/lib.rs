//! Client
//!
//! Typed HTTP client for the remote crypto service. The service performs all
//! cryptographic computation; this crate is a thin request layer that maps
//! the five operations (AES encrypt/decrypt, RSA encrypt/decrypt, SHA-256
//! hash) onto JSON round-trips and a typed error taxonomy.
//!
//! # Components
//!
//! - [`RemoteCryptoClient`]: the request layer itself
//! - [`EncryptRequest`] / [`DecryptRequest`]: typed operation parameters
//! - [`EncryptOutcome`]: success payloads (ciphertext, IV, key pair, digest)
//! - [`ClientError`]: transport vs service-reported failures

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod client;
mod error;

pub use api::{AesEncrypted, DecryptRequest, EncryptOutcome, EncryptRequest, RsaEncrypted};
pub use client::RemoteCryptoClient;
pub use error::ClientError;
