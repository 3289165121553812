//! # Signer Seams
//!
//! Capability objects for producing and checking asymmetric signatures.
//! Implementations differ only in how they load key material; the signing
//! scheme itself (ECDSA P-256 over SHA-256, DER-encoded output) is fixed by
//! the servers.

use crate::config::ClientConfig;
use crate::domain::errors::SigningError;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces a signature for a byte payload.
///
/// Repeated calls on the same payload need not produce identical bytes
/// (ECDSA nonces may be randomized), but every signature must verify against
/// the corresponding public key. Implementations must be safe for concurrent
/// use: signing is a pure function of payload and key.
#[async_trait]
pub trait SignatureSigner: Send + Sync {
    /// Sign `payload`, returning the DER-encoded signature.
    ///
    /// Never returns a partial signature: the result is either a complete
    /// signature or a [`SigningError`].
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SigningError>;
}

impl std::fmt::Debug for dyn SignatureSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn SignatureSigner")
    }
}

/// Checks a signature against a public key.
pub trait SignatureValidator: Send + Sync {
    /// Whether `signature` is a valid signature of `message`.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SigningError>;
}

/// Creates a signer from the configured key material.
///
/// Keeps the orchestrator agnostic of where keys live (a PEM string, a
/// platform key handle, an HSM). The orchestrator memoizes the created
/// signer per configured identity.
pub trait SignerFactory: Send + Sync {
    fn create(&self, config: &ClientConfig) -> Result<Arc<dyn SignatureSigner>, SigningError>;
}
