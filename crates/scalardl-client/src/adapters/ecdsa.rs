//! # ECDSA P-256 Signing Backend
//!
//! The scheme the servers verify against: SHA-256 digest of the payload,
//! ECDSA over P-256, DER-encoded signature. Keys load from a SEC1
//! "EC PRIVATE KEY" PEM or a PKCS#8 PEM.

use crate::config::ClientConfig;
use crate::domain::errors::SigningError;
use crate::ports::signer::{SignatureSigner, SignatureValidator, SignerFactory};
use async_trait::async_trait;
use p256::ecdsa::signature::{Signer as _, Verifier as _};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::pkcs8::{DecodePrivateKey, DecodePublicKey};
use p256::{PublicKey, SecretKey};
use std::sync::Arc;

const SEC1_PEM_TAG: &str = "EC PRIVATE KEY";

/// Signer backed by an in-memory P-256 private key.
#[derive(Debug)]
pub struct EcdsaSigner {
    key: SigningKey,
}

impl EcdsaSigner {
    /// Load a private key from a SEC1 or PKCS#8 PEM string.
    pub fn from_pem(pem: &str) -> Result<Self, SigningError> {
        let secret = if pem.contains(SEC1_PEM_TAG) {
            SecretKey::from_sec1_pem(pem)
                .map_err(|e| SigningError::UnloadableKey(e.to_string()))?
        } else {
            SecretKey::from_pkcs8_pem(pem)
                .map_err(|e| SigningError::UnloadableKey(e.to_string()))?
        };

        Ok(Self {
            key: SigningKey::from(secret),
        })
    }

    pub fn from_signing_key(key: SigningKey) -> Self {
        Self { key }
    }
}

#[async_trait]
impl SignatureSigner for EcdsaSigner {
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SigningError> {
        let signature: Signature = self
            .key
            .try_sign(payload)
            .map_err(|e| SigningError::Failed(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

/// Validator backed by a P-256 public key.
pub struct EcdsaValidator {
    key: VerifyingKey,
}

impl EcdsaValidator {
    /// Load a public key from a SubjectPublicKeyInfo PEM string.
    pub fn from_pem(pem: &str) -> Result<Self, SigningError> {
        let public = PublicKey::from_public_key_pem(pem)
            .map_err(|e| SigningError::UnloadableKey(e.to_string()))?;
        Ok(Self {
            key: VerifyingKey::from(public),
        })
    }

    /// Load a public key from a SEC1-encoded point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, SigningError> {
        let public = PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| SigningError::UnloadableKey(e.to_string()))?;
        Ok(Self {
            key: VerifyingKey::from(public),
        })
    }

    pub fn from_verifying_key(key: VerifyingKey) -> Self {
        Self { key }
    }
}

impl SignatureValidator for EcdsaValidator {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SigningError> {
        let signature = Signature::from_der(signature)
            .map_err(|e| SigningError::Verification(e.to_string()))?;
        Ok(self.key.verify(message, &signature).is_ok())
    }
}

/// [`SignerFactory`] reading the PEM-encoded private key from the
/// configuration.
#[derive(Debug, Default)]
pub struct EcdsaSignerFactory;

impl SignerFactory for EcdsaSignerFactory {
    fn create(&self, config: &ClientConfig) -> Result<Arc<dyn SignatureSigner>, SigningError> {
        let pem = config.private_key_pem().ok_or_else(|| {
            SigningError::UnloadableKey("no private key is configured".into())
        })?;
        Ok(Arc::new(EcdsaSigner::from_pem(pem)?))
    }
}
