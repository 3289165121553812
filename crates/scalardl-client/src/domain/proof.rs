//! # Asset Proofs
//!
//! A proof is a signed attestation of one asset state transition. Proofs are
//! constructed only from transport responses, never mutated, compared by
//! value when reconciling the Ledger and the Auditor, and verifiable against
//! the signer's public key.

use crate::domain::canonical::CanonicalPayload;
use crate::domain::errors::ClientError;
use crate::messages::AssetProofMessage;
use crate::ports::signer::SignatureValidator;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// A cryptographically-signed historical state transition of one asset.
///
/// `age` is the asset's logical version, monotonically increasing per asset;
/// `prev_hash` of age `n + 1` links back to `hash` of age `n`, forming a hash
/// chain. The chain itself is enforced server-side; the client verifies
/// signatures and structural equality only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetProof {
    id: String,
    age: u32,
    nonce: String,
    input: String,
    hash: Vec<u8>,
    prev_hash: Vec<u8>,
    signature: Vec<u8>,
}

impl AssetProof {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        age: u32,
        nonce: impl Into<String>,
        input: impl Into<String>,
        hash: Vec<u8>,
        prev_hash: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            id: id.into(),
            age,
            nonce: nonce.into(),
            input: input.into(),
            hash,
            prev_hash,
            signature,
        }
    }

    /// Build a proof from its wire form.
    pub fn from_message(message: &AssetProofMessage) -> Self {
        Self::new(
            message.asset_id.clone(),
            message.age,
            message.nonce.clone(),
            message.input.clone(),
            message.hash.clone(),
            message.prev_hash.clone(),
            message.signature.clone(),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    pub fn prev_hash(&self) -> &[u8] {
        &self.prev_hash
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Byte-equality of this proof's hash against `hash`.
    #[deprecated(note = "compare whole proofs with `value_equals` instead")]
    pub fn hash_equals(&self, hash: &[u8]) -> bool {
        self.hash == hash
    }

    /// Structural equality over id, age, nonce, input, hash and prev_hash.
    /// The signature is excluded: the two parties sign independently.
    pub fn value_equals(&self, other: &AssetProof) -> bool {
        self.id == other.id
            && self.age == other.age
            && self.nonce == other.nonce
            && self.input == other.input
            && self.hash == other.hash
            && self.prev_hash == other.prev_hash
    }

    /// Verify this proof's signature against the signer's public key.
    pub fn validate_with(&self, validator: &dyn SignatureValidator) -> Result<(), ClientError> {
        let serialized = self.canonical_bytes();
        let valid = validator.verify(&serialized, &self.signature)?;
        if !valid {
            return Err(ClientError::InvalidArgument(
                "the proof signature can't be validated with the given key".into(),
            ));
        }
        Ok(())
    }

    /// Canonical encoding the signer signed: `id, age(BE32), nonce, input,
    /// hash, prev_hash`. Frozen wire contract.
    fn canonical_bytes(&self) -> Vec<u8> {
        CanonicalPayload::new()
            .push_str(&self.id)
            .push_u32(self.age)
            .push_str(&self.nonce)
            .push_str(&self.input)
            .push_bytes(&self.hash)
            .push_bytes(&self.prev_hash)
            .finish()
    }
}

impl std::fmt::Display for AssetProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AssetProof{{id={},age={},nonce={},input={},hash={},prev_hash={},signature={}}}",
            self.id,
            self.age,
            self.nonce,
            self.input,
            BASE64.encode(&self.hash),
            BASE64.encode(&self.prev_hash),
            BASE64.encode(&self.signature),
        )
    }
}
