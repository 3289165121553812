//! # Transport Messages
//!
//! Plain structs mirroring the wire types one-to-one. The binary wire
//! encoding belongs to the transport layer; the core only fills these in and
//! reads them back, so the signing logic never depends on a concrete
//! transport representation.

use serde::{Deserialize, Serialize};

/// Registers the caller's certificate with a privileged endpoint. Unsigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRegistrationRequest {
    pub cert_holder_id: String,
    pub cert_version: u32,
    pub cert_pem: String,
}

/// Registers a function binary with the ledger. Unsigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRegistrationRequest {
    pub function_id: String,
    pub function_binary_name: String,
    pub function_byte_code: Vec<u8>,
}

/// Registers a contract binary, signed by the certificate holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRegistrationRequest {
    pub contract_id: String,
    pub contract_binary_name: String,
    pub contract_byte_code: Vec<u8>,
    /// JSON-serialized contract properties.
    pub contract_properties: String,
    pub cert_holder_id: String,
    pub cert_version: u32,
    pub signature: Vec<u8>,
}

/// Lists the holder's registered contracts, signed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsListingRequest {
    pub cert_holder_id: String,
    pub cert_version: u32,
    pub contract_id: String,
    pub signature: Vec<u8>,
}

/// Validates one asset's history over an inclusive age range, signed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerValidationRequest {
    pub asset_id: String,
    pub start_age: u32,
    pub end_age: u32,
    pub cert_holder_id: String,
    pub cert_version: u32,
    pub signature: Vec<u8>,
}

/// Executes a registered contract, signed. The auditor's ordering signature
/// is attached between the ordering and execution phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractExecutionRequest {
    pub contract_id: String,
    /// The versioned argument string (see `domain::argument`).
    pub contract_argument: String,
    pub cert_holder_id: String,
    pub cert_version: u32,
    pub function_argument: String,
    pub use_function_ids: bool,
    pub function_ids: Vec<String>,
    pub nonce: String,
    /// Signature over `contract_id, contract_argument, cert_holder_id,
    /// cert_version`; the function fields and nonce are transported unsigned.
    pub signature: Vec<u8>,
    /// Set by the auditor's ordering phase, absent otherwise.
    pub auditor_signature: Option<Vec<u8>>,
}

/// Asks the auditor to validate the ledger's execution of `request`.
/// Carries no independent signature of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionValidationRequest {
    pub request: ContractExecutionRequest,
    /// The proofs the ledger produced for that execution.
    pub proofs: Vec<AssetProofMessage>,
}

/// Wire form of one signed asset state transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProofMessage {
    pub asset_id: String,
    pub age: u32,
    pub nonce: String,
    pub input: String,
    pub hash: Vec<u8>,
    pub prev_hash: Vec<u8>,
    pub signature: Vec<u8>,
}

/// Response of a contract execution on either party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractExecutionResponse {
    pub contract_result: String,
    pub function_result: String,
    pub proofs: Vec<AssetProofMessage>,
}

/// Response of a plain (non-auditor) ledger validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerValidationResponse {
    pub status_code: u32,
    pub proof: Option<AssetProofMessage>,
}

/// Response of a contracts listing; `json` maps contract ids to metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsListingResponse {
    pub json: String,
}

/// Response of the auditor's ordering phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOrderingResponse {
    pub signature: Vec<u8>,
}

/// Structured status recovered from a transport failure's side channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStatus {
    pub code: u32,
    pub message: String,
}
