//! # Result Value Objects
//!
//! Immutable aggregates returned by the execution and validation paths.

use crate::domain::errors::ClientError;
use crate::domain::proof::AssetProof;
use crate::domain::status::StatusCode;
use crate::messages::{ContractExecutionResponse, LedgerValidationResponse};
use serde_json::Value;

/// Aggregate of one contract-execution round-trip.
///
/// `auditor_proofs` is empty when auditor mode is off.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractExecutionResult {
    contract_result: String,
    function_result: String,
    ledger_proofs: Vec<AssetProof>,
    auditor_proofs: Vec<AssetProof>,
}

impl ContractExecutionResult {
    pub fn new(
        contract_result: impl Into<String>,
        function_result: impl Into<String>,
        ledger_proofs: Vec<AssetProof>,
        auditor_proofs: Vec<AssetProof>,
    ) -> Self {
        Self {
            contract_result: contract_result.into(),
            function_result: function_result.into(),
            ledger_proofs,
            auditor_proofs,
        }
    }

    /// Build a result from a single party's response, with no auditor proofs.
    pub fn from_response(response: &ContractExecutionResponse) -> Self {
        Self::new(
            response.contract_result.clone(),
            response.function_result.clone(),
            response.proofs.iter().map(AssetProof::from_message).collect(),
            Vec::new(),
        )
    }

    /// The contract result parsed as JSON; an empty result parses to `{}`.
    pub fn result(&self) -> Result<Value, ClientError> {
        if self.contract_result.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.contract_result).map_err(|e| {
            ClientError::InvalidArgument(format!("contract result is not valid JSON: {e}"))
        })
    }

    pub fn contract_result(&self) -> &str {
        &self.contract_result
    }

    pub fn function_result(&self) -> &str {
        &self.function_result
    }

    pub fn ledger_proofs(&self) -> &[AssetProof] {
        &self.ledger_proofs
    }

    pub fn auditor_proofs(&self) -> &[AssetProof] {
        &self.auditor_proofs
    }
}

/// Outcome of a ledger validation.
///
/// `auditor_proof` is present only when the validation went through the
/// auditor-coordinated execution path.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerValidationResult {
    code: StatusCode,
    proof: Option<AssetProof>,
    auditor_proof: Option<AssetProof>,
}

impl LedgerValidationResult {
    pub fn new(
        code: StatusCode,
        proof: Option<AssetProof>,
        auditor_proof: Option<AssetProof>,
    ) -> Self {
        Self {
            code,
            proof,
            auditor_proof,
        }
    }

    /// Build a result from the ledger's plain validation response.
    pub fn from_response(response: &LedgerValidationResponse) -> Self {
        Self::new(
            StatusCode::from_u32(response.status_code)
                .unwrap_or(StatusCode::UnknownTransactionStatus),
            response.proof.as_ref().map(AssetProof::from_message),
            None,
        )
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn proof(&self) -> Option<&AssetProof> {
        self.proof.as_ref()
    }

    pub fn auditor_proof(&self) -> Option<&AssetProof> {
        self.auditor_proof.as_ref()
    }
}
