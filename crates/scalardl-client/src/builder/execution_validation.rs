//! Execution validation. Wraps the original (already signed and
//! auditor-stamped) execution request together with the ledger's proofs; the
//! nested signatures are the authentication, so the wrapper carries none of
//! its own.

use crate::messages::{AssetProofMessage, ContractExecutionRequest, ExecutionValidationRequest};

#[derive(Debug, Default)]
pub struct ExecutionValidationRequestBuilder {
    request: ContractExecutionRequest,
    proofs: Vec<AssetProofMessage>,
}

impl ExecutionValidationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contract_execution_request(mut self, request: ContractExecutionRequest) -> Self {
        self.request = request;
        self
    }

    pub fn with_proofs(mut self, proofs: Vec<AssetProofMessage>) -> Self {
        self.proofs = proofs;
        self
    }

    pub fn build(self) -> ExecutionValidationRequest {
        ExecutionValidationRequest {
            request: self.request,
            proofs: self.proofs,
        }
    }
}
