//! Contract execution, signed by the certificate holder.
//!
//! Only `contract_id, contract_argument, cert_holder_id, cert_version` are
//! signed; the function fields and the nonce ride along unsigned (the nonce
//! is already embedded in the formatted contract argument).

use crate::domain::canonical::CanonicalPayload;
use crate::domain::errors::SigningError;
use crate::messages::ContractExecutionRequest;
use crate::ports::signer::SignatureSigner;
use std::sync::Arc;

pub struct ContractExecutionRequestBuilder {
    signer: Arc<dyn SignatureSigner>,
    contract_id: String,
    contract_argument: String,
    cert_holder_id: String,
    cert_version: u32,
    function_argument: String,
    use_function_ids: bool,
    function_ids: Vec<String>,
    nonce: String,
}

impl ContractExecutionRequestBuilder {
    pub fn new(signer: Arc<dyn SignatureSigner>) -> Self {
        Self {
            signer,
            contract_id: String::new(),
            contract_argument: String::new(),
            cert_holder_id: String::new(),
            cert_version: 0,
            function_argument: String::new(),
            use_function_ids: false,
            function_ids: Vec::new(),
            nonce: String::new(),
        }
    }

    pub fn with_contract_id(mut self, id: impl Into<String>) -> Self {
        self.contract_id = id.into();
        self
    }

    /// The already-formatted versioned argument string.
    pub fn with_contract_argument(mut self, argument: impl Into<String>) -> Self {
        self.contract_argument = argument.into();
        self
    }

    pub fn with_cert_holder_id(mut self, id: impl Into<String>) -> Self {
        self.cert_holder_id = id.into();
        self
    }

    pub fn with_cert_version(mut self, version: u32) -> Self {
        self.cert_version = version;
        self
    }

    pub fn with_function_argument(mut self, argument: impl Into<String>) -> Self {
        self.function_argument = argument.into();
        self
    }

    pub fn with_use_function_ids(mut self, use_function_ids: bool) -> Self {
        self.use_function_ids = use_function_ids;
        self
    }

    pub fn with_function_ids(mut self, function_ids: Vec<String>) -> Self {
        self.function_ids = function_ids;
        self
    }

    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Signing payload order: `contract_id, contract_argument,
    /// cert_holder_id, cert_version`.
    pub async fn build(self) -> Result<ContractExecutionRequest, SigningError> {
        let payload = CanonicalPayload::new()
            .push_str(&self.contract_id)
            .push_str(&self.contract_argument)
            .push_str(&self.cert_holder_id)
            .push_u32(self.cert_version)
            .finish();

        let signature = self.signer.sign(&payload).await?;

        Ok(ContractExecutionRequest {
            contract_id: self.contract_id,
            contract_argument: self.contract_argument,
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            function_argument: self.function_argument,
            use_function_ids: self.use_function_ids,
            function_ids: self.function_ids,
            nonce: self.nonce,
            signature,
            auditor_signature: None,
        })
    }
}
