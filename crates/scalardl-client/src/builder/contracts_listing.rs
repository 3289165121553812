//! Contracts listing, signed by the certificate holder.

use crate::domain::canonical::CanonicalPayload;
use crate::domain::errors::SigningError;
use crate::messages::ContractsListingRequest;
use crate::ports::signer::SignatureSigner;
use std::sync::Arc;

pub struct ContractsListingRequestBuilder {
    signer: Arc<dyn SignatureSigner>,
    cert_holder_id: String,
    cert_version: u32,
    contract_id: String,
}

impl ContractsListingRequestBuilder {
    pub fn new(signer: Arc<dyn SignatureSigner>) -> Self {
        Self {
            signer,
            cert_holder_id: String::new(),
            cert_version: 0,
            contract_id: String::new(),
        }
    }

    pub fn with_cert_holder_id(mut self, id: impl Into<String>) -> Self {
        self.cert_holder_id = id.into();
        self
    }

    pub fn with_cert_version(mut self, version: u32) -> Self {
        self.cert_version = version;
        self
    }

    pub fn with_contract_id(mut self, id: impl Into<String>) -> Self {
        self.contract_id = id.into();
        self
    }

    /// Signing payload order: `contract_id, cert_holder_id, cert_version`.
    pub async fn build(self) -> Result<ContractsListingRequest, SigningError> {
        let payload = CanonicalPayload::new()
            .push_str(&self.contract_id)
            .push_str(&self.cert_holder_id)
            .push_u32(self.cert_version)
            .finish();

        let signature = self.signer.sign(&payload).await?;

        Ok(ContractsListingRequest {
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            contract_id: self.contract_id,
            signature,
        })
    }
}
