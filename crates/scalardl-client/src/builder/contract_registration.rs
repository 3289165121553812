//! Contract registration, signed by the certificate holder.

use crate::domain::canonical::CanonicalPayload;
use crate::domain::errors::SigningError;
use crate::messages::ContractRegistrationRequest;
use crate::ports::signer::SignatureSigner;
use std::sync::Arc;

pub struct ContractRegistrationRequestBuilder {
    signer: Arc<dyn SignatureSigner>,
    contract_id: String,
    contract_binary_name: String,
    contract_byte_code: Vec<u8>,
    contract_properties: String,
    cert_holder_id: String,
    cert_version: u32,
}

impl ContractRegistrationRequestBuilder {
    pub fn new(signer: Arc<dyn SignatureSigner>) -> Self {
        Self {
            signer,
            contract_id: String::new(),
            contract_binary_name: String::new(),
            contract_byte_code: Vec::new(),
            contract_properties: String::new(),
            cert_holder_id: String::new(),
            cert_version: 0,
        }
    }

    pub fn with_contract_id(mut self, id: impl Into<String>) -> Self {
        self.contract_id = id.into();
        self
    }

    pub fn with_contract_binary_name(mut self, name: impl Into<String>) -> Self {
        self.contract_binary_name = name.into();
        self
    }

    pub fn with_contract_byte_code(mut self, byte_code: Vec<u8>) -> Self {
        self.contract_byte_code = byte_code;
        self
    }

    /// JSON-serialized contract properties.
    pub fn with_contract_properties(mut self, properties: impl Into<String>) -> Self {
        self.contract_properties = properties.into();
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

    /// Signing payload order: `contract_id, contract_binary_name,
    /// contract_byte_code, contract_properties, cert_holder_id,
    /// cert_version`.
    pub async fn build(self) -> Result<ContractRegistrationRequest, SigningError> {
        let payload = CanonicalPayload::new()
            .push_str(&self.contract_id)
            .push_str(&self.contract_binary_name)
            .push_bytes(&self.contract_byte_code)
            .push_str(&self.contract_properties)
            .push_str(&self.cert_holder_id)
            .push_u32(self.cert_version)
            .finish();

        let signature = self.signer.sign(&payload).await?;

        Ok(ContractRegistrationRequest {
            contract_id: self.contract_id,
            contract_binary_name: self.contract_binary_name,
            contract_byte_code: self.contract_byte_code,
            contract_properties: self.contract_properties,
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            signature,
        })
    }
}
