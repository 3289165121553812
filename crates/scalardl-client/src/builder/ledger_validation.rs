//! Ledger validation, signed by the certificate holder. Ages are inclusive
//! and encoded big-endian in the payload.

use crate::domain::canonical::CanonicalPayload;
use crate::domain::errors::SigningError;
use crate::messages::LedgerValidationRequest;
use crate::ports::signer::SignatureSigner;
use std::sync::Arc;

pub struct LedgerValidationRequestBuilder {
    signer: Arc<dyn SignatureSigner>,
    asset_id: String,
    start_age: u32,
    end_age: u32,
    cert_holder_id: String,
    cert_version: u32,
}

impl LedgerValidationRequestBuilder {
    pub fn new(signer: Arc<dyn SignatureSigner>) -> Self {
        Self {
            signer,
            asset_id: String::new(),
            start_age: 0,
            end_age: 0,
            cert_holder_id: String::new(),
            cert_version: 0,
        }
    }

    pub fn with_asset_id(mut self, id: impl Into<String>) -> Self {
        self.asset_id = id.into();
        self
    }

    pub fn with_start_age(mut self, age: u32) -> Self {
        self.start_age = age;
        self
    }

    pub fn with_end_age(mut self, age: u32) -> Self {
        self.end_age = age;
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

    /// Signing payload order: `asset_id, start_age, end_age, cert_holder_id,
    /// cert_version`.
    pub async fn build(self) -> Result<LedgerValidationRequest, SigningError> {
        let payload = CanonicalPayload::new()
            .push_str(&self.asset_id)
            .push_u32(self.start_age)
            .push_u32(self.end_age)
            .push_str(&self.cert_holder_id)
            .push_u32(self.cert_version)
            .finish();

        let signature = self.signer.sign(&payload).await?;

        Ok(LedgerValidationRequest {
            asset_id: self.asset_id,
            start_age: self.start_age,
            end_age: self.end_age,
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            signature,
        })
    }
}
