//! Certificate registration. Unsigned: the servers authenticate the
//! privileged channel itself, not the request.

use crate::messages::CertificateRegistrationRequest;

#[derive(Debug, Default)]
pub struct CertificateRegistrationRequestBuilder {
    cert_holder_id: String,
    cert_version: u32,
    cert_pem: String,
}

impl CertificateRegistrationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cert_holder_id(mut self, id: impl Into<String>) -> Self {
        self.cert_holder_id = id.into();
        self
    }

    pub fn with_cert_version(mut self, version: u32) -> Self {
        self.cert_version = version;
        self
    }

    pub fn with_cert_pem(mut self, pem: impl Into<String>) -> Self {
        self.cert_pem = pem.into();
        self
    }

    pub fn build(self) -> CertificateRegistrationRequest {
        CertificateRegistrationRequest {
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            cert_pem: self.cert_pem,
        }
    }
}
