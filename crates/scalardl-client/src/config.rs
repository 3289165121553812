//! # Client Configuration
//!
//! The validated configuration object the core consumes. Built once by the
//! caller, read-only for the lifetime of every call; property-file parsing
//! and channel construction happen upstream of this type.

use crate::domain::errors::ClientError;

/// Default port of the ledger's regular endpoint.
pub const DEFAULT_LEDGER_PORT: u16 = 50051;
/// Default port of the ledger's privileged endpoint.
pub const DEFAULT_LEDGER_PRIVILEGED_PORT: u16 = 50052;
/// Default port of the auditor's regular endpoint.
pub const DEFAULT_AUDITOR_PORT: u16 = 40051;
/// Default port of the auditor's privileged endpoint.
pub const DEFAULT_AUDITOR_PRIVILEGED_PORT: u16 = 40052;

/// Immutable client identity, key material reference, and endpoint/mode
/// flags. Constructed through [`ClientConfig::builder`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    cert_holder_id: String,
    cert_version: u32,
    cert_pem: String,
    private_key_pem: Option<String>,
    ledger_host: String,
    ledger_port: u16,
    ledger_privileged_port: u16,
    auditor_enabled: bool,
    auditor_host: String,
    auditor_port: u16,
    auditor_privileged_port: u16,
    auditor_linearizable_validation_contract_id: Option<String>,
    tls_enabled: bool,
    tls_ca_root_cert_pem: Option<String>,
    authorization_credential: Option<String>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    pub fn cert_holder_id(&self) -> &str {
        &self.cert_holder_id
    }

    pub fn cert_version(&self) -> u32 {
        self.cert_version
    }

    pub fn cert_pem(&self) -> &str {
        &self.cert_pem
    }

    pub fn private_key_pem(&self) -> Option<&str> {
        self.private_key_pem.as_deref()
    }

    pub fn ledger_host(&self) -> &str {
        &self.ledger_host
    }

    pub fn ledger_port(&self) -> u16 {
        self.ledger_port
    }

    pub fn ledger_privileged_port(&self) -> u16 {
        self.ledger_privileged_port
    }

    pub fn auditor_enabled(&self) -> bool {
        self.auditor_enabled
    }

    pub fn auditor_host(&self) -> &str {
        &self.auditor_host
    }

    pub fn auditor_port(&self) -> u16 {
        self.auditor_port
    }

    pub fn auditor_privileged_port(&self) -> u16 {
        self.auditor_privileged_port
    }

    /// The contract the auditor designates for linearizable validation.
    /// Present whenever auditor mode is enabled.
    pub fn auditor_linearizable_validation_contract_id(&self) -> Option<&str> {
        self.auditor_linearizable_validation_contract_id.as_deref()
    }

    pub fn tls_enabled(&self) -> bool {
        self.tls_enabled
    }

    pub fn tls_ca_root_cert_pem(&self) -> Option<&str> {
        self.tls_ca_root_cert_pem.as_deref()
    }

    pub fn authorization_credential(&self) -> Option<&str> {
        self.authorization_credential.as_deref()
    }
}

/// Builder for [`ClientConfig`]. Defaults mirror the servers' stock
/// deployment: localhost endpoints, certificate version 1, auditor and TLS
/// disabled.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    cert_holder_id: String,
    cert_version: u32,
    cert_pem: String,
    private_key_pem: Option<String>,
    ledger_host: String,
    ledger_port: u16,
    ledger_privileged_port: u16,
    auditor_enabled: bool,
    auditor_host: String,
    auditor_port: u16,
    auditor_privileged_port: u16,
    auditor_linearizable_validation_contract_id: Option<String>,
    tls_enabled: bool,
    tls_ca_root_cert_pem: Option<String>,
    authorization_credential: Option<String>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            cert_holder_id: String::new(),
            cert_version: 1,
            cert_pem: String::new(),
            private_key_pem: None,
            ledger_host: "localhost".to_string(),
            ledger_port: DEFAULT_LEDGER_PORT,
            ledger_privileged_port: DEFAULT_LEDGER_PRIVILEGED_PORT,
            auditor_enabled: false,
            auditor_host: "localhost".to_string(),
            auditor_port: DEFAULT_AUDITOR_PORT,
            auditor_privileged_port: DEFAULT_AUDITOR_PRIVILEGED_PORT,
            auditor_linearizable_validation_contract_id: None,
            tls_enabled: false,
            tls_ca_root_cert_pem: None,
            authorization_credential: None,
        }
    }
}

impl ClientConfigBuilder {
    pub fn cert_holder_id(mut self, id: impl Into<String>) -> Self {
        self.cert_holder_id = id.into();
        self
    }

    pub fn cert_version(mut self, version: u32) -> Self {
        self.cert_version = version;
        self
    }

    pub fn cert_pem(mut self, pem: impl Into<String>) -> Self {
        self.cert_pem = pem.into();
        self
    }

    pub fn private_key_pem(mut self, pem: impl Into<String>) -> Self {
        self.private_key_pem = Some(pem.into());
        self
    }

    pub fn ledger_host(mut self, host: impl Into<String>) -> Self {
        self.ledger_host = host.into();
        self
    }

    pub fn ledger_port(mut self, port: u16) -> Self {
        self.ledger_port = port;
        self
    }

    pub fn ledger_privileged_port(mut self, port: u16) -> Self {
        self.ledger_privileged_port = port;
        self
    }

    pub fn auditor_enabled(mut self, enabled: bool) -> Self {
        self.auditor_enabled = enabled;
        self
    }

    pub fn auditor_host(mut self, host: impl Into<String>) -> Self {
        self.auditor_host = host.into();
        self
    }

    pub fn auditor_port(mut self, port: u16) -> Self {
        self.auditor_port = port;
        self
    }

    pub fn auditor_privileged_port(mut self, port: u16) -> Self {
        self.auditor_privileged_port = port;
        self
    }

    pub fn auditor_linearizable_validation_contract_id(
        mut self,
        contract_id: impl Into<String>,
    ) -> Self {
        self.auditor_linearizable_validation_contract_id = Some(contract_id.into());
        self
    }

    pub fn tls_enabled(mut self, enabled: bool) -> Self {
        self.tls_enabled = enabled;
        self
    }

    pub fn tls_ca_root_cert_pem(mut self, pem: impl Into<String>) -> Self {
        self.tls_ca_root_cert_pem = Some(pem.into());
        self
    }

    pub fn authorization_credential(mut self, credential: impl Into<String>) -> Self {
        self.authorization_credential = Some(credential.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig, ClientError> {
        if self.cert_holder_id.is_empty() {
            return Err(ClientError::InvalidArgument(
                "cert_holder_id must be set".into(),
            ));
        }

        if self.auditor_enabled
            && self
                .auditor_linearizable_validation_contract_id
                .as_deref()
                .unwrap_or_default()
                .is_empty()
        {
            return Err(ClientError::InvalidArgument(
                "the linearizable validation contract id must be set when the auditor is enabled"
                    .into(),
            ));
        }

        Ok(ClientConfig {
            cert_holder_id: self.cert_holder_id,
            cert_version: self.cert_version,
            cert_pem: self.cert_pem,
            private_key_pem: self.private_key_pem,
            ledger_host: self.ledger_host,
            ledger_port: self.ledger_port,
            ledger_privileged_port: self.ledger_privileged_port,
            auditor_enabled: self.auditor_enabled,
            auditor_host: self.auditor_host,
            auditor_port: self.auditor_port,
            auditor_privileged_port: self.auditor_privileged_port,
            auditor_linearizable_validation_contract_id: self
                .auditor_linearizable_validation_contract_id,
            tls_enabled: self.tls_enabled,
            tls_ca_root_cert_pem: self.tls_ca_root_cert_pem,
            authorization_credential: self.authorization_credential,
        })
    }
}
