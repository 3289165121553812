//! # Transport Seams
//!
//! One trait per remote stub: the Ledger and Auditor services each expose a
//! regular and a privileged endpoint. Channel construction, TLS, and the
//! binary wire encoding are collaborator concerns behind these traits; the
//! core only sees message structs and [`TransportFailure`].

use crate::messages::{
    CertificateRegistrationRequest, ContractExecutionRequest, ContractExecutionResponse,
    ContractRegistrationRequest, ContractsListingRequest, ContractsListingResponse,
    ErrorStatus, ExecutionOrderingResponse, ExecutionValidationRequest,
    FunctionRegistrationRequest, LedgerValidationRequest, LedgerValidationResponse,
};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Metadata key under which servers attach a binary status to a failure.
pub const BINARY_STATUS_KEY: &str = "rpc.status-bin";

/// A failed transport invocation.
///
/// Carries the transport's own message plus whatever side-channel metadata
/// came back with the failure; a structured status, when present, sits under
/// [`BINARY_STATUS_KEY`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    pub metadata: HashMap<String, Vec<u8>>,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: HashMap::new(),
        }
    }

    /// A failure carrying an encoded status in its side channel.
    pub fn with_binary_status(message: impl Into<String>, status: Vec<u8>) -> Self {
        let mut failure = Self::new(message);
        failure.metadata.insert(BINARY_STATUS_KEY.to_string(), status);
        failure
    }

    /// The encoded status attached by the server, if any.
    pub fn binary_status(&self) -> Option<&[u8]> {
        self.metadata.get(BINARY_STATUS_KEY).map(Vec::as_slice)
    }
}

/// Decodes the opaque side-channel status bytes into a structured status.
///
/// The encoding is transport-specific; runtimes plug in their own decoder.
pub trait ErrorStatusDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Option<ErrorStatus>;
}

/// The Ledger service's regular endpoint.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn register_contract(
        &self,
        request: &ContractRegistrationRequest,
    ) -> Result<(), TransportFailure>;

    async fn list_contracts(
        &self,
        request: &ContractsListingRequest,
    ) -> Result<ContractsListingResponse, TransportFailure>;

    async fn validate_ledger(
        &self,
        request: &LedgerValidationRequest,
    ) -> Result<LedgerValidationResponse, TransportFailure>;

    async fn execute_contract(
        &self,
        request: &ContractExecutionRequest,
    ) -> Result<ContractExecutionResponse, TransportFailure>;
}

/// The Ledger service's privileged endpoint.
#[async_trait]
pub trait LedgerPrivilegedClient: Send + Sync {
    async fn register_cert(
        &self,
        request: &CertificateRegistrationRequest,
    ) -> Result<(), TransportFailure>;

    async fn register_function(
        &self,
        request: &FunctionRegistrationRequest,
    ) -> Result<(), TransportFailure>;
}

/// The Auditor service's regular endpoint.
#[async_trait]
pub trait AuditorClient: Send + Sync {
    async fn register_contract(
        &self,
        request: &ContractRegistrationRequest,
    ) -> Result<(), TransportFailure>;

    /// Ordering phase of the two-party execution protocol: the auditor
    /// returns its ordering signature for the request.
    async fn order_execution(
        &self,
        request: &ContractExecutionRequest,
    ) -> Result<ExecutionOrderingResponse, TransportFailure>;

    /// Validation phase: the auditor independently executes and returns its
    /// own response for reconciliation.
    async fn validate_execution(
        &self,
        request: &ExecutionValidationRequest,
    ) -> Result<ContractExecutionResponse, TransportFailure>;
}

/// The Auditor service's privileged endpoint.
#[async_trait]
pub trait AuditorPrivilegedClient: Send + Sync {
    async fn register_cert(
        &self,
        request: &CertificateRegistrationRequest,
    ) -> Result<(), TransportFailure>;
}
