//! # Client Service
//!
//! The orchestrator behind every public operation: it validates arguments,
//! builds and signs requests, drives the auditor's ordering/validation
//! handshake around the ledger execution, reconciles the two parties'
//! results, and normalizes every failure into a [`ClientError`].
//!
//! The service is stateless across calls apart from a lazily-memoized signer
//! (one per configured identity). Concurrency is caller-driven: any number of
//! operations may be in flight at once, each an independent sequential flow.

use crate::builder::{
    CertificateRegistrationRequestBuilder, ContractExecutionRequestBuilder,
    ContractRegistrationRequestBuilder, ContractsListingRequestBuilder,
    ExecutionValidationRequestBuilder, FunctionRegistrationRequestBuilder,
    LedgerValidationRequestBuilder,
};
use crate::config::ClientConfig;
use crate::domain::argument::{format_argument, ArgumentKind};
use crate::domain::errors::ClientError;
use crate::domain::proof::AssetProof;
use crate::domain::result::{ContractExecutionResult, LedgerValidationResult};
use crate::domain::status::StatusCode;
use crate::messages::{ContractExecutionRequest, ContractExecutionResponse};
use crate::ports::signer::{SignatureSigner, SignerFactory};
use crate::ports::transport::{
    AuditorClient, AuditorPrivilegedClient, ErrorStatusDecoder, LedgerClient,
    LedgerPrivilegedClient, TransportFailure,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Minimum asset age, inclusive.
pub const MIN_AGE: u32 = 0;
/// Maximum asset age, inclusive. Matches the ledger's own 32-bit signed
/// integer ceiling.
pub const MAX_AGE: u32 = 0x7fff_ffff;

/// The transport stubs the service drives. The auditor stubs may be absent
/// when auditor mode is off.
#[derive(Clone)]
pub struct Transports {
    pub ledger: Arc<dyn LedgerClient>,
    pub ledger_privileged: Arc<dyn LedgerPrivilegedClient>,
    pub auditor: Option<Arc<dyn AuditorClient>>,
    pub auditor_privileged: Option<Arc<dyn AuditorPrivilegedClient>>,
}

/// Optional parameters of [`ClientService::execute_with`]. Unset fields take
/// the documented defaults: no function, a function argument matching the
/// contract argument's shape, and a fresh random nonce.
#[derive(Debug, Clone, Default)]
pub struct ExecuteOptions {
    pub function_id: Option<String>,
    pub function_argument: Option<Value>,
    pub nonce: Option<String>,
}

/// Client entry point for registering certificates, contracts and functions,
/// listing contracts, validating the ledger, and executing contracts.
pub struct ClientService {
    config: ClientConfig,
    ledger: Arc<dyn LedgerClient>,
    ledger_privileged: Arc<dyn LedgerPrivilegedClient>,
    auditor: Option<Arc<dyn AuditorClient>>,
    auditor_privileged: Option<Arc<dyn AuditorPrivilegedClient>>,
    signer_factory: Arc<dyn SignerFactory>,
    status_decoder: Arc<dyn ErrorStatusDecoder>,
    signer: Mutex<Option<Arc<dyn SignatureSigner>>>,
}

impl std::fmt::Debug for ClientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ClientService {
    /// Wire a service from its collaborators. Fails if auditor mode is
    /// enabled but an auditor stub is missing.
    pub fn new(
        config: ClientConfig,
        transports: Transports,
        signer_factory: Arc<dyn SignerFactory>,
        status_decoder: Arc<dyn ErrorStatusDecoder>,
    ) -> Result<Self, ClientError> {
        if config.auditor_enabled()
            && (transports.auditor.is_none() || transports.auditor_privileged.is_none())
        {
            return Err(ClientError::InvalidArgument(
                "the auditor is enabled but no auditor transport is configured".into(),
            ));
        }

        Ok(Self {
            config,
            ledger: transports.ledger,
            ledger_privileged: transports.ledger_privileged,
            auditor: transports.auditor,
            auditor_privileged: transports.auditor_privileged,
            signer_factory,
            status_decoder,
            signer: Mutex::new(None),
        })
    }

    /// Register the configured certificate holder's certificate.
    ///
    /// In auditor mode the certificate goes to the auditor's privileged
    /// endpoint first, then always to the ledger's.
    pub async fn register_certificate(&self) -> Result<(), ClientError> {
        debug!(
            cert_holder_id = self.config.cert_holder_id(),
            "registering certificate"
        );

        let request = CertificateRegistrationRequestBuilder::new()
            .with_cert_holder_id(self.config.cert_holder_id())
            .with_cert_version(self.config.cert_version())
            .with_cert_pem(self.config.cert_pem())
            .build();

        if self.config.auditor_enabled() {
            self.auditor_privileged()?
                .register_cert(&request)
                .await
                .map_err(|e| self.translate(e))?;
        }

        self.ledger_privileged
            .register_cert(&request)
            .await
            .map_err(|e| self.translate(e))
    }

    /// Register a function binary. Functions are not auditor-coordinated:
    /// the request goes to the ledger's privileged endpoint only.
    pub async fn register_function(
        &self,
        id: &str,
        name: &str,
        byte_code: &[u8],
    ) -> Result<(), ClientError> {
        debug!(function_id = id, "registering function");

        let request = FunctionRegistrationRequestBuilder::new()
            .with_function_id(id)
            .with_function_binary_name(name)
            .with_function_byte_code(byte_code.to_vec())
            .build();

        self.ledger_privileged
            .register_function(&request)
            .await
            .map_err(|e| self.translate(e))
    }

    /// Register a contract binary under the configured identity.
    ///
    /// `properties`, when present, must be a JSON object; it is serialized
    /// into the signed request. In auditor mode the request goes to the
    /// auditor, otherwise to the ledger.
    pub async fn register_contract(
        &self,
        id: &str,
        name: &str,
        byte_code: &[u8],
        properties: Option<Value>,
    ) -> Result<(), ClientError> {
        let contract_properties = match properties {
            None => "{}".to_string(),
            Some(value @ Value::Object(_)) => serde_json::to_string(&value)
                .map_err(|e| ClientError::InvalidArgument(e.to_string()))?,
            Some(_) => {
                return Err(ClientError::InvalidArgument(
                    "contract properties must be a JSON object".into(),
                ))
            }
        };

        debug!(contract_id = id, "registering contract");

        let request = ContractRegistrationRequestBuilder::new(self.signer()?)
            .with_contract_id(id)
            .with_contract_binary_name(name)
            .with_contract_byte_code(byte_code.to_vec())
            .with_contract_properties(contract_properties)
            .with_cert_holder_id(self.config.cert_holder_id())
            .with_cert_version(self.config.cert_version())
            .build()
            .await?;

        if self.config.auditor_enabled() {
            return self
                .auditor()?
                .register_contract(&request)
                .await
                .map_err(|e| self.translate(e));
        }

        self.ledger
            .register_contract(&request)
            .await
            .map_err(|e| self.translate(e))
    }

    /// List the holder's registered contracts; pass a contract id to check a
    /// single registration. The returned mapping goes from contract id to
    /// its metadata, whose content the client treats as opaque.
    pub async fn list_contracts(
        &self,
        contract_id: &str,
    ) -> Result<serde_json::Map<String, Value>, ClientError> {
        let request = ContractsListingRequestBuilder::new(self.signer()?)
            .with_cert_holder_id(self.config.cert_holder_id())
            .with_cert_version(self.config.cert_version())
            .with_contract_id(contract_id)
            .build()
            .await?;

        let response = self
            .ledger
            .list_contracts(&request)
            .await
            .map_err(|e| self.translate(e))?;

        match serde_json::from_str(&response.json) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(ClientError::status(
                StatusCode::UnknownTransactionStatus,
                "malformed contracts listing response",
            )),
        }
    }

    /// Validate one asset's whole history.
    pub async fn validate_ledger(
        &self,
        asset_id: &str,
    ) -> Result<LedgerValidationResult, ClientError> {
        self.validate_ledger_range(asset_id, MIN_AGE, MAX_AGE).await
    }

    /// Validate one asset over an inclusive age range.
    ///
    /// Without an auditor this is a single validation call to the ledger.
    /// With an auditor it is routed through the full execution protocol
    /// against the designated linearizable-validation contract: only an
    /// execution both parties order and agree on gives a linearizable
    /// guarantee, which a plain read-only validation call would not.
    pub async fn validate_ledger_range(
        &self,
        asset_id: &str,
        start_age: u32,
        end_age: u32,
    ) -> Result<LedgerValidationResult, ClientError> {
        if end_age < start_age || end_age > MAX_AGE {
            return Err(ClientError::InvalidArgument(
                "invalid ages are specified".into(),
            ));
        }

        debug!(asset_id, start_age, end_age, "validating ledger");

        if self.config.auditor_enabled() {
            return self
                .validate_ledger_with_execution(asset_id, start_age, end_age)
                .await;
        }

        let request = LedgerValidationRequestBuilder::new(self.signer()?)
            .with_asset_id(asset_id)
            .with_start_age(start_age)
            .with_end_age(end_age)
            .with_cert_holder_id(self.config.cert_holder_id())
            .with_cert_version(self.config.cert_version())
            .build()
            .await?;

        let response = self
            .ledger
            .validate_ledger(&request)
            .await
            .map_err(|e| self.translate(e))?;

        Ok(LedgerValidationResult::from_response(&response))
    }

    async fn validate_ledger_with_execution(
        &self,
        asset_id: &str,
        start_age: u32,
        end_age: u32,
    ) -> Result<LedgerValidationResult, ClientError> {
        let contract_id = self
            .config
            .auditor_linearizable_validation_contract_id()
            .ok_or_else(|| {
                ClientError::InvalidArgument(
                    "no linearizable validation contract id is configured".into(),
                )
            })?
            .to_string();

        let argument = json!({
            "asset_id": asset_id,
            "start_age": start_age,
            "end_age": end_age,
        });

        let result = self.execute(&contract_id, argument).await?;

        Ok(LedgerValidationResult::new(
            StatusCode::Ok,
            result.ledger_proofs().first().cloned(),
            result.auditor_proofs().first().cloned(),
        ))
    }

    /// Execute a registered contract with the default options.
    pub async fn execute(
        &self,
        contract_id: &str,
        contract_argument: Value,
    ) -> Result<ContractExecutionResult, ClientError> {
        self.execute_with(contract_id, contract_argument, ExecuteOptions::default())
            .await
    }

    /// Execute a registered contract, optionally together with a function.
    pub async fn execute_with(
        &self,
        contract_id: &str,
        contract_argument: Value,
        options: ExecuteOptions,
    ) -> Result<ContractExecutionResult, ClientError> {
        let contract_kind = ArgumentKind::of(&contract_argument)?;

        let function_argument = options.function_argument.unwrap_or_else(|| match contract_kind {
            ArgumentKind::Object => Value::Object(serde_json::Map::new()),
            ArgumentKind::Str => Value::String(String::new()),
        });
        if ArgumentKind::of(&function_argument)? != contract_kind {
            return Err(ClientError::InvalidArgument(
                "contract argument and function argument must be the same type".into(),
            ));
        }

        let function_id = options.function_id.unwrap_or_default();
        let nonce = options
            .nonce
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let function_ids = if function_id.is_empty() {
            Vec::new()
        } else {
            vec![function_id]
        };

        let function_argument_payload = match &function_argument {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other)
                .map_err(|e| ClientError::InvalidArgument(e.to_string()))?,
        };

        debug!(contract_id, %nonce, "executing contract");

        let request = ContractExecutionRequestBuilder::new(self.signer()?)
            .with_contract_id(contract_id)
            .with_contract_argument(format_argument(&nonce, &function_ids, &contract_argument)?)
            .with_function_argument(function_argument_payload)
            .with_cert_holder_id(self.config.cert_holder_id())
            .with_cert_version(self.config.cert_version())
            .with_use_function_ids(!function_ids.is_empty())
            .with_function_ids(function_ids)
            .with_nonce(nonce)
            .build()
            .await?;

        self.execute_request(request).await
    }

    /// Execute a registered contract.
    #[deprecated(note = "use `execute` or `execute_with` instead")]
    pub async fn execute_contract(
        &self,
        contract_id: &str,
        contract_argument: Value,
        function_argument: Option<Value>,
    ) -> Result<ContractExecutionResult, ClientError> {
        self.execute_with(
            contract_id,
            contract_argument,
            ExecuteOptions {
                function_argument,
                ..ExecuteOptions::default()
            },
        )
        .await
    }

    /// The three-phase protocol body. Each phase's request depends on the
    /// previous phase's response, so the phases are strictly sequential.
    async fn execute_request(
        &self,
        request: ContractExecutionRequest,
    ) -> Result<ContractExecutionResult, ClientError> {
        // Ordering phase: the auditor's signature must be on the request
        // before the ledger sees it.
        let request = self.order_execution(request).await?;

        // Execution phase.
        let ledger_response = self
            .ledger
            .execute_contract(&request)
            .await
            .map_err(|e| self.translate(e))?;

        if !self.config.auditor_enabled() {
            return Ok(ContractExecutionResult::from_response(&ledger_response));
        }

        // Validation phase: the auditor re-executes against the ledger's
        // proofs and returns its own independently-computed response.
        let auditor_response = self.validate_execution(&request, &ledger_response).await?;

        if !responses_consistent(&ledger_response, &auditor_response) {
            return Err(ClientError::status(
                StatusCode::InconsistentStates,
                "the results from the Ledger and the Auditor don't match",
            ));
        }

        Ok(ContractExecutionResult::new(
            ledger_response.contract_result,
            ledger_response.function_result,
            ledger_response
                .proofs
                .iter()
                .map(AssetProof::from_message)
                .collect(),
            auditor_response
                .proofs
                .iter()
                .map(AssetProof::from_message)
                .collect(),
        ))
    }

    async fn order_execution(
        &self,
        request: ContractExecutionRequest,
    ) -> Result<ContractExecutionRequest, ClientError> {
        if !self.config.auditor_enabled() {
            return Ok(request);
        }

        let response = self
            .auditor()?
            .order_execution(&request)
            .await
            .map_err(|e| self.translate(e))?;

        let mut request = request;
        request.auditor_signature = Some(response.signature);
        Ok(request)
    }

    async fn validate_execution(
        &self,
        request: &ContractExecutionRequest,
        ledger_response: &ContractExecutionResponse,
    ) -> Result<ContractExecutionResponse, ClientError> {
        let validation = ExecutionValidationRequestBuilder::new()
            .with_contract_execution_request(request.clone())
            .with_proofs(ledger_response.proofs.clone())
            .build();

        self.auditor()?
            .validate_execution(&validation)
            .await
            .map_err(|e| self.translate(e))
    }

    /// The memoized signer for the configured identity, created on first use.
    fn signer(&self) -> Result<Arc<dyn SignatureSigner>, ClientError> {
        let mut cached = self.signer.lock();
        if let Some(signer) = cached.as_ref() {
            return Ok(signer.clone());
        }
        let created = self.signer_factory.create(&self.config)?;
        *cached = Some(created.clone());
        Ok(created)
    }

    fn auditor(&self) -> Result<&Arc<dyn AuditorClient>, ClientError> {
        self.auditor.as_ref().ok_or_else(|| {
            ClientError::InvalidArgument(
                "the auditor is enabled but no auditor transport is configured".into(),
            )
        })
    }

    fn auditor_privileged(&self) -> Result<&Arc<dyn AuditorPrivilegedClient>, ClientError> {
        self.auditor_privileged.as_ref().ok_or_else(|| {
            ClientError::InvalidArgument(
                "the auditor is enabled but no auditor transport is configured".into(),
            )
        })
    }

    /// Normalize a transport failure: decode the server's binary status when
    /// one is attached, otherwise fall back to an unknown transaction status.
    fn translate(&self, failure: TransportFailure) -> ClientError {
        match failure
            .binary_status()
            .and_then(|bytes| self.status_decoder.decode(bytes))
        {
            Some(status) => ClientError::Status {
                code: StatusCode::from_u32(status.code)
                    .unwrap_or(StatusCode::UnknownTransactionStatus),
                message: status.message,
            },
            None => ClientError::status(StatusCode::UnknownTransactionStatus, failure.message),
        }
    }
}

/// Reconciliation of the two parties' responses: equal contract results,
/// equal proof counts, and for every auditor proof a ledger proof with the
/// same asset id, age and hash. Any divergence is an integrity fault.
#[allow(deprecated)]
fn responses_consistent(
    ledger: &ContractExecutionResponse,
    auditor: &ContractExecutionResponse,
) -> bool {
    if ledger.contract_result != auditor.contract_result
        || ledger.proofs.len() != auditor.proofs.len()
    {
        return false;
    }

    let ledger_proofs: HashMap<String, AssetProof> = ledger
        .proofs
        .iter()
        .map(|m| (m.asset_id.clone(), AssetProof::from_message(m)))
        .collect();

    auditor.proofs.iter().all(|message| {
        let auditor_proof = AssetProof::from_message(message);
        match ledger_proofs.get(auditor_proof.id()) {
            Some(ledger_proof) => {
                ledger_proof.age() == auditor_proof.age()
                    && ledger_proof.hash_equals(auditor_proof.hash())
            }
            None => false,
        }
    })
}
