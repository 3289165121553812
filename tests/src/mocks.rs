//! Shared test doubles.
//!
//! `Scripted*` stubs return pre-loaded responses in FIFO order (defaults when
//! the script is empty) and record every invocation into a [`CallLog`] shared
//! across parties, so tests can assert the exact cross-party call sequence.
//!
//! [`InMemoryLedger`] is a stateful fake with real key material: it verifies
//! request signatures against the client's public key, appends hash-chained
//! asset records, and signs the resulting proofs with its own P-256 key.

use async_trait::async_trait;
use p256::ecdsa::signature::Signer as _;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use parking_lot::Mutex;
use scalardl_client::domain::canonical::CanonicalPayload;
use scalardl_client::messages::{
    AssetProofMessage, CertificateRegistrationRequest, ContractExecutionRequest,
    ContractExecutionResponse, ContractRegistrationRequest, ContractsListingRequest,
    ContractsListingResponse, ErrorStatus, ExecutionOrderingResponse, ExecutionValidationRequest,
    FunctionRegistrationRequest, LedgerValidationRequest, LedgerValidationResponse,
};
use scalardl_client::ports::signer::{SignatureSigner, SignatureValidator, SignerFactory};
use scalardl_client::ports::transport::{
    AuditorClient, AuditorPrivilegedClient, LedgerClient, LedgerPrivilegedClient, TransportFailure,
};
use scalardl_client::{
    ClientConfig, ClientService, EcdsaValidator, JsonStatusDecoder, SigningError, Transports,
};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// CALL LOG
// =============================================================================

/// Chronological record of every stub invocation, shared across all stubs of
/// one test so cross-party ordering is observable.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &'static str) {
        self.0.lock().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }
}

// =============================================================================
// SCRIPTED STUBS
// =============================================================================

type Script<T> = Mutex<Vec<Result<T, TransportFailure>>>;

fn pop<T>(script: &Script<T>) -> Option<Result<T, TransportFailure>> {
    let mut script = script.lock();
    if script.is_empty() {
        None
    } else {
        Some(script.remove(0))
    }
}

pub struct ScriptedLedger {
    log: CallLog,
    execution_script: Script<ContractExecutionResponse>,
    validation_script: Script<LedgerValidationResponse>,
    listing_script: Script<ContractsListingResponse>,
    pub last_execution_request: Mutex<Option<ContractExecutionRequest>>,
    pub last_validation_request: Mutex<Option<LedgerValidationRequest>>,
}

impl ScriptedLedger {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            log,
            execution_script: Mutex::new(Vec::new()),
            validation_script: Mutex::new(Vec::new()),
            listing_script: Mutex::new(Vec::new()),
            last_execution_request: Mutex::new(None),
            last_validation_request: Mutex::new(None),
        })
    }

    pub fn script_execution(&self, response: Result<ContractExecutionResponse, TransportFailure>) {
        self.execution_script.lock().push(response);
    }

    pub fn script_validation(&self, response: Result<LedgerValidationResponse, TransportFailure>) {
        self.validation_script.lock().push(response);
    }

    pub fn script_listing(&self, response: Result<ContractsListingResponse, TransportFailure>) {
        self.listing_script.lock().push(response);
    }
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    async fn register_contract(
        &self,
        _request: &ContractRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        self.log.record("ledger.register_contract");
        Ok(())
    }

    async fn list_contracts(
        &self,
        _request: &ContractsListingRequest,
    ) -> Result<ContractsListingResponse, TransportFailure> {
        self.log.record("ledger.list_contracts");
        pop(&self.listing_script).unwrap_or_else(|| {
            Ok(ContractsListingResponse {
                json: "{}".to_string(),
            })
        })
    }

    async fn validate_ledger(
        &self,
        request: &LedgerValidationRequest,
    ) -> Result<LedgerValidationResponse, TransportFailure> {
        self.log.record("ledger.validate_ledger");
        *self.last_validation_request.lock() = Some(request.clone());
        pop(&self.validation_script).unwrap_or_else(|| {
            Ok(LedgerValidationResponse {
                status_code: 200,
                proof: None,
            })
        })
    }

    async fn execute_contract(
        &self,
        request: &ContractExecutionRequest,
    ) -> Result<ContractExecutionResponse, TransportFailure> {
        self.log.record("ledger.execute_contract");
        *self.last_execution_request.lock() = Some(request.clone());
        pop(&self.execution_script).unwrap_or_else(|| Ok(ContractExecutionResponse::default()))
    }
}

pub struct ScriptedLedgerPrivileged {
    log: CallLog,
}

impl ScriptedLedgerPrivileged {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self { log })
    }
}

#[async_trait]
impl LedgerPrivilegedClient for ScriptedLedgerPrivileged {
    async fn register_cert(
        &self,
        _request: &CertificateRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        self.log.record("ledger_privileged.register_cert");
        Ok(())
    }

    async fn register_function(
        &self,
        _request: &FunctionRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        self.log.record("ledger_privileged.register_function");
        Ok(())
    }
}

pub struct ScriptedAuditor {
    log: CallLog,
    pub ordering_signature: Vec<u8>,
    validation_script: Script<ContractExecutionResponse>,
    pub last_ordered_request: Mutex<Option<ContractExecutionRequest>>,
    pub last_validation_request: Mutex<Option<ExecutionValidationRequest>>,
}

impl ScriptedAuditor {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            log,
            ordering_signature: b"ordered".to_vec(),
            validation_script: Mutex::new(Vec::new()),
            last_ordered_request: Mutex::new(None),
            last_validation_request: Mutex::new(None),
        })
    }

    pub fn script_validation(&self, response: Result<ContractExecutionResponse, TransportFailure>) {
        self.validation_script.lock().push(response);
    }
}

#[async_trait]
impl AuditorClient for ScriptedAuditor {
    async fn register_contract(
        &self,
        _request: &ContractRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        self.log.record("auditor.register_contract");
        Ok(())
    }

    async fn order_execution(
        &self,
        request: &ContractExecutionRequest,
    ) -> Result<ExecutionOrderingResponse, TransportFailure> {
        self.log.record("auditor.order_execution");
        *self.last_ordered_request.lock() = Some(request.clone());
        Ok(ExecutionOrderingResponse {
            signature: self.ordering_signature.clone(),
        })
    }

    async fn validate_execution(
        &self,
        request: &ExecutionValidationRequest,
    ) -> Result<ContractExecutionResponse, TransportFailure> {
        self.log.record("auditor.validate_execution");
        *self.last_validation_request.lock() = Some(request.clone());
        pop(&self.validation_script).unwrap_or_else(|| Ok(ContractExecutionResponse::default()))
    }
}

pub struct ScriptedAuditorPrivileged {
    log: CallLog,
}

impl ScriptedAuditorPrivileged {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self { log })
    }
}

#[async_trait]
impl AuditorPrivilegedClient for ScriptedAuditorPrivileged {
    async fn register_cert(
        &self,
        _request: &CertificateRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        self.log.record("auditor_privileged.register_cert");
        Ok(())
    }
}

// =============================================================================
// STATIC SIGNER
// =============================================================================

/// Signer returning a fixed signature, for flows where the bytes themselves
/// do not matter.
pub struct StaticSigner;

#[async_trait]
impl SignatureSigner for StaticSigner {
    async fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>, SigningError> {
        Ok(b"client-signature".to_vec())
    }
}

pub struct StaticSignerFactory;

impl SignerFactory for StaticSignerFactory {
    fn create(&self, _config: &ClientConfig) -> Result<Arc<dyn SignatureSigner>, SigningError> {
        Ok(Arc::new(StaticSigner))
    }
}

// =============================================================================
// SCRIPTED WORLD
// =============================================================================

/// A [`ClientService`] wired onto scripted stubs for all four endpoints.
/// The auditor stubs are always wired, so a test of auditor-off mode proves
/// the service leaves them untouched by behavior, not by absence.
pub struct ScriptedWorld {
    pub service: ClientService,
    pub ledger: Arc<ScriptedLedger>,
    pub ledger_privileged: Arc<ScriptedLedgerPrivileged>,
    pub auditor: Arc<ScriptedAuditor>,
    pub auditor_privileged: Arc<ScriptedAuditorPrivileged>,
    pub log: CallLog,
}

impl ScriptedWorld {
    pub fn new(auditor_enabled: bool) -> Self {
        let log = CallLog::new();
        let ledger = ScriptedLedger::new(log.clone());
        let ledger_privileged = ScriptedLedgerPrivileged::new(log.clone());
        let auditor = ScriptedAuditor::new(log.clone());
        let auditor_privileged = ScriptedAuditorPrivileged::new(log.clone());

        let mut config = ClientConfig::builder().cert_holder_id("alice");
        if auditor_enabled {
            config = config
                .auditor_enabled(true)
                .auditor_linearizable_validation_contract_id("validate-ledger");
        }

        let service = ClientService::new(
            config.build().unwrap(),
            Transports {
                ledger: ledger.clone(),
                ledger_privileged: ledger_privileged.clone(),
                auditor: Some(auditor.clone()),
                auditor_privileged: Some(auditor_privileged.clone()),
            },
            Arc::new(StaticSignerFactory),
            Arc::new(JsonStatusDecoder),
        )
        .unwrap();

        Self {
            service,
            ledger,
            ledger_privileged,
            auditor,
            auditor_privileged,
            log,
        }
    }
}

// =============================================================================
// IN-MEMORY LEDGER
// =============================================================================

/// Split a versioned argument string into its nonce and payload.
pub fn split_argument(argument: &str) -> Option<(&str, &str)> {
    let rest = argument.strip_prefix("V2\u{1}")?;
    let (nonce, rest) = rest.split_once('\u{3}')?;
    let (_function_ids, payload) = rest.split_once('\u{3}')?;
    Some((nonce, payload))
}

/// Stateful ledger fake. Executions must carry an object argument with an
/// `asset_id` field; each one appends a record to that asset's hash chain and
/// returns a proof signed with the fake's own key.
pub struct InMemoryLedger {
    signing_key: SigningKey,
    client_key: EcdsaValidator,
    contracts: Mutex<HashMap<String, serde_json::Value>>,
    chains: Mutex<HashMap<String, Vec<AssetProofMessage>>>,
}

impl InMemoryLedger {
    pub fn new(client_key: VerifyingKey) -> Arc<Self> {
        Arc::new(Self {
            signing_key: SigningKey::random(&mut rand::rngs::OsRng),
            client_key: EcdsaValidator::from_verifying_key(client_key),
            contracts: Mutex::new(HashMap::new()),
            chains: Mutex::new(HashMap::new()),
        })
    }

    /// Validator for the key this fake signs proofs with.
    pub fn validator(&self) -> EcdsaValidator {
        EcdsaValidator::from_verifying_key(VerifyingKey::from(&self.signing_key))
    }

    fn rejected(code: u32, message: &str) -> TransportFailure {
        let status = ErrorStatus {
            code,
            message: message.to_string(),
        };
        TransportFailure::with_binary_status(message, serde_json::to_vec(&status).unwrap())
    }

    fn check_signature(&self, payload: &[u8], signature: &[u8]) -> Result<(), TransportFailure> {
        let valid = self.client_key.verify(payload, signature).unwrap_or(false);
        if valid {
            Ok(())
        } else {
            Err(Self::rejected(
                400,
                "the request signature can't be validated",
            ))
        }
    }

    fn sign_proof(&self, proof: &mut AssetProofMessage) {
        let payload = CanonicalPayload::new()
            .push_str(&proof.asset_id)
            .push_u32(proof.age)
            .push_str(&proof.nonce)
            .push_str(&proof.input)
            .push_bytes(&proof.hash)
            .push_bytes(&proof.prev_hash)
            .finish();
        let signature: Signature = self.signing_key.sign(&payload);
        proof.signature = signature.to_der().as_bytes().to_vec();
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn register_contract(
        &self,
        request: &ContractRegistrationRequest,
    ) -> Result<(), TransportFailure> {
        let payload = CanonicalPayload::new()
            .push_str(&request.contract_id)
            .push_str(&request.contract_binary_name)
            .push_bytes(&request.contract_byte_code)
            .push_str(&request.contract_properties)
            .push_str(&request.cert_holder_id)
            .push_u32(request.cert_version)
            .finish();
        self.check_signature(&payload, &request.signature)?;

        let mut contracts = self.contracts.lock();
        if contracts.contains_key(&request.contract_id) {
            return Err(Self::rejected(406, "the contract is already registered"));
        }
        contracts.insert(
            request.contract_id.clone(),
            serde_json::json!({
                "contract_binary_name": request.contract_binary_name,
                "cert_holder_id": request.cert_holder_id,
            }),
        );
        Ok(())
    }

    async fn list_contracts(
        &self,
        request: &ContractsListingRequest,
    ) -> Result<ContractsListingResponse, TransportFailure> {
        let payload = CanonicalPayload::new()
            .push_str(&request.contract_id)
            .push_str(&request.cert_holder_id)
            .push_u32(request.cert_version)
            .finish();
        self.check_signature(&payload, &request.signature)?;

        let contracts = self.contracts.lock();
        let listing: serde_json::Map<String, serde_json::Value> = contracts
            .iter()
            .filter(|(id, _)| request.contract_id.is_empty() || **id == request.contract_id)
            .map(|(id, meta)| (id.clone(), meta.clone()))
            .collect();
        Ok(ContractsListingResponse {
            json: serde_json::Value::Object(listing).to_string(),
        })
    }

    async fn validate_ledger(
        &self,
        request: &LedgerValidationRequest,
    ) -> Result<LedgerValidationResponse, TransportFailure> {
        let payload = CanonicalPayload::new()
            .push_str(&request.asset_id)
            .push_u32(request.start_age)
            .push_u32(request.end_age)
            .push_str(&request.cert_holder_id)
            .push_u32(request.cert_version)
            .finish();
        self.check_signature(&payload, &request.signature)?;

        let chains = self.chains.lock();
        let proof = chains
            .get(&request.asset_id)
            .and_then(|chain| {
                chain
                    .iter()
                    .filter(|p| p.age >= request.start_age && p.age <= request.end_age)
                    .last()
            })
            .cloned()
            .ok_or_else(|| Self::rejected(409, "the asset is not found"))?;

        Ok(LedgerValidationResponse {
            status_code: 200,
            proof: Some(proof),
        })
    }

    async fn execute_contract(
        &self,
        request: &ContractExecutionRequest,
    ) -> Result<ContractExecutionResponse, TransportFailure> {
        let payload = CanonicalPayload::new()
            .push_str(&request.contract_id)
            .push_str(&request.contract_argument)
            .push_str(&request.cert_holder_id)
            .push_u32(request.cert_version)
            .finish();
        self.check_signature(&payload, &request.signature)?;

        if !self.contracts.lock().contains_key(&request.contract_id) {
            return Err(Self::rejected(404, "the contract is not registered"));
        }

        let (nonce, payload_json) = split_argument(&request.contract_argument)
            .ok_or_else(|| Self::rejected(407, "malformed contract argument"))?;
        let argument: serde_json::Value = serde_json::from_str(payload_json)
            .map_err(|_| Self::rejected(407, "malformed contract argument"))?;
        let asset_id = argument["asset_id"]
            .as_str()
            .ok_or_else(|| Self::rejected(408, "asset_id is required"))?;

        let mut chains = self.chains.lock();
        let chain = chains.entry(asset_id.to_string()).or_default();
        let (age, input, prev_hash) = match chain.last() {
            Some(prev) => (
                prev.age + 1,
                format!(r#"{{"{}":{{"age":{}}}}}"#, asset_id, prev.age),
                prev.hash.clone(),
            ),
            None => (0, String::new(), Vec::new()),
        };

        let hash = Sha256::new()
            .chain_update(asset_id.as_bytes())
            .chain_update(age.to_be_bytes())
            .chain_update(nonce.as_bytes())
            .chain_update(payload_json.as_bytes())
            .finalize()
            .to_vec();

        let mut proof = AssetProofMessage {
            asset_id: asset_id.to_string(),
            age,
            nonce: nonce.to_string(),
            input,
            hash,
            prev_hash,
            signature: Vec::new(),
        };
        self.sign_proof(&mut proof);
        chain.push(proof.clone());

        Ok(ContractExecutionResponse {
            contract_result: String::new(),
            function_result: String::new(),
            proofs: vec![proof],
        })
    }
}
