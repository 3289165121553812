//! # Request Builders
//!
//! One builder per request kind. Every `with_*` consumes and returns the
//! builder, so no mutable builder state is ever shared; `build()` is the only
//! operation that performs work and is asynchronous exactly on the builders
//! that must await the signer.
//!
//! The signing builders compute a canonical payload with a builder-specific,
//! frozen field order (see each `build()`), sign it, and attach the signature
//! to the assembled message. Field presence is not validated here; that is
//! the orchestrator's responsibility.

pub mod certificate_registration;
pub mod contract_execution;
pub mod contract_registration;
pub mod contracts_listing;
pub mod execution_validation;
pub mod function_registration;
pub mod ledger_validation;

pub use certificate_registration::CertificateRegistrationRequestBuilder;
pub use contract_execution::ContractExecutionRequestBuilder;
pub use contract_registration::ContractRegistrationRequestBuilder;
pub use contracts_listing::ContractsListingRequestBuilder;
pub use execution_validation::ExecutionValidationRequestBuilder;
pub use function_registration::FunctionRegistrationRequestBuilder;
pub use ledger_validation::LedgerValidationRequestBuilder;
