//! # ScalarDL Client SDK
//!
//! Client-side core for a tamper-evident ledger run by two mutually
//! distrusting parties, a Ledger and an Auditor. The SDK builds and signs
//! requests, drives the ordering/execution/validation protocol between the
//! parties, reconciles their results, and surfaces every failure as a
//! status-coded [`ClientError`].
//!
//! ## Architecture
//!
//! Hexagonal: a pure `domain` (canonical serialization, argument formatting,
//! proofs, results, status codes), `ports` defining the signer and transport
//! seams, `adapters` with the default ECDSA P-256 signer and status decoder,
//! `builder` with one signing request builder per operation, and the
//! [`ClientService`] orchestrator on top.
//!
//! ## Usage
//!
//! ```ignore
//! let config = ClientConfig::builder()
//!     .cert_holder_id("alice")
//!     .private_key_pem(pem)
//!     .build()?;
//! let service = ClientService::new(config, transports, signer_factory, decoder)?;
//! let result = service.execute("payment", json!({"to": "bob", "amount": 10})).await?;
//! ```

pub mod adapters;
pub mod builder;
pub mod config;
pub mod domain;
pub mod messages;
pub mod ports;
pub mod service;

pub use adapters::ecdsa::{EcdsaSigner, EcdsaSignerFactory, EcdsaValidator};
pub use adapters::status::JsonStatusDecoder;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use domain::argument::format_argument;
pub use domain::errors::{ClientError, SigningError};
pub use domain::proof::AssetProof;
pub use domain::result::{ContractExecutionResult, LedgerValidationResult};
pub use domain::status::StatusCode;
pub use service::{ClientService, ExecuteOptions, Transports, MAX_AGE, MIN_AGE};
