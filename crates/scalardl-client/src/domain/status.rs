//! # Status Codes
//!
//! Numeric status codes shared with the Ledger and Auditor services. The
//! numbering mirrors the servers' own table, so a decoded transport status
//! maps directly onto this enum.

use serde::{Deserialize, Serialize};

/// Status of a ledger operation, as reported by the servers or raised locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum StatusCode {
    Ok = 200,
    InvalidHash = 300,
    InvalidPrevHash = 301,
    InvalidContract = 302,
    InvalidOutput = 303,
    InvalidNonce = 304,
    /// The Ledger and the Auditor computed diverging results.
    InconsistentStates = 305,
    InconsistentRequest = 306,
    InvalidSignature = 400,
    UnloadableKey = 401,
    UnloadableContract = 402,
    CertificateNotFound = 403,
    ContractNotFound = 404,
    CertificateAlreadyRegistered = 405,
    ContractAlreadyRegistered = 406,
    InvalidRequest = 407,
    ContractContextualError = 408,
    AssetNotFound = 409,
    FunctionNotFound = 410,
    UnloadableFunction = 411,
    InvalidFunction = 412,
    DatabaseError = 500,
    /// No structured status could be recovered from a transport failure.
    UnknownTransactionStatus = 501,
    RuntimeError = 502,
    Unavailable = 503,
    Conflict = 504,
}

impl StatusCode {
    /// The numeric wire value of this status.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Map a numeric wire value back onto a status, if it is a known one.
    pub fn from_u32(code: u32) -> Option<Self> {
        let status = match code {
            200 => Self::Ok,
            300 => Self::InvalidHash,
            301 => Self::InvalidPrevHash,
            302 => Self::InvalidContract,
            303 => Self::InvalidOutput,
            304 => Self::InvalidNonce,
            305 => Self::InconsistentStates,
            306 => Self::InconsistentRequest,
            400 => Self::InvalidSignature,
            401 => Self::UnloadableKey,
            402 => Self::UnloadableContract,
            403 => Self::CertificateNotFound,
            404 => Self::ContractNotFound,
            405 => Self::CertificateAlreadyRegistered,
            406 => Self::ContractAlreadyRegistered,
            407 => Self::InvalidRequest,
            408 => Self::ContractContextualError,
            409 => Self::AssetNotFound,
            410 => Self::FunctionNotFound,
            411 => Self::UnloadableFunction,
            412 => Self::InvalidFunction,
            500 => Self::DatabaseError,
            501 => Self::UnknownTransactionStatus,
            502 => Self::RuntimeError,
            503 => Self::Unavailable,
            504 => Self::Conflict,
            _ => return None,
        };
        Some(status)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}
