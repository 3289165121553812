//! # Status Decoding
//!
//! Default decoder for the binary status a server attaches to a failed call.
//! The production transports carry a generated wire type here; this adapter
//! reads the JSON rendering used by the test and development transports, and
//! runtimes with a different encoding plug in their own
//! [`ErrorStatusDecoder`].

use crate::messages::ErrorStatus;
use crate::ports::transport::ErrorStatusDecoder;

/// Decodes the side-channel status bytes as a JSON `{code, message}` object.
#[derive(Debug, Default)]
pub struct JsonStatusDecoder;

impl ErrorStatusDecoder for JsonStatusDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<ErrorStatus> {
        serde_json::from_slice(bytes).ok()
    }
}
