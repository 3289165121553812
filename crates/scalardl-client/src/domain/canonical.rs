//! # Canonical Signing Payload
//!
//! Deterministic byte encoding shared by every signed request type.
//!
//! Each field is appended in the exact order the call site dictates, with no
//! delimiters and no length prefixes. The resulting byte sequence is a frozen
//! wire contract: the server re-derives the same bytes to verify signatures,
//! so any deviation breaks verification.

/// Append-only accumulator for a canonical signing payload.
///
/// Strings are encoded as UTF-8, integers as 4-byte big-endian, and raw byte
/// slices are copied verbatim. Construction never fails.
#[derive(Debug, Default)]
pub struct CanonicalPayload {
    buf: Vec<u8>,
}

impl CanonicalPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the UTF-8 bytes of `value`.
    pub fn push_str(mut self, value: &str) -> Self {
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    /// Append `value` as 4 bytes, big-endian.
    pub fn push_u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Append `bytes` verbatim.
    pub fn push_bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Consume the accumulator and return the payload bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
