//! # Contract Argument Format
//!
//! Encodes a (nonce, function ids, argument) triple into the single versioned
//! string carried as the contract argument. The exact separator code points
//! and the version prefix are a frozen wire contract; the string is never
//! parsed back by the client, only forwarded.

use crate::domain::errors::ClientError;
use serde_json::Value;

const ARGUMENT_VERSION_PREFIX: &str = "V";
const ARGUMENT_FORMAT_VERSION: &str = "2";
const NONCE_SEPARATOR: char = '\u{1}';
const FUNCTION_SEPARATOR: char = '\u{2}';
const ARGUMENT_SEPARATOR: char = '\u{3}';

/// The two argument shapes the servers accept.
///
/// A JSON string passes through verbatim; objects and arrays are serialized.
/// Anything else (numbers, booleans, null) is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Str,
    Object,
}

impl ArgumentKind {
    /// Classify a JSON value, rejecting shapes the servers do not accept.
    pub fn of(value: &Value) -> Result<Self, ClientError> {
        match value {
            Value::String(_) => Ok(Self::Str),
            Value::Object(_) | Value::Array(_) => Ok(Self::Object),
            _ => Err(ClientError::InvalidArgument(
                "argument must be a string or an object".into(),
            )),
        }
    }
}

/// Produce the versioned argument string:
/// `"V2" U+0001 nonce U+0003 join(function_ids, U+0002) U+0003 payload`.
pub fn format_argument(
    nonce: &str,
    function_ids: &[String],
    argument: &Value,
) -> Result<String, ClientError> {
    let payload = match ArgumentKind::of(argument)? {
        ArgumentKind::Str => argument
            .as_str()
            .unwrap_or_default()
            .to_owned(),
        ArgumentKind::Object => serde_json::to_string(argument)
            .map_err(|e| ClientError::InvalidArgument(e.to_string()))?,
    };

    Ok(format!(
        "{}{}{}{}{}{}{}{}",
        ARGUMENT_VERSION_PREFIX,
        ARGUMENT_FORMAT_VERSION,
        NONCE_SEPARATOR,
        nonce,
        ARGUMENT_SEPARATOR,
        function_ids.join(&FUNCTION_SEPARATOR.to_string()),
        ARGUMENT_SEPARATOR,
        payload,
    ))
}
