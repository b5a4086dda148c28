//! Response-side types.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::NOT_PINNED_REASON;
use crate::error::{PinataError, Result};

/// Status and body of a Pinata API reply.
///
/// Bodies that are not JSON are kept as a JSON string so callers always get
/// a `Value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinataResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed body
    pub body: Value,
}

impl PinataResponse {
    /// Creates a response from an already parsed body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Creates a response from raw body text.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
        };
        Self { status, body }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the service reports the hash as never pinned by the caller.
    pub fn is_not_pinned(&self) -> bool {
        if self.status == 404 {
            return true;
        }
        if !(400..500).contains(&self.status) {
            return false;
        }

        match &self.body {
            Value::String(text) => text.contains(NOT_PINNED_REASON),
            body => {
                body.pointer("/error/reason").and_then(Value::as_str) == Some(NOT_PINNED_REASON)
                    || body.pointer("/error").and_then(Value::as_str) == Some(NOT_PINNED_REASON)
            }
        }
    }

    /// Decodes the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// Body rendered as text, for error messages.
    pub fn body_text(&self) -> String {
        match &self.body {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            body => body.to_string(),
        }
    }

    /// Converts a non-success response into `PinataError::Remote`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PinataError::Remote {
                status: self.status,
                body: self.body_text(),
            })
        }
    }
}

/// Body of a successful `pinFileToIPFS` or `pinJSONToIPFS` call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PinFileResult {
    /// Content hash of the pinned root
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    /// Total pinned size in bytes
    #[serde(rename = "PinSize")]
    pub pin_size: u64,
    /// When the pin was recorded
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Set when the caller had already pinned this content
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: bool,
}

/// Body of an accepted `pinByHash` call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinByHashResult {
    /// Identifier of the queued pin job
    pub id: String,
    /// Hash being pinned
    pub ipfs_hash: String,
    /// Job status, e.g. `searching` or `prechecking`
    pub status: String,
    /// Name from the pin metadata
    #[serde(default)]
    pub name: Option<String>,
}

/// Result of an unpin call.
#[derive(Clone, Debug, PartialEq)]
pub enum UnpinOutcome {
    /// The pin existed and was removed.
    Unpinned(PinataResponse),
    /// The caller had never pinned the hash.
    NotPinned(PinataResponse),
}

impl UnpinOutcome {
    /// Returns true if the hash was pinned before the call.
    pub fn was_pinned(&self) -> bool {
        matches!(self, UnpinOutcome::Unpinned(_))
    }

    /// The underlying response.
    pub fn response(&self) -> &PinataResponse {
        match self {
            UnpinOutcome::Unpinned(r) | UnpinOutcome::NotPinned(r) => r,
        }
    }
}
