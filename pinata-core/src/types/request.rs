//! Request-side types: file parts, pin metadata, and the request sum type.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::{
    FILE_FIELD, METADATA_FIELD, PIN_BY_HASH_ENDPOINT, PIN_FILE_ENDPOINT, PIN_JSON_ENDPOINT,
    UNPIN_ENDPOINT,
};
use crate::error::{PinataError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// FILE PART
// ═══════════════════════════════════════════════════════════════════════════════

/// One file in a multipart upload.
///
/// Holds the file contents, not a handle: the file is closed by the time a
/// part exists.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Multipart field name
    pub field: String,
    /// File name reported to the service
    pub file_name: String,
    /// File contents
    pub data: Bytes,
}

impl FilePart {
    /// Creates a part under the standard `file` field.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            field: FILE_FIELD.to_string(),
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Size of the contents in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the file was empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PIN METADATA
// ═══════════════════════════════════════════════════════════════════════════════

/// Optional name and key/value tags attached to a pin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    /// Display name for the pin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Custom tags; Pinata accepts string values
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub keyvalues: BTreeMap<String, String>,
}

impl PinMetadata {
    /// Metadata carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Adds a key/value tag.
    pub fn with_keyvalue(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keyvalues.insert(key.into(), value.into());
        self
    }

    /// Returns true if there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.keyvalues.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REQUEST
// ═══════════════════════════════════════════════════════════════════════════════

/// HTTP method a request is issued with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// POST
    Post,
    /// DELETE
    Delete,
}

/// A single pinning request, built per call and consumed by the session.
#[derive(Clone, Debug, PartialEq)]
pub enum PinRequest {
    /// Multipart upload of one or more files.
    Files {
        /// One part per file
        parts: Vec<FilePart>,
        /// Optional pin metadata
        metadata: Option<PinMetadata>,
    },
    /// JSON document pin.
    Json {
        /// Document to pin
        content: Value,
        /// Optional pin metadata
        metadata: Option<PinMetadata>,
    },
    /// Pin of content already available on the network.
    HashToPin {
        /// Content hash
        hash: String,
        /// Optional pin metadata
        metadata: Option<PinMetadata>,
    },
    /// Removal of a pin.
    Unpin {
        /// Content hash
        hash: String,
    },
}

impl PinRequest {
    /// Builds a file upload request. Empty metadata is dropped.
    pub fn files(parts: Vec<FilePart>, metadata: Option<PinMetadata>) -> Self {
        PinRequest::Files {
            parts,
            metadata: metadata.filter(|m| !m.is_empty()),
        }
    }

    /// Builds a JSON pin request. Empty metadata is dropped.
    pub fn json(content: Value, metadata: Option<PinMetadata>) -> Self {
        PinRequest::Json {
            content,
            metadata: metadata.filter(|m| !m.is_empty()),
        }
    }

    /// Builds a pin-by-hash request after validating the hash.
    pub fn hash_to_pin(hash: impl Into<String>, metadata: Option<PinMetadata>) -> Result<Self> {
        let hash = hash.into();
        validate_hash(&hash)?;
        Ok(PinRequest::HashToPin {
            hash,
            metadata: metadata.filter(|m| !m.is_empty()),
        })
    }

    /// Builds an unpin request after validating the hash.
    pub fn unpin(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();
        validate_hash(&hash)?;
        Ok(PinRequest::Unpin { hash })
    }

    /// HTTP method for this request.
    pub fn method(&self) -> HttpMethod {
        match self {
            PinRequest::Unpin { .. } => HttpMethod::Delete,
            _ => HttpMethod::Post,
        }
    }

    /// Endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> String {
        match self {
            PinRequest::Files { .. } => PIN_FILE_ENDPOINT.to_string(),
            PinRequest::Json { .. } => PIN_JSON_ENDPOINT.to_string(),
            PinRequest::HashToPin { .. } => PIN_BY_HASH_ENDPOINT.to_string(),
            PinRequest::Unpin { hash } => format!("{}/{}", UNPIN_ENDPOINT, hash),
        }
    }

    /// JSON body for the requests that carry one.
    pub fn json_body(&self) -> Option<Value> {
        match self {
            PinRequest::Json { content, metadata } => {
                let mut body = json!({ "pinataContent": content });
                if let Some(m) = metadata {
                    body[METADATA_FIELD] = json!(m);
                }
                Some(body)
            }
            PinRequest::HashToPin { hash, metadata } => {
                let mut body = json!({ "hashToPin": hash });
                if let Some(m) = metadata {
                    body[METADATA_FIELD] = json!(m);
                }
                Some(body)
            }
            _ => None,
        }
    }

    /// Extra text fields sent alongside file parts.
    pub fn form_fields(&self) -> Result<Vec<(String, String)>> {
        match self {
            PinRequest::Files {
                metadata: Some(m), ..
            } => Ok(vec![(METADATA_FIELD.to_string(), serde_json::to_string(m)?)]),
            _ => Ok(Vec::new()),
        }
    }
}

/// Validates a content hash before it is placed in a request.
///
/// Accepts any non-empty ASCII alphanumeric string, which covers CIDv0
/// (`Qm...`) and base32/base58 CIDv1, and keeps the hash a single URL path
/// segment. Full CID decoding is left to the service.
pub fn validate_hash(hash: &str) -> Result<()> {
    if hash.is_empty() {
        return Err(PinataError::InvalidHash("hash cannot be empty".into()));
    }

    if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PinataError::InvalidHash(format!(
            "hash contains invalid characters: {}",
            hash
        )));
    }

    Ok(())
}
