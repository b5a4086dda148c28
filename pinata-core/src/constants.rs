//! Pinata API constants.
//!
//! Endpoint paths are relative to the API base URL; sessions join them.

// ═══════════════════════════════════════════════════════════════════════════════
// API LOCATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the public Pinata API.
pub const DEFAULT_BASE_URL: &str = "https://api.pinata.cloud";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Multipart upload of one file or a directory of files.
pub const PIN_FILE_ENDPOINT: &str = "pinning/pinFileToIPFS";

/// JSON-optimized upload.
pub const PIN_JSON_ENDPOINT: &str = "pinning/pinJSONToIPFS";

/// Asynchronous pin of content already on the network.
pub const PIN_BY_HASH_ENDPOINT: &str = "pinning/pinByHash";

/// Unpin prefix; the hash is appended as the last path segment.
pub const UNPIN_ENDPOINT: &str = "pinning/unpin";

/// Credential check.
pub const TEST_AUTHENTICATION_ENDPOINT: &str = "data/testAuthentication";

// ═══════════════════════════════════════════════════════════════════════════════
// WIRE NAMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Multipart field name used for every uploaded file.
pub const FILE_FIELD: &str = "file";

/// Field carrying pin metadata (multipart text field or JSON member).
pub const METADATA_FIELD: &str = "pinataMetadata";

/// Reason string the service returns when unpinning a hash the caller never pinned.
pub const NOT_PINNED_REASON: &str = "CURRENT_USER_HAS_NOT_PINNED_CID";
