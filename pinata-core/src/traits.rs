//! The HTTP session seam.
//!
//! Pinning logic talks to the service only through [`HttpSession`], so it can
//! run against an in-memory fake in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PinataError, Result};
use crate::types::{FilePart, PinataResponse};

/// Transport for Pinata API calls.
///
/// Paths are relative endpoint paths such as `pinning/unpin/Qm...`; the
/// session owns the base URL, credentials, and timeout. Implementations
/// return responses of any status. Deciding what counts as failure is the
/// caller's job.
#[async_trait]
pub trait HttpSession: Send + Sync {
    /// Sends a multipart POST with one part per file plus extra text fields.
    async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FilePart>,
        fields: Vec<(String, String)>,
    ) -> Result<PinataResponse>;

    /// Sends a POST with a JSON body.
    ///
    /// Sessions without JSON support keep this default, which refuses rather
    /// than sending a malformed request.
    async fn post_json(&self, path: &str, body: Value) -> Result<PinataResponse> {
        let _ = body;
        Err(PinataError::Unsupported(format!(
            "JSON requests are not supported by this session ({})",
            path
        )))
    }

    /// Sends a DELETE.
    async fn delete(&self, path: &str) -> Result<PinataResponse>;

    /// Sends a GET.
    async fn get(&self, path: &str) -> Result<PinataResponse>;
}
