//! Pinning operations.
//!
//! Each operation builds one [`PinRequest`], sends it through the session,
//! and returns the reply. Nothing is retried and nothing is kept between
//! calls.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::{debug, instrument, warn};

use pinata_core::constants::TEST_AUTHENTICATION_ENDPOINT;
use pinata_core::error::{PinataError, Result};
use pinata_core::traits::HttpSession;
use pinata_core::types::{FilePart, PinMetadata, PinRequest, PinataResponse, UnpinOutcome};

use crate::collector::DirectoryCollector;
use crate::config::PinataConfig;
use crate::session::ReqwestSession;

/// Client for the Pinata pinning endpoints.
pub struct PinningClient<S = ReqwestSession> {
    session: S,
    collector: DirectoryCollector,
}

impl PinningClient<ReqwestSession> {
    /// Creates a client talking to the real API.
    pub fn with_config(config: PinataConfig) -> Result<Self> {
        Ok(Self::new(ReqwestSession::new(config)?))
    }
}

impl<S: HttpSession> PinningClient<S> {
    /// Creates a client over any session.
    pub fn new(session: S) -> Self {
        Self {
            session,
            collector: DirectoryCollector::new(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Pins a file, or every file under a directory.
    ///
    /// See [`DirectoryCollector::upload_name`] for the file names sent.
    pub async fn pin_file(&self, path: impl AsRef<Path>) -> Result<PinataResponse> {
        self.pin_file_with_metadata(path, None).await
    }

    /// Pins a file or directory with a name and tags.
    ///
    /// Fails without sending anything if the path is missing, the directory
    /// holds no files, or any file cannot be read.
    #[instrument(skip(self, path, metadata), fields(path = %path.as_ref().display()))]
    pub async fn pin_file_with_metadata(
        &self,
        path: impl AsRef<Path>,
        metadata: Option<PinMetadata>,
    ) -> Result<PinataResponse> {
        let root = path.as_ref();
        let files = self.collector.collect(root)?;
        if files.is_empty() {
            return Err(PinataError::EmptyUpload(root.to_path_buf()));
        }

        let parts = self.read_parts(root, &files).await?;
        let response = self.dispatch(PinRequest::files(parts, metadata)).await?;

        debug!(files = files.len(), status = response.status, "Pinned files");
        response.error_for_status()
    }

    /// Pins the JSON document stored at `json_path`.
    pub async fn pin_json(&self, json_path: impl AsRef<Path>) -> Result<PinataResponse> {
        self.pin_json_with_metadata(json_path, None).await
    }

    /// Pins the JSON document stored at `json_path` with a name and tags.
    ///
    /// The file must parse as JSON; malformed content is never sent.
    #[instrument(skip(self, json_path, metadata), fields(path = %json_path.as_ref().display()))]
    pub async fn pin_json_with_metadata(
        &self,
        json_path: impl AsRef<Path>,
        metadata: Option<PinMetadata>,
    ) -> Result<PinataResponse> {
        let json_path = json_path.as_ref();
        let raw = read_file(json_path).await?;
        let content: Value = serde_json::from_slice(&raw)?;

        self.pin_json_value(content, metadata).await
    }

    /// Pins an in-memory JSON document.
    #[instrument(skip_all)]
    pub async fn pin_json_value(
        &self,
        content: Value,
        metadata: Option<PinMetadata>,
    ) -> Result<PinataResponse> {
        let response = self.dispatch(PinRequest::json(content, metadata)).await?;

        debug!(status = response.status, "Pinned JSON");
        response.error_for_status()
    }

    /// Asks the service to pin content already on the network.
    ///
    /// Success means the request was queued. The service searches for and
    /// pins the content in the background.
    pub async fn pin_by_hash(&self, hash: &str) -> Result<PinataResponse> {
        self.pin_by_hash_with_metadata(hash, None).await
    }

    /// Pin by hash with a name and tags.
    #[instrument(skip(self, metadata))]
    pub async fn pin_by_hash_with_metadata(
        &self,
        hash: &str,
        metadata: Option<PinMetadata>,
    ) -> Result<PinataResponse> {
        let request = PinRequest::hash_to_pin(hash, metadata)?;
        let response = self.dispatch(request).await?;

        debug!(hash, status = response.status, "Queued pin by hash");
        response.error_for_status()
    }

    /// Removes the caller's pin on `hash`.
    ///
    /// A hash the caller never pinned is reported as
    /// [`UnpinOutcome::NotPinned`], not as an error.
    #[instrument(skip(self))]
    pub async fn unpin(&self, hash: &str) -> Result<UnpinOutcome> {
        let request = PinRequest::unpin(hash)?;
        let response = self.dispatch(request).await?;

        if response.is_success() {
            debug!(hash, "Unpinned");
            return Ok(UnpinOutcome::Unpinned(response));
        }

        if response.is_not_pinned() {
            warn!(hash, status = response.status, "Hash was not pinned");
            return Ok(UnpinOutcome::NotPinned(response));
        }

        response.error_for_status().map(UnpinOutcome::Unpinned)
    }

    /// Checks that the session's credentials are accepted.
    #[instrument(skip(self))]
    pub async fn test_authentication(&self) -> Result<PinataResponse> {
        self.session
            .get(TEST_AUTHENTICATION_ENDPOINT)
            .await?
            .error_for_status()
    }

    /// Reads every collected file into a part, one at a time.
    ///
    /// Any unreadable file fails the whole batch.
    async fn read_parts(&self, root: &Path, files: &[PathBuf]) -> Result<Vec<FilePart>> {
        let mut parts = Vec::with_capacity(files.len());
        for file in files {
            let data = read_file(file).await?;
            parts.push(FilePart::new(self.collector.upload_name(root, file), data));
        }
        Ok(parts)
    }

    async fn dispatch(&self, request: PinRequest) -> Result<PinataResponse> {
        let endpoint = request.endpoint();
        let fields = request.form_fields()?;
        let body = request.json_body();
        debug!(method = ?request.method(), endpoint = %endpoint, "Sending request");

        match (request, body) {
            (PinRequest::Files { parts, .. }, _) => {
                self.session.post_multipart(&endpoint, parts, fields).await
            }
            (PinRequest::Unpin { .. }, _) => self.session.delete(&endpoint).await,
            (_, Some(body)) => self.session.post_json(&endpoint, body).await,
            (_, None) => Err(PinataError::Unsupported(format!("no request body for {}", endpoint))),
        }
    }
}

/// Reads a whole file. The handle is closed before this returns.
async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PinataError::NotFound(path.to_path_buf()),
        _ => PinataError::Io(e),
    })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data).await?;
    Ok(data)
}
