//! reqwest-backed HTTP session.
//!
//! Owns the base URL, credentials, and timeout; everything else about a
//! request comes from the caller.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use pinata_core::error::{PinataError, Result};
use pinata_core::traits::HttpSession;
use pinata_core::types::{FilePart, PinataResponse};

use crate::config::PinataConfig;

/// `HttpSession` over a shared `reqwest::Client`.
pub struct ReqwestSession {
    config: PinataConfig,
    base_url: Url,
    http_client: reqwest::Client,
}

impl ReqwestSession {
    /// Creates a session from config.
    ///
    /// Fails if no credentials are configured, the timeout is zero, or the
    /// base URL does not parse.
    pub fn new(config: PinataConfig) -> Result<Self> {
        if !config.has_credentials() {
            return Err(PinataError::Config(
                "Pinata credentials not configured (API key pair or JWT)".into(),
            ));
        }

        if config.timeout_seconds == 0 {
            return Err(PinataError::Config("timeout_seconds must be greater than zero".into()));
        }

        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| PinataError::Config(format!("Invalid base URL '{}': {}", config.base_url, e)))?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PinataError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            http_client,
        })
    }

    /// Session configuration.
    pub fn config(&self) -> &PinataConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PinataError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match (&self.config.jwt, &self.config.api_key, &self.config.secret_api_key) {
            (Some(jwt), _, _) => builder.bearer_auth(jwt),
            (None, Some(key), Some(secret)) => builder
                .header("pinata_api_key", key)
                .header("pinata_secret_api_key", secret),
            _ => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<PinataResponse> {
        let response = self.authorize(builder).send().await.map_err(|e| {
            if e.is_timeout() {
                PinataError::Timeout {
                    seconds: self.config.timeout_seconds,
                }
            } else {
                PinataError::Http(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| PinataError::Http(e.to_string()))?;

        debug!(status, "Pinata responded");
        Ok(PinataResponse::from_text(status, &text))
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    #[instrument(skip_all, fields(path = %path, part_count = parts.len()))]
    async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FilePart>,
        fields: Vec<(String, String)>,
    ) -> Result<PinataResponse> {
        let mut form = Form::new();
        for part in parts {
            let file_part = Part::bytes(part.data.to_vec())
                .file_name(part.file_name)
                .mime_str("application/octet-stream")
                .map_err(|e| PinataError::Http(e.to_string()))?;
            form = form.part(part.field, file_part);
        }
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let url = self.url(path)?;
        self.send(self.http_client.post(url).multipart(form)).await
    }

    #[instrument(skip(self, body))]
    async fn post_json(&self, path: &str, body: Value) -> Result<PinataResponse> {
        let url = self.url(path)?;
        self.send(self.http_client.post(url).json(&body)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<PinataResponse> {
        let url = self.url(path)?;
        self.send(self.http_client.delete(url)).await
    }

    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<PinataResponse> {
        let url = self.url(path)?;
        self.send(self.http_client.get(url)).await
    }
}
