// crypto_demo/crypto_workflow/src/service.rs

//! The remote cryptographic service, as consumed by the orchestrators.
//!
//! | Endpoint   | Request                                 | Response               |
//! |------------|-----------------------------------------|------------------------|
//! | `/encrypt` | `{algorithm, message}`                  | `{encryptedMessage}`   |
//! | `/decrypt` | `{algorithm, encryptedMessage}`         | `{decryptedMessage}`   |
//! | `/sign`    | `{algorithm, message}` (digest)         | `{signature}`          |
//! | `/verify`  | `{algorithm, message, signature}`       | `{isValid}`            |
//!
//! No authentication and no retries. A timeout is only applied when one is
//! configured; otherwise the transport decides.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::models::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, SignRequest, SignResponse,
    VerifyRequest, VerifyResponse,
};

/// Address the service listens on when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "CRYPTO_SERVICE_URL";

/// Environment variable setting a client-side timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "CRYPTO_SERVICE_TIMEOUT_SECS";

/// The four operations the client delegates.
#[async_trait]
pub trait CryptoService: Send + Sync {
    async fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, ServiceError>;

    async fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, ServiceError>;

    async fn sign(&self, request: &SignRequest) -> Result<SignResponse, ServiceError>;

    async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, ServiceError>;
}

/// Where the service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ServiceConfig {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from `CRYPTO_SERVICE_URL` / `CRYPTO_SERVICE_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        ServiceConfig { base_url, timeout }
    }

    /// URL of `endpoint` under the base address.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig::new(DEFAULT_BASE_URL)
    }
}

/// [`CryptoService`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpCryptoService {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpCryptoService {
    pub fn new(config: ServiceConfig) -> Self {
        let client = match config.timeout {
            Some(timeout) => reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|e| {
                    warn!(error = %e, ?timeout, "could not apply timeout, requests will not time out");
                    reqwest::Client::new()
                }),
            None => reqwest::Client::new(),
        };
        HttpCryptoService { client, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn post<Req, Resp>(&self, endpoint: &'static str, body: &Req) -> Result<Resp, ServiceError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "posting to crypto service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ServiceError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                endpoint,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ServiceError::Transport { endpoint, source })?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

impl Default for HttpCryptoService {
    fn default() -> Self {
        HttpCryptoService::new(ServiceConfig::default())
    }
}

#[async_trait]
impl CryptoService for HttpCryptoService {
    async fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, ServiceError> {
        self.post("encrypt", request).await
    }

    async fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, ServiceError> {
        self.post("decrypt", request).await
    }

    async fn sign(&self, request: &SignRequest) -> Result<SignResponse, ServiceError> {
        self.post("sign", request).await
    }

    async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, ServiceError> {
        self.post("verify", request).await
    }
}
