use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use super::types::{
    ApiErrorBody, DiagnoseOptions, DiagnosisResponse, HealthResponse, TranscriptionResponse,
};

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a structured error payload
    #[error("{message}")]
    Api { message: String },

    #[error("Could not connect to the diagnosis server")]
    Connect,

    #[error("The diagnosis server took too long to respond")]
    Timeout,

    #[error(transparent)]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Connect
        } else {
            ApiError::Http(e)
        }
    }
}

/// Diagnosis API surface, behind a trait so callers can be exercised
/// against a serverless fake in tests.
#[async_trait]
pub trait DiagnosisApi: Send + Sync {
    /// GET /api/health. Never errors: any failure reads as unhealthy.
    async fn health(&self) -> bool;

    /// POST /api/diagnose with the accumulated transcript.
    async fn diagnose(
        &self,
        transcript: &str,
        options: &DiagnoseOptions,
    ) -> Result<DiagnosisResponse, ApiError>;

    /// POST /api/transcribe for manually entered text.
    async fn transcribe(&self, text: &str) -> Result<TranscriptionResponse, ApiError>;
}

/// HTTP client for the diagnosis backend.
pub struct DiagnosisClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl DiagnosisClient {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.into(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        info!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Prefer the API's own message when it sent a structured error.
        match response.json::<ApiErrorBody>().await {
            Ok(body) => Err(ApiError::Api {
                message: body.message,
            }),
            Err(_) => Err(ApiError::Api {
                message: format!("Request failed with status {}", status),
            }),
        }
    }
}

#[async_trait]
impl DiagnosisApi for DiagnosisClient {
    async fn health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => match response.json::<HealthResponse>().await {
                Ok(body) => body.success,
                Err(e) => {
                    warn!("Malformed health response: {}", e);
                    false
                }
            },
            Err(e) => {
                error!("Diagnosis API is not responding: {}", e);
                false
            }
        }
    }

    async fn diagnose(
        &self,
        transcript: &str,
        options: &DiagnoseOptions,
    ) -> Result<DiagnosisResponse, ApiError> {
        #[derive(Serialize)]
        struct DiagnoseRequest<'a> {
            transcript: &'a str,
            #[serde(flatten)]
            options: &'a DiagnoseOptions,
        }

        self.post_json("/api/diagnose", &DiagnoseRequest { transcript, options })
            .await
    }

    async fn transcribe(&self, text: &str) -> Result<TranscriptionResponse, ApiError> {
        #[derive(Serialize)]
        struct TranscribeRequest<'a> {
            text: &'a str,
            language: &'a str,
        }

        self.post_json(
            "/api/transcribe",
            &TranscribeRequest {
                text,
                language: &self.language,
            },
        )
        .await
    }
}
