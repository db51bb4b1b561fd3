//! HTTP client for the diagnosis backend API
//!
//! Endpoints consumed:
//! - GET /api/health - service availability probe
//! - POST /api/diagnose - structured diagnosis for a transcript
//! - POST /api/transcribe - normalization of manually entered text

mod client;
mod types;

pub use client::{ApiError, DiagnosisApi, DiagnosisClient};
pub use types::{
    ApiErrorBody, DiagnoseOptions, DiagnosisResponse, HealthResponse, TranscriptionResponse,
};
