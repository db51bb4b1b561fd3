use serde::{Deserialize, Serialize};

use crate::consultation::Diagnosis;

/// Successful response from POST /api/diagnose.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisResponse {
    pub success: bool,

    #[serde(rename = "diagnostico")]
    pub diagnosis: String,

    #[serde(rename = "doencas")]
    pub conditions: Vec<String>,

    #[serde(rename = "exames")]
    pub exams: Vec<String>,

    #[serde(rename = "medicamentos")]
    pub medications: Vec<String>,

    #[serde(rename = "observacoes")]
    pub notes: String,

    #[serde(rename = "confianca")]
    pub confidence: Option<f32>,

    pub timestamp: String,
}

impl From<DiagnosisResponse> for Diagnosis {
    fn from(response: DiagnosisResponse) -> Self {
        Self {
            diagnosis: response.diagnosis,
            conditions: response.conditions,
            exams: response.exams,
            medications: response.medications,
            notes: response.notes,
            confidence: response.confidence,
        }
    }
}

/// Successful response from POST /api/transcribe.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub success: bool,
    pub transcript: String,
    pub confidence: Option<f32>,
    pub timestamp: String,
}

/// Response from GET /api/health.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
}

/// Structured error payload the API returns on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

/// Optional patient context sent with a diagnosis request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnoseOptions {
    #[serde(rename = "patientAge", skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,

    #[serde(rename = "patientGender", skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<String>,
}
