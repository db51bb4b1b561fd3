use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured diagnosis produced by the diagnosis API.
///
/// Wire names are the API's Portuguese field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
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

    #[serde(rename = "confianca", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// One stored consultation: the captured transcript plus its diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    /// Millisecond timestamp, also used as the unique id
    pub id: i64,

    pub date: DateTime<Utc>,

    pub transcript: String,

    pub diagnosis: Diagnosis,
}

impl Consultation {
    pub fn new(transcript: String, diagnosis: Diagnosis) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            date: now,
            transcript,
            diagnosis,
        }
    }
}
