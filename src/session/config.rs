use serde::{Deserialize, Serialize};

/// Fixed recognition parameters for a transcription session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "consult-<uuid>")
    pub session_id: String,

    /// Keep capturing across pauses instead of ending after one utterance
    pub continuous: bool,

    /// Whether the engine should emit interim (still-revisable) results
    pub interim_results: bool,

    /// BCP-47 language tag for recognition
    pub language: String,

    /// Number of alternative transcriptions requested per result
    pub max_alternatives: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("consult-{}", uuid::Uuid::new_v4()),
            continuous: true,
            interim_results: true,
            language: "pt-BR".to_string(),
            max_alternatives: 1,
        }
    }
}
