use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a transcription session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Session identifier
    pub session_id: String,

    /// Whether capture is currently active
    pub is_listening: bool,

    /// When the last capture started
    pub started_at: DateTime<Utc>,

    /// Seconds since the last capture started
    pub duration_secs: f64,

    /// Number of finalized segments appended so far
    pub final_segments: usize,

    /// Length of the accumulated transcript in characters
    pub transcript_chars: usize,
}
