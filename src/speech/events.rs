use serde::{Deserialize, Serialize};

/// A single unit of recognized speech within a result batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedSegment {
    /// Recognized text
    pub text: String,
    /// Whether the engine will no longer revise this segment
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// An ordered batch of segments emitted by a recognition session.
///
/// Mirrors the result-event shape of continuous recognition engines: the
/// batch covers a window of the session's result list starting at
/// `result_index` and may mix finalized and interim segments.
#[derive(Debug, Clone)]
pub struct ResultBatch {
    /// Index of the first segment within the session's result list
    pub result_index: usize,
    pub segments: Vec<RecognizedSegment>,
}

/// Error classifications reported by a recognition session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("no-speech")]
    NoSpeech,
    #[error("aborted")]
    Aborted,
    #[error("audio-capture")]
    AudioCapture,
    #[error("not-allowed")]
    NotAllowed,
    #[error("network")]
    Network,
    #[error("{0}")]
    Other(String),
}

impl RecognitionError {
    /// Map an engine-reported error code to a classification.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => Self::NoSpeech,
            "aborted" => Self::Aborted,
            "audio-capture" => Self::AudioCapture,
            "not-allowed" => Self::NotAllowed,
            "network" => Self::Network,
            other => Self::Other(other.to_string()),
        }
    }

    /// Benign classifications are logged and absorbed; everything else is
    /// surfaced to the caller.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NoSpeech | Self::Aborted)
    }
}

/// One notification from a recognition session.
///
/// The engine's result/error/end callback slots restated as discrete event
/// types, so the controller's transitions can be driven without any real
/// capture stack behind them.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// A batch of recognition results (final and/or interim)
    Result(ResultBatch),
    /// The session hit an error; a separate end notification may follow
    Error(RecognitionError),
    /// The session terminated (explicit stop, engine timeout, or error)
    End,
}
