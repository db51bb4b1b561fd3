pub mod api;
pub mod config;
pub mod consultation;
pub mod session;
pub mod speech;

pub use api::{
    ApiError, DiagnoseOptions, DiagnosisApi, DiagnosisClient, DiagnosisResponse,
    TranscriptionResponse,
};
pub use config::Config;
pub use consultation::{Consultation, Diagnosis, HistoryStore};
pub use session::{SessionConfig, SessionSnapshot, SessionStats, TranscriptionController};
pub use speech::{
    detect_engine, EventReceiver, EventSender, RecognitionError, RecognitionEvent,
    RecognitionSession, RecognizedSegment, ResultBatch, ScriptStep, ScriptedEngine, SpeechEngine,
};
