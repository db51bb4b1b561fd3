//! Speech recognition capability seam
//!
//! The platform's recognition engine is consumed through two narrow traits:
//! - `SpeechEngine`: factory producing recognition sessions
//! - `RecognitionSession`: one capture lifecycle (begin/end)
//!
//! Session activity comes back as discrete `RecognitionEvent`s over a
//! per-session channel, so the controller's state machine can be driven by
//! a synchronous test harness with no real engine behind it.

pub mod engine;
pub mod events;
pub mod scripted;

pub use engine::{
    detect_engine, EventReceiver, EventSender, RecognitionSession, SpeechEngine, SCRIPT_ENV_VAR,
};
pub use events::{RecognitionError, RecognitionEvent, RecognizedSegment, ResultBatch};
pub use scripted::{ScriptStep, ScriptedEngine};
