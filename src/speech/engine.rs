use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use super::events::RecognitionEvent;
use super::scripted::ScriptedEngine;
use crate::session::SessionConfig;

/// Sender half of a session's event channel, held by the engine side.
pub type EventSender = mpsc::UnboundedSender<RecognitionEvent>;

/// Receiver half of a session's event channel, held by the controller.
pub type EventReceiver = mpsc::UnboundedReceiver<RecognitionEvent>;

/// Handle to one capture lifecycle.
///
/// Owned exclusively by the controller; callers never see it. All session
/// activity is delivered as `RecognitionEvent`s on the channel the session
/// was created with.
pub trait RecognitionSession: Send {
    /// Begin capturing.
    ///
    /// Fails synchronously when the capture device cannot be acquired
    /// (e.g. already in use). The session stays usable and a later call
    /// may succeed.
    fn begin_capture(&mut self) -> Result<()>;

    /// End capturing. Idempotent: safe to call when no capture is active.
    /// The session emits an end event once it actually terminates.
    fn end_capture(&mut self);
}

/// Speech recognition engine: a factory producing recognition sessions.
pub trait SpeechEngine: Send + Sync {
    /// Create a session configured with the fixed recognition parameters,
    /// wired to `events` for its result/error/end notifications.
    fn create_session(
        &self,
        config: &SessionConfig,
        events: EventSender,
    ) -> Result<Box<dyn RecognitionSession>>;

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Environment variable probed for a recognition script path.
pub const SCRIPT_ENV_VAR: &str = "CLINIC_SCRIBE_SCRIPT";

/// Probe the environment for a speech recognition engine.
///
/// Runs once at startup; the result is immutable for the process lifetime.
/// Returns `None` when no engine is available, in which case every
/// controller command degrades to a no-op and callers fall back to manual
/// text entry.
pub fn detect_engine() -> Option<Box<dyn SpeechEngine>> {
    match std::env::var(SCRIPT_ENV_VAR) {
        Ok(path) if !path.is_empty() => {
            info!("Detected scripted recognition engine: {}", path);
            Some(Box::new(ScriptedEngine::new(path)))
        }
        _ => None,
    }
}
