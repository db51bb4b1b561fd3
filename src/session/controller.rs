use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::config::SessionConfig;
use super::stats::SessionStats;
use crate::speech::{
    EventReceiver, RecognitionError, RecognitionEvent, RecognitionSession, SpeechEngine,
};

/// Read-only view of the controller exposed to the view layer.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub transcript: String,
    pub is_listening: bool,
    pub is_supported: bool,
}

/// Start/stop/reset control surface over a live recognition session.
///
/// Owns the underlying session exclusively and exposes only the
/// monotonically-growing finalized transcript plus a listening flag. Two
/// states: Idle and Listening. start() moves Idle to Listening; stop(), an
/// error event, or an end event move back to Idle. With no engine available
/// every command is a no-op and status queries report unsupported.
pub struct TranscriptionController {
    config: SessionConfig,

    /// The one recognition session, present only when the capability was
    /// detected and session construction succeeded
    session: Option<Box<dyn RecognitionSession>>,

    /// Receiver for the session's result/error/end events
    events: Option<EventReceiver>,

    /// Finalized transcript, append-only between resets
    transcript: String,

    listening: bool,

    /// Most recent non-benign recognition error, held until taken
    last_error: Option<RecognitionError>,

    started_at: DateTime<Utc>,
    final_segments: usize,
}

impl TranscriptionController {
    /// Create a controller over a detected engine.
    ///
    /// `engine` is the result of the one-time capability probe; `None`
    /// leaves the controller permanently unsupported. When an engine is
    /// present, one session is constructed up front with the fixed
    /// recognition parameters from `config` and reused across start/stop
    /// cycles. Session construction failure also degrades to unsupported.
    pub fn new(engine: Option<&dyn SpeechEngine>, config: SessionConfig) -> Self {
        let mut session = None;
        let mut events = None;

        match engine {
            Some(engine) => {
                let (tx, rx) = mpsc::unbounded_channel();
                match engine.create_session(&config, tx) {
                    Ok(s) => {
                        info!(
                            "Recognition session created: {} ({})",
                            config.session_id,
                            engine.name()
                        );
                        session = Some(s);
                        events = Some(rx);
                    }
                    Err(e) => {
                        warn!("Failed to create recognition session: {}", e);
                    }
                }
            }
            None => {
                warn!("No speech recognition engine available");
            }
        }

        Self {
            config,
            session,
            events,
            transcript: String::new(),
            listening: false,
            last_error: None,
            started_at: Utc::now(),
            final_segments: 0,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The accumulated finalized transcript. Interim text never lands here.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            transcript: self.transcript.clone(),
            is_listening: self.listening,
            is_supported: self.is_supported(),
        }
    }

    /// Begin capturing. Ignored while already listening and when
    /// unsupported, so repeated calls never queue a duplicate start.
    pub fn start(&mut self) {
        if self.listening {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.begin_capture() {
            Ok(()) => {
                self.listening = true;
                self.started_at = Utc::now();
                info!("Listening started: {}", self.config.session_id);
            }
            Err(e) => {
                // Recoverable (e.g. capture device busy); caller may retry.
                warn!("Failed to begin capture: {}", e);
            }
        }
    }

    /// Stop capturing. Ignored unless listening. The flag flips false
    /// immediately; the session's own end event repeats the transition.
    pub fn stop(&mut self) {
        if !self.listening {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.end_capture();
        }
        self.listening = false;
        info!("Listening stopped: {}", self.config.session_id);
    }

    /// Clear the accumulated transcript. Does not touch the session or the
    /// listening flag: after a mid-session reset, newly finalized segments
    /// keep appending.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Apply one session event to the state machine.
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Result(batch) => {
                for segment in batch.segments {
                    if segment.is_final {
                        self.transcript.push_str(&segment.text);
                        self.transcript.push(' ');
                        self.final_segments += 1;
                    }
                    // Interim segments are discarded; the engine re-emits
                    // the text as final once it stops revising it.
                }
            }
            RecognitionEvent::Error(err) => {
                if err.is_benign() {
                    info!("Recognition error absorbed: {}", err);
                } else {
                    error!("Recognition error: {}", err);
                    self.last_error = Some(err);
                }
                self.listening = false;
            }
            RecognitionEvent::End => {
                info!("Recognition session ended");
                self.listening = false;
            }
        }
    }

    /// Drain and apply all pending session events without blocking.
    pub fn pump(&mut self) {
        loop {
            let event = match self.events.as_mut() {
                Some(rx) => match rx.try_recv() {
                    Ok(event) => event,
                    Err(_) => break,
                },
                None => break,
            };
            self.handle_event(event);
        }
    }

    /// Wait for the next session event and apply it. Returns `false` once
    /// the session's event channel has closed.
    pub async fn pump_next(&mut self) -> bool {
        let event = match self.events.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };
        match event {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Take the most recent caller-visible recognition error, if any.
    /// Benign errors ("no-speech", "aborted") never show up here.
    pub fn take_error(&mut self) -> Option<RecognitionError> {
        self.last_error.take()
    }

    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            session_id: self.config.session_id.clone(),
            is_listening: self.listening,
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            final_segments: self.final_segments,
            transcript_chars: self.transcript.chars().count(),
        }
    }
}

impl Drop for TranscriptionController {
    fn drop(&mut self) {
        // Release the capture device regardless of listening state.
        if let Some(session) = self.session.as_mut() {
            session.end_capture();
        }
    }
}
