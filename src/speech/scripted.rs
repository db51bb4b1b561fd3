use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::engine::{EventSender, RecognitionSession, SpeechEngine};
use super::events::{RecognitionError, RecognitionEvent, RecognizedSegment, ResultBatch};
use crate::session::SessionConfig;

/// One step of a recognition script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Emit a result batch containing a single segment
    Segment {
        text: String,
        #[serde(rename = "final")]
        is_final: bool,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Emit an error event with the given classification code
    Error { code: String },
}

/// Replays a recorded recognition script through the normal event channel.
///
/// Stands in for a live recognition engine in demos and integration tests,
/// the same role a file-based source plays for audio capture backends. The
/// script is a JSON array of `ScriptStep`s.
pub struct ScriptedEngine {
    script_path: PathBuf,
}

impl ScriptedEngine {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }
}

impl SpeechEngine for ScriptedEngine {
    fn create_session(
        &self,
        _config: &SessionConfig,
        events: EventSender,
    ) -> Result<Box<dyn RecognitionSession>> {
        let raw = std::fs::read_to_string(&self.script_path).with_context(|| {
            format!("Failed to read recognition script: {:?}", self.script_path)
        })?;
        let steps: Vec<ScriptStep> =
            serde_json::from_str(&raw).context("Failed to parse recognition script")?;

        info!("Loaded recognition script: {} steps", steps.len());

        Ok(Box::new(ScriptedSession {
            steps,
            events,
            stopped: Arc::new(AtomicBool::new(false)),
        }))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Session that replays its script on a background task.
///
/// Duplicate-begin protection lives in the controller, so each
/// `begin_capture` starts a fresh replay.
struct ScriptedSession {
    steps: Vec<ScriptStep>,
    events: EventSender,
    stopped: Arc<AtomicBool>,
}

impl RecognitionSession for ScriptedSession {
    fn begin_capture(&mut self) -> Result<()> {
        self.stopped.store(false, Ordering::SeqCst);

        let steps = self.steps.clone();
        let events = self.events.clone();
        let stopped = Arc::clone(&self.stopped);

        tokio::spawn(async move {
            let mut result_index = 0usize;

            for step in steps {
                if stopped.load(Ordering::SeqCst) {
                    break;
                }

                match step {
                    ScriptStep::Segment {
                        text,
                        is_final,
                        delay_ms,
                    } => {
                        if delay_ms > 0 {
                            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        }

                        let batch = ResultBatch {
                            result_index,
                            segments: vec![RecognizedSegment { text, is_final }],
                        };
                        if is_final {
                            result_index += 1;
                        }

                        if events.send(RecognitionEvent::Result(batch)).is_err() {
                            break;
                        }
                    }
                    ScriptStep::Error { code } => {
                        let error = RecognitionError::from_code(&code);
                        if events.send(RecognitionEvent::Error(error)).is_err() {
                            break;
                        }
                    }
                }
            }

            // Script exhausted or stop requested; terminate the way an
            // engine timeout would.
            let _ = events.send(RecognitionEvent::End);
        });

        Ok(())
    }

    fn end_capture(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}
