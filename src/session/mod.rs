//! Transcription session management
//!
//! This module provides the `TranscriptionController` abstraction that
//! manages:
//! - The one recognition session acquired from the detected engine
//! - start/stop/reset commands with idempotent semantics
//! - Accumulation of finalized transcript segments
//! - Error absorption/surfacing and session statistics

mod config;
mod controller;
mod stats;

pub use config::SessionConfig;
pub use controller::{SessionSnapshot, TranscriptionController};
pub use stats::SessionStats;
