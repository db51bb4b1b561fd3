//! Consultation records and local history persistence

mod history;
mod record;

pub use history::{HistoryStore, DEFAULT_MAX_ENTRIES};
pub use record::{Consultation, Diagnosis};
