use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use super::record::Consultation;

/// Maximum number of consultations kept by default.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// JSON-file-backed consultation history, newest first.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<Consultation>,
    max_entries: usize,
}

impl HistoryStore {
    /// Open the history at `path`, loading any existing entries. A missing
    /// file is an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_max_entries(path, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(path: impl Into<PathBuf>, max_entries: usize) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history file: {:?}", path))?;
            let entries: Vec<Consultation> =
                serde_json::from_str(&raw).context("Failed to parse history file")?;
            info!("Loaded {} consultations from history", entries.len());
            entries
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            entries,
            max_entries,
        })
    }

    /// Saved consultations, newest first.
    pub fn consultations(&self) -> &[Consultation] {
        &self.entries
    }

    /// Save a consultation at the front of the history, trimming to the
    /// configured maximum.
    pub fn save(&mut self, consultation: Consultation) -> Result<()> {
        self.entries.insert(0, consultation);
        self.entries.truncate(self.max_entries);
        self.persist()?;
        info!("Consultation saved to history ({} total)", self.entries.len());
        Ok(())
    }

    /// Delete the consultation with the given id. Unknown ids are ignored.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|c| c.id != id);

        if self.entries.len() == before {
            warn!("Consultation {} not found in history", id);
            return Ok(());
        }

        self.persist()?;
        info!("Consultation {} removed from history", id);
        Ok(())
    }

    /// Clear the whole history and remove the backing file.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();

        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove history file: {:?}", self.path))?;
        }

        info!("History cleared");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create history directory")?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write history file: {:?}", self.path))?;

        Ok(())
    }
}
