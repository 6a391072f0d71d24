//! Draft store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for draft persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Whether timed draft saving is enabled.
    pub enabled: bool,
    /// Interval between timed saves in seconds.
    pub interval_secs: u64,
    /// Maximum number of draft versions to keep per resume.
    pub max_versions: usize,
    /// Directory for draft files.
    pub location: PathBuf,
    /// Minimum quiet time after a change before a timed save fires.
    pub debounce_ms: u64,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 30,
            max_versions: 5,
            location: PathBuf::from(".drafts"),
            debounce_ms: 1000,
        }
    }
}

impl DraftConfig {
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_location(mut self, location: PathBuf) -> Self {
        self.location = location;
        self
    }

    pub fn with_max_versions(mut self, max: usize) -> Self {
        self.max_versions = max;
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}
