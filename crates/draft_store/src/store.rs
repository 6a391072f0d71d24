//! Draft snapshot store
//!
//! Each save writes a timestamped JSON snapshot under the configured
//! directory, via a temp file and rename so a crash mid-write never corrupts
//! an existing draft. Saves triggered by the timer are debounced against the
//! last change; `save_now` bypasses the debounce.

use crate::config::DraftConfig;
use crate::error::{DraftError, Result};
use resume_model::ResumeData;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock as StdRwLock};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One persisted draft snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub resume_id: String,
    pub snapshot_id: String,
    /// Unix timestamp in milliseconds.
    pub saved_at: u64,
    pub resume: ResumeData,
}

/// A draft version on disk, newest first in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftVersion {
    pub path: PathBuf,
    pub saved_at: u64,
}

/// Current store status for a UI indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftStatus {
    pub enabled: bool,
    pub has_unsaved_changes: bool,
    pub is_saving: bool,
    pub last_save_time: Option<u64>,
    pub last_error: Option<String>,
}

/// Timed draft persistence for one resume.
pub struct DraftStore {
    config: DraftConfig,
    resume_id: String,
    dirty: AtomicBool,
    last_dirty_time: StdRwLock<Option<Instant>>,
    last_save_time: AtomicU64,
    is_saving: AtomicBool,
    last_error: RwLock<Option<String>>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl DraftStore {
    pub fn new(resume_id: impl Into<String>, config: DraftConfig) -> Self {
        Self {
            config,
            resume_id: resume_id.into(),
            dirty: AtomicBool::new(false),
            last_dirty_time: StdRwLock::new(None),
            last_save_time: AtomicU64::new(0),
            is_saving: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub fn resume_id(&self) -> &str {
        &self.resume_id
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Record that the resume changed. Timed saves debounce against this.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_dirty_time.write() {
            *guard = Some(Instant::now());
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub async fn status(&self) -> DraftStatus {
        let last_save = self.last_save_time.load(Ordering::SeqCst);
        DraftStatus {
            enabled: self.config.enabled,
            has_unsaved_changes: self.dirty.load(Ordering::SeqCst),
            is_saving: self.is_saving.load(Ordering::SeqCst),
            last_save_time: (last_save > 0).then_some(last_save),
            last_error: self.last_error.read().await.clone(),
        }
    }

    fn snapshot_path(&self, saved_at: u64, snapshot_id: &str) -> PathBuf {
        self.config
            .location
            .join(format!("{}.{saved_at}.{snapshot_id}.draft.json", self.resume_id))
    }

    /// Whether the debounce quiet period has passed since the last change.
    fn debounce_elapsed(&self) -> bool {
        match self.last_dirty_time.read() {
            Ok(guard) => match *guard {
                Some(at) => at.elapsed() >= Duration::from_millis(self.config.debounce_ms),
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Save if dirty and the debounce period has passed. Returns whether a
    /// save was performed.
    pub async fn save_if_due(&self, resume: &ResumeData) -> Result<bool> {
        if !self.config.enabled || !self.dirty.load(Ordering::SeqCst) || !self.debounce_elapsed() {
            return Ok(false);
        }
        self.save_now(resume).await?;
        Ok(true)
    }

    /// Save a snapshot immediately, then rotate old versions.
    pub async fn save_now(&self, resume: &ResumeData) -> Result<DraftVersion> {
        if self.is_saving.swap(true, Ordering::SeqCst) {
            // another save is in flight; treat as already saved
            return self
                .latest_version()
                .await?
                .ok_or_else(|| DraftError::NotFound(self.resume_id.clone()));
        }

        let result = self.write_snapshot(resume).await;
        self.is_saving.store(false, Ordering::SeqCst);

        match result {
            Ok(version) => {
                self.dirty.store(false, Ordering::SeqCst);
                self.last_save_time.store(version.saved_at, Ordering::SeqCst);
                *self.last_error.write().await = None;
                self.prune().await?;
                Ok(version)
            }
            Err(e) => {
                *self.last_error.write().await = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn write_snapshot(&self, resume: &ResumeData) -> Result<DraftVersion> {
        tokio::fs::create_dir_all(&self.config.location).await?;

        let saved_at = now_ms();
        let snapshot_id = Uuid::new_v4().simple().to_string();
        let snapshot = DraftSnapshot {
            resume_id: self.resume_id.clone(),
            snapshot_id: snapshot_id.clone(),
            saved_at,
            resume: resume.clone(),
        };

        let path = self.snapshot_path(saved_at, &snapshot_id);
        let tmp = path.with_extension("tmp");
        let json = serde_json::to_vec_pretty(&snapshot)?;
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(resume = %self.resume_id, path = %path.display(), "draft saved");
        Ok(DraftVersion { path, saved_at })
    }

    /// List this resume's draft versions, newest first.
    pub async fn list_versions(&self) -> Result<Vec<DraftVersion>> {
        let mut versions = Vec::new();
        let mut dir = match tokio::fs::read_dir(&self.config.location).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(versions),
            Err(e) => return Err(e.into()),
        };

        let prefix = format!("{}.", self.resume_id);
        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(&prefix) || !name.ends_with(".draft.json") {
                continue;
            }
            let saved_at = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.split('.').next())
                .and_then(|ms| ms.parse::<u64>().ok());
            if let Some(saved_at) = saved_at {
                versions.push(DraftVersion {
                    path: entry.path(),
                    saved_at,
                });
            }
        }

        versions.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(versions)
    }

    async fn latest_version(&self) -> Result<Option<DraftVersion>> {
        Ok(self.list_versions().await?.into_iter().next())
    }

    /// Load the most recent draft snapshot.
    pub async fn load_latest(&self) -> Result<DraftSnapshot> {
        let version = self
            .latest_version()
            .await?
            .ok_or_else(|| DraftError::NotFound(self.resume_id.clone()))?;
        let bytes = tokio::fs::read(&version.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Delete versions beyond `max_versions`, oldest first.
    pub async fn prune(&self) -> Result<()> {
        let versions = self.list_versions().await?;
        for stale in versions.iter().skip(self.config.max_versions) {
            tokio::fs::remove_file(&stale.path).await?;
        }
        Ok(())
    }

    /// Delete every draft for this resume.
    pub async fn clear(&self) -> Result<()> {
        for version in self.list_versions().await? {
            tokio::fs::remove_file(&version.path).await?;
        }
        Ok(())
    }

    /// Spawn the timed save loop. The loop checks on `interval_secs` and
    /// saves when the store is dirty and debounced.
    pub fn start_background_task(
        self: Arc<Self>,
        resume: Arc<RwLock<ResumeData>>,
    ) -> tokio::task::JoinHandle<()> {
        let store = self;
        tokio::spawn(async move {
            let interval = Duration::from_secs(store.config.interval_secs);
            loop {
                tokio::time::sleep(interval).await;
                if !store.config.enabled {
                    continue;
                }
                let guard = resume.read().await;
                if let Err(e) = store.save_if_due(&guard).await {
                    tracing::warn!(error = %e, "timed draft save failed");
                }
            }
        })
    }
}
