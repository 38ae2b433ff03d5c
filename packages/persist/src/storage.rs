//! # Storage Backends & Write Engine
//!
//! [`StorageBackend`] abstracts where the blob lives (a file for the
//! desktop host, memory for tests). [`PersistenceEngine`] sits in front of
//! a backend and debounces writes: every state change queues the latest
//! projection, and one blob hits the backend per quiet window.
//!
//! The engine is poll-driven — the host calls [`PersistenceEngine::poll`]
//! from its event loop with the current instant. No background threads, no
//! timers of its own.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{migrate, PersistError, PersistedState};

/// Quiet window before a queued state is flushed to the backend.
pub const FLUSH_DELAY: Duration = Duration::from_millis(500);

/// Destination for the persisted blob.
pub trait StorageBackend {
    /// Read the stored blob, `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, PersistError>;

    /// Replace the stored blob.
    fn write(&mut self, blob: &str) -> Result<(), PersistError>;
}

/// File-backed storage. The parent directory is created on first write.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>, PersistError> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    blob: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed, for asserting debounce behavior.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>, PersistError> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistError> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Debounced writer + migrating loader over a [`StorageBackend`].
pub struct PersistenceEngine {
    backend: Box<dyn StorageBackend>,
    delay: Duration,
    pending: Option<PersistedState>,
    deadline: Option<Instant>,
}

impl PersistenceEngine {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_delay(backend, FLUSH_DELAY)
    }

    pub fn with_delay(backend: Box<dyn StorageBackend>, delay: Duration) -> Self {
        Self {
            backend,
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Queue the latest projection and (re)arm the flush deadline. The
    /// previous pending state, if any, is superseded — only the newest
    /// blob ever reaches the backend.
    pub fn queue(&mut self, state: PersistedState, now: Instant) {
        self.pending = Some(state);
        self.deadline = Some(now + self.delay);
    }

    /// Write the pending state if its quiet window has elapsed. Returns
    /// whether a write happened. Backend failures are logged and the blob
    /// is dropped; in-memory state is the source of truth regardless.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => false,
        }
    }

    /// Force the pending state out immediately (app shutdown).
    pub fn flush(&mut self) -> bool {
        let Some(state) = self.pending.take() else {
            return false;
        };
        self.deadline = None;

        match serde_json::to_string(&state) {
            Ok(blob) => match self.backend.write(&blob) {
                Ok(()) => {
                    debug!(bytes = blob.len(), "persisted state flushed");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "failed to write persisted state");
                    false
                }
            },
            Err(e) => {
                warn!(error = %e, "failed to encode persisted state");
                false
            }
        }
    }

    /// True when a queued state has not been flushed yet.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Read, migrate, and decode the stored blob. `None` when storage is
    /// empty (first run).
    pub fn load(&self) -> Result<Option<PersistedState>, PersistError> {
        let Some(blob) = self.backend.read()? else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(&blob)?;
        let state = migrate(value)?;
        Ok(Some(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn engine_with_memory(delay_ms: u64) -> PersistenceEngine {
        PersistenceEngine::with_delay(
            Box::new(MemoryStorage::new()),
            Duration::from_millis(delay_ms),
        )
    }

    #[test]
    fn test_poll_before_deadline_does_not_write() {
        let mut engine = engine_with_memory(100);
        let t0 = Instant::now();

        engine.queue(PersistedState::default(), t0);
        assert!(!engine.poll(t0 + Duration::from_millis(50)));
        assert!(engine.has_pending());
        assert!(engine.poll(t0 + Duration::from_millis(100)));
        assert!(!engine.has_pending());
    }

    #[test]
    fn test_rapid_queues_coalesce_into_one_write() {
        let mut engine = engine_with_memory(100);
        let t0 = Instant::now();

        for i in 0..5 {
            let mut state = PersistedState::default();
            state.resume.basics.name = format!("edit {i}");
            engine.queue(state, t0 + Duration::from_millis(i * 10));
        }

        // Deadline tracks the *last* queue.
        assert!(!engine.poll(t0 + Duration::from_millis(120)));
        assert!(engine.poll(t0 + Duration::from_millis(140)));

        let stored = engine.load().unwrap().unwrap();
        assert_eq!(stored.resume.basics.name, "edit 4");
    }

    #[test]
    fn test_load_empty_storage_is_none() {
        let engine = engine_with_memory(100);
        assert!(engine.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cvforge.json");

        let mut engine = PersistenceEngine::with_delay(
            Box::new(FileStorage::new(&path)),
            Duration::from_millis(0),
        );

        let mut state = PersistedState::default();
        state.resume.basics.name = "Persisted".to_string();
        let t0 = Instant::now();
        engine.queue(state.clone(), t0);
        assert!(engine.poll(t0));

        let loaded = PersistenceEngine::new(Box::new(FileStorage::new(&path)))
            .load()
            .unwrap()
            .unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_flush_writes_immediately() {
        let mut engine = engine_with_memory(10_000);
        engine.queue(PersistedState::default(), Instant::now());
        assert!(engine.flush());
        assert!(!engine.flush());
    }
}
