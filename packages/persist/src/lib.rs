//! # cvforge Persistence
//!
//! Durable storage for the resume store: a whitelisted projection of state
//! ([`PersistedState`]), an ordered schema-migration chain that upgrades
//! old blobs forward without data loss, and pluggable storage backends
//! behind a debounced write engine.
//!
//! ## Lifecycle
//!
//! ```text
//! Store change → queue() → quiet window → poll() → backend.write()
//! Startup      → load()  → migrate v1..=v6 → PersistedState
//! ```
//!
//! Write failures never disturb in-memory state; they are logged and the
//! pending blob is dropped (the next change re-queues a fresh one).

mod error;
mod migrations;
mod schema;
mod storage;

pub use error::PersistError;
pub use migrations::{migrate, SCHEMA_VERSION};
pub use schema::PersistedState;
pub use storage::{FileStorage, MemoryStorage, PersistenceEngine, StorageBackend, FLUSH_DELAY};
