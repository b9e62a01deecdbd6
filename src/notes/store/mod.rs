//! # Storage Layer
//!
//! Two halves live here:
//!
//! - [`note_store::NoteStore`]: the in-memory engine that owns the note sequence
//!   for one invocation and enforces the dense-id invariant.
//! - [`backend::StorageBackend`]: the persistence adapter that loads and saves the
//!   full sequence.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage in a single JSON file
//! - [`mem_backend::MemBackend`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "note_id": 1,
//!     "title": "groceries",
//!     "body": "milk, eggs"
//!   }
//! ]
//! ```
//!
//! The whole file is rewritten on every save.
//!
//! ## Concurrency
//!
//! There is no locking or versioning around the load/save pair. Two invocations
//! running at once can interleave, and the later save silently wins. Making this
//! multi-process safe requires a lock or a version check wrapped around the whole
//! load, mutate, save sequence; nothing in this module provides one.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::{DeleteOutcome, GetOutcome, NoteStore, UpdateOutcome};
