use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemBackend {
    notes: Vec<Note>,
    saves: usize,
    fail_saves: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Makes every later `save` fail, to exercise the unsaved-mutation path.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        if self.fail_saves {
            return Err(NotesError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "memory backend is read-only",
            )));
        }
        self.notes = notes.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(":memory:")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NoteId;

    pub struct StoreFixture {
        pub backend: MemBackend,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
            }
        }

        /// Adds `count` notes titled "Test Note 1".."Test Note N" with dense ids.
        pub fn with_notes(mut self, count: usize) -> Self {
            for _ in 0..count {
                let id = self.next_id();
                let note = Note::new(id, format!("Test Note {}", id), format!("Body {}", id));
                self.backend.notes.push(note);
            }
            self
        }

        pub fn with_note(mut self, title: &str, body: &str) -> Self {
            let id = self.next_id();
            self.backend.notes.push(Note::new(id, title, body));
            self
        }

        /// Pushes a note with an explicit id, for building sparse or broken files.
        pub fn with_raw_note(mut self, id: NoteId, title: &str, body: &str) -> Self {
            self.backend.notes.push(Note::new(id, title, body));
            self
        }

        fn next_id(&self) -> NoteId {
            self.backend.notes.last().map_or(0, |n| n.id) + 1
        }
    }
}
