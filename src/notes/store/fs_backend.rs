use super::backend::{decode_notes, encode_notes, StorageBackend};
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Stores all notes in one JSON file.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Vec<Note>> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(NotesError::Io)?;
        let notes = decode_notes(&content)?;
        debug!(path = %self.data_file.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        let dir = self
            .data_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.ensure_dir(&dir)?;

        let content = encode_notes(notes)?;

        // Atomic write: tmp file in the same directory, then rename
        let tmp_file = dir.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }

        debug!(path = %self.data_file.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
