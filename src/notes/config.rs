//! # Configuration
//!
//! Everything an invocation needs to know about its environment, resolved once at
//! startup and passed down explicitly. There is no process-wide mutable state.
//!
//! Data file resolution, first match wins:
//! 1. an explicit path (`--file`, or the `NOTES_FILE` environment variable)
//! 2. `--global`: `notes.json` in the user data directory
//! 3. `notes.json` in the current working directory

use crate::error::{NotesError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "notes.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    pub data_file: PathBuf,
    /// 0 = warnings only, 1 = debug, 2+ = trace.
    pub verbosity: u8,
}

impl NotesConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn resolve(explicit: Option<PathBuf>, global: bool, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let path = if path.is_relative() {
                cwd.join(path)
            } else {
                path
            };
            return Ok(Self::new(path));
        }

        if global {
            return Ok(Self::new(global_data_dir()?.join(DATA_FILENAME)));
        }

        Ok(Self::new(cwd.join(DATA_FILENAME)))
    }

    /// Default tracing directive for this verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn global_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "notes", "notes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotesError::Config("Could not determine the user data directory".into()))
}
