//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`NoteStore`] loaded for this
//! invocation, applies exactly one operation and describes what happened in a
//! [`CmdResult`]: the notes involved plus leveled messages. Nothing here touches
//! storage or the terminal; the API layer saves, the CLI renders.
//!
//! [`NoteStore`]: crate::store::NoteStore

use crate::model::{Note, NoteId};
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod delete;
pub mod doctor;
pub mod list;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One row of a listing: id and title only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub summaries: Vec<NoteSummary>,
    pub data_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_summaries(mut self, summaries: Vec<NoteSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = Some(path);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

pub(crate) fn not_found(id: NoteId) -> CmdMessage {
    CmdMessage::warning(format!("Note #{} not found.", id))
}
