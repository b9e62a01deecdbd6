//! # Note Store
//!
//! The in-memory engine for one invocation: an ordered `Vec<Note>` plus the
//! lookup strategy that is valid for it.
//!
//! Every operation applies fully or not at all. "Not found" is an outcome value
//! ([`DeleteOutcome::NotFound`], [`UpdateOutcome::NotFound`],
//! [`GetOutcome::NotFound`]), never an error.
//!
//! The store tracks whether it was mutated so the caller knows whether a save is
//! needed. It never talks to storage itself.

use crate::compact::{self, compact_after_delete};
use crate::error::{NotesError, Result};
use crate::lookup::LookupMode;
use crate::model::{Note, NoteId};
use tracing::trace;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store already holds the renumbered sequence; `shifted` counts the
    /// survivors whose id went down by one.
    Deleted { note: Note, shifted: usize },
    NotFound,
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(Note),
    NotFound,
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetOutcome<'a> {
    Found(&'a Note),
    NotFound,
}

impl<'a> GetOutcome<'a> {
    pub fn found(self) -> Option<&'a Note> {
        match self {
            GetOutcome::Found(note) => Some(note),
            GetOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    mode: LookupMode,
    dirty: bool,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            mode: LookupMode::Dense,
            dirty: false,
        }
    }

    /// Builds a store over a loaded sequence.
    ///
    /// Ids must be positive and strictly increasing by position. Gaps are
    /// tolerated (the store then uses sorted lookup), anything else is rejected
    /// with the position of the first offending note.
    pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
        let mode = match LookupMode::detect(&notes) {
            Some(mode) => mode,
            None => return Err(ordering_error(&notes)),
        };
        trace!(?mode, len = notes.len(), "note store loaded");
        Ok(Self {
            notes,
            mode,
            dirty: false,
        })
    }

    /// Appends a note with id `max + 1` (1 for an empty store).
    ///
    /// A sparse store whose max id is already `NoteId::MAX` is renumbered to
    /// `1..N` first.
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> Note {
        // ids strictly increase by position, so the last note holds the max
        let next_id = match self.notes.last().map_or(Some(1), |n| n.id.checked_add(1)) {
            Some(id) => id,
            None => {
                self.renumber();
                self.notes.len() as NoteId + 1
            }
        };
        let note = Note::new(next_id, title, body);
        self.notes.push(note.clone());
        self.dirty = true;
        note
    }

    pub fn delete(&mut self, id: NoteId) -> DeleteOutcome {
        let Some(position) = self.mode.position(&self.notes, id) else {
            return DeleteOutcome::NotFound;
        };
        let removed = self.notes.remove(position);
        let shifted = compact_after_delete(&mut self.notes, removed.id);
        self.refresh_mode();
        self.dirty = true;
        DeleteOutcome::Deleted {
            note: removed,
            shifted,
        }
    }

    pub fn replace_body(&mut self, id: NoteId, body: impl Into<String>) -> UpdateOutcome {
        let body = body.into();
        self.update_with(id, |note| note.body = body)
    }

    /// Sets `body = body + ", " + fragment`.
    pub fn append_body(&mut self, id: NoteId, fragment: &str) -> UpdateOutcome {
        self.update_with(id, |note| note.append_body(fragment))
    }

    pub fn get(&self, id: NoteId) -> GetOutcome<'_> {
        match self.mode.position(&self.notes, id) {
            Some(position) => GetOutcome::Found(&self.notes[position]),
            None => GetOutcome::NotFound,
        }
    }

    /// `(id, title)` pairs in store order.
    ///
    /// The iterator is `Clone`, so a consumer can walk it more than once.
    pub fn list_all(&self) -> impl Iterator<Item = (NoteId, &str)> + Clone + '_ {
        self.notes.iter().map(|n| (n.id, n.title.as_str()))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.mode = LookupMode::Dense;
        self.dirty = true;
    }

    /// Reassigns ids `1..N` by position. Returns how many ids changed; the store
    /// is only marked dirty when at least one did.
    pub fn renumber(&mut self) -> usize {
        let changed = compact::renumber(&mut self.notes);
        self.mode = LookupMode::Dense;
        if changed > 0 {
            self.dirty = true;
        }
        changed
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn lookup_mode(&self) -> LookupMode {
        self.mode
    }

    fn update_with(&mut self, id: NoteId, apply: impl FnOnce(&mut Note)) -> UpdateOutcome {
        let Some(position) = self.mode.position(&self.notes, id) else {
            return UpdateOutcome::NotFound;
        };
        let note = &mut self.notes[position];
        apply(note);
        self.dirty = true;
        UpdateOutcome::Updated(note.clone())
    }

    // Deletion keeps ids ordered; only density can change.
    fn refresh_mode(&mut self) {
        let mode = if compact::is_dense(&self.notes) {
            LookupMode::Dense
        } else {
            LookupMode::Sorted
        };
        if mode != self.mode {
            trace!(from = ?self.mode, to = ?mode, "lookup mode changed");
            self.mode = mode;
        }
    }
}

fn ordering_error(notes: &[Note]) -> NotesError {
    let mut previous: NoteId = 0;
    for (position, note) in notes.iter().enumerate() {
        if note.id <= 0 {
            return NotesError::MalformedRecord {
                position,
                reason: format!("note_id must be positive, got {}", note.id),
            };
        }
        if note.id <= previous {
            return NotesError::MalformedRecord {
                position,
                reason: format!(
                    "note_id {} does not follow {} (ids must be unique and increasing)",
                    note.id, previous
                ),
            };
        }
        previous = note.id;
    }
    NotesError::MalformedRecord {
        position: 0,
        reason: "note ids are out of order".to_string(),
    }
}
