//! # Lookup
//!
//! Resolves a [`NoteId`] to a position in the note sequence.
//!
//! Two strategies exist and a store uses exactly one of them at a time:
//!
//! - [`LookupMode::Dense`]: ids are exactly `1..N` by position, so the note with
//!   id `k` lives at `k - 1`. Constant time, no scan.
//! - [`LookupMode::Sorted`]: ids strictly increase by position but may have gaps
//!   (a hand-edited or older data file). Binary search over positions.
//!
//! [`LookupMode::detect`] derives the mode from the sequence itself. Callers that
//! mutate the sequence must detect again afterwards; a position computed against a
//! stale length is never valid.

use crate::model::{Note, NoteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Dense,
    Sorted,
}

impl LookupMode {
    /// Picks the strategy for `notes`.
    ///
    /// Returns `None` when ids are not positive and strictly increasing, in which
    /// case neither strategy is correct.
    pub fn detect(notes: &[Note]) -> Option<Self> {
        let mut dense = true;
        let mut previous: NoteId = 0;
        for (position, note) in notes.iter().enumerate() {
            if note.id <= previous {
                return None;
            }
            if note.id != position as NoteId + 1 {
                dense = false;
            }
            previous = note.id;
        }
        Some(if dense { Self::Dense } else { Self::Sorted })
    }

    pub fn position(self, notes: &[Note], id: NoteId) -> Option<usize> {
        match self {
            Self::Dense => dense_position(notes, id),
            Self::Sorted => sorted_position(notes, id),
        }
    }
}

fn dense_position(notes: &[Note], id: NoteId) -> Option<usize> {
    if id < 1 {
        return None;
    }
    let position = usize::try_from(id - 1).ok()?;
    if position >= notes.len() {
        return None;
    }
    debug_assert_eq!(notes[position].id, id, "dense lookup on a non-dense sequence");
    Some(position)
}

fn sorted_position(notes: &[Note], id: NoteId) -> Option<usize> {
    if id < 1 {
        return None;
    }
    notes.binary_search_by_key(&id, |note| note.id).ok()
}
