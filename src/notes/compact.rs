//! # Identifier Compaction
//!
//! After a deletion the surviving notes must again carry the ids `1..N`, in the
//! same relative order they had before. [`compact_after_delete`] does this in a
//! single pass: every survivor whose id is above the deleted one moves down by
//! exactly one.
//!
//! A survivor that already sits at its dense position (`id == position + 1`) is
//! left alone. On a freshly shortened dense sequence that guard never fires, but
//! it makes a second pass over an already-compact sequence a no-op.
//!
//! ```text
//! before delete(2):  [1:A] [2:B] [3:C] [4:D]
//! after removal:     [1:A] [3:C] [4:D]
//! after compaction:  [1:A] [2:C] [3:D]
//! ```

use crate::model::{Note, NoteId};
use tracing::debug;

/// Renumbers `survivors` after the note with `deleted_id` was removed.
///
/// `survivors` must be in the original relative order. Returns the number of
/// ids that were decremented.
pub fn compact_after_delete(survivors: &mut [Note], deleted_id: NoteId) -> usize {
    let mut shifted = 0;
    for (position, note) in survivors.iter_mut().enumerate() {
        if note.id > deleted_id && note.id > dense_id(position) {
            note.id -= 1;
            shifted += 1;
        }
    }
    debug!(deleted_id, shifted, "compacted note ids");
    shifted
}

/// Assigns `1..N` by position, regardless of the current ids.
///
/// Used to repair a sequence that is ordered but has gaps.
pub fn renumber(notes: &mut [Note]) -> usize {
    let mut changed = 0;
    for (position, note) in notes.iter_mut().enumerate() {
        let target = dense_id(position);
        if note.id != target {
            note.id = target;
            changed += 1;
        }
    }
    changed
}

/// True when `notes[i].id == i + 1` for every position.
pub fn is_dense(notes: &[Note]) -> bool {
    notes
        .iter()
        .enumerate()
        .all(|(position, note)| note.id == dense_id(position))
}

fn dense_id(position: usize) -> NoteId {
    position as NoteId + 1
}
