use crate::commands::{CmdMessage, CmdResult};
use crate::store::NoteStore;

/// Closes any gaps in the id sequence so lookups are positional again.
pub fn run(store: &mut NoteStore) -> CmdResult {
    let changed = store.renumber();
    let message = if changed == 0 {
        CmdMessage::info("Note ids are already contiguous.")
    } else {
        CmdMessage::success(format!("Renumbered {} note(s) to close id gaps.", changed))
    };
    CmdResult::default().with_message(message)
}
