use crate::commands::{CmdMessage, CmdResult};
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, title: String, body: String) -> CmdResult {
    let note = store.add(title, body);
    let message = CmdMessage::success(format!(
        "Added note #{} titled '{}' with body: '{}'",
        note.id, note.title, note.body
    ));
    CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(message)
}
