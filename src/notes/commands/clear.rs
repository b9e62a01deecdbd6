use crate::commands::{CmdMessage, CmdResult};
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore) -> CmdResult {
    let removed = store.len();
    store.clear();
    let message = if removed == 0 {
        CmdMessage::info("No notes to clear.")
    } else {
        CmdMessage::success(format!("Cleared {} note(s).", removed))
    };
    CmdResult::default().with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Note;

    #[test]
    fn clears_and_stays_clear() {
        let mut store =
            NoteStore::from_notes(vec![Note::new(1, "A", ""), Note::new(2, "B", "")]).unwrap();

        let first = run(&mut store);
        assert!(store.is_empty());
        assert_eq!(first.messages[0].content, "Cleared 2 note(s).");

        let second = run(&mut store);
        assert!(store.is_empty());
        assert_eq!(second.messages[0].level, MessageLevel::Info);
    }
}
