use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::NoteId;
use crate::store::{DeleteOutcome, NoteStore};

pub fn run(store: &mut NoteStore, id: NoteId) -> CmdResult {
    match store.delete(id) {
        DeleteOutcome::Deleted { note, shifted } => {
            let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
                "Deleted note #{}: {}",
                id, note.title
            )));
            if shifted > 0 {
                result.add_message(CmdMessage::info(format!(
                    "{} later note(s) moved down one id.",
                    shifted
                )));
            }
            result.with_affected_notes(vec![note])
        }
        DeleteOutcome::NotFound => CmdResult::default().with_message(not_found(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::model::Note;

    fn abc() -> NoteStore {
        NoteStore::from_notes(vec![
            Note::new(1, "A", ""),
            Note::new(2, "B", ""),
            Note::new(3, "C", ""),
        ])
        .unwrap()
    }

    #[test]
    fn deletes_and_compacts() {
        let mut store = abc();
        let result = run(&mut store, 2);
        assert_eq!(result.affected_notes[0].title, "B");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[1].content, "1 later note(s) moved down one id.");

        let listed = list::run(&store).summaries;
        assert_eq!(listed.len(), 2);
        assert_eq!((listed[1].id, listed[1].title.as_str()), (2, "C"));
    }

    #[test]
    fn deleting_last_note_reports_no_shift() {
        let mut store = abc();
        let result = run(&mut store, 3);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn sparse_store_reports_only_moved_notes() {
        let mut store = NoteStore::from_notes(vec![
            Note::new(1, "A", ""),
            Note::new(4, "B", ""),
            Note::new(7, "C", ""),
        ])
        .unwrap();
        let result = run(&mut store, 4);
        assert_eq!(result.messages[1].content, "1 later note(s) moved down one id.");
        let ids: Vec<_> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn missing_id_is_a_warning_not_an_error() {
        let mut store = abc();
        let result = run(&mut store, 5);
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Note #5 not found.");
        assert!(!store.is_dirty());
    }
}
