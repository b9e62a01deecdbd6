use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::NoteId;
use crate::store::{NoteStore, UpdateOutcome};

/// Overwrites the body of note `id`.
pub fn replace(store: &mut NoteStore, id: NoteId, body: String) -> CmdResult {
    report(id, store.replace_body(id, body), "Replaced body of")
}

/// Appends `fragment` to the body of note `id`, separated by ", ".
pub fn append(store: &mut NoteStore, id: NoteId, fragment: &str) -> CmdResult {
    report(id, store.append_body(id, fragment), "Appended to")
}

fn report(id: NoteId, outcome: UpdateOutcome, verb: &str) -> CmdResult {
    match outcome {
        UpdateOutcome::Updated(note) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "{} note #{}: {}",
                verb, note.id, note.title
            )))
            .with_affected_notes(vec![note]),
        UpdateOutcome::NotFound => CmdResult::default().with_message(not_found(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Note;

    fn single() -> NoteStore {
        NoteStore::from_notes(vec![Note::new(1, "A", "hi")]).unwrap()
    }

    #[test]
    fn append_joins_with_comma() {
        let mut store = single();
        let result = append(&mut store, 1, "there");
        assert_eq!(result.affected_notes, vec![Note::new(1, "A", "hi, there")]);
        assert_eq!(result.messages[0].content, "Appended to note #1: A");
    }

    #[test]
    fn replace_overwrites_body() {
        let mut store = single();
        let result = replace(&mut store, 1, "bye".into());
        assert_eq!(result.affected_notes[0].body, "bye");
        assert_eq!(store.notes()[0].body, "bye");
    }

    #[test]
    fn unknown_id_reports_warning() {
        let mut store = single();
        let result = append(&mut store, 2, "x");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        let result = replace(&mut store, -1, "x".into());
        assert_eq!(result.messages[0].content, "Note #-1 not found.");
        assert_eq!(store.notes()[0].body, "hi");
    }
}
