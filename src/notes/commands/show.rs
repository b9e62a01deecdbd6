use crate::commands::{not_found, CmdResult};
use crate::index::NoteSelector;
use crate::store::{GetOutcome, NoteStore};

pub fn run(store: &NoteStore, selectors: &[NoteSelector]) -> CmdResult {
    let mut result = CmdResult::default();

    if selectors.contains(&NoteSelector::All) {
        result.listed_notes = store.notes().to_vec();
        return result;
    }

    for selector in selectors {
        let NoteSelector::Id(id) = *selector else {
            continue;
        };
        match store.get(id) {
            GetOutcome::Found(note) => result.listed_notes.push(note.clone()),
            GetOutcome::NotFound => result.add_message(not_found(id)),
        }
    }

    result
}
