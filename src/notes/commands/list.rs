use crate::commands::{CmdResult, NoteSummary};
use crate::store::NoteStore;

pub fn run(store: &NoteStore) -> CmdResult {
    let summaries = store
        .list_all()
        .map(|(id, title)| NoteSummary {
            id,
            title: title.to_string(),
        })
        .collect();
    CmdResult::default().with_summaries(summaries)
}
