use serde::{Deserialize, Serialize};

/// Human-facing note identifier.
///
/// Signed so that queries such as `0` or `-3` reach the store and come back as
/// not-found instead of failing to parse. Stored ids are always positive.
pub type NoteId = i64;

/// The single persisted record.
///
/// Field order matters: it is the order of keys in the data file, and reloading
/// then saving an untouched file must reproduce it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    #[serde(rename = "note_id")]
    pub id: NoteId,
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Appends `fragment` using the literal `", "` separator.
    pub fn append_body(&mut self, fragment: &str) {
        self.body.push_str(", ");
        self.body.push_str(fragment);
    }
}
