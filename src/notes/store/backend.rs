use crate::error::{NotesError, Result};
use crate::model::Note;
use std::path::PathBuf;

/// Abstract interface for durable note storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`NoteStore`](super::NoteStore) handles the "what" (ids, compaction, lookup).
pub trait StorageBackend {
    /// Load the full note sequence in stored order.
    /// Returns an empty sequence, not an error, when nothing was saved yet.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored sequence.
    /// MUST NOT leave a partially written document behind on failure.
    fn save(&mut self, notes: &[Note]) -> Result<()>;

    /// Where the notes live. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

/// Decodes a JSON document into notes, rejecting malformed entries with their
/// position instead of passing untyped data along.
pub fn decode_notes(raw: &str) -> Result<Vec<Note>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            serde_json::from_value::<Note>(entry).map_err(|e| NotesError::MalformedRecord {
                position,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Encodes notes the way they are written to disk: pretty-printed, two-space
/// indent, no trailing newline.
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_document() {
        let notes = decode_notes(r#"[{"note_id": 1, "title": "A", "body": "x"}]"#).unwrap();
        assert_eq!(notes, vec![Note::new(1, "A", "x")]);
        assert!(decode_notes("[]").unwrap().is_empty());
    }

    #[test]
    fn reports_position_of_bad_entry() {
        let raw = r#"[
            {"note_id": 1, "title": "A", "body": "x"},
            {"note_id": "two", "title": "B", "body": "y"}
        ]"#;
        let err = decode_notes(raw).unwrap_err();
        assert!(matches!(err, NotesError::MalformedRecord { position: 1, .. }));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = decode_notes(r#"[{"note_id": 1, "title": "A"}]"#).unwrap_err();
        assert!(matches!(err, NotesError::MalformedRecord { position: 0, .. }));
    }

    #[test]
    fn non_array_document_is_a_serialization_error() {
        let err = decode_notes(r#"{"note_id": 1}"#).unwrap_err();
        assert!(matches!(err, NotesError::Serialization(_)));
    }

    #[test]
    fn encoding_matches_two_space_layout() {
        let encoded = encode_notes(&[Note::new(1, "A", "x")]).unwrap();
        assert_eq!(
            encoded,
            "[\n  {\n    \"note_id\": 1,\n    \"title\": \"A\",\n    \"body\": \"x\"\n  }\n]"
        );
        assert_eq!(encode_notes(&[]).unwrap(), "[]");
    }

    #[test]
    fn decode_then_encode_is_byte_identical() {
        let original = encode_notes(&[Note::new(1, "A", "x"), Note::new(2, "B", "ünïcode")]).unwrap();
        let reencoded = encode_notes(&decode_notes(&original).unwrap()).unwrap();
        assert_eq!(original, reencoded);
    }
}
