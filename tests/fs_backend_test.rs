use notes::api::NotesApi;
use notes::error::NotesError;
use notes::model::Note;
use notes::store::backend::StorageBackend;
use notes::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("notes.json"));
    (dir, backend)
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let (_dir, mut backend) = setup();
    let notes = vec![Note::new(1, "A", "x"), Note::new(2, "B", "y")];
    backend.save(&notes).unwrap();
    assert_eq!(backend.load().unwrap(), notes);
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, mut backend) = setup();
    backend.save(&[Note::new(1, "Atomic", "")]).unwrap();
    backend.save(&[Note::new(1, "Atomic", "again")]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["notes.json".to_string()]);
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("notes.json");
    let mut backend = FsBackend::new(&path);
    backend.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_round_trip_is_byte_identical() {
    let (dir, mut backend) = setup();
    let path = dir.path().join("notes.json");
    backend
        .save(&[
            Note::new(1, "groceries", "milk, eggs"),
            Note::new(2, "quote", "\"stay hungry\"\nline two"),
            Note::new(3, "", ""),
        ])
        .unwrap();
    let first = fs::read(&path).unwrap();

    let loaded = backend.load().unwrap();
    backend.save(&loaded).unwrap();
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn test_reads_two_space_indented_file() {
    let (dir, backend) = setup();
    let doc = "[\n  {\n    \"note_id\": 1,\n    \"title\": \"A\",\n    \"body\": \"x\"\n  }\n]";
    fs::write(dir.path().join("notes.json"), doc).unwrap();
    assert_eq!(backend.load().unwrap(), vec![Note::new(1, "A", "x")]);
}

#[test]
fn test_malformed_entry_is_rejected_with_position() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("notes.json"),
        r#"[{"note_id": 1, "title": "A", "body": "x"}, {"id": 2}]"#,
    )
    .unwrap();
    assert!(matches!(
        backend.load(),
        Err(NotesError::MalformedRecord { position: 1, .. })
    ));
}

#[test]
fn test_corrupt_file_is_a_serialization_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("notes.json"), "not json").unwrap();
    assert!(matches!(backend.load(), Err(NotesError::Serialization(_))));
}

#[test]
fn test_untouched_file_is_not_rewritten_by_queries() {
    let (dir, backend) = setup();
    let path = dir.path().join("notes.json");
    // Python-style dump with different spacing; a read must leave it alone
    let doc = r#"[{"note_id": 1, "title": "A", "body": "x"}]"#;
    fs::write(&path, doc).unwrap();

    let api = NotesApi::new(backend);
    api.list_notes().unwrap();
    api.show_notes(&["all"]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), doc);
}

#[cfg(unix)]
#[test]
fn test_unwritable_directory_fails_save() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

    // Root ignores directory permissions; nothing to check there
    if fs::write(locked.join("probe"), "").is_ok() {
        return;
    }

    let mut api = NotesApi::new(FsBackend::new(locked.join("notes.json")));
    let err = api.add_note("A".into(), "x".into()).unwrap_err();
    assert!(matches!(err, NotesError::Io(_)));
    assert!(!locked.join("notes.json").exists());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
}
