use roster_core::{
    Gpa, StoreError, Student, StudentField, StudentRepository, StudentStore, ValidationReason,
    DEFAULT_SNAPSHOT_FILE,
};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn student(id: &str, name: &str, major: &str, gpa: &str) -> Student {
    Student::parse(id, name, major, gpa).unwrap()
}

fn open_store() -> (TempDir, StudentStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = StudentStore::open(dir.path().join(DEFAULT_SNAPSHOT_FILE));
    (dir, store)
}

fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join(DEFAULT_SNAPSHOT_FILE)
}

#[test]
fn open_without_snapshot_starts_empty() {
    let (dir, store) = open_store();
    assert!(store.is_empty());
    assert!(!snapshot_path(&dir).exists());
}

#[test]
fn add_persists_and_find_returns_record() {
    let (dir, mut store) = open_store();
    let ada = student("100000000001", "Ada Lovelace", "CS", "3.90");

    store.add(ada.clone()).unwrap();

    assert_eq!(store.find_by_id("100000000001"), Some(&ada));
    assert_eq!(store.find_by_id("999999999999"), None);
    assert!(snapshot_path(&dir).exists());

    let reopened = StudentStore::open(snapshot_path(&dir));
    assert_eq!(reopened.list_all(), vec![ada]);
}

#[test]
fn add_duplicate_id_fails_and_leaves_collection_unchanged() {
    let (_dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();
    let before = store.list_all();

    let err = store
        .add(student("100000000001", "Alan Turing", "Math", "4.00"))
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "100000000001"));
    assert_eq!(store.list_all(), before);
}

#[test]
fn add_rejects_invalid_record_even_when_built_directly() {
    let (_dir, mut store) = open_store();
    let bad = Student {
        id: "12345".to_string(),
        name: "Ada Lovelace".to_string(),
        major: "CS".to_string(),
        gpa: Gpa::ZERO,
    };

    let err = store.add(bad).unwrap_err();
    match err {
        StoreError::Validation(err) => {
            assert_eq!(err.field, StudentField::Id);
            assert_eq!(err.reason, ValidationReason::InvalidIdFormat);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.is_empty());
}

#[test]
fn update_replaces_fields_in_place() {
    let (dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();
    store
        .add(student("100000000002", "Alan Turing", "CS", "4.00"))
        .unwrap();
    store
        .add(student("100000000003", "Grace Hopper", "Navy", "3.70"))
        .unwrap();

    let renamed = student("100000000009", "Alan M. Turing", "Math", "3.99");
    store.update("100000000002", renamed.clone()).unwrap();

    let all = store.list_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[1], renamed);
    assert_eq!(store.find_by_id("100000000002"), None);

    let reopened = StudentStore::open(snapshot_path(&dir));
    assert_eq!(reopened.list_all()[1], renamed);
}

#[test]
fn update_keeping_same_id_is_not_a_duplicate() {
    let (_dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();

    store
        .update(
            "100000000001",
            student("100000000001", "Ada King", "Math", "3.95"),
        )
        .unwrap();

    let ada = store.find_by_id("100000000001").unwrap();
    assert_eq!(ada.name, "Ada King");
    assert_eq!(ada.gpa.to_string(), "3.95");
}

#[test]
fn update_to_existing_id_fails_and_leaves_both_records() {
    let (_dir, mut store) = open_store();
    let first = student("111111111111", "Ada Lovelace", "CS", "3.90");
    let second = student("222222222222", "Alan Turing", "CS", "4.00");
    store.add(first.clone()).unwrap();
    store.add(second.clone()).unwrap();

    let err = store
        .update(
            "111111111111",
            student("222222222222", "Someone Else", "Art", "2.00"),
        )
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "222222222222"));
    assert_eq!(store.list_all(), vec![first, second]);
}

#[test]
fn update_missing_id_returns_not_found() {
    let (_dir, mut store) = open_store();
    let err = store
        .update(
            "100000000001",
            student("100000000001", "Ada Lovelace", "CS", "3.90"),
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref id) if id == "100000000001"));
}

#[test]
fn delete_removes_and_persists() {
    let (dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();
    store
        .add(student("100000000002", "Alan Turing", "CS", "4.00"))
        .unwrap();

    let removed = store.delete("100000000001").unwrap();
    assert_eq!(removed.name, "Ada Lovelace");
    assert_eq!(store.len(), 1);

    let reopened = StudentStore::open(snapshot_path(&dir));
    assert_eq!(reopened.len(), 1);
    assert!(reopened.find_by_id("100000000001").is_none());
}

#[test]
fn delete_missing_id_fails_and_keeps_length() {
    let (_dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();

    let err = store.delete("999999999999").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn list_all_returns_independent_copy() {
    let (_dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();

    let mut copy = store.list_all();
    copy[0].name = "Changed".to_string();
    copy.clear();

    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id("100000000001").unwrap().name, "Ada Lovelace");
}

#[test]
fn save_then_load_roundtrips_collection() {
    let (dir, mut store) = open_store();
    let records = vec![
        student("100000000003", "Grace Hopper", "Navy", "3.70"),
        student("100000000001", "Ada Lovelace", "CS", "3.9"),
        student("100000000002", "Alan Turing", "CS", "4"),
    ];
    for record in &records {
        store.add(record.clone()).unwrap();
    }
    store.save().unwrap();

    let mut fresh = StudentStore::open(snapshot_path(&dir));
    fresh.load();

    let expected: HashSet<_> = records.into_iter().collect();
    let loaded: HashSet<_> = fresh.list_all().into_iter().collect();
    assert_eq!(loaded, expected);
}

#[test]
fn snapshot_file_is_human_readable_json_with_canonical_names() {
    let (dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();

    let text = fs::read_to_string(snapshot_path(&dir)).unwrap();
    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "id": "100000000001", "name": "Ada Lovelace", "major": "CS", "gpa": 3.9 }
        ])
    );
}

#[test]
fn load_reads_legacy_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);
    fs::write(
        &path,
        r#"[{"nim": "100000000001", "name": "Ada Lovelace", "major": "CS", "ipk": 3.9}]"#,
    )
    .unwrap();

    let store = StudentStore::open(&path);
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id("100000000001").unwrap().gpa.to_string(), "3.90");
}

#[test]
fn malformed_snapshot_resets_to_empty() {
    let cases = [
        "not json at all",
        r#"{"id": "100000000001"}"#,
        r#"[{"id": "100000000001", "name": "Ada Lovelace"}]"#,
        r#"[{"id": "1", "name": "Ada Lovelace", "major": "CS", "gpa": 3.9}]"#,
        r#"[{"id": "100000000001", "name": "Ada Lovelace", "major": "CS", "gpa": 3.999999999}]"#,
        r#"[
            {"id": "100000000001", "name": "Ada Lovelace", "major": "CS", "gpa": 3.9},
            {"id": "100000000001", "name": "Alan Turing", "major": "CS", "gpa": 4.0}
        ]"#,
    ];

    for contents in cases {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);
        fs::write(&path, contents).unwrap();

        let store = StudentStore::open(&path);
        assert!(store.is_empty(), "expected reset for {contents}");
    }
}

#[test]
fn load_discards_unsaved_in_memory_state() {
    let (dir, mut store) = open_store();
    store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap();
    fs::remove_file(snapshot_path(&dir)).unwrap();

    store.load();
    assert!(store.is_empty());
}

#[test]
fn failed_persist_rolls_back_and_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the snapshot file should be makes the final rename fail.
    let path = dir.path().join("blocked");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let mut store = StudentStore::open(&path);
    let err = store
        .add(student("100000000001", "Ada Lovelace", "CS", "3.90"))
        .unwrap_err();

    assert!(matches!(err, StoreError::Persistence(_)));
    assert!(store.is_empty());
}
