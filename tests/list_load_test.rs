mod helpers;

use helpers::TestCorpus;
use shelf::corpus::{list, load, CorpusError, ListEntry};

#[test]
fn list_includes_front_matter_metadata() {
    let t = TestCorpus::sample();
    let entries = list(&t.corpus, "instructions").unwrap();

    assert_eq!(entries.len(), 2, "README.txt is not eligible");
    assert!(entries.contains(&ListEntry {
        filename: "example.instructions.md".into(),
        title: "Example Guide".into(),
        description: "Helpful notes".into(),
    }));
    assert!(entries.contains(&ListEntry {
        filename: "python.instructions.md".into(),
        title: "python".into(),
        description: "Python coding conventions".into(),
    }));
}

#[test]
fn list_of_missing_directory_is_empty() {
    let t = TestCorpus::sample();
    t.remove_mode("agents");
    assert!(list(&t.corpus, "agents").unwrap().is_empty());
}

#[test]
fn list_of_unreadable_directory_fails() {
    let t = TestCorpus::empty();
    std::fs::write(t.root().join("agents"), "not a directory").unwrap();
    let err = list(&t.corpus, "agents").unwrap_err();
    assert!(matches!(err, CorpusError::CategoryUnavailable { .. }));
    assert!(err.to_string().contains("agents"));
}

#[test]
fn alias_lists_same_entries_as_canonical() {
    let t = TestCorpus::sample();
    t.write("agents", "reviewer.chatmode.md", "---\ntitle: Reviewer\n---\n");
    let mut via_alias = list(&t.corpus, "chatmodes").unwrap();
    let mut canonical = list(&t.corpus, "agents").unwrap();
    via_alias.sort_by(|a, b| a.filename.cmp(&b.filename));
    canonical.sort_by(|a, b| a.filename.cmp(&b.filename));
    assert_eq!(via_alias, canonical);
    assert_eq!(canonical.len(), 2);
}

#[test]
fn unknown_mode_is_rejected_by_every_operation() {
    let t = TestCorpus::sample();
    for mode in ["example.instructions.md", "chatmode", "INSTRUCTIONS", ""] {
        assert!(
            matches!(list(&t.corpus, mode), Err(CorpusError::InvalidCategory { .. })),
            "list({mode:?})"
        );
        assert!(
            matches!(
                load(&t.corpus, mode, "example.instructions.md"),
                Err(CorpusError::InvalidCategory { .. })
            ),
            "load({mode:?})"
        );
    }
}

#[test]
fn load_returns_file_bytes_unchanged() {
    let t = TestCorpus::sample();
    for entry in list(&t.corpus, "instructions").unwrap() {
        let on_disk =
            std::fs::read_to_string(t.root().join("instructions").join(&entry.filename)).unwrap();
        assert_eq!(load(&t.corpus, "instructions", &entry.filename).unwrap(), on_disk);
    }
}

#[test]
fn load_missing_file_names_mode_and_filename() {
    let t = TestCorpus::sample();
    let err = load(&t.corpus, "prompts", "ghost.prompt.md").unwrap_err();
    assert!(matches!(err, CorpusError::NotFound { .. }));
    let msg = err.to_string();
    assert!(msg.contains("prompts"));
    assert!(msg.contains("ghost.prompt.md"));
}

#[test]
fn load_cannot_escape_mode_directory() {
    let t = TestCorpus::sample();
    std::fs::write(t.root().join("secret.md"), "top secret").unwrap();
    let err = load(&t.corpus, "prompts", "../secret.md").unwrap_err();
    assert!(matches!(err, CorpusError::NotFound { .. }));
}

#[test]
fn list_skips_unreadable_file() {
    let t = TestCorpus::sample();
    std::fs::write(
        t.root().join("instructions").join("binary.md"),
        [b'w', b'i', 0xff, 0xfe],
    )
    .unwrap();

    let entries = list(&t.corpus, "instructions").unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.filename != "binary.md"));
}
