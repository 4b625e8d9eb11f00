use journal_core::{
    count_words, EditorConfig, InMemoryNoteStore, NavigationParams, Note, NoteDetailsScreen,
    NoteEditSession, NoteField, NoteId, NoteStore, StoreError, StoreResult,
};
use std::cell::RefCell;

/// Fake store that records every save request.
#[derive(Default)]
struct RecordingStore {
    existing: Vec<Note>,
    saved: RefCell<Vec<Note>>,
}

impl RecordingStore {
    fn with_existing(note: Note) -> Self {
        Self {
            existing: vec![note],
            saved: RefCell::default(),
        }
    }

    fn saved(&self) -> Vec<Note> {
        self.saved.borrow().clone()
    }
}

impl NoteStore for RecordingStore {
    fn find_by_id(&self, id: &NoteId) -> Option<Note> {
        self.existing.iter().find(|note| &note.note_id == id).cloned()
    }

    fn save(&self, note: Note) -> StoreResult<()> {
        self.saved.borrow_mut().push(note);
        Ok(())
    }
}

/// Fake store whose saves always fail.
struct FailingStore;

impl NoteStore for FailingStore {
    fn find_by_id(&self, _id: &NoteId) -> Option<Note> {
        None
    }

    fn save(&self, _note: Note) -> StoreResult<()> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

fn note(id: &str, title: &str, content: &str) -> Note {
    Note::blank(NoteId::new(id))
        .with_field(NoteField::Title, title)
        .with_field(NoteField::Content, content)
}

#[test]
fn update_field_replaces_only_the_target_field() {
    let store = RecordingStore::default();
    let mut initial = note("iso", "title", "body");
    initial.first_rating = Some("2".to_string());
    let mut session = NoteEditSession::start(&store, Some(initial.clone()), NoteId::new("iso"));

    for (field, text) in [(NoteField::Title, "new title"), (NoteField::Content, "")] {
        let before = session.current().clone();
        let after = session.update_field(field, text).unwrap().clone();

        assert_eq!(after.field(field), Some(text));
        let mut expected = before.clone();
        match field {
            NoteField::Title => expected.title = text.to_string(),
            _ => expected.content = text.to_string(),
        }
        assert_eq!(after, expected);
    }

    assert_eq!(session.current().first_rating.as_deref(), Some("2"));
    assert_eq!(initial.title, "title");
}

#[test]
fn word_count_examples() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("   "), 0);
    assert_eq!(count_words("a b  c"), 3);
    assert_eq!(count_words("hello"), 1);
}

#[test]
fn end_replaces_empty_title_and_content_with_space() {
    let store = RecordingStore::default();
    let mut session = NoteEditSession::start(&store, None, NoteId::new("e"));

    let committed = session.end().unwrap();
    assert_eq!(committed.title, " ");
    assert_eq!(committed.content, " ");
    assert_eq!(store.saved(), vec![committed]);
}

#[test]
fn end_passes_non_empty_fields_through() {
    let store = RecordingStore::default();
    let mut session =
        NoteEditSession::start(&store, Some(note("p", " padded ", "x")), NoteId::new("p"));

    let committed = session.end().unwrap();
    assert_eq!(committed, note("p", " padded ", "x"));
}

#[test]
fn start_without_existing_note_is_blank() {
    let store = RecordingStore::default();
    let session = NoteEditSession::start(&store, None, NoteId::new("abc"));

    assert_eq!(session.current(), &note("abc", "", ""));
    assert!(store.saved().is_empty());
}

#[test]
fn new_note_scenario_saves_latest_edits_once() {
    let store = RecordingStore::default();
    let mut session = NoteEditSession::open(&store, NoteId::new("n1"));

    session.update_field(NoteField::Title, "Today").unwrap();
    session
        .update_field(NoteField::Content, "Feeling good today")
        .unwrap();
    let words = session.recompute_word_count("Feeling good today").unwrap();
    assert_eq!(words, 3);

    session.end();
    assert_eq!(store.saved(), vec![note("n1", "Today", "Feeling good today")]);
}

#[test]
fn existing_note_scenario_normalizes_empty_content() {
    let store = RecordingStore::with_existing(note("n2", "X", ""));
    let mut session = NoteEditSession::open(&store, NoteId::new("n2"));

    session.end();
    assert_eq!(store.saved(), vec![note("n2", "X", " ")]);
}

#[test]
fn second_end_does_not_save_again() {
    let store = RecordingStore::default();
    let mut session = NoteEditSession::open(&store, NoteId::new("twice"));

    assert!(session.end().is_some());
    assert!(session.end().is_none());
    drop(session);

    assert_eq!(store.saved().len(), 1);
}

#[test]
fn dropping_after_end_does_not_save_again() {
    let store = RecordingStore::default();
    {
        let mut session = NoteEditSession::open(&store, NoteId::new("drop"));
        session.update_field(NoteField::Title, "kept").unwrap();
        session.end();
    }
    assert_eq!(store.saved(), vec![note("drop", "kept", " ")]);
}

#[test]
fn failed_save_still_ends_session() {
    let mut session = NoteEditSession::open(FailingStore, NoteId::new("f"));
    session.update_field(NoteField::Title, "t").unwrap();

    let committed = session.end().unwrap();
    assert_eq!(committed.title, "t");
    assert!(session.is_ended());
    assert!(session.end().is_none());
}

#[test]
fn screen_round_trip_persists_into_memory_store() {
    let store = InMemoryNoteStore::with_notes([note("s", "Morning", "Slept well")]);
    let mut screen = NoteDetailsScreen::mount(
        &store,
        NavigationParams::new(NoteId::new("s")),
        EditorConfig::default(),
    );
    assert_eq!(screen.params().word_count(), Some(2));

    screen.on_change_text(NoteField::FirstRating, "4").unwrap();
    screen
        .on_change_text(NoteField::Content, "Slept well and woke early")
        .unwrap();
    assert_eq!(screen.params().word_count(), Some(5));
    assert!(!screen.header().reached);

    screen.unmount();
    let saved = store.find_by_id(&NoteId::new("s")).unwrap();
    assert_eq!(saved.content, "Slept well and woke early");
    assert_eq!(saved.first_rating.as_deref(), Some("4"));
    assert_eq!(store.len(), 1);
}
