//! `NoteStore` contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose `find_by_id` / `save` to the editing session.
//! - Provide a mutex-guarded keyed collection for hosts and tests.
//!
//! # Invariants
//! - `save` replaces any existing record with the same id.
//! - `save` runs `Note::validate_for_persistence()` before storing.

use crate::model::note::{Note, NoteId, NoteValidationError};
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-side failure for a save request.
#[derive(Debug)]
pub enum StoreError {
    Validation(NoteValidationError),
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "note store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Keyed note collection consumed by the editing session.
pub trait NoteStore {
    /// Returns a copy of the stored note, if any.
    fn find_by_id(&self, id: &NoteId) -> Option<Note>;
    /// Inserts or replaces the note keyed by its id.
    fn save(&self, note: Note) -> StoreResult<()>;
}

impl<S: NoteStore + ?Sized> NoteStore for &S {
    fn find_by_id(&self, id: &NoteId) -> Option<Note> {
        (**self).find_by_id(id)
    }

    fn save(&self, note: Note) -> StoreResult<()> {
        (**self).save(note)
    }
}

impl<S: NoteStore + ?Sized> NoteStore for Arc<S> {
    fn find_by_id(&self, id: &NoteId) -> Option<Note> {
        (**self).find_by_id(id)
    }

    fn save(&self, note: Note) -> StoreResult<()> {
        (**self).save(note)
    }
}

/// Process-local note collection.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: Mutex<BTreeMap<NoteId, Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `notes`, skipping invalid records.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let store = Self::new();
        for note in notes {
            if let Err(err) = store.save(note) {
                debug!("event=store_seed module=store status=skipped reason={err}");
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All notes ordered by id.
    pub fn notes(&self) -> Vec<Note> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<NoteId, Note>> {
        // A panicked writer cannot leave a half-written entry: inserts are single calls.
        self.notes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteStore for InMemoryNoteStore {
    fn find_by_id(&self, id: &NoteId) -> Option<Note> {
        self.lock().get(id).cloned()
    }

    fn save(&self, note: Note) -> StoreResult<()> {
        note.validate_for_persistence()?;
        self.lock().insert(note.note_id.clone(), note);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryNoteStore, NoteStore, StoreError};
    use crate::model::note::{Note, NoteField, NoteId, NoteValidationError};
    use std::sync::Arc;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note::blank(NoteId::new(id))
            .with_field(NoteField::Title, title)
            .with_field(NoteField::Content, content)
    }

    #[test]
    fn save_replaces_record_with_same_id() {
        let store = InMemoryNoteStore::new();
        store.save(note("a", "first", "body")).unwrap();
        store.save(note("a", "second", "body")).unwrap();

        assert_eq!(store.len(), 1);
        let found = store.find_by_id(&NoteId::new("a")).unwrap();
        assert_eq!(found.title, "second");
    }

    #[test]
    fn save_rejects_empty_content() {
        let store = InMemoryNoteStore::new();
        let err = store.save(note("a", "title", "")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(NoteValidationError::EmptyField(NoteField::Content))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn with_notes_skips_invalid_seed_records() {
        let store = InMemoryNoteStore::with_notes([note("a", "t", "c"), note("b", "", "c")]);
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(&NoteId::new("b")).is_none());
    }

    #[test]
    fn shared_handle_sees_writes() {
        let store = Arc::new(InMemoryNoteStore::new());
        let handle = Arc::clone(&store);
        handle.save(note("x", "t", "c")).unwrap();
        assert!(store.find_by_id(&NoteId::new("x")).is_some());
    }
}
