//! Editing session for one note.
//!
//! # Responsibility
//! - Own the note under edit between screen open and screen close.
//! - Keep the derived word count next to the note, never inside it.
//! - Issue exactly one normalized save when editing ends.
//!
//! # Invariants
//! - The store is only read by `open` and only written by `end`.
//! - `end` saves at most once per session; repeats are no-ops.
//! - A session dropped while editing commits through `end`.

use crate::model::note::{Note, NoteField, NoteId};
use crate::session::word_count::count_words;
use crate::store::note_store::NoteStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Ended,
}

/// Rejected session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session already committed; a new one must be started.
    Ended(NoteId),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ended(note_id) => write!(f, "editing session for note {note_id} has ended"),
        }
    }
}

impl Error for SessionError {}

/// In-memory editing context bound to exactly one note.
pub struct NoteEditSession<S: NoteStore> {
    store: S,
    current: Note,
    word_count: usize,
    state: SessionState,
}

impl<S: NoteStore> NoteEditSession<S> {
    /// Starts a session on `initial`, or on a blank note for `note_id`.
    ///
    /// Does not touch the store.
    pub fn start(store: S, initial: Option<Note>, note_id: NoteId) -> Self {
        let from_store = initial.is_some();
        let current = initial.unwrap_or_else(|| Note::blank(note_id));
        let word_count = count_words(&current.content);
        info!(
            "event=session_start module=session status=ok note_id={} existing={}",
            current.note_id, from_store
        );
        Self {
            store,
            current,
            word_count,
            state: SessionState::Editing,
        }
    }

    /// Looks `note_id` up in `store` and starts a session on the result.
    pub fn open(store: S, note_id: NoteId) -> Self {
        let initial = store.find_by_id(&note_id);
        Self::start(store, initial, note_id)
    }

    /// Replaces one field and returns the new current note.
    ///
    /// Content edits do not recompute the word count; call
    /// `recompute_word_count` with the same text.
    pub fn update_field(
        &mut self,
        field: NoteField,
        text: impl Into<String>,
    ) -> Result<&Note, SessionError> {
        self.ensure_editing()?;
        self.current = self.current.with_field(field, text);
        Ok(&self.current)
    }

    /// Recomputes and stores the word count for `text`.
    pub fn recompute_word_count(&mut self, text: &str) -> Result<usize, SessionError> {
        self.ensure_editing()?;
        self.word_count = count_words(text);
        Ok(self.word_count)
    }

    /// Normalizes, saves once and terminates the session.
    ///
    /// Returns the committed note on the first call and `None` afterwards.
    pub fn end(&mut self) -> Option<Note> {
        if self.state == SessionState::Ended {
            debug!(
                "event=session_end module=session status=skipped note_id={} reason=already_ended",
                self.current.note_id
            );
            return None;
        }
        self.state = SessionState::Ended;

        let committed = self.current.normalized_for_commit();
        match self.store.save(committed.clone()) {
            Ok(()) => info!(
                "event=session_end module=session status=ok note_id={} words={}",
                committed.note_id, self.word_count
            ),
            Err(err) => warn!(
                "event=session_end module=session status=error note_id={} error={}",
                committed.note_id, err
            ),
        }
        Some(committed)
    }

    pub fn current(&self) -> &Note {
        &self.current
    }

    pub fn note_id(&self) -> &NoteId {
        &self.current.note_id
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Editing => Ok(()),
            SessionState::Ended => Err(SessionError::Ended(self.current.note_id.clone())),
        }
    }
}

impl<S: NoteStore> Drop for NoteEditSession<S> {
    fn drop(&mut self) {
        if self.state == SessionState::Editing {
            debug!(
                "event=session_drop module=session status=committing note_id={}",
                self.current.note_id
            );
            self.end();
        }
    }
}
