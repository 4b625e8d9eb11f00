//! Per-screen navigation parameters.
//!
//! The host passes `note_id` in; the details screen writes `word_count`
//! back after every content change so the header can read it.

use crate::model::note::NoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationParams {
    note_id: NoteId,
    word_count: Option<usize>,
}

impl NavigationParams {
    pub fn new(note_id: NoteId) -> Self {
        Self {
            note_id,
            word_count: None,
        }
    }

    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    /// Last published word count; `None` until the screen mounts.
    pub fn word_count(&self) -> Option<usize> {
        self.word_count
    }

    pub fn set_word_count(&mut self, word_count: usize) {
        self.word_count = Some(word_count);
    }
}
