//! Note details screen controller.
//!
//! # Responsibility
//! - Translate view lifecycle signals (mount, text change, unmount) into
//!   editing session calls.
//! - Publish the derived word count to the navigation parameters.
//!
//! # Invariants
//! - Every content change refreshes the published word count.
//! - Rating fields outside the configured layout never reach the session.
//! - `unmount` commits at most once.

use crate::config::{EditorConfig, RatingLayout};
use crate::model::note::{Note, NoteField};
use crate::navigation::NavigationParams;
use crate::session::edit_session::{NoteEditSession, SessionError};
use crate::session::word_count::{header_display, HeaderDisplay};
use crate::store::note_store::NoteStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    Session(SessionError),
    FieldNotInLayout {
        field: NoteField,
        layout: RatingLayout,
    },
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session(err) => write!(f, "{err}"),
            Self::FieldNotInLayout { field, layout } => {
                write!(f, "field `{field}` is not editable in layout `{layout}`")
            }
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::FieldNotInLayout { .. } => None,
        }
    }
}

impl From<SessionError> for ScreenError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

/// Live details screen bound to one editing session.
pub struct NoteDetailsScreen<S: NoteStore> {
    session: NoteEditSession<S>,
    params: NavigationParams,
    config: EditorConfig,
}

impl<S: NoteStore> NoteDetailsScreen<S> {
    /// Opens the note named by `params` and publishes its initial word count.
    pub fn mount(store: S, mut params: NavigationParams, config: EditorConfig) -> Self {
        let session = NoteEditSession::open(store, params.note_id().clone());
        params.set_word_count(session.word_count());
        Self {
            session,
            params,
            config,
        }
    }

    /// Applies one text change coming from the view.
    pub fn on_change_text(
        &mut self,
        field: NoteField,
        text: impl Into<String>,
    ) -> Result<&Note, ScreenError> {
        let layout = self.config.rating_layout;
        if !layout.accepts(field) {
            return Err(ScreenError::FieldNotInLayout { field, layout });
        }

        let text = text.into();
        if field == NoteField::Content {
            let word_count = self.session.recompute_word_count(&text)?;
            self.params.set_word_count(word_count);
        }
        Ok(self.session.update_field(field, text)?)
    }

    /// Header label for the current word count.
    pub fn header(&self) -> HeaderDisplay {
        header_display(self.session.word_count(), self.config.word_target)
    }

    /// Ends the session; returns the committed note on the first call only.
    pub fn unmount(&mut self) -> Option<Note> {
        self.session.end()
    }

    pub fn note(&self) -> &Note {
        self.session.current()
    }

    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteDetailsScreen, ScreenError};
    use crate::config::{EditorConfig, RatingLayout};
    use crate::model::note::{NoteField, NoteId};
    use crate::navigation::NavigationParams;
    use crate::store::note_store::InMemoryNoteStore;

    #[test]
    fn content_change_publishes_word_count() {
        let store = InMemoryNoteStore::new();
        let mut screen = NoteDetailsScreen::mount(
            &store,
            NavigationParams::new(NoteId::new("s1")),
            EditorConfig::default(),
        );
        assert_eq!(screen.params().word_count(), Some(0));

        screen
            .on_change_text(NoteField::Content, "one two three")
            .unwrap();
        assert_eq!(screen.params().word_count(), Some(3));
        assert_eq!(screen.header().label, "3 / 250");

        screen.on_change_text(NoteField::Title, "t").unwrap();
        assert_eq!(screen.params().word_count(), Some(3));
    }

    #[test]
    fn single_layout_rejects_three_rating_fields() {
        let store = InMemoryNoteStore::new();
        let config = EditorConfig {
            rating_layout: RatingLayout::SingleRating,
            ..EditorConfig::default()
        };
        let mut screen =
            NoteDetailsScreen::mount(&store, NavigationParams::new(NoteId::new("s2")), config);

        let err = screen
            .on_change_text(NoteField::FirstRating, "3")
            .unwrap_err();
        assert_eq!(
            err,
            ScreenError::FieldNotInLayout {
                field: NoteField::FirstRating,
                layout: RatingLayout::SingleRating,
            }
        );
        assert_eq!(screen.note().first_rating, None);

        let note = screen.on_change_text(NoteField::Rating, "5").unwrap();
        assert_eq!(note.rating.as_deref(), Some("5"));
    }

    #[test]
    fn header_uses_configured_target() {
        let store = InMemoryNoteStore::new();
        let config = EditorConfig {
            word_target: 2,
            ..EditorConfig::default()
        };
        let mut screen =
            NoteDetailsScreen::mount(&store, NavigationParams::new(NoteId::new("s3")), config);
        screen.on_change_text(NoteField::Content, "a b c").unwrap();

        let header = screen.header();
        assert_eq!(header.label, "3 / 2");
        assert!(header.reached);
    }

    #[test]
    fn unmount_commits_once_and_closes() {
        let store = InMemoryNoteStore::new();
        let mut screen = NoteDetailsScreen::mount(
            &store,
            NavigationParams::new(NoteId::new("s4")),
            EditorConfig::default(),
        );
        assert!(screen.unmount().is_some());
        assert!(screen.is_closed());
        assert!(screen.unmount().is_none());
        assert!(matches!(
            screen.on_change_text(NoteField::Title, "late"),
            Err(ScreenError::Session(_))
        ));
    }
}
