//! Core domain logic for the journal note details screen.
//! This crate is the single source of truth for note editing invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod screen;
pub mod session;
pub mod store;
pub mod theme;

pub use config::{ConfigError, EditorConfig, RatingLayout};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::note::{
    Note, NoteField, NoteId, NoteValidationError, UnknownFieldError, EMPTY_FIELD_PLACEHOLDER,
};
pub use navigation::NavigationParams;
pub use screen::{NoteDetailsScreen, ScreenError};
pub use session::edit_session::{NoteEditSession, SessionError, SessionState};
pub use session::word_count::{count_words, header_display, HeaderDisplay, DEFAULT_WORD_TARGET};
pub use store::note_store::{InMemoryNoteStore, NoteStore, StoreError, StoreResult};
pub use theme::color::{ColorParseError, Rgb};
pub use theme::{theme, ThemeColors};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
