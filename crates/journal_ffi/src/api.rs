//! FFI use-case API for the Flutter note details screen.
//!
//! # Responsibility
//! - Expose screen lifecycle calls (open, edit, close) to Dart via FRB.
//! - Host the process note store and the live screen sessions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A session id is valid from `note_screen_open` until `note_screen_close`.
//! - Closing a session commits its note exactly once.

use journal_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    theme, EditorConfig, InMemoryNoteStore, NavigationParams, Note, NoteDetailsScreen, NoteField,
    NoteId, NoteStore,
};
use log::warn;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

type HostedScreen = NoteDetailsScreen<Arc<InMemoryNoteStore>>;

static NOTE_STORE: OnceLock<Arc<InMemoryNoteStore>> = OnceLock::new();
static EDITOR_CONFIG: OnceLock<EditorConfig> = OnceLock::new();
static SCREENS: OnceLock<Mutex<HashMap<u64, HostedScreen>>> = OnceLock::new();
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Mints an id for a brand new journal entry.
#[flutter_rust_bridge::frb(sync)]
pub fn new_note_id() -> String {
    NoteId::generate().to_string()
}

/// Note snapshot as seen by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub note_id: String,
    pub title: String,
    pub content: String,
    pub first_rating: Option<String>,
    pub second_rating: Option<String>,
    pub third_rating: Option<String>,
    pub rating: Option<String>,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            note_id: note.note_id.to_string(),
            title: note.title.clone(),
            content: note.content.clone(),
            first_rating: note.first_rating.clone(),
            second_rating: note.second_rating.clone(),
            third_rating: note.third_rating.clone(),
            rating: note.rating.clone(),
        }
    }
}

/// Screen state envelope returned by open/edit calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteScreenResponse {
    pub ok: bool,
    /// Session handle; present whenever the screen is live.
    pub session_id: Option<u64>,
    pub note: Option<NoteView>,
    pub word_count: u32,
    /// Header text such as `"12 / 250"`.
    pub header_label: String,
    pub target_reached: bool,
    pub message: String,
}

impl NoteScreenResponse {
    fn live(session_id: u64, screen: &HostedScreen, message: impl Into<String>) -> Self {
        let header = screen.header();
        Self {
            ok: true,
            session_id: Some(session_id),
            note: Some(NoteView::from(screen.note())),
            word_count: u32::try_from(screen.params().word_count().unwrap_or(0))
                .unwrap_or(u32::MAX),
            header_label: header.label,
            target_reached: header.reached,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            session_id: None,
            note: None,
            word_count: 0,
            header_label: String::new(),
            target_reached: false,
            message: message.into(),
        }
    }
}

/// Result of closing a screen session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCloseResponse {
    pub ok: bool,
    /// Note handed to the store, normalized for persistence.
    pub committed: Option<NoteView>,
    pub message: String,
}

/// Opens the details screen for `note_id`.
///
/// # FFI contract
/// - Binds to the stored note, or a blank one when none exists.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_screen_open(note_id: String) -> NoteScreenResponse {
    let trimmed = note_id.trim();
    if trimmed.is_empty() {
        return NoteScreenResponse::failure("note_screen_open failed: note_id is empty");
    }

    let screen = NoteDetailsScreen::mount(
        Arc::clone(note_store()),
        NavigationParams::new(NoteId::new(trimmed)),
        *editor_config(),
    );
    let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
    let response = NoteScreenResponse::live(session_id, &screen, "Screen opened.");
    lock_screens().insert(session_id, screen);
    response
}

/// Applies one text change from the view.
///
/// `field` uses wire names: `title|content|firstRating|secondRating|thirdRating|rating`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_screen_edit(session_id: u64, field: String, text: String) -> NoteScreenResponse {
    let field = match NoteField::parse(field.as_str()) {
        Ok(field) => field,
        Err(err) => return NoteScreenResponse::failure(format!("note_screen_edit failed: {err}")),
    };

    let mut screens = lock_screens();
    let Some(screen) = screens.get_mut(&session_id) else {
        return NoteScreenResponse::failure(format!(
            "note_screen_edit failed: unknown session {session_id}"
        ));
    };

    if let Err(err) = screen.on_change_text(field, text) {
        return NoteScreenResponse::failure(format!("note_screen_edit failed: {err}"));
    }
    NoteScreenResponse::live(session_id, screen, "Updated.")
}

/// Closes the screen and commits its note.
///
/// # FFI contract
/// - The first close commits and releases the session.
/// - Later closes with the same id report an unknown session.
#[flutter_rust_bridge::frb(sync)]
pub fn note_screen_close(session_id: u64) -> NoteCloseResponse {
    let Some(mut screen) = lock_screens().remove(&session_id) else {
        return NoteCloseResponse {
            ok: false,
            committed: None,
            message: format!("note_screen_close failed: unknown session {session_id}"),
        };
    };

    match screen.unmount() {
        Some(note) => NoteCloseResponse {
            ok: true,
            committed: Some(NoteView::from(&note)),
            message: "Note saved.".to_string(),
        },
        None => {
            warn!("event=screen_close module=ffi status=skipped session_id={session_id}");
            NoteCloseResponse {
                ok: false,
                committed: None,
                message: "note_screen_close: session already ended".to_string(),
            }
        }
    }
}

/// Reads a stored note without opening a screen.
#[flutter_rust_bridge::frb(sync)]
pub fn note_get(note_id: String) -> Option<NoteView> {
    note_store()
        .find_by_id(&NoteId::new(note_id.trim()))
        .as_ref()
        .map(NoteView::from)
}

/// Named theme colors as `(name, #RRGGBB)` pairs.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_colors() -> Vec<(String, String)> {
    theme()
        .entries()
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex))
        .collect()
}

fn note_store() -> &'static Arc<InMemoryNoteStore> {
    NOTE_STORE.get_or_init(|| Arc::new(InMemoryNoteStore::new()))
}

fn editor_config() -> &'static EditorConfig {
    EDITOR_CONFIG.get_or_init(|| {
        EditorConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_load module=ffi status=fallback error={err}");
            EditorConfig::default()
        })
    })
}

fn lock_screens() -> MutexGuard<'static, HashMap<u64, HostedScreen>> {
    SCREENS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
