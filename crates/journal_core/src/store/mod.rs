//! Note store contract and the in-process implementation.
//!
//! # Responsibility
//! - Define the narrow lookup/save interface the editing session depends on.
//! - Keep the session constructible against any conforming store.
//!
//! # Invariants
//! - A store holds at most one record per `NoteId`.
//! - Stores reject notes with empty title or content.

pub mod note_store;
