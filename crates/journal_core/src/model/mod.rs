//! Domain model for journal entries.
//!
//! # Responsibility
//! - Define the canonical note record edited by the details screen.
//! - Own field naming shared by the session, store and FFI layers.
//!
//! # Invariants
//! - Every note is identified by a caller-assigned, stable `NoteId`.
//! - Persisted notes never carry an empty title or content.

pub mod note;
