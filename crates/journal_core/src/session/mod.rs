//! Note editing session state machine.
//!
//! # Responsibility
//! - Hold the note under edit and apply copy-on-write field updates.
//! - Derive the live word count shown in the screen header.
//! - Commit a normalized note to the store exactly once.
//!
//! # Invariants
//! - States are `Editing` then `Ended`; there is no way back.
//! - The commit always reflects the latest edit.

pub mod edit_session;
pub mod word_count;
