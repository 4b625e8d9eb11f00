//! Note domain model.
//!
//! # Responsibility
//! - Define the journal entry record and its editable fields.
//! - Provide the commit-time normalization required by the datastore.
//!
//! # Invariants
//! - `note_id` is assigned before editing starts and never regenerated here.
//! - Rating fields are free text; `None` means "not selected".
//! - `normalized_for_commit()` output always passes
//!   `validate_for_persistence()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Placeholder written in place of an empty title/content at commit time.
pub const EMPTY_FIELD_PLACEHOLDER: &str = " ";

/// Opaque, caller-assigned note identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mints a fresh id for a brand new journal entry.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Editable fields of a note.
///
/// `FirstRating`..`ThirdRating` belong to the three-score layout
/// (mood/sleep/energy); `Rating` belongs to the single-score layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    Title,
    Content,
    FirstRating,
    SecondRating,
    ThirdRating,
    Rating,
}

impl NoteField {
    /// Wire name used by the view layer and serialized records.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::FirstRating => "firstRating",
            Self::SecondRating => "secondRating",
            Self::ThirdRating => "thirdRating",
            Self::Rating => "rating",
        }
    }

    /// Parses a wire name. Matching is exact.
    pub fn parse(value: &str) -> Result<Self, UnknownFieldError> {
        match value {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "firstRating" => Ok(Self::FirstRating),
            "secondRating" => Ok(Self::SecondRating),
            "thirdRating" => Ok(Self::ThirdRating),
            "rating" => Ok(Self::Rating),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }

    pub fn is_rating(self) -> bool {
        !matches!(self, Self::Title | Self::Content)
    }
}

impl Display for NoteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Field name did not match any editable note field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown note field: `{}`", self.0)
    }
}

impl Error for UnknownFieldError {}

/// Persistence constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title or content is zero-length.
    EmptyField(NoteField),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "note field `{field}` must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl Note {
    /// Blank note bound to `note_id`: empty title/content, no ratings.
    pub fn blank(note_id: NoteId) -> Self {
        Self {
            note_id,
            title: String::new(),
            content: String::new(),
            first_rating: None,
            second_rating: None,
            third_rating: None,
            rating: None,
        }
    }

    /// Reads one field. Unset ratings read as `None`.
    pub fn field(&self, field: NoteField) -> Option<&str> {
        match field {
            NoteField::Title => Some(self.title.as_str()),
            NoteField::Content => Some(self.content.as_str()),
            NoteField::FirstRating => self.first_rating.as_deref(),
            NoteField::SecondRating => self.second_rating.as_deref(),
            NoteField::ThirdRating => self.third_rating.as_deref(),
            NoteField::Rating => self.rating.as_deref(),
        }
    }

    /// Returns a copy with `field` replaced by `text`.
    pub fn with_field(&self, field: NoteField, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let text = text.into();
        match field {
            NoteField::Title => next.title = text,
            NoteField::Content => next.content = text,
            NoteField::FirstRating => next.first_rating = Some(text),
            NoteField::SecondRating => next.second_rating = Some(text),
            NoteField::ThirdRating => next.third_rating = Some(text),
            NoteField::Rating => next.rating = Some(text),
        }
        next
    }

    /// Copy with empty title/content replaced by a single space.
    ///
    /// Non-empty fields (including whitespace-only ones) pass through as-is.
    pub fn normalized_for_commit(&self) -> Self {
        let mut note = self.clone();
        if note.title.is_empty() {
            note.title = EMPTY_FIELD_PLACEHOLDER.to_string();
        }
        if note.content.is_empty() {
            note.content = EMPTY_FIELD_PLACEHOLDER.to_string();
        }
        note
    }

    /// Checks the datastore rule: title and content must be non-empty.
    pub fn validate_for_persistence(&self) -> Result<(), NoteValidationError> {
        if self.title.is_empty() {
            return Err(NoteValidationError::EmptyField(NoteField::Title));
        }
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyField(NoteField::Content));
        }
        Ok(())
    }
}
