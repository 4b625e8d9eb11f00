//! Editor configuration.
//!
//! # Responsibility
//! - Describe which rating fields a screen variant edits.
//! - Carry the header word target.
//! - Resolve overrides from the process environment.
//!
//! # Invariants
//! - `word_target` is always positive.
//! - Title and content are editable in every layout.

use crate::model::note::NoteField;
use crate::session::word_count::DEFAULT_WORD_TARGET;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const WORD_TARGET_ENV: &str = "JOURNAL_WORD_TARGET";
pub const RATING_LAYOUT_ENV: &str = "JOURNAL_RATING_LAYOUT";

/// Rating fields shown by a screen variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingLayout {
    /// Mood, sleep and energy scores.
    #[default]
    ThreeRatings,
    /// One mood score.
    SingleRating,
}

impl RatingLayout {
    /// Rating fields paired with their display labels, in screen order.
    pub fn rating_fields(self) -> &'static [(NoteField, &'static str)] {
        match self {
            Self::ThreeRatings => &[
                (NoteField::FirstRating, "Mood"),
                (NoteField::SecondRating, "Sleep"),
                (NoteField::ThirdRating, "Energy"),
            ],
            Self::SingleRating => &[(NoteField::Rating, "Mood")],
        }
    }

    pub fn accepts(self, field: NoteField) -> bool {
        !field.is_rating()
            || self
                .rating_fields()
                .iter()
                .any(|(candidate, _)| *candidate == field)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "three" | "three_ratings" => Some(Self::ThreeRatings),
            "single" | "single_rating" => Some(Self::SingleRating),
            _ => None,
        }
    }
}

impl Display for RatingLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreeRatings => f.write_str("three_ratings"),
            Self::SingleRating => f.write_str("single_rating"),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWordTarget(String),
    InvalidRatingLayout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWordTarget(value) => write!(
                f,
                "invalid {WORD_TARGET_ENV} `{value}`; expected a positive integer"
            ),
            Self::InvalidRatingLayout(value) => write!(
                f,
                "invalid {RATING_LAYOUT_ENV} `{value}`; expected three|single"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings for one note details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub word_target: usize,
    pub rating_layout: RatingLayout,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_target: DEFAULT_WORD_TARGET,
            rating_layout: RatingLayout::default(),
        }
    }
}

impl EditorConfig {
    /// Reads overrides from `JOURNAL_WORD_TARGET` and `JOURNAL_RATING_LAYOUT`.
    ///
    /// Unset or blank variables keep the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(WORD_TARGET_ENV)) {
            config.word_target = match raw.parse::<usize>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidWordTarget(raw)),
            };
        }

        if let Some(raw) = non_blank(lookup(RATING_LAYOUT_ENV)) {
            config.rating_layout =
                RatingLayout::parse(&raw).ok_or(ConfigError::InvalidRatingLayout(raw))?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
