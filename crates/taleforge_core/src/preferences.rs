//! Story preferences submitted by callers.

use serde::{Deserialize, Serialize};
use taleforge_error::{TaleforgeResult, ValidationError};

/// Word budget for toddler stories.
pub const TODDLER_MAX_WORDS: u32 = 40;

/// Word budget for every other group.
pub const DEFAULT_MAX_WORDS: u32 = 80;

/// Audience a story is written for.
///
/// Only `"toddler"` (in any case, no surrounding whitespace) is special; every
/// other group name is a kid.
///
/// # Examples
///
/// ```
/// use taleforge_core::AgeGroup;
///
/// assert_eq!(AgeGroup::from_group_name("ToDdLeR"), AgeGroup::Toddler);
/// assert_eq!(AgeGroup::from_group_name("teen"), AgeGroup::Kid);
/// assert_eq!(AgeGroup::Toddler.max_words(), 40);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum AgeGroup {
    /// Youngest readers; stories are driven by the image description
    #[display("toddler")]
    Toddler,
    /// Everyone else; stories are driven by the story description
    #[display("kid")]
    Kid,
}

impl AgeGroup {
    /// Classify a free-form group name.
    pub fn from_group_name(group_name: &str) -> Self {
        if group_name.eq_ignore_ascii_case("toddler") {
            Self::Toddler
        } else {
            Self::Kid
        }
    }

    /// Target story length handed to the text model.
    pub fn max_words(self) -> u32 {
        match self {
            Self::Toddler => TODDLER_MAX_WORDS,
            Self::Kid => DEFAULT_MAX_WORDS,
        }
    }
}

/// Preferences posted to `/api/generate-story`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    /// Age group, `"toddler"` or anything else
    pub group_name: String,
    /// Story theme
    pub theme_name: String,
    /// Description used for toddlers
    #[serde(default)]
    pub image_desc: Option<String>,
    /// Description used for everyone else
    #[serde(default)]
    pub story_desc: Option<String>,
    /// Owner of the generated story
    pub user_id: String,
}

impl PreferenceRequest {
    /// The requester's age group.
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_group_name(&self.group_name)
    }

    /// Word budget for the story prompt.
    pub fn max_words(&self) -> u32 {
        self.age_group().max_words()
    }

    /// The group-appropriate description, whichever other fields are set.
    pub fn active_description(&self) -> Option<&str> {
        match self.age_group() {
            AgeGroup::Toddler => self.image_desc.as_deref(),
            AgeGroup::Kid => self.story_desc.as_deref(),
        }
    }

    /// Reject requests that cannot produce a meaningful prompt.
    ///
    /// The inactive description is never inspected.
    pub fn validate(&self) -> TaleforgeResult<()> {
        if self.theme_name.trim().is_empty() {
            return Err(ValidationError::new("themeName is required").into());
        }
        match self.active_description() {
            Some(desc) if !desc.trim().is_empty() => Ok(()),
            _ => {
                let field = match self.age_group() {
                    AgeGroup::Toddler => "imageDesc",
                    AgeGroup::Kid => "storyDesc",
                };
                Err(ValidationError::new(format!(
                    "{} is required for group '{}'",
                    field, self.group_name
                ))
                .into())
            }
        }
    }
}
