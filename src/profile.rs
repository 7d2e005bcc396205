//! Couple profile types and on-disk persistence.
//!
//! The profile captures who the user and their partner are (names, DISC
//! style, enneagram type, love languages, years married) plus the saved
//! outcome of the last love-language assessment. It is the context both the
//! assessment flow and the reminder scheduler read.
//!
//! File: `~/.alianza/profile.json`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::{Category, ScoreMap};
use crate::error::ProfileError;
use crate::llm::ProfileSummary;

/// DISC communication style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscStyle {
    Dominant,
    Influential,
    Steady,
    Conscientious,
}

impl fmt::Display for DiscStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscStyle::Dominant => "Dominant",
            DiscStyle::Influential => "Influential",
            DiscStyle::Steady => "Steady",
            DiscStyle::Conscientious => "Conscientious",
        };
        f.write_str(name)
    }
}

impl FromStr for DiscStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "dominant" => Ok(DiscStyle::Dominant),
            "i" | "influential" => Ok(DiscStyle::Influential),
            "s" | "steady" => Ok(DiscStyle::Steady),
            "c" | "conscientious" => Ok(DiscStyle::Conscientious),
            other => Err(format!(
                "unknown DISC style {other:?} (expected dominant, influential, steady or conscientious)"
            )),
        }
    }
}

/// The couple profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub partner_name: String,
    pub disc_style: DiscStyle,
    pub enneagram_type: u8,
    pub years_married: u32,
    /// The user's own dominant love language, set by completing the
    /// assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love_language: Option<Category>,
    /// The partner's love language; daily missions are generated from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_love_language: Option<Category>,
    /// Full score map from the user's last assessment run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreMap>,
}

impl UserProfile {
    /// Validate cross-field constraints that serde cannot express.
    pub fn validate(&self) -> std::result::Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::InvalidField {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.partner_name.trim().is_empty() {
            return Err(ProfileError::InvalidField {
                field: "partner_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(1..=9).contains(&self.enneagram_type) {
            return Err(ProfileError::InvalidField {
                field: "enneagram_type".to_string(),
                message: format!("{} is outside 1..=9", self.enneagram_type),
            });
        }
        Ok(())
    }

    /// The slice of the profile that content generation needs, or `None`
    /// when the partner's love language is still unknown.
    pub fn summary(&self) -> Option<ProfileSummary> {
        self.partner_love_language.map(|language| ProfileSummary {
            partner_name: self.partner_name.clone(),
            partner_love_language: language,
        })
    }

    /// Default store path: `~/.alianza/profile.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".alianza")
            .join("profile.json")
    }

    /// Load a profile from `path`.
    pub fn load_from(path: &Path) -> std::result::Result<Self, ProfileError> {
        if !path.exists() {
            return Err(ProfileError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let profile: UserProfile = serde_json::from_str(&contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Save the profile to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> std::result::Result<(), ProfileError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Carlos".to_string(),
            partner_name: "Maria".to_string(),
            disc_style: DiscStyle::Steady,
            enneagram_type: 2,
            years_married: 7,
            love_language: Some(Category::Time),
            partner_love_language: Some(Category::Acts),
            scores: None,
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");

        let profile = sample_profile();
        profile.save_to(&path).unwrap();
        let loaded = UserProfile::load_from(&path).unwrap();

        assert_eq!(loaded.name, profile.name);
        assert_eq!(loaded.partner_name, profile.partner_name);
        assert_eq!(loaded.disc_style, profile.disc_style);
        assert_eq!(loaded.partner_love_language, profile.partner_love_language);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = UserProfile::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound { .. }));
    }

    #[test]
    fn enneagram_type_is_validated() {
        let mut profile = sample_profile();
        profile.enneagram_type = 0;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ProfileError::InvalidField { ref field, .. } if field == "enneagram_type"));

        profile.enneagram_type = 10;
        assert!(profile.validate().is_err());

        profile.enneagram_type = 9;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn summary_requires_partner_love_language() {
        let mut profile = sample_profile();
        let summary = profile.summary().expect("language is set");
        assert_eq!(summary.partner_name, "Maria");
        assert_eq!(summary.partner_love_language, Category::Acts);

        profile.partner_love_language = None;
        assert!(profile.summary().is_none());
    }

    #[test]
    fn optional_fields_may_be_absent_on_disk() {
        let json = r#"{
            "name": "Ana",
            "partner_name": "Luis",
            "disc_style": "conscientious",
            "enneagram_type": 4,
            "years_married": 1
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.love_language.is_none());
        assert!(profile.scores.is_none());
        assert_eq!(profile.disc_style, DiscStyle::Conscientious);
    }
}
