//! # lexmd-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free analysis settings. They mirror the CLI flags without any
//! Clap dependency so library consumers can build them directly or load
//! them from a `lexmd.toml`.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values, TOML loading and validation
//!
//! ## What does NOT belong here
//! * Clap parsing (see the `lexmd` binary)
//! * Indicator computation

use std::path::Path;

use lexmd_types::{PENN_ADJECTIVE_TAGS, PENN_FUNCTION_TAGS, PENN_VERB_TAGS, TagClassifier};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lexmd.toml";

/// Largest accepted `decimals` value.
pub const MAX_DECIMALS: u32 = lexmd_math::MAX_DECIMALS;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("decimals must be at most 15, got {0}")]
    InvalidDecimals(u32),

    #[error("tag separator must not be empty")]
    EmptySeparator,
}

/// Part-of-speech tag sets used to classify tagged tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub function_words: Vec<String>,
}

impl Default for TagSettings {
    fn default() -> Self {
        let owned = |tags: &[&str]| -> Vec<String> { tags.iter().map(|t| t.to_string()).collect() };
        Self {
            verbs: owned(PENN_VERB_TAGS),
            adjectives: owned(PENN_ADJECTIVE_TAGS),
            function_words: owned(PENN_FUNCTION_TAGS),
        }
    }
}

/// Settings for one `analyze` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Round rendered values to this many decimals. Never applied to the
    /// computed values themselves.
    pub decimals: Option<u32>,

    /// Restrict the report to these indicator keys (empty = all).
    pub only: Vec<String>,

    /// Separator between word and tag in tagged input (`word_TAG`).
    pub tag_separator: String,

    pub tags: TagSettings,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            decimals: None,
            only: Vec::new(),
            tag_separator: "_".to_string(),
            tags: TagSettings::default(),
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from TOML. Missing fields take their defaults.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(d) = self.decimals.filter(|d| *d > MAX_DECIMALS) {
            return Err(SettingsError::InvalidDecimals(d));
        }
        if self.tag_separator.is_empty() {
            return Err(SettingsError::EmptySeparator);
        }
        Ok(())
    }

    pub fn classifier(&self) -> TagClassifier {
        TagClassifier::from_lists(
            &self.tags.verbs,
            &self.tags.adjectives,
            &self.tags.function_words,
        )
    }
}
