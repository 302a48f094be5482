//! # lexmd-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `lexmd`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: The primary contract is the JSON schema, not Rust struct literals.
//! Removed or renamed fields bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Token and word-class types handed over by the tagging collaborator
//! * Indicator values (defined number or explicit undefined marker)
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Indicator formulas (use `lexmd-indicators`)

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for all report types.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "lexmd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One token of a document, as produced by an external tokenizer/tagger.
///
/// `tag` is a part-of-speech label (Penn Treebank by default) and `len` an
/// optional character length; when `len` is absent the length is the number
/// of Unicode scalar values in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: None,
            len: None,
        }
    }

    pub fn tagged(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: Some(tag.into()),
            len: None,
        }
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// Character length of the token, preferring the supplied attribute.
    pub fn char_len(&self) -> usize {
        self.len.unwrap_or_else(|| self.text.chars().count())
    }
}

/// Coarse word class used by the miscellaneous indicator group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Verb,
    Adjective,
    /// Synsemantic word (determiner, preposition, conjunction, ...).
    Function,
    Other,
}

impl WordClass {
    /// Autosemantic words are the ones counted by thematic concentration.
    pub fn is_autosemantic(self) -> bool {
        self != WordClass::Function
    }
}

/// Maps part-of-speech tags onto [`WordClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagClassifier {
    pub verbs: BTreeSet<String>,
    pub adjectives: BTreeSet<String>,
    pub function_words: BTreeSet<String>,
}

pub const PENN_VERB_TAGS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];
pub const PENN_ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];
pub const PENN_FUNCTION_TAGS: &[&str] = &[
    "DT", "CD", "CC", "UH", "EX", "MD", "PP", "PP$", "PRP", "PRP$", "WP", "WP$", "PDT", "WDT",
    "IN", "TO", "WRB",
];

impl TagClassifier {
    /// Penn Treebank tag sets.
    pub fn penn() -> Self {
        Self::from_lists(PENN_VERB_TAGS, PENN_ADJECTIVE_TAGS, PENN_FUNCTION_TAGS)
    }

    pub fn from_lists<S: AsRef<str>>(verbs: &[S], adjectives: &[S], function_words: &[S]) -> Self {
        let collect = |tags: &[S]| {
            tags.iter()
                .map(|t| t.as_ref().trim().to_ascii_uppercase())
                .filter(|t| !t.is_empty())
                .collect()
        };
        Self {
            verbs: collect(verbs),
            adjectives: collect(adjectives),
            function_words: collect(function_words),
        }
    }

    pub fn classify(&self, tag: &str) -> WordClass {
        let tag = tag.trim().to_ascii_uppercase();
        if self.verbs.contains(&tag) {
            WordClass::Verb
        } else if self.adjectives.contains(&tag) {
            WordClass::Adjective
        } else if self.function_words.contains(&tag) {
            WordClass::Function
        } else {
            WordClass::Other
        }
    }
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::penn()
    }
}

/// The value of one indicator for one document.
///
/// `Defined` never holds a non-finite number: use [`IndicatorValue::from_f64`]
/// to fold NaN and infinities into `Undefined`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorValue {
    Defined(f64),
    Undefined(String),
}

impl IndicatorValue {
    pub fn undefined(reason: impl Into<String>) -> Self {
        IndicatorValue::Undefined(reason.into())
    }

    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            IndicatorValue::Defined(value)
        } else {
            IndicatorValue::Undefined("non-finite result".to_string())
        }
    }

    /// `Some(value)` becomes defined (subject to finiteness), `None` undefined.
    pub fn from_option(value: Option<f64>, reason: &str) -> Self {
        match value {
            Some(v) => Self::from_f64(v),
            None => Self::undefined(reason),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            IndicatorValue::Defined(v) => Some(*v),
            IndicatorValue::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, IndicatorValue::Defined(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            IndicatorValue::Defined(_) => None,
            IndicatorValue::Undefined(reason) => Some(reason),
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Defined(v) => write!(f, "{v}"),
            IndicatorValue::Undefined(_) => write!(f, "n/a"),
        }
    }
}

/// A named indicator value, in catalogue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEntry {
    pub key: String,
    pub value: IndicatorValue,
}

impl IndicatorEntry {
    pub fn new(key: impl Into<String>, value: IndicatorValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
