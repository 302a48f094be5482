//! Per-token length and word-class profile.

use lexmd_types::{TagClassifier, Token, WordClass};
use rustc_hash::FxHashMap;

use crate::SpectrumError;

/// Token lengths and word classes of one document, in sequence order.
///
/// `classes` is `None` when no token carries a tag. A type's class is the
/// class of its first occurrence.
#[derive(Debug, Clone)]
pub struct TokenProfile {
    lengths: Vec<usize>,
    classes: Option<Vec<WordClass>>,
    type_classes: FxHashMap<String, WordClass>,
}

impl TokenProfile {
    pub fn build(tokens: &[Token], classifier: &TagClassifier) -> Self {
        let lengths = tokens.iter().map(Token::char_len).collect();
        let tagged = tokens.iter().any(|t| t.tag.is_some());
        if !tagged {
            return Self {
                lengths,
                classes: None,
                type_classes: FxHashMap::default(),
            };
        }

        let classes: Vec<WordClass> = tokens
            .iter()
            .map(|t| {
                t.tag
                    .as_deref()
                    .map(|tag| classifier.classify(tag))
                    .unwrap_or(WordClass::Other)
            })
            .collect();

        let mut type_classes = FxHashMap::default();
        for (token, class) in tokens.iter().zip(&classes) {
            type_classes.entry(token.text.clone()).or_insert(*class);
        }

        Self {
            lengths,
            classes: Some(classes),
            type_classes,
        }
    }

    pub fn token_count(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn is_tagged(&self) -> bool {
        self.classes.is_some()
    }

    pub fn classes(&self) -> Option<&[WordClass]> {
        self.classes.as_deref()
    }

    pub fn class_of_type(&self, token: &str) -> Option<WordClass> {
        self.type_classes.get(token).copied()
    }

    /// Number of tokens in `class`; `None` for an untagged document.
    pub fn count(&self, class: WordClass) -> Option<usize> {
        self.classes()
            .map(|classes| classes.iter().filter(|c| **c == class).count())
    }

    /// Sequence positions of verb tokens; `None` for an untagged document.
    pub fn verb_positions(&self) -> Option<Vec<usize>> {
        self.classes().map(|classes| {
            classes
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == WordClass::Verb)
                .map(|(i, _)| i)
                .collect()
        })
    }
}

/// Validate a tagged token sequence before spectrum construction.
pub fn validate_document(tokens: &[Token]) -> Result<(), SpectrumError> {
    for (index, token) in tokens.iter().enumerate() {
        if token.text.trim().is_empty() {
            return Err(SpectrumError::EmptyToken { index });
        }
        if token.len == Some(0) {
            return Err(SpectrumError::ZeroLength { index });
        }
    }
    Ok(())
}
