//! Token documents: the unit of analysis.

use lexmd_spectrum::{SpectrumError, validate_document};
use lexmd_types::Token;
use serde::{Deserialize, Serialize};

/// One document's ordered tokens, with an optional label for reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub tokens: Vec<Token>,
}

impl TokenDocument {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            label: None,
            tokens,
        }
    }

    /// Untagged document from word strings.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words.into_iter().map(Token::new).collect())
    }

    /// Whitespace-separated, already tokenized text.
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Whitespace-separated `word<sep>TAG` pairs, split on the last
    /// separator. A piece without a separator (or with an empty side)
    /// becomes an untagged token.
    pub fn from_tagged_text(text: &str, separator: &str) -> Self {
        let tokens = text
            .split_whitespace()
            .map(|piece| match piece.rsplit_once(separator) {
                Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                    Token::tagged(word, tag)
                }
                _ => Token::new(piece),
            })
            .collect();
        Self::new(tokens)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reject blank tokens and zero length attributes.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        validate_document(&self.tokens)
    }

    pub(crate) fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }
}
