//! # lexmd-spectrum
//!
//! **Tier 1 (Frequency Spectrum)**
//!
//! Turns one document's token sequence into its frequency spectrum: the
//! mapping from each distinct token (type) to its occurrence count.
//!
//! ## What belongs here
//! * Counting tokens per type, in first-occurrence order
//! * Token-sequence validation
//! * Per-token word-class / length profile for the misc. indicators
//! * The spectrum signature used to pair a curve with its spectrum
//!
//! ## What does NOT belong here
//! * Normalization (case folding, stemming): callers pre-normalize
//! * Rank ordering (use `lexmd-curve`)
//! * Indicator formulas

mod profile;

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

pub use profile::{TokenProfile, validate_document};

/// Errors from token-sequence validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectrumError {
    #[error("token at position {index} is empty")]
    EmptyToken { index: usize },

    #[error("token at position {index} has a zero length attribute")]
    ZeroLength { index: usize },
}

/// One type of the spectrum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub token: String,
    pub count: usize,
    /// Position of the first occurrence in the token sequence.
    pub first_seen: usize,
}

/// Frequency spectrum of one document.
///
/// Invariants: the counts sum to the number of tokens, every count is at
/// least 1, and types are kept in first-occurrence order.
#[derive(Debug, Clone)]
pub struct Spectrum {
    types: Vec<TypeCount>,
    index: FxHashMap<String, usize>,
    tokens: usize,
    signature: String,
}

impl Spectrum {
    /// Count occurrences per distinct token. Never fails; empty input gives
    /// an empty spectrum.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types: Vec<TypeCount> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0usize;

        for (position, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            match index.get(token) {
                Some(&slot) => types[slot].count += 1,
                None => {
                    index.insert(token.to_string(), types.len());
                    types.push(TypeCount {
                        token: token.to_string(),
                        count: 1,
                        first_seen: position,
                    });
                }
            }
            total += 1;
        }

        let signature = signature_of(&types, total);
        debug!(tokens = total, types = types.len(), "built frequency spectrum");

        Self {
            types,
            index,
            tokens: total,
            signature,
        }
    }

    /// Like [`Spectrum::build`], but rejects empty or whitespace-only tokens.
    pub fn try_build<I, S>(tokens: I) -> Result<Self, SpectrumError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        validate_tokens(&tokens)?;
        Ok(Self::build(tokens))
    }

    /// N: number of tokens.
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// V: number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// V1: number of types occurring exactly once.
    pub fn hapax_count(&self) -> usize {
        self.types.iter().filter(|t| t.count == 1).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens == 0
    }

    /// Occurrences of `token`; 0 when it never occurs.
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.types[slot].count)
            .unwrap_or(0)
    }

    /// Types in first-occurrence order.
    pub fn types(&self) -> &[TypeCount] {
        &self.types
    }

    /// Frequency of frequencies: count `m` -> number of types occurring `m` times.
    pub fn frequency_classes(&self) -> BTreeMap<usize, usize> {
        let mut classes = BTreeMap::new();
        for t in &self.types {
            *classes.entry(t.count).or_insert(0) += 1;
        }
        classes
    }

    /// blake3 digest of the (type, count) sequence.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Reject tokens that cannot stand for a word: empty or whitespace-only text.
pub fn validate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<(), SpectrumError> {
    for (index, token) in tokens.iter().enumerate() {
        if token.as_ref().trim().is_empty() {
            return Err(SpectrumError::EmptyToken { index });
        }
    }
    Ok(())
}

fn signature_of(types: &[TypeCount], total: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(total.to_string().as_bytes());
    for t in types {
        hasher.update(b"\n");
        hasher.update(t.token.as_bytes());
        hasher.update(b"\0");
        hasher.update(t.count.to_string().as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_worked_example() {
        let s = Spectrum::build(["a", "a", "a", "b", "b", "c"]);
        assert_eq!(s.token_count(), 6);
        assert_eq!(s.type_count(), 3);
        assert_eq!(s.hapax_count(), 1);
        assert_eq!(s.count("a"), 3);
        assert_eq!(s.count("b"), 2);
        assert_eq!(s.count("c"), 1);
        assert_eq!(s.count("z"), 0);
    }

    #[test]
    fn empty_input_gives_empty_spectrum() {
        let s = Spectrum::build(Vec::<String>::new());
        assert!(s.is_empty());
        assert_eq!(s.type_count(), 0);
        assert_eq!(s.hapax_count(), 0);
    }

    #[test]
    fn types_keep_first_occurrence_order() {
        let s = Spectrum::build(["x", "y", "x", "z", "y", "x"]);
        let order: Vec<&str> = s.types().iter().map(|t| t.token.as_str()).collect();
        assert_eq!(order, ["x", "y", "z"]);
        assert_eq!(s.types()[2].first_seen, 3);
    }

    #[test]
    fn no_case_folding_is_applied() {
        let s = Spectrum::build(["The", "the"]);
        assert_eq!(s.type_count(), 2);
    }

    #[test]
    fn try_build_rejects_blank_tokens() {
        let err = Spectrum::try_build(["ok", " ", "fine"]).unwrap_err();
        assert_eq!(err, SpectrumError::EmptyToken { index: 1 });
        assert!(Spectrum::try_build(["ok"]).is_ok());
    }

    #[test]
    fn frequency_classes_group_types_by_count() {
        let s = Spectrum::build(["a", "a", "b", "b", "c", "d"]);
        let classes = s.frequency_classes();
        assert_eq!(classes.get(&1), Some(&2));
        assert_eq!(classes.get(&2), Some(&2));
    }

    #[test]
    fn signature_distinguishes_count_changes() {
        let a = Spectrum::build(["a", "a", "b"]);
        let b = Spectrum::build(["a", "b", "b"]);
        let c = Spectrum::build(["a", "a", "b"]);
        assert_ne!(a.signature(), b.signature());
        assert_eq!(a.signature(), c.signature());
    }
}
