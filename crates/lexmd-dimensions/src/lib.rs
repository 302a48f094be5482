//! # lexmd-dimensions
//!
//! **Tier 3 (Dimension Scoring)**
//!
//! Coefficient tables that combine named features into dimension scores,
//! as weighted linear sums. Tables are explicit, versioned values loaded
//! from TOML and passed to [`CoefficientSet::score`]; nothing is global.
//!
//! ```toml
//! name = "register"
//! version = "1"
//!
//! [dimensions.lexical_density]
//! ttr = 0.8
//! hl = 0.01
//! ```
//!
//! ## What belongs here
//! * The coefficient-table data structure and its validation
//! * Weighted-sum scoring with missing-feature reporting
//!
//! ## What does NOT belong here
//! * Producing the features (tag densities, indicators)

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DimensionError {
    #[error("Failed to read coefficient file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse coefficient TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Coefficient set has no name")]
    MissingName,

    #[error("Coefficient set '{0}' defines no dimensions")]
    NoDimensions(String),

    #[error("Dimension '{0}' has no coefficients")]
    EmptyDimension(String),

    #[error("Coefficient {dimension}.{feature} is not a finite number")]
    NonFiniteWeight { dimension: String, feature: String },
}

/// A named, versioned table of dimension -> {feature -> weight}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dimensions: BTreeMap<String, BTreeMap<String, f64>>,
}

impl CoefficientSet {
    /// Parse and validate a coefficient table from TOML.
    pub fn from_toml(s: &str) -> Result<Self, DimensionError> {
        let set: Self = toml::from_str(s)?;
        set.validate()?;
        Ok(set)
    }

    /// Load a coefficient table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DimensionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), DimensionError> {
        if self.name.trim().is_empty() {
            return Err(DimensionError::MissingName);
        }
        if self.dimensions.is_empty() {
            return Err(DimensionError::NoDimensions(self.name.clone()));
        }
        for (dimension, weights) in &self.dimensions {
            if weights.is_empty() {
                return Err(DimensionError::EmptyDimension(dimension.clone()));
            }
            if let Some(feature) = weights.iter().find(|(_, w)| !w.is_finite()).map(|(f, _)| f) {
                return Err(DimensionError::NonFiniteWeight {
                    dimension: dimension.clone(),
                    feature: feature.clone(),
                });
            }
        }
        Ok(())
    }

    /// Score every dimension against `features`.
    ///
    /// A dimension whose features are not all present gets no value and
    /// lists what was missing.
    pub fn score(&self, features: &BTreeMap<String, f64>) -> DimensionScores {
        let dimensions: Vec<DimensionScore> = self
            .dimensions
            .iter()
            .map(|(name, weights)| {
                let missing: Vec<String> = weights
                    .keys()
                    .filter(|f| !features.contains_key(*f))
                    .cloned()
                    .collect();
                let value = missing.is_empty().then(|| {
                    weights
                        .iter()
                        .map(|(feature, weight)| weight * features[feature])
                        .sum()
                });
                DimensionScore {
                    name: name.clone(),
                    value,
                    missing,
                }
            })
            .collect();

        debug!(
            set = %self.name,
            dimensions = dimensions.len(),
            incomplete = dimensions.iter().filter(|d| d.value.is_none()).count(),
            "scored dimensions"
        );

        DimensionScores {
            set: self.name.clone(),
            version: self.version.clone(),
            dimensions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub set: String,
    pub version: String,
    pub dimensions: Vec<DimensionScore>,
}

impl DimensionScores {
    pub fn get(&self, name: &str) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
name = "register"
version = "1"
description = "toy table"

[dimensions.richness]
ttr = 2.0
hl = 0.5

[dimensions.concentration]
gini = 1.0
tc = -1.0
"#;

    fn features(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn parses_versioned_table() {
        let set = CoefficientSet::from_toml(TABLE).unwrap();
        assert_eq!(set.name, "register");
        assert_eq!(set.version, "1");
        assert_eq!(set.dimensions.len(), 2);
        assert_eq!(set.dimensions["richness"]["ttr"], 2.0);
    }

    #[test]
    fn scores_weighted_sums() {
        let set = CoefficientSet::from_toml(TABLE).unwrap();
        let scores = set.score(&features(&[("ttr", 0.5), ("hl", 40.0), ("gini", 0.25), ("tc", 0.5)]));
        assert_eq!(scores.get("richness").unwrap().value, Some(21.0));
        assert_eq!(scores.get("concentration").unwrap().value, Some(-0.25));
    }

    #[test]
    fn missing_features_are_reported_not_zeroed() {
        let set = CoefficientSet::from_toml(TABLE).unwrap();
        let scores = set.score(&features(&[("ttr", 0.5), ("hl", 40.0), ("gini", 0.25)]));
        let concentration = scores.get("concentration").unwrap();
        assert_eq!(concentration.value, None);
        assert_eq!(concentration.missing, vec!["tc".to_string()]);
        assert!(scores.get("richness").unwrap().missing.is_empty());
    }

    #[test]
    fn rejects_empty_tables() {
        let err = CoefficientSet::from_toml("name = \"x\"\nversion = \"1\"\n[dimensions]\n").unwrap_err();
        assert!(matches!(err, DimensionError::NoDimensions(_)));

        let err = CoefficientSet::from_toml("name = \"x\"\nversion = \"1\"\n[dimensions.a]\n").unwrap_err();
        assert!(matches!(err, DimensionError::EmptyDimension(d) if d == "a"));

        let err = CoefficientSet::from_toml("name = \" \"\nversion = \"1\"\n[dimensions.a]\nx = 1.0\n").unwrap_err();
        assert!(matches!(err, DimensionError::MissingName));
    }

    #[test]
    fn rejects_non_finite_weights() {
        let err = CoefficientSet::from_toml("name = \"x\"\nversion = \"1\"\n[dimensions.a]\nttr = nan\n").unwrap_err();
        assert!(matches!(err, DimensionError::NonFiniteWeight { .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = CoefficientSet::from_toml("name = ").unwrap_err();
        assert!(matches!(err, DimensionError::TomlError(_)));
        assert!(err.to_string().starts_with("Failed to parse coefficient TOML"));
    }
}
