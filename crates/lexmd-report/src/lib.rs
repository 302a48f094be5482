//! # lexmd-report
//!
//! **Tier 3 (Report Assembly & Formatting)**
//!
//! Packages one document's counts and indicator values into an immutable
//! [`Report`], and renders reports as Markdown, TSV, JSON or JSONL.
//!
//! ## What belongs here
//! * The spectrum/curve/results consistency check
//! * Report rendering and display rounding
//!
//! ## What does NOT belong here
//! * Indicator formulas
//! * Output file writing (the CLI prints)

mod render;

use std::collections::{BTreeMap, BTreeSet};

use lexmd_curve::RankFrequencyCurve;
use lexmd_indicators::IndicatorResults;
use lexmd_spectrum::Spectrum;
use lexmd_types::{IndicatorEntry, IndicatorValue, SCHEMA_VERSION, ToolInfo};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use render::{ReportSet, render_json, render_jsonl, render_md, render_tsv};

/// The assembler was handed inputs that do not belong together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("curve was not derived from this spectrum (spectrum {spectrum}, curve {curve})")]
    CurveMismatch { spectrum: String, curve: String },

    #[error("indicator results were computed for curve {results}, not {curve}")]
    ResultsMismatch { curve: String, results: String },

    #[error("indicator '{key}' appears more than once")]
    DuplicateIndicator { key: String },
}

/// Counts and indicator values for one document. Immutable once assembled.
///
/// A `Report` read back with serde has not been through [`assemble`], so
/// nothing ties its counts and values to a spectrum. Use
/// [`Report::matches_spectrum`] before trusting one against source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    schema_version: u32,
    tool: ToolInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    document: Option<String>,
    tokens: usize,
    types: usize,
    hapaxes: usize,
    signature: String,
    indicators: Vec<IndicatorEntry>,
}

/// Combine a spectrum, the curve derived from it and the indicator results
/// computed on that curve.
pub fn assemble(
    spectrum: &Spectrum,
    curve: &RankFrequencyCurve,
    results: IndicatorResults,
) -> Result<Report, ContractViolation> {
    if !curve.is_derived_from(spectrum) {
        return Err(ContractViolation::CurveMismatch {
            spectrum: short(spectrum.signature()),
            curve: short(curve.spectrum_signature()),
        });
    }
    if results.curve_signature() != curve.spectrum_signature() {
        return Err(ContractViolation::ResultsMismatch {
            curve: short(curve.spectrum_signature()),
            results: short(results.curve_signature()),
        });
    }

    let indicators = results.into_entries();
    let mut seen = BTreeSet::new();
    for entry in &indicators {
        if !seen.insert(entry.key.as_str()) {
            return Err(ContractViolation::DuplicateIndicator {
                key: entry.key.clone(),
            });
        }
    }

    debug!(
        tokens = spectrum.token_count(),
        types = spectrum.type_count(),
        indicators = indicators.len(),
        "assembled report"
    );

    Ok(Report {
        schema_version: SCHEMA_VERSION,
        tool: ToolInfo::current(),
        document: None,
        tokens: spectrum.token_count(),
        types: spectrum.type_count(),
        hapaxes: spectrum.hapax_count(),
        signature: spectrum.signature().to_string(),
        indicators,
    })
}

fn short(signature: &str) -> String {
    signature.chars().take(12).collect()
}

impl Report {
    /// Attach a document label (usually the input path).
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.document = Some(label.into());
        self
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn tool(&self) -> &ToolInfo {
        &self.tool
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// N.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// V.
    pub fn types(&self) -> usize {
        self.types
    }

    /// V1.
    pub fn hapaxes(&self) -> usize {
        self.hapaxes
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Whether the stored counts and signature describe `spectrum`.
    pub fn matches_spectrum(&self, spectrum: &Spectrum) -> bool {
        self.signature == spectrum.signature()
            && self.tokens == spectrum.token_count()
            && self.types == spectrum.type_count()
            && self.hapaxes == spectrum.hapax_count()
    }

    pub fn indicators(&self) -> &[IndicatorEntry] {
        &self.indicators
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorValue> {
        self.indicators
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(IndicatorValue::value)
    }

    /// Defined indicator values by key, plus `tokens`, `types` and `hapaxes`.
    pub fn defined_values(&self) -> BTreeMap<String, f64> {
        let mut out: BTreeMap<String, f64> = self
            .indicators
            .iter()
            .filter_map(|e| e.value.value().map(|v| (e.key.clone(), v)))
            .collect();
        out.insert("tokens".to_string(), self.tokens as f64);
        out.insert("types".to_string(), self.types as f64);
        out.insert("hapaxes".to_string(), self.hapaxes as f64);
        out
    }
}
