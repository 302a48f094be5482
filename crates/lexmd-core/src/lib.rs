//! # lexmd-core
//!
//! **Tier 4 (Library Façade)**
//!
//! The primary library interface for `lexmd`. One call takes a token
//! document through spectrum, rank-frequency curve, indicator registry and
//! report assembly.
//!
//! If you are embedding `lexmd` into another Rust application, depend on
//! this crate and `lexmd-types`.
//!
//! ## Example
//!
//! ```rust
//! use lexmd_core::{analyze, settings::AnalysisSettings, TokenDocument};
//!
//! let doc = TokenDocument::from_plain_text("a a a b b c").with_label("sample");
//! let report = analyze(&doc, &AnalysisSettings::default()).unwrap();
//! assert_eq!(report.types(), 3);
//! assert_eq!(report.value("ttr"), Some(0.5));
//! ```
//!
//! ## What belongs here
//! * Pipeline orchestration and batch parallelism
//! * Structured errors and the JSON entry point
//!
//! ## What does NOT belong here
//! * Indicator formulas (see `lexmd-indicators`)
//! * Argument parsing and printing (see the `lexmd` binary)

mod document;
pub mod error;
pub mod ffi;

use lexmd_curve::RankFrequencyCurve;
use lexmd_indicators::{IndicatorInput, IndicatorRegistry};
use lexmd_report::{Report, assemble};
use lexmd_spectrum::{Spectrum, TokenProfile};
use rayon::prelude::*;
use tracing::{debug, info_span};

pub use document::TokenDocument;
pub use error::{ErrorCode, LexmdError};

pub use lexmd_dimensions as dimensions;
pub use lexmd_explain as explain;
pub use lexmd_report as report;
pub use lexmd_settings as settings;
pub use lexmd_types as types;

use lexmd_settings::AnalysisSettings;

/// Analyze one document.
///
/// Indicators that are undefined for this document are reported as such;
/// only malformed input, invalid settings or an internal contract failure
/// return an error.
pub fn analyze(document: &TokenDocument, settings: &AnalysisSettings) -> Result<Report, LexmdError> {
    settings.validate()?;
    let keys = resolve_keys(&settings.only)?;
    analyze_resolved(document, settings, &keys)
}

/// Analyze a plain word sequence with default settings.
pub fn analyze_words<S: AsRef<str>>(words: &[S]) -> Result<Report, LexmdError> {
    let document = TokenDocument::from_words(words.iter().map(|w| w.as_ref().to_string()));
    analyze(&document, &AnalysisSettings::default())
}

/// Analyze many documents in parallel. Reports come back in input order;
/// the first failing document aborts the batch.
pub fn analyze_batch(
    documents: &[TokenDocument],
    settings: &AnalysisSettings,
) -> Result<Vec<Report>, LexmdError> {
    settings.validate()?;
    let keys = resolve_keys(&settings.only)?;
    documents
        .par_iter()
        .map(|doc| analyze_resolved(doc, settings, &keys))
        .collect()
}

/// Map user-facing indicator names (aliases, any case) to registry keys,
/// dropping duplicates. Unknown names are an error.
pub fn resolve_keys<S: AsRef<str>>(only: &[S]) -> Result<Vec<&'static str>, LexmdError> {
    let mut keys: Vec<&'static str> = Vec::with_capacity(only.len());
    for name in only {
        let name = name.as_ref();
        let key = explain::canonical_key(name).ok_or_else(|| LexmdError::unknown_indicator(name))?;
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    Ok(keys)
}

fn analyze_resolved(
    document: &TokenDocument,
    settings: &AnalysisSettings,
    keys: &[&str],
) -> Result<Report, LexmdError> {
    let label = document.label.as_deref().unwrap_or("-");
    let _span = info_span!("analyze", document = label, tokens = document.len()).entered();

    document.validate()?;

    let spectrum = Spectrum::build(document.words());
    let curve = RankFrequencyCurve::from_spectrum(&spectrum);
    let profile = TokenProfile::build(&document.tokens, &settings.classifier());
    let input = IndicatorInput::new(&spectrum, &curve).with_profile(&profile);

    let registry = IndicatorRegistry::standard();
    let results = if keys.is_empty() {
        registry.evaluate(&input)
    } else {
        registry.evaluate_only(&input, keys)
    };

    let report = assemble(&spectrum, &curve, results)?;
    debug!(
        types = report.types(),
        indicators = report.indicators().len(),
        tagged = profile.is_tagged(),
        "document analyzed"
    );

    Ok(match &document.label {
        Some(label) => report.labeled(label.clone()),
        None => report,
    })
}

/// Get the schema version.
pub fn schema_version() -> u32 {
    types::SCHEMA_VERSION
}
