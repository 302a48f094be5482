//! # lexmd-indicators
//!
//! **Tier 2 (Indicator Library)**
//!
//! Stateless indicator functions over one document's spectrum, curve and
//! (optionally) word-class profile, composed through a keyed registry.
//!
//! ## What belongs here
//! * Frequency-structure indicators (TTR, RR, RRmc, HL, Gini, entropy)
//! * Rank-curve indicators (h, R1, Lambda, R4, L, R, A, alpha)
//! * Word-class indicators (ATL, VD, Q, D, TC, STC)
//! * The registry that names and orders them
//!
//! ## What does NOT belong here
//! * Tokenizing, sorting or I/O
//! * Rounding for display (use `lexmd-report`)

mod frequency;
mod misc;
mod rank;
mod registry;

use lexmd_curve::RankFrequencyCurve;
use lexmd_spectrum::{Spectrum, TokenProfile};

pub use frequency::{entropy, gini, hapax_percentage, relative_repeat_rate, repeat_rate, ttr};
pub use misc::{
    activity, average_token_length, descriptivity, secondary_thematic_concentration,
    thematic_concentration, verb_distances,
};
pub use rank::{adjusted_modulus, curve_length, curve_length_indicator, h_point, lambda, r1, r4, writers_view};
pub use registry::{IndicatorFn, IndicatorRegistry, IndicatorResults};

/// Keys of the standard catalogue, in report order.
pub const STANDARD_KEYS: &[&str] = &[
    "ttr", "h", "r1", "rr", "rrmc", "hl", "lambda", "gini", "r4", "l", "r", "entropy", "a",
    "alpha", "atl", "vd", "q", "d", "tc", "stc",
];

pub(crate) const EMPTY_DOCUMENT: &str = "N = 0";
pub(crate) const NO_TYPES: &str = "V = 0";
pub(crate) const NO_PROFILE: &str = "word-class profile not supplied";

/// Everything an indicator may read for one document.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorInput<'a> {
    pub spectrum: &'a Spectrum,
    pub curve: &'a RankFrequencyCurve,
    pub profile: Option<&'a TokenProfile>,
}

impl<'a> IndicatorInput<'a> {
    pub fn new(spectrum: &'a Spectrum, curve: &'a RankFrequencyCurve) -> Self {
        Self {
            spectrum,
            curve,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: &'a TokenProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub(crate) fn n(&self) -> usize {
        self.spectrum.token_count()
    }

    pub(crate) fn v(&self) -> usize {
        self.spectrum.type_count()
    }

    /// Profile that carries word classes, if any.
    pub(crate) fn tagged_profile(&self) -> Option<&'a TokenProfile> {
        self.profile.filter(|p| p.is_tagged())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use lexmd_types::{TagClassifier, Token};

    pub struct Doc {
        pub spectrum: Spectrum,
        pub curve: RankFrequencyCurve,
        pub profile: Option<TokenProfile>,
    }

    impl Doc {
        pub fn words(tokens: &[&str]) -> Self {
            let spectrum = Spectrum::build(tokens);
            let curve = RankFrequencyCurve::from_spectrum(&spectrum);
            Self {
                spectrum,
                curve,
                profile: None,
            }
        }

        pub fn tagged(pairs: &[(&str, &str)]) -> Self {
            let tokens: Vec<Token> = pairs.iter().map(|(w, t)| Token::tagged(*w, *t)).collect();
            let spectrum = Spectrum::build(tokens.iter().map(|t| t.text.as_str()));
            let curve = RankFrequencyCurve::from_spectrum(&spectrum);
            let profile = TokenProfile::build(&tokens, &TagClassifier::penn());
            Self {
                spectrum,
                curve,
                profile: Some(profile),
            }
        }

        pub fn input(&self) -> IndicatorInput<'_> {
            let input = IndicatorInput::new(&self.spectrum, &self.curve);
            match &self.profile {
                Some(p) => input.with_profile(p),
                None => input,
            }
        }
    }

    pub fn worked_example() -> Doc {
        Doc::words(&["a", "a", "a", "b", "b", "c"])
    }

    pub fn approx(got: lexmd_types::IndicatorValue, want: f64) {
        let v = got.value().unwrap_or_else(|| panic!("expected {want}, got {got:?}"));
        assert!((v - want).abs() < 1e-9, "expected {want}, got {v}");
    }
}
