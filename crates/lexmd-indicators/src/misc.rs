//! Indicators that need token lengths or word classes.

use lexmd_math::{checked_ratio, mean};
use lexmd_types::{IndicatorValue, WordClass};

use crate::{EMPTY_DOCUMENT, IndicatorInput, NO_PROFILE};

/// Average token length in characters.
///
/// Uses the profile's per-token lengths when one is supplied, otherwise the
/// character count of each type weighted by its frequency.
pub fn average_token_length(input: &IndicatorInput) -> IndicatorValue {
    if input.n() == 0 {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    }
    if let Some(profile) = input.profile {
        return IndicatorValue::from_option(mean(profile.lengths()), EMPTY_DOCUMENT);
    }
    let chars: usize = input
        .spectrum
        .types()
        .iter()
        .map(|t| t.token.chars().count() * t.count)
        .sum();
    IndicatorValue::from_option(
        checked_ratio(chars as f64, input.n() as f64),
        EMPTY_DOCUMENT,
    )
}

/// Mean distance between consecutive verb positions.
pub fn verb_distances(input: &IndicatorInput) -> IndicatorValue {
    let Some(profile) = input.tagged_profile() else {
        return IndicatorValue::undefined(NO_PROFILE);
    };
    if input.n() == 0 {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    }
    let positions = profile.verb_positions().unwrap_or_default();
    let gaps: Vec<usize> = positions.windows(2).map(|w| w[1] - w[0]).collect();
    IndicatorValue::from_option(mean(&gaps), "fewer than two verbs")
}

fn activity_value(input: &IndicatorInput) -> Result<f64, IndicatorValue> {
    let profile = input
        .tagged_profile()
        .ok_or_else(|| IndicatorValue::undefined(NO_PROFILE))?;
    if input.n() == 0 {
        return Err(IndicatorValue::undefined(EMPTY_DOCUMENT));
    }
    let verbs = profile.count(WordClass::Verb).unwrap_or(0) as f64;
    let adjectives = profile.count(WordClass::Adjective).unwrap_or(0) as f64;
    checked_ratio(verbs, verbs + adjectives)
        .ok_or_else(|| IndicatorValue::undefined("no verbs or adjectives"))
}

/// Activity Q = verbs / (verbs + adjectives).
pub fn activity(input: &IndicatorInput) -> IndicatorValue {
    match activity_value(input) {
        Ok(q) => IndicatorValue::from_f64(q),
        Err(undefined) => undefined,
    }
}

/// Descriptivity D = 1 - Q.
pub fn descriptivity(input: &IndicatorInput) -> IndicatorValue {
    match activity_value(input) {
        Ok(q) => IndicatorValue::from_f64(1.0 - q),
        Err(undefined) => undefined,
    }
}

/// Thematic concentration: weighted share of autosemantic types ranked
/// above the h-point.
pub fn thematic_concentration(input: &IndicatorInput) -> IndicatorValue {
    concentration(input, |_, floor| (1, floor), |h, r| h - r, |h| h * (h - 1.0))
}

/// Secondary thematic concentration over ranks `floor(h)..2*floor(h)`.
pub fn secondary_thematic_concentration(input: &IndicatorInput) -> IndicatorValue {
    concentration(
        input,
        |_, floor| (floor, 2 * floor),
        |h, r| 2.0 * h - r,
        |h| h * (2.0 * h - 1.0),
    )
}

/// Sum of `2 * weight(h, r) * f_r / (norm(h) * f1)` over autosemantic types
/// whose rank lies in the half-open window.
fn concentration(
    input: &IndicatorInput,
    window: impl Fn(f64, usize) -> (usize, usize),
    weight: impl Fn(f64, f64) -> f64,
    norm: impl Fn(f64) -> f64,
) -> IndicatorValue {
    let Some(profile) = input.tagged_profile() else {
        return IndicatorValue::undefined(NO_PROFILE);
    };
    let (Some(h), Some(f1)) = (input.curve.h_point(), input.curve.top_frequency()) else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let (start, end) = window(h.value, h.floor());

    let numerator: f64 = input
        .curve
        .ranked()
        .iter()
        .filter(|point| point.rank >= start && point.rank < end)
        .filter(|point| {
            profile
                .class_of_type(&point.token)
                .is_none_or(WordClass::is_autosemantic)
        })
        .map(|point| 2.0 * weight(h.value, point.rank as f64) * point.frequency as f64)
        .sum();

    if numerator == 0.0 {
        return IndicatorValue::Defined(0.0);
    }
    IndicatorValue::from_option(
        checked_ratio(numerator, norm(h.value) * f1 as f64),
        "zero denominator",
    )
}
