//! Indicators read off the rank-frequency curve.

use lexmd_curve::HPoint;
use lexmd_math::checked_ratio;
use lexmd_types::IndicatorValue;

use crate::{EMPTY_DOCUMENT, IndicatorInput, NO_TYPES};

/// The h-point itself.
pub fn h_point(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_option(input.curve.h_point().map(|h| h.value), NO_TYPES)
}

/// Vocabulary richness R1 = h / sqrt(N).
pub fn r1(input: &IndicatorInput) -> IndicatorValue {
    let Some(h) = input.curve.h_point() else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    IndicatorValue::from_option(
        checked_ratio(h.value, (input.n() as f64).sqrt()),
        EMPTY_DOCUMENT,
    )
}

/// Curve length L.
pub fn curve_length(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_f64(input.curve.curve_length())
}

/// Lambda = L * log10(N) / N.
pub fn lambda(input: &IndicatorInput) -> IndicatorValue {
    if input.v() == 0 {
        return IndicatorValue::undefined(NO_TYPES);
    }
    let n = input.n() as f64;
    IndicatorValue::from_option(
        checked_ratio(input.curve.curve_length() * n.log10(), n),
        NO_TYPES,
    )
}

/// Vocabulary richness R4 = 1 - (F(h) - h^2 / 2N).
///
/// For a non-integer h, F(h) is the mean of the cumulative relative
/// frequencies at the two bracketing ranks.
pub fn r4(input: &IndicatorInput) -> IndicatorValue {
    let Some(h) = input.curve.h_point() else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let Some(f_h) = cumulative_at(input, &h) else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let n = input.n() as f64;
    IndicatorValue::from_f64(1.0 - (f_h - h.value * h.value / (2.0 * n)))
}

fn cumulative_at(input: &IndicatorInput, h: &HPoint) -> Option<f64> {
    let floor = h.floor();
    if h.exact || h.value.fract() == 0.0 {
        return input.curve.relative_cumulative(floor);
    }
    let left = input.curve.relative_cumulative(floor)?;
    let right = input.curve.relative_cumulative(floor + 1)?;
    Some((left + right) / 2.0)
}

/// Curve length indicator R = 1 - L_h / L, where L_h is the arc from rank 1
/// to rank floor(h) - 1.
pub fn curve_length_indicator(input: &IndicatorInput) -> IndicatorValue {
    let Some(h) = input.curve.h_point() else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let total = input.curve.curve_length();
    let before_h = input.curve.curve_length_to(h.floor().saturating_sub(1));
    match checked_ratio(before_h, total) {
        Some(share) => IndicatorValue::from_f64(1.0 - share),
        None => IndicatorValue::undefined("L = 0"),
    }
}

/// Adjusted modulus A = sqrt((f1/h)^2 + (V/h)^2) / log10(N).
pub fn adjusted_modulus(input: &IndicatorInput) -> IndicatorValue {
    let (Some(h), Some(f1)) = (input.curve.h_point(), input.curve.top_frequency()) else {
        return IndicatorValue::undefined(NO_TYPES);
    };
    let x = f1 as f64 / h.value;
    let y = input.v() as f64 / h.value;
    let modulus = (x * x + y * y).sqrt();
    IndicatorValue::from_option(
        checked_ratio(modulus, (input.n() as f64).log10()),
        "N = 1",
    )
}

/// Writer's view: cosine of the angle at the h-point between the vectors
/// to `(1, f1)` and `(V, 1)`.
pub fn writers_view(input: &IndicatorInput) -> IndicatorValue {
    let (Some(h), Some(f1)) = (input.curve.h_point(), input.curve.top_frequency()) else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let h = h.value;
    let f1 = f1 as f64;
    let v = input.v() as f64;
    let up = (1.0 - h) * (f1 + v - 2.0 * h);
    let down = ((h - 1.0).powi(2) + (f1 - h).powi(2)).sqrt()
        * ((h - 1.0).powi(2) + (v - h).powi(2)).sqrt();
    IndicatorValue::from_option(checked_ratio(up, down), "zero denominator")
}
