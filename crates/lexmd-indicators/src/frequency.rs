//! Indicators that depend only on the frequency spectrum.

use lexmd_math::{checked_ratio, gini_coefficient, shannon_entropy_bits};
use lexmd_types::IndicatorValue;

use crate::{EMPTY_DOCUMENT, IndicatorInput, NO_TYPES};

/// Type-token ratio V/N.
pub fn ttr(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_option(
        checked_ratio(input.v() as f64, input.n() as f64),
        EMPTY_DOCUMENT,
    )
}

/// Repeat rate: sum of squared relative frequencies.
pub fn repeat_rate(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_option(repeat_rate_value(input), EMPTY_DOCUMENT)
}

fn repeat_rate_value(input: &IndicatorInput) -> Option<f64> {
    let n = input.n();
    if n == 0 {
        return None;
    }
    let n = n as f64;
    Some(
        input
            .spectrum
            .types()
            .iter()
            .map(|t| {
                let p = t.count as f64 / n;
                p * p
            })
            .sum(),
    )
}

/// McIntosh's relative repeat rate (1 - sqrt(RR)) / (1 - 1/sqrt(V)).
pub fn relative_repeat_rate(input: &IndicatorInput) -> IndicatorValue {
    let Some(rr) = repeat_rate_value(input) else {
        return IndicatorValue::undefined(EMPTY_DOCUMENT);
    };
    let v = input.v() as f64;
    IndicatorValue::from_option(
        checked_ratio(1.0 - rr.sqrt(), 1.0 - 1.0 / v.sqrt()),
        "V = 1",
    )
}

/// Hapax legomenon percentage V1/V x 100.
pub fn hapax_percentage(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_option(
        checked_ratio(input.spectrum.hapax_count() as f64 * 100.0, input.v() as f64),
        NO_TYPES,
    )
}

/// Gini coefficient of the rank-frequency distribution, in `[0, 1)`.
///
/// `(V + 1 - 2 * sum(r * p_r)) / V` over descending ranks, which is the
/// standard Gini coefficient of the ascending counts.
pub fn gini(input: &IndicatorInput) -> IndicatorValue {
    if input.v() <= 1 {
        return IndicatorValue::undefined("V <= 1");
    }
    let mut ascending: Vec<usize> = input.curve.frequencies().to_vec();
    ascending.reverse();
    IndicatorValue::from_f64(gini_coefficient(&ascending))
}

/// Shannon entropy in bits; 0 for a single type.
pub fn entropy(input: &IndicatorInput) -> IndicatorValue {
    IndicatorValue::from_option(
        shannon_entropy_bits(input.curve.frequencies()),
        EMPTY_DOCUMENT,
    )
}
