//! Fuzz target for the spectrum -> curve -> indicators pipeline.
//!
//! Splits arbitrary UTF-8 on whitespace and checks the counting and
//! ordering invariants, then evaluates every registered indicator.

#![no_main]
use lexmd_curve::RankFrequencyCurve;
use lexmd_indicators::{IndicatorInput, IndicatorRegistry};
use lexmd_spectrum::Spectrum;
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let spectrum = Spectrum::build(&tokens);
    assert_eq!(spectrum.token_count(), tokens.len());
    assert_eq!(
        spectrum.types().iter().map(|t| t.count).sum::<usize>(),
        tokens.len()
    );

    let curve = RankFrequencyCurve::from_spectrum(&spectrum);
    assert!(curve.is_derived_from(&spectrum));
    assert_eq!(curve.type_count(), spectrum.type_count());
    for w in curve.frequencies().windows(2) {
        assert!(w[0] >= w[1], "curve must be non-increasing");
    }

    match curve.h_point() {
        None => assert!(curve.is_empty()),
        Some(h) => {
            assert!(h.value.is_finite());
            assert!(h.value >= 1.0 && h.value <= (curve.type_count() + 1) as f64);
        }
    }

    let input = IndicatorInput::new(&spectrum, &curve);
    let results = IndicatorRegistry::standard().evaluate(&input);
    for entry in results.entries() {
        if let Some(v) = entry.value.value() {
            assert!(v.is_finite(), "{} produced {v}", entry.key);
        }
    }
    if let Some(g) = results.get("gini").and_then(|v| v.value()) {
        assert!((-1e-9..=1.0 + 1e-9).contains(&g), "gini out of range: {g}");
    }
});
