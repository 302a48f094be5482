//! Property-based tests for indicator bounds.

use lexmd_curve::RankFrequencyCurve;
use lexmd_indicators::{IndicatorInput, IndicatorRegistry, IndicatorResults};
use lexmd_spectrum::Spectrum;
use proptest::prelude::*;

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-h]{1,2}", 1..300)
}

fn evaluate(tokens: &[String]) -> (Spectrum, IndicatorResults) {
    let spectrum = Spectrum::build(tokens);
    let curve = RankFrequencyCurve::from_spectrum(&spectrum);
    let results = IndicatorRegistry::standard().evaluate(&IndicatorInput::new(&spectrum, &curve));
    (spectrum, results)
}

/// Tokens for a document whose i-th type occurs `counts[i]` times.
fn tokens_with_counts(counts: &[usize]) -> Vec<String> {
    counts
        .iter()
        .enumerate()
        .flat_map(|(i, &count)| std::iter::repeat_n(format!("t{i}"), count))
        .collect()
}

fn entropy_and_gini(counts: &[usize]) -> (f64, f64) {
    let (_, results) = evaluate(&tokens_with_counts(counts));
    let value = |key: &str| results.get(key).and_then(|v| v.value()).unwrap();
    (value("entropy"), value("gini"))
}

#[test]
fn flattening_raises_entropy_and_lowers_gini() {
    let (h_skewed, g_skewed) = entropy_and_gini(&[10, 1, 1]);
    let (h_middle, g_middle) = entropy_and_gini(&[6, 3, 3]);
    let (h_flat, g_flat) = entropy_and_gini(&[4, 4, 4]);
    assert!(h_skewed < h_middle && h_middle < h_flat);
    assert!(g_skewed > g_middle && g_middle > g_flat);
    assert_eq!(g_flat, 0.0);
    assert!((h_flat - 3f64.log2()).abs() < 1e-12);
}

proptest! {
    #[test]
    fn moving_mass_to_the_tail_flattens(counts in prop::collection::vec(1usize..30, 2..7)) {
        let max = *counts.iter().max().unwrap();
        let min = *counts.iter().min().unwrap();
        prop_assume!(max - min >= 2);
        let donor = counts.iter().position(|&c| c == max).unwrap();
        let recipient = counts.iter().position(|&c| c == min).unwrap();

        let mut flatter = counts.clone();
        flatter[donor] -= 1;
        flatter[recipient] += 1;

        let (h_before, g_before) = entropy_and_gini(&counts);
        let (h_after, g_after) = entropy_and_gini(&flatter);
        prop_assert!(h_after > h_before, "entropy {} -> {}", h_before, h_after);
        prop_assert!(g_after < g_before, "gini {} -> {}", g_before, g_after);
    }

    #[test]
    fn gini_is_zero_only_for_equal_frequencies(tokens in arb_tokens()) {
        let spectrum = Spectrum::build(&tokens);
        let curve = RankFrequencyCurve::from_spectrum(&spectrum);
        prop_assume!(curve.type_count() > 1);
        let results = IndicatorRegistry::standard().evaluate(&IndicatorInput::new(&spectrum, &curve));
        let gini = results.get("gini").and_then(|v| v.value()).unwrap();
        let frequencies = curve.frequencies();
        let all_equal = frequencies.windows(2).all(|w| w[0] == w[1]);
        if all_equal {
            prop_assert_eq!(gini, 0.0);
        } else {
            prop_assert!(gini > 0.0, "gini {} for {:?}", gini, frequencies);
        }
    }

    #[test]
    fn ttr_lies_in_unit_interval(tokens in arb_tokens()) {
        let (s, results) = evaluate(&tokens);
        let ttr = results.get("ttr").and_then(|v| v.value()).unwrap();
        prop_assert!(ttr > 0.0 && ttr <= 1.0);
        prop_assert_eq!(ttr == 1.0, s.type_count() == s.token_count());
    }

    #[test]
    fn hapax_percentage_hits_bounds_exactly(tokens in arb_tokens()) {
        let (s, results) = evaluate(&tokens);
        let hl = results.get("hl").and_then(|v| v.value()).unwrap();
        prop_assert_eq!(hl == 0.0, s.hapax_count() == 0);
        prop_assert_eq!(hl == 100.0, s.hapax_count() == s.type_count());
    }

    #[test]
    fn gini_is_a_proper_coefficient(tokens in arb_tokens()) {
        let (s, results) = evaluate(&tokens);
        let gini = results.get("gini").unwrap();
        if s.type_count() <= 1 {
            prop_assert!(!gini.is_defined());
        } else {
            let g = gini.value().unwrap();
            prop_assert!((-1e-12..1.0).contains(&g));
        }
    }

    #[test]
    fn entropy_is_bounded_by_log_v(tokens in arb_tokens()) {
        let (s, results) = evaluate(&tokens);
        let h = results.get("entropy").and_then(|v| v.value()).unwrap();
        prop_assert!(h >= 0.0);
        prop_assert!(h <= (s.type_count() as f64).log2() + 1e-9);
    }

    #[test]
    fn repeat_rate_is_a_probability(tokens in arb_tokens()) {
        let (_, results) = evaluate(&tokens);
        let rr = results.get("rr").and_then(|v| v.value()).unwrap();
        prop_assert!(rr > 0.0 && rr <= 1.0 + 1e-12);
    }

    #[test]
    fn evaluation_is_idempotent(tokens in arb_tokens()) {
        let (_, a) = evaluate(&tokens);
        let (_, b) = evaluate(&tokens);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn defined_values_are_finite(tokens in arb_tokens()) {
        let (_, results) = evaluate(&tokens);
        for entry in results.entries() {
            if let Some(v) = entry.value.value() {
                prop_assert!(v.is_finite(), "{} = {}", entry.key, v);
            }
        }
    }
}
