//! Fuzz target for settings and coefficient-table TOML parsing.

#![no_main]
use std::collections::BTreeMap;

use lexmd_dimensions::CoefficientSet;
use lexmd_settings::{AnalysisSettings, MAX_DECIMALS};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(settings) = AnalysisSettings::from_toml(s) {
        assert!(!settings.tag_separator.is_empty());
        assert!(settings.decimals.is_none_or(|d| d <= MAX_DECIMALS));
        let _ = settings.classifier();
    }

    if let Ok(set) = CoefficientSet::from_toml(s) {
        assert!(!set.dimensions.is_empty());
        // With no features every dimension is unscored and lists all of its features.
        let scores = set.score(&BTreeMap::new());
        assert_eq!(scores.dimensions.len(), set.dimensions.len());
        for dim in &scores.dimensions {
            assert!(dim.value.is_none());
            assert_eq!(dim.missing.len(), set.dimensions[&dim.name].len());
        }
    }
});
