// BDD-style scenario tests for lexmd-explain

use lexmd_explain::{canonical_key, catalog, lookup};

const CANONICAL_KEYS: [&str; 20] = [
    "ttr", "h", "r1", "rr", "rrmc", "hl", "lambda", "gini", "r4", "l", "r", "entropy", "a",
    "alpha", "atl", "vd", "q", "d", "tc", "stc",
];

// ── Scenario: Lookup by canonical key ────────────────────────────────

#[test]
fn given_every_canonical_key_when_lookup_then_all_resolve() {
    for key in CANONICAL_KEYS {
        let text = lookup(key).unwrap_or_else(|| panic!("canonical key '{key}' should resolve"));
        assert!(
            text.starts_with(&format!("{key}: ")),
            "explanation for '{key}' should start with the key"
        );
    }
}

// ── Scenario: Lookup by published abbreviation ───────────────────────

#[test]
fn given_published_abbreviations_when_resolved_then_map_to_keys() {
    let cases = [
        ("TTR", "ttr"),
        ("CL", "l"),
        ("Lambda", "lambda"),
        ("G", "gini"),
        ("HL", "hl"),
        ("RRmc", "rrmc"),
        ("Alpha", "alpha"),
        ("h-point", "h"),
    ];
    for (alias, key) in cases {
        assert_eq!(canonical_key(alias), Some(key), "{alias}");
    }
}

// ── Scenario: Unknown key ────────────────────────────────────────────

#[test]
fn given_unknown_key_when_lookup_then_none() {
    assert_eq!(lookup("yule_k"), None);
    assert_eq!(lookup(""), None);
}

// ── Scenario: Catalog listing ────────────────────────────────────────

#[test]
fn given_catalog_when_listed_then_every_key_appears_once() {
    let text = catalog();
    let keys: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.strip_prefix("- "))
        .collect();
    assert_eq!(keys.len(), CANONICAL_KEYS.len());
    for key in CANONICAL_KEYS {
        assert_eq!(keys.iter().filter(|k| **k == key).count(), 1, "{key}");
    }
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}
