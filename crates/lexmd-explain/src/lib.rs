use std::collections::BTreeSet;

struct Entry {
    canonical: &'static str,
    aliases: &'static [&'static str],
    summary: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        canonical: "ttr",
        aliases: &["type_token_ratio"],
        summary: "Type-token ratio V/N; share of distinct words among all tokens.",
    },
    Entry {
        canonical: "h",
        aliases: &["h_point", "hpoint"],
        summary: "Point where rank equals frequency; separates synsemantic from autosemantic vocabulary.",
    },
    Entry {
        canonical: "r1",
        aliases: &["richness_r1"],
        summary: "Vocabulary richness h/sqrt(N).",
    },
    Entry {
        canonical: "rr",
        aliases: &["repeat_rate"],
        summary: "Repeat rate: sum of squared relative frequencies; higher means more repetition.",
    },
    Entry {
        canonical: "rrmc",
        aliases: &["mcintosh", "relative_repeat_rate"],
        summary: "McIntosh's relative repeat rate (1 - sqrt(RR)) / (1 - 1/sqrt(V)).",
    },
    Entry {
        canonical: "hl",
        aliases: &["hapax", "hapax_percentage"],
        summary: "Percentage of types occurring exactly once (V1/V x 100).",
    },
    Entry {
        canonical: "lambda",
        aliases: &["λ"],
        summary: "Curve length scaled by text size: L * log10(N) / N.",
    },
    Entry {
        canonical: "gini",
        aliases: &["g", "gini_coefficient"],
        summary: "Inequality of the rank-frequency distribution; 0 when all types are equally frequent.",
    },
    Entry {
        canonical: "r4",
        aliases: &["richness_r4"],
        summary: "Vocabulary richness 1 - (F(h) - h^2/2N) from the cumulative frequency at the h-point.",
    },
    Entry {
        canonical: "l",
        aliases: &["cl", "curve_length"],
        summary: "Euclidean arc length of the rank-frequency curve.",
    },
    Entry {
        canonical: "r",
        aliases: &["cli", "curve_length_indicator"],
        summary: "Share of curve length past the h-point: 1 - L_h / L.",
    },
    Entry {
        canonical: "entropy",
        aliases: &["shannon"],
        summary: "Shannon entropy of the word distribution in bits.",
    },
    Entry {
        canonical: "a",
        aliases: &["adjusted_modulus", "modulus"],
        summary: "Adjusted modulus sqrt((f1/h)^2 + (V/h)^2) / log10(N).",
    },
    Entry {
        canonical: "alpha",
        aliases: &["α", "writers_view"],
        summary: "Writer's view: cosine of the angle at the h-point between the curve's two ends.",
    },
    Entry {
        canonical: "atl",
        aliases: &["average_token_length"],
        summary: "Average token length in characters.",
    },
    Entry {
        canonical: "vd",
        aliases: &["verb_distances"],
        summary: "Mean number of tokens between consecutive verbs.",
    },
    Entry {
        canonical: "q",
        aliases: &["activity"],
        summary: "Activity: verbs / (verbs + adjectives).",
    },
    Entry {
        canonical: "d",
        aliases: &["descriptivity"],
        summary: "Descriptivity: 1 - activity.",
    },
    Entry {
        canonical: "tc",
        aliases: &["thematic_concentration"],
        summary: "Weighted share of autosemantic types ranked above the h-point.",
    },
    Entry {
        canonical: "stc",
        aliases: &["secondary_thematic_concentration"],
        summary: "Thematic concentration over ranks h to 2h.",
    },
];

fn normalize(key: &str) -> String {
    key.trim().to_lowercase().replace([' ', '-', '.'], "_")
}

fn find(key: &str) -> Option<&'static Entry> {
    let wanted = normalize(key);
    ENTRIES.iter().find(|entry| {
        normalize(entry.canonical) == wanted || entry.aliases.iter().any(|a| normalize(a) == wanted)
    })
}

/// Canonical indicator key for a key or alias.
pub fn canonical_key(key: &str) -> Option<&'static str> {
    find(key).map(|entry| entry.canonical)
}

pub fn lookup(key: &str) -> Option<String> {
    find(key).map(|entry| format!("{}: {}", entry.canonical, entry.summary))
}

pub fn catalog() -> String {
    let keys: BTreeSet<&'static str> = ENTRIES.iter().map(|e| e.canonical).collect();
    let mut out = String::from("Available indicator keys:\n");
    for key in keys {
        out.push_str("- ");
        out.push_str(key);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_canonical_key() {
        let value = lookup("ttr").expect("canonical key should resolve");
        assert!(value.starts_with("ttr:"));
        assert!(value.contains("V/N"));
    }

    #[test]
    fn lookup_finds_alias_with_normalization() {
        assert!(lookup("Type-Token Ratio").unwrap().starts_with("ttr:"));
        assert!(lookup("CL").unwrap().starts_with("l:"));
        assert!(lookup("Lambda").unwrap().starts_with("lambda:"));
        assert!(lookup("G").unwrap().starts_with("gini:"));
    }

    #[test]
    fn canonical_key_resolves_aliases() {
        assert_eq!(canonical_key("hapax"), Some("hl"));
        assert_eq!(canonical_key(" Alpha "), Some("alpha"));
        assert_eq!(canonical_key("α"), Some("alpha"));
        assert_eq!(canonical_key("zipf"), None);
    }

    #[test]
    fn aliases_never_collide() {
        let mut seen = BTreeSet::new();
        for entry in ENTRIES {
            assert!(seen.insert(normalize(entry.canonical)), "{}", entry.canonical);
            for alias in entry.aliases {
                assert!(seen.insert(normalize(alias)), "{alias}");
            }
        }
    }
}
