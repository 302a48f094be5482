//! Integration tests for the JSON API (FFI entrypoint).
//!
//! The FFI layer uses a consistent response envelope:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "..."}}`

use lexmd_core::ffi::run_json;

fn parse(result: &str) -> serde_json::Value {
    serde_json::from_str(result).expect("should be valid JSON")
}

#[test]
fn run_json_analyze_worked_example() {
    let result = run_json("analyze", r#"{"tokens": ["a", "a", "a", "b", "b", "c"]}"#);
    let parsed = parse(&result);
    assert_eq!(
        parsed.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "should return ok: true, got: {}",
        result
    );

    let data = parsed.get("data").expect("should have data field");
    assert_eq!(data["tokens"], 6);
    assert_eq!(data["types"], 3);
    assert_eq!(data["hapaxes"], 1);
    assert!(data.get("schema_version").is_some());
    assert_eq!(data["tool"]["name"], "lexmd");

    let indicators = data["indicators"].as_array().expect("indicators array");
    let ttr = indicators.iter().find(|e| e["key"] == "ttr").unwrap();
    assert_eq!(ttr["value"]["defined"], 0.5);
}

#[test]
fn run_json_analyze_empty_document_is_not_an_error() {
    let parsed = parse(&run_json("analyze", r#"{"tokens": []}"#));
    assert_eq!(parsed["ok"], true);
    let indicators = parsed["data"]["indicators"].as_array().unwrap();
    let gini = indicators.iter().find(|e| e["key"] == "gini").unwrap();
    assert!(gini["value"]["undefined"].is_string());
}

#[test]
fn run_json_is_deterministic() {
    let args = r#"{"text": "the cat saw the other cat", "label": "d"}"#;
    assert_eq!(run_json("analyze", args), run_json("analyze", args));
}

#[test]
fn run_json_unknown_mode_returns_error() {
    let parsed = parse(&run_json("tokens", "{}"));
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "unknown_mode");
}

#[test]
fn run_json_settings_errors_are_structured() {
    let parsed = parse(&run_json(
        "analyze",
        r#"{"tokens": ["a"], "settings": {"decimals": 99}}"#,
    ));
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "invalid_settings");
    assert!(
        parsed["error"]["message"]
            .as_str()
            .unwrap()
            .contains("decimals")
    );

    let parsed = parse(&run_json(
        "analyze",
        r#"{"tokens": ["a"], "settings": {"only": ["zipf"]}}"#,
    ));
    assert_eq!(parsed["error"]["code"], "invalid_settings");
    assert!(parsed["error"]["details"].as_str().unwrap().contains("explain"));
}

#[test]
fn run_json_custom_tag_sets() {
    let args = serde_json::json!({
        "text": "walk/V quickly/ADV walk/V",
        "tagged": true,
        "settings": {
            "tag_separator": "/",
            "only": ["vd", "q"],
            "tags": {"verbs": ["V"], "adjectives": ["A"], "function_words": []}
        }
    });
    let parsed = parse(&run_json("analyze", &args.to_string()));
    assert_eq!(parsed["ok"], true, "{parsed}");
    let indicators = parsed["data"]["indicators"].as_array().unwrap();
    let vd = indicators.iter().find(|e| e["key"] == "vd").unwrap();
    assert_eq!(vd["value"]["defined"], 2.0);
}
