//! JSON entrypoint for language bindings.
//!
//! [`run_json`] accepts a mode string and JSON arguments and always returns
//! a JSON envelope:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! Missing keys use defaults; values of the wrong type are errors.

use std::collections::BTreeMap;

use lexmd_dimensions::CoefficientSet;
use lexmd_indicators::STANDARD_KEYS;
use lexmd_report::ReportSet;
use lexmd_settings::AnalysisSettings;
use lexmd_types::Token;
use serde::Deserialize;
use serde_json::Value;

use crate::document::TokenDocument;
use crate::error::{ErrorCode, LexmdError, ResponseEnvelope};
use crate::{analyze, analyze_batch};

/// Run a lexmd operation with JSON arguments, returning JSON output.
///
/// Modes:
/// * `analyze`: `{"tokens": [...]}` or `{"text": "...", "tagged": false}`
///   for one document, `{"documents": [{"label": ..., "tokens": [...]}]}`
///   for several; optional `"label"` and `"settings"`.
/// * `explain`: `{"key": "ttr"}`, or `{"key": "list"}` for every key.
/// * `dimensions`: `{"coefficients": "<toml>", "features": {"ttr": 0.5}}`.
/// * `version`.
///
/// ```ignore
/// let out = run_json("analyze", r#"{"tokens": ["a", "a", "b"]}"#);
/// // {"ok":true,"data":{"schema_version":1,...,"indicators":[...]}}
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, LexmdError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(LexmdError::invalid_json("arguments must be a JSON object"));
    }

    match mode {
        "analyze" => {
            let settings = parse_settings(&args)?;
            if let Some(documents) = args.get("documents") {
                let documents = parse_documents(documents)?;
                let reports = analyze_batch(&documents, &settings)?;
                Ok(serde_json::to_value(ReportSet::new(reports))?)
            } else {
                let document = parse_document(&args, &settings)?;
                let report = analyze(&document, &settings)?;
                Ok(serde_json::to_value(&report)?)
            }
        }
        "explain" => {
            let key = parse_string(&args, "key", "list")?;
            if key.eq_ignore_ascii_case("list") {
                return Ok(serde_json::json!({ "keys": STANDARD_KEYS }));
            }
            let canonical = crate::explain::canonical_key(&key)
                .ok_or_else(|| LexmdError::unknown_indicator(&key))?;
            let explanation = crate::explain::lookup(canonical)
                .ok_or_else(|| LexmdError::internal(format!("no explanation for '{canonical}'")))?;
            Ok(serde_json::json!({ "key": canonical, "explanation": explanation }))
        }
        "dimensions" => {
            let table = args
                .get("coefficients")
                .and_then(Value::as_str)
                .ok_or_else(|| LexmdError::invalid_field("coefficients", "a TOML string"))?;
            let set = CoefficientSet::from_toml(table)?;
            let features = parse_features(&args)?;
            Ok(serde_json::to_value(set.score(&features))?)
        }
        "version" => Ok(serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "schema_version": lexmd_types::SCHEMA_VERSION,
        })),
        _ => Err(LexmdError::unknown_mode(mode)),
    }
}

/// A token given either as a bare string or as `{text, tag, len}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenArg {
    Word(String),
    Full(Token),
}

impl From<TokenArg> for Token {
    fn from(arg: TokenArg) -> Self {
        match arg {
            TokenArg::Word(w) => Token::new(w),
            TokenArg::Full(t) => t,
        }
    }
}

#[derive(Deserialize)]
struct DocumentArg {
    #[serde(default)]
    label: Option<String>,
    tokens: Vec<TokenArg>,
}

fn parse_settings(args: &Value) -> Result<AnalysisSettings, LexmdError> {
    match args.get("settings") {
        None | Some(Value::Null) => Ok(AnalysisSettings::default()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            LexmdError::with_details(ErrorCode::InvalidSettings, "Invalid settings", e.to_string())
        }),
    }
}

fn parse_tokens(value: &Value) -> Result<Vec<Token>, LexmdError> {
    let tokens: Vec<TokenArg> = serde_json::from_value(value.clone())
        .map_err(|_| LexmdError::invalid_field("tokens", "an array of strings or token objects"))?;
    Ok(tokens.into_iter().map(Token::from).collect())
}

fn parse_document(args: &Value, settings: &AnalysisSettings) -> Result<TokenDocument, LexmdError> {
    let document = match (args.get("tokens"), parse_optional_string(args, "text")?) {
        (Some(tokens), None) => TokenDocument::new(parse_tokens(tokens)?),
        (None, Some(text)) => {
            if parse_bool(args, "tagged", false)? {
                TokenDocument::from_tagged_text(&text, &settings.tag_separator)
            } else {
                TokenDocument::from_plain_text(&text)
            }
        }
        (Some(_), Some(_)) => {
            return Err(LexmdError::new(
                ErrorCode::InvalidSettings,
                "Give either 'tokens' or 'text', not both",
            ));
        }
        (None, None) => {
            return Err(LexmdError::new(
                ErrorCode::InvalidSettings,
                "Missing 'tokens', 'text' or 'documents'",
            ));
        }
    };
    Ok(match parse_optional_string(args, "label")? {
        Some(label) => document.with_label(label),
        None => document,
    })
}

fn parse_documents(value: &Value) -> Result<Vec<TokenDocument>, LexmdError> {
    let documents: Vec<DocumentArg> = serde_json::from_value(value.clone()).map_err(|_| {
        LexmdError::invalid_field("documents", "an array of {label, tokens} objects")
    })?;
    Ok(documents
        .into_iter()
        .map(|d| TokenDocument {
            label: d.label,
            tokens: d.tokens.into_iter().map(Token::from).collect(),
        })
        .collect())
}

fn parse_features(args: &Value) -> Result<BTreeMap<String, f64>, LexmdError> {
    match args.get("features") {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|_| LexmdError::invalid_field("features", "an object of numbers")),
    }
}

fn parse_bool(args: &Value, field: &str, default: bool) -> Result<bool, LexmdError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| LexmdError::invalid_field(field, "a boolean (true or false)")),
    }
}

fn parse_optional_string(args: &Value, field: &str) -> Result<Option<String>, LexmdError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| LexmdError::invalid_field(field, "a string")),
    }
}

fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, LexmdError> {
    Ok(parse_optional_string(args, field)?.unwrap_or_else(|| default.to_string()))
}
