//! Fuzz target for the JSON entrypoint.
//!
//! Whatever the input, `run_json` must answer with a well-formed envelope.

#![no_main]
use lexmd_core::ffi::run_json;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

const MAX_INPUT_SIZE: usize = 16 * 1024;
const MODES: &[&str] = &["analyze", "explain", "dimensions", "version"];

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let mode = MODES[data[0] as usize % MODES.len()];
    let Ok(args) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let out = run_json(mode, args);
    let envelope: Value = serde_json::from_str(&out).expect("envelope must be JSON");
    match envelope["ok"].as_bool() {
        Some(true) => assert!(envelope.get("data").is_some()),
        Some(false) => assert!(envelope["error"]["code"].is_string()),
        None => panic!("envelope without ok flag: {out}"),
    }
});
