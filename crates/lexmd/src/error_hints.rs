use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:");
        for hint in hints {
            out.push_str("\n- ");
            out.push_str(&hint);
        }
    }
    out
}

pub(crate) fn suggestions(err: &Error) -> Vec<String> {
    let haystack = err
        .chain()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();
    let mut out = Vec::new();

    if haystack.contains("path not found") || haystack.contains("failed to read") {
        push_hint(
            &mut out,
            "Verify the input path exists and is readable, or pass `-` to read stdin.",
        );
    }

    if haystack.contains("unknown indicator key") {
        push_hint(&mut out, "Run `lexmd explain list` to see supported keys.");
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `lexmd.toml` (or the `--config` file) syntax and key names.",
        );
    }

    if haystack.contains("coefficient") {
        push_hint(
            &mut out,
            "A coefficient table needs `name`, `version` and at least one `[dimensions.<name>]` table of finite weights.",
        );
    }

    if haystack.contains("invalid_input") {
        push_hint(
            &mut out,
            "Tokens must not be blank. For tagged input, check the separator with `--separator`.",
        );
    }

    if haystack.contains("decimals") {
        push_hint(&mut out, "Use `--decimals` between 0 and 15.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
