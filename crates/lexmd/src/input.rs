use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use lexmd_core::TokenDocument;
use lexmd_settings::AnalysisSettings;

use crate::cli::InputArgs;

/// Read every input file into a labelled document, in argument order.
pub(crate) fn read_documents(
    input: &InputArgs,
    settings: &AnalysisSettings,
) -> Result<Vec<TokenDocument>> {
    let mut stdin_used = false;
    input
        .files
        .iter()
        .map(|path| {
            let is_stdin = path.as_os_str() == "-";
            if is_stdin && std::mem::replace(&mut stdin_used, true) {
                bail!("stdin (`-`) can only be read once");
            }
            let text = read_text(path, is_stdin)?;
            let document = if input.tagged {
                TokenDocument::from_tagged_text(&text, &settings.tag_separator)
            } else {
                TokenDocument::from_plain_text(&text)
            };
            let label = if is_stdin {
                "stdin".to_string()
            } else {
                path.display().to_string()
            };
            Ok(document.with_label(label))
        })
        .collect()
}

fn read_text(path: &Path, is_stdin: bool) -> Result<String> {
    if is_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    if !path.exists() {
        bail!("Path not found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
