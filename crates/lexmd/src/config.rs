use std::path::Path;

use anyhow::{Context, Result};
use lexmd_settings::{AnalysisSettings, DEFAULT_CONFIG_FILE};
use tracing::debug;

use crate::cli::InputArgs;

/// Settings from `--config`, else `./lexmd.toml` if it exists, else
/// defaults.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<AnalysisSettings> {
    if let Some(path) = explicit {
        return AnalysisSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        debug!(path = DEFAULT_CONFIG_FILE, "using settings file from working directory");
        return AnalysisSettings::from_file(fallback)
            .with_context(|| format!("Failed to load settings from {DEFAULT_CONFIG_FILE}"));
    }

    Ok(AnalysisSettings::default())
}

/// Command-line flags override the file.
pub(crate) fn resolve_settings(
    explicit: Option<&Path>,
    input: &InputArgs,
    only: &[String],
) -> Result<AnalysisSettings> {
    let mut settings = load_settings(explicit)?;
    if let Some(separator) = &input.separator {
        settings.tag_separator = separator.clone();
    }
    if input.decimals.is_some() {
        settings.decimals = input.decimals;
    }
    if !only.is_empty() {
        settings.only = only.to_vec();
    }
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn input(separator: Option<&str>, decimals: Option<u32>) -> InputArgs {
        InputArgs {
            files: vec![PathBuf::from("a.txt")],
            tagged: false,
            separator: separator.map(str::to_string),
            decimals,
        }
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "decimals = 2\nonly = [\"ttr\"]\ntag_separator = \"/\"\n").unwrap();

        let settings = resolve_settings(Some(&path), &input(None, Some(4)), &[]).unwrap();
        assert_eq!(settings.decimals, Some(4));
        assert_eq!(settings.only, ["ttr"]);
        assert_eq!(settings.tag_separator, "/");

        let settings =
            resolve_settings(Some(&path), &input(Some("|"), None), &["gini".to_string()]).unwrap();
        assert_eq!(settings.decimals, Some(2));
        assert_eq!(settings.only, ["gini"]);
        assert_eq!(settings.tag_separator, "|");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_settings(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load settings"));
    }

    #[test]
    fn empty_separator_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();
        let err = resolve_settings(Some(&path), &input(Some(""), None), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("separator"));
    }
}
