//! Handler for the `lexmd analyze` command.

use std::path::Path;

use anyhow::{Context, Result};
use lexmd_report::{render_json, render_jsonl, render_md, render_tsv};
use tracing::info;

use crate::cli::{AnalyzeArgs, ReportFormat};
use crate::{config, input};

pub(crate) fn handle(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let settings = config::resolve_settings(config_path, &args.input, &args.only)?;
    let documents = input::read_documents(&args.input, &settings)?;
    info!(documents = documents.len(), "analyzing");

    let reports = lexmd_core::analyze_batch(&documents, &settings)?;

    let decimals = settings.decimals;
    let out = match args.format {
        ReportFormat::Md => render_md(&reports, decimals),
        ReportFormat::Tsv => render_tsv(&reports, decimals),
        ReportFormat::Json => render_json(&reports, decimals).context("Failed to serialize reports")?,
        ReportFormat::Jsonl => {
            render_jsonl(&reports, decimals).context("Failed to serialize reports")?
        }
    };
    super::emit(&out);
    Ok(())
}
