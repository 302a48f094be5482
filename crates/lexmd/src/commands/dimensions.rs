//! Handler for the `lexmd dimensions` command.

use std::path::Path;

use anyhow::{Context, Result};
use lexmd_dimensions::{CoefficientSet, DimensionScore, DimensionScores};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{DimensionFormat, DimensionsArgs};
use crate::{config, input};

#[derive(Debug, Serialize)]
struct DocumentScores {
    document: String,
    #[serde(flatten)]
    scores: DimensionScores,
}

pub(crate) fn handle(args: DimensionsArgs, config_path: Option<&Path>) -> Result<()> {
    let set = CoefficientSet::from_file(&args.coefficients).with_context(|| {
        format!(
            "Failed to load coefficient table from {}",
            args.coefficients.display()
        )
    })?;
    let settings = config::resolve_settings(config_path, &args.input, &[])?;
    let documents = input::read_documents(&args.input, &settings)?;
    info!(documents = documents.len(), set = %set.name, "scoring dimensions");

    let reports = lexmd_core::analyze_batch(&documents, &settings)?;
    let scored: Vec<DocumentScores> = reports
        .iter()
        .map(|report| {
            let scores = set.score(&report.defined_values());
            for dim in scores.dimensions.iter().filter(|d| d.value.is_none()) {
                warn!(
                    document = report.document().unwrap_or("-"),
                    dimension = %dim.name,
                    missing = ?dim.missing,
                    "dimension left unscored"
                );
            }
            DocumentScores {
                document: report.document().unwrap_or("-").to_string(),
                scores,
            }
        })
        .collect();

    let out = match args.format {
        DimensionFormat::Md => render_md(&scored, settings.decimals),
        DimensionFormat::Tsv => render_tsv(&scored, settings.decimals),
        DimensionFormat::Json => {
            serde_json::to_string_pretty(&scored).context("Failed to serialize dimension scores")?
        }
    };
    super::emit(&out);
    Ok(())
}

fn format_score(score: &DimensionScore, decimals: Option<u32>) -> String {
    match (score.value, decimals) {
        (Some(v), Some(d)) => format!("{:.*}", d as usize, v),
        (Some(v), None) => format!("{v}"),
        (None, _) => "n/a".to_string(),
    }
}

fn render_md(scored: &[DocumentScores], decimals: Option<u32>) -> String {
    let mut s = String::new();
    for (i, doc) in scored.iter().enumerate() {
        if i > 0 {
            s.push('\n');
        }
        s.push_str(&format!(
            "## {} ({} v{})\n\n",
            doc.document, doc.scores.set, doc.scores.version
        ));
        s.push_str("|Dimension|Score|Missing|\n");
        s.push_str("|---|---:|---|\n");
        for dim in &doc.scores.dimensions {
            s.push_str(&format!(
                "|{}|{}|{}|\n",
                dim.name,
                format_score(dim, decimals),
                dim.missing.join(", ")
            ));
        }
    }
    s
}

fn render_tsv(scored: &[DocumentScores], decimals: Option<u32>) -> String {
    let mut s = String::from("Document");
    if let Some(first) = scored.first() {
        for dim in &first.scores.dimensions {
            s.push('\t');
            s.push_str(&dim.name);
        }
    }
    s.push('\n');
    for doc in scored {
        s.push_str(&doc.document);
        for dim in &doc.scores.dimensions {
            s.push('\t');
            s.push_str(&format_score(dim, decimals));
        }
        s.push('\n');
    }
    s
}
