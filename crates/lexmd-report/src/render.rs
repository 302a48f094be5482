//! Markdown, TSV, JSON and JSONL rendering.
//!
//! `decimals` rounds defined values for display only; undefined values render
//! as `n/a` in the text formats and keep their reason in JSON.

use lexmd_math::{MAX_DECIMALS, round_f64};
use lexmd_types::{IndicatorEntry, IndicatorValue, SCHEMA_VERSION, ToolInfo};
use serde::{Deserialize, Serialize};

use crate::Report;

/// Envelope for several reports in one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSet {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub reports: Vec<Report>,
}

impl ReportSet {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tool: ToolInfo::current(),
            reports,
        }
    }
}

fn format_value(value: &IndicatorValue, decimals: Option<u32>) -> String {
    match (value, decimals) {
        (IndicatorValue::Defined(v), Some(d)) => {
            let d = d.min(MAX_DECIMALS);
            format!("{:.*}", d as usize, round_f64(*v, d))
        }
        (IndicatorValue::Defined(v), None) => format!("{v}"),
        (IndicatorValue::Undefined(_), _) => "n/a".to_string(),
    }
}

fn rounded(report: &Report, decimals: Option<u32>) -> Report {
    let Some(d) = decimals.map(|d| d.min(MAX_DECIMALS)) else {
        return report.clone();
    };
    let mut out = report.clone();
    out.indicators = report
        .indicators
        .iter()
        .map(|e| {
            let value = match &e.value {
                IndicatorValue::Defined(v) => IndicatorValue::Defined(round_f64(*v, d)),
                undefined => undefined.clone(),
            };
            IndicatorEntry::new(e.key.clone(), value)
        })
        .collect();
    out
}

pub fn render_md(reports: &[Report], decimals: Option<u32>) -> String {
    let mut s = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            s.push('\n');
        }
        s.push_str(&format!("## {}\n\n", report.document().unwrap_or("document")));
        s.push_str("|Tokens|Types|Hapaxes|\n");
        s.push_str("|---:|---:|---:|\n");
        s.push_str(&format!(
            "|{}|{}|{}|\n\n",
            report.tokens(),
            report.types(),
            report.hapaxes()
        ));
        s.push_str("|Indicator|Value|\n");
        s.push_str("|---|---:|\n");
        for entry in report.indicators() {
            s.push_str(&format!(
                "|{}|{}|\n",
                entry.key,
                format_value(&entry.value, decimals)
            ));
        }
    }

    s
}

/// One row per report. Columns follow the first report's indicator order.
pub fn render_tsv(reports: &[Report], decimals: Option<u32>) -> String {
    let mut s = String::new();
    let keys: Vec<&str> = reports
        .first()
        .map(|r| r.indicators().iter().map(|e| e.key.as_str()).collect())
        .unwrap_or_default();

    s.push_str("Document\tTokens\tTypes\tHapaxes");
    for key in &keys {
        s.push('\t');
        s.push_str(key);
    }
    s.push('\n');

    for report in reports {
        s.push_str(&format!(
            "{}\t{}\t{}\t{}",
            report.document().unwrap_or("-"),
            report.tokens(),
            report.types(),
            report.hapaxes()
        ));
        for key in &keys {
            s.push('\t');
            match report.get(key) {
                Some(value) => s.push_str(&format_value(value, decimals)),
                None => s.push_str("n/a"),
            }
        }
        s.push('\n');
    }

    s
}

pub fn render_json(reports: &[Report], decimals: Option<u32>) -> serde_json::Result<String> {
    let set = ReportSet::new(reports.iter().map(|r| rounded(r, decimals)).collect());
    serde_json::to_string_pretty(&set)
}

/// One compact JSON report per line.
pub fn render_jsonl(reports: &[Report], decimals: Option<u32>) -> serde_json::Result<String> {
    let mut s = String::new();
    for report in reports {
        s.push_str(&serde_json::to_string(&rounded(report, decimals))?);
        s.push('\n');
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmd_curve::RankFrequencyCurve;
    use lexmd_indicators::{IndicatorInput, IndicatorRegistry};
    use lexmd_spectrum::Spectrum;

    fn sample_report() -> Report {
        let spectrum = Spectrum::build(&["a", "a", "a", "b", "b", "c"]);
        let curve = RankFrequencyCurve::from_spectrum(&spectrum);
        let results = IndicatorRegistry::standard().evaluate(&IndicatorInput::new(&spectrum, &curve));
        crate::assemble(&spectrum, &curve, results).unwrap()
    }

    #[test]
    fn format_value_pads_to_requested_decimals() {
        assert_eq!(format_value(&IndicatorValue::Defined(0.5), Some(3)), "0.500");
        assert_eq!(format_value(&IndicatorValue::Defined(2.0 / 9.0), Some(2)), "0.22");
        assert_eq!(format_value(&IndicatorValue::Defined(0.5), None), "0.5");
        assert_eq!(format_value(&IndicatorValue::undefined("N = 0"), Some(2)), "n/a");
    }

    #[test]
    fn oversized_decimals_are_capped() {
        let third = IndicatorValue::Defined(1.0 / 3.0);
        let capped = format_value(&third, Some(u32::MAX));
        assert_eq!(capped, format_value(&third, Some(MAX_DECIMALS)));
        assert_eq!(capped.split('.').nth(1).map(str::len), Some(MAX_DECIMALS as usize));

        let md = render_md(&[sample_report()], Some(u32::MAX));
        assert_eq!(md, render_md(&[sample_report()], Some(MAX_DECIMALS)));
        let jsonl = render_jsonl(&[sample_report()], Some(u32::MAX)).unwrap();
        assert_eq!(jsonl, render_jsonl(&[sample_report()], Some(MAX_DECIMALS)).unwrap());
    }
}
