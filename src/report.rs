use crate::descriptors;
use crate::errors::Result;
use crate::model::{ClaimsDocument, MetricsDocument};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `comparison_report.md` into the output directory.
pub fn write_report(
    doc: &MetricsDocument,
    claims: &ClaimsDocument,
    metrics_file: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string();
    let body = render_report(doc, claims, metrics_file, output_dir, &generated_at);
    let path = output_dir.join("comparison_report.md");
    std::fs::write(&path, body)?;
    info!("generated {}", path.display());
    Ok(path)
}

/// Pure rendering of the Markdown report. Range lines are an exact min/max of
/// the input series, no smoothing.
pub fn render_report(
    doc: &MetricsDocument,
    claims: &ClaimsDocument,
    metrics_file: &str,
    output_dir: &Path,
    generated_at: &str,
) -> String {
    let mut out = String::new();

    out.push_str("# Performance Comparison Report\n\n");
    out.push_str(&format!("Generated: {generated_at}\n\n"));
    out.push_str(&format!("**Metrics Source**: {metrics_file}\n"));
    out.push_str(&format!("**Output Directory**: {}\n\n", output_dir.display()));

    if !doc.metadata.is_empty() {
        out.push_str("## Test Configuration\n\n");
        for (key, value) in &doc.metadata {
            out.push_str(&format!("- **{}**: {value}\n", descriptors::title_case(key)));
        }
        out.push('\n');
    }

    out.push_str("## Metrics Analysis\n\n");
    for (name, series) in &doc.metrics {
        let desc = descriptors::lookup(name);
        out.push_str(&format!("### {}\n\n", desc.title));

        if !series.is_empty() {
            let min = series.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let max = series.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
            out.push_str(&format!("- **Range**: {min:.2} - {max:.2} {}\n", desc.y_label));
        }

        match claims.get(name) {
            Some(claim_series) if !claim_series.is_empty() => {
                out.push_str(&format!(
                    "- **Claims Data Points**: {}\n",
                    claim_series.len()
                ));
                out.push_str("- **Comparison**: Available\n");
            }
            _ => out.push_str("- **Comparison**: No claims data available\n"),
        }

        out.push_str(&format!("- **Plot**: {name}_comparison.png\n\n"));
    }

    out.push_str("## Generated Files\n\n");
    out.push_str("### Individual Metric Plots\n");
    for name in doc.metrics.keys() {
        out.push_str(&format!("- `{name}_comparison.png`\n"));
    }
    out.push_str("\n### Summary Files\n");
    out.push_str("- `summary_comparison.png` - Key metrics overview\n");
    out.push_str("- `comparison_report.md` - This report\n\n");

    out.push_str("## Usage Notes\n\n");
    out.push_str("- **Blue labels** show actual performance coordinates\n");
    out.push_str("- **Red labels** show claimed/reference performance coordinates\n");
    out.push_str("- Missing claims data results in actual-only plots\n");
    out.push_str("- Claims data is plotted as-is without interpolation\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample_doc() -> MetricsDocument {
        serde_json::from_str(
            r#"{
                "metadata": {"model_name": "test-model", "gpu_count": "8"},
                "metrics": {
                    "mean_ttft": [[1, 195], [2, 183]],
                    "foo_bar": [[1, 7]]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn ranges_are_exact_min_max() {
        let doc = sample_doc();
        let report = render_report(
            &doc,
            &IndexMap::new(),
            "results/metrics.json",
            Path::new("results/comparison_plots"),
            "2026-08-28 12:00:00 +0000",
        );

        assert!(report.contains("# Performance Comparison Report"));
        assert!(report.contains("Generated: 2026-08-28 12:00:00 +0000"));
        assert!(report.contains("**Metrics Source**: results/metrics.json"));
        assert!(report.contains("- **Range**: 183.00 - 195.00 Time (ms)"));
        assert!(report.contains("- **Range**: 7.00 - 7.00 Value"));
    }

    #[test]
    fn no_claims_marks_every_metric() {
        let doc = sample_doc();
        let report = render_report(
            &doc,
            &IndexMap::new(),
            "metrics.json",
            Path::new("comparison_plots"),
            "now",
        );

        assert_eq!(
            report.matches("- **Comparison**: No claims data available").count(),
            doc.metrics.len()
        );
        assert!(!report.contains("- **Comparison**: Available"));
    }

    #[test]
    fn claims_availability_and_point_count() {
        let doc = sample_doc();
        let claims: ClaimsDocument =
            serde_json::from_str(r#"{"mean_ttft": [[1, 190], [2, 180], [4, 170]]}"#).unwrap();
        let report = render_report(&doc, &claims, "metrics.json", Path::new("out"), "now");

        assert!(report.contains("- **Claims Data Points**: 3"));
        assert!(report.contains("- **Comparison**: Available"));
        // foo_bar still has no claims.
        assert!(report.contains("- **Comparison**: No claims data available"));
    }

    #[test]
    fn metadata_keys_are_humanized() {
        let doc = sample_doc();
        let report = render_report(&doc, &IndexMap::new(), "m.json", Path::new("out"), "now");

        assert!(report.contains("## Test Configuration"));
        assert!(report.contains("- **Model Name**: test-model"));
        assert!(report.contains("- **Gpu Count**: 8"));
    }

    #[test]
    fn generated_files_listing() {
        let doc = sample_doc();
        let report = render_report(&doc, &IndexMap::new(), "m.json", Path::new("out"), "now");

        assert!(report.contains("- `mean_ttft_comparison.png`"));
        assert!(report.contains("- `foo_bar_comparison.png`"));
        assert!(report.contains("- `summary_comparison.png` - Key metrics overview"));
        assert!(report.contains("- **Plot**: mean_ttft_comparison.png"));
    }

    #[test]
    fn empty_metadata_skips_configuration_section() {
        let doc: MetricsDocument =
            serde_json::from_str(r#"{"metrics": {"mean_ttft": [[1, 195]]}}"#).unwrap();
        let report = render_report(&doc, &IndexMap::new(), "m.json", Path::new("out"), "now");
        assert!(!report.contains("## Test Configuration"));
    }
}
