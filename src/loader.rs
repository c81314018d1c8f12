use crate::errors::{AppError, Result};
use crate::model::{ClaimsDocument, MetricsDocument};
use serde_json::from_slice;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn read_metrics(path: &str) -> Result<MetricsDocument> {
    read_json(path)
}

pub fn read_claims(path: &str) -> Result<ClaimsDocument> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let mut bytes = Vec::new();
    let mut f = std::fs::File::open(path)?;
    f.read_to_end(&mut bytes)?;
    Ok(from_slice::<T>(&bytes)?)
}

pub fn parse_inline_claims(json: &str) -> Result<ClaimsDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Resolves the claims source. A claims file and inline claims are mutually
/// exclusive; neither yields an empty map and an actual-only run.
pub fn load_claims(
    claims_file: Option<&str>,
    inline_claims: Option<&str>,
) -> Result<ClaimsDocument> {
    match (claims_file, inline_claims) {
        (Some(_), Some(_)) => Err(AppError::usage(
            "provide either a claims file or --inline-claims, not both",
        )),
        (Some(path), None) => {
            info!("claims file: {path}");
            read_claims(path)
        }
        (None, Some(json)) => {
            info!("using inline claims data");
            parse_inline_claims(json)
        }
        (None, None) => {
            warn!("no claims data provided, generating actual-only plots");
            Ok(ClaimsDocument::default())
        }
    }
}

/// Default output directory sits next to the metrics file.
pub fn resolve_output_dir(metrics_file: &str, output_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = output_dir {
        return PathBuf::from(dir);
    }
    match Path::new(metrics_file).parent() {
        Some(dir) if dir != Path::new("") => dir.join("comparison_plots"),
        _ => PathBuf::from("comparison_plots"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn read_metrics_preserves_key_and_point_order() {
        let f = json_file(
            r#"{
                "metadata": {"model_name": "test-model"},
                "metrics": {
                    "mean_ttft": [[1, 195], [2, 183]],
                    "p99_ttft": [[1, 250]],
                    "throughput": [[4, 9.5], [2, 10.0]]
                }
            }"#,
        );
        let doc = read_metrics(f.path().to_str().unwrap()).unwrap();

        let keys: Vec<&str> = doc.metrics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mean_ttft", "p99_ttft", "throughput"]);
        assert_eq!(doc.metrics["mean_ttft"], vec![(1.0, 195.0), (2.0, 183.0)]);
        assert_eq!(doc.metrics["throughput"], vec![(4.0, 9.5), (2.0, 10.0)]);
        assert_eq!(doc.metadata["model_name"], "test-model");
    }

    #[test]
    fn missing_metrics_key_is_empty() {
        let f = json_file(r#"{"metadata": {}}"#);
        let doc = read_metrics(f.path().to_str().unwrap()).unwrap();
        assert!(doc.metrics.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_metrics("no/such/metrics.json").is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let f = json_file("{not json");
        assert!(read_metrics(f.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn both_claims_sources_is_an_error() {
        let err = load_claims(Some("claims.json"), Some("{}")).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn no_claims_source_is_empty() {
        let claims = load_claims(None, None).unwrap();
        assert!(claims.is_empty());
    }

    #[test]
    fn inline_claims_parse() {
        let claims = load_claims(None, Some(r#"{"mean_ttft": [[1, 195], [2, 183]]}"#)).unwrap();
        assert_eq!(claims["mean_ttft"], vec![(1.0, 195.0), (2.0, 183.0)]);

        assert!(load_claims(None, Some("not json")).is_err());
    }

    #[test]
    fn output_dir_resolution() {
        assert_eq!(
            resolve_output_dir("results/metrics.json", None),
            PathBuf::from("results/comparison_plots")
        );
        assert_eq!(
            resolve_output_dir("metrics.json", None),
            PathBuf::from("comparison_plots")
        );
        assert_eq!(
            resolve_output_dir("results/metrics.json", Some("out")),
            PathBuf::from("out")
        );
    }
}
