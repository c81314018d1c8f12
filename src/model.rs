use indexmap::IndexMap;

/// A single measurement: (concurrency level, metric value).
pub type Point = (f64, f64);

/// Metrics document produced by the results-analysis tooling: optional free-form
/// metadata plus measured series keyed by metric name. Map and series order follow
/// the input document.
#[derive(serde::Deserialize, Debug, Default)]
pub struct MetricsDocument {
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    #[serde(default)]
    pub metrics: IndexMap<String, Vec<Point>>,
}

/// Claimed/reference figures, same shape as the `metrics` map. May be empty.
pub type ClaimsDocument = IndexMap<String, Vec<Point>>;
