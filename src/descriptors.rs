/// Display information for a metric: chart title, y-axis label and an optional
/// directional note ("Lower is better", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub title: String,
    pub y_label: String,
    pub note: Option<String>,
}

/// Metrics shown on the summary chart, in panel order.
pub const KEY_METRICS: [&str; 4] = [
    "mean_ttft",
    "input_token_throughput",
    "output_token_throughput",
    "mean_tpot",
];

pub fn lookup(name: &str) -> MetricDescriptor {
    let known: Option<(&str, &str, &str)> = match name {
        "mean_ttft" => Some(("Mean Time to First Token (TTFT)", "Time (ms)", "Lower is better")),
        "p99_ttft" => Some(("P99 Time to First Token (TTFT)", "Time (ms)", "Lower is better")),
        "input_token_throughput" => {
            Some(("Input Token Throughput", "Tokens per second", "Higher is better"))
        }
        "output_token_throughput" => {
            Some(("Output Token Throughput", "Tokens per second", "Higher is better"))
        }
        "throughput" => Some((
            "Request Throughput (Legacy)",
            "Requests per second",
            "Higher is better",
        )),
        "output_tp" => Some((
            "Output Token Throughput (Claims)",
            "Tokens per second",
            "Higher is better",
        )),
        "mean_tpot" => Some(("Mean Time per Output Token (TPOT)", "Time (ms)", "Lower is better")),
        "p99_tpot" => Some(("P99 Time per Output Token (TPOT)", "Time (ms)", "Lower is better")),
        "mean_itl" => Some(("Mean Inter-token Latency (ITL)", "Time (ms)", "Lower is better")),
        "p99_itl" => Some(("P99 Inter-token Latency (ITL)", "Time (ms)", "Lower is better")),
        "successful_requests" => {
            Some(("Successful Requests", "Number of requests", "Higher is better"))
        }
        "duration" => Some(("Test Duration", "Time (seconds)", "Context dependent")),
        _ => None,
    };

    match known {
        Some((title, y_label, note)) => MetricDescriptor {
            title: title.to_owned(),
            y_label: y_label.to_owned(),
            note: Some(note.to_owned()),
        },
        None => MetricDescriptor {
            title: title_case(name),
            y_label: "Value".to_owned(),
            note: None,
        },
    }
}

/// `snake_case` to `Title Case`, python-`str.title()` style.
pub fn title_case(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_metric() {
        let desc = lookup("mean_ttft");
        assert_eq!(desc.title, "Mean Time to First Token (TTFT)");
        assert_eq!(desc.y_label, "Time (ms)");
        assert_eq!(desc.note.as_deref(), Some("Lower is better"));
    }

    #[test]
    fn unknown_metric_falls_back_to_title_case() {
        let desc = lookup("foo_bar");
        assert_eq!(desc.title, "Foo Bar");
        assert_eq!(desc.y_label, "Value");
        assert_eq!(desc.note, None);
    }

    #[test]
    fn title_casing() {
        assert_eq!(title_case("model_name"), "Model Name");
        assert_eq!(title_case("GPU_count"), "Gpu Count");
        assert_eq!(title_case("duration"), "Duration");
    }

    #[test]
    fn key_metrics_have_descriptors() {
        for name in KEY_METRICS {
            assert!(lookup(name).note.is_some());
        }
    }
}
