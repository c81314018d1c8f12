use clap::Parser;
use perf_compare_rs::errors::Result;
use perf_compare_rs::{loader, logger, plot, report};
use tracing::{error, info, warn};

#[derive(Parser, Debug, Clone)]
#[clap(about = "Render comparison charts and a Markdown report from performance metrics JSON")]
struct AppArgs {
    /// Path to the metrics JSON file from the results analysis
    metrics_file: String,
    /// Path to a claims/reference JSON file
    claims_file: Option<String>,
    /// Inline JSON claims data (mutually exclusive with the claims file)
    #[clap(long)]
    inline_claims: Option<String>,
    /// Output directory for plots (default: <metrics_dir>/comparison_plots)
    #[clap(long)]
    output_dir: Option<String>,
}

fn main() {
    logger::setup("INFO");

    let args = AppArgs::parse();
    info!("Received args: {:?}", args);

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &AppArgs) -> Result<()> {
    // Claims-source arbitration comes first: a conflicting invocation must fail
    // before anything touches the filesystem for output.
    let claims = loader::load_claims(args.claims_file.as_deref(), args.inline_claims.as_deref())?;

    info!("metrics file: {}", args.metrics_file);
    let doc = loader::read_metrics(&args.metrics_file)?;

    if doc.metrics.is_empty() {
        warn!("no metrics found in {}", args.metrics_file);
        return Ok(());
    }

    let output_dir = loader::resolve_output_dir(&args.metrics_file, args.output_dir.as_deref());
    std::fs::create_dir_all(&output_dir)?;
    info!("output directory: {}", output_dir.display());

    info!("generating plots for {} metrics", doc.metrics.len());
    let empty = Vec::new();
    for (name, series) in &doc.metrics {
        let claim_series = claims.get(name).unwrap_or(&empty);
        plot::comparison_chart(name, series, claim_series, &output_dir)?;
    }

    let summary = plot::summary_chart(&doc.metrics, &claims, &output_dir)?;
    let report_path = report::write_report(&doc, &claims, &args.metrics_file, &output_dir)?;

    info!(
        "comparison complete: {} metric plots{}, report at {}",
        doc.metrics.len(),
        if summary.is_some() { ", 1 summary plot" } else { "" },
        report_path.display()
    );
    Ok(())
}
