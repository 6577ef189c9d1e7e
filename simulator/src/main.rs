//! QuoteSwap Simulator
//!
//! Replays swap-form scenarios against a session and prints what a
//! presentation layer would render after every step.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod prices;
mod runner;
mod scenario;

use quoteswap_engine::{load_catalog, JsonFilePriceFeed, PriceFeed, QuoteEngine};
use quoteswap_session::{SessionConfig, SubmissionController, TokioScheduler};
use runner::{OutputFormat, ScenarioRunner};
use scenario::Scenario;

/// QuoteSwap Simulator CLI
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Replay currency swap scenarios against a quote session")]
struct Args {
    /// Price feed JSON file (array of {"currency", "price"}); a built-in sample is used otherwise
    #[arg(short, long)]
    prices: Option<std::path::PathBuf>,

    /// Built-in scenario name or path to a scenario JSON file
    #[arg(short, long, default_value = "basic-swap")]
    scenario: String,

    /// Simulation speed multiplier
    #[arg(long, default_value = "1.0")]
    speed: f64,

    /// Print views and logs as JSON
    #[arg(long)]
    json: bool,
}

/// Logs go to stderr; stdout carries the rendered views.
fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    ));

    if json {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.json);

    info!("Starting QuoteSwap Simulator");
    info!("Speed: {}x", args.speed);

    if !(args.speed.is_finite() && args.speed > 0.0) {
        return Err(anyhow::anyhow!("Speed must be a positive number, got {}", args.speed));
    }

    // Load configuration
    let config = SessionConfig::from_env().with_speed(args.speed);
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    // Build the price snapshot
    let feed: Box<dyn PriceFeed> = match &args.prices {
        Some(path) => Box::new(JsonFilePriceFeed::new(path)),
        None => Box::new(prices::sample_feed()),
    };
    let catalog = load_catalog(feed.as_ref()).await?;
    info!(feed = feed.name(), currencies = catalog.len(), "Price snapshot loaded");

    let scenario = Scenario::load(&args.scenario)?;

    let controller = SubmissionController::new(
        QuoteEngine::from_catalog(catalog),
        Arc::new(TokioScheduler),
        config,
    );
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut runner = ScenarioRunner::new(controller, args.speed).with_output(format);

    let report = runner.run(&scenario).await?;

    // Print metrics
    info!("Simulation complete");
    info!("Scenario: {} ({} steps)", report.scenario, report.steps_run);
    info!("Submits: {}", report.metrics.submits_total);
    info!("Completed: {}", report.metrics.quotes_completed);
    info!("Validation failures: {}", report.metrics.validation_failures);
    info!("Rejected: {}", report.metrics.submits_rejected);
    info!("Discarded: {}", report.metrics.quotes_discarded);

    Ok(())
}
