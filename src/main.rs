use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use gazette_watch::config::WatchConfig;
use gazette_watch::gazette::{ItemSource, JsonInput, JsonItemSource};
use gazette_watch::pipeline::{DispatchPlan, PolicyRun, RunSummary, run_policies};
use gazette_watch::policy::PolicyRegistry;

#[derive(Parser)]
#[command(name = "gazette-watch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score gazette items against department keyword policies", long_about = None)]
struct Cli {
    /// JSON array of items (`-` reads stdin)
    #[arg(short, long, default_value = "-")]
    items: String,

    /// Gazette date the items belong to (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Include non-relevant evaluations in the output
    #[arg(long)]
    all: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    summary: RunSummary,
    dispatches: DispatchPlan,
    runs: Vec<PolicyRun>,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = WatchConfig::from_env().context("Failed to load configuration")?;

    let registry =
        PolicyRegistry::from_config(&config).context("Failed to build policy registry")?;

    let source = JsonItemSource::new(JsonInput::from_arg(&cli.items));
    let items = source
        .load()
        .with_context(|| format!("Failed to load items from {}", source.name()))?;

    tracing::info!(
        items = items.len(),
        policies = ?registry.names(),
        date = ?cli.date,
        "Starting evaluation"
    );

    let runs = run_policies(&registry, &items);
    let summary = RunSummary::from_runs(&items, &runs);
    let dispatches = DispatchPlan::build(&runs, &config);

    tracing::info!(
        total_hits = summary.total_hits(),
        dispatches = dispatches.dispatches.len(),
        deliverable = dispatches.deliverable().count(),
        "Evaluation finished"
    );

    let runs = if cli.all {
        runs
    } else {
        runs.iter().map(PolicyRun::only_hits).collect()
    };

    let report = Report {
        date: cli.date,
        summary,
        dispatches,
        runs,
    };
    let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{out}");
    Ok(())
}
