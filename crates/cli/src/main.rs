//! v6ready: checks IPv6 readiness for a catalog of organizations and
//! writes a nested per-country report.

mod bootstrap;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use v6ready_application::{ResolutionService, SummaryService};
use v6ready_domain::{CatalogRecord, Source};
use v6ready_infrastructure::{IsoCountryNames, ResolutionCounters, UdpResolver};

#[derive(Parser)]
#[command(name = "v6ready")]
#[command(version)]
#[command(about = "Check IPv6 readiness for a catalog of organizations")]
struct Cli {
    /// Catalog files (JSON arrays of entity records)
    #[arg(required = true)]
    catalogs: Vec<PathBuf>,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the upstream DNS server ("ip:port")
    #[arg(long)]
    upstream: Option<String>,

    /// Override how many entities resolve at once (0 = unbounded)
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = bootstrap::load_config(cli.config.as_deref())?;
    if let Some(upstream) = cli.upstream {
        config.dns.upstream_server = upstream;
    }
    if let Some(concurrency) = cli.concurrency {
        config.dns.max_concurrent_resolutions = concurrency;
    }
    config.validate()?;

    bootstrap::init_logging(&config);
    info!(
        upstream = %config.dns.upstream_server,
        timeout_ms = config.dns.query_timeout_ms,
        concurrency = config.dns.max_concurrent_resolutions,
        "Configuration loaded"
    );

    let mut source = Source::new();
    for path in &cli.catalogs {
        let file =
            File::open(path).with_context(|| format!("cannot open catalog {}", path.display()))?;
        let records: Vec<CatalogRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed catalog {}", path.display()))?;

        info!(catalog = %path.display(), records = records.len(), "Catalog loaded");
        source.extend_from_records(records);
    }

    let resolver = Arc::new(UdpResolver::from_config(&config.dns)?);
    let metrics = Arc::new(ResolutionCounters::new());
    let service = ResolutionService::with_concurrency_limit(
        resolver,
        metrics.clone(),
        config.dns.max_concurrent_resolutions,
    );

    service.resolve_all(&mut source).await;

    let report = source.report();
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &report)
                .context("failed to write report")?;
            info!(output = %path.display(), "Report written");
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &report)
                .context("failed to write report")?;
            println!();
        }
    }

    let summaries = SummaryService::new(Arc::new(IsoCountryNames)).summarize(&source)?;
    for country in &summaries {
        for category in &country.categories {
            info!(
                country = %country.name,
                category = %category.name,
                ready = category.ready_count,
                total = category.total_count,
                percentage = %category.ready_percentage,
                "Readiness"
            );
        }
    }

    let snapshot = metrics.snapshot();
    info!(
        ipv4_successes = snapshot.ipv4_successes,
        ipv4_failures = snapshot.ipv4_failures,
        ipv6_successes = snapshot.ipv6_successes,
        ipv6_failures = snapshot.ipv6_failures,
        "Lookup counters"
    );

    Ok(())
}
