//! Wirefeed main entry point
//!
//! This is the command-line interface for the wirefeed article feed poller.

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use url::Url;
use wirefeed::config::{FeedConfig, DEFAULT_ENDPOINT, DEFAULT_MIN_INTERVAL_MILLIS};
use wirefeed::ConfigError;

/// Wirefeed: a continuous cursor-based article feed poller
///
/// Wirefeed repeatedly downloads the latest articles available in a paginated
/// feed, resuming from the sequence id of the last article received so
/// consecutive calls never return the same article twice, and paces its
/// calls to respect the upstream access limit.
#[derive(Parser, Debug)]
#[command(name = "wirefeed")]
#[command(version = "1.0.0")]
#[command(about = "A continuous cursor-based article feed poller", long_about = None)]
struct Cli {
    /// Access key (profile id) required to build the feed request URL
    #[arg(short = 'k', long = "key")]
    key: String,

    /// Sequence id to resume the feed from
    #[arg(short = 's', long = "sequence-id")]
    sequence_id: Option<i64>,

    /// Pause between two feed calls, in milliseconds
    #[arg(short = 'p', long = "pause-millis", default_value_t = DEFAULT_MIN_INTERVAL_MILLIS)]
    pause_millis: u64,

    /// Maximum articles per call (default 500 | maximum 500)
    #[arg(short = 'l', long = "limit")]
    limit: Option<i32>,

    /// Number of cooperating client slices polling the feed
    #[arg(short = 'n', long = "num-slices")]
    num_slices: Option<i32>,

    /// The slice this client instance polls
    #[arg(short = 'i', long = "slice-index")]
    slice_index: Option<i32>,

    /// Response format ("json" selects JSON, anything else XML)
    #[arg(long, default_value = "json")]
    format: String,

    /// Feed endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Click licensed articles through to record royalty payments
    #[arg(long)]
    click_licensed: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli).context("invalid configuration")?;

    // A Ctrl-C cancels the token; the loop observes it at every iteration
    // boundary and during the pacing sleep.
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, shutting down");
            signal_token.cancel();
        }
    });

    wirefeed::feed::poll(config, shutdown)
        .await
        .context("polling loop failed")?;

    Ok(())
}

/// Assembles the run configuration from the command-line flags
fn build_config(cli: &Cli) -> Result<FeedConfig, ConfigError> {
    let endpoint = Url::parse(&cli.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
        url: cli.endpoint.clone(),
        source: e,
    })?;

    let mut config = FeedConfig::new(cli.key.clone());
    config.cursor = cli.sequence_id;
    config.page_limit = cli.limit;
    config.slice_count = cli.num_slices;
    config.slice_index = cli.slice_index;
    config.response_format = cli.format.clone();
    config.min_interval_millis = cli.pause_millis;
    config.endpoint = endpoint;
    config.click_licensed = cli.click_licensed;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wirefeed=info,warn"),
            1 => EnvFilter::new("wirefeed=debug,info"),
            2 => EnvFilter::new("wirefeed=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
