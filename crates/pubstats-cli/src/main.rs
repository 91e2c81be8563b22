//! pubstats - keep a publication statistics index in sync with ArticleMeta
//!
//! Reads journals and articles from the ArticleMeta catalog, shapes them
//! into flat documents and writes them to Elasticsearch, either from the
//! recent change history or by reconciling the full listing.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;
use pubstats_core::shutdown_flag;

#[derive(Parser)]
#[command(name = "pubstats")]
#[command(about = "Synchronize ArticleMeta journals, articles and citations into a search index")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./pubstats.toml or ~/.config/pubstats/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Append log lines to this file instead of the terminal
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the source's change history of the last days
    Update(cmd::update::UpdateArgs),
    /// Compare the full source listing with the index and converge it
    Reconcile(cmd::reconcile::ReconcileArgs),
    /// Faceted document counts
    Stats(cmd::stats::StatsArgs),
    /// List the collections known to the source
    Collections,
    /// Create the namespace indices
    InitIndex(cmd::init_index::InitIndexArgs),
    /// Show current configuration
    Config,
}

/// First signal asks running work to stop between records; a second one
/// exits immediately.
fn setup_signal_handler() -> Result<()> {
    for signal in [signal_hook::consts::SIGTERM, signal_hook::consts::SIGINT] {
        // SAFETY: AtomicBool::swap and process::exit are async-signal-safe
        unsafe {
            signal_hook::low_level::register(signal, || {
                if shutdown_flag().swap(true, Ordering::Relaxed) {
                    std::process::exit(130);
                }
            })
        }
        .with_context(|| format!("Failed to register handler for signal {signal}"))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = Arc::new(pubstats_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug, progress lines show activity
    //   non-TTY: info unless --debug, logs are the only progress indicator
    let is_tty = progress.is_tty() && cli.log_file.is_none();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    pubstats_core::init_logging(quiet, cli.debug, multi, cli.log_file.as_deref())
        .context("Failed to open log file")?;

    setup_signal_handler()?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Update(args) => cmd::update::run(args, &config, &progress),
        Command::Reconcile(args) => cmd::reconcile::run(args, &config, &progress),
        Command::Stats(args) => cmd::stats::run(args, &config),
        Command::Collections => cmd::collections::run(&config),
        Command::InitIndex(args) => cmd::init_index::run(args, &config),
        Command::Config => {
            let reconcile = config.reconcile_config(None);
            let rows = vec![
                ("ArticleMeta URL", config.articlemeta.base_url.clone()),
                ("Index URL", config.index.url.clone()),
                ("Index name", config.index.name.clone()),
                ("Scroll size", config.index.scroll_size.to_string()),
                ("Timeout", format!("{}s", config.http.timeout)),
                ("Connect timeout", format!("{}s", config.http.connect_timeout)),
                ("Workers", reconcile.workers.to_string()),
                ("Chunk size", reconcile.chunk_size.to_string()),
                (
                    "Removal ceilings",
                    format!(
                        "journal {}, article {}, citation {}",
                        reconcile.ceilings.journal,
                        reconcile.ceilings.article,
                        reconcile.ceilings.citation
                    ),
                ),
            ];
            cmd::print_table(
                &["Setting", "Value"],
                rows.into_iter()
                    .map(|(label, value)| vec![label.to_string(), value])
                    .collect(),
            );
            Ok(())
        }
    }
}
