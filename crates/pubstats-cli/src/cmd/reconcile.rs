//! Reconcile subcommand - converge the index with the full source listing

use anyhow::Result;
use clap::Args;

use pubstats_core::SharedProgress;
use pubstats_sync::Reconciler;

use super::{ScopeArgs, index_client, print_summary, source_client};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Also delete indexed documents the source no longer has
    #[arg(long)]
    pub delete: bool,

    /// Number of threads fetching records
    #[arg(short, long)]
    pub workers: Option<usize>,
}

pub fn run(args: ReconcileArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let scope = args.scope.scope()?;
    let source = source_client(config)?;
    let index = index_client(config)?;
    let reconcile = config.reconcile_config(args.workers);

    log::info!(
        "Reconciling {} with {} workers{}",
        scope.doc_type,
        reconcile.workers,
        if args.delete { ", removal enabled" } else { "" }
    );
    let summary = Reconciler::new(&source, &index, &reconcile, progress)
        .run_differential(&scope, args.delete)?;
    print_summary(&format!("Reconcile {}", scope.doc_type), &summary);
    Ok(())
}
