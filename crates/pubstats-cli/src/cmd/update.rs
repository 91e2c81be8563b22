//! Update subcommand - apply the source's recent change history

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use pubstats_core::SharedProgress;
use pubstats_sync::{DateWindow, Reconciler};

use super::{ScopeArgs, index_client, parse_date, print_summary, source_client};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// First day of changes to apply (YYYY-MM-DD); default 30 days before --until
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last day of changes to apply (YYYY-MM-DD); default today
    #[arg(long, value_parser = parse_date)]
    pub until: Option<NaiveDate>,
}

pub fn run(args: UpdateArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let scope = args.scope.scope()?;
    let window = DateWindow::resolve(args.from, args.until)?;
    let source = source_client(config)?;
    let index = index_client(config)?;
    let reconcile = config.reconcile_config(None);

    let summary =
        Reconciler::new(&source, &index, &reconcile, progress).run_common(&scope, window)?;
    print_summary(&format!("Update {}", scope.doc_type), &summary);
    Ok(())
}
