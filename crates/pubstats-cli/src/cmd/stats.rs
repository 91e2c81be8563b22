//! Stats subcommand - faceted document counts

use anyhow::{Context, Result};
use clap::Args;

use pubstats_core::{fmt_num, DocumentType};
use pubstats_index::{StatsQuery, allowed_facets};

use super::{index_client, parse_doc_type, print_table};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Namespace to aggregate
    #[arg(short = 't', long = "type", value_parser = parse_doc_type)]
    pub doc_type: DocumentType,

    /// Comma-separated fields to aggregate, outermost first
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub aggs: Vec<String>,

    /// FIELD=VALUE restriction (repeatable)
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Maximum buckets per aggregation
    #[arg(long, default_value_t = pubstats_index::stats::DEFAULT_BUCKET_SIZE)]
    pub size: usize,
}

fn parse_filter(filter: &str) -> Result<(&str, &str)> {
    filter
        .split_once('=')
        .map(|(field, value)| (field.trim(), value.trim()))
        .with_context(|| format!("Filter '{filter}' is not FIELD=VALUE"))
}

pub fn run(args: StatsArgs, config: &Config) -> Result<()> {
    let doc_type = args.doc_type;
    let mut query = StatsQuery::new(doc_type, args.aggs.clone());
    query.size = args.size;
    for filter in &args.filters {
        let (field, value) = parse_filter(filter)?;
        query = query.filter(field, value);
    }
    query.validate().with_context(|| {
        format!(
            "Allowed {doc_type} fields: {}",
            allowed_facets(doc_type).join(", ")
        )
    })?;

    let report = index_client(config)?.publication_stats(&query)?;

    let mut headers: Vec<&str> = args.aggs.iter().map(String::as_str).collect();
    headers.push("Documents");
    let rows = report
        .rows()
        .into_iter()
        .map(|(mut keys, count)| {
            keys.resize(args.aggs.len(), String::new());
            keys.push(fmt_num(count as usize));
            keys
        })
        .collect();
    print_table(&headers, rows);
    eprintln!("{} {doc_type} documents matched", fmt_num(report.total as usize));
    Ok(())
}
