pub mod collections;
pub mod init_index;
pub mod reconcile;
pub mod stats;
pub mod update;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use pubstats_articlemeta::{valid_issns, ArticleMetaClient};
use pubstats_core::DocumentType;
use pubstats_index::ElasticIndex;
use pubstats_sync::{RunScope, RunSummary};

use crate::config::Config;

/// `journal`, `article` or `citation`, any case
pub fn parse_doc_type(s: &str) -> Result<DocumentType, String> {
    DocumentType::parse(s).map_err(|e| e.to_string())
}

/// Which records a synchronization run covers
#[derive(Args, Debug)]
pub struct ScopeArgs {
    /// Document type to synchronize
    #[arg(short = 't', long = "type", value_parser = parse_doc_type)]
    pub doc_type: DocumentType,

    /// Collection acronym (e.g. scl); all collections when omitted
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Restrict to journals with these ISSNs (repeatable)
    #[arg(short, long = "issn")]
    pub issns: Vec<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> Result<RunScope> {
        let issns = valid_issns(&self.issns);
        if !self.issns.is_empty() && issns.is_empty() {
            anyhow::bail!("None of the given ISSNs is valid");
        }
        Ok(RunScope::new(self.doc_type)
            .collection(self.collection.as_deref())
            .issns(issns))
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date format: {e}"))
}

pub fn source_client(config: &Config) -> Result<ArticleMetaClient> {
    Ok(ArticleMetaClient::new(
        &config.articlemeta.base_url,
        &config.http_config(),
    )?)
}

pub fn index_client(config: &Config) -> Result<ElasticIndex> {
    Ok(
        ElasticIndex::new(&config.index.url, &config.index.name, &config.http_config())?
            .with_scroll_size(config.index.scroll_size),
    )
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    for row in rows {
        table.add_row(row);
    }
    eprintln!("\n{table}");
}

pub fn print_summary(title: &str, summary: &RunSummary) {
    let removed = if summary.removal_blocked {
        format!(
            "none ({} candidates over the ceiling)",
            summary.removal_candidates
        )
    } else {
        format!("{} of {} candidates", summary.removed, summary.removal_candidates)
    };
    let rows = vec![
        ("Listed", format!("{} source, {} index", summary.listed_source, summary.listed_index)),
        (
            "Included",
            format!(
                "{} documents from {} records ({} skipped, {} failed)",
                summary.included, summary.to_include, summary.skipped, summary.failed
            ),
        ),
        ("Removed", removed),
        ("Interrupted", if summary.interrupted { "yes" } else { "no" }.to_string()),
        ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
    ];
    print_table(
        &[title, "Value"],
        rows.into_iter()
            .map(|(label, value)| vec![label.to_string(), value])
            .collect(),
    );
}
