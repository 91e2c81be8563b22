//! Collections subcommand - list the catalog's collections

use anyhow::Result;

use super::{print_table, source_client};
use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let mut collections = source_client(config)?.collections()?;
    collections.sort_by(|a, b| a.acronym.cmp(&b.acronym));
    let rows = collections
        .into_iter()
        .map(|c| vec![c.acronym, c.name.unwrap_or_default()])
        .collect();
    print_table(&["Acronym", "Name"], rows);
    Ok(())
}
