//! Init-index subcommand - create namespace indices with their mappings

use anyhow::Result;
use clap::Args;

use pubstats_core::DocumentType;

use super::{index_client, parse_doc_type};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct InitIndexArgs {
    /// Only this namespace; all when omitted
    #[arg(short = 't', long = "type", value_parser = parse_doc_type)]
    pub doc_type: Option<DocumentType>,
}

pub fn run(args: InitIndexArgs, config: &Config) -> Result<()> {
    let index = index_client(config)?;
    let types: Vec<DocumentType> = match args.doc_type {
        Some(t) => vec![t],
        None => DocumentType::all().to_vec(),
    };
    for doc_type in types {
        let name = index.index_name(doc_type);
        if index.create_index(doc_type)? {
            eprintln!("created {name}");
        } else {
            eprintln!("{name} already exists");
        }
    }
    Ok(())
}
