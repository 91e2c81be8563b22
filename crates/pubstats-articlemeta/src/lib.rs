//! Pubstats ArticleMeta - source reader for the ArticleMeta catalog
//!
//! Lists journal and article identifiers (all current ones, or the ones
//! changed within a date window), fetches full records, and exposes them as
//! lazy, offset-paginated iterators.

pub mod client;
pub mod issn;
pub mod pager;
pub mod records;

// Re-exports
pub use client::{ArticleMetaClient, Collection, DEFAULT_BASE_URL, IdentifierQuery, MetadataSource};
pub use issn::{is_valid_issn, valid_issns};
pub use pager::{Identifiers, Listing, PAGE_SIZE, SourceEvent, SourceEvents};
pub use records::{
    Affiliation, ArticleRecord, Author, Citation, Event, IdentifierEntry, JournalRecord,
    Permissions, SourceRecord,
};
