//! Offset pagination over identifier listings
//!
//! Pages are pulled one at a time; an empty page ends the sequence. A failed
//! page listing is yielded once as an error and ends the sequence, so a
//! partial listing is never mistaken for a complete one. Per-record fetch
//! failures only skip that record.

use std::collections::VecDeque;

use pubstats_core::{DocumentType, TransportError};

use crate::client::{IdentifierQuery, MetadataSource};
use crate::records::{Event, IdentifierEntry, SourceRecord};

/// Fixed page size of identifier listings
pub const PAGE_SIZE: usize = 1000;

/// Which listing to paginate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Every currently known identifier
    Full,
    /// Identifiers changed inside the query's date window
    History,
}

/// Lazy iterator over identifier entries, restartable from any offset
pub struct Identifiers<'a, S: ?Sized> {
    source: &'a S,
    doc_type: DocumentType,
    listing: Listing,
    query: IdentifierQuery,
    offset: usize,
    buffer: VecDeque<IdentifierEntry>,
    done: bool,
}

impl<'a, S: MetadataSource + ?Sized> Identifiers<'a, S> {
    pub fn new(
        source: &'a S,
        doc_type: DocumentType,
        listing: Listing,
        query: IdentifierQuery,
    ) -> Self {
        Self::starting_at(source, doc_type, listing, query, 0)
    }

    /// Resume a listing at `offset`
    pub fn starting_at(
        source: &'a S,
        doc_type: DocumentType,
        listing: Listing,
        query: IdentifierQuery,
        offset: usize,
    ) -> Self {
        Self {
            source,
            doc_type,
            listing,
            query,
            offset,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    fn fetch_page(&mut self) -> Result<Vec<IdentifierEntry>, TransportError> {
        match self.listing {
            Listing::Full => {
                self.source
                    .identifiers(self.doc_type, &self.query, self.offset, PAGE_SIZE)
            }
            Listing::History => self
                .source
                .history(self.doc_type, &self.query, self.offset, PAGE_SIZE),
        }
    }
}

impl<S: MetadataSource + ?Sized> Iterator for Identifiers<'_, S> {
    type Item = Result<IdentifierEntry, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.buffer.pop_front() {
                return Some(Ok(entry));
            }
            if self.done {
                return None;
            }
            match self.fetch_page() {
                Ok(page) if page.is_empty() => {
                    log::debug!(
                        "{} listing exhausted at offset {}",
                        self.doc_type,
                        self.offset
                    );
                    self.done = true;
                    return None;
                }
                Ok(page) => {
                    self.offset += PAGE_SIZE;
                    self.buffer.extend(page);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// A change read from the source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceEvent {
    /// Record to shape and upsert
    Add {
        entry: IdentifierEntry,
        record: SourceRecord,
    },
    /// Record gone from the source; only the identifier is known
    Delete { entry: IdentifierEntry },
}

impl SourceEvent {
    pub fn entry(&self) -> &IdentifierEntry {
        match self {
            Self::Add { entry, .. } | Self::Delete { entry } => entry,
        }
    }
}

/// Identifier listing joined with record fetches.
///
/// `Full` listings yield only `Add` events. `History` listings yield
/// `Delete` events without fetching the record.
pub struct SourceEvents<'a, S: ?Sized> {
    identifiers: Identifiers<'a, S>,
    skipped: usize,
    failed: usize,
}

impl<'a, S: MetadataSource + ?Sized> SourceEvents<'a, S> {
    pub fn new(
        source: &'a S,
        doc_type: DocumentType,
        listing: Listing,
        query: IdentifierQuery,
    ) -> Self {
        Self {
            identifiers: Identifiers::new(source, doc_type, listing, query),
            skipped: 0,
            failed: 0,
        }
    }

    /// Records skipped so far because the source returned nothing
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Records skipped so far because their fetch failed
    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl<S: MetadataSource + ?Sized> Iterator for SourceEvents<'_, S> {
    type Item = Result<SourceEvent, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.identifiers.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };

            if self.identifiers.listing == Listing::History && entry.event() == Event::Delete {
                return Some(Ok(SourceEvent::Delete { entry }));
            }

            let doc_type = self.identifiers.doc_type;
            match self
                .identifiers
                .source
                .record(doc_type, &entry.collection, &entry.code)
            {
                Ok(Some(record)) => return Some(Ok(SourceEvent::Add { entry, record })),
                Ok(None) => {
                    log::debug!("{doc_type} {} not available at the source", entry.key());
                    self.skipped += 1;
                }
                Err(e) => {
                    log::error!("Error retrieving {doc_type} {}: {e}", entry.key());
                    self.failed += 1;
                }
            }
        }
    }
}
