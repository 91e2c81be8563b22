//! Common (history) and differential (full set) synchronization runs

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use pubstats_articlemeta::{
    IdentifierEntry, Identifiers, Listing, MetadataSource, SourceEvent, SourceEvents,
};
use pubstats_core::{is_shutdown_requested, DocumentType, ProgressContext, SyncError};
use pubstats_index::{DeleteOutcome, DocumentIndex, IndexScope};
use pubstats_shaper::{shape_record, ShapedDocument};

use crate::config::{DateWindow, ReconcileConfig, RunScope};
use crate::summary::{Phase, PhaseTracker, RunSummary};
use crate::tag::{listed_date, Diff, IdentifierTag, IndexListing};

/// Drives the source reader, the shapers and the index writer.
///
/// Fetching and shaping may run on several threads; every index write and
/// delete is issued from the calling thread, and deletes only start once
/// inclusion has finished.
pub struct Reconciler<'a, S: ?Sized, I: ?Sized> {
    source: &'a S,
    index: &'a I,
    config: &'a ReconcileConfig,
    progress: &'a ProgressContext,
}

impl<'a, S, I> Reconciler<'a, S, I>
where
    S: MetadataSource + ?Sized,
    I: DocumentIndex + ?Sized,
{
    pub fn new(
        source: &'a S,
        index: &'a I,
        config: &'a ReconcileConfig,
        progress: &'a ProgressContext,
    ) -> Self {
        Self {
            source,
            index,
            config,
            progress,
        }
    }

    /// Apply the source's change history inside `window`: upsert added
    /// records, delete removed ones.
    pub fn run_common(&self, scope: &RunScope, window: DateWindow) -> Result<RunSummary, SyncError> {
        let start = Instant::now();
        let doc_type = scope.doc_type;
        let mut summary = RunSummary::empty(doc_type);
        let mut phases = PhaseTracker::new(doc_type, self.progress.stage_line(doc_type.namespace()));

        log::info!(
            "Updating {doc_type} changes from {} to {}",
            window.from,
            window.until
        );
        phases.enter(Phase::Including);

        for query in scope.queries(Some(window.from), Some(window.until)) {
            let mut events = SourceEvents::new(self.source, doc_type, Listing::History, query);
            for event in events.by_ref() {
                if is_shutdown_requested() {
                    summary.interrupted = true;
                    break;
                }
                summary.listed_source += 1;
                match event? {
                    SourceEvent::Add { entry, record } => {
                        summary.to_include += 1;
                        match shape_record(doc_type, &record) {
                            Ok(mut docs) => {
                                let key = entry.key();
                                align_ids(doc_type, &key, &mut docs);
                                self.write(doc_type, &key, docs, None, &mut summary)?
                            }
                            Err(e) => {
                                log::warn!("Skipping {}: {}", entry.key(), SyncError::from(e));
                                summary.skipped += 1;
                            }
                        }
                    }
                    SourceEvent::Delete { entry } => {
                        summary.removal_candidates += 1;
                        self.remove_key(doc_type, &entry.key(), None, &mut summary)?;
                    }
                }
            }
            summary.skipped += events.skipped();
            summary.failed += events.failed();
            if summary.interrupted {
                break;
            }
        }

        summary.phases = phases.finish();
        summary.elapsed = start.elapsed();
        summary.log();
        Ok(summary)
    }

    /// Compare the full source listing with the index and converge the
    /// index: include new or updated records, and with `delete` remove
    /// documents the source no longer has.
    pub fn run_differential(&self, scope: &RunScope, delete: bool) -> Result<RunSummary, SyncError> {
        if delete && !scope.issns.is_empty() {
            return Err(SyncError::Configuration(
                "removal needs a complete listing and cannot be combined with an ISSN scope".into(),
            ));
        }

        let start = Instant::now();
        let doc_type = scope.doc_type;
        let mut summary = RunSummary::empty(doc_type);
        let mut phases = PhaseTracker::new(doc_type, self.progress.stage_line(doc_type.namespace()));

        phases.enter(Phase::ListingSource);
        let entries = self.list_source(scope, &mut summary)?;
        if summary.interrupted {
            return Ok(self.finish(summary, phases, start));
        }
        let source_tags: FxHashSet<IdentifierTag> =
            entries.values().map(IdentifierTag::from).collect();

        phases.enter(Phase::ListingIndex);
        let listing = IndexListing::from_entries(
            self.index
                .indexed_entries(doc_type, &IndexScope::collection(scope.collection.as_deref()))?,
        );
        summary.listed_index = listing.ids.values().map(Vec::len).sum();

        phases.enter(Phase::Diffing);
        let diff = Diff::compute(&source_tags, &listing.tags);
        summary.to_include = diff.to_include.len();
        summary.removal_candidates = listing.count_ids(&diff.to_remove);
        if diff.is_empty() {
            log::info!("{doc_type} index already matches the source");
        } else {
            log::info!(
                "{} {doc_type} records to include, {} documents no longer in the source",
                diff.to_include.len(),
                summary.removal_candidates
            );
        }

        phases.enter(Phase::Including);
        self.include(doc_type, &diff.to_include, &entries, &listing, &mut summary)?;

        if summary.interrupted {
            log::warn!("Shutdown requested, removal skipped");
        } else if !delete {
            if summary.removal_candidates > 0 {
                log::info!(
                    "{} {doc_type} documents left in place, run with --delete to remove them",
                    summary.removal_candidates
                );
            }
        } else {
            let ceiling = self.config.ceilings.get(doc_type);
            if summary.removal_candidates > ceiling {
                let err = SyncError::ExcessiveRemoval {
                    doc_type,
                    candidates: summary.removal_candidates,
                    ceiling,
                };
                log::warn!("{err}, removal skipped");
                summary.removal_blocked = true;
            } else {
                phases.enter(Phase::Removing);
                self.remove(doc_type, &diff.to_remove, &listing, &mut summary)?;
            }
        }

        Ok(self.finish(summary, phases, start))
    }

    fn finish(&self, mut summary: RunSummary, phases: PhaseTracker, start: Instant) -> RunSummary {
        summary.phases = phases.finish();
        summary.elapsed = start.elapsed();
        summary.log();
        summary
    }

    /// Full source listing, one entry per key (latest processing date wins)
    fn list_source(
        &self,
        scope: &RunScope,
        summary: &mut RunSummary,
    ) -> Result<FxHashMap<String, IdentifierEntry>, SyncError> {
        let mut entries: FxHashMap<String, IdentifierEntry> = FxHashMap::default();
        for query in scope.queries(None, None) {
            for entry in Identifiers::new(self.source, scope.doc_type, Listing::Full, query) {
                if is_shutdown_requested() {
                    summary.interrupted = true;
                    return Ok(entries);
                }
                let entry = entry?;
                summary.listed_source += 1;
                let key = entry.key();
                match entries.get_mut(&key) {
                    Some(seen) if seen.processing_date < entry.processing_date => *seen = entry,
                    Some(_) => {}
                    None => {
                        entries.insert(key, entry);
                    }
                }
            }
        }
        log::info!(
            "{} {} identifiers in the source",
            entries.len(),
            scope.doc_type
        );
        Ok(entries)
    }

    fn include(
        &self,
        doc_type: DocumentType,
        keys: &[String],
        entries: &FxHashMap<String, IdentifierEntry>,
        listing: &IndexListing,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        if keys.is_empty() {
            return Ok(());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers.max(1))
            .build()
            .map_err(|e| SyncError::Configuration(format!("cannot start worker pool: {e}")))?;
        let bar = self.progress.counter_bar("include", keys.len() as u64);
        let source = self.source;

        for chunk in keys.chunks(self.config.chunk_size.max(1)) {
            if is_shutdown_requested() {
                summary.interrupted = true;
                break;
            }
            let shaped: Vec<(&IdentifierEntry, Fetched)> = pool.install(|| {
                chunk
                    .par_iter()
                    .filter_map(|key| entries.get(key))
                    .map(|entry| (entry, fetch_and_shape(source, doc_type, entry)))
                    .collect()
            });

            for (entry, docs) in shaped {
                if is_shutdown_requested() {
                    summary.interrupted = true;
                    break;
                }
                bar.inc(1);
                let mut docs = match docs {
                    Fetched::Shaped(docs) => docs,
                    Fetched::Skipped => {
                        summary.skipped += 1;
                        continue;
                    }
                    Fetched::Failed => {
                        summary.failed += 1;
                        continue;
                    }
                };
                let key = entry.key();
                align_ids(doc_type, &key, &mut docs);
                for doc in &mut docs {
                    doc.stamp_processing_date(listed_date(entry));
                }
                self.write(doc_type, &key, docs, Some(listing.ids_of(&key)), summary)?;
            }
            if summary.interrupted {
                break;
            }
        }
        bar.finish_and_clear();
        Ok(())
    }

    fn remove(
        &self,
        doc_type: DocumentType,
        keys: &[String],
        listing: &IndexListing,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        let bar = self.progress.counter_bar("remove", keys.len() as u64);
        for key in keys {
            if is_shutdown_requested() {
                summary.interrupted = true;
                break;
            }
            self.remove_key(doc_type, key, Some(listing.ids_of(key)), summary)?;
            bar.inc(1);
        }
        bar.finish_and_clear();
        Ok(())
    }

    /// Upsert the documents shaped from one source record. For citations,
    /// also delete stored children of the record that the new shaping no
    /// longer produces.
    fn write(
        &self,
        doc_type: DocumentType,
        key: &str,
        docs: Vec<ShapedDocument>,
        stored: Option<&[String]>,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        for doc in &docs {
            self.index.upsert(doc)?;
            summary.included += 1;
        }
        if doc_type != DocumentType::Citation {
            return Ok(());
        }

        let fresh: FxHashSet<&str> = docs.iter().map(ShapedDocument::id).collect();
        let stored = match stored {
            Some(ids) => ids.to_vec(),
            None => self.children(key)?,
        };
        for id in stored.iter().filter(|id| !fresh.contains(id.as_str())) {
            self.delete(doc_type, id, summary)?;
        }
        Ok(())
    }

    /// Delete every document stored for a source key
    fn remove_key(
        &self,
        doc_type: DocumentType,
        key: &str,
        stored: Option<&[String]>,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        let ids = match stored {
            Some(ids) => ids.to_vec(),
            None if doc_type == DocumentType::Citation => self.children(key)?,
            None => vec![key.to_string()],
        };
        for id in &ids {
            self.delete(doc_type, id, summary)?;
        }
        Ok(())
    }

    fn children(&self, article_id: &str) -> Result<Vec<String>, SyncError> {
        Ok(self
            .index
            .indexed_entries(DocumentType::Citation, &IndexScope::parent(article_id))?
            .into_iter()
            .map(|e| e.id)
            .collect())
    }

    fn delete(
        &self,
        doc_type: DocumentType,
        id: &str,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        match self.index.delete(doc_type, id)? {
            DeleteOutcome::Deleted => summary.removed += 1,
            DeleteOutcome::Missing => log::debug!("{doc_type} {id} already absent"),
        }
        Ok(())
    }
}

/// Outcome of fetching and shaping one record
enum Fetched {
    Shaped(Vec<ShapedDocument>),
    /// Missing at the source or malformed
    Skipped,
    /// Fetch failed
    Failed,
}

fn fetch_and_shape<S: MetadataSource + ?Sized>(
    source: &S,
    doc_type: DocumentType,
    entry: &IdentifierEntry,
) -> Fetched {
    if is_shutdown_requested() {
        return Fetched::Skipped;
    }
    match source.record(doc_type, &entry.collection, &entry.code) {
        Ok(Some(record)) => match shape_record(doc_type, &record) {
            Ok(docs) => Fetched::Shaped(docs),
            Err(e) => {
                log::warn!("Skipping {}: {}", entry.key(), SyncError::from(e));
                Fetched::Skipped
            }
        },
        Ok(None) => {
            log::warn!("{doc_type} {} not available at the source", entry.key());
            Fetched::Skipped
        }
        Err(e) => {
            log::error!("Error retrieving {doc_type} {}: {e}", entry.key());
            Fetched::Failed
        }
    }
}

/// Store journal and article documents under their listing key, so the
/// next listing finds them.
fn align_ids(doc_type: DocumentType, key: &str, docs: &mut [ShapedDocument]) {
    if doc_type == DocumentType::Citation {
        return;
    }
    for doc in docs {
        if doc.id() != key {
            log::warn!("{doc_type} {key} shapes to id {}, keeping the listing key", doc.id());
            doc.set_id(key);
        }
    }
}
