//! Identifier tags and the source/index set difference

use rustc_hash::{FxHashMap, FxHashSet};

use pubstats_articlemeta::IdentifierEntry;
use pubstats_index::{IndexedEntry, MISSING_PROCESSING_DATE};

/// A record identity together with its change marker.
///
/// Two tags are equal only when both the key and the processing date match,
/// so a set difference catches new and updated records alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentifierTag {
    /// `{collection}_{code}`
    pub key: String,
    pub processing_date: String,
}

impl IdentifierTag {
    pub fn new(key: impl Into<String>, processing_date: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            processing_date: processing_date.into(),
        }
    }
}

impl From<&IdentifierEntry> for IdentifierTag {
    fn from(entry: &IdentifierEntry) -> Self {
        Self::new(entry.key(), listed_date(entry))
    }
}

/// Processing date of a listing entry, with undated entries sharing the
/// index's placeholder date.
pub(crate) fn listed_date(entry: &IdentifierEntry) -> &str {
    if entry.processing_date.is_empty() {
        MISSING_PROCESSING_DATE
    } else {
        &entry.processing_date
    }
}

impl From<&IndexedEntry> for IdentifierTag {
    fn from(entry: &IndexedEntry) -> Self {
        Self::new(entry.key.as_str(), entry.processing_date.as_str())
    }
}

/// Outcome of comparing the source listing against the index listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Keys whose tag is in the source but not in the index, sorted
    pub to_include: Vec<String>,
    /// Keys in the index with no tag of any date in the source, sorted
    pub to_remove: Vec<String>,
}

impl Diff {
    pub fn compute(source: &FxHashSet<IdentifierTag>, index: &FxHashSet<IdentifierTag>) -> Self {
        let mut to_include: Vec<String> = source
            .difference(index)
            .map(|tag| tag.key.clone())
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        to_include.sort_unstable();

        let source_keys: FxHashSet<&str> = source.iter().map(|t| t.key.as_str()).collect();
        let mut to_remove: Vec<String> = index
            .iter()
            .map(|t| t.key.as_str())
            .filter(|key| !source_keys.contains(key))
            .collect::<FxHashSet<_>>()
            .into_iter()
            .map(String::from)
            .collect();
        to_remove.sort_unstable();

        Self {
            to_include,
            to_remove,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_include.is_empty() && self.to_remove.is_empty()
    }
}

/// Index listing grouped by source key
#[derive(Debug, Default)]
pub struct IndexListing {
    pub tags: FxHashSet<IdentifierTag>,
    /// Document ids stored under each key (several for citations)
    pub ids: FxHashMap<String, Vec<String>>,
}

impl IndexListing {
    pub fn from_entries(entries: Vec<IndexedEntry>) -> Self {
        let mut listing = Self::default();
        for entry in entries {
            listing.tags.insert(IdentifierTag::from(&entry));
            listing.ids.entry(entry.key).or_default().push(entry.id);
        }
        listing
    }

    /// Ids stored under `key`
    pub fn ids_of(&self, key: &str) -> &[String] {
        self.ids.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of documents stored under all `keys`
    pub fn count_ids<'a>(&self, keys: impl IntoIterator<Item = &'a String>) -> usize {
        keys.into_iter().map(|k| self.ids_of(k).len()).sum()
    }
}
