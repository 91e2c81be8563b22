//! The index contract the reconciler writes through

use pubstats_core::{DocumentType, TransportError};
use pubstats_shaper::ShapedDocument;

/// Timestamp assumed for indexed documents that carry none, older than any
/// real processing date
pub const MISSING_PROCESSING_DATE: &str = "1900-01-01";

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Nothing was stored under the id; the delete is already satisfied
    Missing,
}

/// Restricts an index listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexScope {
    pub collection: Option<String>,
    /// Only citations of this article (`{collection}_{pid}`)
    pub parent: Option<String>,
}

impl IndexScope {
    pub fn collection(collection: Option<&str>) -> Self {
        Self {
            collection: collection.map(String::from),
            parent: None,
        }
    }

    pub fn parent(article_id: &str) -> Self {
        Self {
            collection: None,
            parent: Some(article_id.to_string()),
        }
    }
}

/// What the index remembers about one stored document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    /// Primary key in the namespace
    pub id: String,
    /// `{collection}_{code}` of the source record; the parent article for
    /// citations, the id otherwise
    pub key: String,
    pub processing_date: String,
}

/// Write and list access to the index namespaces.
///
/// `upsert` fully replaces the stored document. `delete` of an absent id is
/// not an error and reports [`DeleteOutcome::Missing`].
pub trait DocumentIndex {
    fn upsert(&self, doc: &ShapedDocument) -> Result<(), TransportError>;

    fn delete(&self, doc_type: DocumentType, id: &str) -> Result<DeleteOutcome, TransportError>;

    /// Every stored document of the namespace inside `scope`
    fn indexed_entries(
        &self,
        doc_type: DocumentType,
        scope: &IndexScope,
    ) -> Result<Vec<IndexedEntry>, TransportError>;
}
