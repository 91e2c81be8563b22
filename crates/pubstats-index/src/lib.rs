//! Search index adapter: document writes, id/timestamp scrolls and
//! aggregation queries against Elasticsearch.
//!
//! Each document type lives in its own index, `{index}-{namespace}`.

pub mod elastic;
pub mod mapping;
pub mod scroll;
pub mod stats;
mod writer;

pub use elastic::ElasticIndex;
pub use scroll::ScrollCursor;
pub use stats::{allowed_facets, construct_aggs, Bucket, StatsQuery, StatsReport};
pub use writer::{DeleteOutcome, DocumentIndex, IndexScope, IndexedEntry, MISSING_PROCESSING_DATE};
