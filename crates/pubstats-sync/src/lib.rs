//! Source-to-index synchronization
//!
//! [`Reconciler::run_common`] streams the source's change history into the
//! index. [`Reconciler::run_differential`] compares the whole source listing
//! with the index by `(key, processing_date)` tags and converges the index,
//! removing stale documents only on request and under a per-type ceiling.

pub mod config;
pub mod reconciler;
pub mod summary;
pub mod tag;

pub use config::{DateWindow, ReconcileConfig, RemovalCeilings, RunScope, DEFAULT_HISTORY_DAYS};
pub use reconciler::Reconciler;
pub use summary::{Phase, RunSummary};
pub use tag::{Diff, IdentifierTag, IndexListing};
