//! Kept in its own test binary: the shutdown flag is process-wide

mod common;

use common::{FakeSource, MemoryIndex};
use pubstats_core::{clear_shutdown, request_shutdown, DocumentType, ProgressContext};
use pubstats_sync::{Phase, ReconcileConfig, Reconciler, RunScope};

#[test]
fn shutdown_stops_before_any_write() {
    let source = FakeSource::default()
        .with_journal("scl_A", "2024-01-01")
        .with_journal("scl_B", "2024-01-01");
    let index = MemoryIndex::default();
    index.seed(DocumentType::Journal, "scl_Z", Some("2024-01-01"));
    let config = ReconcileConfig::default();
    let progress = ProgressContext::hidden();
    let reconciler = Reconciler::new(&source, &index, &config, &progress);

    request_shutdown();
    let summary = reconciler
        .run_differential(&RunScope::new(DocumentType::Journal), true)
        .unwrap();
    clear_shutdown();

    assert!(summary.interrupted);
    assert!(index.upserts().is_empty());
    assert!(index.deletes().is_empty());
    assert!(!summary.visited(Phase::Removing));
    assert!(summary.visited(Phase::Done));

    let summary = reconciler
        .run_differential(&RunScope::new(DocumentType::Journal), true)
        .unwrap();
    assert!(!summary.interrupted);
    assert_eq!(index.upserts().len(), 2);
    assert_eq!(index.deletes(), vec!["scl_Z"]);
}
