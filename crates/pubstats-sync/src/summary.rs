//! Run phases and the per-run summary

use std::fmt;
use std::time::Duration;

use indicatif::ProgressBar;

use pubstats_core::DocumentType;

/// Steps of a reconciliation run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ListingSource,
    ListingIndex,
    Diffing,
    Including,
    Removing,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ListingSource => "listing source",
            Self::ListingIndex => "listing index",
            Self::Diffing => "diffing",
            Self::Including => "including",
            Self::Removing => "removing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Moves a run through its phases, logging each transition
pub(crate) struct PhaseTracker {
    doc_type: DocumentType,
    stage: ProgressBar,
    visited: Vec<Phase>,
}

impl PhaseTracker {
    pub(crate) fn new(doc_type: DocumentType, stage: ProgressBar) -> Self {
        Self {
            doc_type,
            stage,
            visited: vec![Phase::Idle],
        }
    }

    pub(crate) fn enter(&mut self, phase: Phase) {
        log::info!("[{}] {phase}", self.doc_type);
        self.stage.set_message(phase.to_string());
        self.visited.push(phase);
    }

    pub(crate) fn finish(mut self) -> Vec<Phase> {
        self.enter(Phase::Done);
        self.stage.finish();
        self.visited
    }
}

/// Counts of one common or differential run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub doc_type: DocumentType,
    /// Identifiers read from the source listing
    pub listed_source: usize,
    /// Documents read from the index
    pub listed_index: usize,
    /// Source keys selected for inclusion
    pub to_include: usize,
    /// Documents upserted
    pub included: usize,
    /// Documents deleted
    pub removed: usize,
    /// Records missing at the source or not shapeable
    pub skipped: usize,
    /// Records whose fetch failed
    pub failed: usize,
    /// Documents eligible for removal
    pub removal_candidates: usize,
    /// Removal skipped because the candidates exceeded the ceiling
    pub removal_blocked: bool,
    /// Run stopped early on a shutdown request
    pub interrupted: bool,
    pub phases: Vec<Phase>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn empty(doc_type: DocumentType) -> Self {
        Self {
            doc_type,
            listed_source: 0,
            listed_index: 0,
            to_include: 0,
            included: 0,
            removed: 0,
            skipped: 0,
            failed: 0,
            removal_candidates: 0,
            removal_blocked: false,
            interrupted: false,
            phases: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn visited(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    pub fn log(&self) {
        log::info!("=== {} summary ===", self.doc_type);
        log::info!(
            "Listed: {} in source, {} in index",
            self.listed_source,
            self.listed_index
        );
        log::info!(
            "Included: {} documents from {} records ({} skipped, {} failed)",
            self.included,
            self.to_include,
            self.skipped,
            self.failed
        );
        if self.removal_blocked {
            log::warn!(
                "Removed: none, {} candidates exceed the ceiling",
                self.removal_candidates
            );
        } else {
            log::info!(
                "Removed: {} of {} candidates",
                self.removed,
                self.removal_candidates
            );
        }
        if self.interrupted {
            log::warn!("Run interrupted before completion");
        }
        log::info!("Time: {:.1}s", self.elapsed.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary() {
        let summary = RunSummary::empty(DocumentType::Article);
        assert_eq!(summary.included, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.elapsed, Duration::ZERO);
        assert!(!summary.visited(Phase::Removing));
    }

    #[test]
    fn tracker_records_phases() {
        let mut tracker = PhaseTracker::new(DocumentType::Journal, ProgressBar::hidden());
        tracker.enter(Phase::ListingSource);
        tracker.enter(Phase::Diffing);
        assert_eq!(
            tracker.finish(),
            vec![Phase::Idle, Phase::ListingSource, Phase::Diffing, Phase::Done]
        );
    }

    #[test]
    fn summary_log_does_not_panic() {
        let mut summary = RunSummary::empty(DocumentType::Citation);
        summary.removal_blocked = true;
        summary.interrupted = true;
        summary.elapsed = Duration::from_millis(1500);
        summary.log();
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::ListingSource.to_string(), "listing source");
        assert_eq!(Phase::Done.to_string(), "done");
    }
}
