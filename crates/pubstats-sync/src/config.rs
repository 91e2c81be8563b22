//! Reconciler settings and run scopes

use chrono::{Days, Local, NaiveDate};

use pubstats_articlemeta::IdentifierQuery;
use pubstats_core::{DocumentType, SyncError};

/// Default window of a common-mode run, in days before today
pub const DEFAULT_HISTORY_DAYS: u64 = 30;

/// Maximum number of documents a removal step may delete per type.
///
/// A larger candidate set points at a broken or partial source listing, and
/// the removal step is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalCeilings {
    pub journal: usize,
    pub article: usize,
    pub citation: usize,
}

impl Default for RemovalCeilings {
    fn default() -> Self {
        Self {
            journal: 20,
            article: 2000,
            citation: 100_000,
        }
    }
}

impl RemovalCeilings {
    pub fn get(&self, doc_type: DocumentType) -> usize {
        match doc_type {
            DocumentType::Journal => self.journal,
            DocumentType::Article => self.article,
            DocumentType::Citation => self.citation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    pub ceilings: RemovalCeilings,
    /// Threads fetching and shaping records during inclusion
    pub workers: usize,
    /// Records fetched and shaped per parallel batch
    pub chunk_size: usize,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            ceilings: RemovalCeilings::default(),
            workers: 4,
            chunk_size: 1000,
        }
    }
}

/// Which records a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunScope {
    pub doc_type: DocumentType,
    pub collection: Option<String>,
    /// Restrict listings to these journals; empty means all
    pub issns: Vec<String>,
}

impl RunScope {
    pub fn new(doc_type: DocumentType) -> Self {
        Self {
            doc_type,
            collection: None,
            issns: Vec::new(),
        }
    }

    pub fn collection(mut self, collection: Option<&str>) -> Self {
        self.collection = collection.map(String::from);
        self
    }

    pub fn issns(mut self, issns: Vec<String>) -> Self {
        self.issns = issns;
        self
    }

    /// One listing query per ISSN, or a single collection-wide query
    pub(crate) fn queries(
        &self,
        from_date: Option<NaiveDate>,
        until_date: Option<NaiveDate>,
    ) -> Vec<IdentifierQuery> {
        let base = IdentifierQuery {
            collection: self.collection.clone(),
            issn: None,
            from_date,
            until_date,
        };
        if self.issns.is_empty() {
            return vec![base];
        }
        self.issns
            .iter()
            .map(|issn| IdentifierQuery {
                issn: Some(issn.clone()),
                ..base.clone()
            })
            .collect()
    }
}

/// Date window of a common-mode run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub until: NaiveDate,
}

impl DateWindow {
    /// Window ending today; missing bounds default to the last
    /// [`DEFAULT_HISTORY_DAYS`] days
    pub fn resolve(from: Option<NaiveDate>, until: Option<NaiveDate>) -> Result<Self, SyncError> {
        let today = Local::now().date_naive();
        Self::resolve_at(today, from, until)
    }

    pub fn resolve_at(
        today: NaiveDate,
        from: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Result<Self, SyncError> {
        let until = until.unwrap_or(today);
        let from = match from {
            Some(from) => from,
            None => until
                .checked_sub_days(Days::new(DEFAULT_HISTORY_DAYS))
                .ok_or_else(|| SyncError::Configuration(format!("invalid until date {until}")))?,
        };
        if from > until {
            return Err(SyncError::Configuration(format!(
                "from date {from} is after until date {until}"
            )));
        }
        Ok(Self { from, until })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn default_ceilings() {
        let c = RemovalCeilings::default();
        assert_eq!(c.get(DocumentType::Journal), 20);
        assert_eq!(c.get(DocumentType::Article), 2000);
        assert_eq!(c.get(DocumentType::Citation), 100_000);
    }

    #[test]
    fn window_defaults_to_last_thirty_days() {
        let w = DateWindow::resolve_at(date("2024-03-31"), None, None).unwrap();
        assert_eq!(w.from, date("2024-03-01"));
        assert_eq!(w.until, date("2024-03-31"));
    }

    #[test]
    fn window_from_is_relative_to_until() {
        let w = DateWindow::resolve_at(date("2024-03-31"), None, Some(date("2024-02-10"))).unwrap();
        assert_eq!(w.from, date("2024-01-11"));
    }

    #[test]
    fn inverted_window_rejected() {
        let err = DateWindow::resolve_at(
            date("2024-03-31"),
            Some(date("2024-03-10")),
            Some(date("2024-03-01")),
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::Configuration(_)));
    }

    #[test]
    fn one_query_per_issn() {
        let scope = RunScope::new(DocumentType::Article)
            .collection(Some("scl"))
            .issns(vec!["0001-3765".into(), "0100-879X".into()]);
        let queries = scope.queries(None, None);
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].issn.as_deref(), Some("0100-879X"));
        assert!(queries.iter().all(|q| q.collection.as_deref() == Some("scl")));

        assert_eq!(RunScope::new(DocumentType::Journal).queries(None, None).len(), 1);
    }
}
