//! In-memory source and index used by the reconciler tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use pubstats_articlemeta::{
    ArticleRecord, Citation, IdentifierEntry, IdentifierQuery, JournalRecord, MetadataSource,
    SourceRecord,
};
use pubstats_core::{DocumentType, TransportError};
use pubstats_index::{
    DeleteOutcome, DocumentIndex, IndexScope, IndexedEntry, MISSING_PROCESSING_DATE,
};
use pubstats_shaper::ShapedDocument;

pub fn entry(key: &str, date: &str) -> IdentifierEntry {
    let (collection, code) = key.split_once('_').unwrap();
    IdentifierEntry {
        collection: collection.into(),
        code: code.into(),
        processing_date: date.into(),
        event: None,
    }
}

pub fn event(key: &str, date: &str, event: &str) -> IdentifierEntry {
    IdentifierEntry {
        event: Some(event.into()),
        ..entry(key, date)
    }
}

pub fn journal(key: &str, date: &str) -> SourceRecord {
    let (collection, issn) = key.split_once('_').unwrap();
    SourceRecord::Journal(JournalRecord {
        collection: collection.into(),
        scielo_issn: Some(issn.into()),
        title: Some(format!("Journal {issn}")),
        processing_date: Some(date.into()),
        ..Default::default()
    })
}

pub fn article(key: &str, date: &str, citations: usize) -> SourceRecord {
    let (collection, pid) = key.split_once('_').unwrap();
    SourceRecord::Article(ArticleRecord {
        collection: collection.into(),
        publisher_id: Some(pid.into()),
        processing_date: Some(date.into()),
        publication_date: Some("2012-03-01".into()),
        citations: vec![Citation::default(); citations],
        journal: Some(JournalRecord {
            collection: collection.into(),
            scielo_issn: Some("0001-3765".into()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Catalog holding journal and article listings
#[derive(Default)]
pub struct FakeSource {
    pub journals: Vec<IdentifierEntry>,
    pub articles: Vec<IdentifierEntry>,
    pub history: Vec<IdentifierEntry>,
    pub records: BTreeMap<String, SourceRecord>,
    /// Keys whose record fetch fails
    pub broken: Vec<String>,
    /// Listing fails at every offset
    pub listing_down: bool,
    pub fetched: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_journal(mut self, key: &str, date: &str) -> Self {
        self.journals.push(entry(key, date));
        self.records.insert(key.into(), journal(key, date));
        self
    }

    pub fn with_article(mut self, key: &str, date: &str, citations: usize) -> Self {
        self.articles.push(entry(key, date));
        self.records.insert(key.into(), article(key, date, citations));
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        let mut fetched = self.fetched.lock().unwrap().clone();
        fetched.sort();
        fetched
    }

    fn page(
        entries: &[IdentifierEntry],
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Vec<IdentifierEntry> {
        entries
            .iter()
            .filter(|e| query.collection.as_ref().map_or(true, |c| *c == e.collection))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl MetadataSource for FakeSource {
    fn identifiers(
        &self,
        doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError> {
        if self.listing_down {
            return Err(TransportError::Http {
                status: Some(503),
                message: "unavailable".into(),
            });
        }
        let entries = match doc_type {
            DocumentType::Journal => &self.journals,
            DocumentType::Article | DocumentType::Citation => &self.articles,
        };
        Ok(Self::page(entries, query, offset, limit))
    }

    fn history(
        &self,
        _doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError> {
        Ok(Self::page(&self.history, query, offset, limit))
    }

    fn record(
        &self,
        _doc_type: DocumentType,
        collection: &str,
        code: &str,
    ) -> Result<Option<SourceRecord>, TransportError> {
        let key = format!("{collection}_{code}");
        self.fetched.lock().unwrap().push(key.clone());
        if self.broken.contains(&key) {
            return Err(TransportError::Http {
                status: Some(500),
                message: "internal error".into(),
            });
        }
        Ok(self.records.get(&key).cloned())
    }
}

/// Index keeping JSON documents per namespace
#[derive(Default)]
pub struct MemoryIndex {
    /// `(namespace, id)` → stored body
    pub docs: RefCell<BTreeMap<(&'static str, String), Value>>,
    pub upserts: RefCell<Vec<String>>,
    pub deletes: RefCell<Vec<String>>,
}

impl MemoryIndex {
    /// Store a document as an earlier run would have
    pub fn seed(&self, doc_type: DocumentType, id: &str, date: Option<&str>) {
        let collection = id.split('_').next().unwrap();
        let mut doc = json!({ "id": id, "collection": collection });
        if let Some(date) = date {
            doc["processing_date"] = json!(date);
        }
        if doc_type == DocumentType::Citation {
            let (parent, _) = id.rsplit_once('_').unwrap();
            doc["article_id"] = json!(parent);
        }
        self.docs
            .borrow_mut()
            .insert((doc_type.namespace(), id.to_string()), doc);
    }

    pub fn get(&self, doc_type: DocumentType, id: &str) -> Option<Value> {
        self.docs
            .borrow()
            .get(&(doc_type.namespace(), id.to_string()))
            .cloned()
    }

    pub fn ids(&self, doc_type: DocumentType) -> Vec<String> {
        self.docs
            .borrow()
            .keys()
            .filter(|(ns, _)| *ns == doc_type.namespace())
            .map(|(_, id)| id.clone())
            .collect()
    }

    pub fn upserts(&self) -> Vec<String> {
        self.upserts.borrow().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.borrow().clone()
    }
}

impl DocumentIndex for MemoryIndex {
    fn upsert(&self, doc: &ShapedDocument) -> Result<(), TransportError> {
        let body = doc.to_json()?;
        self.docs
            .borrow_mut()
            .insert((doc.doc_type().namespace(), doc.id().to_string()), body);
        self.upserts.borrow_mut().push(doc.id().to_string());
        Ok(())
    }

    fn delete(&self, doc_type: DocumentType, id: &str) -> Result<DeleteOutcome, TransportError> {
        self.deletes.borrow_mut().push(id.to_string());
        Ok(match self.docs.borrow_mut().remove(&(doc_type.namespace(), id.to_string())) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::Missing,
        })
    }

    fn indexed_entries(
        &self,
        doc_type: DocumentType,
        scope: &IndexScope,
    ) -> Result<Vec<IndexedEntry>, TransportError> {
        let docs = self.docs.borrow();
        Ok(docs
            .iter()
            .filter(|((ns, _), _)| *ns == doc_type.namespace())
            .filter(|(_, doc)| {
                scope
                    .collection
                    .as_ref()
                    .map_or(true, |c| doc["collection"] == c.as_str())
            })
            .filter(|(_, doc)| {
                scope
                    .parent
                    .as_ref()
                    .map_or(true, |p| doc["article_id"] == p.as_str())
            })
            .map(|((_, id), doc)| IndexedEntry {
                id: id.clone(),
                key: match doc_type {
                    DocumentType::Citation => doc["article_id"].as_str().unwrap_or(id).to_string(),
                    _ => id.clone(),
                },
                processing_date: doc["processing_date"]
                    .as_str()
                    .unwrap_or(MISSING_PROCESSING_DATE)
                    .to_string(),
            })
            .collect())
    }
}
