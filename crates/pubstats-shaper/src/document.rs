//! Shaped documents and the shaping contract

use std::fmt;

use serde::Serialize;

use pubstats_core::{DocumentType, SyncError};

use crate::article::ArticleDocument;
use crate::citation::CitationDocument;
use crate::journal::JournalDocument;

/// Maps one source record to its index representation.
///
/// Implementations are pure: no I/O, and the same input always gives the
/// same output.
pub trait Shaper {
    type Record;
    type Output;

    fn shape(&self, record: &Self::Record) -> Result<Self::Output, ShapeError>;
}

/// Record is missing metadata required to build its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    MissingField {
        /// Best-effort identifier of the offending record
        id: String,
        field: &'static str,
    },
    /// A journal record handed to an article shaper or vice versa
    WrongRecordKind { expected: DocumentType },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { id, field } => {
                write!(f, "record {id} is missing required field '{field}'")
            }
            Self::WrongRecordKind { expected } => {
                write!(f, "expected a {expected} record")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

impl From<ShapeError> for SyncError {
    fn from(e: ShapeError) -> Self {
        let id = match &e {
            ShapeError::MissingField { id, .. } => id.clone(),
            ShapeError::WrongRecordKind { .. } => String::new(),
        };
        SyncError::MalformedRecord {
            id,
            reason: e.to_string(),
        }
    }
}

/// Flat document written to one index namespace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapedDocument {
    Journal(JournalDocument),
    Article(ArticleDocument),
    Citation(CitationDocument),
}

impl ShapedDocument {
    /// Primary key in the namespace
    pub fn id(&self) -> &str {
        match self {
            Self::Journal(d) => &d.id,
            Self::Article(d) => &d.id,
            Self::Citation(d) => &d.id,
        }
    }

    pub fn set_id(&mut self, id: &str) {
        let id = id.to_string();
        match self {
            Self::Journal(d) => d.id = id,
            Self::Article(d) => d.id = id,
            Self::Citation(d) => d.id = id,
        }
    }

    pub fn doc_type(&self) -> DocumentType {
        match self {
            Self::Journal(_) => DocumentType::Journal,
            Self::Article(_) => DocumentType::Article,
            Self::Citation(_) => DocumentType::Citation,
        }
    }

    /// `{collection}_{code}` of the source record this document came from
    pub fn source_key(&self) -> &str {
        match self {
            Self::Citation(d) => &d.article_id,
            other => other.id(),
        }
    }

    pub fn processing_date(&self) -> Option<&str> {
        match self {
            Self::Journal(d) => d.processing_date.as_deref(),
            Self::Article(d) => d.processing_date.as_deref(),
            Self::Citation(d) => d.processing_date.as_deref(),
        }
    }

    /// Record the listing's change marker on the document, so the next
    /// differential pass sees the document as current.
    pub fn stamp_processing_date(&mut self, date: &str) {
        let date = Some(date.to_string());
        match self {
            Self::Journal(d) => d.processing_date = date,
            Self::Article(d) => d.processing_date = date,
            Self::Citation(d) => d.processing_date = date,
        }
    }

    /// JSON body for the index
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<JournalDocument> for ShapedDocument {
    fn from(d: JournalDocument) -> Self {
        Self::Journal(d)
    }
}

impl From<ArticleDocument> for ShapedDocument {
    fn from(d: ArticleDocument) -> Self {
        Self::Article(d)
    }
}

impl From<CitationDocument> for ShapedDocument {
    fn from(d: CitationDocument) -> Self {
        Self::Citation(d)
    }
}
