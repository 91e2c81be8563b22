//! Document types and their index namespaces

use std::fmt;

use crate::error::SyncError;

/// Kinds of documents kept in the publication index.
///
/// Each variant owns one namespace (one physical index) in the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// Journals (one document per ISSN and collection)
    Journal,
    /// Articles (one document per PID and collection)
    Article,
    /// Bibliographic references (one document per citation of an article)
    Citation,
}

impl DocumentType {
    /// Parse a document type from its name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "journal" => Some(Self::Journal),
            "article" => Some(Self::Article),
            "citation" => Some(Self::Citation),
            _ => None,
        }
    }

    /// Same as [`from_name`](Self::from_name) but reports unknown names as a
    /// configuration error.
    pub fn parse(name: &str) -> Result<Self, SyncError> {
        Self::from_name(name).ok_or_else(|| {
            SyncError::Configuration(format!(
                "invalid document type '{name}', expected one of: journal, article, citation"
            ))
        })
    }

    /// Namespace suffix used for the physical index name
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Article => "article",
            Self::Citation => "citation",
        }
    }

    /// Source endpoint that lists and serves records of this type.
    ///
    /// Citations are children of articles and are read from the article endpoint.
    pub fn source_endpoint(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Article | Self::Citation => "article",
        }
    }

    /// List all document types
    pub fn all() -> &'static [DocumentType] {
        &[Self::Journal, Self::Article, Self::Citation]
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.namespace())
    }
}
