//! Citation shaping: one article fans out to one document per reference
//!
//! An article without references still leaves a placeholder document
//! (`{article_id}_0`), so the namespace records which articles it has seen
//! and at which processing date.

use serde::Serialize;

use pubstats_articlemeta::ArticleRecord;

use crate::article::{required, Required};
use crate::document::{ShapeError, Shaper};
use crate::geo::UNDEFINED;
use crate::journal::non_empty;
use crate::text::year;

/// Citation document of the `citation` namespace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationDocument {
    /// `{article_id}_{n}`, `n` counting from 1 in source order
    pub id: String,
    pub article_id: String,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    pub publication_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<String>,
    /// Stands in for an article that cites nothing
    #[serde(skip_serializing_if = "is_false")]
    pub placeholder: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CitationShaper;

impl Shaper for CitationShaper {
    type Record = ArticleRecord;
    type Output = Vec<CitationDocument>;

    fn shape(&self, record: &ArticleRecord) -> Result<Vec<CitationDocument>, ShapeError> {
        let Required { pid, journal, .. } = required(record)?;
        let article_id = format!("{}_{pid}", record.collection);
        let issn = non_empty(journal.scielo_issn.as_deref()).map(str::to_string);

        if record.citations.is_empty() {
            return Ok(vec![CitationDocument {
                id: format!("{article_id}_0"),
                article_id,
                collection: record.collection.clone(),
                issn,
                publication_type: UNDEFINED.to_string(),
                source: None,
                title: None,
                publication_year: None,
                processing_date: record.processing_date.clone(),
                placeholder: true,
            }]);
        }

        Ok(record
            .citations
            .iter()
            .enumerate()
            .map(|(i, citation)| CitationDocument {
                id: format!("{article_id}_{}", i + 1),
                article_id: article_id.clone(),
                collection: record.collection.clone(),
                issn: issn.clone(),
                publication_type: non_empty(citation.publication_type.as_deref())
                    .unwrap_or(UNDEFINED)
                    .to_string(),
                source: citation.source.clone(),
                title: citation.title.clone(),
                publication_year: citation.date.as_deref().and_then(year),
                processing_date: record.processing_date.clone(),
                placeholder: false,
            })
            .collect())
    }
}
