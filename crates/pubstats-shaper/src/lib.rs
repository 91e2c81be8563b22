//! Pure mapping of ArticleMeta records into flat index documents
//!
//! One shaper per document type, dispatched by [`DocumentType`] in
//! [`shape_record`]. Journals and articles shape one-to-one; citations fan
//! out to one document per reference of an article, or to a single
//! placeholder when the article has none.

pub mod article;
pub mod citation;
pub mod document;
pub mod geo;
mod iso3166;
pub mod journal;
pub mod text;

pub use article::{ArticleDocument, ArticleShaper};
pub use citation::{CitationDocument, CitationShaper};
pub use document::{ShapeError, ShapedDocument, Shaper};
pub use journal::{JournalDocument, JournalShaper};

use pubstats_articlemeta::SourceRecord;
use pubstats_core::DocumentType;

/// Shape a fetched record into the documents of the `doc_type` namespace.
///
/// Journal and article types yield exactly one document; the citation type
/// yields at least one.
pub fn shape_record(
    doc_type: DocumentType,
    record: &SourceRecord,
) -> Result<Vec<ShapedDocument>, ShapeError> {
    match (doc_type, record) {
        (DocumentType::Journal, SourceRecord::Journal(r)) => {
            Ok(vec![JournalShaper.shape(r)?.into()])
        }
        (DocumentType::Article, SourceRecord::Article(r)) => {
            Ok(vec![ArticleShaper.shape(r)?.into()])
        }
        (DocumentType::Citation, SourceRecord::Article(r)) => Ok(CitationShaper
            .shape(r)?
            .into_iter()
            .map(ShapedDocument::from)
            .collect()),
        (expected, _) => Err(ShapeError::WrongRecordKind { expected }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubstats_articlemeta::{ArticleRecord, Citation, JournalRecord};

    fn article() -> ArticleRecord {
        ArticleRecord {
            collection: "scl".into(),
            publisher_id: Some("S0001-37652012000100017".into()),
            processing_date: Some("2012-03-16".into()),
            publication_date: Some("2012-03-01".into()),
            journal: Some(JournalRecord {
                collection: "scl".into(),
                scielo_issn: Some("0001-3765".into()),
                ..Default::default()
            }),
            citations: vec![Citation::default(); 3],
            ..Default::default()
        }
    }

    #[test]
    fn dispatch_by_type() {
        let record = SourceRecord::Article(article());
        let docs = shape_record(DocumentType::Article, &record).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].doc_type(), DocumentType::Article);
        assert_eq!(docs[0].id(), "scl_S0001-37652012000100017");

        let docs = shape_record(DocumentType::Citation, &record).unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.source_key() == "scl_S0001-37652012000100017"));
    }

    #[test]
    fn mismatched_record_kind() {
        let record = SourceRecord::Journal(JournalRecord {
            collection: "scl".into(),
            scielo_issn: Some("0001-3765".into()),
            ..Default::default()
        });
        assert_eq!(
            shape_record(DocumentType::Article, &record).unwrap_err(),
            ShapeError::WrongRecordKind {
                expected: DocumentType::Article
            }
        );
    }

    #[test]
    fn reshaping_is_byte_identical() {
        let record = SourceRecord::Article(article());
        for doc_type in [DocumentType::Article, DocumentType::Citation] {
            let first = shape_record(doc_type, &record).unwrap();
            let second = shape_record(doc_type, &record).unwrap();
            let a: Vec<String> = first.iter().map(|d| d.to_json().unwrap().to_string()).collect();
            let b: Vec<String> = second.iter().map(|d| d.to_json().unwrap().to_string()).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn stamped_processing_date() {
        let record = SourceRecord::Article(article());
        let mut docs = shape_record(DocumentType::Article, &record).unwrap();
        docs[0].stamp_processing_date("2024-05-01");
        assert_eq!(docs[0].processing_date(), Some("2024-05-01"));
        assert_eq!(docs[0].to_json().unwrap()["processing_date"], "2024-05-01");
    }
}
