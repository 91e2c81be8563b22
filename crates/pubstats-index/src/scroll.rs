//! Scroll over stored document ids and timestamps

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use pubstats_core::{DocumentType, TransportError};

use crate::elastic::{scope_query, ElasticIndex};
use crate::writer::{IndexScope, IndexedEntry, MISSING_PROCESSING_DATE};

/// Keep-alive of the server-side scroll context between pages
const KEEP_ALIVE: &str = "2m";

#[derive(Debug, Deserialize)]
struct ScrollPage {
    #[serde(rename = "_scroll_id", default)]
    scroll_id: Option<String>,
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_id")]
    doc_id: String,
    #[serde(rename = "_source", default)]
    source: HitSource,
}

#[derive(Debug, Default, Deserialize)]
struct HitSource {
    id: Option<String>,
    article_id: Option<String>,
    processing_date: Option<String>,
}

impl Hit {
    fn into_entry(self, doc_type: DocumentType) -> IndexedEntry {
        let id = self.source.id.unwrap_or(self.doc_id);
        let key = match (doc_type, self.source.article_id) {
            (DocumentType::Citation, Some(parent)) => parent,
            _ => id.clone(),
        };
        IndexedEntry {
            id,
            key,
            processing_date: self
                .source
                .processing_date
                .unwrap_or_else(|| MISSING_PROCESSING_DATE.to_string()),
        }
    }
}

/// Lazy iterator over the [`IndexedEntry`] values of a namespace.
///
/// The server-side context is released by [`ScrollCursor::close`], or when
/// the cursor is dropped.
pub struct ScrollCursor<'a> {
    index: &'a ElasticIndex,
    doc_type: DocumentType,
    scroll_id: Option<String>,
    page: std::vec::IntoIter<IndexedEntry>,
    exhausted: bool,
}

impl<'a> ScrollCursor<'a> {
    pub(crate) fn open(
        index: &'a ElasticIndex,
        doc_type: DocumentType,
        scope: &IndexScope,
    ) -> Result<Self, TransportError> {
        let name = index.index_name(doc_type);
        let body = json!({
            "size": index.scroll_size(),
            "_source": ["id", "article_id", "processing_date"],
            "sort": ["_doc"],
            "query": scope_query(scope),
        });
        let response = index.send(
            Method::POST,
            &format!("{name}/_search?scroll={KEEP_ALIVE}"),
            Some(&body),
        )?;

        let mut cursor = Self {
            index,
            doc_type,
            scroll_id: None,
            page: Vec::new().into_iter(),
            exhausted: false,
        };
        if response.status == 404 {
            log::warn!("Index {name} does not exist, treating it as empty");
            cursor.exhausted = true;
            return Ok(cursor);
        }
        let page: ScrollPage = response.error_for_status()?.json()?;
        cursor.load(page);
        Ok(cursor)
    }

    fn load(&mut self, page: ScrollPage) {
        if page.scroll_id.is_some() {
            self.scroll_id = page.scroll_id;
        }
        if page.hits.hits.is_empty() {
            self.exhausted = true;
        }
        let doc_type = self.doc_type;
        self.page = page
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.into_entry(doc_type))
            .collect::<Vec<_>>()
            .into_iter();
    }

    fn next_page(&mut self) -> Result<(), TransportError> {
        let Some(scroll_id) = self.scroll_id.clone() else {
            self.exhausted = true;
            return Ok(());
        };
        let body = json!({ "scroll": KEEP_ALIVE, "scroll_id": scroll_id });
        let page: ScrollPage = self
            .index
            .send(Method::POST, "_search/scroll", Some(&body))?
            .error_for_status()?
            .json()?;
        self.load(page);
        Ok(())
    }

    /// Release the server-side scroll context
    pub fn close(mut self) -> Result<(), TransportError> {
        self.clear()
    }

    fn clear(&mut self) -> Result<(), TransportError> {
        let Some(scroll_id) = self.scroll_id.take() else {
            return Ok(());
        };
        let body: Value = json!({ "scroll_id": [scroll_id] });
        let response = self.index.send(Method::DELETE, "_search/scroll", Some(&body))?;
        // Expired contexts answer 404
        if response.status != 404 {
            response.error_for_status()?;
        }
        Ok(())
    }
}

impl Iterator for ScrollCursor<'_> {
    type Item = Result<IndexedEntry, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.page.next() {
                return Some(Ok(entry));
            }
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.next_page() {
                self.exhausted = true;
                return Some(Err(e));
            }
        }
    }
}

impl Drop for ScrollCursor<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.clear() {
            log::warn!("Failed to clear scroll context: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> ScrollPage {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn hit_defaults_missing_timestamp() {
        let page = page(
            r#"{"_scroll_id": "abc", "hits": {"hits": [
                {"_id": "scl_0001-3765", "_source": {"id": "scl_0001-3765"}}
            ]}}"#,
        );
        assert_eq!(page.scroll_id.as_deref(), Some("abc"));
        let entry = page
            .hits
            .hits
            .into_iter()
            .next()
            .unwrap()
            .into_entry(DocumentType::Journal);
        assert_eq!(entry.id, "scl_0001-3765");
        assert_eq!(entry.key, "scl_0001-3765");
        assert_eq!(entry.processing_date, MISSING_PROCESSING_DATE);
    }

    #[test]
    fn citation_hits_key_by_parent() {
        let page = page(
            r#"{"hits": {"hits": [
                {"_id": "scl_S1_2", "_source": {"article_id": "scl_S1", "processing_date": "2024-01-02"}}
            ]}}"#,
        );
        let entry = page
            .hits
            .hits
            .into_iter()
            .next()
            .unwrap()
            .into_entry(DocumentType::Citation);
        assert_eq!(entry.id, "scl_S1_2");
        assert_eq!(entry.key, "scl_S1");
        assert_eq!(entry.processing_date, "2024-01-02");
    }

    #[test]
    fn hit_without_source_uses_doc_id() {
        let page = page(r#"{"hits": {"hits": [{"_id": "arg_S2"}]}}"#);
        let entry = page
            .hits
            .hits
            .into_iter()
            .next()
            .unwrap()
            .into_entry(DocumentType::Article);
        assert_eq!(entry.id, "arg_S2");
        assert_eq!(entry.key, "arg_S2");
    }
}
