//! Elasticsearch REST client

use reqwest::Method;
use serde_json::{json, Value};

use pubstats_core::{
    DocumentType, HttpClient, HttpConfig, HttpResponse, SyncError, TransportError,
};
use pubstats_shaper::ShapedDocument;

use crate::mapping::index_body;
use crate::scroll::ScrollCursor;
use crate::writer::{DeleteOutcome, DocumentIndex, IndexScope, IndexedEntry};

pub const DEFAULT_SCROLL_SIZE: usize = 1000;

/// One Elasticsearch cluster, one index per document type
#[derive(Debug, Clone)]
pub struct ElasticIndex {
    http: HttpClient,
    base_url: String,
    index: String,
    scroll_size: usize,
}

impl ElasticIndex {
    /// `index` is the name prefix; namespaces become `{index}-{namespace}`
    pub fn new(base_url: &str, index: &str, http: &HttpConfig) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(http)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            index: index.to_string(),
            scroll_size: DEFAULT_SCROLL_SIZE,
        })
    }

    pub fn with_scroll_size(mut self, size: usize) -> Self {
        self.scroll_size = size.max(1);
        self
    }

    pub fn scroll_size(&self) -> usize {
        self.scroll_size
    }

    /// Concrete index holding the `doc_type` namespace
    pub fn index_name(&self, doc_type: DocumentType) -> String {
        format!("{}-{}", self.index, doc_type.namespace())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    pub(crate) fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError> {
        self.http.send(method, &self.url(path), body)
    }

    /// Create the namespace index with its mapping.
    ///
    /// Returns `false` when it already existed.
    pub fn create_index(&self, doc_type: DocumentType) -> Result<bool, TransportError> {
        let name = self.index_name(doc_type);
        let response = self.send(Method::PUT, &name, Some(&index_body(doc_type)))?;
        if response.status == 400 && response.body.contains("resource_already_exists_exception") {
            log::debug!("Index {name} already available");
            return Ok(false);
        }
        response.error_for_status()?;
        log::info!("Created index {name}");
        Ok(true)
    }

    /// Run a search body against a namespace and return the raw response
    pub fn search(&self, doc_type: DocumentType, body: &Value) -> Result<Value, TransportError> {
        let path = format!("{}/_search", self.index_name(doc_type));
        self.send(Method::POST, &path, Some(body))?
            .error_for_status()?
            .json()
    }

    /// Open a scroll over the ids and timestamps stored in a namespace
    pub fn scroll(
        &self,
        doc_type: DocumentType,
        scope: &IndexScope,
    ) -> Result<ScrollCursor<'_>, TransportError> {
        ScrollCursor::open(self, doc_type, scope)
    }

    fn doc_path(&self, doc_type: DocumentType, id: &str) -> String {
        format!("{}/_doc/{id}", self.index_name(doc_type))
    }
}

/// `term` filters for a listing scope
pub(crate) fn scope_query(scope: &IndexScope) -> Value {
    let mut must = Vec::new();
    if let Some(collection) = &scope.collection {
        must.push(json!({ "term": { "collection": collection } }));
    }
    if let Some(parent) = &scope.parent {
        must.push(json!({ "term": { "article_id": parent } }));
    }
    if must.is_empty() {
        json!({ "match_all": {} })
    } else {
        json!({ "bool": { "must": must } })
    }
}

impl DocumentIndex for ElasticIndex {
    fn upsert(&self, doc: &ShapedDocument) -> Result<(), TransportError> {
        let body = doc.to_json()?;
        self.send(Method::PUT, &self.doc_path(doc.doc_type(), doc.id()), Some(&body))?
            .error_for_status()?;
        log::debug!("Upserted {} {}", doc.doc_type(), doc.id());
        Ok(())
    }

    fn delete(&self, doc_type: DocumentType, id: &str) -> Result<DeleteOutcome, TransportError> {
        let response = self.send(Method::DELETE, &self.doc_path(doc_type, id), None)?;
        if response.status == 404 {
            let missing = SyncError::NotFound {
                namespace: self.index_name(doc_type),
                id: id.to_string(),
            };
            log::debug!("Delete skipped: {missing}");
            return Ok(DeleteOutcome::Missing);
        }
        response.error_for_status()?;
        log::debug!("Deleted {doc_type} {id}");
        Ok(DeleteOutcome::Deleted)
    }

    fn indexed_entries(
        &self,
        doc_type: DocumentType,
        scope: &IndexScope,
    ) -> Result<Vec<IndexedEntry>, TransportError> {
        let mut cursor = self.scroll(doc_type, scope)?;
        let entries = cursor.by_ref().collect::<Result<Vec<_>, _>>()?;
        cursor.close()?;
        log::debug!("{} {doc_type} documents in index", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ElasticIndex {
        ElasticIndex::new("http://localhost:9200/", "publication", &HttpConfig::default()).unwrap()
    }

    #[test]
    fn namespace_index_names() {
        let es = index();
        assert_eq!(es.index_name(DocumentType::Journal), "publication-journal");
        assert_eq!(es.index_name(DocumentType::Citation), "publication-citation");
        assert_eq!(
            es.doc_path(DocumentType::Article, "scl_S0001-37652012000100017"),
            "publication-article/_doc/scl_S0001-37652012000100017"
        );
        assert_eq!(es.url("_search/scroll"), "http://localhost:9200/_search/scroll");
    }

    #[test]
    fn scroll_size_is_positive() {
        assert_eq!(index().with_scroll_size(0).scroll_size(), 1);
        assert_eq!(index().scroll_size(), DEFAULT_SCROLL_SIZE);
    }

    #[test]
    fn scope_queries() {
        assert_eq!(scope_query(&IndexScope::default()), json!({ "match_all": {} }));
        assert_eq!(
            scope_query(&IndexScope::collection(Some("scl"))),
            json!({ "bool": { "must": [{ "term": { "collection": "scl" } }] } })
        );
        assert_eq!(
            scope_query(&IndexScope::parent("scl_S1")),
            json!({ "bool": { "must": [{ "term": { "article_id": "scl_S1" } }] } })
        );
    }

    #[test]
    #[ignore = "requires a running Elasticsearch"]
    fn create_index_twice() {
        let es = index();
        es.create_index(DocumentType::Journal).unwrap();
        assert!(!es.create_index(DocumentType::Journal).unwrap());
    }
}
