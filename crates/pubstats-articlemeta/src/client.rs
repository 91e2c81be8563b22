//! ArticleMeta REST client

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use pubstats_core::{DocumentType, HttpClient, HttpConfig, TransportError};

use crate::records::{IdentifierEntry, SourceRecord};

pub const DEFAULT_BASE_URL: &str = "http://articlemeta.scielo.org/api/v1";

/// Scope of an identifier listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierQuery {
    pub collection: Option<String>,
    pub issn: Option<String>,
    /// Only entries changed on or after this date
    pub from_date: Option<NaiveDate>,
    /// Only entries changed on or before this date
    pub until_date: Option<NaiveDate>,
}

impl IdentifierQuery {
    pub fn collection(collection: Option<&str>) -> Self {
        Self {
            collection: collection.map(String::from),
            ..Default::default()
        }
    }

    fn params(&self, offset: usize, limit: usize) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);
        if let Some(collection) = &self.collection {
            params.push(("collection", collection.clone()));
        }
        if let Some(issn) = &self.issn {
            params.push(("issn", issn.clone()));
        }
        if let Some(from) = self.from_date {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(until) = self.until_date {
            params.push(("until", until.format("%Y-%m-%d").to_string()));
        }
        params.push(("offset", offset.to_string()));
        params.push(("limit", limit.to_string()));
        params
    }
}

/// Read-only catalog of journals and articles.
///
/// `Sync` so inclusion can fetch records from several threads.
pub trait MetadataSource: Sync {
    /// One page of every currently known identifier
    fn identifiers(
        &self,
        doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError>;

    /// One page of identifiers changed inside the query's date window,
    /// each tagged with an `add` or `delete` event
    fn history(
        &self,
        doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError>;

    /// Full record, or `None` when the source has nothing under that code
    fn record(
        &self,
        doc_type: DocumentType,
        collection: &str,
        code: &str,
    ) -> Result<Option<SourceRecord>, TransportError>;
}

/// Collection (repository partition) known to the catalog
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub acronym: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    objects: Vec<IdentifierEntry>,
}

/// HTTP client for the ArticleMeta v1 REST API
#[derive(Debug, Clone)]
pub struct ArticleMetaClient {
    http: HttpClient,
    base_url: String,
}

impl ArticleMetaClient {
    pub fn new(base_url: &str, http: &HttpConfig) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(http)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn listing(
        &self,
        path: String,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError> {
        let page: ListingPage = self
            .http
            .get_json(&self.url(&path), &query.params(offset, limit))?;
        log::debug!("{path}: offset {offset}, {} identifiers", page.objects.len());
        Ok(page.objects)
    }

    /// Collections available in the catalog
    pub fn collections(&self) -> Result<Vec<Collection>, TransportError> {
        self.http.get_json(&self.url("collection/identifiers/"), &[])
    }
}

impl MetadataSource for ArticleMetaClient {
    fn identifiers(
        &self,
        doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError> {
        let path = format!("{}/identifiers/", doc_type.source_endpoint());
        self.listing(path, query, offset, limit)
    }

    fn history(
        &self,
        doc_type: DocumentType,
        query: &IdentifierQuery,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<IdentifierEntry>, TransportError> {
        let path = format!("{}/history/", doc_type.source_endpoint());
        self.listing(path, query, offset, limit)
    }

    fn record(
        &self,
        doc_type: DocumentType,
        collection: &str,
        code: &str,
    ) -> Result<Option<SourceRecord>, TransportError> {
        let endpoint = doc_type.source_endpoint();
        let code_param = match doc_type {
            DocumentType::Journal => "issn",
            DocumentType::Article | DocumentType::Citation => "code",
        };
        let params = [
            ("collection", collection.to_string()),
            (code_param, code.to_string()),
        ];
        let body: Value = self.http.get_json(&self.url(&format!("{endpoint}/")), &params)?;
        let record = decode_record(doc_type, body)?;
        if record.is_some() {
            log::debug!("{endpoint} loaded: {collection}_{code}");
        }
        Ok(record)
    }
}

/// Decode a record body: an object, a list holding the object first, or null
fn decode_record(doc_type: DocumentType, body: Value) -> Result<Option<SourceRecord>, TransportError> {
    let body = match body {
        Value::Null => return Ok(None),
        Value::Array(items) => match items.into_iter().next() {
            Some(first) if !first.is_null() => first,
            _ => return Ok(None),
        },
        Value::Object(map) if map.is_empty() => return Ok(None),
        other => other,
    };
    let record = match doc_type {
        DocumentType::Journal => SourceRecord::Journal(serde_json::from_value(body)?),
        DocumentType::Article | DocumentType::Citation => {
            SourceRecord::Article(serde_json::from_value(body)?)
        }
    };
    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_params_full_listing() {
        let query = IdentifierQuery {
            collection: Some("scl".into()),
            issn: Some("0001-3765".into()),
            ..Default::default()
        };
        let params = query.params(2000, 1000);
        assert_eq!(
            params,
            vec![
                ("collection", "scl".to_string()),
                ("issn", "0001-3765".to_string()),
                ("offset", "2000".to_string()),
                ("limit", "1000".to_string()),
            ]
        );
    }

    #[test]
    fn query_params_date_window() {
        let query = IdentifierQuery {
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            until_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };
        let params = query.params(0, 1000);
        assert!(params.contains(&("from", "2024-01-01".to_string())));
        assert!(params.contains(&("until", "2024-01-31".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "collection"));
    }

    #[test]
    fn decode_null_record() {
        assert!(decode_record(DocumentType::Article, Value::Null).unwrap().is_none());
        assert!(decode_record(DocumentType::Article, json!([])).unwrap().is_none());
        assert!(decode_record(DocumentType::Article, json!({})).unwrap().is_none());
    }

    #[test]
    fn decode_journal_from_list() {
        let body = json!([{"collection": "scl", "scielo_issn": "0001-3765"}]);
        match decode_record(DocumentType::Journal, body).unwrap() {
            Some(SourceRecord::Journal(j)) => {
                assert_eq!(j.scielo_issn.as_deref(), Some("0001-3765"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decode_citation_reads_article() {
        let body = json!({"collection": "scl", "publisher_id": "S1"});
        assert!(matches!(
            decode_record(DocumentType::Citation, body).unwrap(),
            Some(SourceRecord::Article(_))
        ));
    }

    #[test]
    fn decode_wrong_shape_is_decode_error() {
        let body = json!({"publisher_id": {"nested": true}});
        let err = decode_record(DocumentType::Article, body).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client =
            ArticleMetaClient::new("http://example.org/api/v1/", &HttpConfig::default()).unwrap();
        assert_eq!(
            client.url("article/identifiers/"),
            "http://example.org/api/v1/article/identifiers/"
        );
    }
}
