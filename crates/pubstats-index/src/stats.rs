//! Faceted statistics: nested terms aggregations over one namespace

use serde_json::{json, Map, Value};

use pubstats_core::{DocumentType, SyncError, TransportError};

use crate::elastic::ElasticIndex;

/// Bucket limit of each terms aggregation
pub const DEFAULT_BUCKET_SIZE: usize = 1000;

/// Fields that may be aggregated or filtered on
pub fn allowed_facets(doc_type: DocumentType) -> &'static [&'static str] {
    match doc_type {
        DocumentType::Journal => &[
            "collection",
            "subject_areas",
            "issn",
            "status",
            "included_at_year",
        ],
        DocumentType::Article => &[
            "collection",
            "subject_areas",
            "languages",
            "aff_countries",
            "publication_year",
            "document_type",
            "issn",
        ],
        DocumentType::Citation => &[
            "collection",
            "issn",
            "publication_type",
            "publication_year",
        ],
    }
}

/// Nested terms aggregations, each name inside the previous one.
///
/// `["collection", "subject_areas"]` buckets by collection, then by subject
/// area within each collection.
pub fn construct_aggs<S: AsRef<str>>(names: &[S], size: usize) -> Value {
    let mut inner: Option<Value> = None;
    for name in names.iter().rev() {
        let name = name.as_ref();
        let mut node = json!({ "terms": { "field": name, "size": size } });
        if let Some(child) = inner.take() {
            node["aggs"] = child;
        }
        let mut level = Map::new();
        level.insert(name.to_string(), node);
        inner = Some(Value::Object(level));
    }
    json!({ "aggs": inner.unwrap_or_else(|| json!({})) })
}

/// A statistics request against one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub doc_type: DocumentType,
    pub aggs: Vec<String>,
    /// `field = value` restrictions, all of which must hold
    pub filters: Vec<(String, String)>,
    pub size: usize,
}

impl StatsQuery {
    pub fn new(doc_type: DocumentType, aggs: Vec<String>) -> Self {
        Self {
            doc_type,
            aggs,
            filters: Vec::new(),
            size: DEFAULT_BUCKET_SIZE,
        }
    }

    pub fn filter(mut self, field: &str, value: &str) -> Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    /// Reject empty requests and fields outside [`allowed_facets`]
    pub fn validate(&self) -> Result<(), SyncError> {
        let allowed = allowed_facets(self.doc_type);
        if self.aggs.is_empty() {
            return Err(SyncError::Configuration(
                "at least one aggregation is required".into(),
            ));
        }
        let check = |kind: &str, name: &str| {
            if allowed.contains(&name) {
                Ok(())
            } else {
                Err(SyncError::Configuration(format!(
                    "{kind} not allowed for {}: {name} (expected one of {})",
                    self.doc_type,
                    allowed.join(", ")
                )))
            }
        };
        for name in &self.aggs {
            check("aggregation", name)?;
        }
        for (field, _) in &self.filters {
            check("filter", field)?;
        }
        Ok(())
    }

    /// Search body: zero hits, filters as `bool.must` term clauses.
    /// Citation placeholders never count.
    pub fn body(&self) -> Value {
        let mut body = construct_aggs(&self.aggs[..], self.size);
        body["size"] = json!(0);
        let must: Vec<Value> = self
            .filters
            .iter()
            .map(|(field, value)| {
                let mut term = Map::new();
                term.insert(field.clone(), json!(value));
                json!({ "term": term })
            })
            .collect();
        body["query"] = match (self.doc_type, must.is_empty()) {
            (DocumentType::Citation, _) => json!({ "bool": {
                "must": must,
                "must_not": [{ "term": { "placeholder": true } }]
            } }),
            (_, true) => json!({ "match_all": {} }),
            (_, false) => json!({ "bool": { "must": must } }),
        };
        body
    }
}

/// One aggregation bucket and its sub-buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub count: u64,
    pub children: Vec<Bucket>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    /// Documents matching the filters
    pub total: u64,
    pub buckets: Vec<Bucket>,
}

impl StatsReport {
    /// Parse a search response produced by [`StatsQuery::body`]
    pub fn from_response(response: &Value, aggs: &[String]) -> Result<Self, TransportError> {
        let total = match &response["hits"]["total"] {
            Value::Number(n) => n.as_u64().unwrap_or(0),
            other => other["value"].as_u64().unwrap_or(0),
        };
        let buckets = match aggs.split_first() {
            Some((name, rest)) => parse_buckets(&response["aggregations"], name, rest)?,
            None => Vec::new(),
        };
        Ok(Self { total, buckets })
    }

    /// Leaf rows: bucket keys from the outermost aggregation down, and the
    /// document count of the innermost bucket
    pub fn rows(&self) -> Vec<(Vec<String>, u64)> {
        fn walk(buckets: &[Bucket], path: &mut Vec<String>, out: &mut Vec<(Vec<String>, u64)>) {
            for bucket in buckets {
                path.push(bucket.key.clone());
                if bucket.children.is_empty() {
                    out.push((path.clone(), bucket.count));
                } else {
                    walk(&bucket.children, path, out);
                }
                path.pop();
            }
        }
        let mut out = Vec::new();
        walk(&self.buckets, &mut Vec::new(), &mut out);
        out
    }
}

fn parse_buckets(parent: &Value, name: &str, rest: &[String]) -> Result<Vec<Bucket>, TransportError> {
    let Some(buckets) = parent[name]["buckets"].as_array() else {
        return Err(TransportError::Decode(format!(
            "response has no buckets for aggregation '{name}'"
        )));
    };
    buckets
        .iter()
        .map(|bucket| {
            let key = match (&bucket["key_as_string"], &bucket["key"]) {
                (Value::String(s), _) | (_, Value::String(s)) => s.clone(),
                (_, other) => other.to_string(),
            };
            let children = match rest.split_first() {
                Some((child, deeper)) => parse_buckets(bucket, child, deeper)?,
                None => Vec::new(),
            };
            Ok(Bucket {
                key,
                count: bucket["doc_count"].as_u64().unwrap_or(0),
                children,
            })
        })
        .collect()
}

impl ElasticIndex {
    /// Validate and run a faceted statistics query
    pub fn publication_stats(&self, query: &StatsQuery) -> Result<StatsReport, SyncError> {
        query.validate()?;
        let response = self.search(query.doc_type, &query.body())?;
        Ok(StatsReport::from_response(&response, &query.aggs)?)
    }
}
