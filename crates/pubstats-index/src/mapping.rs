//! Index mappings per document type
//!
//! Strings are exact-match keywords so they can back terms aggregations;
//! only `keywords_analyzed` is full-text.

use serde_json::{json, Map, Value};

use pubstats_core::DocumentType;

const INTEGER_FIELDS: &[(DocumentType, &[&str])] = &[
    (DocumentType::Journal, &[]),
    (
        DocumentType::Article,
        &["pages", "citations", "authors", "acceptance_delta"],
    ),
    (DocumentType::Citation, &[]),
];

const TEXT_FIELDS: &[(DocumentType, &[&str])] = &[
    (DocumentType::Journal, &[]),
    (DocumentType::Article, &["keywords_analyzed"]),
    (DocumentType::Citation, &[]),
];

fn fields(
    table: &[(DocumentType, &'static [&'static str])],
    doc_type: DocumentType,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(t, _)| *t == doc_type)
        .map(|(_, f)| *f)
        .unwrap_or_default()
}

/// Body of the index creation request for `doc_type`
pub fn index_body(doc_type: DocumentType) -> Value {
    let mut properties = Map::new();
    for field in fields(INTEGER_FIELDS, doc_type) {
        properties.insert((*field).to_string(), json!({ "type": "integer" }));
    }
    for field in fields(TEXT_FIELDS, doc_type) {
        properties.insert((*field).to_string(), json!({ "type": "text" }));
    }
    properties.insert("processing_date".into(), json!({ "type": "keyword" }));
    if doc_type == DocumentType::Journal || doc_type == DocumentType::Article {
        properties.insert("is_multidisciplinary".into(), json!({ "type": "boolean" }));
    }
    if doc_type == DocumentType::Citation {
        properties.insert("placeholder".into(), json!({ "type": "boolean" }));
    }

    json!({
        "mappings": {
            "dynamic_templates": [{
                "strings_as_keywords": {
                    "match_mapping_type": "string",
                    "mapping": { "type": "keyword" }
                }
            }],
            "properties": properties
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_mapping() {
        let body = index_body(DocumentType::Article);
        let props = &body["mappings"]["properties"];
        assert_eq!(props["pages"]["type"], "integer");
        assert_eq!(props["keywords_analyzed"]["type"], "text");
        assert_eq!(props["is_multidisciplinary"]["type"], "boolean");
        assert_eq!(
            body["mappings"]["dynamic_templates"][0]["strings_as_keywords"]["mapping"]["type"],
            "keyword"
        );
    }

    #[test]
    fn citation_mapping_has_no_text_fields() {
        let body = index_body(DocumentType::Citation);
        let props = body["mappings"]["properties"].as_object().unwrap();
        assert_eq!(props.len(), 2);
        assert!(props.contains_key("processing_date"));
        assert_eq!(props["placeholder"]["type"], "boolean");
    }
}
