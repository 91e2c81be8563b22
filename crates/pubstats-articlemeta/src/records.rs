//! Source record models as served by the ArticleMeta API

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// === Identifier listing ===

/// Change event attached to a history listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Add,
    Delete,
}

/// One entry of an identifier or history listing
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IdentifierEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection: String,

    /// Article PID, or journal ISSN (journal listings send a list of ISSNs,
    /// the first one is the code)
    #[serde(default, deserialize_with = "string_or_first")]
    pub code: String,

    /// Last-modified marker (`date` on history listings)
    #[serde(default, alias = "date", deserialize_with = "null_as_default")]
    pub processing_date: String,

    #[serde(default)]
    pub event: Option<String>,
}

impl IdentifierEntry {
    /// `{collection}_{code}`: the document id of the record in the index
    pub fn key(&self) -> String {
        format!("{}_{}", self.collection, self.code)
    }

    /// Entries without an explicit `delete` event are additions
    pub fn event(&self) -> Event {
        match self.event.as_deref() {
            Some(e) if e.eq_ignore_ascii_case("delete") => Event::Delete,
            _ => Event::Add,
        }
    }
}

// === Journal ===

/// Journal metadata record
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct JournalRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection: String,

    #[serde(default)]
    pub scielo_issn: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub subject_areas: Option<Vec<String>>,

    #[serde(default)]
    pub permissions: Option<Permissions>,

    #[serde(default)]
    pub current_status: Option<String>,

    /// Date the journal was included in the collection
    #[serde(default)]
    pub creation_date: Option<String>,

    #[serde(default)]
    pub processing_date: Option<String>,

    #[serde(default)]
    pub publisher_name: Option<String>,

    #[serde(default)]
    pub publisher_country: Option<String>,
}

/// License/permissions sub-record
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Permissions {
    #[serde(default)]
    pub id: Option<String>,
}

// === Article ===

/// Article metadata record, with its journal embedded
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection: String,

    #[serde(default)]
    pub publisher_id: Option<String>,

    #[serde(default)]
    pub processing_date: Option<String>,

    #[serde(default)]
    pub publication_date: Option<String>,

    #[serde(default)]
    pub document_type: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub start_page: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub end_page: Option<String>,

    #[serde(default)]
    pub original_language: Option<String>,

    /// Languages the full text or abstract is available in
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<Affiliation>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,

    /// Keyword lists keyed by language
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub receive_date: Option<String>,

    #[serde(default)]
    pub acceptance_date: Option<String>,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Citation>,

    #[serde(default)]
    pub permissions: Option<Permissions>,

    #[serde(default)]
    pub journal: Option<JournalRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Affiliation {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub given_names: Option<String>,
}

/// Bibliographic reference cited by an article
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Citation {
    #[serde(default)]
    pub title: Option<String>,
    /// Journal or book the reference was published in
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub publication_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A full record fetched from the source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    Journal(JournalRecord),
    Article(ArticleRecord),
}

// === serde helpers ===

/// Accept `"x"` or `["x", ...]` (first element); anything else is empty
fn string_or_first<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .find_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .unwrap_or_default(),
        _ => String::new(),
    })
}

/// `null` decodes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Page numbers arrive as strings ("12", "e23") or as bare numbers
fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_identifier_code_from_list() {
        let json = r#"{"collection": "scl", "code": ["0001-3765", "1678-2690"], "processing_date": "2020-05-01"}"#;
        let entry: IdentifierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.code, "0001-3765");
        assert_eq!(entry.key(), "scl_0001-3765");
        assert_eq!(entry.event(), Event::Add);
    }

    #[test]
    fn history_entry_uses_date_alias() {
        let json = r#"{"collection": "arg", "code": "S0325-00752010000100001", "date": "2021-01-02", "event": "delete"}"#;
        let entry: IdentifierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.processing_date, "2021-01-02");
        assert_eq!(entry.event(), Event::Delete);
    }

    #[test]
    fn missing_processing_date_is_empty() {
        let json = r#"{"collection": "scl", "code": "S1"}"#;
        let entry: IdentifierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.processing_date, "");
    }

    #[test]
    fn empty_code_list() {
        let json = r#"{"collection": "scl", "code": []}"#;
        let entry: IdentifierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.code, "");
    }

    #[test]
    fn article_pages_accept_numbers_and_strings() {
        let json = r#"{"publisher_id": "S1", "start_page": 10, "end_page": "25"}"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.start_page.as_deref(), Some("10"));
        assert_eq!(record.end_page.as_deref(), Some("25"));
    }

    #[test]
    fn article_null_page_is_none() {
        let json = r#"{"publisher_id": "S1", "start_page": null}"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert!(record.start_page.is_none());
        assert!(record.end_page.is_none());
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let json = r#"{
            "collection": "scl",
            "publisher_id": "S1",
            "languages": null,
            "affiliations": null,
            "authors": null,
            "keywords": null,
            "citations": null
        }"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert!(record.languages.is_empty());
        assert!(record.affiliations.is_empty());
        assert!(record.authors.is_empty());
        assert!(record.keywords.is_empty());
        assert!(record.citations.is_empty());
    }

    #[test]
    fn null_collection_and_date_are_empty() {
        let json = r#"{"collection": null, "code": "S1", "processing_date": null}"#;
        let entry: IdentifierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.collection, "");
        assert_eq!(entry.processing_date, "");
    }

    #[test]
    fn article_embeds_journal() {
        let json = r#"{
            "collection": "scl",
            "publisher_id": "S0001-37652012000100001",
            "keywords": {"en": ["ecology"], "pt": ["ecologia"]},
            "journal": {"collection": "scl", "scielo_issn": "0001-3765", "title": "Anais"}
        }"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        let journal = record.journal.unwrap();
        assert_eq!(journal.scielo_issn.as_deref(), Some("0001-3765"));
        assert_eq!(record.keywords.len(), 2);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"scielo_issn": "0001-3765", "v880": [{"_": "x"}]}"#;
        let record: JournalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.scielo_issn.as_deref(), Some("0001-3765"));
    }
}
