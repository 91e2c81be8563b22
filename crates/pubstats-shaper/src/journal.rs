//! Journal shaping: source record → index document

use std::collections::BTreeSet;

use serde::Serialize;

use pubstats_articlemeta::{JournalRecord, Permissions};

use crate::document::{ShapeError, Shaper};
use crate::geo::{self, UNDEFINED};
use crate::text::year;

/// Journals spanning more distinct subject areas than this are multidisciplinary
pub const MULTIDISCIPLINARY_THRESHOLD: usize = 2;

pub const MULTIDISCIPLINARY: &str = "Multidisciplinary";

/// Journal document of the `journal` namespace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalDocument {
    pub id: String,
    pub issn: String,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub subject_areas: Vec<String>,
    pub is_multidisciplinary: bool,
    pub license: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_at_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JournalShaper;

impl Shaper for JournalShaper {
    type Record = JournalRecord;
    type Output = JournalDocument;

    fn shape(&self, record: &JournalRecord) -> Result<JournalDocument, ShapeError> {
        let issn = non_empty(record.scielo_issn.as_deref()).ok_or_else(|| {
            ShapeError::MissingField {
                id: format!("{}_?", record.collection),
                field: "scielo_issn",
            }
        })?;
        let id = format!("{}_{issn}", record.collection);
        if record.collection.is_empty() {
            return Err(ShapeError::MissingField {
                id,
                field: "collection",
            });
        }

        let (subject_areas, is_multidisciplinary) =
            subject_areas(record.subject_areas.as_deref());

        Ok(JournalDocument {
            id,
            issn: issn.to_string(),
            collection: record.collection.clone(),
            title: record.title.clone(),
            subject_areas,
            is_multidisciplinary,
            license: license(record.permissions.as_ref()),
            status: record
                .current_status
                .clone()
                .unwrap_or_else(|| UNDEFINED.to_string()),
            included_at_year: record.creation_date.as_deref().and_then(year),
            publisher_name: record.publisher_name.clone(),
            publisher_country: record.publisher_country.as_deref().map(geo::country),
            processing_date: record.processing_date.clone(),
        })
    }
}

/// Subject areas and the multidisciplinary flag.
///
/// More than [`MULTIDISCIPLINARY_THRESHOLD`] distinct areas collapse to
/// `["Multidisciplinary"]`; an absent or empty list is `["undefined"]`.
pub fn subject_areas(areas: Option<&[String]>) -> (Vec<String>, bool) {
    let areas = match areas {
        Some(areas) if !areas.is_empty() => areas,
        _ => return (vec![UNDEFINED.to_string()], false),
    };
    let distinct: BTreeSet<&str> = areas.iter().map(String::as_str).collect();
    if distinct.len() > MULTIDISCIPLINARY_THRESHOLD {
        (vec![MULTIDISCIPLINARY.to_string()], true)
    } else {
        (areas.to_vec(), false)
    }
}

/// License id from a permissions sub-record, `"undefined"` when absent
pub fn license(permissions: Option<&Permissions>) -> String {
    permissions
        .and_then(|p| non_empty(p.id.as_deref()))
        .unwrap_or(UNDEFINED)
        .to_string()
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JournalRecord {
        serde_json::from_str(
            r#"{
                "collection": "scl",
                "scielo_issn": "0001-3765",
                "title": "Anais da Academia Brasileira de Ciências",
                "subject_areas": ["Biological Sciences", "Exact and Earth Sciences"],
                "permissions": {"id": "by/4.0"},
                "current_status": "current",
                "creation_date": "2000-09-15",
                "processing_date": "2024-02-01",
                "publisher_name": "Academia Brasileira de Ciências",
                "publisher_country": "Brasil"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn shape_journal() {
        let doc = JournalShaper.shape(&sample()).unwrap();
        assert_eq!(doc.id, "scl_0001-3765");
        assert_eq!(doc.issn, "0001-3765");
        assert_eq!(doc.license, "by/4.0");
        assert_eq!(doc.status, "current");
        assert_eq!(doc.included_at_year.as_deref(), Some("2000"));
        assert_eq!(doc.publisher_country.as_deref(), Some("BR"));
        assert!(!doc.is_multidisciplinary);
        assert_eq!(doc.subject_areas.len(), 2);
    }

    #[test]
    fn shape_is_deterministic() {
        let record = sample();
        let a = serde_json::to_string(&JournalShaper.shape(&record).unwrap()).unwrap();
        let b = serde_json::to_string(&JournalShaper.shape(&record).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_issn_is_malformed() {
        let mut record = sample();
        record.scielo_issn = None;
        let err = JournalShaper.shape(&record).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingField {
                id: "scl_?".into(),
                field: "scielo_issn"
            }
        );
    }

    #[test]
    fn missing_collection_is_malformed() {
        let mut record = sample();
        record.collection = String::new();
        assert!(matches!(
            JournalShaper.shape(&record),
            Err(ShapeError::MissingField {
                field: "collection",
                ..
            })
        ));
    }

    #[test]
    fn defaults_for_absent_fields() {
        let record = JournalRecord {
            collection: "arg".into(),
            scielo_issn: Some("0325-0075".into()),
            ..Default::default()
        };
        let doc = JournalShaper.shape(&record).unwrap();
        assert_eq!(doc.subject_areas, vec!["undefined"]);
        assert_eq!(doc.license, "undefined");
        assert_eq!(doc.status, "undefined");
        assert!(doc.included_at_year.is_none());

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("title").is_none());
        assert!(json.get("processing_date").is_none());
    }

    #[test]
    fn many_subject_areas_collapse() {
        let areas = vec![
            "Health Sciences".to_string(),
            "Human Sciences".to_string(),
            "Engineering".to_string(),
        ];
        let (out, flag) = subject_areas(Some(&areas));
        assert_eq!(out, vec!["Multidisciplinary"]);
        assert!(flag);
    }

    #[test]
    fn repeated_subject_areas_count_once() {
        let areas = vec![
            "Health Sciences".to_string(),
            "Health Sciences".to_string(),
            "Engineering".to_string(),
        ];
        let (out, flag) = subject_areas(Some(&areas));
        assert_eq!(out, areas);
        assert!(!flag);
    }

    #[test]
    fn empty_subject_areas_undefined() {
        assert_eq!(subject_areas(Some(&[])), (vec!["undefined".to_string()], false));
        assert_eq!(subject_areas(None), (vec!["undefined".to_string()], false));
    }

    #[test]
    fn license_without_id_is_undefined() {
        assert_eq!(license(Some(&Permissions { id: None })), "undefined");
        assert_eq!(license(Some(&Permissions { id: Some(" ".into()) })), "undefined");
        assert_eq!(license(None), "undefined");
    }
}
