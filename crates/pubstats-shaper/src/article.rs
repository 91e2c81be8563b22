//! Article shaping
//!
//! Affiliation-derived fields are sets: sorted and deduplicated, so the
//! serialized document does not depend on the source's list order.

use std::collections::BTreeSet;

use serde::Serialize;

use pubstats_articlemeta::{ArticleRecord, JournalRecord};

use crate::document::{ShapeError, Shaper};
use crate::geo::{self, UNDEFINED};
use crate::journal::{license, non_empty, subject_areas};
use crate::text::{acceptance_delta, cleanup_string, pages, year};

/// Length of the issue prefix of an article PID
const ISSUE_PID_LEN: usize = 18;

/// Article document of the `article` namespace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDocument {
    pub id: String,
    pub pid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
    pub issue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<String>,
    pub subject_areas: Vec<String>,
    pub is_multidisciplinary: bool,
    pub collection: String,
    pub document_type: String,
    pub pages: u32,
    pub languages: Vec<String>,
    pub aff_countries: Vec<String>,
    pub aff_states_code: Vec<String>,
    pub aff_states_name: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aff_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aff_names_cleaned: Option<Vec<String>>,
    pub citations: usize,
    pub authors: usize,
    pub keywords: Vec<String>,
    pub keywords_analyzed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_delta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi_prefix: Option<String>,
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleShaper;

impl Shaper for ArticleShaper {
    type Record = ArticleRecord;
    type Output = ArticleDocument;

    fn shape(&self, record: &ArticleRecord) -> Result<ArticleDocument, ShapeError> {
        let Required {
            pid,
            publication_date,
            journal,
        } = required(record)?;
        let (subject_areas, is_multidisciplinary) = subject_areas(journal.subject_areas.as_deref());
        let affiliations = Affiliations::from_record(record);
        let keywords = keywords(record);
        let doi = non_empty(record.doi.as_deref()).map(str::to_string);
        let license = match record.permissions.as_ref() {
            Some(p) if non_empty(p.id.as_deref()).is_some() => license(Some(p)),
            _ => license(journal.permissions.as_ref()),
        };

        Ok(ArticleDocument {
            id: format!("{}_{pid}", record.collection),
            pid: pid.to_string(),
            issn: non_empty(journal.scielo_issn.as_deref()).map(str::to_string),
            journal_title: journal.title.clone(),
            issue: format!(
                "{}_{}",
                record.collection,
                pid.chars().take(ISSUE_PID_LEN).collect::<String>()
            ),
            publication_date: Some(publication_date.to_string()),
            publication_year: year(publication_date),
            subject_areas,
            is_multidisciplinary,
            collection: record.collection.clone(),
            document_type: record
                .document_type
                .clone()
                .unwrap_or_else(|| UNDEFINED.to_string()),
            pages: pages(record.start_page.as_deref(), record.end_page.as_deref()),
            languages: languages(record),
            aff_countries: affiliations.countries,
            aff_states_code: affiliations.states_code,
            aff_states_name: affiliations.states_name,
            aff_names: affiliations.names,
            aff_names_cleaned: affiliations.names_cleaned,
            citations: record.citations.len(),
            authors: record.authors.len(),
            keywords_analyzed: keywords.clone(),
            keywords,
            acceptance_delta: acceptance_delta(
                record.receive_date.as_deref(),
                record.acceptance_date.as_deref(),
            ),
            doi_prefix: doi.as_deref().and_then(doi_prefix),
            doi,
            license,
            processing_date: record.processing_date.clone(),
        })
    }
}

/// Metadata an article record cannot be shaped without
pub(crate) struct Required<'a> {
    pub pid: &'a str,
    pub publication_date: &'a str,
    pub journal: &'a JournalRecord,
}

pub(crate) fn required(record: &ArticleRecord) -> Result<Required<'_>, ShapeError> {
    if record.collection.is_empty() {
        return Err(ShapeError::MissingField {
            id: record.publisher_id.clone().unwrap_or_else(|| "?".into()),
            field: "collection",
        });
    }
    let pid = non_empty(record.publisher_id.as_deref()).ok_or_else(|| ShapeError::MissingField {
        id: format!("{}_?", record.collection),
        field: "publisher_id",
    })?;
    let missing = |field: &'static str| ShapeError::MissingField {
        id: format!("{}_{pid}", record.collection),
        field,
    };
    let publication_date =
        non_empty(record.publication_date.as_deref()).ok_or_else(|| missing("publication_date"))?;
    let journal = record.journal.as_ref().ok_or_else(|| missing("journal"))?;
    Ok(Required {
        pid,
        publication_date,
        journal,
    })
}

/// Registrant prefix of a DOI (`10.1590/...` → `10.1590`)
fn doi_prefix(doi: &str) -> Option<String> {
    doi.split_once('/').map(|(prefix, _)| prefix.to_string())
}

fn languages(record: &ArticleRecord) -> Vec<String> {
    let original = non_empty(record.original_language.as_deref()).unwrap_or(UNDEFINED);
    record
        .languages
        .iter()
        .filter_map(|l| non_empty(Some(l)))
        .chain(std::iter::once(original))
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn keywords(record: &ArticleRecord) -> Vec<String> {
    record
        .keywords
        .values()
        .flatten()
        .filter_map(|k| non_empty(Some(k)))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Affiliation-derived fields
struct Affiliations {
    countries: Vec<String>,
    states_code: Vec<String>,
    states_name: Vec<String>,
    names: Option<Vec<String>>,
    names_cleaned: Option<Vec<String>>,
}

impl Affiliations {
    fn from_record(record: &ArticleRecord) -> Self {
        if record.affiliations.is_empty() {
            return Self {
                countries: undefined(),
                states_code: undefined(),
                states_name: undefined(),
                names: None,
                names_cleaned: None,
            };
        }

        let mut countries = BTreeSet::new();
        let mut states_code = BTreeSet::new();
        let mut states_name = BTreeSet::new();
        let mut names = BTreeSet::new();
        let mut names_cleaned = BTreeSet::new();

        for aff in &record.affiliations {
            let country = geo::country(aff.country.as_deref().unwrap_or_default());
            if let Some(state) = non_empty(aff.state.as_deref()) {
                let code = geo::state(state, &country);
                if let Some(name) = geo::division_name(&code) {
                    states_name.insert(name.to_string());
                }
                states_code.insert(code);
            }
            countries.insert(country);

            if let Some(name) = non_empty(aff.institution.as_deref()) {
                names.insert(name.to_string());
                let cleaned = cleanup_string(name);
                if !cleaned.is_empty() {
                    names_cleaned.insert(cleaned);
                }
            }
        }

        Self {
            countries: or_undefined(countries),
            states_code: or_undefined(states_code),
            states_name: or_undefined(states_name),
            names: (!names.is_empty()).then(|| names.into_iter().collect()),
            names_cleaned: (!names_cleaned.is_empty()).then(|| names_cleaned.into_iter().collect()),
        }
    }
}

fn undefined() -> Vec<String> {
    vec![UNDEFINED.to_string()]
}

fn or_undefined(set: BTreeSet<String>) -> Vec<String> {
    if set.is_empty() {
        undefined()
    } else {
        set.into_iter().collect()
    }
}
