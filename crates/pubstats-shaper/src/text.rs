//! String, page and date derivations used by the shapers

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid markup tag regex"));

/// Strip markup tags (`<i>`, `</sup>`, ...)
pub fn remove_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Lowercase, drop accents and markup, keep only letters and spaces, trim.
///
/// `"  <b>Universidade de São Paulo</b> (USP)"` → `"universidade de sao paulo usp"`
pub fn cleanup_string(text: &str) -> String {
    let untagged = remove_tags(text);
    let cleaned: String = untagged
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect();
    cleaned.trim().to_string()
}

/// Accent-free, uppercased, trimmed form used as a lookup key
pub fn fold_key(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// First four characters of an ISO date (`"2012-03"` → `"2012"`)
pub fn year(date: &str) -> Option<String> {
    let year: String = date.chars().take(4).collect();
    (year.chars().count() == 4).then_some(year)
}

/// Page count `last - first`.
///
/// Missing or non-numeric bounds, and ranges that would be negative, give 0.
pub fn pages(first: Option<&str>, last: Option<&str>) -> u32 {
    let parse = |s: Option<&str>| s.and_then(|s| s.trim().parse::<i64>().ok());
    match (parse(first), parse(last)) {
        (Some(first), Some(last)) if last > first => {
            u32::try_from(last - first).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Days from submission to acceptance.
///
/// `None` when either date is not `YYYY-MM-DD` or acceptance precedes
/// submission.
pub fn acceptance_delta(receive_date: Option<&str>, acceptance_date: Option<&str>) -> Option<i64> {
    let received = parse_iso_date(receive_date?)?;
    let accepted = parse_iso_date(acceptance_date?)?;
    let days = (accepted - received).num_days();
    (days >= 0).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_tags_keeps_text() {
        assert_eq!(remove_tags("<i>Aedes</i> aegypti"), "Aedes aegypti");
    }

    #[test]
    fn cleanup_removes_accents_and_punctuation() {
        assert_eq!(
            cleanup_string("  <b>Universidade de São Paulo</b> (USP) "),
            "universidade de sao paulo usp"
        );
        assert_eq!(cleanup_string("Universidad Nacional, Bogotá-D.C."), "universidad nacional bogotadc");
    }

    #[test]
    fn cleanup_of_empty_is_empty() {
        assert_eq!(cleanup_string(""), "");
        assert_eq!(cleanup_string("  123 - 456 "), "");
    }

    #[test]
    fn fold_key_is_accent_and_case_insensitive() {
        assert_eq!(fold_key(" São Paulo "), "SAO PAULO");
        assert_eq!(fold_key("sao paulo"), fold_key("SÃO PAULO"));
    }

    #[test]
    fn year_prefix() {
        assert_eq!(year("2012-03-01").as_deref(), Some("2012"));
        assert_eq!(year("2012").as_deref(), Some("2012"));
        assert_eq!(year("201"), None);
        assert_eq!(year(""), None);
    }

    #[test]
    fn pages_difference() {
        assert_eq!(pages(Some("10"), Some("25")), 15);
        assert_eq!(pages(Some("10"), Some("10")), 0);
    }

    #[test]
    fn pages_missing_or_invalid_is_zero() {
        assert_eq!(pages(None, Some("25")), 0);
        assert_eq!(pages(Some("10"), None), 0);
        assert_eq!(pages(Some("e23"), Some("e30")), 0);
        assert_eq!(pages(None, None), 0);
    }

    #[test]
    fn pages_reversed_is_zero() {
        assert_eq!(pages(Some("30"), Some("10")), 0);
    }

    #[test]
    fn acceptance_delta_days() {
        assert_eq!(acceptance_delta(Some("2020-01-01"), Some("2020-01-10")), Some(9));
        assert_eq!(acceptance_delta(Some("2019-12-31"), Some("2020-01-01")), Some(1));
        assert_eq!(acceptance_delta(Some("2020-01-01"), Some("2020-01-01")), Some(0));
    }

    #[test]
    fn acceptance_delta_malformed_is_absent() {
        assert_eq!(acceptance_delta(Some("2020-01"), Some("2020-01-10")), None);
        assert_eq!(acceptance_delta(Some("2020-01-01"), Some("10/01/2020")), None);
        assert_eq!(acceptance_delta(None, Some("2020-01-10")), None);
        assert_eq!(acceptance_delta(Some("2020-01-01"), None), None);
    }

    #[test]
    fn acceptance_delta_negative_is_absent() {
        assert_eq!(acceptance_delta(Some("2020-01-10"), Some("2020-01-01")), None);
    }
}
