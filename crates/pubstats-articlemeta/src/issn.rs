//! ISSN validation for operator-supplied scopes

use std::sync::LazyLock;

use regex::Regex;

static ISSN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{3}[0-9xX]$").expect("valid ISSN regex"));

pub fn is_valid_issn(issn: &str) -> bool {
    ISSN_RE.is_match(issn)
}

/// Keep the well-formed ISSNs, warning about each dropped one
pub fn valid_issns<I, S>(issns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    issns
        .into_iter()
        .filter_map(|issn| {
            let issn = issn.as_ref().trim();
            if is_valid_issn(issn) {
                Some(issn.to_string())
            } else {
                log::warn!("Ignoring invalid ISSN '{issn}'");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed() {
        assert!(is_valid_issn("0001-3765"));
        assert!(is_valid_issn("1678-269X"));
        assert!(is_valid_issn("1678-269x"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_valid_issn("00013765"));
        assert!(!is_valid_issn("0001-376"));
        assert!(!is_valid_issn("X001-3765"));
        assert!(!is_valid_issn(" 0001-3765 "));
    }

    #[test]
    fn valid_issns_filters_and_trims() {
        let given = ["0001-3765", "bogus", " 1678-2690 ", ""];
        assert_eq!(valid_issns(given), vec!["0001-3765", "1678-2690"]);
    }
}
