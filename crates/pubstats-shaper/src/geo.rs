//! Country and state normalization for affiliations

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::iso3166::{COUNTRIES, COUNTRY_ALIASES, DIVISIONS};
use crate::text::fold_key;

pub const UNDEFINED: &str = "undefined";

struct Tables {
    /// alpha-2 code → name
    countries: FxHashMap<&'static str, &'static str>,
    /// folded name → alpha-2 code
    country_names: FxHashMap<String, &'static str>,
    /// division code → name
    divisions: FxHashMap<&'static str, &'static str>,
    /// country code → folded division name → division code
    division_names: FxHashMap<&'static str, FxHashMap<String, &'static str>>,
    /// folded division name → division code, for names unique across countries
    unique_division_names: FxHashMap<String, &'static str>,
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let countries = COUNTRIES.iter().copied().collect();

    let mut country_names: FxHashMap<String, &'static str> = COUNTRIES
        .iter()
        .map(|(code, name)| (fold_key(name), *code))
        .collect();
    for &(alias, code) in COUNTRY_ALIASES {
        country_names.entry(fold_key(alias)).or_insert(code);
    }

    let divisions = DIVISIONS.iter().copied().collect();

    let mut division_names: FxHashMap<&'static str, FxHashMap<String, &'static str>> =
        FxHashMap::default();
    let mut by_name: FxHashMap<String, Vec<&'static str>> = FxHashMap::default();
    for &(code, name) in DIVISIONS {
        let country = code.split('-').next().unwrap_or(code);
        division_names
            .entry(country)
            .or_default()
            .insert(fold_key(name), code);
        by_name.entry(fold_key(name)).or_default().push(code);
    }
    let unique_division_names = by_name
        .into_iter()
        .filter_map(|(name, codes)| match codes.as_slice() {
            [code] => Some((name, *code)),
            _ => None,
        })
        .collect();

    Tables {
        countries,
        country_names,
        divisions,
        division_names,
        unique_division_names,
    }
});

/// Normalize a country code or name to its ISO 3166-1 alpha-2 code.
///
/// `"BR"`, `"br"`, `"Brazil"` and `"Brasil"` all give `"BR"`; anything
/// unknown gives `"undefined"`.
pub fn country(value: &str) -> String {
    let tables = &*TABLES;
    let upper = value.trim().to_uppercase();
    if let Some((code, _)) = tables.countries.get_key_value(upper.as_str()) {
        return (*code).to_string();
    }
    tables
        .country_names
        .get(&fold_key(value))
        .map_or_else(|| UNDEFINED.to_string(), |code| (*code).to_string())
}

/// Normalize a state/province to its ISO 3166-2 code.
///
/// Tries `{country}-{state}` as a code first (`"SP"`, `"BR"` → `"BR-SP"`),
/// then the state as a division name, preferring divisions of `country_code`
/// (`"São Paulo"`, `"BR"` → `"BR-SP"`). Unknown gives `"undefined"`.
pub fn state(value: &str, country_code: &str) -> String {
    let tables = &*TABLES;
    let country_code = country_code.trim().to_uppercase();
    let candidate = format!("{country_code}-{}", value.trim()).to_uppercase();
    if let Some((code, _)) = tables.divisions.get_key_value(candidate.as_str()) {
        return (*code).to_string();
    }

    let folded = fold_key(value);
    if let Some(code) = tables
        .division_names
        .get(country_code.as_str())
        .and_then(|names| names.get(&folded))
        .or_else(|| tables.unique_division_names.get(&folded))
    {
        return (*code).to_string();
    }
    UNDEFINED.to_string()
}

/// Display name of an ISO 3166-2 division code
pub fn division_name(code: &str) -> Option<&'static str> {
    TABLES.divisions.get(code).copied()
}
