//! Localized month-name lookup.
//!
//! The lookup table is data, not host locale state: the default is generated
//! from chrono's bundled `pt_BR` names, and callers can supply their own
//! entries when a page uses spellings the locale data does not cover.

use std::collections::HashMap;

use chrono::{Locale, Month, NaiveDate};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized month name '{0}'")]
pub struct MonthParseError(pub String);

/// Case- and accent-insensitive map from month name to [`Month`].
#[derive(Debug, Clone)]
pub struct MonthNames {
    by_name: HashMap<String, Month>,
}

impl MonthNames {
    /// Build a table from explicit `(name, month)` pairs. Later entries win
    /// when two names fold to the same key.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Month)>,
        S: AsRef<str>,
    {
        let by_name = entries
            .into_iter()
            .map(|(name, month)| (fold(name.as_ref()), month))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        Self { by_name }
    }

    /// Full month names (`%B`) for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        Self::new(calendar_months().filter_map(|month| {
            let first_day = NaiveDate::from_ymd_opt(2000, month.number_from_month(), 1)?
                .and_hms_opt(0, 0, 0)?
                .and_utc();
            let name = first_day.format_localized("%B", locale).to_string();
            Some((name, month))
        }))
    }

    /// Brazilian Portuguese, the locale of the Receita Federal pages.
    pub fn portuguese() -> Self {
        Self::for_locale(Locale::pt_BR)
    }

    pub fn resolve(&self, name: &str) -> Result<Month, MonthParseError> {
        self.by_name
            .get(&fold(name))
            .copied()
            .ok_or_else(|| MonthParseError(name.trim().to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::portuguese()
    }
}

fn calendar_months() -> impl Iterator<Item = Month> {
    std::iter::successors(Some(Month::January), |month| Some(month.succ())).take(12)
}

/// Lookup key: whitespace collapsed, lowercased, combining marks dropped.
fn fold(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PORTUGUESE: [&str; 12] = [
        "Janeiro",
        "Fevereiro",
        "Março",
        "Abril",
        "Maio",
        "Junho",
        "Julho",
        "Agosto",
        "Setembro",
        "Outubro",
        "Novembro",
        "Dezembro",
    ];

    #[test]
    fn test_portuguese_table_has_twelve_names() {
        assert_eq!(MonthNames::portuguese().len(), 12);
    }

    #[test]
    fn test_resolves_every_portuguese_month() {
        let months = MonthNames::portuguese();

        for (idx, name) in PORTUGUESE.iter().enumerate() {
            let month = months.resolve(name).expect("should resolve");
            assert_eq!(month.number_from_month(), idx as u32 + 1, "month {name}");
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let months = MonthNames::portuguese();

        assert_eq!(months.resolve("JANEIRO"), Ok(Month::January));
        assert_eq!(months.resolve("dezembro"), Ok(Month::December));
        assert_eq!(months.resolve("sEtEmBrO"), Ok(Month::September));
    }

    #[test]
    fn test_resolve_tolerates_accents_and_whitespace() {
        let months = MonthNames::portuguese();

        assert_eq!(months.resolve("MARÇO"), Ok(Month::March));
        assert_eq!(months.resolve("Marco"), Ok(Month::March));
        assert_eq!(months.resolve("  março\u{a0}"), Ok(Month::March));
    }

    #[test]
    fn test_resolve_folds_any_combining_accent() {
        let months = MonthNames::portuguese();

        // Decomposed cedilla, as some pages encode it.
        assert_eq!(months.resolve("Marc\u{327}o"), Ok(Month::March));
        assert_eq!(months.resolve("Marčo"), Ok(Month::March));
        assert_eq!(months.resolve("Ābril"), Ok(Month::April));
    }

    #[test]
    fn test_unknown_names_fail() {
        let months = MonthNames::portuguese();

        for input in ["Janvier", "January", "13", "Jan", "", "   "] {
            assert!(months.resolve(input).is_err(), "{input:?} should not resolve");
        }
    }

    #[test]
    fn test_error_carries_trimmed_input() {
        let err = MonthParseError("Brumário".to_string());

        assert_eq!(MonthNames::portuguese().resolve(" Brumário "), Err(err.clone()));
        assert_eq!(err.to_string(), "unrecognized month name 'Brumário'");
    }

    #[test]
    fn test_injected_table_replaces_locale_data() {
        let months = MonthNames::new([("Jan", Month::January), ("Fev", Month::February)]);

        assert_eq!(months.resolve("jan"), Ok(Month::January));
        assert_eq!(months.resolve("FEV"), Ok(Month::February));
        assert!(months.resolve("Janeiro").is_err());
    }

    #[test]
    fn test_other_locales_are_supported() {
        let months = MonthNames::for_locale(Locale::en_US);

        assert_eq!(months.resolve("october"), Ok(Month::October));
    }
}
