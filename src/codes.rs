//! Caller-supplied vaccine code table.
//!
//! Maps product-code strings (CVX or NDC in the shipping application) to the
//! display name shown on a match. Lookups are exact and case-sensitive: no
//! trimming, no case folding, no format normalization.

use std::collections::HashMap;

/// Immutable product-code to display-name table. Built once by the caller and
/// only read during a scan.
#[derive(Clone, Debug, Default)]
pub struct CodeTable {
    entries: HashMap<String, String>,
}

impl CodeTable {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Built-in COVID-19 table: CVX codes (used by R4 records) and NDC codes
    /// (used by DSTU2 records) for the four products in circulation.
    pub fn covid19() -> Self {
        Self::new([
            // CVX
            ("207", "Moderna"),
            ("208", "Pfizer"),
            ("210", "AstraZeneca"),
            ("212", "Janssen"),
            // NDC
            ("80777-273-99", "Moderna"),
            ("59267-1000-2", "Pfizer"),
            ("59267-1000-3", "Pfizer"),
            ("0310-1222-15", "AstraZeneca"),
            ("59676-580-15", "Janssen"),
        ])
    }

    /// Exact-key lookup. `None` is the expected non-match case, not an error.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_is_exact() {
        let table = CodeTable::new([("208", "Pfizer")]);
        assert_eq!(table.lookup("208"), Some("Pfizer"));
        assert_eq!(table.lookup("209"), None);
    }

    #[test]
    fn lookup_does_not_normalize() {
        let table = CodeTable::new([("80777-273-99", "Moderna")]);
        // No trimming, no case folding, no separator stripping.
        assert_eq!(table.lookup(" 80777-273-99"), None);
        assert_eq!(table.lookup("80777-273-99 "), None);
        assert_eq!(table.lookup("8077727399"), None);
        assert_eq!(table.lookup("80777-273-99"), Some("Moderna"));
    }

    #[test]
    fn covid19_table_has_cvx_and_ndc_codes() {
        let table = CodeTable::covid19();
        assert_eq!(table.lookup("207"), Some("Moderna"));
        assert_eq!(table.lookup("208"), Some("Pfizer"));
        assert_eq!(table.lookup("210"), Some("AstraZeneca"));
        assert_eq!(table.lookup("212"), Some("Janssen"));
        assert_eq!(table.lookup("59267-1000-2"), Some("Pfizer"));
        assert_eq!(table.lookup("0310-1222-15"), Some("AstraZeneca"));
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn collects_from_iterator() {
        let table: CodeTable = vec![("207", "Moderna")].into_iter().collect();
        assert!(!table.is_empty());
        assert_eq!(table.lookup("207"), Some("Moderna"));
    }
}
