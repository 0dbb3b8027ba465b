//! Code-table matching for decoded immunization facts.

use crate::codes::CodeTable;
use crate::decoder::NormalizedImmunization;
use crate::record::FhirDateTime;

/// A confirmed vaccination: the table's display name for the matched product
/// plus the administration date from the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub display_name: String,
    pub occurred_on: FhirDateTime,
}

impl MatchOutcome {
    /// The human-readable result line, e.g. `Pfizer. 2021-03-01`. The date
    /// renders in its source precision.
    pub fn render(&self) -> String {
        format!("{}. {}", self.display_name, self.occurred_on)
    }
}

/// Look the fact's product code up in the table.
///
/// `None` means this record is not the vaccination we are looking for; that
/// is the expected case for most records and the scan moves on.
pub fn match_fact(fact: &NormalizedImmunization, table: &CodeTable) -> Option<MatchOutcome> {
    table.lookup(&fact.product_code).map(|name| MatchOutcome {
        display_name: name.to_string(),
        occurred_on: fact.occurred_on.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fact(code: &str, date: &str) -> NormalizedImmunization {
        NormalizedImmunization {
            product_code: code.to_string(),
            occurred_on: FhirDateTime::parse(date).unwrap(),
        }
    }

    #[test]
    fn hit_iff_code_is_a_table_key() {
        let table = CodeTable::new([("208", "Pfizer")]);
        assert!(match_fact(&fact("208", "2021-03-01"), &table).is_some());
        assert!(match_fact(&fact("207", "2021-03-01"), &table).is_none());
        // Exact equality only.
        assert!(match_fact(&fact("208 ", "2021-03-01"), &table).is_none());
        assert!(match_fact(&fact("0208", "2021-03-01"), &table).is_none());
    }

    #[test]
    fn renders_name_dot_date() {
        let table = CodeTable::new([("208", "Pfizer")]);
        let outcome = match_fact(&fact("208", "2021-03-01"), &table).unwrap();
        assert_eq!(outcome.render(), "Pfizer. 2021-03-01");
    }

    #[test]
    fn render_keeps_timestamp_precision() {
        let table = CodeTable::new([("207", "Moderna")]);
        let outcome = match_fact(&fact("207", "2021-03-01T10:15:00+00:00"), &table).unwrap();
        assert_eq!(outcome.render(), "Moderna. 2021-03-01T10:15:00+00:00");
    }
}
