//! User-facing message rendering.
//!
//! The engine returns values; the UI layer shows text. These helpers produce
//! the exact strings the application displays for the three outcome states,
//! so presentation stays out of the scan itself.

use crate::error::CheckError;
use crate::scan::MatchResult;

/// Shown when the batch is exhausted without a match.
pub const NO_RECORDS_MESSAGE: &str = "No Vaccination Records Found";

/// Caption for the trigger control, e.g. `Check COVID-19 Vaccination`.
pub fn check_caption(vaccine_type: &str) -> String {
    format!("Check {vaccine_type} Vaccination")
}

/// Render a scan outcome as its display line.
pub fn render_result(result: &MatchResult) -> String {
    match result {
        MatchResult::Matched(outcome) => outcome.render(),
        MatchResult::NotFound { .. } => NO_RECORDS_MESSAGE.to_string(),
    }
}

/// Render a fatal check error as its alert text.
pub fn render_error(error: &CheckError) -> String {
    match error {
        CheckError::NotAuthorized => "Not Authorized to access Health Records".to_string(),
        CheckError::StoreUnreadable(_) => "Unable to find any Immunization Records".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::matcher::MatchOutcome;
    use crate::record::FhirDateTime;

    #[test]
    fn caption_includes_vaccine_type() {
        assert_eq!(check_caption("COVID-19"), "Check COVID-19 Vaccination");
    }

    #[test]
    fn matched_renders_display_line() {
        let result = MatchResult::Matched(MatchOutcome {
            display_name: "Pfizer".to_string(),
            occurred_on: FhirDateTime::parse("2021-03-01").unwrap(),
        });
        assert_eq!(render_result(&result), "Pfizer. 2021-03-01");
    }

    #[test]
    fn not_found_renders_no_records_message() {
        let result = MatchResult::NotFound {
            decode_failures: 3,
            last_error: None,
        };
        assert_eq!(render_result(&result), NO_RECORDS_MESSAGE);
    }

    #[test]
    fn fatal_errors_render_alert_text() {
        assert_eq!(
            render_error(&CheckError::NotAuthorized),
            "Not Authorized to access Health Records"
        );
        assert_eq!(
            render_error(&CheckError::StoreUnreadable("io".into())),
            "Unable to find any Immunization Records"
        );
    }
}
