//! Record-store seam.
//!
//! Fetching clinical records (and the authorization grant that precedes it)
//! belongs to the surrounding application; the engine only defines the
//! interface it consumes. A store implementation is expected to deliver
//! records most-recent-first and to surface authorization or availability
//! problems as [`CheckError`], which aborts the whole check.

use tracing::debug;

use crate::error::CheckError;
use crate::record::RawRecord;
use crate::scan::{MatchResult, VaccinationCheck};

/// Upper bound on how many records one check fetches per store query.
pub const RECORD_FETCH_LIMIT: usize = 100;

/// The interface the engine consumes from the external record store.
pub trait RecordStore {
    /// Fetch up to `limit` immunization records, most-recent-first.
    ///
    /// A denied authorization grant is `CheckError::NotAuthorized`; a store
    /// that cannot produce records at all is `CheckError::StoreUnreadable`.
    fn fetch_immunizations(&self, limit: usize) -> Result<Vec<RawRecord>, CheckError>;
}

/// Run one full vaccination check: fetch a batch from the store, then scan it.
///
/// Fatal store errors short-circuit before any scanning happens; everything
/// per-record stays inside the returned [`MatchResult`].
pub fn check_vaccination<S: RecordStore>(
    store: &S,
    check: &VaccinationCheck,
) -> Result<MatchResult, CheckError> {
    let records = store.fetch_immunizations(RECORD_FETCH_LIMIT)?;
    debug!(
        records = records.len(),
        vaccine_type = check.vaccine_type(),
        "fetched immunization batch"
    );
    Ok(check.scan(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::codes::CodeTable;
    use crate::record::SchemaVersion;

    struct FixedStore(Vec<RawRecord>);

    impl RecordStore for FixedStore {
        fn fetch_immunizations(&self, limit: usize) -> Result<Vec<RawRecord>, CheckError> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }
    }

    struct DeniedStore;

    impl RecordStore for DeniedStore {
        fn fetch_immunizations(&self, _limit: usize) -> Result<Vec<RawRecord>, CheckError> {
            Err(CheckError::NotAuthorized)
        }
    }

    fn covid_check() -> VaccinationCheck {
        VaccinationCheck::new("COVID-19", CodeTable::covid19())
    }

    #[test]
    fn denied_authorization_is_fatal_and_scans_nothing() {
        let err = check_vaccination(&DeniedStore, &covid_check()).unwrap_err();
        assert_eq!(err, CheckError::NotAuthorized);
    }

    #[test]
    fn unreadable_store_is_fatal() {
        struct BrokenStore;
        impl RecordStore for BrokenStore {
            fn fetch_immunizations(&self, _limit: usize) -> Result<Vec<RawRecord>, CheckError> {
                Err(CheckError::StoreUnreadable("query failed".into()))
            }
        }
        let err = check_vaccination(&BrokenStore, &covid_check()).unwrap_err();
        assert_eq!(err, CheckError::StoreUnreadable("query failed".into()));
    }

    #[test]
    fn fetched_batch_is_scanned_in_store_order() {
        let payload = json!({
            "resourceType": "Immunization",
            "vaccineCode": {"coding": [{"code": "207"}]},
            "recorded": "2021-07-04"
        });
        let store = FixedStore(vec![RawRecord::new(
            SchemaVersion::R4,
            serde_json::to_vec(&payload).unwrap(),
        )]);
        let result = check_vaccination(&store, &covid_check()).unwrap();
        match result {
            MatchResult::Matched(outcome) => assert_eq!(outcome.render(), "Moderna. 2021-07-04"),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn empty_store_yields_not_found() {
        let result = check_vaccination(&FixedStore(Vec::new()), &covid_check()).unwrap();
        assert_eq!(
            result,
            MatchResult::NotFound {
                decode_failures: 0,
                last_error: None,
            }
        );
    }
}
