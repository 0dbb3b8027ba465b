//! vaccine-check: multi-schema FHIR immunization decoding and code matching.
//!
//! Given a batch of clinical immunization records and a caller-supplied table
//! of vaccine product codes, this crate decides whether a matching
//! vaccination is on file and reports the product name and administration
//! date. Records arrive encoded under one of two incompatible FHIR releases
//! (DSTU2 and R4) with different date-field semantics; the decoder
//! normalizes whichever shape is declared.
//!
//! The crate is pure logic with no I/O:
//! - `codes` - immutable product-code to display-name table
//! - `record` - version-tagged raw records and FHIR dateTime values
//! - `decoder` - per-release JSON decoding into a normalized fact
//! - `matcher` - exact code-table matching
//! - `scan` - ordered, short-circuiting scan with failure aggregation
//! - `store` - the trait seam for the external record store
//! - `report` - user-facing message strings
//! - `error` - per-record vs. fatal error taxonomy
//!
//! Record fetching, authorization, and presentation belong to the
//! surrounding application; see [`store::RecordStore`] for the one interface
//! it must provide.
//!
//! # Usage
//!
//! ```
//! use vaccine_check::{CodeTable, RawRecord, SchemaVersion, VaccinationCheck};
//!
//! let check = VaccinationCheck::new("COVID-19", CodeTable::covid19());
//! let record = RawRecord::new(
//!     SchemaVersion::R4,
//!     br#"{
//!         "resourceType": "Immunization",
//!         "vaccineCode": {"coding": [{"code": "208"}]},
//!         "recorded": "2021-03-01"
//!     }"#
//!     .to_vec(),
//! );
//! let result = check.scan(&[record]);
//! assert!(result.is_matched());
//! ```

pub mod codes;
pub mod decoder;
pub mod error;
pub mod matcher;
pub mod record;
pub mod report;
pub mod scan;
pub mod store;

// Re-export the common surface
pub use codes::CodeTable;
pub use decoder::{decode, NormalizedImmunization};
pub use error::{CheckError, DecodeCause, DecodeError};
pub use matcher::{match_fact, MatchOutcome};
pub use record::{FhirDateTime, RawRecord, SchemaVersion};
pub use scan::{scan, MatchResult, VaccinationCheck};
pub use store::{check_vaccination, RecordStore, RECORD_FETCH_LIMIT};
