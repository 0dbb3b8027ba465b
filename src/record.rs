//! Raw record and date types shared across the decoding pipeline.
//!
//! A [`RawRecord`] is what the external record store hands us: opaque JSON
//! payload bytes plus the FHIR release the store declared for them. Nothing
//! here interprets the payload - that is the decoder's job.

use std::fmt;

use chrono::{DateTime, NaiveDate};

// =============================================================================
// SCHEMA VERSION
// =============================================================================

/// The FHIR release a record's payload is encoded under.
///
/// Closed enumeration: only DSTU2 and R4 are decodable. Anything else the
/// store reports maps to `Unrecognized`, which fails closed in the decoder so
/// a future release can never be silently mis-decoded as one of the known
/// shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Legacy DSTU2 release: administration date lives in the `date` field.
    Dstu2,
    /// Current R4 release: administration date lives in the `recorded` field.
    R4,
    /// Any release the store reported that we do not support.
    Unrecognized,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::Dstu2 => write!(f, "DSTU2"),
            SchemaVersion::R4 => write!(f, "R4"),
            SchemaVersion::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

// =============================================================================
// RAW RECORD
// =============================================================================

/// One immunization record as fetched from the external store: a version tag
/// plus the payload bytes, consumed read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    schema_version: SchemaVersion,
    payload: Vec<u8>,
}

impl RawRecord {
    pub fn new(schema_version: SchemaVersion, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            schema_version,
            payload: payload.into(),
        }
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

// =============================================================================
// FHIR DATETIME
// =============================================================================

/// A FHIR dateTime value, kept in its source textual form.
///
/// FHIR dates carry variable precision: `2021`, `2021-03`, `2021-03-01`, or a
/// full RFC 3339 timestamp. Matching never looks at the date; it is validated
/// on decode and displayed verbatim, so whatever precision the record carried
/// survives to the rendered result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FhirDateTime(String);

impl FhirDateTime {
    /// Validate `text` as one of the four FHIR dateTime precisions.
    ///
    /// Returns `None` for anything else (e.g. `03/01/2021`); the decoder
    /// turns that into a `MalformedDate` failure.
    pub fn parse(text: &str) -> Option<Self> {
        let valid = match text.len() {
            // Year only: YYYY
            4 => text.bytes().all(|b| b.is_ascii_digit()),
            // Year and month: YYYY-MM. Checked on the raw bytes: slicing the
            // str at a fixed index would panic on multi-byte text.
            7 => {
                let b = text.as_bytes();
                b[..4].iter().all(u8::is_ascii_digit)
                    && b[4] == b'-'
                    && b[5].is_ascii_digit()
                    && b[6].is_ascii_digit()
                    && matches!((b[5] - b'0') * 10 + (b[6] - b'0'), 1..=12)
            }
            // Full date: YYYY-MM-DD
            10 => NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok(),
            // Timestamp with offset
            _ => DateTime::parse_from_rfc3339(text).is_ok(),
        };
        valid.then(|| Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FhirDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
