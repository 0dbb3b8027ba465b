//! Error types for the vaccination check.
//!
//! Two tiers, matching how failures propagate:
//! - [`DecodeError`] is per-record and recoverable: the scan counts it and
//!   moves on to the next record.
//! - [`CheckError`] is fatal: the whole check aborts and the cause is
//!   surfaced to the caller once.

use thiserror::Error;

use crate::record::SchemaVersion;

/// Resource type reported when the payload could not be read at all.
pub const UNKNOWN_RESOURCE_TYPE: &str = "unknown";

// =============================================================================
// PER-RECORD ERRORS
// =============================================================================

/// Why a single record failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeCause {
    #[error("unsupported schema version ({0})")]
    UnsupportedVersion(SchemaVersion),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed date value '{0}'")]
    MalformedDate(String),

    #[error("payload is not valid FHIR JSON: {0}")]
    MalformedPayload(String),
}

/// Decode failure for one record.
///
/// Carries the resource type the payload declared (or
/// [`UNKNOWN_RESOURCE_TYPE`] when the payload was unreadable) so a failure
/// can be reported against the record that caused it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to decode {resource_type} record: {cause}")]
pub struct DecodeError {
    pub resource_type: String,
    pub cause: DecodeCause,
}

impl DecodeError {
    pub fn new(resource_type: impl Into<String>, cause: DecodeCause) -> Self {
        Self {
            resource_type: resource_type.into(),
            cause,
        }
    }
}

// =============================================================================
// FATAL ERRORS
// =============================================================================

/// Terminal failure of the whole check. Distinct from per-record decode
/// failures: these abort immediately and are reported verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("not authorized to read clinical records")]
    NotAuthorized,

    #[error("record store is unreadable: {0}")]
    StoreUnreadable(String),
}
